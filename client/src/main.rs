use anyhow::{format_err, Result};
use clap::Parser;
use configparser::ini::Ini;
use plexus_pool::states::StakeView;
use serde::Serialize;
use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use spl_associated_token_account::get_associated_token_address_with_program_id;
use std::str::FromStr;

mod instructions;
use instructions::pool_instructions::*;
use instructions::registry_instructions::*;
use instructions::rpc::*;
use instructions::utils::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    http_url: String,
    ws_url: String,
    payer_path: String,
    admin_path: String,
    plexus_registry_program: Pubkey,
    plexus_pool_program: Pubkey,
}

fn get_required(config: &Ini, key: &str) -> Result<String> {
    match config.get("Global", key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(format_err!("{} must not be empty", key)),
    }
}

fn load_cfg(client_config: &str) -> Result<ClientConfig> {
    let mut config = Ini::new();
    config.load(client_config).map_err(|e| format_err!(e))?;

    let http_url = get_required(&config, "http_url")?;
    let ws_url = get_required(&config, "ws_url")?;
    let payer_path = get_required(&config, "payer_path")?;
    let admin_path = get_required(&config, "admin_path")?;
    let plexus_registry_program =
        Pubkey::from_str(&get_required(&config, "plexus_registry_program")?)?;
    let plexus_pool_program = Pubkey::from_str(&get_required(&config, "plexus_pool_program")?)?;
    // Account addresses are derived against the program ids this client was built with.
    if plexus_registry_program != plexus_registry::ID || plexus_pool_program != plexus_pool::ID {
        return Err(format_err!(
            "configured programs do not match the built ids {} / {}",
            plexus_registry::ID,
            plexus_pool::ID
        ));
    }

    Ok(ClientConfig {
        http_url,
        ws_url,
        payer_path,
        admin_path,
        plexus_registry_program,
        plexus_pool_program,
    })
}

fn read_keypair_file(s: &str) -> Result<Keypair> {
    solana_sdk::signature::read_keypair_file(s)
        .map_err(|_| format_err!("failed to read keypair from {}", s))
}

#[derive(Debug, Parser)]
pub struct Opts {
    #[clap(subcommand)]
    pub command: PlexusCommands,
}

#[derive(Debug, Parser)]
pub enum PlexusCommands {
    InitializeRegistry {
        #[arg(long)]
        token_mint: Pubkey,
    },
    CreatePool {
        #[arg(long)]
        reward_rate_bps: u64,
        #[arg(long)]
        lock_duration_seconds: u64,
        /// Hex salt; a random one is generated when omitted.
        #[arg(long)]
        salt: Option<String>,
    },
    PredictAddress {
        #[arg(long)]
        salt: String,
    },
    DepositReward {
        #[arg(long)]
        total_amount: u64,
        #[arg(long, value_delimiter = ',')]
        pools: Vec<Pubkey>,
        #[arg(long, value_delimiter = ',')]
        weights_bps: Vec<u16>,
    },
    Deposit {
        #[arg(long)]
        pool: Pubkey,
        #[arg(long)]
        amount: u64,
    },
    Withdraw {
        #[arg(long)]
        pool: Pubkey,
    },
    ClaimReward {
        #[arg(long)]
        pool: Pubkey,
    },
    GetStake {
        #[arg(long)]
        pool: Pubkey,
        /// Defaults to the payer.
        #[arg(long)]
        owner: Option<Pubkey>,
    },
    PoolRewardBalance {
        #[arg(long)]
        pool: Pubkey,
    },
}

#[derive(Serialize)]
struct StakeReport {
    pool: String,
    owner: String,
    principal: u64,
    banked_reward: u64,
    projected_reward: u64,
    last_action_time: i64,
}

impl StakeReport {
    fn new(pool: &Pubkey, owner: &Pubkey, view: StakeView) -> Self {
        Self {
            pool: pool.to_string(),
            owner: owner.to_string(),
            principal: view.principal,
            banked_reward: view.banked_reward,
            projected_reward: view.projected_reward,
            last_action_time: view.last_action_time,
        }
    }
}

fn sign_and_send(
    rpc_client: &RpcClient,
    instructions: &[Instruction],
    payer: &Keypair,
    signers: &[&Keypair],
) -> Result<()> {
    let recent_hash = rpc_client.get_latest_blockhash()?;
    let txn = Transaction::new_signed_with_payer(
        instructions,
        Some(&payer.pubkey()),
        signers,
        recent_hash,
    );
    let signature = send_txn(rpc_client, &txn, true)?;
    println!("{}", signature);
    Ok(())
}

fn simulate<T: anchor_lang::AnchorDeserialize>(
    rpc_client: &RpcClient,
    instructions: &[Instruction],
    payer: &Keypair,
) -> Result<T> {
    let recent_hash = rpc_client.get_latest_blockhash()?;
    let txn = Transaction::new_signed_with_payer(
        instructions,
        Some(&payer.pubkey()),
        &[payer],
        recent_hash,
    );
    simulate_view(rpc_client, &txn)
}

fn main() -> Result<()> {
    let client_config = "client_config.ini";
    let config = load_cfg(client_config)?;
    let payer = read_keypair_file(&config.payer_path)?;
    let rpc_client = RpcClient::new(config.http_url.to_string());

    let opts = Opts::parse();
    match opts.command {
        PlexusCommands::InitializeRegistry { token_mint } => {
            let admin = read_keypair_file(&config.admin_path)?;
            let ixs = initialize_registry_instr(&config, token_mint)?;
            sign_and_send(&rpc_client, &ixs, &payer, &[&payer, &admin])?;
        }
        PlexusCommands::CreatePool {
            reward_rate_bps,
            lock_duration_seconds,
            salt,
        } => {
            let salt = match salt {
                Some(s) => parse_salt(&s)?,
                None => random_salt(),
            };
            let registry = fetch_registry_config(&rpc_client)?;
            let token_program = get_token_program(&rpc_client, &registry.token_mint)?;
            let ixs = create_pool_instr(
                &config,
                registry.token_mint,
                token_program,
                reward_rate_bps,
                lock_duration_seconds,
                salt,
            )?;
            println!("salt: 0x{}", hex::encode(salt));
            println!(
                "pool: {}",
                plexus_registry::predict_pool_address(&salt)
            );
            sign_and_send(&rpc_client, &ixs, &payer, &[&payer])?;
        }
        PlexusCommands::PredictAddress { salt } => {
            let salt = parse_salt(&salt)?;
            let ixs = predict_address_instr(&config, salt)?;
            let predicted: Pubkey = simulate(&rpc_client, &ixs, &payer)?;
            println!("{}", predicted);
        }
        PlexusCommands::DepositReward {
            total_amount,
            pools,
            weights_bps,
        } => {
            let registry = fetch_registry_config(&rpc_client)?;
            let token_program = get_token_program(&rpc_client, &registry.token_mint)?;
            let funder_token = get_associated_token_address_with_program_id(
                &payer.pubkey(),
                &registry.token_mint,
                &token_program,
            );
            let ixs = deposit_reward_instr(
                &config,
                funder_token,
                registry.token_mint,
                token_program,
                total_amount,
                pools,
                weights_bps,
            )?;
            sign_and_send(&rpc_client, &ixs, &payer, &[&payer])?;
        }
        PlexusCommands::Deposit { pool, amount } => {
            let pool_state = fetch_pool(&rpc_client, &pool)?;
            let token_program = get_token_program(&rpc_client, &pool_state.token_mint)?;
            let owner_token = get_associated_token_address_with_program_id(
                &payer.pubkey(),
                &pool_state.token_mint,
                &token_program,
            );
            let ixs = deposit_instr(&config, pool, &pool_state, owner_token, token_program, amount)?;
            sign_and_send(&rpc_client, &ixs, &payer, &[&payer])?;
        }
        PlexusCommands::Withdraw { pool } => {
            let pool_state = fetch_pool(&rpc_client, &pool)?;
            let token_program = get_token_program(&rpc_client, &pool_state.token_mint)?;
            let owner_token = get_associated_token_address_with_program_id(
                &payer.pubkey(),
                &pool_state.token_mint,
                &token_program,
            );
            let ixs = withdraw_instr(&config, pool, &pool_state, owner_token, token_program)?;
            sign_and_send(&rpc_client, &ixs, &payer, &[&payer])?;
        }
        PlexusCommands::ClaimReward { pool } => {
            let pool_state = fetch_pool(&rpc_client, &pool)?;
            let token_program = get_token_program(&rpc_client, &pool_state.token_mint)?;
            let owner_token = get_associated_token_address_with_program_id(
                &payer.pubkey(),
                &pool_state.token_mint,
                &token_program,
            );
            let ixs = claim_reward_instr(&config, pool, &pool_state, owner_token, token_program)?;
            sign_and_send(&rpc_client, &ixs, &payer, &[&payer])?;
        }
        PlexusCommands::GetStake { pool, owner } => {
            let owner = owner.unwrap_or_else(|| payer.pubkey());
            let ixs = get_stake_instr(&config, pool, owner)?;
            let view: StakeView = simulate(&rpc_client, &ixs, &payer)?;
            let report = StakeReport::new(&pool, &owner, view);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        PlexusCommands::PoolRewardBalance { pool } => {
            let ixs = pool_reward_balance_instr(&config, pool)?;
            let balance: u64 = simulate(&rpc_client, &ixs, &payer)?;
            let available: u64 = simulate(
                &rpc_client,
                &reward_balance_available_instr(&config, pool)?,
                &payer,
            )?;
            println!(
                "{}",
                serde_json::json!({
                    "pool": pool.to_string(),
                    "reward_balance": balance,
                    "reward_balance_available": available,
                })
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_loads() {
        let config = load_cfg("client_config.ini").unwrap();
        assert_eq!(config.plexus_registry_program, plexus_registry::ID);
        assert_eq!(config.plexus_pool_program, plexus_pool::ID);
        assert!(config.payer_path.starts_with('/'));
    }

    #[test]
    fn foreign_program_id_is_rejected() {
        let path = std::env::temp_dir().join("plexus_foreign_program.ini");
        let bundled = std::fs::read_to_string("client_config.ini").unwrap();
        let foreign = bundled.replace(&plexus_pool::ID.to_string(), &Pubkey::new_unique().to_string());
        std::fs::write(&path, foreign).unwrap();

        assert!(load_cfg(path.to_str().unwrap()).is_err());
    }
}
