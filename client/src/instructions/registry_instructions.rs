use anchor_client::{Client, Cluster};
use anchor_lang::prelude::AccountMeta;
use anyhow::Result;
use solana_sdk::{instruction::Instruction, pubkey::Pubkey, system_program};
use std::rc::Rc;

use plexus_registry::accounts as registry_accounts;
use plexus_registry::instruction as registry_instructions;

use plexus_pool::{pool_address, reward_vault_address, stake_vault_address};
use plexus_registry::{pool_record_address, registry_authority_address, registry_config_address};

use super::super::{read_keypair_file, ClientConfig};

pub fn initialize_registry_instr(
    config: &ClientConfig,
    token_mint: Pubkey,
) -> Result<Vec<Instruction>> {
    let admin = read_keypair_file(&config.admin_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    let client = Client::new(url, Rc::new(admin));
    let program = client.program(config.plexus_registry_program)?;

    let instructions = program
        .request()
        .accounts(registry_accounts::InitializeRegistry {
            admin: program.payer(),
            registry_config: registry_config_address().0,
            registry_authority: registry_authority_address().0,
            token_mint,
            system_program: system_program::id(),
        })
        .args(registry_instructions::InitializeRegistry {})
        .instructions()?;
    Ok(instructions)
}

pub fn create_pool_instr(
    config: &ClientConfig,
    token_mint: Pubkey,
    token_program: Pubkey,
    reward_rate_bps: u64,
    lock_duration_seconds: u64,
    salt: [u8; 32],
) -> Result<Vec<Instruction>> {
    let payer = read_keypair_file(&config.payer_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    let client = Client::new(url, Rc::new(payer));
    let program = client.program(config.plexus_registry_program)?;

    let pool = pool_address(&salt).0;
    let instructions = program
        .request()
        .accounts(registry_accounts::CreatePool {
            payer: program.payer(),
            registry_config: registry_config_address().0,
            registry_authority: registry_authority_address().0,
            pool_record: pool_record_address(&salt).0,
            pool,
            stake_vault: stake_vault_address(&pool).0,
            reward_vault: reward_vault_address(&pool).0,
            token_mint,
            pool_program: config.plexus_pool_program,
            token_program,
            system_program: system_program::id(),
        })
        .args(registry_instructions::CreatePool {
            reward_rate_bps,
            lock_duration_seconds,
            salt,
        })
        .instructions()?;
    Ok(instructions)
}

pub fn predict_address_instr(config: &ClientConfig, salt: [u8; 32]) -> Result<Vec<Instruction>> {
    let payer = read_keypair_file(&config.payer_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    let client = Client::new(url, Rc::new(payer));
    let program = client.program(config.plexus_registry_program)?;

    let instructions = program
        .request()
        .accounts(registry_accounts::PredictAddress {})
        .args(registry_instructions::PredictAddress { salt })
        .instructions()?;
    Ok(instructions)
}

/// Builds `deposit_reward`, appending each pool and its reward vault as
/// remaining accounts in `pool_ids` order.
pub fn deposit_reward_instr(
    config: &ClientConfig,
    funder_token: Pubkey,
    token_mint: Pubkey,
    token_program: Pubkey,
    total_amount: u64,
    pool_ids: Vec<Pubkey>,
    weights_bps: Vec<u16>,
) -> Result<Vec<Instruction>> {
    let payer = read_keypair_file(&config.payer_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    let client = Client::new(url, Rc::new(payer));
    let program = client.program(config.plexus_registry_program)?;

    let remaining_accounts: Vec<AccountMeta> = pool_ids
        .iter()
        .flat_map(|pool| {
            [
                AccountMeta::new(*pool, false),
                AccountMeta::new(reward_vault_address(pool).0, false),
            ]
        })
        .collect();

    let instructions = program
        .request()
        .accounts(registry_accounts::DepositReward {
            funder: program.payer(),
            registry_config: registry_config_address().0,
            registry_authority: registry_authority_address().0,
            funder_token,
            token_mint,
            pool_program: config.plexus_pool_program,
            token_program,
        })
        .accounts(remaining_accounts)
        .args(registry_instructions::DepositReward {
            total_amount,
            pool_ids,
            weights_bps,
        })
        .instructions()?;
    Ok(instructions)
}

pub fn pool_reward_balance_instr(config: &ClientConfig, pool: Pubkey) -> Result<Vec<Instruction>> {
    let payer = read_keypair_file(&config.payer_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    let client = Client::new(url, Rc::new(payer));
    let program = client.program(config.plexus_registry_program)?;

    let instructions = program
        .request()
        .accounts(registry_accounts::PoolRewardBalance { pool })
        .args(registry_instructions::PoolRewardBalance {})
        .instructions()?;
    Ok(instructions)
}
