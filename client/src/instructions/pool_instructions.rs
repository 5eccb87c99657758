use anchor_client::{Client, Cluster};
use anyhow::Result;
use plexus_pool::{stake_address, states::Pool};
use solana_sdk::{instruction::Instruction, pubkey::Pubkey, system_program};
use std::rc::Rc;

use plexus_pool::accounts as pool_accounts;
use plexus_pool::instruction as pool_instructions;

use super::super::{read_keypair_file, ClientConfig};

pub fn deposit_instr(
    config: &ClientConfig,
    pool_key: Pubkey,
    pool: &Pool,
    owner_token: Pubkey,
    token_program: Pubkey,
    amount: u64,
) -> Result<Vec<Instruction>> {
    let payer = read_keypair_file(&config.payer_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    let client = Client::new(url, Rc::new(payer));
    let program = client.program(config.plexus_pool_program)?;

    let instructions = program
        .request()
        .accounts(pool_accounts::Deposit {
            owner: program.payer(),
            pool: pool_key,
            stake: stake_address(&pool_key, &program.payer()).0,
            owner_token,
            stake_vault: pool.stake_vault,
            token_mint: pool.token_mint,
            token_program,
            system_program: system_program::id(),
        })
        .args(pool_instructions::Deposit { amount })
        .instructions()?;
    Ok(instructions)
}

pub fn withdraw_instr(
    config: &ClientConfig,
    pool_key: Pubkey,
    pool: &Pool,
    owner_token: Pubkey,
    token_program: Pubkey,
) -> Result<Vec<Instruction>> {
    let payer = read_keypair_file(&config.payer_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    let client = Client::new(url, Rc::new(payer));
    let program = client.program(config.plexus_pool_program)?;

    let instructions = program
        .request()
        .accounts(pool_accounts::Withdraw {
            owner: program.payer(),
            pool: pool_key,
            stake: stake_address(&pool_key, &program.payer()).0,
            owner_token,
            stake_vault: pool.stake_vault,
            token_mint: pool.token_mint,
            token_program,
        })
        .args(pool_instructions::Withdraw {})
        .instructions()?;
    Ok(instructions)
}

pub fn claim_reward_instr(
    config: &ClientConfig,
    pool_key: Pubkey,
    pool: &Pool,
    owner_token: Pubkey,
    token_program: Pubkey,
) -> Result<Vec<Instruction>> {
    let payer = read_keypair_file(&config.payer_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    let client = Client::new(url, Rc::new(payer));
    let program = client.program(config.plexus_pool_program)?;

    let instructions = program
        .request()
        .accounts(pool_accounts::ClaimReward {
            owner: program.payer(),
            pool: pool_key,
            stake: stake_address(&pool_key, &program.payer()).0,
            owner_token,
            reward_vault: pool.reward_vault,
            token_mint: pool.token_mint,
            token_program,
        })
        .args(pool_instructions::ClaimReward {})
        .instructions()?;
    Ok(instructions)
}

pub fn get_stake_instr(config: &ClientConfig, pool: Pubkey, owner: Pubkey) -> Result<Vec<Instruction>> {
    let payer = read_keypair_file(&config.payer_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    let client = Client::new(url, Rc::new(payer));
    let program = client.program(config.plexus_pool_program)?;

    let instructions = program
        .request()
        .accounts(pool_accounts::GetStake {
            pool,
            stake: stake_address(&pool, &owner).0,
        })
        .args(pool_instructions::GetStake { owner })
        .instructions()?;
    Ok(instructions)
}

pub fn reward_balance_available_instr(config: &ClientConfig, pool: Pubkey) -> Result<Vec<Instruction>> {
    let payer = read_keypair_file(&config.payer_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    let client = Client::new(url, Rc::new(payer));
    let program = client.program(config.plexus_pool_program)?;

    let instructions = program
        .request()
        .accounts(pool_accounts::RewardBalanceAvailable { pool })
        .args(pool_instructions::RewardBalanceAvailable {})
        .instructions()?;
    Ok(instructions)
}
