use crate::error::ErrorCode;
use crate::states::{Pool, PoolConfig, PoolInitialized};
use crate::{POOL_SEED, REWARD_VAULT_SEED, STAKE_VAULT_SEED};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Accounts context for `initialize_pool`.
///
/// Only reachable through the registry: `registry_authority` must be the
/// registry program's authority PDA, which signs via CPI.
#[derive(Accounts)]
#[instruction(salt: [u8; 32])]
pub struct InitializePool<'info> {
    /// Rent payer for the pool and both vaults.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Registry authority PDA.
    #[account(
        address = crate::registry_authority_address() @ ErrorCode::InvalidRegistry
    )]
    pub registry_authority: Signer<'info>,

    /// The pool, addressed by its salt.
    #[account(
        init,
        seeds = [POOL_SEED.as_bytes(), salt.as_ref()],
        bump,
        payer = payer,
        space = Pool::LEN
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// Mint staked and paid as reward.
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Principal vault, owned by the pool PDA.
    #[account(
        init,
        seeds = [STAKE_VAULT_SEED.as_bytes(), pool.key().as_ref()],
        bump,
        payer = payer,
        token::mint = token_mint,
        token::authority = pool,
        token::token_program = token_program,
    )]
    pub stake_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Reward budget vault, owned by the pool PDA.
    #[account(
        init,
        seeds = [REWARD_VAULT_SEED.as_bytes(), pool.key().as_ref()],
        bump,
        payer = payer,
        token::mint = token_mint,
        token::authority = pool,
        token::token_program = token_program,
    )]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

/// Creates a pool with fixed reward terms.
///
/// Steps:
/// 1. Validate the terms (`InvalidConfig` unless both are positive).
/// 2. Record addresses, terms and creation time on the pool account.
/// 3. Emit `PoolInitialized`.
pub fn initialize_pool(
    ctx: Context<InitializePool>,
    salt: [u8; 32],
    reward_rate_bps: u64,
    lock_duration_seconds: u64,
) -> Result<()> {
    let config = PoolConfig::new(reward_rate_bps, lock_duration_seconds)?;
    let now = Clock::get()?.unix_timestamp;

    let pool = &mut ctx.accounts.pool;
    pool.bump = ctx.bumps.pool;
    pool.salt = salt;
    pool.registry = ctx.accounts.registry_authority.key();
    pool.token_mint = ctx.accounts.token_mint.key();
    pool.stake_vault = ctx.accounts.stake_vault.key();
    pool.reward_vault = ctx.accounts.reward_vault.key();
    pool.config = config;
    pool.created_at = now;

    msg!("Pool initialized");

    emit!(PoolInitialized {
        pool: pool.key(),
        salt,
        registry: pool.registry,
        token_mint: pool.token_mint,
        reward_rate_bps,
        lock_duration_seconds,
    });

    Ok(())
}
