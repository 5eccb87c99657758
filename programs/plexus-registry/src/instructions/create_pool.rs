use crate::error::ErrorCode;
use crate::states::{PoolCreated, PoolRecord, RegistryConfig};
use crate::{POOL_RECORD_SEED, REGISTRY_AUTH_SEED, REGISTRY_CONFIG_SEED};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenInterface};
use plexus_pool::program::PlexusPool;

/// Accounts context for `create_pool`.
#[derive(Accounts)]
#[instruction(reward_rate_bps: u64, lock_duration_seconds: u64, salt: [u8; 32])]
pub struct CreatePool<'info> {
    /// Pays rent for the pool, its vaults and the record.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_CONFIG_SEED.as_bytes()],
        bump = registry_config.bump,
    )]
    pub registry_config: Box<Account<'info, RegistryConfig>>,

    /// CHECK: PDA derivation enforced by seeds; used only as a signer.
    #[account(
        seeds = [REGISTRY_AUTH_SEED.as_bytes()],
        bump = registry_config.authority_bump,
    )]
    pub registry_authority: UncheckedAccount<'info>,

    /// Salt → pool entry; populated means the salt is taken.
    #[account(
        init_if_needed,
        seeds = [POOL_RECORD_SEED.as_bytes(), salt.as_ref()],
        bump,
        payer = payer,
        space = PoolRecord::LEN
    )]
    pub pool_record: Box<Account<'info, PoolRecord>>,

    /// CHECK: must be the predicted address; created by the pool program.
    #[account(
        mut,
        address = crate::predict_pool_address(&salt) @ ErrorCode::InvalidPool
    )]
    pub pool: UncheckedAccount<'info>,

    /// CHECK: seeds checked by the pool program on creation.
    #[account(mut)]
    pub stake_vault: UncheckedAccount<'info>,

    /// CHECK: seeds checked by the pool program on creation.
    #[account(mut)]
    pub reward_vault: UncheckedAccount<'info>,

    #[account(address = registry_config.token_mint @ ErrorCode::InvalidMint)]
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    pub pool_program: Program<'info, PlexusPool>,

    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

/// Instantiates the pool for `salt` and records it.
///
/// Steps:
/// 1. Validate the terms (`InvalidConfig`).
/// 2. Reject a salt whose pool or record already exists (`DuplicateSalt`).
/// 3. CPI `plexus_pool::initialize_pool`, signed by the registry authority.
/// 4. Populate the record and bump the pool count.
/// 5. Emit `PoolCreated` and return the pool address.
pub fn create_pool(
    ctx: Context<CreatePool>,
    reward_rate_bps: u64,
    lock_duration_seconds: u64,
    salt: [u8; 32],
) -> Result<Pubkey> {
    require_gt!(reward_rate_bps, 0, ErrorCode::InvalidConfig);
    require_gt!(lock_duration_seconds, 0, ErrorCode::InvalidConfig);
    ctx.accounts
        .pool_record
        .ensure_vacant(ctx.accounts.pool.data_is_empty())?;

    let authority_bump = ctx.accounts.registry_config.authority_bump;
    let signer_seeds: &[&[&[u8]]] = &[&[REGISTRY_AUTH_SEED.as_bytes(), &[authority_bump]]];
    plexus_pool::cpi::initialize_pool(
        CpiContext::new_with_signer(
            ctx.accounts.pool_program.to_account_info(),
            plexus_pool::cpi::accounts::InitializePool {
                payer: ctx.accounts.payer.to_account_info(),
                registry_authority: ctx.accounts.registry_authority.to_account_info(),
                pool: ctx.accounts.pool.to_account_info(),
                token_mint: ctx.accounts.token_mint.to_account_info(),
                stake_vault: ctx.accounts.stake_vault.to_account_info(),
                reward_vault: ctx.accounts.reward_vault.to_account_info(),
                token_program: ctx.accounts.token_program.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
            },
            signer_seeds,
        ),
        salt,
        reward_rate_bps,
        lock_duration_seconds,
    )?;

    let pool = ctx.accounts.pool.key();
    let index = ctx.accounts.registry_config.next_pool_index()?;

    ctx.accounts.pool_record.populate(
        ctx.bumps.pool_record,
        salt,
        pool,
        index,
        reward_rate_bps,
        lock_duration_seconds,
        Clock::get()?.unix_timestamp,
    );

    msg!("Pool {} created at {}", index, pool);

    emit!(PoolCreated {
        pool,
        salt,
        index,
        reward_rate_bps,
        lock_duration_seconds,
    });

    Ok(pool)
}
