use crate::error::ErrorCode;
use crate::states::{Pool, Stake, Withdrawn};
use crate::utils::transfer_from_pool_vault_to_user;
use crate::{POOL_SEED, STAKE_SEED};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Accounts context for `withdraw`.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        has_one = token_mint @ ErrorCode::InvalidMint,
        has_one = stake_vault @ ErrorCode::InvalidVault,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        mut,
        seeds = [
            STAKE_SEED.as_bytes(),
            pool.key().as_ref(),
            owner.key().as_ref()
        ],
        bump = stake.bump,
        has_one = owner,
    )]
    pub stake: Box<Account<'info, Stake>>,

    /// Receives the principal.
    #[account(
        mut,
        token::mint = token_mint,
    )]
    pub owner_token: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub stake_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Returns the whole principal once the lock has run out.
///
/// Steps:
/// 1. Require principal and an elapsed lock (`LockActive`).
/// 2. Bank the remaining accrual; zero principal and projection.
/// 3. Transfer the principal from the stake vault, signed by the pool.
/// 4. Emit `Withdrawn`.
///
/// Banked reward stays on the record for a later `claim_reward`.
pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let pool = &mut ctx.accounts.pool;
    let stake = &mut ctx.accounts.stake;
    let withdrawal = stake.apply_withdraw(&pool.config, now)?;
    pool.record_withdrawal(withdrawal.principal)?;

    #[cfg(feature = "enable-log")]
    msg!(
        "withdraw: principal {} accrued {} banked {}",
        withdrawal.principal,
        withdrawal.accrued,
        stake.banked_reward
    );

    let salt = pool.salt;
    let bump = pool.bump;
    let event = Withdrawn {
        pool: pool.key(),
        owner: stake.owner,
        amount: withdrawal.principal,
        accrued: withdrawal.accrued,
        timestamp: now,
    };

    transfer_from_pool_vault_to_user(
        ctx.accounts.pool.to_account_info(),
        ctx.accounts.stake_vault.to_account_info(),
        ctx.accounts.owner_token.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        withdrawal.principal,
        ctx.accounts.token_mint.decimals,
        &[&[POOL_SEED.as_bytes(), salt.as_ref(), &[bump]]],
    )?;

    emit!(event);

    Ok(())
}
