use crate::error::ErrorCode;
use crate::states::{Deposited, Pool, Stake};
use crate::utils::{ensure_balance, transfer_from_user_to_pool_vault};
use crate::STAKE_SEED;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Accounts context for `deposit`.
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// Participant staking; pays for their stake account on first deposit.
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        has_one = token_mint @ ErrorCode::InvalidMint,
        has_one = stake_vault @ ErrorCode::InvalidVault,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// Participant's stake record (derived by STAKE_SEED + pool + owner).
    #[account(
        init_if_needed,
        seeds = [
            STAKE_SEED.as_bytes(),
            pool.key().as_ref(),
            owner.key().as_ref()
        ],
        bump,
        payer = owner,
        space = Stake::LEN
    )]
    pub stake: Box<Account<'info, Stake>>,

    /// Source of the principal.
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = owner,
    )]
    pub owner_token: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub stake_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

/// Stakes `amount` more principal.
///
/// Steps:
/// 1. Initialize the stake record on first use.
/// 2. Check the owner can cover `amount` (`TransferFailed`).
/// 3. Bank reward on the current principal, capped at one lock period.
/// 4. Add `amount`, restart the lock at `now`, recompute the projection.
/// 5. Pull `amount` into the stake vault.
/// 6. Emit `Deposited`.
pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let stake = &mut ctx.accounts.stake;
    if stake.owner == Pubkey::default() {
        stake.bump = ctx.bumps.stake;
        stake.pool = ctx.accounts.pool.key();
        stake.owner = ctx.accounts.owner.key();
    }

    ensure_balance(ctx.accounts.owner_token.amount, amount)?;

    let pool = &mut ctx.accounts.pool;
    let activated = stake.principal == 0;
    let accrued = stake.apply_deposit(&pool.config, amount, now)?;
    pool.record_deposit(amount, activated)?;

    #[cfg(feature = "enable-log")]
    msg!(
        "deposit: amount {} accrued {} principal {} banked {}",
        amount,
        accrued,
        stake.principal,
        stake.banked_reward
    );

    let event = Deposited {
        pool: pool.key(),
        owner: stake.owner,
        amount,
        principal: stake.principal,
        accrued,
        timestamp: now,
    };

    transfer_from_user_to_pool_vault(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.owner_token.to_account_info(),
        ctx.accounts.stake_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
    )?;

    emit!(event);

    Ok(())
}
