use crate::error::ErrorCode;
use crate::states::{Pool, RewardClaimed, RewardLedger, Stake};
use crate::utils::transfer_from_pool_vault_to_user;
use crate::{POOL_SEED, STAKE_SEED};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Accounts context for `claim_reward`.
#[derive(Accounts)]
pub struct ClaimReward<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        has_one = token_mint @ ErrorCode::InvalidMint,
        has_one = reward_vault @ ErrorCode::InvalidVault,
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

    /// Receives the reward.
    #[account(
        mut,
        token::mint = token_mint,
    )]
    pub owner_token: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Pays out the caller's banked reward from the pool's funded budget.
///
/// Fails with `InsufficientRewardBalance` when nothing is banked or the budget
/// does not cover the full amount. Principal and accrual clock are untouched.
pub fn claim_reward(ctx: Context<ClaimReward>) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    let stake = &mut ctx.accounts.stake;
    let amount = stake.settle_claim::<Pool>(pool)?;

    let salt = pool.salt;
    let bump = pool.bump;
    let event = RewardClaimed {
        pool: pool.key(),
        owner: stake.owner,
        amount,
        funded_balance: pool.reward_balance(),
    };

    transfer_from_pool_vault_to_user(
        ctx.accounts.pool.to_account_info(),
        ctx.accounts.reward_vault.to_account_info(),
        ctx.accounts.owner_token.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        &[&[POOL_SEED.as_bytes(), salt.as_ref(), &[bump]]],
    )?;

    msg!("Reward claimed: {}", amount);

    emit!(event);

    Ok(())
}
