use crate::states::{Pool, RewardLedger};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct RewardBalanceAvailable<'info> {
    pub pool: Account<'info, Pool>,
}

/// Reward budget the pool can still pay out.
pub fn reward_balance_available(ctx: Context<RewardBalanceAvailable>) -> Result<u64> {
    Ok(ctx.accounts.pool.reward_balance())
}
