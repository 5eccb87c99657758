use anchor_lang::prelude::*;
use plexus_pool::states::{Pool, RewardLedger};

#[derive(Accounts)]
pub struct PoolRewardBalance<'info> {
    /// Any pool of the pool program.
    pub pool: Account<'info, Pool>,
}

/// Reward budget currently available in `pool`.
pub fn pool_reward_balance(ctx: Context<PoolRewardBalance>) -> Result<u64> {
    Ok(ctx.accounts.pool.reward_balance())
}
