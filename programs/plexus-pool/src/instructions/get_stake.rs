use crate::states::{Pool, Stake, StakeView};
use crate::STAKE_SEED;
use anchor_lang::prelude::*;

/// Accounts context for `get_stake`.
#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct GetStake<'info> {
    pub pool: Account<'info, Pool>,

    /// Stake record of `owner`; may not exist yet.
    ///
    /// CHECK: PDA derivation enforced by seeds; deserialized only when populated.
    #[account(
        seeds = [
            STAKE_SEED.as_bytes(),
            pool.key().as_ref(),
            owner.as_ref()
        ],
        bump,
    )]
    pub stake: UncheckedAccount<'info>,
}

/// Stored stake of `owner`, or an all-zero view if they never deposited.
///
/// Values are the ones last written by a deposit, withdrawal or claim;
/// reward accrued since then is not included.
pub fn get_stake(ctx: Context<GetStake>, _owner: Pubkey) -> Result<StakeView> {
    let info = ctx.accounts.stake.to_account_info();
    let data = info.try_borrow_data()?;
    Stake::view_from_account_data(&data)
}
