use crate::error::ErrorCode;
use crate::states::{PoolConfig, RewardLedger};
use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Stake Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// Per-participant stake record of one pool.
///
/// Derived from `STAKE_SEED + pool + owner`. Created on the first deposit and
/// never closed; a fully withdrawn and claimed stake is simply zeroed.
///
/// Accrual is settled lazily: reward earned since `last_action_time` is only
/// moved into `banked_reward` by a deposit or a withdrawal, each time capped at
/// one lock period of the principal held since that timestamp.
#[account]
#[derive(Default, Debug)]
pub struct Stake {
    /// PDA bump for this account.
    pub bump: u8,

    /// Pool this stake belongs to.
    pub pool: Pubkey,

    /// Participant owning the principal and the reward.
    pub owner: Pubkey,

    /// Amount currently staked.
    pub principal: u64,

    /// UNIX timestamp of the most recent deposit; anchors accrual and the lock.
    pub last_action_time: i64,

    /// Reward accrued and not yet claimed.
    pub banked_reward: u64,

    /// Reward `principal` would earn over one full lock period from now.
    pub projected_reward: u64,

    /// Rewards paid out to the owner so far.
    pub total_claimed: u64,
}

/// Lifecycle position of a stake at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StakeStatus {
    /// No principal.
    Inactive,
    /// Principal staked, lock still running.
    Active,
    /// Principal staked, lock elapsed; withdrawal allowed.
    Unlocked,
}

/// Result of a successful withdrawal transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Withdrawal {
    /// Principal to return to the owner.
    pub principal: u64,
    /// Reward banked by the withdrawal itself.
    pub accrued: u64,
}

/// Read-only snapshot returned by `get_stake`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct StakeView {
    pub principal: u64,
    pub banked_reward: u64,
    pub projected_reward: u64,
    pub last_action_time: i64,
}

impl Stake {
    /// Fixed serialized size of the account (for allocation at initialization).
    ///
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1: bump
    /// - 32 * 2: pool and owner
    /// - 8 * 5: principal, last_action_time, banked, projected, total_claimed
    pub const LEN: usize = 8 + 1 + 32 * 2 + 8 * 5;

    pub fn status(&self, config: &PoolConfig, now: i64) -> StakeStatus {
        if self.principal == 0 {
            StakeStatus::Inactive
        } else if config.is_unlocked(self.last_action_time, now) {
            StakeStatus::Unlocked
        } else {
            StakeStatus::Active
        }
    }

    /// Reward earned since the last action that a deposit or withdrawal at `now`
    /// would bank. Not reflected in `banked_reward` until then.
    pub fn pending_reward(&self, config: &PoolConfig, now: i64) -> Result<u64> {
        config.accrued_reward(self.principal, self.last_action_time, now)
    }

    /// Adds `amount` to the principal at `now`.
    ///
    /// Reward on the principal held so far is banked first, then the accrual
    /// clock and the lock restart against the new total. Returns the reward
    /// banked by this call.
    pub fn apply_deposit(&mut self, config: &PoolConfig, amount: u64, now: i64) -> Result<u64> {
        require_gt!(amount, 0, ErrorCode::ZeroAmount);

        let accrued = self.pending_reward(config, now)?;
        let banked_reward = self
            .banked_reward
            .checked_add(accrued)
            .ok_or(ErrorCode::MathOverflow)?;
        let principal = self
            .principal
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        let projected_reward = config.projected_reward(principal)?;

        self.banked_reward = banked_reward;
        self.principal = principal;
        self.projected_reward = projected_reward;
        self.last_action_time = now;
        Ok(accrued)
    }

    /// Releases the whole principal once the lock has elapsed.
    ///
    /// Banks the remaining accrual and zeroes the principal. `banked_reward`
    /// stays claimable and `last_action_time` is left where it was.
    pub fn apply_withdraw(&mut self, config: &PoolConfig, now: i64) -> Result<Withdrawal> {
        require!(
            self.status(config, now) == StakeStatus::Unlocked,
            ErrorCode::LockActive
        );

        let accrued = self.pending_reward(config, now)?;
        let banked_reward = self
            .banked_reward
            .checked_add(accrued)
            .ok_or(ErrorCode::MathOverflow)?;
        let principal = self.principal;

        self.banked_reward = banked_reward;
        self.principal = 0;
        self.projected_reward = 0;
        Ok(Withdrawal { principal, accrued })
    }

    /// Pays the banked reward out of `ledger`.
    ///
    /// Fails with `InsufficientRewardBalance` when nothing is banked or the
    /// ledger cannot cover the full amount; neither side changes on failure.
    pub fn settle_claim<L: RewardLedger>(&mut self, ledger: &mut L) -> Result<u64> {
        let payout = self.banked_reward;
        require!(
            payout > 0 && ledger.reward_balance() >= payout,
            ErrorCode::InsufficientRewardBalance
        );
        let total_claimed = self
            .total_claimed
            .checked_add(payout)
            .ok_or(ErrorCode::MathOverflow)?;

        ledger.debit_reward(payout)?;
        self.banked_reward = 0;
        self.total_claimed = total_claimed;
        Ok(payout)
    }

    /// Decodes the view held by raw stake account data. An account that was
    /// never created reads as the all-zero view.
    pub fn view_from_account_data(data: &[u8]) -> Result<StakeView> {
        if data.is_empty() {
            return Ok(StakeView::default());
        }
        let stake = Stake::try_deserialize(&mut &data[..])?;
        Ok(stake.view())
    }

    pub fn view(&self) -> StakeView {
        StakeView {
            principal: self.principal,
            banked_reward: self.banked_reward,
            projected_reward: self.projected_reward,
            last_action_time: self.last_action_time,
        }
    }
}
