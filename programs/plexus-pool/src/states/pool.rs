use crate::error::ErrorCode;
use crate::utils::{apply_bps, elapsed_seconds, linear_accrual};
use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Pool Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// Reward terms of a pool. Fixed at creation.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Fraction of principal earned over one full lock period, in basis points.
    pub reward_rate_bps: u64,
    /// Minimum seconds between the last deposit and a withdrawal.
    pub lock_duration_seconds: u64,
}

impl PoolConfig {
    pub const LEN: usize = 8 + 8;

    pub fn new(reward_rate_bps: u64, lock_duration_seconds: u64) -> Result<Self> {
        require_gt!(reward_rate_bps, 0, ErrorCode::InvalidConfig);
        require_gt!(lock_duration_seconds, 0, ErrorCode::InvalidConfig);
        Ok(Self {
            reward_rate_bps,
            lock_duration_seconds,
        })
    }

    /// Reward `principal` earns if held for one full lock period.
    pub fn projected_reward(&self, principal: u64) -> Result<u64> {
        apply_bps(principal, self.reward_rate_bps)
    }

    /// Reward `principal` has earned between `since` and `now`, capped at one period.
    pub fn accrued_reward(&self, principal: u64, since: i64, now: i64) -> Result<u64> {
        linear_accrual(
            principal,
            elapsed_seconds(since, now),
            self.reward_rate_bps,
            self.lock_duration_seconds,
        )
    }

    pub fn is_unlocked(&self, since: i64, now: i64) -> bool {
        elapsed_seconds(since, now) >= self.lock_duration_seconds
    }
}

/// Uniform funding surface of a pool's reward budget.
///
/// The registry credits pools only through `fund`, which lands here; claims
/// debit the same ledger.
pub trait RewardLedger {
    /// Reward budget currently available for claims.
    fn reward_balance(&self) -> u64;

    fn credit_reward(&mut self, amount: u64) -> Result<()>;

    /// Fails with `InsufficientRewardBalance` without touching the ledger when
    /// `amount` exceeds the balance.
    fn debit_reward(&mut self, amount: u64) -> Result<()>;
}

/// One staking pool: configuration, vault addresses and the reward ledger.
///
/// Derived from `POOL_SEED + salt`. Participants' stakes live in separate
/// `Stake` accounts keyed by this pool.
#[account]
#[derive(Default, Debug)]
pub struct Pool {
    /// PDA bump; the pool signs for both vaults with it.
    pub bump: u8,

    /// Salt the pool address was derived from.
    pub salt: [u8; 32],

    /// Registry authority allowed to fund this pool.
    pub registry: Pubkey,

    /// Mint staked and paid out as reward.
    pub token_mint: Pubkey,

    /// Vault holding participants' principal.
    pub stake_vault: Pubkey,

    /// Vault holding the funded reward budget.
    pub reward_vault: Pubkey,

    pub config: PoolConfig,

    /// Reward budget available for claims.
    pub funded_balance: u64,

    /// Cumulative rewards ever funded.
    pub total_funded: u64,

    /// Cumulative rewards ever claimed.
    pub total_claimed: u64,

    /// Principal currently staked across all participants.
    pub total_staked: u64,

    /// Participants with non-zero principal.
    pub staker_count: u64,

    pub created_at: i64,
}

impl Pool {
    /// Fixed serialized size of the account.
    ///
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1: bump
    /// - 32: salt
    /// - 32 * 4: four Pubkeys
    /// - 16: config
    /// - 8 * 5: five `u64` counters
    /// - 8: created_at
    pub const LEN: usize = 8 + 1 + 32 + 32 * 4 + PoolConfig::LEN + 8 * 5 + 8;

    /// Only the registry that created the pool may fund it.
    pub fn authorize_funding(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(*signer, self.registry, ErrorCode::InvalidRegistry);
        Ok(())
    }

    /// Books `amount` of new principal; `activated` marks a stake leaving `Inactive`.
    pub fn record_deposit(&mut self, amount: u64, activated: bool) -> Result<()> {
        let total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        let staker_count = if activated {
            self.staker_count
                .checked_add(1)
                .ok_or(ErrorCode::MathOverflow)?
        } else {
            self.staker_count
        };
        self.total_staked = total_staked;
        self.staker_count = staker_count;
        Ok(())
    }

    /// Books a full withdrawal of `amount` by one participant.
    pub fn record_withdrawal(&mut self, amount: u64) -> Result<()> {
        let total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        let staker_count = self
            .staker_count
            .checked_sub(1)
            .ok_or(ErrorCode::MathOverflow)?;
        self.total_staked = total_staked;
        self.staker_count = staker_count;
        Ok(())
    }
}

impl RewardLedger for Pool {
    fn reward_balance(&self) -> u64 {
        self.funded_balance
    }

    fn credit_reward(&mut self, amount: u64) -> Result<()> {
        require_gt!(amount, 0, ErrorCode::ZeroAmount);
        let funded_balance = self
            .funded_balance
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        let total_funded = self
            .total_funded
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        self.funded_balance = funded_balance;
        self.total_funded = total_funded;
        Ok(())
    }

    fn debit_reward(&mut self, amount: u64) -> Result<()> {
        require_gte!(
            self.funded_balance,
            amount,
            ErrorCode::InsufficientRewardBalance
        );
        let total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        self.funded_balance -= amount;
        self.total_claimed = total_claimed;
        Ok(())
    }
}
