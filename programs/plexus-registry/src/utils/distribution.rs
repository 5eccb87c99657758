use crate::error::ErrorCode;
use crate::utils::split_by_weights;
use anchor_lang::prelude::*;
use plexus_pool::states::Pool;

/// A `[pool, reward_vault]` pair as supplied in `remaining_accounts`.
pub struct SuppliedTarget<'a> {
    pub pool_key: Pubkey,
    /// `None` when the account does not hold a pool of the pool program.
    pub pool: Option<&'a Pool>,
    pub reward_vault_key: Pubkey,
}

/// Validated outcome of a `deposit_reward` call, computed before any transfer.
#[derive(Debug, PartialEq, Eq)]
pub struct DistributionPlan {
    /// Share of each pool, in `pool_ids` order.
    pub shares: Vec<u64>,
    /// Sum of `shares`; never above the requested total.
    pub distributed: u64,
}

/// Checks every argument and target of a distribution and computes the shares.
///
/// Nothing is transferred when this fails, so a rejected call credits no pool.
#[allow(clippy::too_many_arguments)]
pub fn plan_distribution(
    total_amount: u64,
    pool_ids: &[Pubkey],
    weights_bps: &[u16],
    supplied: &[SuppliedTarget],
    registry_authority: &Pubkey,
    token_mint: &Pubkey,
    funder_balance: u64,
) -> Result<DistributionPlan> {
    require_gt!(total_amount, 0, ErrorCode::ZeroAmount);
    require_eq!(pool_ids.len(), weights_bps.len(), ErrorCode::LengthMismatch);
    let shares = split_by_weights(total_amount, weights_bps)?;

    require_gte!(
        supplied.len(),
        pool_ids.len(),
        ErrorCode::MissingRemainingAccount
    );
    for (pool_id, target) in pool_ids.iter().zip(supplied) {
        require_keys_eq!(target.pool_key, *pool_id, ErrorCode::InvalidPool);
        let pool = target.pool.ok_or(ErrorCode::InvalidPool)?;
        require_keys_eq!(pool.registry, *registry_authority, ErrorCode::InvalidPool);
        require_keys_eq!(pool.token_mint, *token_mint, ErrorCode::InvalidMint);
        require_keys_eq!(
            pool.reward_vault,
            target.reward_vault_key,
            ErrorCode::InvalidPool
        );
    }

    let distributed = shares
        .iter()
        .try_fold(0u64, |acc, share| acc.checked_add(*share))
        .ok_or(ErrorCode::MathOverflow)?;
    require_gte!(funder_balance, distributed, ErrorCode::TransferFailed);

    Ok(DistributionPlan {
        shares,
        distributed,
    })
}
