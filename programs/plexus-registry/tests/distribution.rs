use anchor_lang::prelude::Pubkey;
use plexus_pool::states::{Pool, PoolConfig, RewardLedger, Stake};
use plexus_registry::error::ErrorCode;
use plexus_registry::utils::{plan_distribution, SuppliedTarget};
use plexus_registry::{pool_record_address, predict_pool_address};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const UNIT: u64 = 1_000_000_000;

fn salt(tag: &[u8]) -> [u8; 32] {
    let mut salt = [0u8; 32];
    salt[..tag.len()].copy_from_slice(tag);
    salt
}

/// A registry with its pools, keyed by the addresses predicted from their salts.
struct Registry {
    authority: Pubkey,
    mint: Pubkey,
    keys: Vec<Pubkey>,
    pools: Vec<Pool>,
}

impl Registry {
    fn new(terms: &[(u64, u64)]) -> Self {
        let authority = plexus_registry::registry_authority_address().0;
        let mint = Pubkey::new_unique();
        let keys = (0..terms.len())
            .map(|i| predict_pool_address(&salt(format!("test{}", i + 1).as_bytes())))
            .collect();
        let pools = terms
            .iter()
            .map(|(rate, lock)| Pool {
                registry: authority,
                token_mint: mint,
                reward_vault: Pubkey::new_unique(),
                config: PoolConfig::new(*rate, *lock).unwrap(),
                ..Default::default()
            })
            .collect();
        Self {
            authority,
            mint,
            keys,
            pools,
        }
    }

    /// Plans the distribution with the registry's own checks, then credits
    /// each non-zero share the way the `fund` fan-out does.
    fn deposit_reward(
        &mut self,
        total: u64,
        pool_ids: &[Pubkey],
        weights: &[u16],
        funder_balance: u64,
    ) -> anchor_lang::Result<u64> {
        let supplied: Vec<SuppliedTarget> = self
            .keys
            .iter()
            .zip(&self.pools)
            .map(|(key, pool)| SuppliedTarget {
                pool_key: *key,
                pool: Some(pool),
                reward_vault_key: pool.reward_vault,
            })
            .collect();
        let plan = plan_distribution(
            total,
            pool_ids,
            weights,
            &supplied,
            &self.authority,
            &self.mint,
            funder_balance,
        )?;
        for (pool, share) in self.pools.iter_mut().zip(&plan.shares) {
            if *share > 0 {
                pool.credit_reward(*share)?;
            }
        }
        Ok(plan.distributed)
    }

    fn balances(&self) -> Vec<u64> {
        self.pools.iter().map(|p| p.reward_balance()).collect()
    }
}

#[test]
fn predicted_address_matches_pool_derivation() {
    let first = salt(b"test1");
    let predicted = predict_pool_address(&first);
    assert_eq!(predicted, plexus_pool::pool_address(&first).0);
    assert_eq!(predicted, predict_pool_address(&first));
    assert_ne!(predicted, pool_record_address(&first).0);
    assert_ne!(predicted, predict_pool_address(&salt(b"test2")));
}

#[test]
fn reward_splits_across_three_pools() {
    let mut registry = Registry::new(&[(600, 100), (800, 150), (1200, 200)]);
    let keys = registry.keys.clone();
    let distributed = registry
        .deposit_reward(100 * UNIT, &keys, &[2000, 3000, 5000], 100 * UNIT)
        .unwrap();

    assert_eq!(distributed, 100 * UNIT);
    assert_eq!(registry.balances(), vec![20 * UNIT, 30 * UNIT, 50 * UNIT]);
}

#[test]
fn rejected_distributions_credit_nobody() {
    let mut registry = Registry::new(&[(600, 100), (800, 150)]);
    let keys = registry.keys.clone();

    let err = registry
        .deposit_reward(100 * UNIT, &keys, &[6000, 5000], 100 * UNIT)
        .unwrap_err();
    assert_eq!(err, ErrorCode::WeightsExceedTotal.into());

    let err = registry
        .deposit_reward(100 * UNIT, &keys, &[10_000], 100 * UNIT)
        .unwrap_err();
    assert_eq!(err, ErrorCode::LengthMismatch.into());

    let err = registry
        .deposit_reward(100 * UNIT, &keys, &[5000, 5000], 99 * UNIT)
        .unwrap_err();
    assert_eq!(err, ErrorCode::TransferFailed.into());

    registry.pools[1].registry = Pubkey::new_unique();
    let err = registry
        .deposit_reward(100 * UNIT, &keys, &[5000, 5000], 100 * UNIT)
        .unwrap_err();
    assert_eq!(err, ErrorCode::InvalidPool.into());

    registry.pools[1].registry = registry.authority;
    registry.pools[0].token_mint = Pubkey::new_unique();
    let err = registry
        .deposit_reward(100 * UNIT, &keys, &[5000, 5000], 100 * UNIT)
        .unwrap_err();
    assert_eq!(err, ErrorCode::InvalidMint.into());

    assert_eq!(registry.balances(), vec![0, 0]);
}

#[test]
fn fully_weighted_funding_pays_claim() {
    let mut registry = Registry::new(&[(600, 600)]);
    let keys = registry.keys.clone();
    registry
        .deposit_reward(20 * UNIT, &keys, &[10_000], 20 * UNIT)
        .unwrap();
    let pool = &mut registry.pools[0];
    assert_eq!(pool.reward_balance(), 20 * UNIT);

    let mut stake = Stake::default();
    assert_eq!(
        Stake::view_from_account_data(&[]).unwrap(),
        stake.view()
    );
    stake.apply_deposit(&pool.config, 10 * UNIT, 0).unwrap();
    stake.apply_deposit(&pool.config, 10 * UNIT, 300).unwrap();
    let banked = stake.banked_reward;

    assert_eq!(stake.settle_claim(pool).unwrap(), banked);
    assert_eq!(pool.reward_balance(), 20 * UNIT - banked);
    assert_eq!(stake.view().banked_reward, 0);
    assert_eq!(stake.view().principal, 20 * UNIT);
}

#[test]
fn random_distributions_conserve_funds() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..256 {
        let n = rng.random_range(1..6usize);
        let mut remaining = 10_000u16;
        let weights: Vec<u16> = (0..n)
            .map(|_| {
                let w = rng.random_range(0..=remaining);
                remaining -= w;
                w
            })
            .collect();
        let total = rng.random_range(1..1_000_000 * UNIT);
        let mut registry = Registry::new(&vec![(600, 600); n]);
        let keys = registry.keys.clone();

        let distributed = registry
            .deposit_reward(total, &keys, &weights, total)
            .unwrap();
        assert!(distributed <= total);
        for (balance, w) in registry.balances().iter().zip(&weights) {
            let expected = (u128::from(total) * u128::from(*w) / 10_000) as u64;
            assert_eq!(*balance, expected);
        }
    }
}
