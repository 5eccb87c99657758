use plexus_pool::error::ErrorCode;
use plexus_pool::states::{Pool, PoolConfig, RewardLedger, Stake, StakeStatus};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const UNIT: u64 = 1_000_000_000;

fn new_pool(rate: u64, lock: u64) -> Pool {
    Pool {
        config: PoolConfig::new(rate, lock).unwrap(),
        ..Default::default()
    }
}

fn deposit(pool: &mut Pool, stake: &mut Stake, amount: u64, now: i64) -> u64 {
    let activated = stake.principal == 0;
    let accrued = stake.apply_deposit(&pool.config, amount, now).unwrap();
    pool.record_deposit(amount, activated).unwrap();
    accrued
}

#[test]
fn deposit_then_deposit_banks_partial_period() {
    let mut pool = new_pool(600, 600);
    let mut stake = Stake::default();

    deposit(&mut pool, &mut stake, 5 * UNIT, 0);
    let view = stake.view();
    assert_eq!(view.principal, 5 * UNIT);
    assert_eq!(view.projected_reward, 5 * UNIT * 600 / 10_000);
    assert_eq!(view.banked_reward, 0);

    deposit(&mut pool, &mut stake, 5 * UNIT, 301);
    let view = stake.view();
    assert_eq!(view.principal, 10 * UNIT);
    assert_eq!(view.banked_reward, 5 * UNIT * 301 * 600 / 10_000 / 600);
    assert_eq!(view.projected_reward, 10 * UNIT * 600 / 10_000);
    assert_eq!(view.last_action_time, 301);
    assert_eq!(pool.total_staked, 10 * UNIT);
    assert_eq!(pool.staker_count, 1);
}

#[test]
fn withdraw_waits_for_lock_after_latest_deposit() {
    let mut pool = new_pool(600, 600);
    let mut stake = Stake::default();
    deposit(&mut pool, &mut stake, 5 * UNIT, 0);
    deposit(&mut pool, &mut stake, 5 * UNIT, 500);

    assert_eq!(
        stake.apply_withdraw(&pool.config, 1_000).unwrap_err(),
        ErrorCode::LockActive.into()
    );

    let banked = stake.banked_reward;
    let withdrawal = stake.apply_withdraw(&pool.config, 1_100).unwrap();
    pool.record_withdrawal(withdrawal.principal).unwrap();

    assert_eq!(withdrawal.principal, 10 * UNIT);
    assert_eq!(stake.principal, 0);
    assert_eq!(stake.projected_reward, 0);
    assert_eq!(stake.banked_reward, banked + 10 * UNIT * 600 / 10_000);
    assert_eq!(pool.total_staked, 0);
    assert_eq!(pool.staker_count, 0);
}

#[test]
fn claim_succeeds_only_once_funded() {
    let mut pool = new_pool(600, 600);
    let mut stake = Stake::default();
    deposit(&mut pool, &mut stake, 10 * UNIT, 0);
    deposit(&mut pool, &mut stake, 10 * UNIT, 300);
    let banked = stake.banked_reward;
    assert!(banked > 0);

    let err = stake.settle_claim(&mut pool).unwrap_err();
    assert_eq!(err, ErrorCode::InsufficientRewardBalance.into());
    assert!(err.to_string().contains("ERR: INSUFFICIENT REWARD BALANCE"));

    pool.credit_reward(20 * UNIT).unwrap();
    assert_eq!(stake.settle_claim(&mut pool).unwrap(), banked);
    assert_eq!(stake.banked_reward, 0);
    assert_eq!(pool.reward_balance(), 20 * UNIT - banked);
    assert_eq!(stake.principal, 20 * UNIT);
}

#[test]
fn full_cycle_drains_to_zero() {
    let mut pool = new_pool(600, 600);
    let mut stake = Stake::default();
    deposit(&mut pool, &mut stake, 20 * UNIT, 0);
    pool.credit_reward(20 * UNIT).unwrap();

    stake.apply_withdraw(&pool.config, 600).unwrap();
    stake.settle_claim(&mut pool).unwrap();

    let view = stake.view();
    assert_eq!(view.principal, 0);
    assert_eq!(view.banked_reward, 0);
    assert_eq!(view.projected_reward, 0);
    assert_eq!(stake.total_claimed, 20 * UNIT * 600 / 10_000);
    assert_eq!(stake.status(&pool.config, 600), StakeStatus::Inactive);
}

/// Random interleavings of deposits, withdrawals, claims and fundings across
/// several participants keep the pool's aggregates consistent with the stakes.
#[test]
fn randomized_lifecycle_keeps_books_balanced() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..32 {
        let rate = rng.random_range(1..20_000u64);
        let lock = rng.random_range(1..5_000u64);
        let mut pool = new_pool(rate, lock);
        let mut stakes = vec![Stake::default(); 4];
        let mut now: i64 = 0;
        let mut paid_out = 0u64;

        for _ in 0..200 {
            now += rng.random_range(0..(lock as i64 * 2));
            let who = rng.random_range(0..stakes.len());
            let stake = &mut stakes[who];

            match rng.random_range(0..4u8) {
                0 => {
                    let amount = rng.random_range(1..1_000 * UNIT);
                    let cap = stake.projected_reward;
                    let accrued = deposit(&mut pool, stake, amount, now);
                    assert!(accrued <= cap);
                }
                1 => {
                    let unlocked = stake.status(&pool.config, now) == StakeStatus::Unlocked;
                    match stake.apply_withdraw(&pool.config, now) {
                        Ok(withdrawal) => {
                            assert!(unlocked);
                            pool.record_withdrawal(withdrawal.principal).unwrap();
                        }
                        Err(err) => {
                            assert!(!unlocked);
                            assert_eq!(err, ErrorCode::LockActive.into());
                        }
                    }
                }
                2 => {
                    let before = pool.reward_balance();
                    match stake.settle_claim(&mut pool) {
                        Ok(amount) => {
                            paid_out += amount;
                            assert_eq!(pool.reward_balance(), before - amount);
                        }
                        Err(_) => assert_eq!(pool.reward_balance(), before),
                    }
                }
                _ => {
                    pool.credit_reward(rng.random_range(1..100 * UNIT)).unwrap();
                }
            }

            let staked: u64 = stakes.iter().map(|s| s.principal).sum();
            let active = stakes.iter().filter(|s| s.principal > 0).count() as u64;
            assert_eq!(pool.total_staked, staked);
            assert_eq!(pool.staker_count, active);
            assert_eq!(pool.total_claimed, paid_out);
            assert_eq!(pool.funded_balance, pool.total_funded - pool.total_claimed);
            for s in stakes.iter().filter(|s| s.principal == 0) {
                assert_eq!(s.projected_reward, 0);
            }
        }
    }
}
