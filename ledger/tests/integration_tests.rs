//! End-to-end exercises of the staking engine against the nullable
//! clock and token ledger: the full admin/stake/unstake lifecycle.

use stakewell_gateway::TokenGateway;
use stakewell_ledger::{StakingEngine, StakingError};
use stakewell_nullables::{NullClock, NullTokenLedger};
use stakewell_types::{params::ONE_YEAR_SECS, AccountId, StakingParams, Timestamp};

const HALF_YEAR_SECS: u64 = ONE_YEAR_SECS / 2;

fn acct(name: &str) -> AccountId {
    AccountId::from(name)
}

struct Harness {
    engine: StakingEngine,
    ledger: NullTokenLedger,
    clock: NullClock,
}

fn deploy() -> Harness {
    stakewell_utils::logging::init_tracing();

    let engine = StakingEngine::new(acct("owner"), StakingParams::annual());
    let mut ledger = NullTokenLedger::new();
    ledger.fund_custody(1_000_000_000_000);
    for name in ["acc1", "acc2", "acc3"] {
        ledger.set_balance(&acct(name), 10_000_000);
    }
    Harness {
        engine,
        ledger,
        clock: NullClock::new(1_700_000_000),
    }
}

#[test]
fn pool_administration_lifecycle() {
    let mut h = deploy();
    let owner = acct("owner");

    let before = h.engine.pool_count();
    h.engine
        .add_pool(&owner, "pool 1", ONE_YEAR_SECS, 40)
        .unwrap();
    h.engine
        .add_pool(&owner, "pool 2", HALF_YEAR_SECS, 30)
        .unwrap();
    assert_eq!(h.engine.pool_count() - before, 2);

    // update pool 0 after creation
    h.engine
        .set_pool(&owner, 0, "pool 1.1", 30, ONE_YEAR_SECS)
        .unwrap();
    let pools = h.engine.pools();
    assert_eq!(pools[0].label, "pool 1.1");
    assert_eq!(pools[0].reward_rate_percent, 30);
    assert_eq!(pools[0].lock_period_secs, ONE_YEAR_SECS);

    // administrative calls from anyone else bounce off the owner gate
    assert!(h.engine.add_pool(&acct("acc1"), "x", 0, 0).is_err());
    assert!(h.engine.set_pool(&acct("acc1"), 0, "x", 0, 0).is_err());
    assert_eq!(h.engine.pool_count(), 2);
}

#[test]
fn single_deposit_full_cycle() {
    let mut h = deploy();
    h.engine
        .add_pool(&acct("owner"), "pool 1", ONE_YEAR_SECS, 30)
        .unwrap();

    let staker = acct("acc1");
    let total_before = h.engine.pool_total_staked(0).unwrap();
    h.engine
        .stake(&mut h.ledger, &staker, 1000, 0, h.clock.now())
        .unwrap();
    assert_eq!(h.engine.pool_total_staked(0).unwrap() - total_before, 1000);

    let balance_before = h.ledger.balance_of(&staker);
    h.clock.advance(ONE_YEAR_SECS);
    h.engine
        .unstake(&mut h.ledger, &staker, 0, h.clock.now())
        .unwrap();

    // principal 1000 + one year at 30% = 1300
    assert_eq!(h.ledger.balance_of(&staker) - balance_before, 1300);
}

#[test]
fn compounded_deposits_full_cycle() {
    let mut h = deploy();
    h.engine
        .add_pool(&acct("owner"), "pool 1", ONE_YEAR_SECS, 30)
        .unwrap();

    let staker = acct("acc2");
    let balance_start = h.ledger.balance_of(&staker);

    h.engine
        .stake(&mut h.ledger, &staker, 1000, 0, h.clock.now())
        .unwrap();
    h.clock.advance(HALF_YEAR_SECS);
    h.engine
        .stake(&mut h.ledger, &staker, 1000, 0, h.clock.now())
        .unwrap();
    h.clock.advance(ONE_YEAR_SECS);
    h.engine
        .unstake(&mut h.ledger, &staker, 0, h.clock.now())
        .unwrap();

    // 2150 compounded principal + 645 reward − 2000 deposited = 795 gain
    assert_eq!(h.ledger.balance_of(&staker) - balance_start, 795);
}

#[test]
fn lock_period_blocks_early_withdrawal() {
    let mut h = deploy();
    h.engine
        .add_pool(&acct("owner"), "pool 1", ONE_YEAR_SECS, 30)
        .unwrap();

    let staker = acct("acc3");
    h.engine
        .stake(&mut h.ledger, &staker, 1000, 0, h.clock.now())
        .unwrap();

    let err = h
        .engine
        .unstake(&mut h.ledger, &staker, 0, h.clock.now())
        .unwrap_err();
    assert!(matches!(err, StakingError::LockPeriodActive { .. }));

    // lock period elapsed after a pool update still uses the pool's
    // current lock period, derived at call time
    h.engine
        .set_pool(&acct("owner"), 0, "pool 1", 30, HALF_YEAR_SECS)
        .unwrap();
    h.clock.advance(HALF_YEAR_SECS);
    h.engine
        .unstake(&mut h.ledger, &staker, 0, h.clock.now())
        .unwrap();
}

#[test]
fn independent_pools_and_accounts_do_not_interfere() {
    let mut h = deploy();
    let owner = acct("owner");
    h.engine.add_pool(&owner, "slow", ONE_YEAR_SECS, 30).unwrap();
    h.engine.add_pool(&owner, "fast", 0, 10).unwrap();

    let a = acct("acc1");
    let b = acct("acc2");
    h.engine.stake(&mut h.ledger, &a, 1000, 0, h.clock.now()).unwrap();
    h.engine.stake(&mut h.ledger, &a, 500, 1, h.clock.now()).unwrap();
    h.engine.stake(&mut h.ledger, &b, 2000, 1, h.clock.now()).unwrap();

    assert_eq!(h.engine.pool_total_staked(0).unwrap(), 1000);
    assert_eq!(h.engine.pool_total_staked(1).unwrap(), 2500);

    // b's withdrawal from the fast pool leaves a's positions alone
    h.engine.unstake(&mut h.ledger, &b, 1, h.clock.now()).unwrap();
    assert_eq!(h.engine.pool_total_staked(1).unwrap(), 500);
    assert_eq!(h.engine.position(0, &a).unwrap().principal, 1000);
    assert_eq!(h.engine.position(1, &a).unwrap().principal, 500);
    assert!(h.engine.position(1, &b).is_none());
}

#[test]
fn engine_state_survives_a_bincode_roundtrip() {
    let mut h = deploy();
    h.engine
        .add_pool(&acct("owner"), "pool 1", ONE_YEAR_SECS, 30)
        .unwrap();
    h.engine
        .stake(&mut h.ledger, &acct("acc1"), 1000, 0, h.clock.now())
        .unwrap();

    let encoded = bincode::serialize(&h.engine).unwrap();
    let restored: StakingEngine = bincode::deserialize(&encoded).unwrap();

    assert_eq!(restored.pool_count(), h.engine.pool_count());
    assert_eq!(restored.pools(), h.engine.pools());
    assert_eq!(
        restored.position(0, &acct("acc1")),
        h.engine.position(0, &acct("acc1"))
    );
    assert_eq!(restored.owner(), h.engine.owner());
}

#[test]
fn stake_validation_reports_descriptive_reasons() {
    let mut h = deploy();
    h.engine
        .add_pool(&acct("owner"), "pool 1", ONE_YEAR_SECS, 30)
        .unwrap();
    let now = Timestamp::new(0);

    let err = h
        .engine
        .stake(&mut h.ledger, &acct("acc1"), 0, 0, now)
        .unwrap_err();
    assert_eq!(err.to_string(), "cannot stake zero");

    let err = h
        .engine
        .stake(&mut h.ledger, &acct("acc1"), 100, 5, now)
        .unwrap_err();
    assert_eq!(err.to_string(), "pool 5 does not exist");

    let err = h
        .engine
        .unstake(&mut h.ledger, &acct("acc1"), 0, now)
        .unwrap_err();
    assert_eq!(err.to_string(), "nothing staked");

    let err = h.engine.add_pool(&acct("acc1"), "x", 0, 0).unwrap_err();
    assert_eq!(err.to_string(), "caller is not owner");
}
