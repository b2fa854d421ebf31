//! Lease lifecycle: pricing, payment forwarding, pass issuance, expiry and
//! revocation.

#![cfg(test)]
extern crate std;

use agentlease_lib::{
    events::{LeaseCreated, LeaseRevoked},
    pass_id, ContractError, Lease,
};
use proptest::prelude::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Vec};

use crate::testutils::{Fixture, START_TIME};

#[test]
fn test_create_lease_scenario() {
    let f = Fixture::new();
    let owner = Address::generate(&f.env);
    let agent_id = f.create_agent(&owner, 10);
    let renter = f.funded_renter(1000);

    let lease_id = f.manager.create_lease(&renter, &agent_id, &100, &1000);
    assert_eq!(lease_id, 1);

    let lease = f.manager.get_lease(&lease_id).unwrap();
    assert_eq!(
        lease,
        Lease {
            id: 1,
            renter: renter.clone(),
            agent_id,
            expires_at: START_TIME + 100,
            total_price_paid: 1000,
            active: true,
        }
    );

    // full payment forwarded to the owner
    assert_eq!(f.token.balance(&owner), 1000);
    assert_eq!(f.token.balance(&renter), 0);
    assert_eq!(f.token.balance(&f.manager_id), 0);

    // one pass unit to the renter, expiring with the lease
    assert_eq!(f.manager.pass_balance(&renter, &agent_id, &lease_id), 1);
    assert_eq!(f.manager.pass_expiry(&agent_id, &lease_id), START_TIME + 100);
    assert_eq!(f.manager.pass_holder(&agent_id, &lease_id), Some(renter.clone()));
    assert_eq!(f.manager.get_pass_id(&agent_id, &lease_id), pass_id(agent_id, lease_id));

    assert!(f.manager.is_lease_valid(&agent_id, &lease_id, &renter));
    assert_eq!(f.manager.get_agent_leases(&agent_id), Vec::from_array(&f.env, [1u64]));
    assert_eq!(f.manager.total_leases(), 1);
}

#[test]
fn test_payment_must_match_exactly() {
    let f = Fixture::new();
    let agent_id = f.create_agent(&Address::generate(&f.env), 10);
    let renter = f.funded_renter(2000);

    assert_eq!(
        f.manager.try_create_lease(&renter, &agent_id, &100, &999),
        Err(Ok(ContractError::PaymentMismatch))
    );
    assert_eq!(
        f.manager.try_create_lease(&renter, &agent_id, &100, &1001),
        Err(Ok(ContractError::PaymentMismatch))
    );
    assert_eq!(f.token.balance(&renter), 2000);
    assert_eq!(f.manager.total_leases(), 0);
}

#[test]
fn test_create_lease_validation() {
    let f = Fixture::new();
    let agent_id = f.create_agent(&Address::generate(&f.env), 10);
    let renter = f.funded_renter(1000);

    assert_eq!(
        f.manager.try_create_lease(&renter, &99, &100, &1000),
        Err(Ok(ContractError::AgentNotFound))
    );
    assert_eq!(
        f.manager.try_create_lease(&renter, &0, &100, &1000),
        Err(Ok(ContractError::AgentNotFound))
    );
    assert_eq!(
        f.manager.try_create_lease(&renter, &agent_id, &0, &0),
        Err(Ok(ContractError::InvalidDuration))
    );
}

#[test]
fn test_price_overflow_is_rejected() {
    let f = Fixture::new();
    let agent_id = f.create_agent(&Address::generate(&f.env), i128::MAX / 2);
    let renter = f.funded_renter(1);

    assert_eq!(
        f.manager.try_create_lease(&renter, &agent_id, &3, &1),
        Err(Ok(ContractError::ArithmeticOverflow))
    );
}

#[test]
fn test_failed_forwarding_leaves_no_trace() {
    let f = Fixture::new();
    let owner = Address::generate(&f.env);
    let agent_id = f.create_agent(&owner, 10);
    let renter = f.funded_renter(500);

    assert_eq!(
        f.manager.try_create_lease(&renter, &agent_id, &100, &1000),
        Err(Ok(ContractError::PaymentForwardingFailed))
    );

    assert_eq!(f.manager.total_leases(), 0);
    assert_eq!(f.manager.get_lease(&1), None);
    assert_eq!(f.manager.pass_balance(&renter, &agent_id, &1), 0);
    assert_eq!(f.manager.get_agent_leases(&agent_id).len(), 0);
    assert_eq!(f.token.balance(&renter), 500);
    assert_eq!(f.token.balance(&owner), 0);
}

#[test]
fn test_validity_ends_at_expiry() {
    let f = Fixture::new();
    let agent_id = f.create_agent(&Address::generate(&f.env), 10);
    let renter = f.funded_renter(1000);
    let lease_id = f.manager.create_lease(&renter, &agent_id, &100, &1000);

    f.set_time(START_TIME + 99);
    assert!(f.manager.is_lease_valid(&agent_id, &lease_id, &renter));

    f.set_time(START_TIME + 100);
    assert!(!f.manager.is_lease_valid(&agent_id, &lease_id, &renter));

    f.set_time(START_TIME + 10_000);
    assert!(!f.manager.is_lease_valid(&agent_id, &lease_id, &renter));

    // expiry does not flip the administrative flag
    assert!(f.manager.get_lease(&lease_id).unwrap().active);
}

#[test]
fn test_validity_is_scoped_to_holder_and_agent() {
    let f = Fixture::new();
    let owner = Address::generate(&f.env);
    let first = f.create_agent(&owner, 10);
    let second = f.create_agent(&owner, 10);
    let renter = f.funded_renter(1000);
    let lease_id = f.manager.create_lease(&renter, &first, &100, &1000);

    assert!(!f.manager.is_lease_valid(&first, &lease_id, &Address::generate(&f.env)));
    assert!(!f.manager.is_lease_valid(&second, &lease_id, &renter));
    assert!(!f.manager.is_lease_valid(&first, &(lease_id + 1), &renter));
    assert!(!f.manager.is_lease_valid(&first, &0, &renter));
}

#[test]
fn test_revoke_lease() {
    let f = Fixture::new();
    let owner = Address::generate(&f.env);
    let agent_id = f.create_agent(&owner, 10);
    let renter = f.funded_renter(1000);
    let lease_id = f.manager.create_lease(&renter, &agent_id, &100, &1000);

    f.manager.revoke_lease(&owner, &lease_id);

    assert!(!f.manager.is_lease_valid(&agent_id, &lease_id, &renter));
    assert!(!f.manager.get_lease(&lease_id).unwrap().active);
    assert_eq!(f.manager.pass_balance(&renter, &agent_id, &lease_id), 0);
    assert_eq!(f.manager.pass_expiry(&agent_id, &lease_id), 0);

    // no refund, record kept for history
    assert_eq!(f.token.balance(&owner), 1000);
    assert_eq!(f.token.balance(&renter), 0);
    assert_eq!(f.manager.get_agent_leases(&agent_id).len(), 1);

    assert_eq!(
        f.manager.try_revoke_lease(&owner, &lease_id),
        Err(Ok(ContractError::LeaseNotActive))
    );
}

#[test]
fn test_lease_lifecycle_publishes_events() {
    let f = Fixture::new();
    let owner = Address::generate(&f.env);
    let agent_id = f.create_agent(&owner, 10);
    let renter = f.funded_renter(500);

    let lease_id = f.manager.create_lease(&renter, &agent_id, &50, &500);
    assert_eq!(
        f.last_event::<LeaseCreated>("lease_created"),
        Some(LeaseCreated {
            lease_id,
            agent_id,
            renter,
            expires_at: START_TIME + 50,
            price_paid: 500,
        })
    );

    f.manager.revoke_lease(&owner, &lease_id);
    assert_eq!(
        f.last_event::<LeaseRevoked>("lease_revoked"),
        Some(LeaseRevoked {
            lease_id,
            agent_id,
            revoked_by: owner,
        })
    );
}

#[test]
fn test_revoke_requires_current_owner() {
    let f = Fixture::new();
    let owner = Address::generate(&f.env);
    let agent_id = f.create_agent(&owner, 10);
    let renter = f.funded_renter(1000);
    let lease_id = f.manager.create_lease(&renter, &agent_id, &100, &1000);

    assert_eq!(
        f.manager.try_revoke_lease(&renter, &lease_id),
        Err(Ok(ContractError::NotAuthorized))
    );
    assert_eq!(
        f.manager.try_revoke_lease(&owner, &77),
        Err(Ok(ContractError::LeaseNotFound))
    );

    // after a sale the previous owner loses the right to revoke
    let buyer = Address::generate(&f.env);
    f.nft.transfer_agent(&agent_id, &owner, &buyer);
    assert_eq!(
        f.manager.try_revoke_lease(&owner, &lease_id),
        Err(Ok(ContractError::NotAuthorized))
    );
    f.manager.revoke_lease(&buyer, &lease_id);
    assert!(!f.manager.is_lease_valid(&agent_id, &lease_id, &renter));
}

#[test]
fn test_payment_follows_current_owner() {
    let f = Fixture::new();
    let owner = Address::generate(&f.env);
    let buyer = Address::generate(&f.env);
    let agent_id = f.create_agent(&owner, 2);
    f.nft.transfer_agent(&agent_id, &owner, &buyer);

    let renter = f.funded_renter(200);
    f.manager.create_lease(&renter, &agent_id, &100, &200);

    assert_eq!(f.token.balance(&buyer), 200);
    assert_eq!(f.token.balance(&owner), 0);
}

#[test]
fn test_revoke_after_expiry_still_burns() {
    let f = Fixture::new();
    let owner = Address::generate(&f.env);
    let agent_id = f.create_agent(&owner, 10);
    let renter = f.funded_renter(1000);
    let lease_id = f.manager.create_lease(&renter, &agent_id, &100, &1000);

    f.set_time(START_TIME + 500);
    f.manager.revoke_lease(&owner, &lease_id);
    assert_eq!(f.manager.pass_balance(&renter, &agent_id, &lease_id), 0);
}

#[test]
fn test_pass_transfer_moves_permission() {
    let f = Fixture::new();
    let owner = Address::generate(&f.env);
    let agent_id = f.create_agent(&owner, 10);
    let renter = f.funded_renter(1000);
    let friend = Address::generate(&f.env);
    let lease_id = f.manager.create_lease(&renter, &agent_id, &100, &1000);

    f.manager.transfer_pass(&renter, &friend, &agent_id, &lease_id);

    assert!(!f.manager.is_lease_valid(&agent_id, &lease_id, &renter));
    assert!(f.manager.is_lease_valid(&agent_id, &lease_id, &friend));
    assert_eq!(f.manager.pass_holder(&agent_id, &lease_id), Some(friend.clone()));
    assert_eq!(
        f.manager.try_transfer_pass(&renter, &friend, &agent_id, &lease_id),
        Err(Ok(ContractError::InsufficientBalance))
    );
    assert_eq!(
        f.manager.try_transfer_pass(&friend, &f.manager_id, &agent_id, &lease_id),
        Err(Ok(ContractError::InvalidHolder))
    );

    // revocation burns from whoever holds the pass now
    f.manager.revoke_lease(&owner, &lease_id);
    assert_eq!(f.manager.pass_balance(&friend, &agent_id, &lease_id), 0);
    assert!(!f.manager.is_lease_valid(&agent_id, &lease_id, &friend));
}

#[test]
fn test_many_leases_per_agent() {
    let f = Fixture::new();
    let agent_id = f.create_agent(&Address::generate(&f.env), 1);

    let a = f.funded_renter(10);
    let b = f.funded_renter(20);
    let first = f.manager.create_lease(&a, &agent_id, &10, &10);
    let second = f.manager.create_lease(&b, &agent_id, &20, &20);

    assert_eq!(
        f.manager.get_agent_leases(&agent_id),
        Vec::from_array(&f.env, [first, second])
    );

    f.set_time(START_TIME + 15);
    assert!(!f.manager.is_lease_valid(&agent_id, &first, &a));
    assert!(f.manager.is_lease_valid(&agent_id, &second, &b));
    assert!(!f.manager.is_lease_valid(&agent_id, &second, &a));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_only_exact_payment_creates_lease(
        rate in 1..1_000i128,
        duration in 1..10_000u64,
        delta in -3..=3i128,
    ) {
        let f = Fixture::new();
        let agent_id = f.create_agent(&Address::generate(&f.env), rate);
        let price = rate * duration as i128;
        let renter = f.funded_renter(price + 3);

        let result = f.manager.try_create_lease(&renter, &agent_id, &duration, &(price + delta));
        if delta == 0 {
            prop_assert_eq!(result, Ok(Ok(1)));
            prop_assert_eq!(f.token.balance(&renter), 3);
        } else {
            prop_assert_eq!(result, Err(Ok(ContractError::PaymentMismatch)));
            prop_assert_eq!(f.token.balance(&renter), price + 3);
        }
    }

    #[test]
    fn prop_valid_strictly_before_expiry(duration in 1..5_000u64, offset in 0..10_000u64) {
        let f = Fixture::new();
        let agent_id = f.create_agent(&Address::generate(&f.env), 1);
        let renter = f.funded_renter(duration as i128);
        let lease_id = f.manager.create_lease(&renter, &agent_id, &duration, &(duration as i128));

        f.set_time(START_TIME + offset);
        prop_assert_eq!(
            f.manager.is_lease_valid(&agent_id, &lease_id, &renter),
            offset < duration
        );
    }
}
