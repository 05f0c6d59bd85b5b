use std::cell::Cell;
use std::rc::Rc;

use record_rail::field;
use record_rail::validation::{matching_msg, validator, InvalidStatus};

struct Address {
    street: String,
    zip: String,
}

struct Customer {
    name: String,
    age: u32,
    address: Address,
}

fn customer() -> Customer {
    Customer {
        name: String::new(),
        age: 200,
        address: Address {
            street: String::new(),
            zip: "123".to_string(),
        },
    }
}

fn address_validator() -> record_rail::validation::Validator<Address> {
    validator(|v| {
        v.should(
            field!(Address, street),
            matching_msg("must not be empty", |s: &String| !s.is_empty()),
        )
        .should(
            field!(Address, zip),
            matching_msg("must be 5 digits", |z: &String| z.len() == 5),
        );
    })
}

fn customer_validator() -> record_rail::validation::Validator<Customer> {
    validator(|v| {
        v.should(
            field!(Customer, name),
            matching_msg("must not be empty", |n: &String| !n.is_empty()),
        )
        .should(
            field!(Customer, age),
            matching_msg("must be plausible", |a: &u32| *a < 130),
        )
        .should_be_valid_with(field!(Customer, address), address_validator().shared());
    })
}

#[test]
fn test_empty_validator_accepts_anything() {
    let accept_all = validator(|_| {});

    assert!(accept_all.validate(&customer(), false).is_successful());
    assert!(accept_all.validate(&customer(), true).is_successful());
}

#[test]
fn test_exhaustive_validation_collects_every_failure() {
    let outcome = customer_validator().validate(&customer(), false);

    let causes = outcome.caused_by();
    assert_eq!(causes.len(), 3);
    assert_eq!(causes[0], InvalidStatus::field("name", "must not be empty"));
    assert_eq!(causes[1], InvalidStatus::field("age", "must be plausible"));
    assert_eq!(
        causes[2],
        InvalidStatus::nested(
            "address",
            vec![
                InvalidStatus::field("street", "must not be empty"),
                InvalidStatus::field("zip", "must be 5 digits"),
            ],
        ),
    );
}

#[test]
fn test_fail_fast_stops_at_first_field_failure() {
    let ran_child = Rc::new(Cell::new(false));
    let flag = ran_child.clone();

    let tracked_child = validator(move |v| {
        let flag = flag.clone();
        v.should(field!(Address, street), move |f, _| {
            flag.set(true);
            f.valid()
        });
    });

    let tree = validator(|v| {
        v.should(
            field!(Customer, name),
            matching_msg("must not be empty", |n: &String| !n.is_empty()),
        )
        .should_be_valid_with(field!(Customer, address), tracked_child.shared());
    });

    let outcome = tree.validate(&customer(), true);

    assert_eq!(outcome.caused_by().len(), 1);
    assert_eq!(
        outcome.caused_by()[0],
        InvalidStatus::field("name", "must not be empty"),
    );
    // A field-phase failure skips the whole child phase.
    assert!(!ran_child.get());
}

#[test]
fn test_fail_fast_policy_propagates_into_children() {
    let outcome = customer_validator().validate(
        &Customer {
            name: "Ada".to_string(),
            age: 36,
            address: Address {
                street: String::new(),
                zip: "123".to_string(),
            },
        },
        true,
    );

    // The child also stops at its first failure.
    assert_eq!(
        outcome.caused_by(),
        &[InvalidStatus::nested(
            "address",
            vec![InvalidStatus::field("street", "must not be empty")],
        )],
    );
}

#[test]
fn test_valid_record_passes() {
    let outcome = customer_validator().validate(
        &Customer {
            name: "Ada".to_string(),
            age: 36,
            address: Address {
                street: "10 Downing St".to_string(),
                zip: "12345".to_string(),
            },
        },
        false,
    );

    assert!(outcome.is_successful());
    assert!(outcome.caused_by().is_empty());
}

#[test]
fn test_shared_validator_under_two_parents() {
    struct Shipment {
        origin: Address,
        destination: Address,
    }

    let address = address_validator().shared();
    let shipment_validator = validator(|v| {
        v.should_be_valid_with(field!(Shipment, origin), address.clone())
            .should_be_valid_with(field!(Shipment, destination), address.clone());
    });

    let outcome = shipment_validator.validate(
        &Shipment {
            origin: Address {
                street: "A".to_string(),
                zip: "12345".to_string(),
            },
            destination: Address {
                street: "B".to_string(),
                zip: "99".to_string(),
            },
        },
        false,
    );

    assert_eq!(
        outcome.caused_by(),
        &[InvalidStatus::nested(
            "destination",
            vec![InvalidStatus::field("zip", "must be 5 digits")],
        )],
    );
}
