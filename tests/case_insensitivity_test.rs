mod common;

use assert_cmd::Command;
use assert_cmd::cargo_bin;
use common::random_case;
use pizzaduchefin::domain::payment::{PaymentChoice, PaymentMethod};
use pizzaduchefin::domain::pizza::PizzaKind;
use pizzaduchefin::error::OrderError;
use predicates::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal_macros::dec;

#[test]
fn test_pizza_names_in_any_case() {
    let mut rng = StdRng::seed_from_u64(190);
    for _ in 0..200 {
        for (name, kind) in [
            ("Portuguesa", PizzaKind::Portuguesa),
            ("Calabresa", PizzaKind::Calabresa),
        ] {
            let input = random_case(name, &mut rng);
            let resolved = PizzaKind::resolve(&input).unwrap();
            assert_eq!(resolved, kind, "input {input:?}");
            assert_eq!(resolved.price().value(), dec!(34.99));
        }
    }
}

#[test]
fn test_payment_names_in_any_case() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        for (name, choice) in [
            ("Cartão de Crédito", PaymentChoice::CreditCard),
            ("Cartão de Débito", PaymentChoice::DebitCard),
            ("Pix", PaymentChoice::Pix),
        ] {
            let input = random_case(name, &mut rng);
            assert_eq!(PaymentChoice::resolve(&input).unwrap(), choice, "input {input:?}");
        }
    }
}

#[test]
fn test_padded_names_are_not_recognized() {
    for name in ["Portuguesa", "Calabresa"] {
        for input in [format!(" {name}"), format!("{name} "), format!("{name}s")] {
            assert!(matches!(
                PizzaKind::resolve(&input),
                Err(OrderError::UnrecognizedPizza(_))
            ));
        }
    }
}

#[test]
fn test_each_method_stores_identifier_verbatim() {
    for choice in PaymentChoice::ALL {
        for identifier in ["", " 4111 1111 ", "12.345.678/0001-99"] {
            let method = choice.with_identifier(identifier.to_string());
            let stored = match &method {
                PaymentMethod::CreditCard { card_number } => card_number,
                PaymentMethod::DebitCard { card_number } => card_number,
                PaymentMethod::Pix { tax_id } => tax_id,
            };
            assert_eq!(stored, identifier);
            assert_eq!(method.choice(), choice);
        }
    }
}

#[test]
fn test_shouting_customer_end_to_end() {
    let mut cmd = Command::new(cargo_bin!("pizzaduchefin"));
    cmd.write_stdin("CALABRESA\nCARTÃO DE DÉBITO\n5500000000000004\n");

    cmd.assert().success().stdout(predicate::str::ends_with(
        "Payment of 34.99 by debit card (5500000000000004)\nOrder placed successfully!\n",
    ));
}
