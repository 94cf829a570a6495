//! Menu, payment methods and orders, free of any I/O.

pub mod money;
pub mod order;
pub mod payment;
pub mod pizza;
pub mod ports;

/// Case-insensitive equality that also folds non-ASCII letters (`Ã`, `É`).
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
