use super::eq_ignore_case;
use crate::domain::money::Amount;
use crate::error::{OrderError, Result};
use rust_decimal_macros::dec;
use std::fmt;

const PORTUGUESA_PRICE: Amount = Amount::new(dec!(34.99));
const CALABRESA_PRICE: Amount = Amount::new(dec!(34.99));

/// The pizzas on the menu.
///
/// The menu is closed: each variant carries its own name and price, and
/// [`PizzaKind::resolve`] is the only way user input becomes a pizza.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PizzaKind {
    Portuguesa,
    Calabresa,
}

impl PizzaKind {
    /// Every pizza in menu order.
    pub const ALL: [PizzaKind; 2] = [PizzaKind::Portuguesa, PizzaKind::Calabresa];

    /// The name a customer types to pick this pizza.
    pub fn name(&self) -> &'static str {
        match self {
            PizzaKind::Portuguesa => "Portuguesa",
            PizzaKind::Calabresa => "Calabresa",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PizzaKind::Portuguesa => "Pizza Portuguesa",
            PizzaKind::Calabresa => "Pizza Calabresa",
        }
    }

    pub fn price(&self) -> Amount {
        match self {
            PizzaKind::Portuguesa => PORTUGUESA_PRICE,
            PizzaKind::Calabresa => CALABRESA_PRICE,
        }
    }

    /// Looks up a pizza by name, ignoring case.
    ///
    /// Surrounding whitespace is significant: `" Portuguesa"` is not on the menu.
    pub fn resolve(input: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| eq_ignore_case(kind.name(), input))
            .ok_or_else(|| OrderError::UnrecognizedPizza(input.to_string()))
    }
}

impl fmt::Display for PizzaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
