use crate::domain::money::Amount;
use crate::domain::payment::PaymentMethod;
use crate::domain::pizza::PizzaKind;

/// A pizza paired with the way it will be paid for.
///
/// Only constructed once both halves are resolved, so every `Order` is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub pizza: PizzaKind,
    pub payment: PaymentMethod,
}

impl Order {
    pub fn new(pizza: PizzaKind, payment: PaymentMethod) -> Self {
        Self { pizza, payment }
    }

    /// The amount to charge: the pizza price, untouched.
    pub fn total(&self) -> Amount {
        self.pizza.price()
    }
}
