use super::eq_ignore_case;
use crate::domain::money::Amount;
use crate::error::{OrderError, Result};
use crate::interfaces::messages::Messages;

/// A payment method picked by the customer, before its identifier is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentChoice {
    CreditCard,
    DebitCard,
    Pix,
}

impl PaymentChoice {
    pub const ALL: [PaymentChoice; 3] = [
        PaymentChoice::CreditCard,
        PaymentChoice::DebitCard,
        PaymentChoice::Pix,
    ];

    /// Names accepted for this method: the Portuguese name first, then the
    /// English label shown in the prompt.
    pub fn names(&self) -> &'static [&'static str] {
        match self {
            PaymentChoice::CreditCard => &["Cartão de Crédito", "Credit Card"],
            PaymentChoice::DebitCard => &["Cartão de Débito", "Debit Card"],
            PaymentChoice::Pix => &["Pix"],
        }
    }

    /// Looks up a payment method by any of its names, ignoring case.
    pub fn resolve(input: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|choice| choice.names().iter().any(|name| eq_ignore_case(name, input)))
            .ok_or_else(|| OrderError::UnrecognizedPaymentMethod(input.to_string()))
    }

    /// The prompt asking for this method's identifier.
    pub fn identifier_prompt<'a>(&self, messages: &'a Messages) -> &'a str {
        match self {
            PaymentChoice::CreditCard => messages.credit_card_prompt,
            PaymentChoice::DebitCard => messages.debit_card_prompt,
            PaymentChoice::Pix => messages.tax_id_prompt,
        }
    }

    /// Binds the identifier to the method. The identifier is kept verbatim,
    /// empty strings included.
    pub fn with_identifier(self, identifier: String) -> PaymentMethod {
        match self {
            PaymentChoice::CreditCard => PaymentMethod::CreditCard {
                card_number: identifier,
            },
            PaymentChoice::DebitCard => PaymentMethod::DebitCard {
                card_number: identifier,
            },
            PaymentChoice::Pix => PaymentMethod::Pix { tax_id: identifier },
        }
    }
}

/// A fully resolved payment method with the identifier the customer gave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    CreditCard { card_number: String },
    DebitCard { card_number: String },
    /// Pix transfer to the store, identified by its CNPJ.
    Pix { tax_id: String },
}

impl PaymentMethod {
    pub fn choice(&self) -> PaymentChoice {
        match self {
            PaymentMethod::CreditCard { .. } => PaymentChoice::CreditCard,
            PaymentMethod::DebitCard { .. } => PaymentChoice::DebitCard,
            PaymentMethod::Pix { .. } => PaymentChoice::Pix,
        }
    }

    /// Executes the payment, which amounts to rendering its confirmation line.
    ///
    /// No money moves and nothing can fail.
    pub fn confirmation(&self, amount: Amount, messages: &Messages) -> String {
        match self {
            PaymentMethod::CreditCard { card_number } => format!(
                "{} {} {} ({})",
                messages.payment_of, amount, messages.by_credit_card, card_number
            ),
            PaymentMethod::DebitCard { card_number } => format!(
                "{} {} {} ({})",
                messages.payment_of, amount, messages.by_debit_card, card_number
            ),
            PaymentMethod::Pix { tax_id } => format!(
                "{} {} {} ({}: {})",
                messages.payment_of, amount, messages.by_pix, messages.tax_id_label, tax_id
            ),
        }
    }
}
