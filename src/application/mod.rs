//! Application layer orchestrating a single order.
//!
//! This module defines the `OrderFlow`, a forward-only state machine that
//! walks the customer through choosing a pizza and a payment method and
//! prints the receipt.

pub mod order_flow;
