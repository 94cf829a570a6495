use crate::domain::order::Order;
use crate::domain::payment::PaymentChoice;
use crate::domain::pizza::PizzaKind;
use crate::domain::ports::Console;
use crate::error::{OrderError, Result};
use crate::interfaces::messages::Messages;
use tracing::{debug, info};

/// Where an order stands between two prompts.
///
/// States only ever move forward; the terminal states are the [`Outcome`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    Start,
    AwaitingPizzaChoice,
    AwaitingPaymentChoice { pizza: PizzaKind },
    ReadyToPay { order: Order },
}

/// Why an order was given up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    UnrecognizedPizza(String),
    UnrecognizedPaymentMethod(String),
}

/// How a run ended. Both outcomes are normal terminations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed(Order),
    Aborted(AbortReason),
}

enum Step {
    Next(FlowState),
    Done(Outcome),
}

/// Drives a single order from the welcome line to a receipt or an abort.
///
/// The console is the flow's only dependency and is owned for the whole run.
pub struct OrderFlow<C: Console> {
    console: C,
    messages: &'static Messages,
}

impl<C: Console> OrderFlow<C> {
    /// Creates a new `OrderFlow`.
    ///
    /// # Arguments
    ///
    /// * `console` - Where prompts are written and answers read.
    /// * `messages` - The text table for the active locale.
    pub fn new(console: C, messages: &'static Messages) -> Self {
        Self { console, messages }
    }

    /// Runs the flow to a terminal state.
    ///
    /// An unrecognized pizza or payment method is reported to the customer and
    /// returned as [`Outcome::Aborted`]; only console failures are errors.
    pub async fn run(&mut self) -> Result<Outcome> {
        let mut state = FlowState::Start;
        loop {
            debug!(?state, "order flow step");
            match self.step(state).await? {
                Step::Next(next) => state = next,
                Step::Done(outcome) => return Ok(outcome),
            }
        }
    }

    /// Consumes the flow and hands back its console.
    pub fn into_console(self) -> C {
        self.console
    }

    async fn step(&mut self, state: FlowState) -> Result<Step> {
        let messages = self.messages;
        match state {
            FlowState::Start => {
                self.console.say(messages.welcome).await?;
                Ok(Step::Next(FlowState::AwaitingPizzaChoice))
            }
            FlowState::AwaitingPizzaChoice => {
                let input = self.console.prompt(messages.pizza_prompt).await?;
                match PizzaKind::resolve(&input) {
                    Ok(pizza) => Ok(Step::Next(FlowState::AwaitingPaymentChoice { pizza })),
                    Err(OrderError::UnrecognizedPizza(input)) => {
                        info!(%input, "order aborted: unrecognized pizza");
                        self.console.say(messages.invalid_pizza).await?;
                        Ok(Step::Done(Outcome::Aborted(AbortReason::UnrecognizedPizza(
                            input,
                        ))))
                    }
                    Err(e) => Err(e),
                }
            }
            FlowState::AwaitingPaymentChoice { pizza } => {
                let input = self.console.prompt(messages.payment_prompt).await?;
                match PaymentChoice::resolve(&input) {
                    Ok(choice) => {
                        let identifier = self
                            .console
                            .prompt(choice.identifier_prompt(messages))
                            .await?;
                        let order = Order::new(pizza, choice.with_identifier(identifier));
                        Ok(Step::Next(FlowState::ReadyToPay { order }))
                    }
                    Err(OrderError::UnrecognizedPaymentMethod(input)) => {
                        info!(%input, "order aborted: unrecognized payment method");
                        self.console.say(messages.invalid_payment).await?;
                        Ok(Step::Done(Outcome::Aborted(
                            AbortReason::UnrecognizedPaymentMethod(input),
                        )))
                    }
                    Err(e) => Err(e),
                }
            }
            FlowState::ReadyToPay { order } => {
                let total = order.total();
                let confirmation = order.payment.confirmation(total, messages);
                self.console.say(&confirmation).await?;
                self.console.say(messages.success).await?;
                info!(pizza = %order.pizza, %total, method = ?order.payment.choice(), "order placed");
                Ok(Step::Done(Outcome::Completed(order)))
            }
        }
    }
}
