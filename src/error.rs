use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Unrecognized pizza: {0:?}")]
    UnrecognizedPizza(String),
    #[error("Unrecognized payment method: {0:?}")]
    UnrecognizedPaymentMethod(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input closed before the order was complete")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, OrderError>;
