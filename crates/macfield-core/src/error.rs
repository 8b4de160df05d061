use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Mac Address is required.")]
    MacAddressRequired,
    #[error("Please enter a valid Mac Address (e.g. AA:BB:CC:DD:EE:FF).")]
    InvalidMacAddress,
    #[error("invalid meta key: {0}")]
    InvalidMetaKey(String),
    #[error("field label is required")]
    EmptyFieldLabel,
    #[error("billing name is required")]
    EmptyBillingName,
}
