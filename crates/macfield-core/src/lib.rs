pub mod checkout;
pub mod domain;
pub mod dto;
pub mod error;

pub use checkout::{
    CheckoutLifecycle, CheckoutSubmission, EmailField, MacFieldExtension, MetaEntry, RenderedField,
};
pub use domain::*;
pub use dto::*;
pub use error::CoreError;
