use crate::domain::ids::OrderId;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub billing_name: String,
    pub billing_email: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Order {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.billing_name.trim().is_empty() {
            return Err(CoreError::EmptyBillingName);
        }
        Ok(())
    }
}
