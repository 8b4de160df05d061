use crate::checkout::{EmailField, MetaEntry, RenderedField};
use crate::domain::OrderId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderListItemDto {
    pub id: OrderId,
    pub billing_name: String,
    pub mac_address: Option<String>,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetailDto {
    pub id: OrderId,
    pub billing_name: String,
    pub billing_email: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
    pub meta: Vec<MetaEntry>,
    pub detail_rows: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutFormDto {
    pub fields: Vec<RenderedField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailPreviewDto {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub fields: Vec<EmailField>,
    pub body: String,
}
