use crate::domain::field::{FieldPlacement, MacField};
use crate::domain::mac::{is_valid_mac, normalize_mac};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

pub const STANDALONE_SECTION_HEADING: &str = "Device Information";
pub const ORDER_DETAILS_HEADING: &str = "Additional Information";

/// A checkout submission as received from the storefront. `None` means the
/// field was absent from the request entirely, as opposed to submitted empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutSubmission {
    pub mac_address: Option<String>,
}

/// Render-time description of one checkout field. The host owns the actual
/// markup; this carries everything it needs to place and label the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedField {
    pub key: String,
    pub label: String,
    pub placeholder: String,
    pub required: bool,
    pub priority: u32,
    pub section: Option<String>,
}

/// One metadata write, applied at most once per save event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaEntry {
    pub key: String,
    pub value: String,
}

/// A label/value pair injected into outgoing order emails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailField {
    pub label: String,
    pub value: String,
}

/// One method per lifecycle event the host order system exposes. The host
/// decides when each fires; implementations stay pure so they can be tested
/// without any platform in the loop.
pub trait CheckoutLifecycle {
    /// Fields to inject into the checkout form.
    fn render_fields(&self) -> Vec<RenderedField>;

    /// Submission-time gate. An error here must block order creation and be
    /// shown to the customer verbatim.
    fn validate_submission(&self, submission: &CheckoutSubmission) -> Result<(), CoreError>;

    /// Save-time metadata write for the raw field value, if any. Runs on both
    /// the checkout and admin-edit save paths and never re-validates; the
    /// value is normalized as-is.
    fn meta_on_save(&self, raw: Option<&str>) -> Option<MetaEntry>;

    /// Fields to append to outgoing order emails, given the stored value.
    fn email_fields(&self, stored: Option<&str>) -> Vec<EmailField>;

    /// Label/value rows for the customer-facing order details view.
    fn order_detail_rows(&self, stored: Option<&str>) -> Vec<(String, String)>;

    /// Meta keys the order-search facility should match against.
    fn search_meta_keys(&self) -> Vec<String>;
}

/// The MAC address field extension. Both placement variants share this one
/// implementation; only `render_fields` output differs between them.
#[derive(Debug, Clone)]
pub struct MacFieldExtension {
    field: MacField,
}

impl MacFieldExtension {
    pub fn new(field: MacField) -> Self {
        Self { field }
    }

    pub fn field(&self) -> &MacField {
        &self.field
    }
}

impl CheckoutLifecycle for MacFieldExtension {
    fn render_fields(&self) -> Vec<RenderedField> {
        let section = match self.field.placement {
            FieldPlacement::Standalone => Some(STANDALONE_SECTION_HEADING.to_string()),
            FieldPlacement::Billing => None,
        };
        vec![RenderedField {
            key: "mac_address".to_string(),
            label: self.field.label.clone(),
            placeholder: self.field.placeholder.clone(),
            required: self.field.required,
            priority: self.field.priority,
            section,
        }]
    }

    fn validate_submission(&self, submission: &CheckoutSubmission) -> Result<(), CoreError> {
        match submission.mac_address.as_deref() {
            None if self.field.required => Err(CoreError::MacAddressRequired),
            None => Ok(()),
            Some(raw) => {
                if is_valid_mac(raw) {
                    Ok(())
                } else {
                    Err(CoreError::InvalidMacAddress)
                }
            }
        }
    }

    fn meta_on_save(&self, raw: Option<&str>) -> Option<MetaEntry> {
        raw.map(|value| MetaEntry {
            key: self.field.meta_key.clone(),
            value: normalize_mac(value),
        })
    }

    fn email_fields(&self, stored: Option<&str>) -> Vec<EmailField> {
        match stored {
            Some(value) if !value.is_empty() => vec![EmailField {
                label: self.field.label.clone(),
                value: value.to_string(),
            }],
            _ => Vec::new(),
        }
    }

    fn order_detail_rows(&self, stored: Option<&str>) -> Vec<(String, String)> {
        match stored {
            Some(value) if !value.is_empty() => {
                vec![(self.field.label.clone(), value.to_string())]
            }
            _ => Vec::new(),
        }
    }

    fn search_meta_keys(&self) -> Vec<String> {
        vec![self.field.meta_key.clone()]
    }
}
