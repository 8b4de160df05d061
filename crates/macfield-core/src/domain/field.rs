use crate::error::CoreError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_META_KEY: &str = "_mac_address";
pub const DEFAULT_LABEL: &str = "Mac Address";
pub const DEFAULT_PLACEHOLDER: &str = "e.g. AA:BB:CC:DD:EE:FF";
pub const DEFAULT_PRIORITY: u32 = 5;

/// Where the checkout form shows the field: in its own section under the
/// additional-information area, or merged into the billing field set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldPlacement {
    Standalone,
    Billing,
}

/// Definition of the MAC address checkout field. One definition drives every
/// lifecycle surface (render, validate, save, email, order details, search).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacField {
    pub placement: FieldPlacement,
    pub meta_key: String,
    pub label: String,
    pub placeholder: String,
    pub required: bool,
    pub priority: u32,
}

impl Default for MacField {
    fn default() -> Self {
        Self {
            placement: FieldPlacement::Standalone,
            meta_key: DEFAULT_META_KEY.to_string(),
            label: DEFAULT_LABEL.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            required: true,
            priority: DEFAULT_PRIORITY,
        }
    }
}

impl MacField {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.label.trim().is_empty() {
            return Err(CoreError::EmptyFieldLabel);
        }
        validate_meta_key(&self.meta_key)
    }
}

/// Meta keys are underscore-prefixed identifiers so stored values stay out of
/// any user-visible custom-field listing.
pub fn validate_meta_key(key: &str) -> Result<(), CoreError> {
    let mut chars = key.chars();
    let valid = chars.next() == Some('_')
        && key.len() > 1
        && chars.all(|ch| ch == '_' || ch.is_ascii_alphanumeric());
    if valid {
        Ok(())
    } else {
        Err(CoreError::InvalidMetaKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_meta_key, MacField};
    use crate::error::CoreError;

    #[test]
    fn default_field_is_valid() {
        assert!(MacField::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_label() {
        let field = MacField {
            label: "   ".to_string(),
            ..MacField::default()
        };
        assert_eq!(field.validate(), Err(CoreError::EmptyFieldLabel));
    }

    #[test]
    fn meta_keys_must_be_underscore_prefixed() {
        assert!(validate_meta_key("_mac_address").is_ok());
        assert!(validate_meta_key("mac_address").is_err());
        assert!(validate_meta_key("_").is_err());
        assert!(validate_meta_key("_mac address").is_err());
    }
}
