pub mod field;
pub mod ids;
pub mod mac;
pub mod order;

pub use field::{validate_meta_key, FieldPlacement, MacField};
pub use ids::OrderId;
pub use mac::{is_valid_mac, normalize_mac};
pub use order::Order;
