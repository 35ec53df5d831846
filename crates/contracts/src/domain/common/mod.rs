//! Common reference types embedded in collection records

pub mod amount;
pub mod refs;
pub mod timestamp;

// Re-exports
pub use amount::deserialize_amount;
pub use refs::{disaster_type_name, CountryRef, DisasterTypeRef, EventRef, DISASTER_TYPES};
pub use timestamp::{deserialize_required_timestamp, deserialize_timestamp, parse_timestamp};
