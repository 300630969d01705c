pub mod aliases;
pub mod normalize;
pub mod records;
pub mod stat;

pub use normalize::{Record, collection, display_value, field_id, field_text, resolve, resolve_or};
pub use records::*;
pub use stat::{SUPPORTED_STATS, StatCode};
