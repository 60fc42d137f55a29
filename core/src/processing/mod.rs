pub mod filter;
pub mod timefmt;

pub use filter::{FilterOutput, GeoFilter};
pub use timefmt::{format_epoch, is_valid_date_format};
