pub mod date_utils;
pub mod query_utils;

pub use date_utils::{DateParseError, parse_date_param};
pub use query_utils::first_query_value;
