pub mod filters;
pub mod locale;
pub mod resource;

pub use filters::{DashboardPeriod, DateRange, format_backend_date};
pub use locale::Locale;
pub use resource::Resource;
