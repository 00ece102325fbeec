pub mod dashboard;
pub mod orders;
pub mod proxy;
pub mod sales;

pub use dashboard::*;
pub use orders::*;
pub use proxy::*;
pub use sales::*;
