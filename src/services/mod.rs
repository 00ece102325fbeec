pub mod dashboard_service;
pub mod order_service;
pub mod proxy_service;
pub mod sales_service;

pub use dashboard_service::DashboardService;
pub use order_service::OrderService;
pub use proxy_service::{ProxyService, REQUEST_ID_HEADER};
pub use sales_service::SalesService;
