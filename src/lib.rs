pub mod api;
pub mod client;
pub mod config;
pub mod domain;
pub mod services;
pub mod utils;

pub use client::BackendClient;
pub use config::Settings;
