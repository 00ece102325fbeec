pub mod backend;

pub use backend::{BackendClient, BackendError, ForwardedResponse, has_dot_segments};
