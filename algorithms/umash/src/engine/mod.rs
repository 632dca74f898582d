//! Execution engine: CPU dispatch.

pub mod dispatcher;

pub use dispatcher::get_active_backend_name;
