//! Wire contract shared by the plugin server and its callers.

pub mod routes;
pub mod types;
