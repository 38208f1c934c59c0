pub mod core;
pub mod fetch;
pub mod models;
pub mod store;
