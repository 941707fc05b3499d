pub mod endpoints;
pub mod error;
pub mod model;
pub mod query;
pub mod render;
pub mod service;

pub use endpoints::configure;
