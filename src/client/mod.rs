//! IQ Server API client

pub mod api;
pub mod iq;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::IqApi;
pub use iq::IqClient;
