//! Upstream Module
//!
//! HTTP access to the NHL web API.

mod client;

#[cfg(test)]
pub(crate) mod fake;

pub use client::{HttpClient, RemoteClient};
