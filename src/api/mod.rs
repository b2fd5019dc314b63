//! HTTP side of the calculator: a thin JSON client and the service that
//! sends requests to the remote calculation endpoint.

pub mod client;
pub mod service;

#[cfg(test)]
pub(crate) mod test_server;
