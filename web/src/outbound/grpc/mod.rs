//! gRPC outbound adapters.
//!
//! This module provides the tonic implementation of the `GamesClient` port.

mod client;

pub use client::GrpcGamesClient;
