//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **grpc**: tonic-backed client for the `proto.playground.Games` backend
//!
//! Adapters are thin translators between domain port calls and transport
//! requests. They contain no business logic.

pub mod grpc;
