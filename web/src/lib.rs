//! Darts scorekeeper client library.
//!
//! Talks to the games backend over gRPC, maps its records into display-ready
//! domain entities, and exposes the scorekeeping use cases as
//! [`domain::ServiceResult`]-returning service methods.

pub mod config;
pub mod domain;
pub mod outbound;
pub mod wire;
