//! Wire messages for the `proto.playground.Games` service.
//!
//! Generated by `build.rs` from `proto/games.proto`. The client stub lives in
//! [`games_client`]; [`games_server`] is the matching service trait, used by
//! test backends.

tonic::include_proto!("proto.playground");

pub use prost_types::Timestamp;
