//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies. The only infrastructure concern here is the
//! Ethereum RPC connection via alloy-rs.

pub mod chain;
