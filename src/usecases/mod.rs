//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces. The single use case,
//! `WethWrapper`, validates user input locally and drives the wrap,
//! unwrap, and balance operations through the `ChainClient` port.

pub mod wrapper;

pub use wrapper::WethWrapper;
