//! Domain layer - amount and address handling.
//!
//! Pure validation and conversion logic, no I/O. Everything here runs before
//! any network call and is testable in isolation.

pub mod address;
pub mod error;
pub mod units;

pub use address::parse_address;
pub use error::InputError;
pub use units::{from_wei, to_wei, WETH_DECIMALS};
