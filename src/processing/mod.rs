//! Subnet resolution logic.
//!
//! This module contains the derivation engine:
//! - [`resolve`] - Ordered resolution of address, prefix and mask input
//! - [`derive`] - Subnet range, host range and subnet count
//! - [`listing`] - Sibling subnet enumeration
//! - [`report`] - Report assembly and the public entry points

mod derive;
mod listing;
mod report;
mod resolve;

// Re-export public functions
pub use derive::{host_range, subnet_count, subnet_range};
pub use listing::list_subnets;
pub use report::{build_report, resolve_network, resolve_network_with};
pub use resolve::{resolve_input, RawInput, ResolvedInput, RESOLUTION_ORDER};
