//! IPv4 subnet calculator.
//!
//! Resolves an address with an optional embedded `/prefix` or separate mask
//! into a [`NetworkReport`]: mask, class, subnet and host counts, the subnet
//! containing the address and the sibling subnets of its classful network.
//!
//! ```
//! use ipv4_subnet_calc::resolve_network;
//! let report = resolve_network("10.0.0.5", Some("255.0.0.0")).unwrap();
//! assert_eq!(report.prefix, 8);
//! assert_eq!(report.subnet.broadcast.to_string(), "10.255.255.255");
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use config::ListingPolicy;
pub use error::{AddressParseError, NoDefaultReason, ValidationFailure};
pub use models::NetworkReport;
pub use processing::{resolve_network, resolve_network_with};
