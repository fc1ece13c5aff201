//! Validation outcomes for address, prefix and mask input.
//!
//! Every failure here is an expected result of user input, never a fault.
//! The `Display` text of [`ValidationFailure`] is the message shown to the user.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Why a dotted-quad string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressParseError {
    #[error("address is empty")]
    Empty,
    #[error("expected 4 octets, found {count}")]
    WrongOctetCount { count: usize },
    #[error("octet '{token}' is not a decimal number")]
    NotNumeric { token: String },
    #[error("octet '{token}' is out of range 0-255")]
    OutOfRange { token: String },
}

/// Why no classful default prefix could be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoDefaultReason {
    Multicast,
    Experimental,
    Loopback,
    Unknown,
}

impl fmt::Display for NoDefaultReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoDefaultReason::Multicast => write!(f, "Class D (Multicast)"),
            NoDefaultReason::Experimental => write!(f, "Class E (Experimental)"),
            NoDefaultReason::Loopback => write!(f, "Loopback Address"),
            NoDefaultReason::Unknown => write!(f, "this address type"),
        }
    }
}

/// A categorized input failure carrying the offending raw text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("Please enter an IP address.")]
    EmptyAddress,

    #[error("Invalid IP address format: {text}")]
    InvalidAddress { text: String },

    #[error("Invalid CIDR prefix in IP field: /{text}. Must be between 0 and 32.")]
    InvalidCidr { text: String },

    #[error("Invalid Subnet Mask format or value: {text}. Must be contiguous 1s followed by 0s.")]
    InvalidMask { text: String },

    #[error("Cannot determine default subnet mask for {reason} ({text}). Please provide CIDR notation (e.g., {text}/24) or a Subnet Mask.")]
    NoDefaultPrefix {
        text: String,
        reason: NoDefaultReason,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            ValidationFailure::EmptyAddress.to_string(),
            "Please enter an IP address."
        );
        assert_eq!(
            ValidationFailure::InvalidCidr {
                text: "33".to_string()
            }
            .to_string(),
            "Invalid CIDR prefix in IP field: /33. Must be between 0 and 32."
        );
        let err = ValidationFailure::NoDefaultPrefix {
            text: "224.0.0.1".to_string(),
            reason: NoDefaultReason::Multicast,
        };
        assert_eq!(
            err.to_string(),
            "Cannot determine default subnet mask for Class D (Multicast) (224.0.0.1). Please provide CIDR notation (e.g., 224.0.0.1/24) or a Subnet Mask."
        );
    }

    #[test]
    fn test_parse_error_messages() {
        assert_eq!(
            AddressParseError::WrongOctetCount { count: 3 }.to_string(),
            "expected 4 octets, found 3"
        );
        assert_eq!(
            AddressParseError::OutOfRange {
                token: "256".to_string()
            }
            .to_string(),
            "octet '256' is out of range 0-255"
        );
    }
}
