//! IPv4 address codec and CIDR/mask conversion.
//!
//! Addresses are [`Ipv4Addr`] values; all bit arithmetic is done on the
//! big-endian `u32` form (octet 0 is the most significant byte).

use crate::error::{AddressParseError, ValidationFailure};
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    /// A bare run of ASCII digits, no sign and no whitespace.
    static ref DECIMAL: Regex = Regex::new(r"^[0-9]+$").expect("Invalid Regex?");
}

/// Parse an unsigned decimal literal, rejecting signs, whitespace and empty input.
///
/// Returns `None` when the text is not digits only. Values too large for `u32`
/// saturate to `u32::MAX` so callers can still report them as out of range.
pub(crate) fn parse_decimal(text: &str) -> Option<u32> {
    if !DECIMAL.is_match(text) {
        return None;
    }
    Some(text.parse::<u32>().unwrap_or(u32::MAX))
}

/// Parse a dotted-quad string into an address.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::parse_address;
/// use std::net::Ipv4Addr;
/// assert_eq!(parse_address("10.0.0.5").unwrap(), Ipv4Addr::new(10, 0, 0, 5));
/// assert!(parse_address("10.0.0").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<Ipv4Addr, AddressParseError> {
    if text.is_empty() {
        return Err(AddressParseError::Empty);
    }
    let tokens: Vec<&str> = text.split('.').collect();
    if tokens.len() != 4 {
        return Err(AddressParseError::WrongOctetCount {
            count: tokens.len(),
        });
    }

    let mut octets = [0u8; 4];
    for (octet, token) in octets.iter_mut().zip(tokens) {
        let value = parse_decimal(token).ok_or_else(|| AddressParseError::NotNumeric {
            token: token.to_string(),
        })?;
        *octet = u8::try_from(value).map_err(|_| AddressParseError::OutOfRange {
            token: token.to_string(),
        })?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Canonical dotted-quad text, no leading zeros.
pub fn format_address(addr: Ipv4Addr) -> String {
    addr.octets().iter().join(".")
}

/// Four zero-padded 8-bit binary octets joined by `.`.
pub fn format_address_binary(addr: Ipv4Addr) -> String {
    addr.octets()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .join(".")
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::prefix_to_mask;
/// assert_eq!(prefix_to_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(prefix_to_mask(0).unwrap(), 0);
/// ```
pub fn prefix_to_mask(len: u8) -> Result<u32, ValidationFailure> {
    if len > MAX_LENGTH {
        Err(ValidationFailure::InvalidCidr {
            text: len.to_string(),
        })
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Count the leading one bits of a mask.
///
/// Only meaningful when [`is_valid_mask`] holds; never inspects more than 32 bits.
pub fn mask_to_prefix(mask: u32) -> u8 {
    mask.leading_ones() as u8
}

/// True when the mask is contiguous ones followed by contiguous zeros.
///
/// The complement of a well-formed mask is a low-order run of ones, so adding
/// one to it yields a power of two sharing no bits with it.
pub fn is_valid_mask(mask: u32) -> bool {
    if mask == 0 || mask == u32::MAX {
        return true;
    }
    let inverted = !mask;
    let next_power = inverted.wrapping_add(1);
    next_power != 0 && (next_power & inverted) == 0
}

/// Get the network address for a given IP and mask.
pub fn network_id(addr: Ipv4Addr, mask: u32) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & mask)
}

/// Calculate the broadcast address for a given IP and mask.
pub fn broadcast_addr(addr: Ipv4Addr, mask: u32) -> Ipv4Addr {
    let network_bits = u32::from(addr) & mask;
    Ipv4Addr::from(network_bits | !mask)
}

/// Network address with its prefix length, rendered as `a.b.c.d/len`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
