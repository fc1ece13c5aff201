//! Input resolution: turn raw address/prefix/mask text into one consistent
//! (address, prefix, mask) triple.
//!
//! The rules are tried in [`RESOLUTION_ORDER`]; the first one that applies
//! decides the prefix and later rules are never consulted.

use crate::error::{NoDefaultReason, ValidationFailure};
use crate::models::{
    classify, is_valid_mask, mask_to_prefix, parse_address, parse_decimal, prefix_to_mask,
    Advisory, ResolutionRule, MAX_LENGTH,
};
use colored::Colorize;
use std::net::Ipv4Addr;

/// Priority order of the resolution rules.
pub const RESOLUTION_ORDER: [ResolutionRule; 3] = [
    ResolutionRule::EmbeddedCidr,
    ResolutionRule::ExplicitMask,
    ResolutionRule::ClassDefault,
];

/// Trimmed user input. An empty mask counts as absent.
#[derive(Debug, Clone, Copy)]
pub struct RawInput<'a> {
    pub address: &'a str,
    pub mask: Option<&'a str>,
}

impl<'a> RawInput<'a> {
    pub fn new(address: &'a str, mask: Option<&'a str>) -> Self {
        RawInput {
            address: address.trim(),
            mask: mask.map(str::trim).filter(|m| !m.is_empty()),
        }
    }
}

/// Address, prefix and mask after resolution; mask always matches prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    /// Address text without any `/len` suffix.
    pub given_address: String,
    pub address: Ipv4Addr,
    pub prefix: u8,
    pub mask: u32,
    pub rule: ResolutionRule,
    pub advisories: Vec<Advisory>,
}

fn parse_input_address(text: &str) -> Result<Ipv4Addr, ValidationFailure> {
    parse_address(text).map_err(|e| {
        log::debug!("address {text:?} rejected: {e}");
        ValidationFailure::InvalidAddress {
            text: text.to_string(),
        }
    })
}

impl ResolutionRule {
    /// Whether this rule decides the prefix for `input`.
    pub fn applies(self, input: &RawInput) -> bool {
        match self {
            ResolutionRule::EmbeddedCidr => input.address.contains('/'),
            ResolutionRule::ExplicitMask => input.mask.is_some(),
            ResolutionRule::ClassDefault => true,
        }
    }

    /// Resolve `input` with this rule.
    pub fn resolve(self, input: &RawInput) -> Result<ResolvedInput, ValidationFailure> {
        match self {
            ResolutionRule::EmbeddedCidr => resolve_embedded_cidr(input),
            ResolutionRule::ExplicitMask => resolve_explicit_mask(input),
            ResolutionRule::ClassDefault => resolve_class_default(input),
        }
    }
}

fn resolve_embedded_cidr(input: &RawInput) -> Result<ResolvedInput, ValidationFailure> {
    let (addr_text, len_text) = input.address.split_once('/').unwrap_or((input.address, ""));
    let prefix = parse_decimal(len_text)
        .filter(|len| *len <= MAX_LENGTH as u32)
        .ok_or_else(|| ValidationFailure::InvalidCidr {
            text: len_text.to_string(),
        })? as u8;

    let mut advisories = Vec::new();
    if let Some(mask_text) = input.mask {
        log::warn!(
            "CIDR in IP field overrides the Subnet Mask input {}",
            mask_text.yellow()
        );
        advisories.push(Advisory::MaskIgnored {
            mask_text: mask_text.to_string(),
        });
    }

    let address = parse_input_address(addr_text)?;
    Ok(ResolvedInput {
        given_address: addr_text.to_string(),
        address,
        prefix,
        mask: prefix_to_mask(prefix)?,
        rule: ResolutionRule::EmbeddedCidr,
        advisories,
    })
}

fn resolve_explicit_mask(input: &RawInput) -> Result<ResolvedInput, ValidationFailure> {
    let mask_text = input.mask.unwrap_or_default();
    let invalid_mask = || ValidationFailure::InvalidMask {
        text: mask_text.to_string(),
    };
    let mask = u32::from(parse_address(mask_text).map_err(|_| invalid_mask())?);
    if !is_valid_mask(mask) {
        return Err(invalid_mask());
    }

    let address = parse_input_address(input.address)?;
    Ok(ResolvedInput {
        given_address: input.address.to_string(),
        address,
        prefix: mask_to_prefix(mask),
        mask,
        rule: ResolutionRule::ExplicitMask,
        advisories: Vec::new(),
    })
}

fn resolve_class_default(input: &RawInput) -> Result<ResolvedInput, ValidationFailure> {
    let address = parse_input_address(input.address)?;
    let class = classify(address);
    let Some(prefix) = class.default_prefix() else {
        return Err(ValidationFailure::NoDefaultPrefix {
            text: input.address.to_string(),
            reason: class.no_default_reason().unwrap_or(NoDefaultReason::Unknown),
        });
    };
    log::info!("No CIDR or Mask provided, using default for class {class}: /{prefix}");

    Ok(ResolvedInput {
        given_address: input.address.to_string(),
        address,
        prefix,
        mask: prefix_to_mask(prefix)?,
        rule: ResolutionRule::ClassDefault,
        advisories: vec![Advisory::ClassDefaultApplied { class, prefix }],
    })
}

/// Resolve raw address text (optionally `address/len`) and optional mask text.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::processing::resolve_input;
/// let resolved = resolve_input("192.168.1.10/26", None).unwrap();
/// assert_eq!(resolved.prefix, 26);
/// assert_eq!(resolved.mask, 0xFFFF_FFC0);
/// ```
pub fn resolve_input(
    address_text: &str,
    mask_text: Option<&str>,
) -> Result<ResolvedInput, ValidationFailure> {
    let input = RawInput::new(address_text, mask_text);
    if input.address.is_empty() {
        return Err(ValidationFailure::EmptyAddress);
    }

    let rule = RESOLUTION_ORDER
        .into_iter()
        .find(|rule| rule.applies(&input))
        .unwrap_or(ResolutionRule::ClassDefault);
    log::debug!("resolving {:?} with {:?}", input, rule);
    rule.resolve(&input)
}
