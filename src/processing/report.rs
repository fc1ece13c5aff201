//! Assemble a [`NetworkReport`] from raw input.

use super::{host_range, list_subnets, resolve_input, subnet_count, subnet_range, ResolvedInput};
use crate::config::ListingPolicy;
use crate::error::ValidationFailure;
use crate::models::{classify, format_address_binary, NetworkReport};
use std::net::Ipv4Addr;

/// Build the report for an already resolved input.
pub fn build_report(resolved: ResolvedInput, policy: &ListingPolicy) -> NetworkReport {
    let class = classify(resolved.address);
    let mask = Ipv4Addr::from(resolved.mask);
    let subnet = subnet_range(resolved.address, resolved.mask);

    log::debug!(
        "{}/{} class {} network {}",
        resolved.address,
        resolved.prefix,
        class,
        subnet
    );

    NetworkReport {
        given_address: resolved.given_address,
        address: resolved.address,
        prefix: resolved.prefix,
        mask,
        mask_binary: format_address_binary(mask),
        class,
        class_display: class.display_with_default(),
        default_prefix: class.default_prefix(),
        rule: resolved.rule,
        subnet_count: subnet_count(class, resolved.prefix),
        subnet,
        network_range: subnet.to_string(),
        hosts: host_range(subnet, resolved.prefix),
        listing: list_subnets(resolved.address, resolved.prefix, policy),
        advisories: resolved.advisories,
    }
}

/// Resolve raw input with the default [`ListingPolicy`].
///
/// `address_text` may embed a `/prefix` suffix; `mask_text` is a dotted-quad
/// mask and is ignored when a prefix is embedded.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::resolve_network;
/// let report = resolve_network("192.168.1.10/26", None).unwrap();
/// assert_eq!(report.mask.to_string(), "255.255.255.192");
/// assert_eq!(report.hosts.usable_count, 62);
/// ```
pub fn resolve_network(
    address_text: &str,
    mask_text: Option<&str>,
) -> Result<NetworkReport, ValidationFailure> {
    resolve_network_with(&ListingPolicy::default(), address_text, mask_text)
}

/// Resolve raw input with an explicit listing policy.
pub fn resolve_network_with(
    policy: &ListingPolicy,
    address_text: &str,
    mask_text: Option<&str>,
) -> Result<NetworkReport, ValidationFailure> {
    let resolved = resolve_input(address_text, mask_text)?;
    Ok(build_report(resolved, policy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AddressClass, ListingSkip, ResolutionRule, SubnetCount, SubnetListing};

    #[test]
    fn test_report_class_default() {
        let report = resolve_network("192.168.1.10", None).unwrap();
        assert_eq!(report.class, AddressClass::C);
        assert_eq!(report.class_display, "C (Default Class Mask /24)");
        assert_eq!(report.default_prefix, Some(24));
        assert_eq!(report.rule, ResolutionRule::ClassDefault);
        assert_eq!(report.cidr(), "/24");
        assert_eq!(report.mask, Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(report.mask_binary, "11111111.11111111.11111111.00000000");
        assert_eq!(report.network_range, "192.168.1.0 - 192.168.1.255");
        assert_eq!(
            report.subnet_count,
            SubnetCount::ClassDefault { default_prefix: 24 }
        );
        assert_eq!(report.advisories.len(), 1);
    }

    #[test]
    fn test_report_loopback_with_prefix() {
        let report = resolve_network("127.0.0.1/8", None).unwrap();
        assert_eq!(report.class_display, "A (Loopback)");
        assert_eq!(report.default_prefix, None);
        assert_eq!(report.subnet_count, SubnetCount::NotApplicable);
        assert_eq!(
            report.listing,
            SubnetListing::NotApplicable(ListingSkip::NoClassDefault {
                class: AddressClass::ALoopback
            })
        );
    }

    #[test]
    fn test_report_policy_applied() {
        let policy = ListingPolicy {
            max_listed: 2,
            max_listing_prefix: 30,
        };
        let report = resolve_network_with(&policy, "192.168.1.10/28", None).unwrap();
        match report.listing {
            SubnetListing::Listed(list) => {
                assert_eq!(list.entries.len(), 2);
                assert_eq!(list.total, 16);
                assert!(list.truncated);
            }
            other => panic!("expected a listing, got {other:?}"),
        }
    }

    #[test]
    fn test_report_failure_is_propagated() {
        assert_eq!(
            resolve_network("10.0.0.5", Some("255.0.255.0")),
            Err(ValidationFailure::InvalidMask {
                text: "255.0.255.0".to_string()
            })
        );
    }
}
