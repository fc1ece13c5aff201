//! Integration tests for ipv4-subnet-calc
//!
//! These tests drive the public entry point from raw text to a full report.

use ipv4_subnet_calc::{
    models::{
        format_address, parse_address, AddressClass, HostConvention, ListingSkip, SubnetCount,
        SubnetListing,
    },
    output::report_json,
    resolve_network, resolve_network_with, ListingPolicy, NoDefaultReason, ValidationFailure,
};
use std::net::Ipv4Addr;

#[test]
fn test_class_c_default() {
    let report = resolve_network("192.168.1.10", None).expect("Failed to resolve");

    assert_eq!(report.class, AddressClass::C);
    assert_eq!(report.prefix, 24);
    assert_eq!(report.mask.to_string(), "255.255.255.0");
    assert_eq!(report.subnet.network_id.to_string(), "192.168.1.0");
    assert_eq!(report.subnet.broadcast.to_string(), "192.168.1.255");
    assert_eq!(report.hosts.usable_count, 254);
    assert_eq!(report.hosts.first_usable.to_string(), "192.168.1.1");
    assert_eq!(report.hosts.last_usable.to_string(), "192.168.1.254");
}

#[test]
fn test_embedded_prefix_26() {
    let report = resolve_network("192.168.1.10/26", None).expect("Failed to resolve");

    assert_eq!(report.prefix, 26);
    assert_eq!(report.mask.to_string(), "255.255.255.192");
    assert_eq!(report.subnet.network_id.to_string(), "192.168.1.0");
    assert_eq!(report.subnet.broadcast.to_string(), "192.168.1.63");
    assert_eq!(report.subnet_count, SubnetCount::Subnets(4));
    assert_eq!(report.hosts.usable_count, 62);
}

#[test]
fn test_explicit_class_a_mask() {
    let report = resolve_network("10.0.0.5", Some("255.0.0.0")).expect("Failed to resolve");

    assert_eq!(report.prefix, 8);
    assert_eq!(report.default_prefix, Some(8));
    assert_eq!(report.subnet.network_id.to_string(), "10.0.0.0");
    assert_eq!(report.subnet.broadcast.to_string(), "10.255.255.255");
}

#[test]
fn test_mask_contiguity() {
    let report =
        resolve_network("10.0.0.5", Some("255.255.255.254")).expect("255.255.255.254 is contiguous");
    assert_eq!(report.prefix, 31);

    assert_eq!(
        resolve_network("10.0.0.5", Some("255.0.255.0")),
        Err(ValidationFailure::InvalidMask {
            text: "255.0.255.0".to_string()
        })
    );
}

#[test]
fn test_multicast_has_no_default() {
    let failure = resolve_network("224.0.0.1", None).unwrap_err();
    assert!(matches!(
        failure,
        ValidationFailure::NoDefaultPrefix {
            reason: NoDefaultReason::Multicast,
            ..
        }
    ));
}

#[test]
fn test_point_to_point_31() {
    let report = resolve_network("192.168.1.1/31", None).expect("Failed to resolve");

    assert_eq!(report.hosts.usable_count, 0);
    assert_eq!(report.hosts.first_usable, Ipv4Addr::new(192, 168, 1, 0));
    assert_eq!(report.hosts.last_usable, Ipv4Addr::new(192, 168, 1, 1));
    assert_eq!(report.hosts.convention, Some(HostConvention::PointToPoint));
    assert_eq!(
        report.listing,
        SubnetListing::NotApplicable(ListingSkip::TooLong { prefix: 31 })
    );
}

#[test]
fn test_reports_are_idempotent() {
    for (address, mask) in [
        ("192.168.1.10", None),
        ("10.1.2.3/20", Some("255.0.0.0")),
        ("172.16.40.1", Some("255.255.252.0")),
    ] {
        let first = report_json(&resolve_network(address, mask).unwrap()).unwrap();
        let second = report_json(&resolve_network(address, mask).unwrap()).unwrap();
        assert_eq!(first, second, "{address}");
    }
}

#[test]
fn test_canonical_round_trip() {
    for text in ["1.2.3.4", "100.64.0.1", "223.255.255.0", "0.0.0.0"] {
        let addr = parse_address(text).expect("Failed to parse");
        assert_eq!(format_address(addr), text);
    }
}

#[test]
fn test_listing_marks_exactly_one() {
    let policy = ListingPolicy::default();
    for prefix in 24..=30u8 {
        let address = format!("192.168.7.201/{prefix}");
        let report = resolve_network_with(&policy, &address, None).expect("Failed to resolve");
        let SubnetListing::Listed(list) = report.listing else {
            panic!("expected listing for {address}");
        };
        assert_eq!(
            list.entries.iter().filter(|e| e.contains_input).count(),
            1,
            "{address}"
        );
        let marked = list.containing_entry().unwrap();
        assert_eq!(marked.start, report.subnet.network_id);
        assert_eq!(marked.end, report.subnet.broadcast);
    }
}

#[test]
fn test_failures_stop_at_first_problem() {
    assert_eq!(resolve_network("   ", None), Err(ValidationFailure::EmptyAddress));
    assert_eq!(
        resolve_network("1.2.3.4/99", Some("bogus")),
        Err(ValidationFailure::InvalidCidr {
            text: "99".to_string()
        })
    );
    assert_eq!(
        resolve_network("1.2.3", Some("bogus")),
        Err(ValidationFailure::InvalidMask {
            text: "bogus".to_string()
        })
    );
}
