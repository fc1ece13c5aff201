//! Terminal output utilities.
//!
//! Renders a [`NetworkReport`] as labelled lines with colour highlighting.

use crate::models::{HostRange, NetworkReport, SubnetCount, SubnetList, SubnetListing};
use colored::Colorize;
use itertools::Itertools;

const LABEL_WIDTH: usize = 24;
const ADDRESS_WIDTH: usize = 15;

/// Left-align a value in a field of at least `width` characters.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn pad_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:<width$}")
}

/// Render a count with `,` thousands separators, e.g. `65,536`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(String::from_utf8_lossy)
        .join(",")
}

/// Text for the subnet count relative to the address class.
pub fn describe_subnet_count(count: &SubnetCount) -> String {
    match count {
        SubnetCount::NotApplicable => "N/A (Class D/E/Loopback)".to_string(),
        SubnetCount::Supernetted {
            prefix,
            default_prefix,
        } => format!(
            "N/A (Supernetted: /{prefix} is larger than class default /{default_prefix})"
        ),
        SubnetCount::ClassDefault { default_prefix } => {
            format!("1 (Uses class default /{default_prefix})")
        }
        SubnetCount::Subnets(n) => group_thousands(*n),
    }
}

/// Usable host count with any /31 or /32 note.
pub fn describe_hosts(hosts: &HostRange) -> String {
    match hosts.convention {
        Some(convention) => format!("{} ({convention})", group_thousands(hosts.usable_count)),
        None => group_thousands(hosts.usable_count),
    }
}

fn line(out: &mut String, label: &str, value: impl std::fmt::Display) {
    let label = pad_field(format!("{label}:"), LABEL_WIDTH).bold();
    out.push_str(&format!("{label} {value}\n"));
}

/// Render the sibling listing block.
pub fn render_listing(listing: &SubnetListing) -> String {
    match listing {
        SubnetListing::NotApplicable(skip) => format!("{}\n", skip.to_string().yellow()),
        SubnetListing::Listed(list) => render_subnet_list(list),
    }
}

fn render_subnet_list(list: &SubnetList) -> String {
    let shown = list.entries.len() as u64;
    let of_total = if list.truncated {
        format!(" of {}", group_thousands(list.total))
    } else {
        String::new()
    };
    let mut out = format!(
        "Showing {}{of_total} subnets for {} divided into /{}:\n",
        group_thousands(shown),
        list.parent,
        list.prefix
    );

    for entry in &list.entries {
        let row = format!(
            "{} - {}",
            pad_field(entry.start, ADDRESS_WIDTH),
            pad_field(entry.end, ADDRESS_WIDTH)
        );
        if entry.contains_input {
            let marked = format!("{row}  (contains input IP)").bold().cyan();
            out.push_str(&format!("{marked}\n"));
        } else {
            out.push_str(row.trim_end());
            out.push('\n');
        }
    }

    if list.truncated {
        out.push_str(&format!(
            "...\n(List truncated to first {} subnets)\n",
            group_thousands(shown)
        ));
    }
    out
}

/// Render the whole report for a terminal.
pub fn render_report(report: &NetworkReport) -> String {
    let mut out = String::new();
    line(&mut out, "Given IP", &report.given_address);
    line(&mut out, "Subnet Mask (Binary)", &report.mask_binary);
    line(&mut out, "Subnet Mask (Decimal)", report.mask);
    line(&mut out, "Network Class", &report.class_display);
    line(&mut out, "CIDR", report.cidr());
    line(
        &mut out,
        "Number of Subnets",
        describe_subnet_count(&report.subnet_count),
    );
    line(&mut out, "Number of Usable Hosts", describe_hosts(&report.hosts));
    line(&mut out, "Network Range", &report.network_range);
    line(&mut out, "Subnet ID", report.subnet.network_id);
    line(&mut out, "Broadcast Address", report.subnet.broadcast);
    line(&mut out, "First Host IP", report.hosts.first_usable);
    line(&mut out, "Last Host IP", report.hosts.last_usable);

    for advisory in &report.advisories {
        out.push_str(&format!("{} {advisory}\n", "NOTE".on_blue()));
    }

    out.push('\n');
    out.push_str(&render_listing(&report.listing));
    out
}
