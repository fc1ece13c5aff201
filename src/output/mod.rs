//! Output formatting for network reports.
//!
//! This module handles presenting reports:
//! - [`json`] - JSON output
//! - [`terminal`] - Terminal output with colors

mod json;
mod terminal;

pub use json::{failure_json, report_json};
pub use terminal::{
    describe_hosts, describe_subnet_count, group_thousands, pad_field, render_listing,
    render_report,
};
