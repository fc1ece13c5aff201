//! JSON output of reports and failures.

use crate::error::ValidationFailure;
use crate::models::NetworkReport;
use serde_json::json;

/// Serialize a report as pretty-printed JSON.
pub fn report_json(report: &NetworkReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Serialize a validation failure as `{"error": kind, "message": text}`.
pub fn failure_json(failure: &ValidationFailure) -> Result<String, serde_json::Error> {
    let kind = match failure {
        ValidationFailure::EmptyAddress => "EmptyAddress",
        ValidationFailure::InvalidAddress { .. } => "InvalidAddress",
        ValidationFailure::InvalidCidr { .. } => "InvalidCidr",
        ValidationFailure::InvalidMask { .. } => "InvalidMask",
        ValidationFailure::NoDefaultPrefix { .. } => "NoDefaultPrefix",
    };
    serde_json::to_string_pretty(&json!({
        "error": kind,
        "message": failure.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::resolve_network;

    #[test]
    fn test_report_json_fields() {
        let report = resolve_network("192.168.1.10", None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report_json(&report).unwrap()).unwrap();
        assert_eq!(value["address"], "192.168.1.10");
        assert_eq!(value["mask"], "255.255.255.0");
        assert_eq!(value["prefix"], 24);
        assert_eq!(value["class"], "C");
        assert_eq!(value["subnet"]["broadcast"], "192.168.1.255");
        assert_eq!(value["hosts"]["usable_count"], 254);
        assert_eq!(value["listing"]["Listed"]["total"], 1);
        assert_eq!(value["listing"]["Listed"]["parent"], "192.168.1.0/24");
    }

    #[test]
    fn test_failure_json() {
        let failure = resolve_network("224.0.0.1", None).unwrap_err();
        let value: serde_json::Value =
            serde_json::from_str(&failure_json(&failure).unwrap()).unwrap();
        assert_eq!(value["error"], "NoDefaultPrefix");
        assert!(value["message"]
            .as_str()
            .unwrap()
            .contains("Class D (Multicast)"));
    }
}
