//! On-demand export of the three fixed datasets as downloadable JSON.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::logging::{json_log, obj, v_str, Domain};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Crops,
    Inventory,
    Analytics,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Crops => "crops",
            ExportKind::Inventory => "inventory",
            ExportKind::Analytics => "analytics",
        }
    }
}

/// `{timestamp, type, data}` document with the fixed literal dataset for
/// the requested kind.
pub fn build_export(kind: ExportKind, now: DateTime<Utc>) -> Value {
    json!({
        "timestamp": now.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        "type": kind.as_str(),
        "data": export_data(kind),
    })
}

fn export_data(kind: ExportKind) -> Value {
    match kind {
        ExportKind::Crops => json!({
            "fields": [
                { "name": "Field A", "crop": "Corn", "status": "Growing", "plantingDate": "2025-03-15" },
                { "name": "Field B", "crop": "Wheat", "status": "Harvested", "plantingDate": "2025-02-01" },
                { "name": "Field C", "crop": "Soybeans", "status": "Planting", "plantingDate": "2025-04-01" }
            ]
        }),
        ExportKind::Inventory => json!({
            "items": [
                { "name": "Corn Seeds", "quantity": 15, "status": "Low Stock" },
                { "name": "Fertilizer", "quantity": 50, "status": "Good Stock" },
                { "name": "Equipment", "quantity": 8, "status": "Maintenance Due" }
            ]
        }),
        ExportKind::Analytics => json!({
            "revenue": 125400,
            "costs": 78200,
            "profit": 47200,
            "roi": 60.4
        }),
    }
}

/// Download name: `farm-data-{type}-{YYYY-MM-DD}.json`.
pub fn export_filename(kind: ExportKind, now: DateTime<Utc>) -> String {
    format!("farm-data-{}-{}.json", kind.as_str(), now.format("%Y-%m-%d"))
}

/// Writes the pretty-printed document into `dir` and returns its path.
pub fn write_export(dir: &Path, kind: ExportKind, now: DateTime<Utc>) -> Result<PathBuf> {
    let doc = build_export(kind, now);
    let path = dir.join(export_filename(kind, now));
    fs::write(&path, serde_json::to_string_pretty(&doc)?)?;
    json_log(
        Domain::Export,
        "written",
        obj(&[
            ("type", v_str(kind.as_str())),
            ("path", v_str(&path.to_string_lossy())),
        ]),
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 25, 14, 30, 0).unwrap()
    }

    #[test]
    fn filename_carries_type_and_date() {
        assert_eq!(
            export_filename(ExportKind::Crops, fixed_now()),
            "farm-data-crops-2025-08-25.json"
        );
        assert_eq!(
            export_filename(ExportKind::Analytics, fixed_now()),
            "farm-data-analytics-2025-08-25.json"
        );
    }

    #[test]
    fn document_has_timestamp_type_and_data() {
        let doc = build_export(ExportKind::Inventory, fixed_now());
        assert_eq!(doc["type"], "inventory");
        assert!(doc["timestamp"].as_str().unwrap().starts_with("2025-08-25T14:30:00"));
        assert_eq!(doc["data"]["items"].as_array().unwrap().len(), 3);
        assert_eq!(doc["data"]["items"][0]["name"], "Corn Seeds");
    }

    #[test]
    fn analytics_literals_match_dashboard_defaults() {
        let doc = build_export(ExportKind::Analytics, fixed_now());
        assert_eq!(doc["data"]["revenue"], 125400);
        assert_eq!(doc["data"]["costs"], 78200);
        assert_eq!(doc["data"]["profit"], 47200);
        assert_eq!(doc["data"]["roi"], 60.4);
    }

    #[test]
    fn write_export_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_export(dir.path(), ExportKind::Crops, fixed_now()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["data"]["fields"][1]["crop"], "Wheat");
    }
}
