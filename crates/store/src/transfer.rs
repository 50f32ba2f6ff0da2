//! Import/export file formats.
//!
//! Both formats carry the same envelope:
//!
//! ```json
//! { "version": 1, "tool": "loadout-planner", "exportedAt": "...", "loadouts": [ ... ] }
//! { "version": 1, "tool": "loadout-planner", "type": "single", "exportedAt": "...", "loadout": { ... } }
//! ```

use chrono::{DateTime, Utc};
use planner_core::{ErrorSeverity, Loadout, LoadoutId, PlannerError};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::migration::decode_record;

pub const EXPORT_VERSION: u32 = 1;
pub const EXPORT_TOOL: &str = "loadout-planner";

/// Errors surfaced to the user when an import file is rejected.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("file is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("expected a Loadout Planner JSON export")]
    NotAnExport,

    #[error("no loadout found in file")]
    NoLoadout,

    #[error("invalid loadout data: {0}")]
    InvalidLoadout(String),
}

impl PlannerError for ImportError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidJson(_) => "IMPORT_INVALID_JSON",
            Self::NotAnExport => "IMPORT_NOT_AN_EXPORT",
            Self::NoLoadout => "IMPORT_NO_LOADOUT",
            Self::InvalidLoadout(_) => "IMPORT_INVALID_LOADOUT",
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BulkExport<'a> {
    version: u32,
    tool: &'static str,
    exported_at: DateTime<Utc>,
    loadouts: &'a [Loadout],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SingleExport<'a> {
    version: u32,
    tool: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
    exported_at: DateTime<Utc>,
    loadout: &'a Loadout,
}

/// Serializes the whole collection as a backup file.
pub fn export_all(loadouts: &[Loadout], now: DateTime<Utc>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&BulkExport {
        version: EXPORT_VERSION,
        tool: EXPORT_TOOL,
        exported_at: now,
        loadouts,
    })
}

/// Serializes one loadout for sharing.
pub fn export_single(loadout: &Loadout, now: DateTime<Utc>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&SingleExport {
        version: EXPORT_VERSION,
        tool: EXPORT_TOOL,
        kind: "single",
        exported_at: now,
        loadout,
    })
}

fn parse_envelope(json: &str) -> Result<Map<String, Value>, ImportError> {
    match serde_json::from_str(json) {
        Ok(Value::Object(envelope)) => Ok(envelope),
        Ok(_) => Err(ImportError::NotAnExport),
        Err(e) => Err(ImportError::InvalidJson(e.to_string())),
    }
}

/// Reads one loadout from a single or bulk export.
///
/// Bulk files yield their first loadout. The result is migrated and gets a
/// fresh id and timestamps, so importing the same file twice yields two
/// distinct loadouts.
pub fn import_single(json: &str, id: LoadoutId, now: DateTime<Utc>) -> Result<Loadout, ImportError> {
    let mut envelope = parse_envelope(json)?;

    let is_single = envelope.get("type").and_then(Value::as_str) == Some("single");
    let raw = if is_single && envelope.get("loadout").is_some_and(Value::is_object) {
        envelope.remove("loadout")
    } else if let Some(Value::Array(list)) = envelope.get_mut("loadouts") {
        (!list.is_empty()).then(|| list.swap_remove(0))
    } else {
        None
    };
    let Some(Value::Object(mut record)) = raw else {
        return Err(ImportError::NoLoadout);
    };

    let has_name = record
        .get("name")
        .and_then(Value::as_str)
        .is_some_and(|name| !name.is_empty());
    if !has_name || !record.get("slots").is_some_and(Value::is_object) {
        return Err(ImportError::InvalidLoadout(
            "a loadout needs a name and slots".into(),
        ));
    }

    record.insert("id".into(), Value::String(id.as_str().to_string()));
    let stamp = Value::String(now.to_rfc3339());
    record.insert("createdAt".into(), stamp.clone());
    record.insert("updatedAt".into(), stamp);

    decode_record(Value::Object(record)).map_err(|e| ImportError::InvalidLoadout(e.to_string()))
}

/// Outcome of reading a backup file.
#[derive(Debug, Default)]
pub struct BulkImport {
    pub loadouts: Vec<Loadout>,
    /// Records that could not be decoded, with the reason.
    pub skipped: Vec<String>,
}

/// Reads every loadout from a bulk export.
///
/// Ids and timestamps are kept: a backup restores the collection as it was.
/// Undecodable records are skipped and reported rather than failing the file.
pub fn import_all(json: &str) -> Result<BulkImport, ImportError> {
    let mut envelope = parse_envelope(json)?;
    let Some(Value::Array(records)) = envelope.remove("loadouts") else {
        return Err(ImportError::NotAnExport);
    };

    let mut result = BulkImport::default();
    for (index, record) in records.into_iter().enumerate() {
        match decode_record(record) {
            Ok(loadout) => result.loadouts.push(loadout),
            Err(e) => result.skipped.push(format!("record {index}: {e}")),
        }
    }
    Ok(result)
}

/// `loadout-<safe-name>.json`: ASCII alphanumerics, `-`, `_` and spaces are
/// kept, whitespace runs become `-`, everything is lowercased.
pub fn single_export_file_name(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ' '))
        .collect();
    let safe = kept
        .split(' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("loadout-{safe}.json")
}

/// `loadout-planner-<YYYY-MM-DD>.json`.
pub fn bulk_export_file_name(now: DateTime<Utc>) -> String {
    format!("loadout-planner-{}.json", now.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use planner_core::MissionType;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn file_names() {
        assert_eq!(
            single_export_file_name("Raid  Night: Heavy!"),
            "loadout-raid-night-heavy.json"
        );
        assert_eq!(single_export_file_name("???"), "loadout-.json");
        assert_eq!(
            bulk_export_file_name(at(1_700_000_000)),
            "loadout-planner-2023-11-14.json"
        );
    }

    #[test]
    fn single_export_envelope() {
        let loadout = Loadout::from_preset("a".into(), "Raid", MissionType::Combat, at(0));
        let json = export_single(&loadout, at(60)).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["version"], 1);
        assert_eq!(value["tool"], EXPORT_TOOL);
        assert_eq!(value["type"], "single");
        assert_eq!(value["loadout"]["missionType"], "Combat");
        assert!(value.get("loadouts").is_none());
    }

    #[test]
    fn bulk_file_imports_its_first_loadout_as_single() {
        let first = Loadout::from_preset("a".into(), "First", MissionType::Mining, at(0));
        let second = Loadout::empty("b".into(), "Second", at(0));
        let json = export_all(&[first, second], at(60)).unwrap();

        let imported = import_single(&json, "fresh".into(), at(120)).unwrap();
        assert_eq!(imported.name, "First");
        assert_eq!(imported.id.as_str(), "fresh");
        assert_eq!(imported.created_at, at(120));
    }

    #[test]
    fn rejects_non_exports() {
        assert!(matches!(
            import_single("nope", "x".into(), at(0)),
            Err(ImportError::InvalidJson(_))
        ));
        assert!(matches!(
            import_single("[1, 2]", "x".into(), at(0)),
            Err(ImportError::NotAnExport)
        ));
        assert!(matches!(
            import_single(r#"{"loadouts": []}"#, "x".into(), at(0)),
            Err(ImportError::NoLoadout)
        ));
        assert!(matches!(
            import_single(r#"{"type":"single","loadout":{"name":"x"}}"#, "x".into(), at(0)),
            Err(ImportError::InvalidLoadout(_))
        ));
        assert!(matches!(import_all(r#"{"version": 1}"#), Err(ImportError::NotAnExport)));
    }

    #[test]
    fn bulk_import_skips_bad_records() {
        let good = Loadout::empty("a".into(), "Good", at(0));
        let json = format!(
            r#"{{"version":1,"loadouts":[{},{{"name":"no id"}}]}}"#,
            serde_json::to_string(&good).unwrap()
        );

        let result = import_all(&json).unwrap();
        assert_eq!(result.loadouts, vec![good]);
        assert_eq!(result.skipped.len(), 1);
    }
}
