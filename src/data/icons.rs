//! Icon metadata loading and filtering
//!
//! Decodes the `icons.json` metadata map and selects the records that
//! ship a "solid" rendering style together with a codepoint.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Result;
use log::trace;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::codegen::constant_name;
use crate::core::errors::{FileContext, MissingInput};

/// File name the generator looks for inside the icons directory
pub const ICONS_FILE: &str = "icons.json";

/// The root metadata map: icon name to raw record value.
pub type IconSet = BTreeMap<String, Value>;

/// One icon entry as found in the metadata map.
///
/// Both fields are optional on purpose: a missing field and a field of
/// the wrong JSON type collapse into the same `None`, so the skip logic
/// treats them uniformly. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct IconRecord {
    /// Rendering styles the icon is available in ("solid", "regular", ...)
    #[serde(default, deserialize_with = "styles_or_none")]
    pub styles: Option<Vec<String>>,
    /// Hexadecimal codepoint string, no `0x` prefix (e.g. "f8e8")
    #[serde(default, deserialize_with = "unicode_or_none")]
    pub unicode: Option<String>,
}

fn styles_or_none<'de, D>(de: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(de)?;
    // Non-string elements are dropped; they can never equal "solid".
    Ok(value.as_array().map(|items| {
        items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_owned))
            .collect()
    }))
}

fn unicode_or_none<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(de)?;
    // Only a non-empty string counts; null, numbers and the empty string
    // all collapse into the absent case.
    Ok(match value {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}

/// Load the icon metadata map from `path`.
///
/// A missing file is detected before parsing and surfaces as
/// [`MissingInput`]; malformed JSON propagates as an ordinary error.
pub fn load_icon_set(path: &Path) -> Result<IconSet> {
    if !path.exists() {
        return Err(MissingInput::at(path).into());
    }
    let raw = fs::read_to_string(path).with_file_context("read", path)?;
    let set = serde_json::from_str(&raw).with_file_context("parse", path)?;
    Ok(set)
}

/// Select the icons available in the "solid" style.
///
/// Returns (constant identifier, codepoint-as-given) pairs; callers sort
/// by identifier before emitting. Records that fail any filter rule are
/// skipped silently (trace-level log only).
pub fn solid_icons(set: &IconSet) -> Vec<(String, String)> {
    let mut entries = Vec::new();
    for (name, value) in set {
        if !value.is_object() {
            trace!("skipping {name}: entry is not an object");
            continue;
        }
        let record: IconRecord =
            serde_json::from_value(value.clone()).unwrap_or_default();
        let Some(styles) = &record.styles else {
            trace!("skipping {name}: no style list");
            continue;
        };
        if !styles.iter().any(|s| s.eq_ignore_ascii_case("solid")) {
            trace!("skipping {name}: no solid style");
            continue;
        }
        let Some(unicode) = record.unicode else {
            trace!("skipping {name}: no codepoint");
            continue;
        };
        entries.push((constant_name(name), unicode));
    }
    entries
}
