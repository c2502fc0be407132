//! Option lists from backend JSON payloads.
//!
//! Endpoints such as `/api/drugs` or `/api/medications` answer with
//! `{ "success": true, "<items>": [...] }` and `{ "success": false, "error": ".." }`
//! on failure. This crate turns those payloads into [`DropdownOption`] lists and
//! implements the graceful degradation the widget relies on.

mod sequencer;

use std::collections::HashSet;

use autocomplete_core::{AutocompleteError, DropdownOption};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use sequencer::{RequestSequencer, RequestTicket};

/// Parse an option payload from a JSON string.
pub fn parse_option_payload(
    payload_json: &str,
    items_key: &str,
) -> Result<Vec<DropdownOption>, AutocompleteError> {
    let value: Value = serde_json::from_str(payload_json)
        .map_err(|err| AutocompleteError::Parse(err.to_string()))?;
    parse_option_payload_value(&value, items_key)
}

/// Parse an option payload from a `serde_json::Value`.
pub fn parse_option_payload_value(
    payload: &Value,
    items_key: &str,
) -> Result<Vec<DropdownOption>, AutocompleteError> {
    let success = payload
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !success {
        let reason = payload
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("response did not report success");
        return Err(AutocompleteError::Rejected(reason.to_string()));
    }

    let items = payload
        .get(items_key)
        .and_then(Value::as_array)
        .ok_or(AutocompleteError::MissingData)?;

    items
        .iter()
        .map(|item| {
            DropdownOption::deserialize(item).map_err(|err| {
                AutocompleteError::Parse(format!("invalid entry in {items_key}: {err}"))
            })
        })
        .collect()
}

/// Degrade a failed load to an empty list.
///
/// The error is logged and never reaches the caller, so a broken endpoint
/// leaves the widget usable with no options.
pub fn options_or_empty(
    result: Result<Vec<DropdownOption>, AutocompleteError>,
    source: &str,
) -> Vec<DropdownOption> {
    match result {
        Ok(options) => {
            log::info!("Loaded {} options from {source}", options.len());
            options
        }
        Err(err) => {
            log::error!("Error loading {source}: {err}");
            Vec::new()
        }
    }
}

/// Presentation tweaks applied to labels after loading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct LabelStyle {
    /// Sort alphabetically by label, ignoring case.
    pub sort: bool,
    /// Upper-case the first letter of every word in the label.
    pub capitalize: bool,
}

/// Apply a [`LabelStyle`] and drop entries whose value was already seen.
pub fn normalize_options(options: Vec<DropdownOption>, style: LabelStyle) -> Vec<DropdownOption> {
    let mut seen = HashSet::new();
    let mut normalized: Vec<DropdownOption> = options
        .into_iter()
        .filter(|option| seen.insert(option.value.clone()))
        .map(|mut option| {
            if style.capitalize {
                option.label = capitalize_words(&option.label);
            }
            option
        })
        .collect();

    if style.sort {
        normalized.sort_by_cached_key(|option| option.label.to_lowercase());
    }

    normalized
}

/// Upper-case the first character of every word, leaving the rest untouched.
pub fn capitalize_words(text: &str) -> String {
    let mut previous_is_word = false;
    text.chars()
        .flat_map(|ch| {
            let is_word = ch.is_alphanumeric() || ch == '_';
            let at_boundary = is_word && !previous_is_word;
            previous_is_word = is_word;
            let upper: Vec<char> = if at_boundary {
                ch.to_uppercase().collect()
            } else {
                vec![ch]
            };
            upper
        })
        .collect()
}
