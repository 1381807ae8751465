//! Normalization of validated entries into server records.

use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::fields::{self, Entry};
use crate::domain::{ImportOutcome, ServerRecord};
use crate::error::{ImportError, json_kind};
use crate::ports::IdGenerator;

/// Turn validated entries into server records, one outcome per entry.
///
/// Names are made unique against `existing_names` and against each other by
/// appending `-2`, `-3`, ... Entries are processed independently: a failing
/// entry yields a failure outcome and the batch continues.
pub fn normalize(
    servers: &Map<String, Value>,
    existing_names: &HashSet<String>,
    ids: &dyn IdGenerator,
) -> Vec<ImportOutcome> {
    let mut used = existing_names.clone();
    let mut outcomes = Vec::with_capacity(servers.len());

    for (name, entry) in servers {
        let Some(entry) = entry.as_object() else {
            let err = ImportError::EntryNotObject {
                name: name.clone(),
                found: json_kind(entry),
            };
            warn!(server = %name, error = %err, "skipping server entry");
            outcomes.push(ImportOutcome::failed(name, err.to_string()));
            continue;
        };

        let unique = unique_name(name, &used);
        used.insert(unique.clone());
        let original_name = (unique != *name).then(|| name.clone());

        match build_record(&unique, entry, ids) {
            Ok(record) => {
                debug!(
                    server = %record.name,
                    server_type = %record.server_type,
                    renamed_from = original_name.as_deref(),
                    "normalized server entry"
                );
                outcomes.push(ImportOutcome::imported(record, original_name));
            }
            Err(err) => {
                warn!(server = %name, error = %err, "failed to process server entry");
                outcomes.push(ImportOutcome::failed(
                    name,
                    format!("Error processing server: {err}"),
                ));
            }
        }
    }

    outcomes
}

/// First of `base`, `base-2`, `base-3`, ... not in `used`.
fn unique_name(base: &str, used: &HashSet<String>) -> String {
    if !used.contains(base) {
        return base.to_string();
    }
    let mut suffix = 2_usize;
    loop {
        let candidate = format!("{base}-{suffix}");
        if !used.contains(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

fn build_record(
    name: &str,
    entry: &Entry,
    ids: &dyn IdGenerator,
) -> Result<ServerRecord, ImportError> {
    let command = fields::trimmed_str(entry, "command").map(str::to_string);
    let args = fields::string_list(entry.get("args"));
    let env = fields::string_map(entry.get("env"));
    let url = fields::url_value(entry);
    let server_type = fields::resolve_server_type(
        &fields::declared_type(entry),
        command.is_some(),
        url.is_some(),
    );

    let always_allow = fields::string_list(entry.get("alwaysAllow"));
    let never_allow = fields::string_list(entry.get("neverAllow"));
    let permissions = fields::tool_permissions(&always_allow, &never_allow);

    let (remote_url, bearer_token) = if server_type.is_remote() {
        (url.map(str::to_string), fields::bearer_token(entry))
    } else {
        (None, None)
    };

    let id = ids
        .next_id()
        .map_err(|e| ImportError::IdGeneration(e.to_string()))?;

    let record = ServerRecord {
        id,
        name: name.to_string(),
        command,
        args: (!args.is_empty()).then_some(args),
        env,
        server_type,
        remote_url,
        bearer_token,
        tool_permissions: (!permissions.is_empty()).then_some(permissions),
        auto_start: flag(entry, "autoStart"),
        disabled: flag(entry, "disabled"),
        description: description(entry),
    };

    record.check_invariants().map_err(ImportError::Invariant)?;
    Ok(record)
}

/// The description as written, if it has any non-whitespace content.
fn description(entry: &Entry) -> Option<String> {
    entry
        .get("description")
        .and_then(Value::as_str)
        .filter(|d| !d.trim().is_empty())
        .map(str::to_string)
}

fn flag(entry: &Entry, key: &str) -> bool {
    entry.get(key).and_then(Value::as_bool).unwrap_or(false)
}
