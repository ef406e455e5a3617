use crate::{
    types::manifest::MasterEntry,
    utils::logger::{LogLevel, Logger},
};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciled {
    CarriedForward,
    Refreshed,
}

/// Master list written by the previous run, used read-only for timestamp lookups.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<MasterEntry>,
}

impl History {
    pub fn new(entries: Vec<MasterEntry>) -> Self {
        History { entries }
    }

    pub fn empty() -> Self {
        History::default()
    }

    /// Loads the previous master file. A missing or unreadable file yields an
    /// empty history.
    pub fn load(path: &Path, logger: &Logger) -> Self {
        match read_previous_master(path) {
            Ok(history) => {
                logger.log_message(
                    LogLevel::Debug,
                    &format!(
                        "Loaded {} previous entries from {}",
                        history.len(),
                        path.display()
                    ),
                );
                history
            }
            Err(e) => {
                logger.log_message(
                    LogLevel::Debug,
                    &format!("No usable history at {}: {}", path.display(), e),
                );
                History::empty()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn find(&self, internal_name: &Value) -> Option<&MasterEntry> {
        self.entries
            .iter()
            .find(|e| e.internal_name() == Some(internal_name))
    }

    /// Sets `LastUpdate` on `entry`, carrying the previous timestamp forward
    /// while `AssemblyVersion` is unchanged.
    pub fn reconcile(&self, entry: &mut MasterEntry, now: DateTime<Utc>) -> Reconciled {
        let previous = entry
            .internal_name()
            .and_then(|name| self.find(name))
            .filter(|prev| prev.assembly_version() == entry.assembly_version())
            .and_then(|prev| prev.last_update().cloned());

        match previous {
            Some(last_update) => {
                entry.set_last_update(last_update);
                Reconciled::CarriedForward
            }
            None => {
                entry.set_last_update(Value::String(now.timestamp().to_string()));
                Reconciled::Refreshed
            }
        }
    }
}

fn read_previous_master(path: &Path) -> Result<History, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read previous master: {}", e))?;
    let parsed: Value = serde_json::from_str(&text)
        .map_err(|e| format!("Failed to parse previous master: {}", e))?;
    let items = match parsed {
        Value::Array(items) => items,
        _ => return Err("Previous master is not a JSON array".to_string()),
    };

    let entries = items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(MasterEntry::new(map)),
            _ => None,
        })
        .collect();

    Ok(History::new(entries))
}
