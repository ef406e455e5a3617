use crate::types::manifest::MasterEntry;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;

pub fn render_master(master: &[MasterEntry]) -> Result<String, String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    master
        .serialize(&mut ser)
        .map_err(|e| format!("Failed to serialize master list: {}", e))?;
    String::from_utf8(buf).map_err(|e| format!("Master list is not valid UTF-8: {}", e))
}

/// Replaces the file at `path` with the pretty-printed master list.
pub fn write_master(path: &Path, master: &[MasterEntry]) -> Result<(), String> {
    let text = render_master(master)?;
    std::fs::write(path, text)
        .map_err(|e| format!("Failed to write master to '{}': {}", path.display(), e))
}
