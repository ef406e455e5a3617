use crate::{
    types::manifest::Manifest,
    utils::{
        fs::{file_name_str, list_subdirs, to_unix_string},
        logger::{LogLevel, Logger},
    },
};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Reads `<dir>/<dir>.json` for every plugin directory under `root`.
///
/// Entries that cannot be read or parsed are left out. Only a missing or
/// unreadable `root` is an error.
pub fn discover_manifests(root: &Path, logger: &Logger) -> Result<Vec<Manifest>, String> {
    let mut manifests = Vec::new();

    for plugin_dir in list_subdirs(root)? {
        let plugin_name = match file_name_str(&plugin_dir) {
            Some(n) => n.to_string(),
            None => continue,
        };

        let manifest_path = manifest_path_for(&plugin_dir, &plugin_name);
        match read_manifest(&manifest_path) {
            Ok(manifest) => manifests.push(manifest),
            Err(e) => logger.log_message(
                LogLevel::Debug,
                &format!("Skipping {}: {}", to_unix_string(&manifest_path), e),
            ),
        }
    }

    Ok(manifests)
}

fn manifest_path_for(plugin_dir: &Path, plugin_name: &str) -> PathBuf {
    plugin_dir.join(format!("{}.json", plugin_name))
}

pub fn read_manifest(path: &Path) -> Result<Manifest, String> {
    let text =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read manifest: {}", e))?;
    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err("Manifest is not a JSON object".to_string()),
        Err(e) => Err(format!("Invalid JSON: {}", e)),
    }
}
