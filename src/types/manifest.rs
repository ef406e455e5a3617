use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw plugin manifest as found on disk, keyed by field name.
pub type Manifest = Map<String, Value>;

pub const INTERNAL_NAME: &str = "InternalName";
pub const ASSEMBLY_VERSION: &str = "AssemblyVersion";
pub const AUTHOR: &str = "Author";
pub const NAME: &str = "Name";
pub const REPO_URL: &str = "RepoUrl";
pub const LAST_UPDATE: &str = "LastUpdate";
pub const DOWNLOAD_COUNT: &str = "DownloadCount";
pub const DOWNLOAD_LINK_INSTALL: &str = "DownloadLinkInstall";
pub const DOWNLOAD_LINK_TESTING: &str = "DownloadLinkTesting";
pub const DOWNLOAD_LINK_UPDATE: &str = "DownloadLinkUpdate";

/// One entry of the published master list.
///
/// Serialized transparently as the underlying JSON object, so a master file
/// written by one run can be read back as history by the next one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MasterEntry(Map<String, Value>);

impl MasterEntry {
    pub fn new(fields: Map<String, Value>) -> Self {
        MasterEntry(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn internal_name(&self) -> Option<&Value> {
        self.get(INTERNAL_NAME)
    }

    pub fn assembly_version(&self) -> Option<&Value> {
        self.get(ASSEMBLY_VERSION)
    }

    pub fn last_update(&self) -> Option<&Value> {
        self.get(LAST_UPDATE)
    }

    pub fn download_count(&self) -> u64 {
        self.get(DOWNLOAD_COUNT)
            .and_then(|v| v.as_u64())
            .unwrap_or(0)
    }

    pub fn set_last_update(&mut self, value: Value) {
        self.0.insert(LAST_UPDATE.to_string(), value);
    }

    /// Human readable identifier used in log lines.
    pub fn label(&self) -> String {
        match self.internal_name() {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "<unnamed>".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    pub download_count: u64,
}

/// Subset of a release lookup response that the download count needs.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseInfo {
    pub assets: Vec<ReleaseAsset>,
}

impl ReleaseInfo {
    pub fn total_downloads(&self) -> u64 {
        self.assets
            .iter()
            .fold(0u64, |acc, a| acc.saturating_add(a.download_count))
    }
}
