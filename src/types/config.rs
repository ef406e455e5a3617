use std::path::PathBuf;

pub const DEFAULT_PLUGINS_DIR: &str = "plugins";
pub const DEFAULT_OUTPUT: &str = "pluginmaster.json";
pub const DEFAULT_OWNER: &str = "ReiwaTech";
pub const DEFAULT_CONCURRENCY: u16 = 16;

/// Resolved settings for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub plugins_dir: PathBuf,
    pub output: PathBuf,
    pub owner: String,
    pub api_base_url: String,
    pub concurrency: usize,
}
