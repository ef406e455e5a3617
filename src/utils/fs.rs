use std::fs;
use std::path::{Path, PathBuf};

/// Immediate subdirectories of `root`, in the order the OS enumerates them.
pub fn list_subdirs(root: &Path) -> Result<Vec<PathBuf>, String> {
    let rd = fs::read_dir(root)
        .map_err(|e| format!("Failed to read directory '{}': {}", root.display(), e))?;
    let mut dirs = Vec::new();
    for entry in rd.flatten() {
        let p = entry.path();
        if p.is_dir() {
            dirs.push(p);
        }
    }
    Ok(dirs)
}

pub fn file_name_str(path: &Path) -> Option<&str> {
    path.file_name().and_then(|s| s.to_str())
}

pub fn to_unix_string<P: AsRef<Path>>(p: P) -> String {
    let s = p.as_ref().to_string_lossy().into_owned();
    s.replace('\\', "/")
}
