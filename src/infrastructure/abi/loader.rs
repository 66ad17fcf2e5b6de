//! Package loader - reads an ABI package from a JSON file or a directory of ABI files

use std::fs;
use std::path::Path;
use std::time::Instant;

use serde_json::{Map, Value};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::domain::abi::AbiPackage;
use crate::error::{PackageError, Result};

const MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;

/// Statistics from the last load
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    /// Number of JSON files read
    pub scanned_files: usize,
    /// Number of exports in the package
    pub exports: usize,
    /// Files that could not be read, parsed, or were too large
    pub errors: Vec<String>,
    /// Load duration in milliseconds
    pub load_ms: u128,
}

pub struct PackageLoader;

impl PackageLoader {
    /// Load a package from a file or a directory
    pub fn load(path: impl AsRef<Path>) -> Result<(AbiPackage, LoadStats)> {
        let started = Instant::now();
        let path = path.as_ref();

        let (exports, mut stats) = if path.is_file() {
            let stats = LoadStats {
                scanned_files: 1,
                ..LoadStats::default()
            };
            (Self::load_file(path)?, stats)
        } else if path.is_dir() {
            Self::load_dir(path)
        } else {
            return Err(PackageError::NotAPackage(path.to_path_buf()));
        };

        stats.exports = exports.len();
        stats.load_ms = started.elapsed().as_millis();
        debug!(
            path = %path.display(),
            files = stats.scanned_files,
            exports = stats.exports,
            errors = stats.errors.len(),
            ms = stats.load_ms,
            "loaded ABI package"
        );

        Ok((AbiPackage::new(exports), stats))
    }

    /// A JSON object maps export names to values; a bare array is one ABI
    fn load_file(path: &Path) -> Result<Map<String, Value>> {
        match Self::read_json(path)? {
            Value::Object(exports) => Ok(exports),
            value @ Value::Array(_) => {
                let mut exports = Map::new();
                exports.insert(format!("{}Abi", Self::file_stem(path)), value);
                Ok(exports)
            }
            _ => Err(PackageError::NotAPackage(path.to_path_buf())),
        }
    }

    /// Every JSON file under the directory becomes an export named by its stem
    fn load_dir(root: &Path) -> (Map<String, Value>, LoadStats) {
        let mut exports = Map::new();
        let mut stats = LoadStats::default();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !Self::is_ignored_dir(e.path()))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    stats.errors.push(err.to_string());
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let metadata = match entry.metadata() {
                Ok(meta) => meta,
                Err(err) => {
                    stats.errors.push(format!("{}: {}", path.display(), err));
                    continue;
                }
            };
            if metadata.len() > MAX_FILE_BYTES {
                stats.errors.push(format!(
                    "{}: {} bytes exceeds the {} byte limit",
                    path.display(),
                    metadata.len(),
                    MAX_FILE_BYTES
                ));
                continue;
            }

            stats.scanned_files += 1;

            match Self::read_json(path) {
                Ok(value) => {
                    let name = Self::file_stem(path);
                    if exports.contains_key(&name) {
                        debug!(export = %name, path = %path.display(), "duplicate export, keeping first");
                        continue;
                    }
                    exports.insert(name, value);
                }
                Err(err) => {
                    warn!(%err, "skipping unreadable ABI file");
                    stats.errors.push(err.to_string());
                }
            }
        }

        (exports, stats)
    }

    fn read_json(path: &Path) -> Result<Value> {
        let content = fs::read_to_string(path).map_err(|source| PackageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| PackageError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    fn file_stem(path: &Path) -> String {
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string()
    }

    /// Check if a path should be ignored
    fn is_ignored_dir(path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|name| matches!(name, ".git" | "target" | "node_modules"))
            .unwrap_or(false)
    }
}
