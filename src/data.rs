//! Loading authored RON data from the data directory.

use crate::errors::DataError;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Parse one RON file.
pub fn load_ron_file<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&content).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse every `.ron` file of `dir`, in file name order.
///
/// Files are expected to be named `<id>-<name>.ron` (e.g. `001-springleaf.ron`)
/// so that name order is id order.
pub fn load_ron_dir<T: DeserializeOwned>(dir: &Path) -> Result<Vec<T>, DataError> {
    let io_error = |source| DataError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("ron") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut items = Vec::with_capacity(paths.len());
    for path in &paths {
        items.push(load_ron_file(path)?);
    }
    log::debug!("loaded {} entries from {}", items.len(), dir.display());
    Ok(items)
}
