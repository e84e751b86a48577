//! Runtime data directory resolution.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_VAR: &str = "DELVE_DATA_DIR";

/// Cached path to the directory containing the engine's runtime data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Resolve the most likely location of the runtime data directory.
fn detect_data_root() -> PathBuf {
    if let Some(dir) = env::var_os(DATA_DIR_VAR) {
        return PathBuf::from(dir);
    }
    let exe_dir = env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf));
    candidate_dirs(exe_dir.as_deref())
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from("delve_engine/data"))
}

/// Places the data directory usually lives: the workspace root, a flattened
/// `data/`, and the same two next to the executable or one level above it.
fn candidate_dirs(exe_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from("delve_engine/data"), PathBuf::from("data")];
    if let Some(dir) = exe_dir {
        candidates.push(dir.join("delve_engine/data"));
        candidates.push(dir.join("data"));
        if let Some(parent) = dir.parent() {
            candidates.push(parent.join("delve_engine/data"));
            candidates.push(parent.join("data"));
        }
    }
    candidates
}
