/// Module loader - rewrites logical import paths into concrete file paths
use std::collections::HashMap;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

/// Extension a file must carry to be imported directly.
pub const SOURCE_EXTENSION: &str = "shl";

/// Entry file assumed when an import names a directory.
pub const INDEX_FILE: &str = "index.shl";

#[derive(Debug, Error)]
pub enum PathError {
    #[error("could not determine the current user's home directory")]
    HomeDir,
}

/// Expand a leading `~` to the current user's home directory.
///
/// Paths that do not start with `~` pass through untouched. This is the
/// only path operation that can fail.
pub fn expand_home(path: &str) -> Result<PathBuf, PathError> {
    if !path.starts_with('~') {
        return Ok(PathBuf::from(path));
    }

    let home = dirs::home_dir().ok_or(PathError::HomeDir)?;
    // Strip the separator so the remainder joins under home instead of
    // replacing it
    let rest = path[1..].trim_start_matches(MAIN_SEPARATOR);
    Ok(home.join(rest))
}

/// Translate a package alias to its location in the filesystem.
///
/// An import can name a package root (`pkg`) or a file inside it
/// (`pkg/util.shl`); either way only the first segment is ever aliased.
/// The rewritten path always goes through [`append_index_file`].
pub fn unalias_path(path: &str, aliases: &HashMap<String, String>) -> String {
    let parts: Vec<&str> = path.split(MAIN_SEPARATOR).collect();

    let aliased = parts
        .first()
        .and_then(|first| aliases.get(*first))
        .filter(|prefix| !prefix.is_empty());

    let resolved = match aliased {
        Some(prefix) => {
            let mut joined = PathBuf::from(prefix);
            for part in &parts[1..] {
                joined.push(part);
            }
            joined.to_string_lossy().into_owned()
        }
        None => path.to_string(),
    };

    append_index_file(&resolved)
}

/// If the path doesn't point at a source file, assume it's a directory and
/// address its index file.
pub fn append_index_file(path: &str) -> String {
    let p = Path::new(path);
    if p.extension().and_then(|ext| ext.to_str()) == Some(SOURCE_EXTENSION) {
        return path.to_string();
    }

    p.join(INDEX_FILE).to_string_lossy().into_owned()
}

/// Resolve a logical import to the concrete file a loader should read:
/// alias rewrite, index-file convention, then `~` expansion.
pub fn resolve_module_path(path: &str, aliases: &HashMap<String, String>) -> Result<PathBuf> {
    let unaliased = unalias_path(path, aliases);
    expand_home(&unaliased).with_context(|| format!("resolving module path {:?}", path))
}
