// Shared constants and POSIX path helpers

// ============================================================================
// Constants
// ============================================================================

/// Event loop polling interval in milliseconds
pub const EVENT_POLL_MS: u64 = 50;

/// Status message display duration in seconds
pub const STATUS_DISPLAY_SECS: u64 = 3;

/// Name of the synthetic parent entry at the top of every listing
pub const PARENT_ENTRY: &str = "..";

/// Root of both the host and the container filesystem
pub const ROOT: &str = "/";

// ============================================================================
// Path Composition
// ============================================================================

// Paths are handled as plain strings rather than `PathBuf` because the same
// value has to be valid inside a container as well as on the host.

/// Join a bare entry name onto a directory.
///
/// `".."` resolves to the parent of `dir`; the parent of `/` is `/`.
/// A trailing `/` on `name` is ignored.
pub fn join_path(dir: &str, name: &str) -> String {
    let name = name.trim_end_matches('/');
    if name == PARENT_ENTRY {
        return parent_path(dir);
    }
    if name.is_empty() || name == "." {
        return normalize_dir(dir);
    }

    let dir = normalize_dir(dir);
    if dir == ROOT {
        format!("/{}", name)
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Parent of an absolute directory path. Stays at `/` when already there.
pub fn parent_path(dir: &str) -> String {
    let dir = normalize_dir(dir);
    match dir.rfind('/') {
        Some(0) | None => ROOT.to_owned(),
        Some(pos) => dir[..pos].to_owned(),
    }
}

/// Strip trailing slashes, keeping a lone `/` intact.
fn normalize_dir(dir: &str) -> String {
    let trimmed = dir.trim_end_matches('/');
    if trimmed.is_empty() {
        ROOT.to_owned()
    } else {
        trimmed.to_owned()
    }
}
