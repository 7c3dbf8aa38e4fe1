use std::path::Path;

/// `true` when both paths name the same existing file.
///
/// Compares file identity (device and inode on Unix, volume and file index on
/// Windows), so hard links and symlinks to the same file are caught. A path
/// that does not exist yet never matches.
pub fn same_file(a: &Path, b: &Path) -> bool {
    same_file::is_same_file(a, b).unwrap_or(false)
}
