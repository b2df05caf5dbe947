//! ROM loading: a single raw, header-less, unchecksummed binary blob. No
//! MAME-style ROM-set resolution, no ZIP support — there is exactly one
//! file and it is never part of a named set.

use std::path::Path;

/// Reads the ROM file at `path`. A missing or unreadable ROM is a host
/// transient condition, not fatal: the caller falls back to an empty ROM
/// image and the emulator runs executing NOPs out of zeroed memory.
pub fn load(path: &Path) -> Vec<u8> {
    match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("warning: failed to read ROM {}: {e}", path.display());
            Vec::new()
        }
    }
}
