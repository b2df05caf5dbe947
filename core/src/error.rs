use std::fmt;

/// Construction-time failures only. Per-instruction and per-port behavior
/// never returns `Result` — guest faults are handled in-band instead.
#[derive(Debug)]
pub enum EmulatorError {
    /// The supplied ROM image is larger than the 8 KiB ROM region it would
    /// be loaded into.
    RomTooLarge { size: usize, max: usize },
}

impl fmt::Display for EmulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmulatorError::RomTooLarge { size, max } => write!(
                f,
                "ROM image is {size} bytes, exceeds the {max}-byte ROM region"
            ),
        }
    }
}

impl std::error::Error for EmulatorError {}
