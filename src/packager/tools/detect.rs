//! External tool detection and availability checking.
//!
//! Runtime detection of the tools the pipeline shells out to. Used for
//! early warnings only; a missing tool still fails fast at its stage.

use std::sync::LazyLock;

/// Check if clang is available for the build-if-missing stage.
///
/// Cached result to avoid repeated PATH lookups.
pub static HAS_CLANG: LazyLock<bool> = LazyLock::new(|| probe("clang"));

/// Check if codesign is available for the optional signing stage.
pub static HAS_CODESIGN: LazyLock<bool> = LazyLock::new(|| probe("codesign"));

/// Check if hdiutil is available for disk image creation.
pub static HAS_HDIUTIL: LazyLock<bool> = LazyLock::new(|| probe("hdiutil"));

fn probe(tool: &str) -> bool {
    match which::which(tool) {
        Ok(path) => {
            log::debug!("Found {} at: {}", tool, path.display());
            true
        }
        Err(e) => {
            log::debug!("{} not found in PATH: {}", tool, e);
            false
        }
    }
}
