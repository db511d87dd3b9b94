//! Build-if-missing stage for the game executable.

use crate::packager::{Result, Settings, tools::PlatformTools};
use crate::bail;

/// Ensures the configured executable exists, compiling it if absent.
///
/// The C source is expected next to the executable path with a `.c`
/// extension (e.g., `src/main` builds from `src/main.c`). An executable
/// that already exists is used as-is; nothing is rebuilt.
pub async fn ensure_executable<T: PlatformTools>(settings: &Settings, tools: &T) -> Result<()> {
    let executable = settings.executable();

    if executable.is_file() {
        log::debug!("Using existing executable: {}", executable.display());
        return Ok(());
    }

    let source = executable.with_extension("c");
    if !source.is_file() {
        bail!(
            "no executable at {} and no source at {}",
            executable.display(),
            source.display()
        );
    }

    tools.compile(&source, executable).await?;

    if !executable.is_file() {
        bail!(
            "compiler reported success but {} was not produced",
            executable.display()
        );
    }

    log::info!("✓ Built {}", executable.display());
    Ok(())
}
