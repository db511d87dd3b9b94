//! External tool invocations behind a narrow capability trait.
//!
//! The pipeline never shells out directly; everything platform-specific
//! (clang, codesign, hdiutil) goes through [`PlatformTools`] so the
//! orchestration stays portable and testable with a fake implementation.

pub mod detect;

use crate::packager::{Error, Result};
use std::path::Path;
use tokio::process::Command;

/// Compiler optimization flags.
const COMPILE_FLAGS: &[&str] = &["-O2"];

/// Header and library search paths for Homebrew-installed raylib.
const SEARCH_PATH_FLAGS: &[&str] = &[
    "-I/usr/local/include",
    "-I/opt/homebrew/include",
    "-L/usr/local/lib",
    "-L/opt/homebrew/lib",
];

/// raylib and the macOS frameworks it needs at link time.
const LINK_FLAGS: &[&str] = &[
    "-lraylib",
    "-framework",
    "Cocoa",
    "-framework",
    "IOKit",
    "-framework",
    "CoreVideo",
    "-framework",
    "CoreAudio",
    "-framework",
    "OpenGL",
];

/// Capability trait for the external tools the pipeline depends on.
///
/// Production code uses [`HostTools`]; tests substitute a recording fake.
#[allow(async_fn_in_trait)]
pub trait PlatformTools {
    /// Compiles a C source file into a native executable at `output`.
    async fn compile(&self, source: &Path, output: &Path) -> Result<()>;

    /// Deep-signs the bundle at `bundle` with the given identity.
    async fn sign(&self, bundle: &Path, identity: &str) -> Result<()>;

    /// Creates a compressed, read-only disk image at `output` from the
    /// contents of `src_folder`, with the given volume name.
    async fn make_image(&self, src_folder: &Path, volume_name: &str, output: &Path)
    -> Result<()>;
}

/// [`PlatformTools`] implementation that shells out to the host's
/// clang, codesign, and hdiutil.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostTools;

impl HostTools {
    /// Creates a new host tool runner.
    pub fn new() -> Self {
        Self
    }
}

impl PlatformTools for HostTools {
    async fn compile(&self, source: &Path, output: &Path) -> Result<()> {
        log::info!(
            "Building {} from {}",
            output.display(),
            source.display()
        );

        let out = Command::new("clang")
            .args(COMPILE_FLAGS)
            .arg(source)
            .arg("-o")
            .arg(output)
            .args(SEARCH_PATH_FLAGS)
            .args(LINK_FLAGS)
            .output()
            .await
            .map_err(|error| Error::CommandFailed {
                command: "clang".into(),
                error,
            })?;

        if !out.status.success() {
            return Err(Error::BuildFailed {
                stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
            });
        }

        Ok(())
    }

    async fn sign(&self, bundle: &Path, identity: &str) -> Result<()> {
        log::info!("Signing {} with identity '{}'", bundle.display(), identity);

        let out = Command::new("codesign")
            .args(["--deep", "--force", "--sign", identity])
            .arg(bundle)
            .output()
            .await
            .map_err(|error| Error::CommandFailed {
                command: "codesign".into(),
                error,
            })?;

        if !out.status.success() {
            return Err(Error::SigningFailed {
                stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
            });
        }

        log::info!("✓ Signed {}", bundle.display());
        Ok(())
    }

    async fn make_image(
        &self,
        src_folder: &Path,
        volume_name: &str,
        output: &Path,
    ) -> Result<()> {
        log::info!("Creating UDZO disk image {}", output.display());

        let out = Command::new("hdiutil")
            .args(["create", "-volname", volume_name, "-srcfolder"])
            .arg(src_folder)
            .args(["-ov", "-format", "UDZO"])
            .arg(output)
            .output()
            .await
            .map_err(|error| Error::CommandFailed {
                command: "hdiutil".into(),
                error,
            })?;

        if !out.status.success() {
            return Err(Error::DiskImageFailed {
                stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
            });
        }

        Ok(())
    }
}
