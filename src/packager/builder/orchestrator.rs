//! Main packaging orchestration.

use super::checksum::calculate_sha256;
use crate::packager::{
    Result, Settings, compile,
    error::ErrorExt,
    macos::{app, dmg, plist},
    tools::PlatformTools,
};
use std::path::PathBuf;

/// Result of one packaging run.
#[derive(Debug, Clone)]
pub struct PackagedArtifact {
    /// Path to the created `.app` bundle.
    pub bundle: PathBuf,

    /// Path to the created disk image.
    pub disk_image: PathBuf,

    /// Disk image size in bytes.
    pub size: u64,

    /// Hex-encoded SHA-256 checksum of the disk image.
    pub checksum: String,
}

/// Main packaging orchestrator.
///
/// Runs the packaging stages strictly in order and fails fast at the
/// first error; no stage is retried and partial artifacts from a failed
/// run are left on disk for inspection.
///
/// External tools are reached through the [`PlatformTools`] parameter, so
/// the pipeline itself has no platform-specific code paths.
///
/// # Examples
///
/// ```no_run
/// use raypack::packager::{HostTools, Packager, SettingsBuilder};
///
/// # async fn example() -> raypack::packager::Result<()> {
/// let settings = SettingsBuilder::new().app_name("MyGame").build()?;
/// let artifact = Packager::new(settings, HostTools::new()).run().await?;
/// println!("Created {} ({} bytes)", artifact.disk_image.display(), artifact.size);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Packager<T: PlatformTools> {
    settings: Settings,
    tools: T,
}

impl<T: PlatformTools> Packager<T> {
    /// Creates a new packager with the given settings and tool runner.
    pub fn new(settings: Settings, tools: T) -> Self {
        Self { settings, tools }
    }

    /// Returns a reference to the packager settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs the pipeline to completion.
    ///
    /// Returns the produced artifact paths with size and checksum of the
    /// disk image.
    pub async fn run(&self) -> Result<PackagedArtifact> {
        // A missing template must abort before any artifact is created.
        plist::ensure_template(&self.settings)?;

        compile::ensure_executable(&self.settings, &self.tools).await?;

        let bundle = app::bundle_project(&self.settings).await?;

        if let Some(identity) = self.settings.signing_identity() {
            self.tools.sign(&bundle, identity).await?;
        } else {
            log::debug!("No signing identity configured, leaving the bundle unsigned");
        }

        let disk_image = dmg::create_dmg(&self.settings, &bundle, &self.tools).await?;

        let size = tokio::fs::metadata(&disk_image)
            .await
            .fs_context("reading artifact metadata", &disk_image)?
            .len();
        let checksum = calculate_sha256(&disk_image).await?;

        Ok(PackagedArtifact {
            bundle,
            disk_image,
            size,
            checksum,
        })
    }
}
