//! Disk image creation from the built bundle.
//!
//! The bundle is staged in a temporary directory next to an Applications
//! symlink (drag-to-install), then handed to the disk image tool as the
//! source folder for a compressed, read-only image.

use crate::packager::{
    Settings,
    error::{Context, Error, Result},
    tools::PlatformTools,
    utils::fs,
};
use std::path::{Path, PathBuf};

/// Creates `<app_name>-<version>.dmg` from the bundle.
///
/// Any existing disk image at the output path is removed first. Returns
/// the path to the created image.
pub async fn create_dmg<T: PlatformTools>(
    settings: &Settings,
    app_bundle: &Path,
    tools: &T,
) -> Result<PathBuf> {
    let dmg_path = settings.dmg_path();

    // Remove old DMG if it exists
    fs::remove_file(&dmg_path)
        .await
        .context("removing old disk image")?;

    // Stage the bundle in a temporary directory
    let temp_dir = tempfile::tempdir().map_err(|e| {
        Error::GenericError(format!(
            "failed to create staging directory for DMG contents: {}",
            e
        ))
    })?;
    let staging_path = temp_dir.path();

    let app_name = app_bundle
        .file_name()
        .context("invalid app bundle path")?;
    let staged_app = staging_path.join(app_name);

    log::debug!("Copying .app to staging: {}", staged_app.display());
    fs::copy_dir(app_bundle, &staged_app)
        .await
        .with_context(|| {
            format!(
                "copying .app bundle to staging directory: {}",
                staged_app.display()
            )
        })?;

    // Applications symlink for drag-to-install UX
    #[cfg(unix)]
    {
        use crate::packager::error::ErrorExt;
        let applications_link = staging_path.join("Applications");
        std::os::unix::fs::symlink("/Applications", &applications_link)
            .fs_context("creating Applications symlink", &applications_link)?;
    }

    tools
        .make_image(staging_path, settings.app_name(), &dmg_path)
        .await?;

    log::info!("✓ Created DMG: {}", dmg_path.display());

    // temp_dir cleans up staging on drop
    drop(temp_dir);

    Ok(dmg_path)
}
