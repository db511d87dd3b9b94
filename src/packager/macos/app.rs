//! macOS application bundle (.app) creation.

use super::plist;
use crate::packager::{
    Settings,
    error::{Context, ErrorExt, Result},
    utils::fs,
};
use std::path::{Path, PathBuf};
use tokio::fs as tokio_fs;

/// Builds the `.app` bundle for the configured executable.
///
/// Any pre-existing bundle at the same path is removed first; the bundle
/// is regenerated whole on every run. Returns the path to the created
/// bundle.
pub async fn bundle_project(settings: &Settings) -> Result<PathBuf> {
    let app_bundle_path = settings.bundle_path();

    log::info!(
        "Bundling {}.app at {}",
        settings.app_name(),
        app_bundle_path.display()
    );

    // Remove old bundle if it exists
    fs::remove_dir_all(&app_bundle_path)
        .await
        .context("removing old app bundle")?;

    // Create bundle directory structure
    let contents_dir = app_bundle_path.join("Contents");
    let macos_dir = contents_dir.join("MacOS");
    let resources_dir = contents_dir.join("Resources");

    tokio_fs::create_dir_all(&macos_dir)
        .await
        .fs_context("creating MacOS directory", &macos_dir)?;
    tokio_fs::create_dir_all(&resources_dir)
        .await
        .fs_context("creating Resources directory", &resources_dir)?;

    copy_executable(&macos_dir, settings).await?;
    let icon_file = copy_icon(&resources_dir, settings).await?;

    plist::render(&contents_dir, &icon_file, settings).await?;

    Ok(app_bundle_path)
}

/// Copies the game executable into `Contents/MacOS/<app_name>` and marks
/// it executable.
async fn copy_executable(macos_dir: &Path, settings: &Settings) -> Result<()> {
    let src = settings.executable();
    let dst = macos_dir.join(settings.app_name());

    fs::copy_file(src, &dst)
        .await
        .with_context(|| format!("copying {} into the bundle", src.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tokio_fs::set_permissions(&dst, std::fs::Permissions::from_mode(0o755))
            .await
            .fs_context("setting executable permissions", &dst)?;
    }

    Ok(())
}

/// Copies the configured icon into `Contents/Resources`, if present.
///
/// Returns the icon's base filename for descriptor substitution, or the
/// empty string when no icon was bundled. A configured path that does not
/// exist is not an error; the descriptor's icon field is left empty.
async fn copy_icon(resources_dir: &Path, settings: &Settings) -> Result<String> {
    let Some(icon) = settings.icon() else {
        return Ok(String::new());
    };

    if !icon.is_file() {
        log::warn!(
            "Icon {} not found; leaving the descriptor icon field empty",
            icon.display()
        );
        return Ok(String::new());
    }

    let file_name = icon
        .file_name()
        .context("icon path has no filename")?
        .to_string_lossy()
        .into_owned();

    fs::copy_file(icon, &resources_dir.join(&file_name))
        .await
        .with_context(|| format!("copying icon {} into the bundle", icon.display()))?;

    Ok(file_name)
}
