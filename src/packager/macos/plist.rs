//! Info.plist rendering by literal token substitution.
//!
//! The descriptor is rendered from a static template at a fixed relative
//! path ([`TEMPLATE_RELATIVE_PATH`]) by replacing four placeholder tokens.
//! No escaping is performed; values containing a token are rejected at
//! settings construction instead.
//!
//! [`TEMPLATE_RELATIVE_PATH`]: crate::packager::settings::TEMPLATE_RELATIVE_PATH

use crate::packager::{
    Settings,
    error::{Error, ErrorExt, Result},
};
use std::path::Path;
use tokio::fs;

/// Token replaced by the application name.
pub const TOKEN_APP_NAME: &str = "__APP_NAME__";

/// Token replaced by the bundle identifier.
pub const TOKEN_BUNDLE_IDENTIFIER: &str = "__BUNDLE_IDENTIFIER__";

/// Token replaced by the version string.
pub const TOKEN_VERSION: &str = "__VERSION__";

/// Token replaced by the icon's base filename (or the empty string).
pub const TOKEN_ICON_FILE: &str = "__ICON_FILE__";

/// All placeholder tokens the template may contain.
pub const PLACEHOLDER_TOKENS: [&str; 4] = [
    TOKEN_APP_NAME,
    TOKEN_BUNDLE_IDENTIFIER,
    TOKEN_VERSION,
    TOKEN_ICON_FILE,
];

/// Verifies the template exists before any artifact is created.
///
/// Runs as a preflight so a missing template aborts the pipeline without
/// leaving a partial bundle behind.
pub fn ensure_template(settings: &Settings) -> Result<()> {
    let path = settings.template_path();
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::TemplateMissing { path })
    }
}

/// Renders Info.plist into `contents_dir` from the template.
///
/// `icon_file` is the base filename of the bundled icon, or the empty
/// string when no icon was bundled.
pub async fn render(contents_dir: &Path, icon_file: &str, settings: &Settings) -> Result<()> {
    let template_path = settings.template_path();
    if !template_path.is_file() {
        return Err(Error::TemplateMissing {
            path: template_path,
        });
    }

    let template = fs::read_to_string(&template_path)
        .await
        .fs_context("reading Info.plist template", &template_path)?;

    let rendered = template
        .replace(TOKEN_APP_NAME, settings.app_name())
        .replace(TOKEN_BUNDLE_IDENTIFIER, settings.bundle_identifier())
        .replace(TOKEN_VERSION, settings.version_string())
        .replace(TOKEN_ICON_FILE, icon_file);

    let plist_path = contents_dir.join("Info.plist");
    fs::write(&plist_path, rendered)
        .await
        .fs_context("writing Info.plist", &plist_path)?;

    log::debug!("Rendered {}", plist_path.display());
    Ok(())
}
