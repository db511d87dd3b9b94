//! Builder for constructing Settings.

use super::core::{
    DEFAULT_APP_NAME, DEFAULT_BUNDLE_IDENTIFIER, DEFAULT_EXECUTABLE, DEFAULT_VERSION, Settings,
};
use crate::packager::macos::plist::PLACEHOLDER_TOKENS;
use crate::packager::{Error, Result};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Every field is optional; unset fields fall back to the documented
/// defaults. Values that contain one of the Info.plist placeholder tokens
/// are rejected, since the renderer performs literal substitution.
///
/// # Examples
///
/// ```no_run
/// use raypack::packager::SettingsBuilder;
///
/// # fn example() -> raypack::packager::Result<()> {
/// let settings = SettingsBuilder::new()
///     .app_name("MyGame")
///     .executable("target/game")
///     .signing_identity(Some("Developer ID Application: Jane (TEAMID)".into()))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    app_name: Option<String>,
    executable: Option<PathBuf>,
    bundle_identifier: Option<String>,
    version: Option<String>,
    icon: Option<PathBuf>,
    signing_identity: Option<String>,
    project_dir: Option<PathBuf>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the application name.
    ///
    /// Default: `raylib-game`
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    /// Sets the executable path.
    ///
    /// Default: `src/main`
    pub fn executable<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.executable = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the bundle identifier.
    ///
    /// Default: `com.example.raylibgame`
    pub fn bundle_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.bundle_identifier = Some(identifier.into());
        self
    }

    /// Sets the version string.
    ///
    /// Default: `1.0`
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the optional icon path.
    ///
    /// Default: None (no icon bundled)
    pub fn icon(mut self, icon: Option<PathBuf>) -> Self {
        self.icon = icon;
        self
    }

    /// Sets the optional codesign identity.
    ///
    /// Default: None (bundle left unsigned)
    pub fn signing_identity(mut self, identity: Option<String>) -> Self {
        self.signing_identity = identity;
        self
    }

    /// Sets the directory the bundle and disk image are created in.
    ///
    /// Default: current directory
    pub fn project_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservedToken`] if a substituted value contains
    /// one of the placeholder tokens.
    pub fn build(self) -> Result<Settings> {
        let app_name = self.app_name.unwrap_or_else(|| DEFAULT_APP_NAME.into());
        let bundle_identifier = self
            .bundle_identifier
            .unwrap_or_else(|| DEFAULT_BUNDLE_IDENTIFIER.into());
        let version = self.version.unwrap_or_else(|| DEFAULT_VERSION.into());

        reject_tokens("app name", &app_name)?;
        reject_tokens("bundle identifier", &bundle_identifier)?;
        reject_tokens("version", &version)?;
        if let Some(icon) = &self.icon {
            reject_tokens("icon path", &icon.to_string_lossy())?;
        }

        Ok(Settings::new(
            app_name,
            self.executable
                .unwrap_or_else(|| DEFAULT_EXECUTABLE.into()),
            bundle_identifier,
            version,
            self.icon,
            self.signing_identity,
            self.project_dir.unwrap_or_else(|| PathBuf::from(".")),
        ))
    }
}

/// Rejects values that would collide with the literal substitution step.
fn reject_tokens(field: &'static str, value: &str) -> Result<()> {
    if PLACEHOLDER_TOKENS.iter().any(|t| value.contains(t)) {
        return Err(Error::ReservedToken {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
