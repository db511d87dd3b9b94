//! Core Settings struct and implementations.

use std::path::{Path, PathBuf};

/// Default application name when `APP_NAME` is unset.
pub const DEFAULT_APP_NAME: &str = "raylib-game";

/// Default executable path when `EXECUTABLE` is unset.
pub const DEFAULT_EXECUTABLE: &str = "src/main";

/// Default bundle identifier when `BUNDLE_ID` is unset.
pub const DEFAULT_BUNDLE_IDENTIFIER: &str = "com.example.raylibgame";

/// Default version string when `VERSION` is unset.
pub const DEFAULT_VERSION: &str = "1.0";

/// Relative path of the Info.plist template within the project directory.
pub const TEMPLATE_RELATIVE_PATH: &str = "packaging/Info.plist.template";

/// Main settings for a packaging run.
///
/// Constructed via [`SettingsBuilder`]; every option falls back to a fixed
/// default when not provided.
///
/// # Examples
///
/// ```no_run
/// use raypack::packager::SettingsBuilder;
///
/// # fn example() -> raypack::packager::Result<()> {
/// let settings = SettingsBuilder::new()
///     .app_name("MyGame")
///     .version("2.0")
///     .build()?;
/// assert_eq!(settings.dmg_path(), std::path::Path::new("./MyGame-2.0.dmg"));
/// # Ok(())
/// # }
/// ```
///
/// # See Also
///
/// - [`SettingsBuilder`] - Builder for constructing Settings
///
/// [`SettingsBuilder`]: super::SettingsBuilder
#[derive(Clone, Debug)]
pub struct Settings {
    /// Application name, used for the bundle, the executable inside it,
    /// and the DMG volume.
    app_name: String,

    /// Path to the compiled game executable (built if absent).
    executable: PathBuf,

    /// CFBundleIdentifier value.
    bundle_identifier: String,

    /// Version string embedded in the descriptor and the DMG filename.
    version: String,

    /// Optional icon file copied into Contents/Resources.
    icon: Option<PathBuf>,

    /// Optional codesign identity. None leaves the bundle unsigned.
    signing_identity: Option<String>,

    /// Directory where the bundle and disk image are created and where
    /// the Info.plist template is looked up.
    ///
    /// Defaults to the current directory.
    project_dir: PathBuf,
}

impl Settings {
    /// Returns the application name.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Returns the path of the game executable.
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Returns the bundle identifier.
    pub fn bundle_identifier(&self) -> &str {
        &self.bundle_identifier
    }

    /// Returns the version string.
    pub fn version_string(&self) -> &str {
        &self.version
    }

    /// Returns the configured icon path, if any.
    pub fn icon(&self) -> Option<&Path> {
        self.icon.as_deref()
    }

    /// Returns the codesign identity, if any.
    pub fn signing_identity(&self) -> Option<&str> {
        self.signing_identity.as_deref()
    }

    /// Returns the project directory artifacts are created in.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Returns the path of the `.app` bundle for this run.
    pub fn bundle_path(&self) -> PathBuf {
        self.project_dir.join(format!("{}.app", self.app_name))
    }

    /// Returns the path of the disk image for this run.
    ///
    /// The filename is always `<app_name>-<version>.dmg`.
    pub fn dmg_path(&self) -> PathBuf {
        self.project_dir
            .join(format!("{}-{}.dmg", self.app_name, self.version))
    }

    /// Returns the path of the Info.plist template.
    pub fn template_path(&self) -> PathBuf {
        self.project_dir.join(TEMPLATE_RELATIVE_PATH)
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        app_name: String,
        executable: PathBuf,
        bundle_identifier: String,
        version: String,
        icon: Option<PathBuf>,
        signing_identity: Option<String>,
        project_dir: PathBuf,
    ) -> Self {
        Self {
            app_name,
            executable,
            bundle_identifier,
            version,
            icon,
            signing_identity,
            project_dir,
        }
    }
}
