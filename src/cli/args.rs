//! Command line argument parsing and validation.
//!
//! Every option is backed by an environment variable, so the tool can be
//! driven entirely from the environment with no flags at all.

use crate::packager::settings::{
    DEFAULT_APP_NAME, DEFAULT_BUNDLE_IDENTIFIER, DEFAULT_EXECUTABLE, DEFAULT_VERSION,
};
use crate::packager::{self, Settings, SettingsBuilder};
use clap::Parser;
use std::path::PathBuf;

/// macOS .app bundle and DMG packager for raylib games
#[derive(Parser, Debug)]
#[command(
    name = "raypack",
    version,
    about = "macOS .app bundle and DMG packager for raylib games",
    long_about = "Packages a compiled raylib game into a macOS application bundle and a \
compressed disk image.

Builds the executable with clang if it does not exist, constructs <APP_NAME>.app, renders \
Info.plist from packaging/Info.plist.template, optionally codesigns the bundle, and creates \
<APP_NAME>-<VERSION>.dmg with hdiutil.

Every option reads from an environment variable, so a plain invocation works too:
  APP_NAME=MyGame VERSION=2.0 raypack

Notarization is not automated; follow-up instructions are printed on success."
)]
pub struct Args {
    /// Application name used for the bundle, executable, and volume
    #[arg(long, env = "APP_NAME", default_value = DEFAULT_APP_NAME, value_name = "NAME")]
    pub app_name: String,

    /// Path to the compiled game executable (built with clang if absent)
    #[arg(long, env = "EXECUTABLE", default_value = DEFAULT_EXECUTABLE, value_name = "PATH")]
    pub executable: PathBuf,

    /// Bundle identifier (CFBundleIdentifier)
    #[arg(long, env = "BUNDLE_ID", default_value = DEFAULT_BUNDLE_IDENTIFIER, value_name = "ID")]
    pub bundle_id: String,

    /// Application version string
    ///
    /// Named app_version so it cannot collide with clap's own --version.
    #[arg(long = "app-version", env = "VERSION", default_value = DEFAULT_VERSION, value_name = "VERSION")]
    pub app_version: String,

    /// Icon file copied into Contents/Resources (skipped if missing)
    #[arg(long, env = "ICON", value_name = "PATH")]
    pub icon: Option<PathBuf>,

    /// Codesign identity; omit to leave the bundle unsigned
    #[arg(long, env = "CODESIGN_ID", value_name = "IDENTITY")]
    pub codesign_id: Option<String>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.app_name.trim().is_empty() {
            return Err("APP_NAME cannot be empty".to_string());
        }
        if self.app_version.trim().is_empty() {
            return Err("VERSION cannot be empty".to_string());
        }
        Ok(())
    }

    /// Build packager settings from the parsed arguments
    pub fn to_settings(&self) -> packager::Result<Settings> {
        SettingsBuilder::new()
            .app_name(self.app_name.as_str())
            .executable(&self.executable)
            .bundle_identifier(self.bundle_id.as_str())
            .version(self.app_version.as_str())
            .icon(self.icon.clone())
            .signing_identity(self.codesign_id.clone())
            .build()
    }
}
