//! macOS packaging pipeline for raylib games.
//!
//! Turns a compiled native executable into a `.app` bundle and a
//! compressed `.dmg` disk image:
//!
//! ```no_run
//! use raypack::packager::{HostTools, Packager, SettingsBuilder};
//!
//! # async fn example() -> raypack::packager::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .app_name("MyGame")
//!     .version("1.2")
//!     .build()?;
//!
//! let artifact = Packager::new(settings, HostTools::new()).run().await?;
//! println!("SHA256: {}", artifact.checksum);
//! # Ok(())
//! # }
//! ```
//!
//! External tools (clang, codesign, hdiutil) are reached through the
//! [`PlatformTools`] trait; tests exercise the full pipeline with a fake.

pub mod builder;
pub mod compile;
pub mod error;
pub mod macos;
pub mod settings;
pub mod tools;
pub mod utils;

// Public re-exports
pub use builder::{PackagedArtifact, Packager};
pub use error::{Context, Error, ErrorExt, Result};
pub use settings::{Settings, SettingsBuilder};
pub use tools::{HostTools, PlatformTools};
