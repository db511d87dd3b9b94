//! macOS packaging library for raylib games.
//!
//! This library turns a compiled raylib game into distributable macOS
//! artifacts:
//! - a `.app` application bundle with a rendered Info.plist
//! - a compressed `.dmg` disk image
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod packager;

// Re-export commonly used types
pub use error::{CliError, PackagerError, Result};
