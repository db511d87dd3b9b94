//! macOS bundle and disk image stages.

pub mod app;
pub mod dmg;
pub mod plist;
