//! Configuration for one packaging run.
//!
//! Settings are resolved once, from environment variables or flags, and
//! stay immutable for the duration of the pipeline.

mod builder;
mod core;

pub use builder::SettingsBuilder;
pub use core::{
    DEFAULT_APP_NAME, DEFAULT_BUNDLE_IDENTIFIER, DEFAULT_EXECUTABLE, DEFAULT_VERSION, Settings,
    TEMPLATE_RELATIVE_PATH,
};
