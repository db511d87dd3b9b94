//! Pipeline orchestration and coordination.
//!
//! This module provides the main [`Packager`] orchestrator that runs the
//! packaging stages in order:
//!
//! 1. Template preflight
//! 2. Build-if-missing (clang)
//! 3. Bundle construction (scaffold, copy, descriptor rendering)
//! 4. Optional code signing
//! 5. Disk image creation
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA-256 checksum calculation for artifacts
//! - `orchestrator` - Main [`Packager`] struct and the stage sequence

pub mod checksum;
mod orchestrator;

pub use orchestrator::{PackagedArtifact, Packager};
