//! Command line interface for raypack.
//!
//! Parses environment-backed arguments, runs the packaging pipeline with
//! the host's tools, and prints the manual notarization follow-up.

mod args;

pub use args::Args;

use crate::error::{CliError, Result};
use crate::packager::{HostTools, PackagedArtifact, Packager, tools::detect};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let settings = args.to_settings()?;

    // Early warnings only; each stage still fails fast on its own.
    if !*detect::HAS_HDIUTIL {
        log::warn!("hdiutil not found in PATH; disk image creation will fail");
    }
    if settings.signing_identity().is_some() && !*detect::HAS_CODESIGN {
        log::warn!("codesign not found in PATH; signing will fail");
    }
    if !settings.executable().is_file() && !*detect::HAS_CLANG {
        log::warn!("clang not found in PATH; the executable cannot be built");
    }

    let packager = Packager::new(settings, HostTools::new());
    let artifact = packager.run().await?;

    print_completion_notice(&artifact);
    Ok(0)
}

/// Prints the created artifacts and the manual notarization steps.
///
/// Notarization needs Apple credentials and is deliberately not automated.
fn print_completion_notice(artifact: &PackagedArtifact) {
    let dmg = artifact.disk_image.display();

    println!("Created {}", artifact.bundle.display());
    println!("Created {} ({} bytes)", dmg, artifact.size);
    println!("SHA256: {}", artifact.checksum);
    println!();
    println!("To notarize for distribution outside the App Store:");
    println!(
        "  xcrun notarytool submit {dmg} --apple-id YOUR_APPLE_ID \\"
    );
    println!("    --team-id YOUR_TEAM_ID --password YOUR_APP_SPECIFIC_PASSWORD --wait");
    println!("  xcrun stapler staple {dmg}");
}
