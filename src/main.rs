//! raypack - macOS .app bundle and DMG packager for raylib games.
//!
//! This binary builds the game executable if needed, constructs the
//! application bundle, optionally codesigns it, and packages it into a
//! compressed disk image.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match raypack::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
