//! ClearCart icon generator
//!
//! Draws the browser extension icons (light gray circle with a green
//! checkmark) at 16, 32, 48 and 128 pixels and writes them to `icons/`.

mod batch;
mod icon;
mod logging;

use std::io::Write;

use batch::IconBatch;
use icon::IconError;

/// Process exit codes
mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const UNEXPECTED_FAILURE: i32 = 1;
    pub const MISSING_CAPABILITY: i32 = 2;
}

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    if let Err(e) = logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
        return exit_codes::UNEXPECTED_FAILURE;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match IconBatch::default().write_all(&mut out) {
        Ok(written) => {
            tracing::debug!(count = written.len(), "icon set complete");
            exit_codes::SUCCESS
        }
        Err(IconError::MissingCapability { capability }) => {
            if let Err(e) = write_remediation(&mut out, capability) {
                eprintln!("Error: {}", e);
            }
            exit_codes::MISSING_CAPABILITY
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_codes::UNEXPECTED_FAILURE
        }
    }
}

/// Explain how to get a build that can draw icons
fn write_remediation<W: Write>(out: &mut W, capability: &str) -> std::io::Result<()> {
    writeln!(out, "The {} is required to generate icons.", capability)?;
    writeln!(
        out,
        "Install it by building with the default features: cargo build --features render"
    )?;
    writeln!(out, "Alternatively, you can create the icons manually.")
}
