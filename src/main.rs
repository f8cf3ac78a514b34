//! Icon conversion utility.
//!
//! Converts a PNG image into a Windows ICO file containing rasterizations
//! at 256, 128, 64, 48, 32, and 16 pixels.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use png2ico::{convert_to_ico, ConvertError};

#[derive(Parser)]
#[command(name = "png2ico")]
#[command(about = "Convert a PNG image into a multi-resolution Windows ICO file")]
struct Cli {
    /// Input PNG file
    #[arg(default_value = "icon-512.png")]
    source: PathBuf,

    /// Output ICO file
    #[arg(default_value = "app.ico")]
    target: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    match convert_to_ico(&cli.source, &cli.target) {
        Ok(()) => {
            println!(
                "Created {} from {}",
                cli.target.display(),
                cli.source.display()
            );
        }
        // A missing input is a clean no-op, not a failure.
        Err(ConvertError::SourceNotFound { .. }) => {
            println!("Source file {} not found.", cli.source.display());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
