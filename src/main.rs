mod audit;
mod cli;
mod config;
mod crop;
mod geometry;
mod manifest;
mod optimize;
mod qr;
mod rewrite;

use clap::Parser;

use crate::cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match Cli::parse().command {
        Command::Audit(args) => report_errors(|| {
            let report = audit::run(&args.into_config())?;
            audit::print_report(&report);
            Ok(())
        }),
        Command::Crop(args) => report_errors(|| {
            println!("Processing {}...", args.input.display());
            match crop::run(&args.input, &args.output, args.threshold)? {
                crop::CropOutcome::Cropped(bbox) => {
                    println!("Found content at {bbox}");
                    println!("Saved cropped image to {}", args.output.display());
                }
                crop::CropOutcome::NoContent => {
                    println!("No significant content found. Saving original.");
                }
            }
            Ok(())
        }),
        Command::Qr(args) => {
            // One-shot asset generation fails loudly: no guard here.
            let config = args.into_config();
            qr::run(&config)?;
            println!(
                "QR code successfully generated and saved to {}",
                config.output.display()
            );
            Ok(())
        }
        Command::Optimize(args) => report_errors(|| {
            let config = args.into_config();
            let report = optimize::run(&config)?;
            optimize::print_report(&config, &report);
            Ok(())
        }),
    }
}

/// Batch-script error policy: print the failure and exit cleanly.
fn report_errors(op: impl FnOnce() -> anyhow::Result<()>) -> anyhow::Result<()> {
    if let Err(err) = op() {
        println!("Error: {err:#}");
    }
    Ok(())
}
