//! Batch image optimization and reference rewriting
//!
//! Converts every JPEG/PNG in the images directory to WebP, scaling down
//! oversized ones, then rewrites `/Images/` references in the manifest and
//! the UI source to the new filenames. Originals are moved to a backup
//! directory, not deleted.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::GenericImageView;
use image::imageops::FilterType;

use crate::config::OptimizeConfig;
use crate::rewrite::{self, RewriteOutcome};

/// Extensions eligible for conversion
const SOURCE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
/// Extension written by the conversion pass
const TARGET_EXTENSION: &str = "webp";

/// Why a directory entry was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Subdirectory or other non-regular entry
    NotAFile,
    /// Already carries the target extension, typically a prior run's output.
    /// Extension sniffing only; no processed-file manifest is kept.
    AlreadyConverted,
    /// Extension outside the convertible set
    UnsupportedExtension,
}

/// Dimensions before and after a scale-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resize {
    pub from: (u32, u32),
    pub to: (u32, u32),
}

/// Result of processing one directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Converted {
        original: String,
        replacement: String,
        /// Set when the image was scaled down
        resized: Option<Resize>,
    },
    Skipped(SkipReason),
    /// The entry failed on its own; the batch carried on
    Failed { name: String, reason: String },
}

/// Everything one optimization run did.
#[derive(Debug, Default)]
pub struct OptimizeReport {
    pub created_backup_dir: bool,
    /// One outcome per directory entry, in listing order
    pub outcomes: Vec<FileOutcome>,
    /// Original -> replacement filename pairs, in processing order
    pub mapping: Vec<(String, String)>,
    /// Per-file rewrite results; errors are isolated per file
    pub rewrites: Vec<(PathBuf, Result<RewriteOutcome, String>)>,
}

/// Convert the whole images directory, then propagate the renames into the
/// manifest and the UI source.
pub fn run(config: &OptimizeConfig) -> Result<OptimizeReport> {
    let mut report = OptimizeReport::default();

    if !config.backup_dir.exists() {
        fs::create_dir_all(&config.backup_dir).with_context(|| {
            format!("creating backup directory {}", config.backup_dir.display())
        })?;
        report.created_backup_dir = true;
    }

    let entries = fs::read_dir(&config.images_dir)
        .with_context(|| format!("listing {}", config.images_dir.display()))?;

    // Directory listing order, not sorted.
    for entry in entries {
        let entry = entry.with_context(|| format!("listing {}", config.images_dir.display()))?;
        let outcome = process_entry(&entry.path(), config);
        if let FileOutcome::Converted {
            original,
            replacement,
            ..
        } = &outcome
        {
            report
                .mapping
                .push((original.clone(), replacement.clone()));
        }
        report.outcomes.push(outcome);
    }

    if !report.mapping.is_empty() {
        for path in [&config.manifest, &config.ui_source] {
            let result = rewrite::apply(path, &report.mapping).map_err(|err| format!("{err:#}"));
            report.rewrites.push((path.clone(), result));
        }
    }

    Ok(report)
}

/// Classify one directory entry and convert it if eligible. Conversion
/// failures land in the outcome instead of aborting the batch.
fn process_entry(path: &Path, config: &OptimizeConfig) -> FileOutcome {
    if !path.is_file() {
        return FileOutcome::Skipped(SkipReason::NotAFile);
    }
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return FileOutcome::Failed {
            name: path.display().to_string(),
            reason: "non-UTF-8 file name".to_string(),
        };
    };

    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if extension == TARGET_EXTENSION {
        return FileOutcome::Skipped(SkipReason::AlreadyConverted);
    }
    if !SOURCE_EXTENSIONS.contains(&extension.as_str()) {
        return FileOutcome::Skipped(SkipReason::UnsupportedExtension);
    }

    match convert(path, name, config) {
        Ok(outcome) => outcome,
        Err(err) => {
            log::warn!("processing {name}: {err:#}");
            FileOutcome::Failed {
                name: name.to_string(),
                reason: format!("{err:#}"),
            }
        }
    }
}

fn convert(path: &Path, name: &str, config: &OptimizeConfig) -> Result<FileOutcome> {
    let stem = name.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(name);
    // QR codes must stay pixel-accurate to scan: never resized, encoded lossless.
    let is_qr = stem.to_ascii_lowercase().contains("qr");

    let mut img = image::open(path).with_context(|| format!("decoding {name}"))?;
    let (width, height) = img.dimensions();

    let mut resized = None;
    if width > config.max_width && !is_qr {
        let new_height = (height as u64 * config.max_width as u64 / width as u64) as u32;
        img = img.resize_exact(config.max_width, new_height, FilterType::Lanczos3);
        resized = Some(Resize {
            from: (width, height),
            to: (config.max_width, new_height),
        });
    }

    let replacement = format!("{stem}.{TARGET_EXTENSION}");
    let target = path.with_file_name(&replacement);
    let rgba = img.to_rgba8();
    let encoder = webp::Encoder::from_rgba(rgba.as_raw(), rgba.width(), rgba.height());
    let encoded = if is_qr {
        encoder.encode_lossless()
    } else {
        encoder.encode(config.quality)
    };
    fs::write(&target, &*encoded).with_context(|| format!("writing {}", target.display()))?;

    let backup = config.backup_dir.join(name);
    fs::rename(path, &backup)
        .with_context(|| format!("moving {name} to {}", backup.display()))?;

    Ok(FileOutcome::Converted {
        original: name.to_string(),
        replacement,
        resized,
    })
}

/// Print the human-readable run report.
pub fn print_report(config: &OptimizeConfig, report: &OptimizeReport) {
    if report.created_backup_dir {
        println!("Created backup directory: {}", config.backup_dir.display());
    }
    println!(
        "Found {} files in {}...",
        report.outcomes.len(),
        config.images_dir.display()
    );
    for outcome in &report.outcomes {
        match outcome {
            FileOutcome::Converted {
                original,
                resized: Some(resize),
                ..
            } => println!(
                "Resized {}: {}x{} -> {}x{}",
                original, resize.from.0, resize.from.1, resize.to.0, resize.to.1
            ),
            FileOutcome::Failed { name, reason } => {
                println!("Error processing {name}: {reason}");
            }
            _ => {}
        }
    }
    println!("Optimized {} images.", report.mapping.len());
    for (path, result) in &report.rewrites {
        match result {
            Ok(RewriteOutcome::Updated) => println!("Updated {} references.", path.display()),
            Ok(RewriteOutcome::Unchanged) => {
                println!("No changes needed in {}.", path.display());
            }
            Err(reason) => println!("Error updating {}: {reason}", path.display()),
        }
    }
    println!("Optimization complete.");
}
