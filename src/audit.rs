//! Size audit of the images referenced by the menu manifest

use std::collections::HashSet;
use std::fs;

use anyhow::Result;

use crate::config::AuditConfig;
use crate::manifest;

/// Number of largest files included in the report
const TOP_FILES: usize = 10;
/// Number of missing paths listed in the report
const MISSING_LISTED: usize = 5;

/// What one audit pass found. Read-only: the manifest and the asset tree are
/// never touched.
#[derive(Debug, Clone)]
pub struct AuditReport {
    /// All manifest entries, including ones without an image
    pub total_items: usize,
    /// Byte size per existing reference, in manifest order. A path referenced
    /// twice appears twice.
    pub files: Vec<(String, u64)>,
    pub total_bytes: u64,
    /// Distinct referenced paths among the existing files
    pub unique_images: usize,
    /// References whose resolved file does not exist
    pub missing: Vec<String>,
}

impl AuditReport {
    /// The largest referenced files, size-descending; ties keep manifest order
    pub fn largest(&self) -> Vec<(String, u64)> {
        let mut sorted = self.files.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted.truncate(TOP_FILES);
        sorted
    }
}

/// Resolve every image reference in the manifest and collect its size.
pub fn run(config: &AuditConfig) -> Result<AuditReport> {
    let items = manifest::load_items(&config.manifest)?;
    let total_items = items.len();

    let mut files = Vec::new();
    let mut missing = Vec::new();
    let mut total_bytes = 0u64;

    for item in &items {
        let Some(img) = item.img.as_deref().filter(|img| !img.is_empty()) else {
            continue;
        };
        let local = manifest::resolve_image(&config.asset_root, img);
        match fs::metadata(&local) {
            Ok(meta) => {
                total_bytes += meta.len();
                files.push((img.to_string(), meta.len()));
            }
            Err(err) => {
                log::debug!("missing {}: {}", local.display(), err);
                missing.push(img.to_string());
            }
        }
    }

    let unique_images = files
        .iter()
        .map(|(name, _)| name.as_str())
        .collect::<HashSet<_>>()
        .len();

    Ok(AuditReport {
        total_items,
        files,
        total_bytes,
        unique_images,
        missing,
    })
}

/// Print the human-readable audit report.
pub fn print_report(report: &AuditReport) {
    println!("Total items in menu: {}", report.total_items);
    println!(
        "Total size of referenced images: {:.2} MB",
        report.total_bytes as f64 / (1024.0 * 1024.0)
    );
    println!("Number of unique images: {}", report.unique_images);
    println!();
    println!("Top {TOP_FILES} Largest Files:");
    for (name, size) in report.largest() {
        println!("{}: {:.2} KB", name, size as f64 / 1024.0);
    }
    if !report.missing.is_empty() {
        println!();
        println!("Missing Files ({}):", report.missing.len());
        for name in report.missing.iter().take(MISSING_LISTED) {
            println!("  {name}");
        }
    }
}
