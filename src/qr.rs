//! QR code generation for the site's Instagram link

use std::fs;

use anyhow::{Context, Result};
use image::Luma;
use qrcode::{EcLevel, QrCode};

use crate::config::QrConfig;

/// Render the configured URL as a black-on-white QR bitmap and write it out.
///
/// Error correction level H keeps the code scannable on a printed card. The
/// render is deterministic: the same config always produces byte-identical
/// output.
pub fn run(config: &QrConfig) -> Result<()> {
    let code = QrCode::with_error_correction_level(config.url.as_bytes(), EcLevel::H)
        .context("encoding QR data")?;
    let img = code
        .render::<Luma<u8>>()
        .module_dimensions(config.module_size, config.module_size)
        .quiet_zone(true)
        .build();

    if let Some(parent) = config.output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    img.save(&config.output)
        .with_context(|| format!("writing {}", config.output.display()))?;

    log::debug!(
        "rendered {}x{} QR for {}",
        img.width(),
        img.height(),
        config.url
    );
    Ok(())
}
