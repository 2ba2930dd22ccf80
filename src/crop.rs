//! Content-aware cropping for card images
//!
//! A card scan is mostly dark background around a bright card. Pixels whose
//! luminance clears the threshold are classified as content and the image is
//! cropped to their bounding box.

use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;

use crate::geometry::Rect;

/// What the crop pass did with the input image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CropOutcome {
    /// Content found; the output was cropped to this box
    Cropped(Rect),
    /// Nothing above the threshold; the original was saved unchanged
    NoContent,
}

/// Bounding box of all pixels brighter than the threshold, if any
pub fn content_bounds(img: &RgbaImage, threshold: u8) -> Option<Rect> {
    let gray = image::DynamicImage::ImageRgba8(img.clone()).to_luma8();

    let mut bounds: Option<Rect> = None;
    for (x, y, pixel) in gray.enumerate_pixels() {
        if pixel[0] > threshold {
            match bounds.as_mut() {
                Some(rect) => rect.include(x, y),
                None => bounds = Some(Rect::around_pixel(x, y)),
            }
        }
    }
    bounds
}

/// Crop the image at `input` to its detected content and save it at `output`.
///
/// The input file is never modified; the output path is overwritten if it
/// already exists. A fully below-threshold image is saved unchanged.
pub fn run(input: &Path, output: &Path, threshold: u8) -> Result<CropOutcome> {
    let img = image::open(input)
        .with_context(|| format!("opening {}", input.display()))?
        .to_rgba8();

    match content_bounds(&img, threshold) {
        Some(bbox) => {
            let cropped =
                image::imageops::crop_imm(&img, bbox.left, bbox.top, bbox.width(), bbox.height())
                    .to_image();
            cropped
                .save(output)
                .with_context(|| format!("saving {}", output.display()))?;
            Ok(CropOutcome::Cropped(bbox))
        }
        None => {
            img.save(output)
                .with_context(|| format!("saving {}", output.display()))?;
            Ok(CropOutcome::NoContent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const DARK: Rgba<u8> = Rgba([10, 10, 10, 255]);
    const BRIGHT: Rgba<u8> = Rgba([240, 240, 240, 255]);

    fn card_on_background(width: u32, height: u32, card: Rect) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(width, height, DARK);
        for y in card.top..card.bottom {
            for x in card.left..card.right {
                img.put_pixel(x, y, BRIGHT);
            }
        }
        img
    }

    #[test]
    fn test_content_bounds_finds_bright_region() {
        let card = Rect::new(10, 5, 30, 25);
        let img = card_on_background(100, 50, card);
        assert_eq!(content_bounds(&img, 80), Some(card));
    }

    #[test]
    fn test_content_bounds_none_when_all_dark() {
        let img = RgbaImage::from_pixel(40, 40, DARK);
        assert_eq!(content_bounds(&img, 80), None);
    }

    #[test]
    fn test_run_crops_to_card() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("card.png");
        let output = tmp.path().join("cropped.png");
        let card = Rect::new(8, 4, 24, 20);
        card_on_background(64, 32, card).save(&input).unwrap();

        let outcome = run(&input, &output, 80).unwrap();
        assert_eq!(outcome, CropOutcome::Cropped(card));

        let saved = image::open(&output).unwrap().to_rgba8();
        assert_eq!(saved.dimensions(), (16, 16));
    }

    #[test]
    fn test_run_keeps_dark_image_unchanged() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("dark.png");
        let output = tmp.path().join("out.png");
        let img = RgbaImage::from_pixel(20, 12, DARK);
        img.save(&input).unwrap();

        let outcome = run(&input, &output, 80).unwrap();
        assert_eq!(outcome, CropOutcome::NoContent);

        let saved = image::open(&output).unwrap().to_rgba8();
        assert_eq!(saved.dimensions(), (20, 12));
        assert_eq!(saved.as_raw(), img.as_raw());
        // Input untouched.
        assert!(input.exists());
    }

    #[test]
    fn test_run_rejects_missing_input() {
        let tmp = tempfile::tempdir().unwrap();
        let result = run(
            &tmp.path().join("nope.png"),
            &tmp.path().join("out.png"),
            80,
        );
        assert!(result.is_err());
    }
}
