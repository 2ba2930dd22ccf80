//! Compiled-in defaults for the site layout and per-tool settings
//!
//! Every tool takes an explicit config struct so tests can point it at a
//! temporary tree; the defaults below match the deployed site layout.

use std::path::PathBuf;

/// JSON manifest listing menu items and their image references
pub const DEFAULT_MANIFEST: &str = "public/data/All.json";
/// Directory that absolute-style image references resolve under
pub const DEFAULT_ASSET_ROOT: &str = "public";
/// Flat directory holding the site's raster images
pub const DEFAULT_IMAGES_DIR: &str = "public/Images";
/// Where originals are moved after optimization
pub const DEFAULT_BACKUP_DIR: &str = "public/Images/_backup";
/// UI source file carrying `/Images/` references
pub const DEFAULT_UI_SOURCE: &str = "src/components/RestaurantMenu.jsx";

/// Content of the generated QR code
pub const QR_URL: &str = "https://www.instagram.com/newvijaybakery/";
/// Default output path for the generated QR image
pub const DEFAULT_QR_OUTPUT: &str = "public/Images/insta-qr.png";
/// Rendered size of one QR module, in pixels
pub const DEFAULT_QR_MODULE_SIZE: u32 = 10;

/// Luminance above this counts as card content (0-255)
pub const DEFAULT_LUMA_THRESHOLD: u8 = 80;
/// Images wider than this are scaled down proportionally
pub const DEFAULT_MAX_WIDTH: u32 = 800;
/// Lossy WebP quality (0-100)
pub const DEFAULT_QUALITY: f32 = 80.0;

/// Inputs for one audit pass.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub manifest: PathBuf,
    pub asset_root: PathBuf,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            asset_root: PathBuf::from(DEFAULT_ASSET_ROOT),
        }
    }
}

/// Inputs for one QR generation pass.
#[derive(Debug, Clone)]
pub struct QrConfig {
    pub url: String,
    pub output: PathBuf,
    pub module_size: u32,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            url: QR_URL.to_string(),
            output: PathBuf::from(DEFAULT_QR_OUTPUT),
            module_size: DEFAULT_QR_MODULE_SIZE,
        }
    }
}

/// Inputs for one optimization pass.
#[derive(Debug, Clone)]
pub struct OptimizeConfig {
    /// Directory whose images are converted
    pub images_dir: PathBuf,
    /// Where originals are moved after conversion
    pub backup_dir: PathBuf,
    /// Manifest file whose references are rewritten
    pub manifest: PathBuf,
    /// UI source file whose references are rewritten
    pub ui_source: PathBuf,
    pub max_width: u32,
    pub quality: f32,
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
            backup_dir: PathBuf::from(DEFAULT_BACKUP_DIR),
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            ui_source: PathBuf::from(DEFAULT_UI_SOURCE),
            max_width: DEFAULT_MAX_WIDTH,
            quality: DEFAULT_QUALITY,
        }
    }
}
