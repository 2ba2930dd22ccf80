//! Command-line surface for the asset tools
//!
//! Every flag defaults to the deployed site layout, so each subcommand runs
//! with no arguments from the repository root.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{self, AuditConfig, OptimizeConfig, QrConfig};

#[derive(Debug, Parser)]
#[command(name = "menu-assets", version, about = "Maintenance tools for the menu site's image assets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Audit referenced image sizes against the menu manifest
    Audit(AuditArgs),
    /// Crop a card image around its detected content
    Crop(CropArgs),
    /// Generate the Instagram QR code image
    Qr(QrArgs),
    /// Convert images to WebP and rewrite references to them
    Optimize(OptimizeArgs),
}

#[derive(Debug, Args)]
pub struct AuditArgs {
    /// Menu manifest to audit
    #[arg(long, default_value = config::DEFAULT_MANIFEST)]
    pub manifest: PathBuf,
    /// Directory image references resolve under
    #[arg(long, default_value = config::DEFAULT_ASSET_ROOT)]
    pub asset_root: PathBuf,
}

impl AuditArgs {
    pub fn into_config(self) -> AuditConfig {
        AuditConfig {
            manifest: self.manifest,
            asset_root: self.asset_root,
        }
    }
}

#[derive(Debug, Args)]
pub struct CropArgs {
    /// Image to crop
    pub input: PathBuf,
    /// Where the result is written
    pub output: PathBuf,
    /// Luminance above this counts as content (0-255)
    #[arg(long, default_value_t = config::DEFAULT_LUMA_THRESHOLD)]
    pub threshold: u8,
}

#[derive(Debug, Args)]
pub struct QrArgs {
    /// Text encoded into the QR code
    #[arg(long, default_value = config::QR_URL)]
    pub url: String,
    /// Where the image is written
    #[arg(long, default_value = config::DEFAULT_QR_OUTPUT)]
    pub output: PathBuf,
    /// Rendered size of one QR module, in pixels
    #[arg(long, default_value_t = config::DEFAULT_QR_MODULE_SIZE)]
    pub module_size: u32,
}

impl QrArgs {
    pub fn into_config(self) -> QrConfig {
        QrConfig {
            url: self.url,
            output: self.output,
            module_size: self.module_size,
        }
    }
}

#[derive(Debug, Args)]
pub struct OptimizeArgs {
    /// Directory whose images are converted
    #[arg(long, default_value = config::DEFAULT_IMAGES_DIR)]
    pub images_dir: PathBuf,
    /// Where originals are moved after conversion
    #[arg(long, default_value = config::DEFAULT_BACKUP_DIR)]
    pub backup_dir: PathBuf,
    /// Manifest file whose references are rewritten
    #[arg(long, default_value = config::DEFAULT_MANIFEST)]
    pub manifest: PathBuf,
    /// UI source file whose references are rewritten
    #[arg(long, default_value = config::DEFAULT_UI_SOURCE)]
    pub ui_source: PathBuf,
    /// Images wider than this are scaled down proportionally
    #[arg(long, default_value_t = config::DEFAULT_MAX_WIDTH)]
    pub max_width: u32,
    /// Lossy WebP quality (0-100)
    #[arg(long, default_value_t = config::DEFAULT_QUALITY)]
    pub quality: f32,
}

impl OptimizeArgs {
    pub fn into_config(self) -> OptimizeConfig {
        OptimizeConfig {
            images_dir: self.images_dir,
            backup_dir: self.backup_dir,
            manifest: self.manifest,
            ui_source: self.ui_source,
            max_width: self.max_width,
            quality: self.quality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_site_layout() {
        let cli = Cli::parse_from(["menu-assets", "optimize"]);
        let Command::Optimize(args) = cli.command else {
            panic!("expected optimize");
        };
        let parsed = args.into_config();
        let defaults = OptimizeConfig::default();
        assert_eq!(parsed.images_dir, defaults.images_dir);
        assert_eq!(parsed.backup_dir, defaults.backup_dir);
        assert_eq!(parsed.manifest, defaults.manifest);
        assert_eq!(parsed.ui_source, defaults.ui_source);
        assert_eq!(parsed.max_width, defaults.max_width);
    }

    #[test]
    fn test_crop_requires_both_paths() {
        assert!(Cli::try_parse_from(["menu-assets", "crop", "in.png"]).is_err());
        let cli = Cli::parse_from(["menu-assets", "crop", "in.png", "out.png"]);
        let Command::Crop(args) = cli.command else {
            panic!("expected crop");
        };
        assert_eq!(args.threshold, config::DEFAULT_LUMA_THRESHOLD);
    }
}
