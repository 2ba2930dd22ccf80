//! Menu manifest access

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// One menu entry; only the image reference matters to the asset tools.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuItem {
    /// Absolute-style image path (`/Images/...`), resolved under the asset root
    #[serde(default)]
    pub img: Option<String>,
}

/// Load all manifest entries, in file order.
///
/// Entries that are not objects (or carry a non-string `img`) become empty
/// items, so the reported item count still matches the file.
pub fn load_items(path: &Path) -> Result<Vec<MenuItem>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading manifest {}", path.display()))?;
    let values: Vec<serde_json::Value> =
        serde_json::from_str(&raw).with_context(|| format!("parsing manifest {}", path.display()))?;
    Ok(values
        .into_iter()
        .map(|value| serde_json::from_value(value).unwrap_or_default())
        .collect())
}

/// Resolve an absolute-style image reference under the asset root.
pub fn resolve_image(asset_root: &Path, img: &str) -> PathBuf {
    asset_root.join(img.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_items_keeps_file_order_and_count() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"name": "Tea", "img": "/Images/tea.jpg"}},
                {{"name": "Coffee"}},
                "not an object",
                {{"img": 42}},
                {{"img": "/Images/cake.png"}}
            ]"#
        )
        .unwrap();

        let items = load_items(file.path()).unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].img.as_deref(), Some("/Images/tea.jpg"));
        assert_eq!(items[1].img, None);
        assert_eq!(items[2].img, None);
        assert_eq!(items[3].img, None);
        assert_eq!(items[4].img.as_deref(), Some("/Images/cake.png"));
    }

    #[test]
    fn test_load_items_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(load_items(file.path()).is_err());
    }

    #[test]
    fn test_resolve_image_strips_leading_slash() {
        let resolved = resolve_image(Path::new("public"), "/Images/tea.jpg");
        assert_eq!(resolved, PathBuf::from("public/Images/tea.jpg"));
    }
}
