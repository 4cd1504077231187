//! Hardware catalog shown on the listing page and offered by the wizard

mod currency;
mod error;
mod types;

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

pub use currency::format_eur;
pub use error::CatalogError;
pub use types::HardwareItem;

const BUILTIN_CATALOG: &str = include_str!("hardware.toml");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<HardwareItem>,
}

/// Ordered list of bookable hardware
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<HardwareItem>,
}

impl Catalog {
    /// The catalog bundled with the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    /// Load a catalog from a TOML file with `[[items]]` tables
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml(&contents)?;
        tracing::info!(path = %path.display(), items = catalog.len(), "loaded hardware catalog");
        Ok(catalog)
    }

    pub fn from_toml(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(contents)?;
        Self::from_items(file.items)
    }

    pub fn from_items(items: Vec<HardwareItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    /// All items, hidden ones included
    pub fn items(&self) -> &[HardwareItem] {
        &self.items
    }

    /// Items flagged `show`, in catalog order
    pub fn visible(&self) -> impl Iterator<Item = &HardwareItem> {
        self.items.iter().filter(|item| item.show)
    }

    pub fn get(&self, id: &str) -> Option<&HardwareItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.visible().count() < catalog.len());
    }

    #[test]
    fn visible_filters_hidden_items_and_keeps_order() {
        let catalog = Catalog::from_toml(
            r#"
[[items]]
id = "a"
name = "A"
image = "/a.png"

[[items]]
id = "b"
name = "B"
image = "/b.png"
show = false

[[items]]
id = "c"
name = "C"
image = "/c.png"
"#,
        )
        .unwrap();

        let ids: Vec<&str> = catalog.visible().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(catalog.get("b").is_some());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::from_toml(
            r#"
[[items]]
id = "a"
name = "A"
image = "/a.png"

[[items]]
id = "a"
name = "Again"
image = "/a2.png"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn empty_file_gives_empty_catalog() {
        assert!(Catalog::from_toml("").unwrap().is_empty());
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[items]]\nid = \"pi\"\nname = \"Pi\"\nimage = \"/pi.png\"\nprice = 3.0"
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.get("pi").unwrap().hourly_rate(), Some(3.0));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Catalog::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }
}
