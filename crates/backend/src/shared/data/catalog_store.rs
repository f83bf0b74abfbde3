use contracts::domain::a001_catalog::CatalogSnapshot;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use thiserror::Error;

static CATALOG: OnceCell<CatalogSnapshot> = OnceCell::new();

/// Demo catalog compiled into the binary, used when no seed file exists
const EMBEDDED_SEED: &str = include_str!("../../../data/catalog_seed.json");

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog seed {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog seed {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn parse_seed(path: &Path, contents: &str) -> Result<CatalogSnapshot, CatalogLoadError> {
    serde_json::from_str(contents).map_err(|source| CatalogLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_seed(path: &Path) -> Result<CatalogSnapshot, CatalogLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(path, &contents)
}

pub fn embedded_seed() -> Result<CatalogSnapshot, CatalogLoadError> {
    parse_seed(Path::new("<embedded>"), EMBEDDED_SEED)
}

/// Load the catalog once. A missing seed file falls back to the embedded demo
/// catalog; an unreadable or malformed one is an error.
pub fn initialize_catalog(seed_path: &Path) -> anyhow::Result<()> {
    let snapshot = if seed_path.exists() {
        tracing::info!("Loading catalog seed from: {}", seed_path.display());
        load_seed(seed_path)?
    } else {
        tracing::warn!(
            "Catalog seed not found at {}, using embedded demo catalog",
            seed_path.display()
        );
        embedded_seed()?
    };

    tracing::info!(
        "Catalog loaded: {} categories, {} subcategories, {} products",
        snapshot.categories.len(),
        snapshot.subcategories.len(),
        snapshot.products.len()
    );

    CATALOG
        .set(snapshot)
        .map_err(|_| anyhow::anyhow!("catalog already initialized"))?;
    Ok(())
}

/// Loaded catalog; `None` before [`initialize_catalog`] has run
pub fn get_catalog() -> Option<&'static CatalogSnapshot> {
    CATALOG.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_seed_parses() {
        let snapshot = embedded_seed().unwrap();
        assert!(!snapshot.categories.is_empty());
        assert!(!snapshot.subcategories.is_empty());
        assert!(!snapshot.products.is_empty());
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let err = parse_seed(Path::new("broken.json"), "{ not json").unwrap_err();
        assert!(matches!(err, CatalogLoadError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let snapshot = parse_seed(Path::new("partial.json"), r#"{"categories": []}"#).unwrap();
        assert!(snapshot.products.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_seed(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Io { .. }));
    }
}
