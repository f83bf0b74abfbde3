use thiserror::Error;

/// A restored selection field that had to be dropped.
///
/// Never returned as `Err`: the sanitised state is always produced and these
/// are reported next to it so callers can log what was discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidStateError {
    #[error("unknown segment '{0}'")]
    UnknownSegment(String),

    #[error("gender '{gender}' is not selectable in segment '{segment}'")]
    GenderNotSelectable { segment: String, gender: String },

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("category '{category}' does not belong to segment '{segment}'")]
    CategoryOutsideSegment { category: String, segment: String },

    #[error("unknown subcategory '{0}'")]
    UnknownSubcategory(String),

    #[error("subcategory '{subcategory}' does not belong to category '{category}'")]
    SubcategoryOutsideCategory {
        subcategory: String,
        category: String,
    },
}
