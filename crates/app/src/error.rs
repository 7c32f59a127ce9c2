use thiserror::Error;

use missionstock_core::DomainError;
use missionstock_products::Category;
use missionstock_store::PersistenceError;

/// Why a submitted form could not become a product.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("complete all basic fields (id, name, weight, volume)")]
    MissingBasicFields,

    #[error("a category must be selected")]
    MissingCategory,

    #[error("complete all {0} fields")]
    MissingCategoryFields(Category),

    #[error("numeric format error in {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Errors surfaced to the presentation layer. Every variant displays as the
/// message to show the user.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error("product with id {id} not found")]
    NotFound { id: String },

    #[error("file '{location}' could not be loaded")]
    NothingLoaded { location: String },

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl ServiceError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}
