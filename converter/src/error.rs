use thiserror::Error;

use crate::Category;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// A unit symbol is not registered in any category table.
    #[error("Category unknown for unit '{0}'")]
    CategoryUnknown(String),

    /// Both units are known but belong to different categories.
    #[error("Incompatible categories: '{from}' is {from_category}, '{to}' is {to_category}")]
    IncompatibleCategories {
        from: String,
        to: String,
        from_category: Category,
        to_category: Category,
    },

    /// The engine was handed a category it has no strategy for.
    #[error("Unhandled category: {0}")]
    UnhandledCategory(Category),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
