use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate app id '{id}' (in {first} and {second})")]
    DuplicateAppId {
        id: String,
        first: String,
        second: String,
    },

    #[error("category '{0}' is listed more than once")]
    DuplicateCategory(String),

    #[error("unknown app id '{0}'")]
    UnknownApp(String),
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no applications selected")]
    EmptySelection,
}
