pub mod app;
pub mod catalog;
pub mod cli;
pub mod delivery;
pub mod error;
pub mod logging;
pub mod script;
pub mod selection;
pub mod ui;
pub mod utils;

pub use catalog::{load_catalog, AppRecord, Catalog, Category};
pub use error::{CatalogError, GenerateError};
pub use script::{InstallMethod, ScriptGenerator};
pub use selection::Selection;
