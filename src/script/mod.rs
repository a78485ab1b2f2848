pub mod generator;
pub mod method;

pub use generator::{end_label, payload_extension, ScriptGenerator};
pub use method::InstallMethod;
