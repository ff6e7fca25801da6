#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unable to read page {path}: {message}")]
    PageRead { path: String, message: String },

    #[error("Invalid replay script at line {line}: {message}")]
    Script { line: usize, message: String },

    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Unknown element: {0}")]
    UnknownElement(String),
}
