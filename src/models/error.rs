use derive_more::Display;

#[derive(Debug, Display)]
pub enum SError {
    #[display("I/O error: {_0}")]
    IOError(String),
    #[display("parse error: {_0}")]
    ParseError(String),
    #[display("path is not valid UTF-8: {_0}")]
    NonUtf8Path(String),
    #[display("mod group {group} both enables and disables {mods:?}")]
    ConflictingMods { group: String, mods: Vec<String> },
    #[display("duplicate mod group id: {_0}")]
    DuplicateModGroupId(String),
    #[display("localization error: {_0}")]
    Localization(String),
    #[display("network error: {_0}")]
    Network(String),
    #[display("another launcher instance is already running")]
    AlreadyRunning,
}

impl std::error::Error for SError {}

impl From<std::io::Error> for SError {
    fn from(e: std::io::Error) -> Self {
        SError::IOError(e.to_string())
    }
}

impl From<serde_json::Error> for SError {
    fn from(e: serde_json::Error) -> Self {
        SError::ParseError(e.to_string())
    }
}

impl From<walkdir::Error> for SError {
    fn from(e: walkdir::Error) -> Self {
        SError::IOError(e.to_string())
    }
}

impl From<i18n_embed::I18nEmbedError> for SError {
    fn from(e: i18n_embed::I18nEmbedError) -> Self {
        SError::Localization(e.to_string())
    }
}

impl From<regex::Error> for SError {
    fn from(e: regex::Error) -> Self {
        SError::ParseError(format!("Failed to create regex: {}", e))
    }
}
