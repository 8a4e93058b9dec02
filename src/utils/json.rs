use crate::models::error::SError;
use camino::Utf8Path;

pub struct Json;

impl Json {
    /// Writes to a sibling `.json.tmp` file, then renames it over `path`.
    pub fn write<T: serde::Serialize>(path: &Utf8Path, data: &T) -> Result<(), SError> {
        let raw = serde_json::to_string_pretty(data)?;
        let temp = path.with_extension("json.tmp");
        std::fs::write(&temp, raw)?;
        std::fs::rename(&temp, path)?;
        Ok(())
    }

    /// Reads `path`; a file holding only whitespace yields `T::default()`.
    pub fn read<T: serde::de::DeserializeOwned + Default>(path: &Utf8Path) -> Result<T, SError> {
        let s = std::fs::read_to_string(path)?;
        if s.trim().is_empty() {
            return Ok(T::default());
        }
        serde_json::from_str::<T>(&s).map_err(|e| SError::ParseError(format!("{path}: {e}")))
    }
}
