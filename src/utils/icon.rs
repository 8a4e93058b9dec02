use crate::core::capabilities::IconSource;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use camino::Utf8Path;
use std::fs;

/// Loads an icon file and encodes it as a data URI string.
/// Returns None if the file doesn't exist or the format is unsupported.
pub fn load_icon_as_data_uri(icon_path: &Utf8Path) -> Option<String> {
    let mime_type = match icon_path.extension()? {
        "ico" => "image/x-icon",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "gif" => "image/gif",
        _ => return None,
    };

    let icon_bytes = fs::read(icon_path).ok()?;
    let base64_data = BASE64.encode(&icon_bytes);

    Some(format!("data:{};base64,{}", mime_type, base64_data))
}

/// Looks for an icon shipped beside an executable: `th123.exe` -> `th123.ico`, then `th123.png`.
pub struct FileIconSource;

impl IconSource for FileIconSource {
    fn icon(&self, path: &Utf8Path) -> Option<String> {
        ["ico", "png"]
            .iter()
            .find_map(|ext| load_icon_as_data_uri(&path.with_extension(ext)))
    }
}
