use crate::core::capabilities::TextProvider;
use crate::models::config::ModGroup;

pub const VERSION_INFO_URL: &str = "https://soku.latte.today/version.json";

/// Ids of the built-in presets. Other settings refer to groups by id, so these
/// must stay the same from release to release.
pub const GIUROLL_ID: &str = "1d059cd2-1e74-430b-b84f-1d3ad6b67f6c";
pub const GIUROLL_CN_ID: &str = "7d9b118d-5f7a-48b0-8e35-272f0e51f0d6";
pub const SOKUROLL_ID: &str = "3b9e5e71-6044-432c-b6c3-4c53d93e137d";
pub const NO_ROLL_ID: &str = "31a56390-1f5b-4442-b4e2-7b23ce5683d7";

struct Preset {
    id: &'static str,
    key: &'static str,
    enable: &'static [&'static str],
    disable: &'static [&'static str],
    cover: &'static str,
    overlay: Option<&'static str>,
}

const PRESETS: [Preset; 4] = [
    Preset {
        id: GIUROLL_ID,
        key: "giuroll",
        enable: &["Giuroll", "Giuroll-60F", "SokuLobbiesMod", "Autopunch"],
        disable: &["Giuroll-62F", "SWRSokuRoll", "InGameHostlist"],
        cover: "%resources%/cover1.png",
        overlay: None,
    },
    Preset {
        id: GIUROLL_CN_ID,
        key: "giuroll-cn",
        enable: &["Giuroll-62F", "SokuLobbiesMod", "Autopunch"],
        disable: &["Giuroll", "Giuroll-60F", "SWRSokuRoll", "InGameHostlist"],
        cover: "%resources%/cover2.png",
        overlay: None,
    },
    Preset {
        id: SOKUROLL_ID,
        key: "sokuroll",
        enable: &["SWRSokuRoll", "InGameHostlist", "Autopunch"],
        disable: &["Giuroll", "Giuroll-60F", "Giuroll-62F", "SokuLobbiesMod"],
        cover: "%resources%/gearbackground.png",
        overlay: Some("#6FA92E00"),
    },
    Preset {
        id: NO_ROLL_ID,
        key: "no-roll",
        enable: &["InGameHostlist", "Autopunch"],
        disable: &["Giuroll", "Giuroll-60F", "Giuroll-62F", "SokuLobbiesMod", "SWRSokuRoll"],
        cover: "%resources%/gearbackground-r.png",
        overlay: Some("#6F002EA9"),
    },
];

/// The four presets shipped with a fresh config, named in the active language.
pub fn default_mod_groups(text: &dyn TextProvider) -> Vec<ModGroup> {
    PRESETS
        .iter()
        .map(|p| ModGroup {
            id: p.id.to_string(),
            name: text.get_string(&format!("preset-{}-name", p.key)),
            description: text.get_string(&format!("preset-{}-desc", p.key)),
            enable_mods: p.enable.iter().map(|m| m.to_string()).collect(),
            disable_mods: p.disable.iter().map(|m| m.to_string()).collect(),
            cover: p.cover.to_string(),
            cover_overlay_color: p.overlay.map(str::to_string),
        })
        .collect()
}
