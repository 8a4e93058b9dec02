use crate::models::error::SError;
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub const RESOURCES_TOKEN: &str = "%resources%";

/// Persisted launcher state, stored as `SokuLauncher.json` next to the launcher.
///
/// Key names match the files written by earlier launcher releases. Keys this
/// struct does not know about are carried in `extra` and written back untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct InstallConfig {
    #[serde(rename = "Language", default, deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(rename = "SokuDirPath", default, deserialize_with = "null_as_default")]
    pub install_dir: String,
    #[serde(rename = "SokuFileName", default, deserialize_with = "null_as_default")]
    pub install_file_name: String,
    #[serde(
        rename = "SokuModSettingGroups",
        default,
        deserialize_with = "null_as_default"
    )]
    pub mod_groups: Vec<ModGroup>,
    #[serde(rename = "VersionInfoUrl", default, deserialize_with = "null_as_default")]
    pub version_info_url: String,
    #[serde(rename = "AutoCheckForUpdates", default, deserialize_with = "null_as_default")]
    pub auto_check_for_updates: bool,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl InstallConfig {
    /// Absolute location of `install_dir`, resolved against the launcher directory.
    pub fn install_dir_full_path(&self, app_dir: &Utf8Path) -> Utf8PathBuf {
        crate::models::paths::normalize(&app_dir.join(&self.install_dir))
    }

    /// Full path of the configured executable, if both parts are set.
    pub fn executable_path(&self, app_dir: &Utf8Path) -> Option<Utf8PathBuf> {
        if is_blank(&self.install_dir) || is_blank(&self.install_file_name) {
            return None;
        }
        Some(self.install_dir_full_path(app_dir).join(&self.install_file_name))
    }

    pub fn find_mod_group(&self, id: &str) -> Option<&ModGroup> {
        self.mod_groups.iter().find(|g| g.id == id)
    }

    /// Checks every group for enable/disable overlap and the catalog for repeated ids.
    pub fn check_mod_groups(&self) -> Result<(), SError> {
        let mut seen = BTreeSet::new();
        for group in &self.mod_groups {
            group.check()?;
            if !seen.insert(group.id.as_str()) {
                return Err(SError::DuplicateModGroupId(group.id.clone()));
            }
        }
        Ok(())
    }
}

/// A named preset of mods to switch on and off together.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ModGroup {
    #[serde(rename = "Id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "Name", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "Desc", default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "EnableMods", default, deserialize_with = "null_as_default")]
    pub enable_mods: Vec<String>,
    #[serde(rename = "DisableMods", default, deserialize_with = "null_as_default")]
    pub disable_mods: Vec<String>,
    #[serde(rename = "Cover", default, deserialize_with = "null_as_default")]
    pub cover: String,
    #[serde(
        rename = "CoverOverlayColor",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cover_overlay_color: Option<String>,
}

impl ModGroup {
    /// Creates a user-authored group with a fresh id.
    /// Fails if a mod appears in both the enable and the disable list.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        enable_mods: Vec<String>,
        disable_mods: Vec<String>,
        cover: impl Into<String>,
    ) -> Result<Self, SError> {
        let group = Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            description: description.into(),
            enable_mods,
            disable_mods,
            cover: cover.into(),
            cover_overlay_color: None,
        };
        group.check()?;
        Ok(group)
    }

    pub fn check(&self) -> Result<(), SError> {
        let enabled: BTreeSet<&str> = self.enable_mods.iter().map(String::as_str).collect();
        let mods: Vec<String> = self
            .disable_mods
            .iter()
            .filter(|m| enabled.contains(m.as_str()))
            .cloned()
            .collect();

        if mods.is_empty() {
            Ok(())
        } else {
            Err(SError::ConflictingMods {
                group: self.id.clone(),
                mods,
            })
        }
    }

    /// Cover path with the `%resources%` token replaced by `resources_dir`.
    pub fn cover_path(&self, resources_dir: &Utf8Path) -> String {
        self.cover.replace(RESOURCES_TOKEN, resources_dir.as_str())
    }
}

pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(enable: &[&str], disable: &[&str]) -> ModGroup {
        ModGroup {
            id: "g".into(),
            enable_mods: enable.iter().map(|s| s.to_string()).collect(),
            disable_mods: disable.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_overlapping_group_is_rejected() {
        let err = ModGroup::new(
            "Broken",
            "",
            vec!["Giuroll".into(), "Autopunch".into()],
            vec!["Autopunch".into()],
            "",
        )
        .unwrap_err();

        match err {
            SError::ConflictingMods { mods, .. } => assert_eq!(mods, vec!["Autopunch"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_new_group_gets_unique_id() {
        let a = ModGroup::new("A", "", vec![], vec![], "").unwrap();
        let b = ModGroup::new("B", "", vec![], vec![], "").unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.id.len(), 36);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let config = InstallConfig {
            mod_groups: vec![group(&["A"], &["B"]), group(&["C"], &[])],
            ..Default::default()
        };
        assert!(matches!(
            config.check_mod_groups(),
            Err(SError::DuplicateModGroupId(id)) if id == "g"
        ));
    }

    #[test]
    fn test_find_mod_group_by_id() {
        let mut second = group(&["B"], &[]);
        second.id = "second".into();
        second.name = "Second".into();
        let config = InstallConfig {
            mod_groups: vec![group(&["A"], &[]), second],
            ..Default::default()
        };

        assert_eq!(config.find_mod_group("second").map(|g| g.name.as_str()), Some("Second"));
        assert_eq!(config.find_mod_group("g").map(|g| g.enable_mods.len()), Some(1));
        assert!(config.find_mod_group("missing").is_none());
    }

    #[test]
    fn test_cover_placeholder() {
        let mut g = group(&[], &[]);
        g.cover = "%resources%/cover1.png".into();
        assert_eq!(g.cover_path(Utf8Path::new("/tmp/res")), "/tmp/res/cover1.png");

        g.cover = "C:/covers/mine.png".into();
        assert_eq!(g.cover_path(Utf8Path::new("/tmp/res")), "C:/covers/mine.png");
    }

    #[test]
    fn test_nulls_and_missing_keys_take_defaults() {
        let raw = r#"{"Language": null, "SokuDirPath": ".", "SokuModSettingGroups": null}"#;
        let config: InstallConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.language, "");
        assert_eq!(config.install_dir, ".");
        assert_eq!(config.install_file_name, "");
        assert!(config.mod_groups.is_empty());
        assert!(!config.auto_check_for_updates);
    }

    #[test]
    fn test_unknown_keys_survive_round_trip() {
        let raw = r#"{"SokuDirPath": "game", "Theme": {"dark": true}, "VideoVolume": 3}"#;
        let config: InstallConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.extra.len(), 2);

        let again: InstallConfig =
            serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
        assert_eq!(again, config);
        assert_eq!(again.extra["VideoVolume"], serde_json::json!(3));
    }

    #[test]
    fn test_executable_path_requires_both_parts() {
        let app = Utf8Path::new("/opt/launcher");
        let mut config = InstallConfig {
            install_dir: "../game".into(),
            ..Default::default()
        };
        assert_eq!(config.executable_path(app), None);

        config.install_file_name = "th123.exe".into();
        assert_eq!(
            config.executable_path(app),
            Some(Utf8PathBuf::from("/opt/game/th123.exe"))
        );
    }
}
