use crate::Utils::settings::SettingsError;
use std::fs;
use std::path::Path;
use toml::{Table, Value};

/// Id -> text lookup for the startup banner, backed by a file like:
///
/// ```toml
/// [informations]
/// welcome-1 = "..."
/// copyright = "..."
/// ```
///
/// Unknown ids (and an unloaded store) yield an empty string, so a missing
/// banner line never breaks a run.
pub struct Information {
    informations: Table,
}

impl Information {
    pub fn new() -> Information {
        Information {
            informations: Table::new(),
        }
    }

    pub fn load(&mut self, path: &Path) -> Result<(), SettingsError> {
        let content = fs::read_to_string(path)?;
        self.load_toml(&content)
    }

    pub fn load_toml(&mut self, content: &str) -> Result<(), SettingsError> {
        let root: Table = content.parse()?;
        self.informations = root
            .get("informations")
            .and_then(Value::as_table)
            .cloned()
            .unwrap_or_default();
        Ok(())
    }

    pub fn get_info(&self, info_type: &str) -> String {
        self.informations
            .get(info_type)
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string()
    }
}

impl Default for Information {
    fn default() -> Self {
        Information::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INFORMATIONS: &str = r#"
[informations]
welcome-1 = "numerical integration of a torus volume"
copyright = "(c) 2018"
"#;

    #[test]
    fn returns_loaded_text() {
        let mut information = Information::new();
        information.load_toml(INFORMATIONS).unwrap();
        assert_eq!(
            information.get_info("welcome-1"),
            "numerical integration of a torus volume"
        );
    }

    #[test]
    fn unknown_id_is_empty_string() {
        let mut information = Information::new();
        information.load_toml(INFORMATIONS).unwrap();
        assert_eq!(information.get_info("welcome-42"), "");
    }

    #[test]
    fn unloaded_store_is_empty_string() {
        let information = Information::new();
        assert_eq!(information.get_info("welcome-1"), "");
    }
}
