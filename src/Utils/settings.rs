use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use toml::{Table, Value};

/// Errors of the TOML-backed lookup collaborators.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Maps logical file names to on-disk paths, backed by a settings file:
///
/// ```toml
/// [[files]]
/// name = "information.toml"
/// path = "/"
/// ```
///
/// A path of `"/"` stands for the working directory. The core consumes this
/// only to locate the information file, never for calculation input.
pub struct Settings {
    table: Table,
}

impl Settings {
    pub fn from_file(path: &Path) -> Result<Settings, SettingsError> {
        let content = fs::read_to_string(path)?;
        Settings::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Settings, SettingsError> {
        let table: Table = content.parse()?;
        Ok(Settings { table })
    }

    pub fn get(&self, setting_type: &str) -> Option<&Value> {
        self.table.get(setting_type)
    }

    /// Resolves a logical file name to a path, `None` when the name has no
    /// entry in the settings file.
    pub fn resolve_file(&self, file_name: &str) -> Option<PathBuf> {
        let files = self.get("files")?.as_array()?;

        for file in files {
            let name = file.get("name").and_then(Value::as_str);
            if name == Some(file_name) {
                let file_path = file.get("path").and_then(Value::as_str).unwrap_or("/");
                return if file_path == "/" {
                    Some(PathBuf::from(file_name))
                } else {
                    Some(Path::new(file_path).join(file_name))
                };
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SETTINGS: &str = r#"
[[files]]
name = "information.toml"
path = "/"

[[files]]
name = "extra.toml"
path = "data/config"
"#;

    #[test]
    fn resolves_working_directory_path() {
        let settings = Settings::from_toml(SETTINGS).unwrap();
        let path = settings.resolve_file("information.toml").unwrap();
        assert_eq!(path, PathBuf::from("information.toml"));
    }

    #[test]
    fn resolves_nested_path() {
        let settings = Settings::from_toml(SETTINGS).unwrap();
        let path = settings.resolve_file("extra.toml").unwrap();
        assert_eq!(path, Path::new("data/config").join("extra.toml"));
    }

    #[test]
    fn unknown_logical_name_is_none() {
        let settings = Settings::from_toml(SETTINGS).unwrap();
        assert!(settings.resolve_file("missing.toml").is_none());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", SETTINGS).unwrap();
        let settings = Settings::from_file(file.path()).unwrap();
        assert!(settings.resolve_file("information.toml").is_some());
    }

    #[test]
    fn broken_toml_is_an_error() {
        assert!(matches!(
            Settings::from_toml("[[files]\nname ="),
            Err(SettingsError::Toml(_))
        ));
    }
}
