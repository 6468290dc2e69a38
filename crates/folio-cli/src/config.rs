use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use folio_core::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
}

pub fn default_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("folio"))
}

/// Loads `path`, falling back to defaults when the file does not exist.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Config::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    parse_config(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_config(text: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(text)
}

pub fn resolve_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => load_config(path),
        None => match default_config_path() {
            Some(path) => load_config(&path),
            None => Ok(Config::default()),
        },
    }
}

#[cfg(test)]
mod tests {
    use folio_core::config::ErrorFlagging;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_config(&dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config, Config::default());
        assert_eq!(config.session.history_limit, 50);
        assert_eq!(config.resume.delay_ms, None);
        assert!(config.resume.open_in_browser);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[session]\nerror_flagging = \"dispatcher\"\n\n[ui]\nshow_timestamps = true\n",
        )
        .expect("write");

        let config = load_config(&path).expect("parse");
        assert_eq!(config.session.error_flagging, ErrorFlagging::Dispatcher);
        assert_eq!(config.session.history_limit, 50);
        assert!(config.ui.show_timestamps);
        assert_eq!(config.resume.delay_ms, None);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[session\nhistory_limit = ").expect("write");

        let err = load_config(&path).expect_err("must fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("invalid config"));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(parse_config("[session]\nerror_flagging = \"sometimes\"").is_err());
    }
}
