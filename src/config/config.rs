use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use home_dir::HomeDirExt;

use super::app_config::AppConfig;
use crate::error::{Edge2PdfError, Result};

pub struct Config {
    config_file: PathBuf,
    app_config: AppConfig,
}

impl Config {
    pub fn new_from_file(config_path: Option<String>) -> Result<Config> {
        if let Some(config_path) = config_path {
            Config::new(PathBuf::from(config_path))
        } else {
            Config::new_default()
        }
    }

    pub fn new_default() -> Result<Config> {
        let config_directory_root =
            std::env::var("XDG_CONFIG_HOME").unwrap_or("~/.config".to_string());

        let config_file = PathBuf::from(config_directory_root)
            .join("edge2pdf")
            .join("config.toml");

        Config::new(config_file)
    }

    fn new(config_file: PathBuf) -> Result<Config> {
        let config_file = expand(&config_file)?;

        if let Some(parent) = config_file.parent() {
            ensure_dir(parent)?;
        }

        let app_config: AppConfig = {
            let default_content = toml::to_string_pretty(&AppConfig::new_default())
                .map_err(|e| Edge2PdfError::Config {
                    message: e.to_string(),
                })?;

            let file_content = ensure_file(&config_file, default_content)?;

            toml::from_str(&file_content).map_err(|e| Edge2PdfError::Config {
                message: format!(
                    "cannot parse config file \"{}\": {}",
                    config_file.display(),
                    e
                ),
            })?
        };

        let config = Config {
            config_file,
            app_config,
        };

        config.validate().and(Ok(config))
    }

    pub fn bookmarks_file(&self) -> Result<Option<PathBuf>> {
        self.app_config
            .bookmarks_file
            .as_ref()
            .map(|f| expand(Path::new(f)))
            .transpose()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.app_config.timeout_seconds)
    }

    pub fn page_load_delay(&self) -> Duration {
        Duration::from_secs(self.app_config.page_load_delay_seconds)
    }

    pub fn headless(&self) -> bool {
        self.app_config.headless
    }

    pub fn validate(&self) -> Result<()> {
        if self.app_config.timeout_seconds == 0 {
            return Err(Edge2PdfError::Config {
                message: format!(
                    "timeout_seconds must be greater than zero (config file path: \"{}\")",
                    self.config_file.display()
                ),
            });
        }

        Ok(())
    }
}

fn expand(path: &Path) -> Result<PathBuf> {
    path.expand_home().map_err(|_| Edge2PdfError::Config {
        message: format!("cannot resolve home directory in \"{}\"", path.display()),
    })
}

fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|source| Edge2PdfError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

fn ensure_file(file_path: &Path, default: String) -> Result<String> {
    if !file_path.exists() {
        let mut file = std::fs::File::create(file_path).map_err(|source| Edge2PdfError::Io {
            path: file_path.to_path_buf(),
            source,
        })?;

        file.write_all(default.as_bytes())
            .map_err(|source| Edge2PdfError::Io {
                path: file_path.to_path_buf(),
                source,
            })?;

        Ok(default)
    } else {
        std::fs::read_to_string(file_path).map_err(|source| Edge2PdfError::Io {
            path: file_path.to_path_buf(),
            source,
        })
    }
}
