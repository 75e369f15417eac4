use std::path::{Path, PathBuf};

use snafu::ResultExt;

use crate::common::{
    is_email_address, is_kindle_address, ConfigReadSnafu, ConfigSnafu, ConfigWriteSnafu, Result,
    DEFAULT_SENDER,
};

use super::models::{ConfigFile, Section};
use super::prompt::{ask_kindle_email, ask_send_from, Prompt};
use super::Config;

/// Reads and writes the configuration file. The file is only ever written
/// on first run, after the user has answered the prompts.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn at_default_location() -> Result<Self> {
        match super::default_path() {
            Some(path) => Ok(Self::new(path)),
            None => ConfigSnafu {
                message: "Unable to determine the user configuration directory",
            }
            .fail(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored configuration, prompting for one and saving it
    /// when no file exists yet.
    pub fn load_or_create(&self, prompt: &mut dyn Prompt) -> Result<Config> {
        if let Some(config) = self.read()? {
            tracing::debug!(
                path = %self.path.display(),
                kindle_email = config.kindle_email,
                send_from = config.send_from,
                "Loaded configuration",
            );
            return Ok(config);
        }

        tracing::debug!(path = %self.path.display(), "No configuration found, prompting");
        let config = Config {
            kindle_email: ask_kindle_email(prompt)?,
            send_from: ask_send_from(prompt)?,
        };
        self.save(&config)?;

        Ok(config)
    }

    /// `Ok(None)` when the file does not exist.
    pub fn read(&self) -> Result<Option<Config>> {
        if !self.path.is_file() {
            return Ok(None);
        }

        let file: ConfigFile = ::config::Config::builder()
            .add_source(::config::File::from(self.path.as_path()).format(::config::FileFormat::Ini))
            .build()
            .and_then(|c| c.try_deserialize::<ConfigFile>())
            .context(ConfigReadSnafu { path: &self.path })?;

        self.validate(file.url2kindle).map(Some)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).context(ConfigWriteSnafu { path: dir })?;
        }
        std::fs::write(&self.path, config.to_ini()).context(ConfigWriteSnafu { path: &self.path })?;

        tracing::info!(
            path = %self.path.display(),
            kindle_email = config.kindle_email,
            send_from = config.send_from,
            "Saved configuration",
        );
        Ok(())
    }

    fn validate(&self, section: Section) -> Result<Config> {
        let kindle_email = match section.kindle_email.map(|v| v.trim().to_string()) {
            Some(email) if !email.is_empty() => email,
            _ => {
                return ConfigSnafu {
                    message: format!(
                        "Kindle email address not found in {}",
                        self.path.display()
                    ),
                }
                .fail()
            }
        };
        if !is_kindle_address(&kindle_email) {
            return ConfigSnafu {
                message: format!("Invalid Kindle email address: {kindle_email}"),
            }
            .fail();
        }

        let send_from = match section.send_from.map(|v| v.trim().to_string()) {
            Some(from) if is_email_address(&from) => from,
            Some(from) if !from.is_empty() => {
                tracing::warn!(
                    send_from = from,
                    fallback = DEFAULT_SENDER,
                    "Invalid 'from' email address, falling back to default",
                );
                DEFAULT_SENDER.to_string()
            }
            _ => DEFAULT_SENDER.to_string(),
        };

        Ok(Config {
            kindle_email,
            send_from,
        })
    }
}
