use std::path::Path;

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

/// Environment variable naming an optional YAML config file.
pub const CONFIG_ENV: &str = "HTTPCRAFT_CONFIG";

/// Environment variable overriding the listen address.
pub const LISTEN_ENV: &str = "LISTEN";

/// Command-line flags.
#[derive(Debug, Clone, Parser)]
#[command(name = "httpcraft", version)]
pub struct Cli {
    /// Directory served under `/files/<name>`
    #[arg(long)]
    pub directory: Option<String>,
}

/// Process-wide server configuration, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the listener binds to
    pub listen_addr: String,
    /// Root for the file routes; `None` resolves names against the current directory
    pub directory: Option<String>,
    /// Listen backlog handed to the OS
    pub backlog: u32,
    /// Upper bound on connections handled at once
    pub max_connections: usize,
    /// Maximum bytes read for a single request, anything past it is dropped
    pub read_buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:4221".to_string(),
            directory: None,
            backlog: 5,
            max_connections: 256,
            read_buffer_size: 65535,
        }
    }
}

impl Config {
    /// Loads configuration from the environment and the process arguments.
    ///
    /// Exits the process on unusable arguments, as clap does.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_env(Cli::parse())
    }

    /// Same as [`Config::load`] with an explicit argument list.
    pub fn load_from<I, T>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::from_env(Cli::try_parse_from(args)?)
    }

    /// Precedence, lowest first: defaults, the YAML file named by
    /// `HTTPCRAFT_CONFIG`, the `LISTEN` variable, then the CLI.
    fn from_env(cli: Cli) -> anyhow::Result<Self> {
        let mut cfg = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var(LISTEN_ENV) {
            cfg.listen_addr = addr;
        }

        Ok(cfg.with_cli(cli))
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        let cfg: Config = serde_yaml::from_str(raw)?;
        if cfg.max_connections == 0 {
            anyhow::bail!("max_connections must be at least 1");
        }
        if cfg.read_buffer_size == 0 {
            anyhow::bail!("read_buffer_size must be at least 1");
        }
        Ok(cfg)
    }

    /// Applies command-line overrides.
    pub fn with_cli(mut self, cli: Cli) -> Self {
        if let Some(dir) = cli.directory {
            self.directory = Some(dir);
        }
        self
    }
}
