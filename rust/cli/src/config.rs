//! Layered session configuration.
//!
//! Built-in defaults, then the TOML file named by `SHOWDOWN_CONFIG`, then
//! `SHOWDOWN_*` environment variables, then command-line flags. Each field
//! remembers which layer set it.

use serde::{Deserialize, Serialize};
use showdown_engine::session::SessionConfig;
use showdown_engine::table::Stakes;
use std::fs;

pub const CONFIG_ENV: &str = "SHOWDOWN_CONFIG";

const ENV_KEYS: &[&str] = &[
    CONFIG_ENV,
    "SHOWDOWN_MODELS",
    "SHOWDOWN_HANDS",
    "SHOWDOWN_ELIMINATION_COUNT",
    "SHOWDOWN_STACK",
    "SHOWDOWN_SMALL_BLIND",
    "SHOWDOWN_BIG_BLIND",
    "SHOWDOWN_MIN_RAISE",
    "SHOWDOWN_SEED",
    "SHOWDOWN_TIMEOUT_MS",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub models: Vec<String>,
    pub hands: u32,
    pub elimination_count: usize,
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub min_raise: u32,
    pub seed: Option<u64>,
    /// Per-decision deadline for model seats, in milliseconds.
    pub timeout_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        let stakes = Stakes::default();
        Self {
            models: vec!["baseline".into()],
            hands: 3,
            elimination_count: 1,
            starting_stack: 10_000,
            small_blind: stakes.small_blind,
            big_blind: stakes.big_blind,
            min_raise: stakes.min_raise,
            seed: None,
            timeout_ms: None,
        }
    }
}

impl Config {
    pub fn stakes(&self) -> Stakes {
        Stakes {
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            min_raise: self.min_raise,
        }
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            hands: self.hands,
            elimination_count: self.elimination_count,
            starting_stack: self.starting_stack,
            stakes: self.stakes(),
            seed: self.seed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Flag,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub models: ValueSource,
    pub hands: ValueSource,
    pub elimination_count: ValueSource,
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub min_raise: ValueSource,
    pub seed: ValueSource,
    pub timeout_ms: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            models: ValueSource::Default,
            hands: ValueSource::Default,
            elimination_count: ValueSource::Default,
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            min_raise: ValueSource::Default,
            seed: ValueSource::Default,
            timeout_ms: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

/// Flag values for the `play` command; `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub models: Option<Vec<String>>,
    pub hands: Option<u32>,
    pub elimination_count: Option<usize>,
    pub starting_stack: Option<u32>,
    pub small_blind: Option<u32>,
    pub big_blind: Option<u32>,
    pub min_raise: Option<u32>,
    pub seed: Option<u64>,
    pub timeout_ms: Option<u64>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read {}: {}", CONFIG_ENV, e),
            ConfigError::Parse(e) => write!(f, "invalid config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Defaults, file and environment, validated.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let resolved = load_unvalidated()?;
    validate(&resolved.config)?;
    Ok(resolved)
}

/// All four layers, validated once at the end.
pub fn load_with_overrides(overrides: &Overrides) -> Result<ConfigResolved, ConfigError> {
    let mut resolved = load_unvalidated()?;
    apply_overrides(&mut resolved, overrides);
    validate(&resolved.config)?;
    Ok(resolved)
}

fn load_unvalidated() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.models {
            cfg.models = v;
            sources.models = ValueSource::File;
        }
        if let Some(v) = f.hands {
            cfg.hands = v;
            sources.hands = ValueSource::File;
        }
        if let Some(v) = f.elimination_count {
            cfg.elimination_count = v;
            sources.elimination_count = ValueSource::File;
        }
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.min_raise {
            cfg.min_raise = v;
            sources.min_raise = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.timeout_ms {
            cfg.timeout_ms = Some(v);
            sources.timeout_ms = ValueSource::File;
        }
    }

    if let Some(models) = env_value("SHOWDOWN_MODELS") {
        cfg.models = split_models(&models);
        sources.models = ValueSource::Env;
    }
    if let Some(v) = env_number("SHOWDOWN_HANDS")? {
        cfg.hands = v;
        sources.hands = ValueSource::Env;
    }
    if let Some(v) = env_number("SHOWDOWN_ELIMINATION_COUNT")? {
        cfg.elimination_count = v;
        sources.elimination_count = ValueSource::Env;
    }
    if let Some(v) = env_number("SHOWDOWN_STACK")? {
        cfg.starting_stack = v;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(v) = env_number("SHOWDOWN_SMALL_BLIND")? {
        cfg.small_blind = v;
        sources.small_blind = ValueSource::Env;
    }
    if let Some(v) = env_number("SHOWDOWN_BIG_BLIND")? {
        cfg.big_blind = v;
        sources.big_blind = ValueSource::Env;
    }
    if let Some(v) = env_number("SHOWDOWN_MIN_RAISE")? {
        cfg.min_raise = v;
        sources.min_raise = ValueSource::Env;
    }
    if let Some(v) = env_number("SHOWDOWN_SEED")? {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_number("SHOWDOWN_TIMEOUT_MS")? {
        cfg.timeout_ms = Some(v);
        sources.timeout_ms = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn apply_overrides(resolved: &mut ConfigResolved, o: &Overrides) {
    let cfg = &mut resolved.config;
    let sources = &mut resolved.sources;
    if let Some(v) = &o.models {
        cfg.models = v.clone();
        sources.models = ValueSource::Flag;
    }
    if let Some(v) = o.hands {
        cfg.hands = v;
        sources.hands = ValueSource::Flag;
    }
    if let Some(v) = o.elimination_count {
        cfg.elimination_count = v;
        sources.elimination_count = ValueSource::Flag;
    }
    if let Some(v) = o.starting_stack {
        cfg.starting_stack = v;
        sources.starting_stack = ValueSource::Flag;
    }
    if let Some(v) = o.small_blind {
        cfg.small_blind = v;
        sources.small_blind = ValueSource::Flag;
    }
    if let Some(v) = o.big_blind {
        cfg.big_blind = v;
        sources.big_blind = ValueSource::Flag;
    }
    if let Some(v) = o.min_raise {
        cfg.min_raise = v;
        sources.min_raise = ValueSource::Flag;
    }
    if let Some(v) = o.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Flag;
    }
    if let Some(v) = o.timeout_ms {
        cfg.timeout_ms = Some(v);
        sources.timeout_ms = ValueSource::Flag;
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    models: Option<Vec<String>>,
    #[serde(default)]
    hands: Option<u32>,
    #[serde(default)]
    elimination_count: Option<usize>,
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    min_raise: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    timeout_ms: Option<u64>,
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn env_number<T: std::str::FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match env_value(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", name, raw))),
    }
}

/// `SHOWDOWN_*` variables that no setting reads, usually typos.
pub fn unknown_env_vars() -> Vec<(String, String)> {
    let mut unknown: Vec<(String, String)> = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.to_string_lossy().into_owned())))
        .filter(|(k, _)| k.starts_with("SHOWDOWN_") && !ENV_KEYS.contains(&k.as_str()))
        .collect();
    unknown.sort();
    unknown
}

/// Splits a model list on commas and whitespace.
pub fn split_models(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_stack == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_stack must be >0".into(),
        ));
    }
    if cfg.big_blind == 0 || cfg.small_blind > cfg.big_blind {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: blinds {}/{} must satisfy 0 <= small <= big, big > 0",
            cfg.small_blind, cfg.big_blind
        )));
    }
    if cfg.min_raise == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: min_raise must be >0".into(),
        ));
    }
    if cfg.timeout_ms == Some(0) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: timeout_ms must be >0".into(),
        ));
    }
    Ok(())
}
