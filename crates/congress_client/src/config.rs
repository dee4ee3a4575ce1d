//! Client options and layered configuration loading.
//!
//! Configuration sources in order of precedence (later sources override earlier):
//! 1. Bundled defaults (`congress_gov.toml` shipped with the library)
//! 2. User config in home directory (`~/.config/congress_gov/congress_gov.toml`)
//! 3. User config in current directory (`./congress_gov.toml`)
//! 4. Environment variables prefixed `CONGRESS_GOV_`, nested keys split on `__`
//!
//! File sources are optional and silently skipped if not found.

use congress_error::{CongressError, CongressResult, ConfigError};
use congress_rate_limit::LimiterConfig;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, instrument};

/// Root of every API path.
pub const DEFAULT_BASE_URL: &str = "https://api.congress.gov/v3";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "CONGRESS_GOV";

const DEFAULT_CONFIG: &str = include_str!("../congress_gov.toml");

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_rate_limiting() -> bool {
    true
}

/// Everything needed to construct an [`ApiClient`](crate::ApiClient).
///
/// # Example
///
/// ```
/// use congress_client::ClientOptions;
/// use congress_rate_limit::LimiterConfig;
///
/// let options = ClientOptions::builder()
///     .api_key("DEMO_KEY")
///     .rate_limit(LimiterConfig::builder().max_delay_ms(10_000).build())
///     .build()
///     .unwrap();
///
/// assert_eq!(options.base_url(), "https://api.congress.gov/v3");
/// assert!(options.rate_limiting());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ClientOptions {
    /// API key sent as `X-API-Key`
    #[serde(default)]
    api_key: String,

    /// Root URL that resource paths are appended to
    #[builder(default = "default_base_url()")]
    #[serde(default = "default_base_url")]
    base_url: String,

    /// Whether to pace requests with the adaptive limiter
    #[builder(default = "true")]
    #[serde(default = "default_rate_limiting")]
    #[getter(copy)]
    rate_limiting: bool,

    /// Adaptive limiter settings
    #[builder(default)]
    #[serde(default)]
    #[getter(copy)]
    rate_limit: LimiterConfig,
}

impl ClientOptions {
    /// Options with the given key and every other field at its default.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            rate_limiting: true,
            rate_limit: LimiterConfig::default(),
        }
    }

    /// Start building options.
    pub fn builder() -> ClientOptionsBuilder {
        ClientOptionsBuilder::default()
    }
}

/// Loads [`ClientOptions`] from configuration files and the environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct CongressConfig;

impl CongressConfig {
    /// Load options with full precedence, reading the process environment.
    ///
    /// A missing API key is not an error here; the client rejects it at
    /// construction.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use congress_client::CongressConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let options = CongressConfig::load()?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load() -> CongressResult<ClientOptions> {
        debug!("Loading configuration: env > current dir > home dir > bundled defaults");
        Self::deserialize(Self::layered().add_source(Self::environment()))
    }

    /// Like [`CongressConfig::load`], but reads `CONGRESS_GOV_*` variables from
    /// `vars` instead of the process environment.
    #[instrument(skip(vars))]
    pub fn load_with_env(vars: HashMap<String, String>) -> CongressResult<ClientOptions> {
        debug!(count = vars.len(), "Loading configuration with explicit environment");
        Self::deserialize(Self::layered().add_source(Self::environment().source(Some(vars))))
    }

    /// Load options from a single file on top of the bundled defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> CongressResult<ClientOptions> {
        debug!("Loading configuration from file");

        let config = Self::defaults()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                CongressError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?;
        Self::parse(config)
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn layered() -> ConfigBuilder<DefaultState> {
        let mut builder = Self::defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/congress_gov/congress_gov.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder.add_source(File::with_name("congress_gov").required(false))
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn deserialize(builder: ConfigBuilder<DefaultState>) -> CongressResult<ClientOptions> {
        let config = builder.build().map_err(|e| {
            CongressError::from(ConfigError::new(format!(
                "Failed to build configuration: {}",
                e
            )))
        })?;
        Self::parse(config)
    }

    fn parse(config: Config) -> CongressResult<ClientOptions> {
        config.try_deserialize().map_err(|e| {
            CongressError::from(ConfigError::new(format!(
                "Failed to parse configuration: {}",
                e
            )))
        })
    }
}
