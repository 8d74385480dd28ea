//! Layered configuration for the risk evaluator service.
//!
//! Configuration is loaded in layers with increasing priority:
//! 1. Compiled-in defaults (listen address, rule weights and lists)
//! 2. TOML configuration file (if provided)
//! 3. Environment variable overrides (prefix `REV_`, nested with `__`)
//!
//! The rule set built from [`RulesConfig`] is fixed once the process starts;
//! there is no reload path.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

// ── Default value functions ────────────────────────────────────────────

/// Default service name reported in startup logs.
fn default_service_name() -> String {
    "RiskEvaluator".to_string()
}

/// Default listen address for the evaluation endpoint.
fn default_listen_addr() -> String {
    "0.0.0.0:5000".to_string()
}

/// Default number of digits that makes a local part look generated: 6.
fn default_min_digits() -> usize {
    6
}

/// Default signups-per-hour tolerated before the velocity rule fires: 3.
fn default_signup_threshold() -> u32 {
    3
}

/// Default ceiling for the velocity rule's contribution: 20.
fn default_signup_cap() -> i64 {
    20
}

// ── Configuration structs ──────────────────────────────────────────────

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Service identity and listener settings.
    pub service: ServiceConfig,
    /// Log output format.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Parameters of the statically composed rule set.
    pub rules: RulesConfig,
}

/// Service identity and listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Logical service name, logged at startup.
    #[serde(default = "default_service_name")]
    pub name: String,
    /// `host:port` the HTTP endpoint binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

/// Log output settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Emit JSON logs (production) instead of pretty output (development).
    #[serde(default)]
    pub json: bool,
}

/// Parameters for every built-in rule.
#[derive(Debug, Clone, Deserialize)]
pub struct RulesConfig {
    pub disposable_domain: DomainListRuleConfig,
    pub high_risk_tld: TldListRuleConfig,
    pub numeric_local_part: NumericLocalPartConfig,
    pub country: CountryRuleConfig,
    pub signup_velocity: SignupVelocityConfig,
    pub trusted_domain: TrustedDomainConfig,
}

/// A rule that adds `weight` when the email domain is on a list.
#[derive(Debug, Clone, Deserialize)]
pub struct DomainListRuleConfig {
    /// Entries compared case-insensitively.
    #[serde(default)]
    pub domains: Vec<String>,
    pub weight: i64,
}

/// A rule that adds `weight` when the email's top-level domain is on a list.
#[derive(Debug, Clone, Deserialize)]
pub struct TldListRuleConfig {
    /// Labels without the leading dot (`xyz`, not `.xyz`).
    #[serde(default)]
    pub tlds: Vec<String>,
    pub weight: i64,
}

/// Flags local parts with many digits (e.g. `user83920174@`).
#[derive(Debug, Clone, Deserialize)]
pub struct NumericLocalPartConfig {
    #[serde(default = "default_min_digits")]
    pub min_digits: usize,
    pub weight: i64,
}

/// Flags clients whose `country` attribute is on a list of ISO codes.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryRuleConfig {
    #[serde(default)]
    pub countries: Vec<String>,
    pub weight: i64,
}

/// Scores the `signups_last_hour` attribute above a threshold.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupVelocityConfig {
    #[serde(default = "default_signup_threshold")]
    pub threshold: u32,
    /// Points per signup above the threshold.
    pub weight_per_signup: i64,
    /// Maximum contribution of this rule.
    #[serde(default = "default_signup_cap")]
    pub cap: i64,
}

/// Lowers the score for domains known to belong to vetted clients.
#[derive(Debug, Clone, Deserialize)]
pub struct TrustedDomainConfig {
    #[serde(default)]
    pub domains: Vec<String>,
    /// Contribution applied on a match; zero or negative.
    pub credit: i64,
}

impl AppConfig {
    /// Load configuration using layered sources.
    ///
    /// 1. Compiled-in defaults.
    /// 2. TOML file at `config_path` (if `Some`).
    /// 3. Environment variable overrides with prefix `REV_` and `__` as the
    ///    nesting separator (e.g., `REV_RULES__COUNTRY__WEIGHT=12`).
    ///
    /// The loaded configuration is validated before it is returned.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder()
            // ── Layer 1: compiled-in defaults ───────────────────────
            .set_default("service.name", default_service_name())?
            .set_default("service.listen_addr", default_listen_addr())?
            .set_default("logging.json", false)?
            // Disposable / throwaway mailbox providers
            .set_default(
                "rules.disposable_domain.domains",
                vec![
                    "mailinator.com",
                    "guerrillamail.com",
                    "10minutemail.com",
                    "tempmail.com",
                    "yopmail.com",
                    "trashmail.com",
                ],
            )?
            .set_default("rules.disposable_domain.weight", 15i64)?
            // Top-level domains with a high abuse rate
            .set_default(
                "rules.high_risk_tld.tlds",
                vec!["xyz", "top", "click", "zip", "work"],
            )?
            .set_default("rules.high_risk_tld.weight", 5i64)?
            .set_default("rules.numeric_local_part.min_digits", 6i64)?
            .set_default("rules.numeric_local_part.weight", 3i64)?
            .set_default("rules.country.countries", vec!["KP", "IR", "SY"])?
            .set_default("rules.country.weight", 10i64)?
            .set_default("rules.signup_velocity.threshold", 3i64)?
            .set_default("rules.signup_velocity.weight_per_signup", 2i64)?
            .set_default("rules.signup_velocity.cap", 20i64)?
            .set_default("rules.trusted_domain.domains", Vec::<String>::new())?
            .set_default("rules.trusted_domain.credit", -5i64)?;

        // ── Layer 2: TOML file ─────────────────────────────────────
        if let Some(path) = config_path {
            let path_str = path
                .to_str()
                .context("config path is not valid UTF-8")?;
            builder = builder.add_source(File::with_name(path_str).required(true));
        }

        // ── Layer 3: env var overrides (REV_ prefix) ──────────────
        // The prefix separator is set explicitly because the `config` crate
        // otherwise reuses the nesting separator (`REV__`).
        builder = builder.add_source(
            Environment::with_prefix("REV")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let cfg: AppConfig = builder
            .build()
            .context("failed to build configuration")?
            .try_deserialize()
            .context("failed to deserialize configuration")?;

        cfg.validate()?;

        Ok(cfg)
    }

    /// Parsed listen address.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.service
            .listen_addr
            .parse()
            .with_context(|| format!("invalid listen address: {}", self.service.listen_addr))
    }

    /// Validate configuration invariants.
    fn validate(&self) -> Result<()> {
        self.listen_addr()?;

        let rules = &self.rules;
        for (name, weight) in [
            ("disposable_domain", rules.disposable_domain.weight),
            ("high_risk_tld", rules.high_risk_tld.weight),
            ("numeric_local_part", rules.numeric_local_part.weight),
            ("country", rules.country.weight),
            ("signup_velocity", rules.signup_velocity.weight_per_signup),
        ] {
            if weight < 0 {
                bail!("rules.{name} weight must not be negative, got {weight}");
            }
        }
        if rules.trusted_domain.credit > 0 {
            bail!(
                "rules.trusted_domain.credit must be zero or negative, got {}",
                rules.trusted_domain.credit
            );
        }
        if rules.numeric_local_part.min_digits == 0 {
            bail!("rules.numeric_local_part.min_digits must be at least 1");
        }
        if rules.signup_velocity.cap < 0 {
            bail!("rules.signup_velocity.cap must not be negative");
        }
        Ok(())
    }
}
