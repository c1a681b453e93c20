//! Scan configuration resolution
//!
//! Inputs arrive through three layers with fixed precedence: CLI flag or
//! `INPUT_*` environment variable (the clap layer), then an optional YAML
//! defaults file, then nothing. Required inputs must be non-empty after
//! merging; booleans are derived from their string form here.

use colored::Colorize;
use serde::Deserialize;
use std::path::Path;

use crate::cli::ScanArgs;
use crate::error::{ConfigError, Result};

/// Defaults file probed in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = ".sonarci.yaml";

/// Fully resolved configuration for one scanner invocation
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Display name of the project, quoted into the project-name flag
    pub project_name: String,

    /// Unique project key on the SonarQube server
    pub project_key: String,

    /// Working directory for analysis
    pub base_dir: Option<String>,

    /// Authentication token. Redacted wherever the configuration is logged.
    pub token: String,

    /// SonarQube server endpoint
    pub url: String,

    /// Source-control provider name passed to the scanner
    pub scm_provider: String,

    /// Encoding of the analyzed sources. The flag is emitted even when
    /// unset, with an empty value.
    pub source_encoding: Option<String>,

    /// Annotate pull requests with analysis results when one is in context
    pub enable_pull_request_decoration: bool,

    /// Compute and publish the parameter list without running the scanner
    pub only_config: bool,

    /// Community Edition servers reject branch and pull-request parameters
    pub is_community_edition: bool,

    /// Wait synchronously for the quality gate result
    pub run_quality_gate: bool,

    /// Quality gate wait timeout, only meaningful with `run_quality_gate`
    pub quality_gate_timeout: Option<String>,

    /// Organization key (SonarCloud)
    pub organization: Option<String>,

    /// Raw extra arguments appended verbatim as a single entry
    pub extra_args: Option<String>,
}

/// Optional YAML defaults, keyed by the public input names
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileDefaults {
    project_name: Option<String>,
    project_key: Option<String>,
    base_dir: Option<String>,
    token: Option<String>,
    url: Option<String>,
    scm_provider: Option<String>,
    source_encoding: Option<String>,
    enable_pull_request_decoration: Option<String>,
    only_config: Option<String>,
    is_community_edition: Option<String>,
    run_quality_gate: Option<String>,
    quality_gate_timeout: Option<String>,
    organization: Option<String>,
    extra_args: Option<String>,
}

impl FileDefaults {
    /// Load defaults from an explicit path, or probe `.sonarci.yaml`.
    ///
    /// An explicit path that does not exist is an error; the implicit probe
    /// silently yields empty defaults when the file is absent.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => {
                let path = Path::new(path);
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.display().to_string()).into());
                }
                Self::load_from(path)
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load defaults from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let defaults = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        Ok(defaults)
    }
}

impl ScanConfig {
    /// Merge the clap layer with file defaults and validate required inputs.
    ///
    /// Fails before any flag assembly when a required input is absent or
    /// empty after merging.
    pub fn resolve(args: &ScanArgs, config_path: Option<&str>) -> Result<Self> {
        let defaults = FileDefaults::load(config_path)?;

        let project_name = merge(&args.project_name, &defaults.project_name);
        let project_key = merge(&args.project_key, &defaults.project_key);
        let token = merge(&args.token, &defaults.token);
        let url = merge(&args.url, &defaults.url);
        let scm_provider = merge(&args.scm_provider, &defaults.scm_provider);

        Ok(Self {
            project_name: require(project_name, "projectName")?,
            project_key: require(project_key, "projectKey")?,
            base_dir: merge(&args.base_dir, &defaults.base_dir),
            token: require(token, "token")?,
            url: require(url, "url")?,
            scm_provider: require(scm_provider, "scmProvider")?,
            source_encoding: merge(&args.source_encoding, &defaults.source_encoding),
            enable_pull_request_decoration: parse_flag(
                merge(
                    &args.enable_pull_request_decoration,
                    &defaults.enable_pull_request_decoration,
                )
                .as_deref(),
            ),
            only_config: parse_flag(merge(&args.only_config, &defaults.only_config).as_deref()),
            is_community_edition: parse_flag(
                merge(&args.is_community_edition, &defaults.is_community_edition).as_deref(),
            ),
            run_quality_gate: parse_flag(
                merge(&args.run_quality_gate, &defaults.run_quality_gate).as_deref(),
            ),
            quality_gate_timeout: merge(&args.quality_gate_timeout, &defaults.quality_gate_timeout),
            organization: merge(&args.organization, &defaults.organization),
            extra_args: merge(&args.extra_args, &defaults.extra_args),
        })
    }

    /// Multi-line summary of every resolved value, token redacted
    pub fn format_summary(&self) -> String {
        format!(
            "{}\n\n    \
             ProjectName                 : {}\n    \
             ProjectKey                  : {}\n    \
             BaseDir                     : {}\n    \
             Token                       : {}\n    \
             URL                         : {}\n    \
             scmProvider                 : {}\n    \
             sourceEncoding              : {}\n    \
             enablePullRequestDecoration : {}\n    \
             onlyConfig                  : {}\n    \
             isCommunityEdition          : {}\n    \
             runQualityGate              : {}\n    \
             qualityGateTimeout          : {}\n    \
             organization                : {}\n    \
             extraArgs                   : {}\n",
            "Using Configuration:".bold(),
            self.project_name,
            self.project_key,
            self.base_dir.as_deref().unwrap_or(""),
            redact(&self.token),
            self.url,
            self.scm_provider,
            self.source_encoding.as_deref().unwrap_or(""),
            self.enable_pull_request_decoration,
            self.only_config,
            self.is_community_edition,
            self.run_quality_gate,
            self.quality_gate_timeout.as_deref().unwrap_or(""),
            self.organization.as_deref().unwrap_or(""),
            self.extra_args.as_deref().unwrap_or(""),
        )
    }

    /// Print the configuration summary to the step log
    pub fn log_summary(&self) {
        println!("{}", self.format_summary());
    }
}

/// First non-empty value wins: clap layer, then file defaults
fn merge(arg: &Option<String>, file: &Option<String>) -> Option<String> {
    arg.clone()
        .filter(|v| !v.is_empty())
        .or_else(|| file.clone())
}

/// Validate that a required input is present and non-blank
fn require(value: Option<String>, input: &'static str) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingInput(input).into())
}

/// Boolean inputs are the string `"true"`, compared case-insensitively
/// after trimming. Everything else, including absence, is `false`.
fn parse_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}

/// Mask a secret for log output
fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "" } else { "***" }
}
