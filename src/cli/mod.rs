//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand};

pub mod run;

/// sonarci - CI companion for running SonarQube scans
#[derive(Parser, Debug)]
#[command(name = "sonarci")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Override defaults file location (default: ./.sonarci.yaml when present)
    #[arg(long, global = true, env = "SONARCI_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "SONARCI_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble scanner parameters and run the scan
    Run(ScanArgs),

    /// Display version information
    Version,
}

/// Named inputs for one scanner invocation.
///
/// Every input is also reachable through its `INPUT_*` environment variable,
/// the form the hosting CI runner uses to deliver step inputs. Values left
/// unset here fall back to the defaults file.
#[derive(Debug, Clone, Args, Default)]
pub struct ScanArgs {
    /// Display name of the project (required)
    #[arg(long, env = "INPUT_PROJECTNAME", hide_env = true)]
    pub project_name: Option<String>,

    /// Unique project key on the SonarQube server (required)
    #[arg(long, env = "INPUT_PROJECTKEY", hide_env = true)]
    pub project_key: Option<String>,

    /// Working directory for the analysis
    #[arg(long, env = "INPUT_BASEDIR", hide_env = true)]
    pub base_dir: Option<String>,

    /// Authentication token for the SonarQube server (required)
    #[arg(long, env = "INPUT_TOKEN", hide_env = true)]
    pub token: Option<String>,

    /// SonarQube server endpoint (required)
    #[arg(long, env = "INPUT_URL", hide_env = true)]
    pub url: Option<String>,

    /// Source-control provider, e.g. "git" (required)
    #[arg(long, env = "INPUT_SCMPROVIDER", hide_env = true)]
    pub scm_provider: Option<String>,

    /// Encoding of the analyzed sources
    #[arg(long, env = "INPUT_SOURCEENCODING", hide_env = true)]
    pub source_encoding: Option<String>,

    /// Annotate the pull request with analysis results ("true" to enable)
    #[arg(long, env = "INPUT_ENABLEPULLREQUESTDECORATION", hide_env = true)]
    pub enable_pull_request_decoration: Option<String>,

    /// Publish the parameter list instead of running the scanner ("true" to enable)
    #[arg(long, env = "INPUT_ONLYCONFIG", hide_env = true)]
    pub only_config: Option<String>,

    /// Target server is Community Edition ("true" skips branch/PR parameters)
    #[arg(long, env = "INPUT_ISCOMMUNITYEDITION", hide_env = true)]
    pub is_community_edition: Option<String>,

    /// Wait for the quality gate result ("true" to enable)
    #[arg(long, env = "INPUT_RUNQUALITYGATE", hide_env = true)]
    pub run_quality_gate: Option<String>,

    /// Quality gate wait timeout in seconds
    #[arg(long, env = "INPUT_QUALITYGATETIMEOUT", hide_env = true)]
    pub quality_gate_timeout: Option<String>,

    /// Organization key (SonarCloud)
    #[arg(long, env = "INPUT_ORGANIZATION", hide_env = true)]
    pub organization: Option<String>,

    /// Extra arguments appended verbatim to the scanner invocation
    #[arg(long, env = "INPUT_EXTRAARGS", hide_env = true)]
    pub extra_args: Option<String>,
}
