//! Run command implementation
//!
//! Resolves configuration and CI context, assembles the parameter list, and
//! either invokes the scanner or publishes the parameters as a step output.

use crate::actions;
use crate::cli::ScanArgs;
use crate::config::ScanConfig;
use crate::context::CiContext;
use crate::error::Result;
use crate::{params, scanner};

/// Name of the published output in config-only mode
const PARAMETERS_OUTPUT: &str = "sonarParameters";

/// Run the scan command
pub async fn run(args: &ScanArgs, config_path: Option<&str>) -> Result<()> {
    let config = ScanConfig::resolve(args, config_path)?;
    let ctx = CiContext::from_env()?;

    let mut scan_params = params::base_parameters(&config);
    config.log_summary();
    scan_params.extend(params::branch_parameters(&config, &ctx));

    if config.only_config {
        println!("Skipping running scanner.");
        return actions::set_output(PARAMETERS_OUTPUT, &scan_params.join(" "));
    }

    scanner::invoke(&scan_params).await
}
