//! Scanner parameter assembly
//!
//! Produces the ordered `-D` argument list for one invocation. Order is
//! fixed: the seven base parameters always come first, conditional
//! parameters follow, and branch/pull-request parameters are appended last.

use log::debug;

use crate::actions;
use crate::config::ScanConfig;
use crate::context::CiContext;

/// Assemble the complete parameter list for a scanner invocation
pub fn assemble(config: &ScanConfig, ctx: &CiContext) -> Vec<String> {
    let mut params = base_parameters(config);
    params.extend(branch_parameters(config, ctx));
    params
}

/// Base and conditional parameters derived from the configuration alone.
///
/// A quality-gate timeout supplied without the gate enabled is dropped with
/// a warning annotation instead of being passed through.
pub fn base_parameters(config: &ScanConfig) -> Vec<String> {
    let mut params = vec![
        format!("-Dsonar.login={}", config.token),
        format!("-Dsonar.host.url={}", config.url),
        format!("-Dsonar.projectKey={}", config.project_key),
        format!("-Dsonar.projectName='{}'", config.project_name),
        format!("-Dsonar.scm.provider={}", config.scm_provider),
        format!(
            "-Dsonar.sourceEncoding={}",
            config.source_encoding.as_deref().unwrap_or("")
        ),
        format!("-Dsonar.qualitygate.wait={}", config.run_quality_gate),
    ];

    if let Some(extra) = config.extra_args.as_deref().filter(|v| !v.is_empty()) {
        // Opaque entry, appended verbatim. The caller owns shell-safe quoting.
        params.push(extra.to_string());
    }

    if let Some(base_dir) = config.base_dir.as_deref().filter(|v| !v.is_empty()) {
        params.push(format!("-Dsonar.projectBaseDir={}", base_dir));
    }

    if let Some(org) = config.organization.as_deref().filter(|v| !v.is_empty()) {
        params.push(format!("-Dsonar.organization={}", org));
    }

    match config.quality_gate_timeout.as_deref().filter(|v| !v.is_empty()) {
        Some(_) if !config.run_quality_gate => {
            actions::warning("\"runQualityGate\" not set, ignoring provided quality gate timeout");
        }
        Some(timeout) => {
            params.push(format!("-Dsonar.qualitygate.timeout={}", timeout));
        }
        None => {}
    }

    params
}

/// Branch or pull-request parameters derived from the CI context.
///
/// Community Edition servers reject these, so the whole derivation is
/// skipped there. A pull request with decoration disabled yields nothing.
pub fn branch_parameters(config: &ScanConfig, ctx: &CiContext) -> Vec<String> {
    if config.is_community_edition {
        return Vec::new();
    }

    let mut params = Vec::new();

    match &ctx.pull_request {
        None => {
            let branch_name = ctx.branch_or_tag_name();
            params.push(format!("-Dsonar.branch.name={}", branch_name));
            println!(
                "\n    -- Configuration for branch:\n       \
                 branchName               : {}\n",
                branch_name
            );
        }
        Some(pr) if config.enable_pull_request_decoration => {
            println!(
                "\n    -- Configuration for pull request decoration:\n       \
                 Pull request number       : {}\n       \
                 Pull request branch       : {}\n       \
                 Pull request base branch  : {}\n",
                pr.number, pr.head.name, pr.base.name
            );

            params.push(format!("-Dsonar.pullrequest.key={}", pr.number));
            params.push(format!("-Dsonar.pullrequest.base={}", pr.base.name));
            params.push(format!("-Dsonar.pullrequest.branch={}", pr.head.name));
        }
        Some(pr) => {
            debug!(
                "pull request #{} in context but decoration is disabled, \
                 emitting no branch or pull request parameters",
                pr.number
            );
        }
    }

    params
}
