//! Scanner invocation
//!
//! Runs `sonar-scanner` from `PATH` with the assembled parameter list and
//! maps its exit status onto the step result. Only exit status 1 is fatal;
//! any other nonzero status is surfaced as a warning and passed through.

use log::{debug, warn};
use tokio::process::Command;

use crate::actions;
use crate::error::{Result, ScanError};

/// Name of the scanner binary, resolved via `PATH`
pub const SCANNER_BIN: &str = "sonar-scanner";

/// Execute the scanner and wait for it to finish.
///
/// The invocation runs inside a collapsible log group. On exit status 1 an
/// error annotation is emitted, `ScanError::ScannerFailed` is returned, and
/// the group stays open around the failing output.
pub async fn invoke(params: &[String]) -> Result<()> {
    actions::start_group("Running SonarQube");
    debug!("Running SonarQube with parameters: {}", params.join(", "));

    let status = Command::new(SCANNER_BIN)
        .args(params)
        .status()
        .await
        .map_err(ScanError::Launch)?;

    if status.code() == Some(1) {
        actions::error("SonarScanner failed.");
        return Err(ScanError::ScannerFailed.into());
    }

    if !status.success() {
        warn!("{} exited with {}; only exit status 1 is treated as fatal", SCANNER_BIN, status);
    }

    actions::end_group();
    Ok(())
}
