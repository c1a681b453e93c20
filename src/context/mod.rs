//! CI context: the triggering ref and, when present, the pull request
//!
//! The runner exposes the ref through `GITHUB_REF` and the full webhook
//! payload as a JSON file named by `GITHUB_EVENT_PATH`. Only the
//! `pull_request` key of the payload is deserialized; everything else is
//! ignored.

use serde::Deserialize;

use crate::error::{ContextError, Result};

/// Context of the triggering CI event
#[derive(Debug, Clone, Default)]
pub struct CiContext {
    /// Slash-delimited ref that triggered the run, e.g. `refs/heads/main`.
    /// Empty when the runner did not provide one.
    pub git_ref: String,

    /// Pull request descriptor, present only for pull-request events
    pub pull_request: Option<PullRequest>,
}

/// Pull request identity as delivered in the event payload
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub head: GitRef,
    pub base: GitRef,
}

/// A named ref inside the pull request descriptor
#[derive(Debug, Clone, Deserialize)]
pub struct GitRef {
    #[serde(rename = "ref")]
    pub name: String,
}

/// The subset of the event payload this tool cares about
#[derive(Debug, Deserialize)]
struct EventPayload {
    #[serde(default)]
    pull_request: Option<PullRequest>,
}

impl CiContext {
    /// Build the context from the runner environment.
    ///
    /// A missing `GITHUB_EVENT_PATH` means no pull request (e.g. a push or
    /// tag event); an unreadable or malformed payload file is fatal.
    pub fn from_env() -> Result<Self> {
        let git_ref = std::env::var("GITHUB_REF").unwrap_or_default();

        let pull_request = match std::env::var("GITHUB_EVENT_PATH") {
            Ok(path) if !path.is_empty() => {
                let payload =
                    std::fs::read_to_string(&path).map_err(|source| ContextError::Payload {
                        path: path.clone(),
                        source,
                    })?;
                parse_pull_request(&payload)?
            }
            _ => None,
        };

        Ok(Self {
            git_ref,
            pull_request,
        })
    }

    /// Final path segment of the ref: the branch or tag name.
    ///
    /// `refs/heads/feature/foo` yields `foo`; `refs/tags/v1.0` yields `v1.0`.
    pub fn branch_or_tag_name(&self) -> &str {
        self.git_ref.rsplit('/').next().unwrap_or(&self.git_ref)
    }
}

/// Extract the optional pull request descriptor from a raw event payload
fn parse_pull_request(payload: &str) -> Result<Option<PullRequest>> {
    let event: EventPayload = serde_json::from_str(payload).map_err(ContextError::from)?;
    Ok(event.pull_request)
}
