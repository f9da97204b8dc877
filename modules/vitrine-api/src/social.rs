//! Tweet posting through a spawned interpreter.
//!
//! The posting script and its credentials file ship as on-disk resources.
//! Each invocation stages copies of both into a fresh temp directory, runs
//! the interpreter there, and parses the combined output for the success
//! markers. The staging directory is removed on every exit path, panic
//! included.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, error, info, warn};

use vitrine_common::VitrineError;

/// Marker the script prints when the tweet went out.
const SUCCESS_MARKER: &str = "Success";
/// Marker preceding the tweet identifier in the script output.
const ID_MARKER: &str = "ID: ";
/// Bundled script file name.
const SCRIPT_FILE: &str = "post_tweet.py";
/// Bundled credentials file name.
const CREDENTIALS_FILE: &str = "social_credentials.yml";

/// Tweets longer than this are truncated before posting.
pub const MAX_TWEET_CHARS: usize = 280;

/// Capability of posting one tweet and returning a confirmation message.
///
/// A trait seam so the mechanism (spawned script today, a direct API
/// client tomorrow) can change without touching the REST layer.
#[async_trait]
pub trait SocialPoster: Send + Sync {
    async fn post_tweet(
        &self,
        text: &str,
        image_url: Option<&str>,
    ) -> Result<String, VitrineError>;
}

/// Truncate tweet text to [`MAX_TWEET_CHARS`], keeping 277 characters and
/// appending `...` when anything was cut.
pub fn truncate_tweet(text: &str) -> String {
    if text.chars().count() <= MAX_TWEET_CHARS {
        return text.to_string();
    }
    let kept: String = text.chars().take(MAX_TWEET_CHARS - 3).collect();
    format!("{kept}...")
}

/// Posts tweets by spawning an external interpreter on a staged copy of
/// the bundled posting script.
pub struct ScriptPoster {
    interpreter: PathBuf,
    resource_dir: PathBuf,
    work_root: PathBuf,
}

impl ScriptPoster {
    pub fn new(interpreter: impl Into<PathBuf>, resource_dir: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
            resource_dir: resource_dir.into(),
            work_root: std::env::temp_dir(),
        }
    }

    /// Stage temp directories under `root` instead of the system temp dir.
    pub fn with_work_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.work_root = root.into();
        self
    }

    async fn run_script(
        &self,
        staging: &Path,
        text: &str,
        image_url: Option<&str>,
    ) -> Result<String, VitrineError> {
        let script = staging.join(SCRIPT_FILE);
        stage_copy(&self.resource_dir.join(SCRIPT_FILE), &script)?;
        stage_copy(
            &self.resource_dir.join(CREDENTIALS_FILE),
            &staging.join(CREDENTIALS_FILE),
        )?;

        let mut command = Command::new(&self.interpreter);
        command.arg(&script).arg(text).current_dir(staging);
        let image = image_url.map(str::trim).filter(|u| !u.is_empty());
        if let Some(image) = image {
            command.arg(image);
        }
        debug!(
            interpreter = %self.interpreter.display(),
            with_image = image.is_some(),
            "Running posting script"
        );

        let output = command.output().await.map_err(|e| {
            error!(interpreter = %self.interpreter.display(), error = %e, "Failed to spawn posting script");
            VitrineError::PostingFailed(format!(
                "failed to spawn {}: {e}",
                self.interpreter.display()
            ))
        })?;

        // stderr is folded into the transcript so interpreter tracebacks
        // surface in the error output too.
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        let combined = combined.trim().to_string();

        // A child killed by a signal has no exit code; record it as -1.
        let exit_code = output.status.code().unwrap_or(-1);

        if output.status.success() && combined.contains(SUCCESS_MARKER) {
            if let Some(idx) = combined.find(ID_MARKER) {
                let tweet_id = combined[idx + ID_MARKER.len()..]
                    .lines()
                    .next()
                    .unwrap_or("")
                    .trim();
                if !tweet_id.is_empty() {
                    info!(tweet_id, "Tweet posted");
                    return Ok(format!("Tweet posted successfully: {tweet_id}"));
                }
            }
        }

        error!(exit_code, output = %combined, "Posting script did not report success");
        Err(VitrineError::ScriptFailed {
            exit_code,
            output: combined,
        })
    }
}

#[async_trait]
impl SocialPoster for ScriptPoster {
    async fn post_tweet(
        &self,
        text: &str,
        image_url: Option<&str>,
    ) -> Result<String, VitrineError> {
        if text.trim().is_empty() {
            return Err(VitrineError::InvalidInput(
                "tweet text cannot be empty".to_string(),
            ));
        }

        for name in [SCRIPT_FILE, CREDENTIALS_FILE] {
            let path = self.resource_dir.join(name);
            if !path.exists() {
                return Err(VitrineError::MissingResource(path.display().to_string()));
            }
        }

        let staging = tempfile::Builder::new()
            .prefix("tweet-")
            .tempdir_in(&self.work_root)
            .map_err(|e| {
                error!(error = %e, "Failed to create tweet staging directory");
                VitrineError::PostingFailed(format!("failed to create staging directory: {e}"))
            })?;

        let result = self.run_script(staging.path(), text, image_url).await;

        if let Err(e) = staging.close() {
            warn!(error = %e, "Failed to remove tweet staging directory");
        }

        result
    }
}

fn stage_copy(src: &Path, dst: &Path) -> Result<(), VitrineError> {
    std::fs::copy(src, dst).map_err(|e| {
        error!(src = %src.display(), error = %e, "Failed to stage resource");
        VitrineError::PostingFailed(format!("failed to stage {}: {e}", src.display()))
    })?;
    Ok(())
}
