use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// File store endpoint used when neither the config nor the CLI names one.
pub const DEFAULT_BASE_URL: &str = "https://textfileserver-a165358fe7c8.herokuapp.com/api/v1/file";

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".txtview.toml";

/// How often the tick event fires (ms).
pub const TICK_RATE_MS: u64 = 250;

/// Per-request HTTP timeout (s).
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Minimum time each loading indicator stays up (ms).
pub const LIST_MIN_MS: u64 = 800;
pub const PREVIEW_MIN_MS: u64 = 500;
pub const MODAL_MIN_MS: u64 = 600;

/// Two clicks on the same row within this window open the modal (ms).
pub const DOUBLE_CLICK_MS: u64 = 400;

// ---------------------------------------------------------------------------
// Config file (.txtview.toml)
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub server: Option<ServerConfig>,
    pub timing: Option<TimingConfig>,
    pub behavior: Option<BehaviorConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TimingConfig {
    pub list_min_ms: Option<u64>,
    pub preview_min_ms: Option<u64>,
    pub modal_min_ms: Option<u64>,
    pub tick_rate_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BehaviorConfig {
    /// Drop content responses that arrive after the selection moved on.
    pub stale_guard: Option<bool>,
    /// Ask before deleting.
    pub confirm_delete: Option<bool>,
    pub download: Option<DownloadMode>,
    pub download_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    pub file: Option<PathBuf>,
    /// Filter directive used when `RUST_LOG` is unset, e.g. "info".
    pub level: Option<String>,
}

/// What Download does with a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadMode {
    /// Hand the resource URL to the system opener.
    #[default]
    Browser,
    /// Fetch the text and write it into `download_dir`.
    Save,
}

/// Minimum display durations for the three loading indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingDelays {
    pub list: Duration,
    pub preview: Duration,
    pub modal: Duration,
}

impl LoadingDelays {
    #[cfg(test)]
    pub const ZERO: LoadingDelays = LoadingDelays {
        list: Duration::ZERO,
        preview: Duration::ZERO,
        modal: Duration::ZERO,
    };
}

impl Config {
    pub fn base_url(&self) -> &str {
        self.server
            .as_ref()
            .and_then(|s| s.base_url.as_deref())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .server
            .as_ref()
            .and_then(|s| s.timeout_secs)
            .unwrap_or(REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    pub fn tick_rate(&self) -> u64 {
        self.timing
            .as_ref()
            .and_then(|t| t.tick_rate_ms)
            .unwrap_or(TICK_RATE_MS)
    }

    pub fn loading_delays(&self) -> LoadingDelays {
        let t = self.timing.as_ref();
        LoadingDelays {
            list: Duration::from_millis(t.and_then(|t| t.list_min_ms).unwrap_or(LIST_MIN_MS)),
            preview: Duration::from_millis(
                t.and_then(|t| t.preview_min_ms).unwrap_or(PREVIEW_MIN_MS),
            ),
            modal: Duration::from_millis(t.and_then(|t| t.modal_min_ms).unwrap_or(MODAL_MIN_MS)),
        }
    }

    pub fn stale_guard(&self) -> bool {
        self.behavior
            .as_ref()
            .and_then(|b| b.stale_guard)
            .unwrap_or(true)
    }

    pub fn confirm_delete(&self) -> bool {
        self.behavior
            .as_ref()
            .and_then(|b| b.confirm_delete)
            .unwrap_or(true)
    }

    pub fn download_mode(&self) -> DownloadMode {
        self.behavior
            .as_ref()
            .and_then(|b| b.download)
            .unwrap_or_default()
    }

    /// Target directory for saved downloads. Defaults to `~/Downloads`,
    /// or the working directory when no home is known.
    pub fn download_dir(&self) -> PathBuf {
        if let Some(dir) = self.behavior.as_ref().and_then(|b| b.download_dir.clone()) {
            return dir;
        }
        std::env::var("USERPROFILE")
            .or_else(|_| std::env::var("HOME"))
            .map(|home| PathBuf::from(home).join("Downloads"))
            .unwrap_or_else(|_| PathBuf::from("."))
    }

    pub fn log_file(&self) -> PathBuf {
        self.logging
            .as_ref()
            .and_then(|l| l.file.clone())
            .unwrap_or_else(|| std::env::temp_dir().join("txtview.log"))
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or("info")
    }

    // --- CLI overrides ---

    pub fn set_base_url(&mut self, url: String) {
        self.server.get_or_insert_with(Default::default).base_url = Some(url);
    }

    pub fn set_confirm_delete(&mut self, confirm: bool) {
        self.behavior
            .get_or_insert_with(Default::default)
            .confirm_delete = Some(confirm);
    }

    pub fn set_log_file(&mut self, path: PathBuf) {
        self.logging.get_or_insert_with(Default::default).file = Some(path);
    }
}

/// Load the config from `explicit`, or from `.txtview.toml` in `cwd`.
///
/// A missing default file yields the default config. An explicit path that
/// does not exist, or any file that fails to parse, is an error.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let p = cwd.join(CONFIG_FILE_NAME);
            if !p.exists() {
                return Ok(Config::default());
            }
            p
        }
    };
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse_config(&content).with_context(|| format!("parsing config {}", path.display()))
}

pub fn parse_config(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}
