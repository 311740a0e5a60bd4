//! Token configuration: loading, validation, and hot reload of `tokens.toml`.

mod types;

pub use types::{
    parse_hex_color, BreakpointsConfig, ColorsConfig, Config, ConfigIssue, SizesConfig,
    TypographyConfig,
};

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::{Duration, Instant};

pub type SharedConfig = Arc<RwLock<Config>>;

const CONFIG_FILE_NAME: &str = "tokens.toml";
const RELOAD_DEBOUNCE: Duration = Duration::from_millis(500);

/// Loads the token config from the default location.
pub fn load_config() -> Config {
    load_config_from(&get_config_path())
}

/// Loads the token config from `config_path`.
///
/// Never fails: a missing, unreadable, unparsable, or invalid file yields
/// `Config::default()` and the reason is logged.
pub fn load_config_from(config_path: &Path) -> Config {
    let config = if config_path.exists() {
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded tokens from {:?}", config_path);
                    config
                }
                Err(e) => {
                    log::error!("Failed to parse tokens: {}", e);
                    Config::default()
                }
            },
            Err(e) => {
                log::error!("Failed to read tokens file: {}", e);
                Config::default()
            }
        }
    } else {
        log::info!("No tokens file found at {:?}, using defaults", config_path);
        Config::default()
    };

    let issues = config.validate();
    let errors: Vec<_> = issues.iter().filter(|i| i.is_error).collect();
    let warnings: Vec<_> = issues.iter().filter(|i| !i.is_error).collect();

    for warning in &warnings {
        log::warn!("Tokens: {}", warning);
    }
    for error in &errors {
        log::error!("Tokens: {}", error);
    }

    if !issues.is_empty() {
        log::info!(
            "Token validation: {} error(s), {} warning(s)",
            errors.len(),
            warnings.len()
        );
    }

    if !errors.is_empty() {
        log::error!("Tokens have errors; falling back to defaults.");
        return Config::default();
    }

    config
}

pub fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("kiln")
        .join(CONFIG_FILE_NAME)
}

/// Watches a tokens file and swaps the shared config when it changes.
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
    receiver: Receiver<Result<Event, notify::Error>>,
    config: SharedConfig,
    config_path: PathBuf,
    last_reload: Mutex<Instant>,
    /// Set when a change arrived inside the debounce window and still needs loading
    pending: AtomicBool,
}

impl ConfigWatcher {
    pub fn new(config: SharedConfig, config_path: PathBuf) -> Result<Self, notify::Error> {
        let (tx, rx) = channel();

        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })?;

        // Watch the directory so editors that replace the file are still seen
        let config_dir = config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        if !config_dir.exists() {
            let _ = std::fs::create_dir_all(config_dir);
        }

        watcher.watch(config_dir, RecursiveMode::NonRecursive)?;
        log::info!("Watching tokens directory: {:?}", config_dir);

        // Backdate so the first change is never swallowed by the debounce
        let last_reload = Instant::now()
            .checked_sub(RELOAD_DEBOUNCE * 2)
            .unwrap_or_else(Instant::now);

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
            config,
            config_path,
            last_reload: Mutex::new(last_reload),
            pending: AtomicBool::new(false),
        })
    }

    /// Check for tokens changes and reload if needed. Returns true if the config was reloaded.
    ///
    /// A change that lands inside the debounce window is deferred, not dropped:
    /// a later call reloads it once the window has passed, even with no new events.
    pub fn check_and_reload(&self) -> bool {
        let file_name = self.config_path.file_name();
        let mut should_reload = self.pending.swap(false, Ordering::SeqCst);

        // Drain all pending events
        while let Ok(event) = self.receiver.try_recv() {
            match event {
                Ok(event) => {
                    let is_config = event
                        .paths
                        .iter()
                        .any(|p| p.file_name().is_some() && p.file_name() == file_name);

                    if is_config && (event.kind.is_modify() || event.kind.is_create()) {
                        should_reload = true;
                    }
                }
                Err(e) => {
                    log::error!("Tokens watch error: {}", e);
                }
            }
        }

        if !should_reload {
            return false;
        }

        let now = Instant::now();
        let elapsed = self
            .last_reload
            .lock()
            .map(|t| now.duration_since(*t))
            .unwrap_or(Duration::ZERO);
        if elapsed <= RELOAD_DEBOUNCE {
            log::debug!("Tokens changed again within {:?}, deferring", RELOAD_DEBOUNCE);
            self.pending.store(true, Ordering::SeqCst);
            return false;
        }

        log::info!("Tokens file changed, reloading...");
        let new_config = load_config_from(&self.config_path);
        if let Ok(mut cfg) = self.config.write() {
            *cfg = new_config;
            if let Ok(mut t) = self.last_reload.lock() {
                *t = now;
            }
            return true;
        }

        self.pending.store(true, Ordering::SeqCst);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const RELOAD_TIMEOUT: Duration = Duration::from_secs(5);

    fn wait_for_reload(watcher: &ConfigWatcher) -> bool {
        let deadline = Instant::now() + RELOAD_TIMEOUT;
        while Instant::now() < deadline {
            if watcher.check_and_reload() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(50));
        }
        false
    }

    fn primary(shared: &SharedConfig) -> String {
        shared.read().unwrap().colors.primary.clone()
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn loads_overrides_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[colors]\nprimary = \"#112233\"\n[typography]\nfont_size = 15").unwrap();

        let config = load_config_from(&path);
        assert_eq!(config.colors.primary, "#112233");
        assert_eq!(config.typography.font_size, 15.0);
    }

    #[test]
    fn unparsable_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[colors\nprimary = ").unwrap();

        assert_eq!(load_config_from(&path), Config::default());
    }

    #[test]
    fn invalid_values_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[colors]\nprimary = \"blue\"\n").unwrap();

        assert_eq!(load_config_from(&path), Config::default());
    }

    #[test]
    fn config_path_ends_with_tokens_file() {
        let path = get_config_path();
        assert!(path.ends_with("kiln/tokens.toml"));
    }

    #[test]
    fn watcher_without_changes_does_not_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let shared: SharedConfig = Arc::new(RwLock::new(Config::default()));

        let watcher = ConfigWatcher::new(shared, path).unwrap();
        assert!(!watcher.check_and_reload());
    }

    #[test]
    fn watcher_reloads_edited_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let shared: SharedConfig = Arc::new(RwLock::new(Config::default()));
        let watcher = ConfigWatcher::new(shared.clone(), path.clone()).unwrap();

        std::fs::write(&path, "[colors]\nprimary = \"#222222\"\n").unwrap();

        assert!(wait_for_reload(&watcher));
        assert_eq!(primary(&shared), "#222222");
    }

    #[test]
    fn watcher_applies_edit_made_inside_debounce_window() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let shared: SharedConfig = Arc::new(RwLock::new(Config::default()));
        let watcher = ConfigWatcher::new(shared.clone(), path.clone()).unwrap();

        std::fs::write(&path, "[colors]\nprimary = \"#222222\"\n").unwrap();
        assert!(wait_for_reload(&watcher));

        // Lands right after the reload, well inside the debounce window
        std::fs::write(&path, "[colors]\nprimary = \"#333333\"\n").unwrap();

        let deadline = Instant::now() + RELOAD_TIMEOUT;
        while primary(&shared) != "#333333" && Instant::now() < deadline {
            watcher.check_and_reload();
            std::thread::sleep(Duration::from_millis(50));
        }
        assert_eq!(primary(&shared), "#333333");
    }

    #[test]
    fn watcher_falls_back_to_defaults_on_invalid_edit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let shared: SharedConfig = Arc::new(RwLock::new(Config::default()));
        let watcher = ConfigWatcher::new(shared.clone(), path.clone()).unwrap();

        std::fs::write(&path, "[colors]\nprimary = \"#222222\"\n").unwrap();
        assert!(wait_for_reload(&watcher));

        std::fs::write(&path, "[colors]\nprimary = \"blue\"\n").unwrap();

        let deadline = Instant::now() + RELOAD_TIMEOUT;
        while *shared.read().unwrap() != Config::default() && Instant::now() < deadline {
            watcher.check_and_reload();
            std::thread::sleep(Duration::from_millis(50));
        }
        assert_eq!(*shared.read().unwrap(), Config::default());
    }
}
