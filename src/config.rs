//! Editor Configuration
//! Window geometry, web-asset locations and the front-end dev-server hook

use crate::view::RESOURCE_ROOT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed editor width in pixels.
pub const DEFAULT_WIDTH: u32 = 850;

/// Fixed editor height in pixels.
pub const DEFAULT_HEIGHT: u32 = 550;

/// Background color shown behind the page while it loads (0xRRGGBB).
pub const BACKGROUND_COLOR: u32 = 0x0a0a0c;

/// Get config directory path
fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("oxide"))
}

/// Get config file path
fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("editor.json"))
}

/// Persisted editor settings.
///
/// Everything here has a working default; a missing or unreadable config
/// file never blocks editor construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Config version (for future migrations)
    pub version: u32,
    /// Editor window width
    pub width: u32,
    /// Editor window height
    pub height: u32,
    /// Whether the host may resize the editor
    pub resizable: bool,
    /// Background color behind the page while it loads (0xRRGGBB)
    pub background_color: u32,
    /// Override for the bundled web-asset directory
    pub resource_dir: Option<PathBuf>,
    /// Front-end dev server URL (e.g. `http://localhost:5173`)
    pub dev_server_url: Option<String>,
    /// Override for the webview user-data directory
    pub user_data_dir: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            version: 1,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            resizable: false,
            background_color: BACKGROUND_COLOR,
            resource_dir: None,
            dev_server_url: None,
            user_data_dir: None,
        }
    }
}

impl EditorConfig {
    /// Load configuration from the default location.
    pub fn load() -> Self {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("could not determine config path, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from `path`, falling back to defaults on any
    /// failure.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("no config file at {:?}, using defaults", path);
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<EditorConfig>(&content) {
                Ok(config) => {
                    log::info!("loaded editor config from {:?}", path);
                    config
                }
                Err(e) => {
                    log::warn!("failed to parse config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("failed to read config: {}", e);
                Self::default()
            }
        }
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<(), String> {
        let path = config_path().ok_or_else(|| "could not determine config path".to_string())?;
        self.save_to(&path)
    }

    /// Save configuration to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)
                    .map_err(|e| format!("failed to create config directory: {}", e))?;
            }
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("failed to serialize config: {}", e))?;

        fs::write(path, content).map_err(|e| format!("failed to write config: {}", e))?;
        log::info!("saved editor config to {:?}", path);
        Ok(())
    }

    /// Directory the resource provider serves from: the configured override
    /// or the first bundled location that exists.
    pub fn resource_dir(&self) -> PathBuf {
        match &self.resource_dir {
            Some(dir) => dir.clone(),
            None => locate_resource_dir(),
        }
    }

    /// User-data directory for the webview backend.
    pub fn user_data_dir(&self) -> PathBuf {
        match &self.user_data_dir {
            Some(dir) => dir.clone(),
            None => std::env::temp_dir().join("OxideWebView"),
        }
    }

    /// URL the view should load: the dev server when configured, otherwise
    /// the resource-provider root.
    pub fn start_url(&self) -> String {
        match &self.dev_server_url {
            Some(url) => url.clone(),
            None => RESOURCE_ROOT.to_owned(),
        }
    }
}

/// Search for the bundled `WebUI` directory next to the running binary.
///
/// Checked in order: `<exe dir>/Resources/WebUI`, `<exe dir>/WebUI`,
/// `<exe parent>/Resources/WebUI`. Falls back to `<exe dir>/WebUI` even
/// when absent; resource requests then resolve to not-found.
fn locate_resource_dir() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));

    let Some(exe_dir) = exe_dir else {
        return PathBuf::from("WebUI");
    };

    let mut candidates = vec![
        exe_dir.join("Resources").join("WebUI"),
        exe_dir.join("WebUI"),
    ];
    if let Some(parent) = exe_dir.parent() {
        candidates.push(parent.join("Resources").join("WebUI"));
    }

    for candidate in &candidates {
        if candidate.is_dir() {
            log::debug!("resources dir: {:?}", candidate);
            return candidate.clone();
        }
    }

    exe_dir.join("WebUI")
}
