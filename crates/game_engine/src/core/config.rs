//! # Configuration
//!
//! Serializable settings for every subsystem the application creates at
//! startup. Each struct has sensible defaults, builder-style `with_*`
//! setters and a `validate` pass; any of them can be read from or written to
//! disk through the [`Config`] trait, which picks TOML or RON by file
//! extension.
//!
//! ```toml
//! name = "Sandbox"
//! log_level = "debug"
//!
//! [window]
//! title = "Sandbox"
//! width = 1600
//! height = 900
//! vsync = true
//! ```

use crate::render::RendererApiKind;
use crate::window::WindowProps;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Loading and saving of configuration files
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from a `.toml` or `.ron` file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match Format::of(path)? {
            Format::Toml => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Format::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Save configuration to a `.toml` or `.ron` file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match Format::of(path)? {
            Format::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Format::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents)?;
        Ok(())
    }
}

enum Format {
    Toml,
    Ron,
}

impl Format {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Log levels accepted by `log_level`
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// # Window Configuration
///
/// Initial properties of the main window. Converted into [`WindowProps`]
/// when the window is created; later changes go through the window itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title bar text
    pub title: String,
    /// Client area width in screen coordinates
    pub width: u32,
    /// Client area height in screen coordinates
    pub height: u32,
    /// Synchronize buffer swaps with the display refresh
    pub vsync: bool,
}

impl WindowConfig {
    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Enable or disable vsync
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        let props = WindowProps::default();
        Self {
            title: props.title,
            width: props.width,
            height: props.height,
            vsync: props.vsync,
        }
    }
}

impl From<&WindowConfig> for WindowProps {
    fn from(config: &WindowConfig) -> Self {
        WindowProps::new(config.title.clone(), config.width, config.height).with_vsync(config.vsync)
    }
}

/// # Renderer Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Graphics API to create the context for
    pub api: RendererApiKind,
    /// RGBA clear color applied before the first frame
    pub clear_color: [f32; 4],
}

impl RendererConfig {
    /// Select the graphics API
    pub fn with_api(mut self, api: RendererApiKind) -> Self {
        self.api = api;
        self
    }

    /// Set the clear color
    pub fn with_clear_color(mut self, color: [f32; 4]) -> Self {
        self.clear_color = color;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clear_color.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(ConfigError::Invalid(format!(
                "clear color components must be within [0, 1], got {:?}",
                self.clear_color
            )));
        }
        Ok(())
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            api: RendererApiKind::OpenGl,
            clear_color: [0.1, 0.1, 0.1, 1.0],
        }
    }
}

/// # ImGui Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImGuiConfig {
    /// Create the UI overlay at all
    pub enabled: bool,
    /// Where ImGui persists window positions; `None` disables persistence
    pub ini_filename: Option<PathBuf>,
    /// Global font scale
    pub font_scale: f32,
    /// Mark input handled while ImGui wants to capture it
    pub block_events: bool,
    /// Move focus between widgets with the keyboard
    pub keyboard_nav: bool,
    /// Allow ImGui windows to dock into each other
    pub docking: bool,
    /// Open the Dear ImGui demo window
    pub show_demo_window: bool,
}

impl ImGuiConfig {
    /// Enable or disable the overlay
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Persist layout to the given file
    pub fn with_ini_filename(mut self, path: impl Into<PathBuf>) -> Self {
        self.ini_filename = Some(path.into());
        self
    }

    /// Set the global font scale
    pub fn with_font_scale(mut self, scale: f32) -> Self {
        self.font_scale = scale;
        self
    }

    /// Enable or disable input blocking
    pub fn with_block_events(mut self, block: bool) -> Self {
        self.block_events = block;
        self
    }

    /// Enable or disable keyboard navigation
    pub fn with_keyboard_nav(mut self, enabled: bool) -> Self {
        self.keyboard_nav = enabled;
        self
    }

    /// Enable or disable docking
    pub fn with_docking(mut self, enabled: bool) -> Self {
        self.docking = enabled;
        self
    }

    /// Open the demo window on startup
    pub fn with_show_demo_window(mut self, show: bool) -> Self {
        self.show_demo_window = show;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.font_scale > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "font scale must be positive, got {}",
                self.font_scale
            )));
        }
        Ok(())
    }
}

impl Default for ImGuiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ini_filename: None,
            font_scale: 1.0,
            block_events: true,
            keyboard_nav: true,
            docking: true,
            show_demo_window: false,
        }
    }
}

/// # Application Configuration
///
/// Top-level settings consumed by [`entry::run`](crate::entry::run).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Application name, used in log messages
    pub name: String,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Main window
    pub window: WindowConfig,
    /// Graphics backend
    pub renderer: RendererConfig,
    /// UI overlay
    pub imgui: ImGuiConfig,
}

impl ApplicationConfig {
    /// Configuration named `name`, with a matching window title
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            window: WindowConfig::default().with_title(name.clone()),
            name,
            ..Self::default()
        }
    }

    /// Set the default log filter
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Replace the window configuration
    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }

    /// Replace the renderer configuration
    pub fn with_renderer(mut self, renderer: RendererConfig) -> Self {
        self.renderer = renderer;
        self
    }

    /// Replace the ImGui configuration
    pub fn with_imgui(mut self, imgui: ImGuiConfig) -> Self {
        self.imgui = imgui;
        self
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::Invalid("application name cannot be empty".to_string()));
        }
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown log level '{}'",
                self.log_level
            )));
        }
        self.window.validate()?;
        self.renderer.validate()?;
        self.imgui.validate()
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: "Game Engine".to_string(),
            log_level: "info".to_string(),
            window: WindowConfig::default(),
            renderer: RendererConfig::default(),
            imgui: ImGuiConfig::default(),
        }
    }
}

impl Config for ApplicationConfig {}
impl Config for WindowConfig {}
impl Config for RendererConfig {}
impl Config for ImGuiConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("game_engine_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_defaults_validate() {
        let config = ApplicationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 720);
        assert_eq!(config.renderer.api, RendererApiKind::OpenGl);
    }

    #[test]
    fn test_new_sets_window_title() {
        let config = ApplicationConfig::new("Sandbox");
        assert_eq!(config.name, "Sandbox");
        assert_eq!(config.window.title, "Sandbox");
    }

    #[test]
    fn test_validation_failures() {
        let zero = ApplicationConfig::default().with_window(WindowConfig::default().with_size(0, 720));
        assert!(matches!(zero.validate(), Err(ConfigError::Invalid(_))));

        let level = ApplicationConfig::default().with_log_level("loud");
        assert!(matches!(level.validate(), Err(ConfigError::Invalid(_))));

        let color = ApplicationConfig::default()
            .with_renderer(RendererConfig::default().with_clear_color([2.0, 0.0, 0.0, 1.0]));
        assert!(matches!(color.validate(), Err(ConfigError::Invalid(_))));

        let scale = ApplicationConfig::default().with_imgui(ImGuiConfig::default().with_font_scale(0.0));
        assert!(matches!(scale.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ApplicationConfig = toml::from_str(
            r#"
            name = "Partial"

            [window]
            width = 800
            "#,
        )
        .unwrap();
        assert_eq!(config.name, "Partial");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 720);
        assert!(config.imgui.enabled);
        assert!(config.imgui.keyboard_nav);
        assert!(config.imgui.docking);
        assert!(!config.imgui.show_demo_window);
    }

    #[test]
    fn test_save_and_load_toml_and_ron() {
        let config = ApplicationConfig::new("Files")
            .with_log_level("debug")
            .with_window(WindowConfig::default().with_vsync(false));

        for ext in ["toml", "ron"] {
            let path = temp_path(&format!("config.{ext}"));
            config.save_to_file(&path).unwrap();
            let loaded = ApplicationConfig::load_from_file(&path).unwrap();
            std::fs::remove_file(&path).unwrap();
            assert_eq!(loaded, config);
        }
    }

    #[test]
    fn test_unsupported_extension() {
        let err = ApplicationConfig::default()
            .save_to_file(temp_path("config.json"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_window_props_conversion() {
        let props = WindowProps::from(&WindowConfig::default().with_title("T").with_size(640, 480));
        assert_eq!(props.title, "T");
        assert_eq!((props.width, props.height), (640, 480));
        assert!(props.vsync);
    }
}
