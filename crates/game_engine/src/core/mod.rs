//! Engine-wide configuration

pub mod config;

pub use config::{
    ApplicationConfig, Config, ConfigError, ImGuiConfig, RendererConfig, WindowConfig,
};
