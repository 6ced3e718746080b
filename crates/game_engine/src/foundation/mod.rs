//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types for cameras and transforms
//! - Frame timing
//! - Logging utilities with separate engine and client targets

pub mod logging;
pub mod math;
pub mod time;
