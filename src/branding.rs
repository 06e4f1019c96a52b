//! Branding and application identity configuration.
//!
//! This module centralizes all branding-related strings (names, paths, URLs) to make
//! future rebranding easier.

/// The human-readable display name of the application.
pub const APP_DISPLAY_NAME: &str = "ButtonVerse";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "buttonverse";

/// The directory name for application data.
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "ButtonVerse";

/// Short description for package metadata and help text.
pub const APP_DESCRIPTION: &str = "Catalog of Tailwind button styles with search and an AI style generator";
