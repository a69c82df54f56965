//! Centralized path definitions for labelgrade
//!
//! This module provides a single source of truth for the filesystem paths
//! labelgrade uses by default.
//!
//! ## Storage Layout
//!
//! ### Per-Run (Working Directory)
//!
//! ```text
//! ./
//! ├── all_tasks_data.json        # Task dump written by `fetch`
//! ├── task_ratings.csv           # Report written by `rate`
//! ├── annotated_images/          # Annotated PNGs, one per task
//! │   └── annotated_{id}.png
//! └── .labelgrade/
//!     └── images/                # Downloaded originals, one per task
//!         └── {id}.source
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.config/labelgrade/
//! └── config.toml               # Policy, image and API settings
//! ```

use std::path::PathBuf;

// =============================================================================
// Working-directory paths
// =============================================================================

/// Directory name for local labelgrade state
pub const LABELGRADE_DIR: &str = ".labelgrade";

/// Default task dump written by `fetch` and read by `rate`
pub const DEFAULT_TASKS_FILE: &str = "all_tasks_data.json";

/// Default CSV report path
pub const DEFAULT_REPORT_FILE: &str = "task_ratings.csv";

/// Default directory for annotated images
pub const DEFAULT_OUTPUT_DIR: &str = "annotated_images";

/// Image cache subdirectory
const IMAGE_CACHE_DIR: &str = "images";

/// Get path to the default image cache.
///
/// Returns `.labelgrade/images`.
#[must_use]
pub fn image_cache_dir() -> PathBuf {
    PathBuf::from(LABELGRADE_DIR).join(IMAGE_CACHE_DIR)
}

/// Get path to the default annotated image directory.
#[must_use]
pub fn output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Global config directory name
const GLOBAL_DIR: &str = "labelgrade";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global labelgrade config directory.
///
/// Returns `~/.config/labelgrade/` on Linux (XDG standard).
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from("~/.config")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.config/labelgrade/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
