// SPDX-License-Identifier: MPL-2.0
//! Default values and names used by the configuration layer.

/// Directory name below the platform config directory.
pub const APP_NAME: &str = "NavKit";

/// File name of the settings file.
pub const CONFIG_FILE: &str = "settings.toml";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "NAVKIT_CONFIG_DIR";

/// Locale used when neither the caller, the settings nor the system pick one.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Warning key returned when the settings file cannot be read.
pub const CONFIG_LOAD_ERROR_KEY: &str = "notification-config-load-error";
