use std::env;
use std::path::PathBuf;

/// Directory name used under the user's cache and config homes.
pub const APP_DIR: &str = "rpm-get";

pub fn user_home() -> Option<PathBuf> {
    home::home_dir()
}

pub fn user_config() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        user_home().map(|p| p.join("Library/Application Support"))
    }
    #[cfg(not(target_os = "macos"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or_else(|| user_home().map(|p| p.join(".config")))
    }
}

pub fn user_cache() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        user_home().map(|p| p.join("Library/Caches"))
    }
    #[cfg(not(target_os = "macos"))]
    {
        env::var_os("XDG_CACHE_HOME")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or_else(|| user_home().map(|p| p.join(".cache")))
    }
}

/// `<user-cache-home>/rpm-get`
pub fn cache_root() -> Option<PathBuf> {
    user_cache().map(|p| p.join(APP_DIR))
}

/// `<user-config-home>/rpm-get`
pub fn config_dir() -> Option<PathBuf> {
    user_config().map(|p| p.join(APP_DIR))
}
