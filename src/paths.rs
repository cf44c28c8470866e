//! XDG-compliant discovery of an optional `.env` file.
//!
//! The tool keeps no state of its own, but operators often pin `AWS_PROFILE`,
//! `AWS_REGION` or `EDITOR` per project. A `.env` is loaded from the first
//! location that has one; variables already set in the environment win.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "smed";
const ENV_FILE: &str = ".env";

/// Directory holding the tool's `.env` outside a project.
/// Priority:
/// 1. XDG_CONFIG_HOME/smed (if XDG_CONFIG_HOME is set)
/// 2. ~/.config/smed (default XDG location)
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(xdg_config_home) = env::var("XDG_CONFIG_HOME")
        && !xdg_config_home.is_empty()
    {
        return Some(PathBuf::from(xdg_config_home).join(APP_DIR));
    }

    dirs::home_dir().map(|home| home.join(".config").join(APP_DIR))
}

/// Candidate `.env` locations, in lookup order.
pub fn env_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(current_dir) = env::current_dir() {
        candidates.push(current_dir.join(ENV_FILE));
    }

    if let Some(dir) = config_dir() {
        candidates.push(dir.join(ENV_FILE));
    }

    candidates
}

/// Find and load the first existing `.env` file.
///
/// Returns the path that was loaded, if any. A missing or unreadable file is
/// not an error; the environment is simply left as it was. Runs before
/// logging is set up, so it reports through its return value only.
pub fn load_env_file() -> Option<PathBuf> {
    env_file_candidates()
        .into_iter()
        .filter(|candidate| candidate.exists())
        .find(|candidate| dotenv::from_path(candidate).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_dir_uses_xdg_config_home() {
        let orig = env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            env::set_var("XDG_CONFIG_HOME", "/tmp/xdg");
        }

        assert_eq!(config_dir(), Some(PathBuf::from("/tmp/xdg/smed")));

        unsafe {
            env::remove_var("XDG_CONFIG_HOME");
        }
        if let Some(v) = orig {
            unsafe {
                env::set_var("XDG_CONFIG_HOME", v);
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_default() {
        let orig = env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            env::remove_var("XDG_CONFIG_HOME");
        }

        if let Some(home) = dirs::home_dir() {
            assert_eq!(config_dir(), Some(home.join(".config").join("smed")));
        }

        if let Some(v) = orig {
            unsafe {
                env::set_var("XDG_CONFIG_HOME", v);
            }
        }
    }

    #[test]
    #[serial]
    fn test_current_directory_comes_first() {
        let candidates = env_file_candidates();
        let cwd = env::current_dir().unwrap();
        assert_eq!(candidates.first(), Some(&cwd.join(".env")));
    }
}
