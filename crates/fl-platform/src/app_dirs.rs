use std::path::PathBuf;

use thiserror::Error;

const APP_DIR_NAME: &str = "fablabel";
const PROFILE_ENV: &str = "FABLABEL_PROFILE";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppDirsError {
    #[error("system data directory is unavailable")]
    DataLocalDirUnavailable,
    #[error("system config directory is unavailable")]
    ConfigDirUnavailable,
}

/// Resolved per-profile application directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
    pub app_config_root: PathBuf,
}

impl AppDirs {
    pub fn config_file(&self) -> PathBuf {
        self.app_config_root.join("config.toml")
    }

    pub fn database_file(&self) -> PathBuf {
        self.app_data_root.join("fablabel.db")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.app_data_root.join("logs")
    }

    pub fn labels_dir(&self) -> PathBuf {
        self.app_data_root.join("labels")
    }
}

fn resolved_app_dir_name() -> String {
    match std::env::var(PROFILE_ENV) {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

#[derive(Default)]
pub struct DirsAppDirsAdapter {
    base_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves both roots under `base` instead of the system directories.
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            base_override: Some(base),
        }
    }

    pub fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let (base_data, base_config) = match &self.base_override {
            Some(base) => (base.clone(), base.clone()),
            None => (
                dirs::data_local_dir().ok_or(AppDirsError::DataLocalDirUnavailable)?,
                dirs::config_dir().ok_or(AppDirsError::ConfigDirUnavailable)?,
            ),
        };
        let app_dir_name = resolved_app_dir_name();

        Ok(AppDirs {
            app_data_root: base_data.join(&app_dir_name),
            app_config_root: base_config.join(&app_dir_name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static PROFILE_ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_profile<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let _guard = PROFILE_ENV_LOCK.lock().unwrap();
        let previous = std::env::var(PROFILE_ENV).ok();

        match value {
            Some(profile) => std::env::set_var(PROFILE_ENV, profile),
            None => std::env::remove_var(PROFILE_ENV),
        }

        let result = f();

        match previous {
            Some(profile) => std::env::set_var(PROFILE_ENV, profile),
            None => std::env::remove_var(PROFILE_ENV),
        }

        result
    }

    #[test]
    fn adapter_appends_app_dir_name() {
        with_profile(None, || {
            let dirs = DirsAppDirsAdapter::with_base_dir(PathBuf::from("/tmp"))
                .get_app_dirs()
                .unwrap();
            assert_eq!(dirs.app_data_root, PathBuf::from("/tmp/fablabel"));
            assert_eq!(dirs.config_file(), PathBuf::from("/tmp/fablabel/config.toml"));
            assert_eq!(dirs.database_file(), PathBuf::from("/tmp/fablabel/fablabel.db"));
        });
    }

    #[test]
    fn adapter_isolates_profiles() {
        let a = with_profile(Some("a"), || {
            DirsAppDirsAdapter::with_base_dir(PathBuf::from("/tmp"))
                .get_app_dirs()
                .unwrap()
        });
        let b = with_profile(Some("b"), || {
            DirsAppDirsAdapter::with_base_dir(PathBuf::from("/tmp"))
                .get_app_dirs()
                .unwrap()
        });

        assert_eq!(a.app_data_root, PathBuf::from("/tmp/fablabel-a"));
        assert_eq!(b.app_config_root, PathBuf::from("/tmp/fablabel-b"));
    }
}
