use std::path::PathBuf;

/// Relevant slice of the process environment for trash discovery.
///
/// Passed explicitly to the scanner so repeated invocations with different
/// environments are independent and fakes can be substituted in tests.
#[derive(Debug, Clone, Default)]
pub struct TrashEnvironment {
    /// Value of `XDG_DATA_HOME`, when set
    pub xdg_data_home: Option<PathBuf>,
    /// Value of `HOME`, when set
    pub home: Option<PathBuf>,
}

impl TrashEnvironment {
    /// Reads the environment variables of the current process
    pub fn from_env() -> Self {
        Self {
            xdg_data_home: std::env::var_os("XDG_DATA_HOME").map(PathBuf::from),
            home: std::env::var_os("HOME").map(PathBuf::from),
        }
    }

    /// Resolves the home trash directory.
    ///
    /// `$XDG_DATA_HOME/Trash` when `XDG_DATA_HOME` is set, otherwise
    /// `$HOME/.local/share/Trash`. `None` when neither variable is available.
    pub fn home_trash_dir(&self) -> Option<PathBuf> {
        if let Some(data_home) = &self.xdg_data_home {
            return Some(data_home.join("Trash"));
        }
        self.home
            .as_ref()
            .map(|home| home.join(".local").join("share").join("Trash"))
    }
}

/// Application configuration resolved at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Environment slice used for home trash resolution
    pub environment: TrashEnvironment,
    /// Real uid of the calling user
    pub uid: u32,
}

impl AppConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Self {
        Self {
            environment: TrashEnvironment::from_env(),
            uid: unsafe { libc::getuid() },
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: TrashEnvironment::default(),
            uid: 0,
        }
    }
}
