// Configuration: the uploader always runs against a fixed endpoint and
// input file. Only the debug pause can be switched on from the environment.

use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/users";
pub const DEFAULT_JSON_PATH: &str = "UserManagementAPI/sample-users.json";

const ENV_DEBUG: &str = "BULK_UPLOAD_DEBUG";

/// Where to read users from and where to send them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub json_path: PathBuf,
    /// Pause on every error path so the run can be inspected.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.into(),
            json_path: PathBuf::from(DEFAULT_JSON_PATH),
            debug: false,
        }
    }
}

impl Config {
    /// The fixed URL and path, with the debug pause read from
    /// `BULK_UPLOAD_DEBUG`.
    pub fn from_env() -> Self {
        Config {
            debug: std::env::var(ENV_DEBUG)
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            ..Config::default()
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_and_path_are_fixed() {
        temp_env::with_vars(
            [
                (ENV_DEBUG, None::<&str>),
                ("BULK_UPLOAD_API_URL", Some("http://api.tld/users")),
                ("BULK_UPLOAD_JSON_PATH", Some("/tmp/users.json")),
            ],
            || {
                let config = Config::from_env();
                assert_eq!(config.api_url, "http://localhost:5000/api/users");
                assert_eq!(
                    config.json_path,
                    PathBuf::from("UserManagementAPI/sample-users.json")
                );
                assert!(!config.debug);
            },
        );
    }

    #[test]
    fn debug_flag_from_environment() {
        temp_env::with_vars([(ENV_DEBUG, Some("TRUE"))], || {
            assert!(Config::from_env().debug);
        });
        temp_env::with_vars([(ENV_DEBUG, Some(""))], || {
            assert!(!Config::from_env().debug);
        });
    }

    #[test]
    fn debug_flag_values() {
        for value in ["1", "yes", "On"] {
            assert!(parse_flag(value), "{value}");
        }
        for value in ["0", "false", "nope"] {
            assert!(!parse_flag(value), "{value}");
        }
    }
}
