// Upload loop: load every record, post them one by one in file order and log
// one line per record. A failed record never stops the run; only a failure
// to load the input file does.

use anyhow::Result;
use log::{debug, error, info};
use std::fmt;

use crate::api::ApiClient;
use crate::config::Config;
use crate::ui::{upload_spinner, DebugHook};
use crate::users::{load_users, UserRecord};

/// Why a single record was not accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// The endpoint answered with something other than 200 or 201.
    Status { status: u16, body: String },
    /// The request could not be sent or its response could not be read.
    Request(String),
}

/// Result of posting one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// 1-based position in the input file.
    pub index: usize,
    pub email: String,
    pub result: Result<u16, UploadError>,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(status) => write!(
                f,
                "Uploaded user #{}: {} (Status: {})",
                self.index, self.email, status
            ),
            Err(UploadError::Status { status, body }) => write!(
                f,
                "Failed to upload user #{} {}: {} {}",
                self.index, self.email, status, body
            ),
            Err(UploadError::Request(e)) => write!(
                f,
                "Exception uploading user #{} {}: {}",
                self.index, self.email, e
            ),
        }
    }
}

fn is_accepted(status: u16) -> bool {
    matches!(status, 200 | 201)
}

/// Callback fired on every error path (load failure, bad status, request
/// error) and never on success.
pub type ErrorHook = Box<dyn Fn() + Send + Sync>;

pub struct Uploader {
    api: ApiClient,
    config: Config,
    hook: ErrorHook,
}

impl Uploader {
    /// The error hook follows `config.debug`: a terminal pause when set,
    /// a no-op otherwise.
    pub fn new(config: Config) -> Result<Self> {
        let debug = DebugHook::from_flag(config.debug);
        Self::with_hook(config, move || debug.fire())
    }

    pub fn with_hook<F>(config: Config, hook: F) -> Result<Self>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let api = ApiClient::new(&config.api_url)?;
        Ok(Uploader {
            api,
            config,
            hook: Box::new(hook),
        })
    }

    /// Run the whole upload. A load failure is logged once and yields no
    /// outcomes; per-record failures are logged and included in the list.
    pub fn run(&self) -> Vec<Outcome> {
        match self.try_run() {
            Ok(outcomes) => outcomes,
            Err(e) => {
                error!("{:#}", e);
                (self.hook)();
                Vec::new()
            }
        }
    }

    /// Like [`Uploader::run`] but hands the load error back instead of
    /// logging it.
    pub fn try_run(&self) -> Result<Vec<Outcome>> {
        let users = load_users(&self.config.json_path)?;
        debug!(
            "Loaded {} users from {}, posting to {}",
            users.len(),
            self.config.json_path.display(),
            self.api.url()
        );

        let outcomes = users
            .iter()
            .enumerate()
            .map(|(i, user)| self.upload_one(i + 1, user))
            .collect();
        Ok(outcomes)
    }

    fn upload_one(&self, index: usize, user: &UserRecord) -> Outcome {
        let spinner = upload_spinner(index);
        let result = match self.api.post_user(user) {
            Ok(res) if is_accepted(res.status) => Ok(res.status),
            Ok(res) => Err(UploadError::Status {
                status: res.status,
                body: res.body,
            }),
            Err(e) => Err(UploadError::Request(e.to_string())),
        };
        spinner.finish_and_clear();

        let outcome = Outcome {
            index,
            email: user.email(),
            result,
        };
        if outcome.is_success() {
            info!("{}", outcome);
        } else {
            error!("{}", outcome);
            (self.hook)();
        }
        outcome
    }
}
