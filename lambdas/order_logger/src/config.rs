use figment::providers::Env;
use figment::Figment;
use serde::{Deserialize, Serialize};

/// What to do with the rest of a batch once a message fails to decode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum BatchFailureMode {
    /// Stop at the first bad message and fail the whole invocation.
    Abort,
    /// Keep going and hand the bad message ids back to SQS for redelivery.
    #[default]
    ReportItemFailures,
}

impl BatchFailureMode {
    /// Deployment requirement to surface when the function starts, if any.
    pub fn startup_warning(&self) -> Option<&'static str> {
        match self {
            BatchFailureMode::Abort => None,
            BatchFailureMode::ReportItemFailures => Some(
                "Batch item failures are only honoured when ReportBatchItemFailures is enabled \
                 on the SQS event source mapping; without it undecodable messages are deleted",
            ),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub batch_failure_mode: BatchFailureMode,
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Env::raw().only(&["BATCH_FAILURE_MODE"]))
            .extract()
    }
}
