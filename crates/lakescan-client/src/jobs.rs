//! SQL job submission, polling, and result paging.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use lakescan_core::{Error, Result};

use crate::client::DremioClient;

/// Interval between job-status polls.
const POLL_INTERVAL: std::time::Duration = std::time::Duration::from_millis(500);

/// Terminal and in-flight states of a SQL job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobState {
    /// Job finished successfully.
    Completed,
    /// Job was canceled.
    Canceled,
    /// Job failed.
    Failed,
    /// Any non-terminal state (planning, queued, running, ...).
    #[serde(other)]
    InProgress,
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Completed => "COMPLETED",
            Self::Canceled => "CANCELED",
            Self::Failed => "FAILED",
            Self::InProgress => "IN_PROGRESS",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobInfo {
    job_state: JobState,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SqlSubmitResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct JobResultsPage {
    #[serde(default)]
    rows: Vec<Value>,
    #[serde(default)]
    columns: Vec<Value>,
}

/// Full result set of a completed SQL job.
#[derive(Debug)]
pub struct QueryData {
    /// Result rows as raw JSON objects.
    pub rows: Vec<Value>,
    /// Column descriptors reported with the final page.
    pub columns: Vec<Value>,
}

impl DremioClient {
    /// Submits a SQL statement and waits for the job to reach a terminal
    /// state. Returns the job id.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn post_sql_query(&self, sql: &str) -> Result<String> {
        info!("{sql}");
        let response: SqlSubmitResponse = self
            .post_json("sql", &serde_json::json!({ "sql": sql }))
            .await?;
        self.get_query_info(&response.id).await?;
        Ok(response.id)
    }

    /// Polls a job until it reaches a terminal state and returns that state.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn get_query_info(&self, job_id: &str) -> Result<JobState> {
        debug!("Waiting for job completion...");
        loop {
            let info: JobInfo = self.get_json(&format!("job/{job_id}")).await?;
            match info.job_state {
                JobState::Completed => {
                    debug!("Job successful");
                    return Ok(JobState::Completed);
                }
                JobState::Canceled | JobState::Failed => {
                    debug!(
                        "{} - {}",
                        info.job_state,
                        info.error_message.unwrap_or_default()
                    );
                    return Ok(info.job_state);
                }
                JobState::InProgress => {
                    tokio::time::sleep(POLL_INTERVAL).await;
                }
            }
        }
    }

    /// Pages through the results of a completed job.
    ///
    /// # Errors
    ///
    /// Returns [`Error::JobFailed`] if the job ended in a state other than
    /// `COMPLETED`, or a transport error if a page fetch fails.
    pub async fn get_query_data(&self, job_id: &str, limit: usize) -> Result<QueryData> {
        let state = self.get_query_info(job_id).await?;
        if state != JobState::Completed {
            return Err(Error::JobFailed {
                job_id: job_id.to_string(),
                state: state.to_string(),
            });
        }

        let mut rows = Vec::new();
        let mut columns = Vec::new();
        let mut offset = 0;
        loop {
            debug!("Paging offset={offset}&limit={limit}");
            let page: JobResultsPage = self
                .get_json(&format!("job/{job_id}/results?offset={offset}&limit={limit}"))
                .await?;
            columns = page.columns;
            if page.rows.is_empty() {
                break;
            }
            offset += page.rows.len();
            rows.extend(page.rows);
        }

        Ok(QueryData { rows, columns })
    }
}
