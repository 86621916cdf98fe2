use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Backend-assigned id. Numeric and string ids both decode to their text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobId(String);

impl JobId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for JobId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for JobId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdWire {
    Text(String),
    Number(serde_json::Number),
}

impl<'de> Deserialize<'de> for JobId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match IdWire::deserialize(deserializer)? {
            IdWire::Text(id) => JobId(id),
            IdWire::Number(id) => JobId(id.to_string()),
        })
    }
}

/// A job as the backend sends it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobRecord {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
}

/// Body of `POST /jobs` and `PUT /jobs/{id}`. Tags travel as the raw form string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobPayload {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub tags: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ScrapeReply {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TagsWire {
    List(Vec<String>),
    Joined(String),
}

/// Accepts `["a", "b"]`, `"a, b"` or `null`.
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let wire = Option::<TagsWire>::deserialize(deserializer)?;
    Ok(match wire {
        None => Vec::new(),
        Some(TagsWire::List(tags)) => tags,
        Some(TagsWire::Joined(raw)) => split_tags(&raw),
    })
}

/// Splits a comma-delimited tag string, trimming entries and dropping empties.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "malformed response"),
        }
    }
}

/// Work the engine can run against the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCommand {
    ListJobs,
    GetJob { job_id: JobId },
    CreateJob { payload: JobPayload },
    UpdateJob { job_id: JobId, payload: JobPayload },
    DeleteJob { job_id: JobId },
    DeleteAll { job_ids: Vec<JobId> },
    ListLocations,
    ListTags,
    Scrape,
}

/// Outcome of a delete-all batch, produced once every delete has settled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeleteAllReport {
    pub deleted: Vec<JobId>,
    pub failed: Vec<(JobId, ApiError)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiEvent {
    JobsListed(Result<Vec<JobRecord>, ApiError>),
    JobFetched {
        job_id: JobId,
        result: Result<JobRecord, ApiError>,
    },
    /// Writes succeed on any 2xx; the response body is not read.
    JobCreated(Result<(), ApiError>),
    JobUpdated {
        job_id: JobId,
        result: Result<(), ApiError>,
    },
    JobDeleted {
        job_id: JobId,
        result: Result<(), ApiError>,
    },
    AllDeleted(DeleteAllReport),
    LocationsListed(Result<Vec<String>, ApiError>),
    TagsListed(Result<Vec<String>, ApiError>),
    Scraped(Result<ScrapeReply, ApiError>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_decode_from_sequence_string_or_null() {
        let list: JobRecord = serde_json::from_str(
            r#"{"id":1,"title":"t","company":"c","location":"l","job_type":"Full-time","tags":["go"," api "]}"#,
        )
        .unwrap();
        assert_eq!(list.tags, vec!["go".to_string(), " api ".to_string()]);

        let joined: JobRecord = serde_json::from_str(
            r#"{"id":2,"title":"t","company":"c","location":"l","job_type":"Contract","tags":"a, b,,"}"#,
        )
        .unwrap();
        assert_eq!(joined.tags, vec!["a".to_string(), "b".to_string()]);

        let missing: JobRecord = serde_json::from_str(
            r#"{"id":3,"title":"t","company":"c","location":"l","job_type":"Contract","tags":null}"#,
        )
        .unwrap();
        assert!(missing.tags.is_empty());
    }

    #[test]
    fn ids_decode_from_numbers_or_strings() {
        let jobs: Vec<JobRecord> = serde_json::from_str(
            r#"[
                {"id":7,"title":"t","company":"c","location":"l","job_type":"Contract","tags":[]},
                {"id":"65a1f","title":"t","company":"c","location":"l","job_type":"Contract","tags":[]}
            ]"#,
        )
        .unwrap();
        let ids: Vec<&str> = jobs.iter().map(|job| job.id.as_str()).collect();
        assert_eq!(ids, vec!["7", "65a1f"]);

        let bad = serde_json::from_str::<JobRecord>(
            r#"{"id":true,"title":"t","company":"c","location":"l","job_type":"Contract"}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn api_error_display_includes_kind() {
        let err = ApiError::new(FailureKind::HttpStatus(404), "Not Found");
        assert_eq!(err.to_string(), "http status 404: Not Found");
    }
}
