use std::sync::{Arc, Mutex};
use std::time::Duration;

use jobboard_engine::{
    ApiCommand, ApiError, ApiEvent, EngineHandle, FailureKind, JobId, JobPayload, JobRecord,
    JobsApi, ScrapeReply,
};

/// In-memory backend that honours every delete.
#[derive(Default)]
struct FakeBackend {
    jobs: Mutex<Vec<JobRecord>>,
    delete_calls: Mutex<Vec<JobId>>,
}

impl FakeBackend {
    fn with_jobs(ids: &[u64]) -> Self {
        let jobs = ids
            .iter()
            .map(|&id| JobRecord {
                id: JobId::from(id),
                title: format!("Job {id}"),
                company: "Acme".to_string(),
                location: "Remote".to_string(),
                job_type: "Full-time".to_string(),
                tags: Vec::new(),
            })
            .collect();
        Self {
            jobs: Mutex::new(jobs),
            delete_calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl JobsApi for FakeBackend {
    async fn list_jobs(&self) -> Result<Vec<JobRecord>, ApiError> {
        Ok(self.jobs.lock().unwrap().clone())
    }

    async fn get_job(&self, job_id: &JobId) -> Result<JobRecord, ApiError> {
        self.jobs
            .lock()
            .unwrap()
            .iter()
            .find(|job| job.id == *job_id)
            .cloned()
            .ok_or_else(|| ApiError::new(FailureKind::HttpStatus(404), "Not Found"))
    }

    async fn create_job(&self, _payload: &JobPayload) -> Result<(), ApiError> {
        Err(ApiError::new(FailureKind::HttpStatus(405), "read only"))
    }

    async fn update_job(&self, _job_id: &JobId, _payload: &JobPayload) -> Result<(), ApiError> {
        Err(ApiError::new(FailureKind::HttpStatus(405), "read only"))
    }

    async fn delete_job(&self, job_id: &JobId) -> Result<(), ApiError> {
        tokio::time::sleep(Duration::from_millis(5)).await;
        self.delete_calls.lock().unwrap().push(job_id.clone());
        self.jobs.lock().unwrap().retain(|job| job.id != *job_id);
        Ok(())
    }

    async fn list_locations(&self) -> Result<Vec<String>, ApiError> {
        Ok(vec!["Remote".to_string()])
    }

    async fn list_tags(&self) -> Result<Vec<String>, ApiError> {
        Ok(Vec::new())
    }

    async fn scrape(&self) -> Result<ScrapeReply, ApiError> {
        Ok(ScrapeReply {
            message: Some("done".to_string()),
        })
    }
}

const WAIT: Duration = Duration::from_secs(5);

#[test]
fn delete_all_issues_one_call_per_job_and_refetch_is_empty() {
    jobboard_logging::initialize_for_tests();
    let backend = Arc::new(FakeBackend::with_jobs(&[1, 2, 3]));
    let (engine, events) = EngineHandle::with_channel(backend.clone()).expect("engine");

    let job_ids: Vec<JobId> = [1u64, 2, 3].into_iter().map(JobId::from).collect();
    assert!(engine.submit(ApiCommand::DeleteAll {
        job_ids: job_ids.clone(),
    }));
    match events.recv_timeout(WAIT).expect("delete-all event") {
        ApiEvent::AllDeleted(report) => {
            assert_eq!(report.deleted.len(), 3);
            assert!(report.failed.is_empty());
        }
        other => panic!("unexpected event {other:?}"),
    }

    let mut calls = backend.delete_calls.lock().unwrap().clone();
    calls.sort_unstable();
    assert_eq!(calls, job_ids);

    engine.submit(ApiCommand::ListJobs);
    match events.recv_timeout(WAIT).expect("list event") {
        ApiEvent::JobsListed(Ok(jobs)) => assert!(jobs.is_empty()),
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn failures_come_back_as_events() {
    let backend = Arc::new(FakeBackend::with_jobs(&[1]));
    let (engine, events) = EngineHandle::with_channel(backend).expect("engine");

    engine.submit(ApiCommand::GetJob {
        job_id: JobId::from("99"),
    });
    match events.recv_timeout(WAIT).expect("fetch event") {
        ApiEvent::JobFetched { job_id, result } => {
            assert_eq!(job_id.as_str(), "99");
            assert_eq!(result.unwrap_err().kind, FailureKind::HttpStatus(404));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn scrape_event_carries_reply() {
    let backend = Arc::new(FakeBackend::default());
    let (engine, events) = EngineHandle::with_channel(backend).expect("engine");

    engine.submit(ApiCommand::Scrape);
    assert_eq!(
        events.recv_timeout(WAIT).expect("scrape event"),
        ApiEvent::Scraped(Ok(ScrapeReply {
            message: Some("done".to_string())
        }))
    );
}
