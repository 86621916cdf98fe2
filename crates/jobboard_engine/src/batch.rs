use futures_util::future::join_all;
use jobboard_logging::{board_info, board_warn};

use crate::{DeleteAllReport, JobId, JobsApi};

/// Issues one delete per id concurrently and waits for every one to settle.
///
/// Failures do not cancel the remaining deletes; they are logged and reported.
pub async fn delete_all(api: &dyn JobsApi, job_ids: &[JobId]) -> DeleteAllReport {
    let results = join_all(job_ids.iter().map(move |job_id| async move {
        (job_id.clone(), api.delete_job(job_id).await)
    }))
    .await;

    let mut report = DeleteAllReport::default();
    for (job_id, result) in results {
        match result {
            Ok(()) => report.deleted.push(job_id),
            Err(err) => {
                board_warn!("Delete of job {} failed: {}", job_id, err);
                report.failed.push((job_id, err));
            }
        }
    }
    board_info!(
        "Delete-all settled: deleted={} failed={}",
        report.deleted.len(),
        report.failed.len()
    );
    report
}
