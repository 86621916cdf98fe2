use std::time::Duration;

use jobboard_engine::{
    delete_all, ApiSettings, FailureKind, JobId, JobPayload, JobsApi, ReqwestJobsApi, ScrapeReply,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> ReqwestJobsApi {
    let settings = ApiSettings {
        base_url: server.uri(),
        ..ApiSettings::default()
    };
    ReqwestJobsApi::new(settings).expect("client")
}

fn job_json(id: u64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "company": "Acme",
        "location": "Remote",
        "job_type": "Full-time",
        "tags": ["go", "api"],
    })
}

fn payload() -> JobPayload {
    JobPayload {
        title: "Backend Engineer".to_string(),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        job_type: "Full-time".to_string(),
        tags: "a, b".to_string(),
    }
}

#[tokio::test]
async fn lists_jobs_in_backend_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([job_json(2, "B"), job_json(1, "A")])),
        )
        .mount(&server)
        .await;

    let jobs = api_for(&server).list_jobs().await.expect("list ok");
    let ids: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1"]);
    assert_eq!(jobs[0].tags, vec!["go".to_string(), "api".to_string()]);
}

#[tokio::test]
async fn fetches_single_job_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_json(7, "Designer")))
        .mount(&server)
        .await;

    let job = api_for(&server)
        .get_job(&JobId::from("7"))
        .await
        .expect("get ok");
    assert_eq!(job.id, JobId::from("7"));
    assert_eq!(job.title, "Designer");
}

#[tokio::test]
async fn create_posts_raw_tag_string() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/jobs"))
        .and(body_json(json!({
            "title": "Backend Engineer",
            "company": "Acme",
            "location": "Remote",
            "job_type": "Full-time",
            "tags": "a, b",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 11,
            "title": "Backend Engineer",
            "company": "Acme",
            "location": "Remote",
            "job_type": "Full-time",
            "tags": ["a", "b"],
        })))
        .expect(1)
        .mount(&server)
        .await;

    api_for(&server).create_job(&payload()).await.expect("create ok");
}

#[tokio::test]
async fn create_succeeds_on_any_2xx_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message": "Job created"})))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let api = api_for(&server);
    api.create_job(&payload()).await.expect("message body");
    api.create_job(&payload()).await.expect("empty body");
}

#[tokio::test]
async fn update_puts_to_job_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/jobs/11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 11,
            "title": "Backend Engineer",
            "company": "Acme",
            "location": "Remote",
            "job_type": "Full-time",
            "tags": "a, b",
        })))
        .expect(1)
        .mount(&server)
        .await;

    api_for(&server)
        .update_job(&JobId::from("11"), &payload())
        .await
        .expect("update ok");
}

#[tokio::test]
async fn delete_ignores_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/jobs/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    api_for(&server)
        .delete_job(&JobId::from("3"))
        .await
        .expect("delete ok");
}

#[tokio::test]
async fn lists_locations_and_tags() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/locations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["NYC", "Remote"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["go", "ui"])))
        .mount(&server)
        .await;

    let api = api_for(&server);
    assert_eq!(api.list_locations().await.unwrap(), vec!["NYC", "Remote"]);
    assert_eq!(api.list_tags().await.unwrap(), vec!["go", "ui"]);
}

#[tokio::test]
async fn scrape_returns_message_or_default() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Added 4 jobs"})))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let api = api_for(&server);
    assert_eq!(
        api.scrape().await.unwrap(),
        ScrapeReply {
            message: Some("Added 4 jobs".to_string())
        }
    );
    assert_eq!(api.scrape().await.unwrap(), ScrapeReply::default());
}

#[tokio::test]
async fn http_status_maps_to_failure_kind() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = api_for(&server)
        .get_job(&JobId::from("404"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn malformed_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = api_for(&server).list_jobs().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn request_timeout_is_opt_in() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let settings = ApiSettings {
        base_url: server.uri(),
        request_timeout: Some(Duration::from_millis(50)),
        ..ApiSettings::default()
    };
    let err = ReqwestJobsApi::new(settings)
        .unwrap()
        .list_jobs()
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);

    // Without a timeout the slow response still arrives.
    assert!(api_for(&server).list_jobs().await.unwrap().is_empty());
}

#[tokio::test]
async fn invalid_base_url_is_rejected() {
    let settings = ApiSettings {
        base_url: "not a url".to_string(),
        ..ApiSettings::default()
    };
    let err = ReqwestJobsApi::new(settings).unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[tokio::test]
async fn delete_all_waits_for_every_delete_and_reports_failures() {
    let server = MockServer::start().await;
    for id in [1, 3] {
        Mock::given(method("DELETE"))
            .and(path(format!("/jobs/{id}")))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(20 * id)))
            .expect(1)
            .mount(&server)
            .await;
    }
    Mock::given(method("DELETE"))
        .and(path("/jobs/2"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let ids: Vec<JobId> = [1u64, 2, 3].into_iter().map(JobId::from).collect();
    let report = delete_all(&api, &ids).await;

    assert_eq!(report.deleted, vec![ids[0].clone(), ids[2].clone()]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, ids[1]);
    assert_eq!(report.failed[0].1.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn string_ids_are_listed_and_used_as_path_segments() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "65a1f0c2",
            "title": "Designer",
            "company": "Acme",
            "location": "Remote",
            "job_type": "Contract",
            "tags": [],
        }])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/jobs/65a1f0c2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let jobs = api.list_jobs().await.expect("list ok");
    assert_eq!(jobs[0].id.as_str(), "65a1f0c2");
    api.delete_job(&jobs[0].id).await.expect("delete ok");
}
