//! Instance lifecycle flows against a stub HTTP server.
//!
//! These run on the real clock, so every wait uses millisecond timings.

use std::time::Duration;
use ucloud_api::{Client, ClientConfig, Error, WaitSpec};
use ucloud_uhost::{
    CreateUHostInstanceRequest, ResizeStep, ResizeUHostInstanceRequest, UHostClient, UHostError,
};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn uhost_client(server: &MockServer) -> UHostClient {
    let client = Client::new(
        ClientConfig::new("pub-key", "priv-key", "cn-bj2").endpoint(server.uri()),
    )
    .unwrap();
    UHostClient::new(client)
}

fn quick_wait(pending: &[&str], target: &[&str]) -> WaitSpec {
    WaitSpec::new(pending, target)
        .timeout(Duration::from_secs(5))
        .delay(Duration::from_millis(10))
        .min_interval(Duration::from_millis(10))
}

fn describe_body(uhost_id: &str, state: &str) -> String {
    format!(
        r#"{{"RetCode":0,"TotalCount":1,"UHostSet":[{{"UHostId":"{uhost_id}","State":"{state}"}}]}}"#
    )
}

/// Mount a one-shot describe response. Earlier mounts win while they still
/// have responses left, so calling this repeatedly builds a state sequence.
async fn mount_describe_once(server: &MockServer, body: String) {
    Mock::given(method("GET"))
        .and(query_param("Action", "DescribeUHostInstance"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .up_to_n_times(1)
        .mount(server)
        .await;
}

async fn mount_describe(server: &MockServer, body: String) {
    Mock::given(method("GET"))
        .and(query_param("Action", "DescribeUHostInstance"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

async fn mount_ok(server: &MockServer, action: &str) {
    Mock::given(method("GET"))
        .and(query_param("Action", action))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"RetCode":0}"#))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_create_and_wait_polls_until_running() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("Action", "CreateUHostInstance"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"RetCode":0,"UHostIds":["uhost-new1"]}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    // The instance comes up over three describe calls.
    mount_describe_once(&server, describe_body("uhost-new1", "Initializing")).await;
    mount_describe_once(&server, describe_body("uhost-new1", "Starting")).await;
    mount_describe(&server, describe_body("uhost-new1", "Running")).await;

    let request = CreateUHostInstanceRequest {
        zone: "cn-bj2-04".into(),
        image_id: "img-1".into(),
        cpu: 1,
        memory: 1024,
        ..Default::default()
    };
    let spec = quick_wait(&["Initializing", "Starting"], &["Running"]);

    let instance = uhost_client(&server)
        .create_and_wait(&request, &spec)
        .await
        .unwrap();
    assert_eq!(instance.uhost_id, "uhost-new1");
    assert_eq!(instance.state, "Running");
}

#[tokio::test]
async fn test_resize_runs_the_full_step_sequence() {
    let server = MockServer::start().await;

    mount_ok(&server, "StopUHostInstance").await;
    mount_ok(&server, "ResizeUHostInstance").await;
    mount_ok(&server, "StartUHostInstance").await;

    // First wait sees the instance stopped, second sees it running again.
    mount_describe_once(&server, describe_body("uhost-r1", "Stopped")).await;
    mount_describe(&server, describe_body("uhost-r1", "Running")).await;

    let request = ResizeUHostInstanceRequest {
        uhost_id: "uhost-r1".into(),
        zone: "cn-bj2-04".into(),
        cpu: 4,
        memory: 4096,
        ..Default::default()
    };
    let stop_spec = quick_wait(&["Running", "Stopping"], &["Stopped"]);
    let start_spec = quick_wait(&["Stopped", "Starting"], &["Running"]);

    let instance = uhost_client(&server)
        .resize(&request, &stop_spec, &start_spec)
        .await
        .unwrap();
    assert_eq!(instance.state, "Running");

    // The transport calls happened in lifecycle order.
    let actions: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter_map(|req| {
            req.url.query_pairs().find_map(|(k, v)| {
                (k == "Action" && v != "DescribeUHostInstance").then(|| v.into_owned())
            })
        })
        .collect();
    assert_eq!(
        actions,
        vec![
            "StopUHostInstance",
            "ResizeUHostInstance",
            "StartUHostInstance"
        ]
    );
}

#[tokio::test]
async fn test_resize_reports_the_failing_step() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("Action", "StopUHostInstance"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"RetCode":8039,"Message":"instance busy"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = ResizeUHostInstanceRequest {
        uhost_id: "uhost-r2".into(),
        zone: "cn-bj2-04".into(),
        cpu: 4,
        ..Default::default()
    };
    let spec = quick_wait(&["Running"], &["Stopped"]);

    let err = uhost_client(&server)
        .resize(&request, &spec, &spec)
        .await
        .unwrap_err();
    match err {
        UHostError::ResizeStep {
            step,
            uhost_id,
            source,
        } => {
            assert_eq!(step, ResizeStep::Stop);
            assert_eq!(uhost_id, "uhost-r2");
            assert!(matches!(
                *source,
                UHostError::Api(Error::BadRetCode { ret_code: 8039, .. })
            ));
        }
        other => panic!("expected ResizeStep, got {other:?}"),
    }

    // Nothing past the failed stop was attempted.
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_wait_aborts_when_the_instance_disappears() {
    let server = MockServer::start().await;

    mount_describe(
        &server,
        r#"{"RetCode":0,"TotalCount":0,"UHostSet":[]}"#.to_string(),
    )
    .await;

    let spec = quick_wait(&["Starting"], &["Running"]);
    let err = uhost_client(&server)
        .wait_for_instance_state("uhost-gone", &spec)
        .await
        .unwrap_err();
    assert!(matches!(err, UHostError::NotFound(ref id) if id == "uhost-gone"));

    // The probe error aborted the wait on the first describe.
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_wait_times_out_on_a_never_converging_instance() {
    let server = MockServer::start().await;

    mount_describe(&server, describe_body("uhost-slow", "Starting")).await;

    let spec = quick_wait(&["Starting"], &["Running"]).timeout(Duration::from_millis(200));
    let err = uhost_client(&server)
        .wait_for_instance_state("uhost-slow", &spec)
        .await
        .unwrap_err();
    match err {
        UHostError::WaitTimeout {
            timeout,
            last_state,
        } => {
            assert_eq!(timeout, Duration::from_millis(200));
            assert_eq!(last_state.as_deref(), Some("Starting"));
        }
        other => panic!("expected WaitTimeout, got {other:?}"),
    }
}
