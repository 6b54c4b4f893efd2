//! End-to-end transport tests against a stub HTTP server.

use serde::Deserialize;
use ucloud_api::{
    impl_response, Client, ClientConfig, EncodeError, Error, ParameterSet, Request,
    ResponseHeader,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PUBLIC_KEY: &str = "ucloudsomeone@example.com1296235120854146120";
const PRIVATE_KEY: &str = "46f09bb9fab4f12dfc160dae12273d5332b5debe";

fn client_for(server: &MockServer) -> Client {
    Client::new(ClientConfig::new(PUBLIC_KEY, PRIVATE_KEY, "cn-bj2").endpoint(server.uri()))
        .unwrap()
}

/// The documented signature example, sent through the whole client: identity
/// parameters injected, parameters sorted, signature appended. The stub only
/// answers when the `Signature` query parameter is byte-for-byte the
/// published digest.
#[tokio::test]
async fn test_sample_signature_reaches_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("PublicKey", PUBLIC_KEY))
        .and(query_param("Region", "cn-bj2"))
        .and(query_param(
            "Signature",
            "4f9ef5df2abab2c6fccd1e9515cb7e2df8c6bb65",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"RetCode":0}"#))
        .expect(1)
        .mount(&server)
        .await;

    let mut params = ParameterSet::new();
    params.set("Action", "CreateUHostInstance");
    params.set("Zone", "cn-bj2-04");
    params.set("ImageId", "f43736e1-65a5-4bea-ad2e-8a46e18883c2");
    params.set("CPU", "2");
    params.set("Memory", "2048");
    params.set("DiskSpace", "10");
    params.set("LoginMode", "Password");
    params.set("Password", "VUNsb3VkLmNu");
    params.set("Name", "Host01");
    params.set("ChargeType", "Month");
    params.set("Quantity", "1");

    let resp: ResponseHeader = client_for(&server).call_params(params).await.unwrap();
    assert_eq!(resp.ret_code, 0);
}

#[tokio::test]
async fn test_project_id_is_injected_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("ProjectId", "org-1234"))
        .and(query_param("Region", "cn-bj2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"RetCode":0}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(
        ClientConfig::new(PUBLIC_KEY, PRIVATE_KEY, "cn-bj2")
            .project_id("org-1234")
            .endpoint(server.uri()),
    )
    .unwrap();

    let mut params = ParameterSet::new();
    params.set("Action", "DescribeUHostInstance");
    let _: ResponseHeader = client.call_params(params).await.unwrap();
}

#[tokio::test]
async fn test_non_zero_ret_code_is_a_remote_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"RetCode":171,"Message":"image not found"}"#),
        )
        .mount(&server)
        .await;

    let mut params = ParameterSet::new();
    params.set("Action", "CreateUHostInstance");

    let err = client_for(&server)
        .call_params::<ResponseHeader>(params)
        .await
        .unwrap_err();
    match err {
        Error::BadRetCode {
            action,
            ret_code,
            message,
        } => {
            // The body carries no Action, so it is recovered from the
            // outgoing parameters.
            assert_eq!(action, "CreateUHostInstance");
            assert_eq!(ret_code, 171);
            assert_eq!(message, "image not found");
        }
        other => panic!("expected BadRetCode, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .call_params::<ResponseHeader>(ParameterSet::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

struct StopUHostInstanceRequest {
    uhost_id: String,
    zone: String,
}

impl Request for StopUHostInstanceRequest {
    fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
        params.set_str("UHostId", &self.uhost_id);
        params.set_str("Zone", &self.zone);
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
struct StopUHostInstanceResponse {
    #[serde(flatten)]
    header: ResponseHeader,
}

impl_response!(StopUHostInstanceResponse);

#[tokio::test]
async fn test_typed_request_carries_its_derived_action() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("Action", "StopUHostInstance"))
        .and(query_param("UHostId", "uhost-abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"RetCode":0}"#))
        .expect(1)
        .mount(&server)
        .await;

    let request = StopUHostInstanceRequest {
        uhost_id: "uhost-abc123".into(),
        zone: String::new(), // empty, must not be transmitted
    };
    let _: StopUHostInstanceResponse = client_for(&server).call(&request).await.unwrap();

    // The empty Zone never made it onto the wire.
    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(!received[0].url.query().unwrap_or("").contains("Zone"));
}
