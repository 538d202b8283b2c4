//! Mock Cloud Controller for testing.
//!
//! Provides [`MockCloudController`], an HTTP server on a random local port
//! that answers `/v2/info` and the password grant out of the box and serves
//! canned JSON for any other route registered by the test.
//!
//! # Example
//!
//! ```ignore
//! use cfd_cloudfoundry::mock::{MockCloudController, page, resource};
//!
//! let mock = MockCloudController::start();
//! mock.on_get("/v2/stacks", &page(&[resource("st-1", json!({"name": "cflinuxfs3"}))], None));
//!
//! let config = CloudFoundryConfig::new(&mock.url(), "user", "pass");
//! ```

use std::collections::HashMap;
use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use serde_json::json;
use tiny_http::{Header, Response, Server};

type Routes = Arc<Mutex<HashMap<(String, String), (u16, String)>>>;

/// A request received by the mock.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (`GET`, `POST`).
    pub method: String,
    /// Path and query as sent by the client.
    pub url: String,
    /// Header name/value pairs.
    pub headers: Vec<(String, String)>,
    /// Request body.
    pub body: String,
}

impl RecordedRequest {
    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// In-process Cloud Controller and UAA stand-in.
///
/// Routes are matched on the exact path and query first, then on the path
/// alone. Unknown routes answer `404`. The server stops when dropped.
pub struct MockCloudController {
    server: Arc<Server>,
    url: String,
    routes: Routes,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: Option<JoinHandle<()>>,
}

impl MockCloudController {
    /// Access token issued by the default `/oauth/token` route.
    pub const ACCESS_TOKEN: &'static str = "eyhuetzligruetzli";

    /// API version reported by the default `/v2/info` route.
    pub const API_VERSION: &'static str = "2.133.0";

    /// Start the server with default info and token routes.
    ///
    /// The info route advertises the mock itself as authorization endpoint.
    pub fn start() -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").expect("bind mock Cloud Controller"));
        let addr = server
            .server_addr()
            .to_ip()
            .expect("mock Cloud Controller listens on TCP");
        let url = format!("http://{addr}");

        let routes: Routes = Arc::default();
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::default();

        let handle = {
            let server = Arc::clone(&server);
            let routes = Arc::clone(&routes);
            let requests = Arc::clone(&requests);
            std::thread::spawn(move || serve(&server, &routes, &requests))
        };

        let mock = Self {
            server,
            url,
            routes,
            requests,
            handle: Some(handle),
        };
        mock.on_get("/v2/info", &mock.info_json());
        mock.respond("POST", "/oauth/token", 200, &token_json());
        mock
    }

    /// Base URL of the server (no trailing slash).
    pub fn url(&self) -> String {
        self.url.clone()
    }

    /// Serve `body` with status 200 for `GET url`.
    pub fn on_get(&self, url: &str, body: &str) {
        self.respond("GET", url, 200, body);
    }

    /// Serve `body` with `status` for `method url`, replacing any previous route.
    pub fn respond(&self, method: &str, url: &str, status: u16, body: &str) {
        self.routes
            .lock()
            .expect("routes lock")
            .insert((method.to_owned(), url.to_owned()), (status, body.to_owned()));
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    fn info_json(&self) -> String {
        json!({
            "name": "mock",
            "build": "",
            "support": "",
            "version": 0,
            "description": "Mock Cloud Controller",
            "authorization_endpoint": self.url,
            "token_endpoint": self.url,
            "min_cli_version": "6.22.0",
            "min_recommended_cli_version": "latest",
            "app_ssh_endpoint": "ssh.mock:2222",
            "app_ssh_host_key_fingerprint": "",
            "app_ssh_oauth_client": "ssh-proxy",
            "doppler_logging_endpoint": "wss://doppler.mock:443",
            "api_version": Self::API_VERSION,
            "osbapi_version": "2.14",
            "routing_endpoint": ""
        })
        .to_string()
    }
}

impl Drop for MockCloudController {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn token_json() -> String {
    json!({
        "access_token": MockCloudController::ACCESS_TOKEN,
        "token_type": "bearer",
        "id_token": "eyhuetzligruetzli.eyhuetzligruetzli.eyhuetzligruetzliid",
        "refresh_token": "eyhuetzligruetzli.eyhuetzligruetzli.eyhuetzligruetzlirefresh",
        "expires_in": 300,
        "scope": "openid uaa.user cloud_controller.read password.write cloud_controller.write",
        "jti": "1234567890"
    })
    .to_string()
}

fn serve(server: &Server, routes: &Routes, requests: &Mutex<Vec<RecordedRequest>>) {
    for mut request in server.incoming_requests() {
        let method = request.method().as_str().to_owned();
        let url = request.url().to_owned();
        let headers = request
            .headers()
            .iter()
            .map(|h| (h.field.as_str().as_str().to_owned(), h.value.as_str().to_owned()))
            .collect();
        let mut body = String::new();
        let _ = request.as_reader().read_to_string(&mut body);

        requests.lock().expect("requests lock").push(RecordedRequest {
            method: method.clone(),
            url: url.clone(),
            headers,
            body,
        });

        let (status, body) = {
            let routes = routes.lock().expect("routes lock");
            let path = url.split('?').next().unwrap_or_default().to_owned();
            routes
                .get(&(method.clone(), url))
                .or_else(|| routes.get(&(method, path)))
                .cloned()
                .unwrap_or_else(|| {
                    (
                        404,
                        r#"{"errors":[{"code":10010,"title":"CF-ResourceNotFound","detail":"Not found"}]}"#
                            .to_owned(),
                    )
                })
        };

        let content_type = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
            .expect("static header");
        let response = Response::from_string(body)
            .with_status_code(status)
            .with_header(content_type);
        let _ = request.respond(response);
    }
}

/// A v2 resource envelope around `entity`.
pub fn resource(guid: &str, entity: serde_json::Value) -> serde_json::Value {
    json!({
        "metadata": {
            "guid": guid,
            "url": format!("/v2/resources/{guid}"),
            "created_at": "2019-03-12T09:15:00Z",
            "updated_at": null
        },
        "entity": entity
    })
}

/// A v2 collection page holding `resources`.
pub fn page(resources: &[serde_json::Value], next_url: Option<&str>) -> String {
    json!({
        "total_results": resources.len(),
        "total_pages": 1,
        "prev_url": null,
        "next_url": next_url,
        "resources": resources
    })
    .to_string()
}
