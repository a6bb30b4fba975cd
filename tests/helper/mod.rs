//! Test utilities shared by the end-to-end tests

#![allow(dead_code)]

pub mod fakes;

pub use fakes::{FakeRegistry, FakeRepository};

use ui5_eocp_check::config::{ActionConfig, ActionInputs};

/// Build a validated config for `acme/shop-ui`
pub fn test_config(target: &str, fail_on_urgent: bool) -> ActionConfig {
    ActionConfig::from_inputs(test_inputs(target, fail_on_urgent)).unwrap()
}

pub fn test_inputs(target: &str, fail_on_urgent: bool) -> ActionInputs {
    ActionInputs {
        owner: Some("acme".to_string()),
        repo: Some("shop-ui".to_string()),
        target: Some(target.to_string()),
        token: Some("test-token".to_string()),
        path_to_index: Some("webapp/index.html".to_string()),
        fail_on_urgent: Some(fail_on_urgent.to_string()),
        ..Default::default()
    }
}

/// An index.html bootstrapping the given SAPUI5 version from the CDN
pub fn index_html(version: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <script id="sap-ui-bootstrap"
        src="https://sapui5.hana.ondemand.com/{}/resources/sap-ui-core.js"
        data-sap-ui-theme="sap_horizon">
    </script>
</head>
<body class="sapUiBody" id="content"></body>
</html>
"#,
        version
    )
}

/// Start a TCP listener that accepts connections but never answers them
///
/// Returns its base URL. Requests against it only end through a client timeout.
pub fn silent_server_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    std::thread::spawn(move || {
        let mut held = Vec::new();
        for stream in listener.incoming().flatten() {
            held.push(stream);
        }
    });
    url
}
