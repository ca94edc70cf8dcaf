use std::collections::BTreeMap;

use lambda_http::http::StatusCode;
use serde::{Deserialize, Serialize};

pub const CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// API Gateway proxy style response returned to the Lambda runtime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl Envelope {
    pub fn success(body: String) -> Self {
        Self::new(
            StatusCode::OK,
            &[("X-Toukon-Power", "MAX"), ("X-Python-Engine", "True")],
            body,
        )
    }

    pub fn failure(body: String) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            &[("X-Toukon-Error", "True")],
            body,
        )
    }

    fn new(status: StatusCode, markers: &[(&str, &str)], body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), CONTENT_TYPE.to_string());
        for (name, value) in markers {
            headers.insert((*name).to_string(), (*value).to_string());
        }

        Self {
            status_code: status.as_u16(),
            headers,
            body,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
