use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    blocking,
    client::Client,
    resource::{ResourceRequest, STATUS_RUNNING},
    ApiError, CheckError,
};

pub const ROOT_STATUS_OK: &str = "OK";

#[derive(Debug, Clone, Copy)]
pub struct CreationCase {
    pub label: &'static str,
    pub name: Option<&'static str>,
    pub kind: &'static str,
    pub expected: StatusCode,
}

impl CreationCase {
    pub fn request(&self) -> ResourceRequest {
        match self.name {
            Some(name) => ResourceRequest::new(name, self.kind),
            None => ResourceRequest::unnamed(self.kind),
        }
    }
}

pub const CREATION_CASES: [CreationCase; 3] = [
    CreationCase {
        label: "valid input",
        name: Some("test-instance"),
        kind: "vm",
        expected: StatusCode::CREATED,
    },
    CreationCase {
        label: "empty name",
        name: Some(""),
        kind: "vm",
        expected: StatusCode::BAD_REQUEST,
    },
    CreationCase {
        label: "missing name",
        name: None,
        kind: "vm",
        expected: StatusCode::BAD_REQUEST,
    },
];

pub fn expect_status(expected: StatusCode, actual: StatusCode) -> Result<(), CheckError> {
    if expected != actual {
        return Err(CheckError::UnexpectedStatus { expected, actual });
    }

    Ok(())
}

pub fn field_str<'a>(body: &'a Value, field: &str) -> Result<&'a str, CheckError> {
    let Some(value) = body.get(field) else {
        return Err(CheckError::MissingField(field.to_string()));
    };

    value.as_str().ok_or_else(|| CheckError::FieldMismatch {
        field: field.to_string(),
        expected: "a string".to_string(),
        actual: value.to_string(),
    })
}

pub fn expect_field(body: &Value, field: &str, expected: &str) -> Result<(), CheckError> {
    let actual = field_str(body, field)?;

    if actual != expected {
        return Err(CheckError::FieldMismatch {
            field: field.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }

    Ok(())
}

pub async fn check_response_shape(client: &Client) -> Result<(), CheckError> {
    let resp = client.root().await?;
    expect_status(StatusCode::OK, resp.status())?;

    let body: Value = resp.json().await?;
    expect_field(&body, "status", ROOT_STATUS_OK)
}

pub fn check_creation(client: &blocking::Client, case: &CreationCase) -> Result<(), CheckError> {
    let resp = client.create(&case.request())?;
    let actual = resp.status();
    let body: Option<Value> = resp.json().ok();

    if actual.is_client_error() {
        let err = body.and_then(|body| serde_json::from_value::<ApiError>(body).ok());
        if let Some(err) = err {
            debug!(case = case.label, %err, "creation rejected");
        }
    } else if let Some(id) = body.as_ref().and_then(|body| field_str(body, "id").ok()) {
        discard(client, id);
    }

    expect_status(case.expected, actual)?;
    info!(case = case.label, %actual, "creation case passed");

    Ok(())
}

// Resources made by creation cases are not needed afterwards.
fn discard(client: &blocking::Client, id: &str) {
    match client.delete(id) {
        Ok(resp) if resp.status().is_success() => debug!(%id, "discarded created resource"),
        Ok(resp) => warn!(%id, status = %resp.status(), "discard was rejected"),
        Err(err) => warn!(%id, %err, "failed to discard created resource"),
    }
}

/// GETs a resource and requires it to report `status == "running"`.
pub fn check_resource_running(client: &blocking::Client, id: &str) -> Result<(), CheckError> {
    let resp = client.get(id)?;
    expect_status(StatusCode::OK, resp.status())?;

    let body: Value = resp.json()?;
    expect_field(&body, "status", STATUS_RUNNING)
}
