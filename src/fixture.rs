use reqwest::StatusCode;
use serde_json::Value;
use tracing::{info, warn};

use crate::{blocking::Client, check, resource::ResourceRequest, CheckError};

pub fn fixture_request() -> ResourceRequest {
    ResourceRequest::new("test-instance", "vm").in_region("us-east-1")
}

/// Deleted exactly once when the guard goes away, even if a check panicked.
#[derive(Debug)]
pub struct ResourceGuard<'c> {
    client: &'c Client,
    id: String,
    released: bool,
}

impl<'c> ResourceGuard<'c> {
    pub fn acquire(client: &'c Client) -> Result<Self, CheckError> {
        Self::acquire_with(client, &fixture_request())
    }

    pub fn acquire_with(client: &'c Client, req: &ResourceRequest) -> Result<Self, CheckError> {
        let resp = client.create(req)?;
        check::expect_status(StatusCode::CREATED, resp.status())?;

        let body: Value = resp.json()?;
        let id = check::field_str(&body, "id")?.to_string();
        info!(%id, "acquired resource");

        Ok(ResourceGuard {
            client,
            id,
            released: false,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn release(mut self) -> Result<StatusCode, CheckError> {
        self.released = true;

        let status = self.client.delete(&self.id)?.status();
        log_release(&self.id, status);

        Ok(status)
    }
}

impl Drop for ResourceGuard<'_> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        match self.client.delete(&self.id) {
            Ok(resp) => log_release(&self.id, resp.status()),
            Err(err) => warn!(id = %self.id, %err, "failed to release resource"),
        }
    }
}

fn log_release(id: &str, status: StatusCode) {
    if status.is_success() {
        info!(%id, %status, "released resource");
    } else {
        warn!(%id, %status, "release was rejected");
    }
}

// Teardown problems are logged, never returned in place of the checks' result.
pub fn with_resource<T>(
    client: &Client,
    checks: impl FnOnce(&str) -> T,
) -> Result<T, CheckError> {
    let guard = ResourceGuard::acquire(client)?;
    let out = checks(guard.id());

    let id = guard.id().to_string();
    if let Err(err) = guard.release() {
        warn!(%id, %err, "failed to release resource");
    }

    Ok(out)
}
