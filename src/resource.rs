use serde::{Deserialize, Serialize};

pub const STATUS_RUNNING: &str = "running";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl ResourceRequest {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        ResourceRequest {
            name: Some(name.into()),
            kind: kind.into(),
            region: None,
        }
    }

    pub fn unnamed(kind: impl Into<String>) -> Self {
        ResourceRequest {
            name: None,
            kind: kind.into(),
            region: None,
        }
    }

    pub fn in_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub id: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl ResourceRecord {
    pub fn is_running(&self) -> bool {
        self.status == STATUS_RUNNING
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unnamed_request_omits_name() {
        let body = serde_json::to_value(ResourceRequest::unnamed("vm")).unwrap();
        assert_eq!(body, json!({ "type": "vm" }));
    }

    #[test]
    fn empty_name_is_kept() {
        let body = serde_json::to_value(ResourceRequest::new("", "vm")).unwrap();
        assert_eq!(body, json!({ "name": "", "type": "vm" }));
    }

    #[test]
    fn region_is_serialized_when_set() {
        let req = ResourceRequest::new("test-instance", "vm").in_region("us-east-1");
        let body = serde_json::to_value(req).unwrap();
        assert_eq!(
            body,
            json!({ "name": "test-instance", "type": "vm", "region": "us-east-1" })
        );
    }

    #[test]
    fn record_decodes_with_only_id_and_status() {
        let record: ResourceRecord =
            serde_json::from_value(json!({ "id": "res-1", "status": "running" })).unwrap();
        assert!(record.is_running());
        assert_eq!(record.kind, None);
    }
}
