use serde::{Deserialize, Serialize};

use super::names::full_name;

/// Record as returned by the DNS service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VendorRecord {
    pub id: String,
    pub name: String,
    pub r#type: String,
    pub data: String,
    #[serde(default)]
    pub ttl: Option<u32>,
    #[serde(default)]
    pub priority: Option<u16>,
}

/// Body sent on record create and update. Unset fields are sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordPayload {
    pub name: Option<String>,
    pub r#type: Option<String>,
    pub data: Option<String>,
    pub priority: Option<u16>,
    pub ttl: Option<u32>,
}

/// Provider-independent record shape handed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub r#type: String,
    pub name: String,
    pub content: String,
    pub ttl: Option<u32>,
    pub priority: Option<u16>,
}

impl Record {
    pub fn from_vendor(record: VendorRecord, domain: &str) -> Self {
        Self {
            name: full_name(&record.name, domain),
            id: record.id,
            r#type: record.r#type,
            content: record.data,
            ttl: record.ttl,
            priority: record.priority,
        }
    }
}

// Identity service

#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    pub auth: AuthBody<'a>,
}

#[derive(Debug, Serialize)]
pub struct AuthBody<'a> {
    #[serde(rename = "passwordCredentials")]
    pub password_credentials: PasswordCredentials<'a>,
    #[serde(rename = "tenantId")]
    pub tenant_id: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct PasswordCredentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access: Access,
}

#[derive(Debug, Deserialize)]
pub struct Access {
    pub token: Token,
}

#[derive(Debug, Deserialize)]
pub struct Token {
    pub id: String,
}

// DNS service

#[derive(Debug, Deserialize)]
pub struct DomainList {
    pub domains: Vec<Domain>,
}

#[derive(Debug, Deserialize)]
pub struct Domain {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecordList {
    pub records: Vec<VendorRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn vendor_record_tolerates_null_ttl_and_missing_priority() {
        let record: VendorRecord = serde_json::from_value(json!({
            "id": "r1",
            "name": "www.example.com.",
            "type": "A",
            "data": "192.0.2.1",
            "ttl": null
        }))
        .unwrap();
        assert_eq!(record.ttl, None);
        assert_eq!(record.priority, None);
    }

    #[test]
    fn record_from_vendor_strips_trailing_dot() {
        let vendor = VendorRecord {
            id: "r2".into(),
            name: "mail.example.com.".into(),
            r#type: "MX".into(),
            data: "mx.example.com.".into(),
            ttl: Some(3600),
            priority: Some(10),
        };
        let record = Record::from_vendor(vendor, "example.com");
        assert_eq!(record.name, "mail.example.com");
        assert_eq!(record.content, "mx.example.com.");
        assert_eq!(record.priority, Some(10));
    }

    #[test]
    fn token_request_uses_identity_field_names() {
        let body = TokenRequest {
            auth: AuthBody {
                password_credentials: PasswordCredentials {
                    username: "user",
                    password: "secret",
                },
                tenant_id: None,
            },
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "auth": {
                    "passwordCredentials": {"username": "user", "password": "secret"},
                    "tenantId": null
                }
            })
        );
    }
}
