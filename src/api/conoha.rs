use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::client::DnsProvider;
use super::models::*;
use super::names::{fqdn_name, record_data};
use super::session::Session;
use crate::config::Config;
use crate::error::{ProviderError, Result};

const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";
const CONNECT_TIMEOUT_SECS: u64 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Response body, decoded as JSON only when the server declared JSON.
#[derive(Debug)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    fn into_json<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            Self::Json(value) => Ok(serde_json::from_value(value)?),
            Self::Text(text) => Err(ProviderError::Parse(format!(
                "expected a JSON response, got: {}",
                text
            ))),
        }
    }
}

/// ConoHa DNS service provider.
pub struct ConohaProvider {
    client: reqwest::Client,
    config: Config,
    api_endpoint: String,
    identity_endpoint: String,
    session: Session,
}

impl ConohaProvider {
    pub fn new(config: Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_endpoint: config.api_endpoint(),
            identity_endpoint: config.identity_endpoint(),
            config,
            session: Session::default(),
        })
    }

    pub fn domain(&self) -> &str {
        &self.config.domain
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn build_headers(&self, token: Option<&str>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            let value = HeaderValue::from_str(token)
                .map_err(|e| ProviderError::Auth(format!("Invalid auth token: {}", e)))?;
            headers.insert(AUTH_TOKEN_HEADER, value);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Sends one request. Any non-2xx status becomes `ProviderError::Http`.
    async fn send_request(
        &self,
        method: Method,
        url: &str,
        token: Option<&str>,
        body: Option<Value>,
        query: &[(&str, &str)],
    ) -> Result<ResponseBody> {
        debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, url)
            .headers(self.build_headers(token)?);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.body(serde_json::to_string(&body)?);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response Status: {}", status);

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Http { status, body: text });
        }

        if is_json && !text.trim().is_empty() {
            Ok(ResponseBody::Json(serde_json::from_str(&text)?))
        } else {
            Ok(ResponseBody::Text(text))
        }
    }

    /// Exchanges username and password for a token at the identity service.
    async fn request_token(&self) -> Result<String> {
        let (Some(username), Some(password)) = (
            given(self.config.auth_username.as_deref()),
            given(self.config.auth_password.as_deref()),
        ) else {
            return Err(ProviderError::Auth(
                "auth_username and auth_password or auth_token must be specified.".into(),
            ));
        };

        let body = TokenRequest {
            auth: AuthBody {
                password_credentials: PasswordCredentials { username, password },
                tenant_id: given(self.config.auth_tenant_id.as_deref()),
            },
        };
        let url = format!("{}/tokens", self.identity_endpoint);

        let response: TokenResponse = self
            .send_request(Method::POST, &url, None, Some(serde_json::to_value(&body)?), &[])
            .await?
            .into_json()?;

        info!("Obtained token for {}", username);
        Ok(response.access.token.id)
    }

    async fn resolve_domain_id(&self, token: &str) -> Result<String> {
        let domain = &self.config.domain;
        let name = fqdn_name(domain, domain);
        let url = format!("{}/domains", self.api_endpoint);

        let list: DomainList = self
            .send_request(Method::GET, &url, Some(token), None, &[("name", &name)])
            .await?
            .into_json()?;

        match list.domains.as_slice() {
            [] => Err(ProviderError::DomainNotFound {
                domain: domain.clone(),
            }),
            [found] => {
                debug!(
                    "Domain lookup returned {}",
                    found.name.as_deref().unwrap_or(&name)
                );
                Ok(found.id.clone())
            }
            many => Err(ProviderError::AmbiguousDomain {
                domain: domain.clone(),
                count: many.len(),
            }),
        }
    }

    /// Builds the create/update body from the arguments and configured options.
    pub fn record_payload(
        &self,
        record_type: Option<&str>,
        name: Option<&str>,
        content: Option<&str>,
    ) -> RecordPayload {
        RecordPayload {
            name: given(name).map(|name| fqdn_name(name, &self.config.domain)),
            r#type: record_type.map(str::to_string),
            data: content.map(|content| match record_type {
                Some(record_type) => record_data(record_type, content),
                None => content.to_string(),
            }),
            priority: self.config.priority,
            ttl: self.config.ttl,
        }
    }

    fn records_url(&self, domain_id: &str) -> String {
        format!("{}/domains/{}/records", self.api_endpoint, domain_id)
    }
}

#[async_trait]
impl DnsProvider for ConohaProvider {
    async fn authenticate(&mut self) -> Result<()> {
        let token = match given(self.config.auth_token.as_deref()) {
            Some(token) => token.to_string(),
            None => self.request_token().await?,
        };

        let domain_id = self.resolve_domain_id(&token).await?;
        info!("Resolved {} to domain id {}", self.config.domain, domain_id);

        self.session = Session::Authenticated { token, domain_id };
        Ok(())
    }

    async fn create_record(&self, record_type: &str, name: &str, content: &str) -> Result<bool> {
        if record_type.is_empty() {
            return Err(ProviderError::Validation("type must be specified.".into()));
        }
        if name.is_empty() {
            return Err(ProviderError::Validation("name must be specified.".into()));
        }
        if content.is_empty() {
            return Err(ProviderError::Validation("content must be specified.".into()));
        }
        if self.config.priority.is_none() && matches!(record_type, "MX" | "SRV") {
            return Err(ProviderError::Validation("priority must be specified.".into()));
        }

        let (token, domain_id) = self.session.credentials()?;
        let payload = self.record_payload(Some(record_type), Some(name), Some(content));
        let body = serde_json::to_value(&payload)?;

        match self
            .send_request(Method::POST, &self.records_url(domain_id), Some(token), Some(body), &[])
            .await
        {
            Ok(_) => info!("Created {} record {}", record_type, name),
            // 409 Duplicate Record
            Err(err) if err.status() == Some(StatusCode::CONFLICT) => {
                debug!("{} record {} already exists", record_type, name)
            }
            Err(err) => return Err(err),
        }

        Ok(true)
    }

    async fn list_records(
        &self,
        record_type: Option<&str>,
        name: Option<&str>,
        content: Option<&str>,
    ) -> Result<Vec<Record>> {
        let (token, domain_id) = self.session.credentials()?;

        let list: RecordList = self
            .send_request(Method::GET, &self.records_url(domain_id), Some(token), None, &[])
            .await?
            .into_json()?;

        let record_type = given(record_type);
        let name = given(name).map(|name| fqdn_name(name, &self.config.domain));
        let content = given(content);

        let records: Vec<Record> = list
            .records
            .into_iter()
            .filter(|record| record_type.map_or(true, |t| record.r#type == t))
            .filter(|record| {
                name.as_deref()
                    .map_or(true, |n| record.name.trim_end_matches('.') == n.trim_end_matches('.'))
            })
            .filter(|record| {
                content.map_or(true, |c| {
                    record.data == c || record.data == record_data(&record.r#type, c)
                })
            })
            .map(|record| Record::from_vendor(record, &self.config.domain))
            .collect();

        debug!("list_records: {:?}", records);
        Ok(records)
    }

    async fn update_record(
        &self,
        identifier: Option<&str>,
        record_type: Option<&str>,
        name: Option<&str>,
        content: Option<&str>,
    ) -> Result<bool> {
        let (token, domain_id) = self.session.credentials()?;

        let identifier = match given(identifier) {
            Some(identifier) => identifier.to_string(),
            None => {
                let records = self.list_records(record_type, name, None).await?;
                match records.as_slice() {
                    [record] => record.id.clone(),
                    _ => {
                        return Err(ProviderError::AmbiguousOrMissingRecord {
                            count: records.len(),
                        })
                    }
                }
            }
        };

        let payload = self.record_payload(record_type, name, content);
        let url = format!("{}/{}", self.records_url(domain_id), identifier);
        self.send_request(Method::PUT, &url, Some(token), Some(serde_json::to_value(&payload)?), &[])
            .await?;

        info!("Updated record {}", identifier);
        Ok(true)
    }

    async fn delete_record(
        &self,
        identifier: Option<&str>,
        record_type: Option<&str>,
        name: Option<&str>,
        content: Option<&str>,
    ) -> Result<bool> {
        let (token, domain_id) = self.session.credentials()?;

        let mut records = self.list_records(record_type, name, content).await?;
        if let Some(identifier) = given(identifier) {
            records.retain(|record| record.id == identifier);
        }

        for record in &records {
            let url = format!("{}/{}", self.records_url(domain_id), record.id);
            self.send_request(Method::DELETE, &url, Some(token), None, &[])
                .await?;
            info!("Deleted {} record {}", record.r#type, record.name);
        }

        Ok(true)
    }
}

/// Treats empty strings like absent options.
fn given(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
