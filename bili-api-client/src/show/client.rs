//! Show Ticketing HTTP Client

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::error::ShowError;
use super::types::{BuyerInfo, BuyerListData, Session, ShowResp, Ticket};
use crate::credential::Credential;

const DEFAULT_HOST: &str = "https://show.bilibili.com";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const REFERER: &str = "https://show.bilibili.com";

/// Catalog API version parameter.
const PROJECT_INFO_VERSION: &str = "134";

/// Show ticketing HTTP client.
///
/// Holds only the HTTP connection pool and the API host; credentials are
/// borrowed per call and purchase state lives in [`super::TicketOrder`].
pub struct ShowClient {
    host: String,
    client: Client,
}

impl ShowClient {
    /// Create a client against the production host.
    pub fn new() -> Result<Self, ShowError> {
        Self::with_host(DEFAULT_HOST)
    }

    /// Create a client against a custom host.
    pub fn with_host(host: impl Into<String>) -> Result<Self, ShowError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ShowError::Network(e.to_string()))?;

        Ok(Self {
            host: host.into(),
            client,
        })
    }

    /// Current API host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    pub(crate) fn get(&self, url: &str, credential: Option<&Credential>) -> reqwest::RequestBuilder {
        let mut req = self.client.get(url).header("Referer", REFERER);
        if let Some(cookie) = credential.and_then(Credential::cookie_header) {
            req = req.header("Cookie", cookie);
        }
        req
    }

    pub(crate) fn post(&self, url: &str, credential: &Credential) -> reqwest::RequestBuilder {
        let mut req = self.client.post(url).header("Referer", REFERER);
        if let Some(cookie) = credential.cookie_header() {
            req = req.header("Cookie", cookie);
        }
        req
    }

    /// Fetch the full project (event) payload.
    ///
    /// Returns the raw `data` object; callers pick the fields they need.
    pub async fn get_project_info(&self, project_id: u64) -> Result<Value, ShowError> {
        let url = format!("{}/api/ticket/project/getV2", self.host);
        let id = project_id.to_string();
        debug!(project_id, "fetching project info");

        let resp = self
            .get(&url, None)
            .query(&[("version", PROJECT_INFO_VERSION), ("id", id.as_str())])
            .send()
            .await?;
        let json: ShowResp<Value> = resp.json().await?;
        unwrap_data(json)
    }

    /// List the sessions the catalog exposes for a project.
    ///
    /// Built strictly from `screen_list[*].ticket_list[*]`; no availability
    /// filtering happens here, sold-out entries pass through untouched and
    /// the upstream ordering is preserved.
    pub async fn get_available_sessions(&self, project_id: u64) -> Result<Vec<Session>, ShowError> {
        let project = self.get_project_info(project_id).await?;
        let screens = project
            .get("screen_list")
            .and_then(Value::as_array)
            .ok_or_else(|| ShowError::Parse("project info missing screen_list".to_string()))?;

        let mut sessions = Vec::with_capacity(screens.len());
        for screen in screens {
            let tickets = screen
                .get("ticket_list")
                .and_then(Value::as_array)
                .ok_or_else(|| ShowError::Parse("screen missing ticket_list".to_string()))?
                .iter()
                .map(|ticket| serde_json::from_value::<Ticket>(ticket.clone()))
                .collect::<Result<Vec<_>, _>>()?;

            sessions.push(Session {
                id: screen["id"]
                    .as_u64()
                    .ok_or_else(|| ShowError::Parse("screen missing id".to_string()))?,
                start_time: screen["start_time"].as_i64().unwrap_or(0),
                formatted_time: screen["name"].as_str().unwrap_or("").to_string(),
                ticket_list: tickets,
            });
        }
        Ok(sessions)
    }

    /// Fetch the account's stored identity records as raw JSON.
    ///
    /// Requires a logged-in credential; the check runs before any request
    /// is sent.
    pub async fn get_all_buyer_info(&self, credential: &Credential) -> Result<Value, ShowError> {
        credential.require_sessdata()?;

        let url = format!("{}/api/ticket/buyer/list", self.host);
        debug!("fetching buyer info list");

        let resp = self.get(&url, Some(credential)).send().await?;
        let json: ShowResp<Value> = resp.json().await?;
        unwrap_data(json)
    }

    /// Fetch the account's stored identity records as typed values.
    ///
    /// One [`BuyerInfo`] per element of the response's `list` field, in
    /// response order.
    pub async fn get_all_buyer_info_obj(
        &self,
        credential: &Credential,
    ) -> Result<Vec<BuyerInfo>, ShowError> {
        let data = self.get_all_buyer_info(credential).await?;
        let parsed: BuyerListData = serde_json::from_value(data)?;
        Ok(parsed.list)
    }
}

/// Check the envelope code and extract `data`.
pub(crate) fn unwrap_data<T>(resp: ShowResp<T>) -> Result<T, ShowError> {
    if resp.errno != 0 {
        return Err(ShowError::Api {
            code: resp.errno,
            message: resp.msg,
        });
    }
    resp.data
        .ok_or_else(|| ShowError::Parse("response missing data field".to_string()))
}
