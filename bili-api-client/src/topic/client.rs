//! Topic HTTP Client

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::error::TopicError;
use super::types::{HotTopic, HotTopicsData, TopicCardsSortBy, TopicDetailsData, TopicInfo, TopicResp};
use crate::credential::Credential;

const DEFAULT_HOST: &str = "https://api.bilibili.com";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const REFERER: &str = "https://www.bilibili.com";

/// Topic HTTP client.
pub struct TopicClient {
    host: String,
    client: Client,
}

impl TopicClient {
    /// Create a client against the production host.
    pub fn new() -> Result<Self, TopicError> {
        Self::with_host(DEFAULT_HOST)
    }

    /// Create a client against a custom host.
    pub fn with_host(host: impl Into<String>) -> Result<Self, TopicError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TopicError::Network(e.to_string()))?;

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

    fn get(&self, url: &str, credential: Option<&Credential>) -> reqwest::RequestBuilder {
        let mut req = self.client.get(url).header("Referer", REFERER);
        if let Some(cookie) = credential.and_then(Credential::cookie_header) {
            req = req.header("Cookie", cookie);
        }
        req
    }

    fn post(&self, url: &str, credential: &Credential) -> reqwest::RequestBuilder {
        let mut req = self.client.post(url).header("Referer", REFERER);
        if let Some(cookie) = credential.cookie_header() {
            req = req.header("Cookie", cookie);
        }
        req
    }

    /// Fetch the basic details of a topic.
    pub async fn get_info(&self, topic_id: u64) -> Result<TopicInfo, TopicError> {
        let url = format!("{}/x/topic/web/details/basic", self.host);
        let id = topic_id.to_string();
        debug!(topic_id, "fetching topic info");

        let resp = self
            .get(&url, None)
            .query(&[("topic_id", id.as_str())])
            .send()
            .await?;
        let json: TopicResp<TopicDetailsData> = resp.json().await?;
        Ok(unwrap_data(json)?.topic)
    }

    /// Fetch a page of the topic's card feed as raw JSON.
    pub async fn get_cards(
        &self,
        topic_id: u64,
        sort_by: TopicCardsSortBy,
        offset: Option<&str>,
    ) -> Result<Value, TopicError> {
        let url = format!("{}/x/topic/web/details/cards", self.host);
        let id = topic_id.to_string();
        let sort = sort_by.as_param().to_string();

        let mut query = vec![
            ("topic_id", id.as_str()),
            ("sort_by", sort.as_str()),
            ("page_size", "20"),
        ];
        if let Some(offset) = offset {
            query.push(("offset", offset));
        }

        let resp = self.get(&url, None).query(&query).send().await?;
        let json: TopicResp<Value> = resp.json().await?;
        unwrap_data(json)
    }

    /// Like or un-like a topic. Requires SESSDATA and the CSRF cookie.
    pub async fn like(
        &self,
        topic_id: u64,
        status: bool,
        credential: &Credential,
    ) -> Result<(), TopicError> {
        credential.require_sessdata()?;
        credential.require_bili_jct()?;

        let url = format!("{}/x/topic/like", self.host);
        let action = if status { "like" } else { "cancel_like" };
        let form = [
            ("topic_id", topic_id.to_string()),
            ("action", action.to_string()),
            ("business", "topic".to_string()),
            ("csrf", credential.csrf().unwrap_or_default().to_string()),
        ];
        debug!(topic_id, action, "topic like");

        let resp = self.post(&url, credential).form(&form).send().await?;
        let json: TopicResp<Value> = resp.json().await?;
        check_code(json)
    }

    /// Add or remove a topic from favorites. Requires SESSDATA and the
    /// CSRF cookie.
    pub async fn set_favorite(
        &self,
        topic_id: u64,
        status: bool,
        credential: &Credential,
    ) -> Result<(), TopicError> {
        credential.require_sessdata()?;
        credential.require_bili_jct()?;

        let url = format!("{}/x/topic/fav", self.host);
        let action = if status { "add" } else { "cancel" };
        let form = [
            ("topic_id", topic_id.to_string()),
            ("action", action.to_string()),
            ("csrf", credential.csrf().unwrap_or_default().to_string()),
        ];
        debug!(topic_id, action, "topic favorite");

        let resp = self.post(&url, credential).form(&form).send().await?;
        let json: TopicResp<Value> = resp.json().await?;
        check_code(json)
    }

    /// Fetch the current hot topic list.
    pub async fn get_hot_topics(&self, page_size: u32) -> Result<Vec<HotTopic>, TopicError> {
        let url = format!("{}/x/topic/web/hot/list", self.host);
        let size = page_size.to_string();

        let resp = self
            .get(&url, None)
            .query(&[("page_size", size.as_str())])
            .send()
            .await?;
        let json: TopicResp<HotTopicsData> = resp.json().await?;
        Ok(unwrap_data(json)?.list)
    }

    /// Search topics by keyword as raw JSON.
    pub async fn search_topic(
        &self,
        keyword: &str,
        page_size: u32,
        page_num: u32,
    ) -> Result<Value, TopicError> {
        let url = format!("{}/x/topic/web/search", self.host);
        let size = page_size.to_string();
        let num = page_num.to_string();

        let resp = self
            .get(&url, None)
            .query(&[
                ("keywords", keyword),
                ("page_size", size.as_str()),
                ("page_num", num.as_str()),
            ])
            .send()
            .await?;
        let json: TopicResp<Value> = resp.json().await?;
        unwrap_data(json)
    }
}

/// Check the envelope code and extract `data`.
fn unwrap_data<T>(resp: TopicResp<T>) -> Result<T, TopicError> {
    if resp.code != 0 {
        return Err(TopicError::Api {
            code: resp.code,
            message: resp.message,
        });
    }
    resp.data
        .ok_or_else(|| TopicError::Parse("response missing data field".to_string()))
}

/// Check the envelope code on endpoints whose `data` carries nothing.
fn check_code<T>(resp: TopicResp<T>) -> Result<(), TopicError> {
    if resp.code != 0 {
        return Err(TopicError::Api {
            code: resp.code,
            message: resp.message,
        });
    }
    Ok(())
}
