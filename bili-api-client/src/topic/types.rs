//! Topic API Data Structures

use serde::Deserialize;

/// Response envelope used by api.bilibili.com `x/` endpoints.
#[derive(Debug, Deserialize)]
pub struct TopicResp<T> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

/// Topic details.
#[derive(Debug, Clone, Deserialize)]
pub struct TopicInfo {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub view: u64,
    #[serde(default)]
    pub discuss: u64,
    #[serde(default)]
    pub description: String,
}

/// `data` of the topic details endpoint.
#[derive(Debug, Deserialize)]
pub struct TopicDetailsData {
    pub topic: TopicInfo,
}

/// One entry of the hot topic list.
#[derive(Debug, Clone, Deserialize)]
pub struct HotTopic {
    pub topic_id: u64,
    pub topic_name: String,
    #[serde(default)]
    pub view: u64,
    #[serde(default)]
    pub discuss: u64,
}

/// `data` of the hot topic list endpoint.
#[derive(Debug, Deserialize)]
pub struct HotTopicsData {
    #[serde(default)]
    pub list: Vec<HotTopic>,
}

/// Card feed ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicCardsSortBy {
    New,
    Hot,
}

impl TopicCardsSortBy {
    #[must_use]
    pub const fn as_param(self) -> u32 {
        match self {
            Self::New => 2,
            Self::Hot => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sort_by_params() {
        assert_eq!(TopicCardsSortBy::New.as_param(), 2);
        assert_eq!(TopicCardsSortBy::Hot.as_param(), 3);
    }

    #[test]
    fn test_topic_details_decoding() {
        let resp: TopicResp<TopicDetailsData> = serde_json::from_value(json!({
            "code": 0,
            "message": "0",
            "data": {"topic": {"id": 66571, "name": "bilibili-api", "view": 12, "discuss": 3}}
        }))
        .expect("deserialize details");
        let data = resp.data.expect("data");
        assert_eq!(data.topic.id, 66571);
        assert_eq!(data.topic.name, "bilibili-api");
        assert!(data.topic.description.is_empty());
    }
}
