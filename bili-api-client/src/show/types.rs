//! Show API Data Structures

use serde::{Deserialize, Serialize};

/// Response envelope used by show.bilibili.com endpoints.
#[derive(Debug, Deserialize)]
pub struct ShowResp<T> {
    pub errno: i64,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
}

/// A purchasable ticket tier (SKU) within a session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ticket {
    pub id: u64,
    /// Price in the upstream's smallest unit; never negative.
    pub price: u64,
    pub desc: String,
    pub sale_start: String,
    pub sale_end: String,
}

/// A date/time occurrence (screen) of a project.
///
/// Owns its tickets by value, in the order the catalog listed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: u64,
    pub start_time: i64,
    /// Display string, e.g. "2024-01-01 Monday".
    pub formatted_time: String,
    pub ticket_list: Vec<Ticket>,
}

/// A stored real-name identity record.
///
/// Deserialized whole from the buyer list endpoint and serialized back with
/// the upstream field names when an order needs identity-document data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyerInfo {
    pub id: u64,
    pub uid: u64,
    #[serde(default)]
    pub account_channel: String,
    pub personal_id: String,
    pub name: String,
    #[serde(default)]
    pub id_card_front: String,
    #[serde(default)]
    pub id_card_back: String,
    #[serde(default)]
    pub is_default: i64,
    pub tel: String,
    #[serde(default)]
    pub error_code: String,
    #[serde(default)]
    pub id_type: i64,
    #[serde(default)]
    pub verify_status: i64,
    #[serde(rename = "accountId", default)]
    pub account_id: u64,
    #[serde(rename = "isBuyerInfoVerified", default = "default_true")]
    pub is_buyer_info_verified: bool,
    #[serde(rename = "isBuyerValid", default = "default_true")]
    pub is_buyer_valid: bool,
}

const fn default_true() -> bool {
    true
}

/// Buyer list payload (`data` of the buyer list endpoint).
#[derive(Debug, Deserialize)]
pub struct BuyerListData {
    #[serde(default)]
    pub list: Vec<BuyerInfo>,
}

/// Purchase token payload (`data` of the order prepare endpoint).
#[derive(Debug, Clone, Deserialize)]
pub struct TokenData {
    pub token: String,
}
