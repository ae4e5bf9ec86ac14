//! Ticket purchase flow.
//!
//! Two sequential round trips: acquire a short-lived purchase token, then
//! submit the assembled order. Nothing is retried here and no state
//! survives an attempt; a failed order is discarded and a fresh
//! [`TicketOrder`] constructed.

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::antibot::ClickPosition;
use super::client::{unwrap_data, ShowClient};
use super::error::ShowError;
use super::policy;
use super::types::{BuyerInfo, Session, ShowResp, Ticket, TokenData};
use crate::credential::Credential;
use crate::device;

/// Form payload for the order creation endpoint.
///
/// Exactly one identity shape is present: `buyer_info` (serialized full
/// record, for identity-document venues) or `buyer` + `tel`.
#[derive(Debug, Serialize)]
pub struct OrderPayload {
    pub count: u32,
    pub order_type: u32,
    pub pay_money: u64,
    pub project_id: u64,
    pub screen_id: u64,
    pub sku_id: u64,
    pub timestamp: i64,
    pub token: String,
    #[serde(rename = "deviceId")]
    pub device_id: String,
    #[serde(rename = "clickPosition")]
    pub click_position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tel: Option<String>,
}

/// One purchase attempt: a chosen buyer, session and ticket under a
/// borrowed credential.
pub struct TicketOrder<'a> {
    client: &'a ShowClient,
    credential: &'a Credential,
    buyer: &'a BuyerInfo,
    project_id: u64,
    session: &'a Session,
    ticket: &'a Ticket,
}

impl<'a> TicketOrder<'a> {
    #[must_use]
    pub fn new(
        client: &'a ShowClient,
        credential: &'a Credential,
        buyer: &'a BuyerInfo,
        project_id: u64,
        session: &'a Session,
        ticket: &'a Ticket,
    ) -> Self {
        Self {
            client,
            credential,
            buyer,
            project_id,
            session,
            ticket,
        }
    }

    /// Acquire the short-lived purchase token.
    ///
    /// Requires a logged-in credential, checked before the request goes
    /// out. Failures propagate; the caller decides whether to retry.
    pub async fn get_token(&self) -> Result<TokenData, ShowError> {
        self.credential.require_sessdata()?;

        let url = format!(
            "{}/api/ticket/order/prepare?project_id={}",
            self.client.host(),
            self.project_id
        );
        let form = [
            ("count", "1".to_string()),
            ("order_type", "1".to_string()),
            ("project_id", self.project_id.to_string()),
            ("screen_id", self.session.id.to_string()),
            ("sku_id", self.ticket.id.to_string()),
        ];
        debug!(
            project_id = self.project_id,
            screen_id = self.session.id,
            sku_id = self.ticket.id,
            "acquiring purchase token"
        );

        let resp = self
            .client
            .post(&url, self.credential)
            .form(&form)
            .send()
            .await?;
        let json: ShowResp<TokenData> = resp.json().await?;
        unwrap_data(json)
    }

    /// Assemble the create-order payload.
    ///
    /// Acquires the token, then re-fetches the project to branch on the
    /// venue identity policy.
    async fn create_order_payload(&self) -> Result<OrderPayload, ShowError> {
        let token = self.get_token().await?;

        let mut payload = OrderPayload {
            count: 1,
            order_type: 1,
            pay_money: self.ticket.price,
            project_id: self.project_id,
            screen_id: self.session.id,
            sku_id: self.ticket.id,
            timestamp: Utc::now().timestamp_millis(),
            token: token.token,
            device_id: device::gen_device_id(),
            click_position: ClickPosition::generate().to_json()?,
            buyer_info: None,
            buyer: None,
            tel: None,
        };

        let project = self.client.get_project_info(self.project_id).await?;
        if policy::project_requires_identity_document(&project) {
            // Single-element list of the full record, upstream field names.
            payload.buyer_info = Some(serde_json::to_string(&[self.buyer])?);
        } else {
            payload.buyer = Some(self.buyer.name.clone());
            payload.tel = Some(self.buyer.tel.clone());
        }
        Ok(payload)
    }

    /// Submit the order.
    ///
    /// Returns the raw upstream response data; a rejection surfaces as
    /// [`ShowError::Api`] with the upstream code preserved.
    pub async fn create_order(&self) -> Result<Value, ShowError> {
        let payload = self.create_order_payload().await?;

        let url = format!("{}/api/ticket/order/createV2", self.client.host());
        let id = self.project_id.to_string();
        debug!(project_id = self.project_id, "submitting order");

        let resp = self
            .client
            .post(&url, self.credential)
            .query(&[("project_id", id.as_str())])
            .form(&payload)
            .send()
            .await?;
        let json: ShowResp<Value> = resp.json().await?;
        unwrap_data(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> OrderPayload {
        OrderPayload {
            count: 1,
            order_type: 1,
            pay_money: 100,
            project_id: 500,
            screen_id: 1,
            sku_id: 10,
            timestamp: 1_700_000_000_000,
            token: "tok".to_string(),
            device_id: "dev".to_string(),
            click_position: "{}".to_string(),
            buyer_info: None,
            buyer: None,
            tel: None,
        }
    }

    #[test]
    fn test_payload_plain_shape_omits_buyer_info() {
        let mut p = payload();
        p.buyer = Some("张三".to_string());
        p.tel = Some("13800000000".to_string());

        let value = serde_json::to_value(&p).expect("serialize payload");
        assert!(value.get("buyer_info").is_none());
        assert_eq!(value["buyer"], "张三");
        assert_eq!(value["tel"], "13800000000");
        assert_eq!(value["deviceId"], "dev");
        assert_eq!(value["clickPosition"], "{}");
    }

    #[test]
    fn test_payload_identity_shape_omits_plain_fields() {
        let mut p = payload();
        p.buyer_info = Some("[{\"name\":\"张三\"}]".to_string());

        let value = serde_json::to_value(&p).expect("serialize payload");
        assert!(value.get("buyer").is_none());
        assert!(value.get("tel").is_none());
        assert_eq!(value["buyer_info"], "[{\"name\":\"张三\"}]");
    }
}
