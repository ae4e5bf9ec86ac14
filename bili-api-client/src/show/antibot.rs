//! Fabricated click telemetry.
//!
//! The order endpoint expects the browser click that triggered the
//! purchase. A constant position is an easy bot signal, so coordinates and
//! timing jitter are re-drawn on every attempt.

use chrono::Utc;
use rand::RngExt;
use serde::Serialize;

/// A simulated click on the purchase button.
#[derive(Debug, Clone, Serialize)]
pub struct ClickPosition {
    pub x: u32,
    pub y: u32,
    /// Page-load time, milliseconds since the epoch.
    pub origin: i64,
    /// Click time, 5-10 seconds after `origin`.
    pub now: i64,
}

impl ClickPosition {
    /// Draw a fresh click sample.
    ///
    /// Coordinates fall where the purchase button sits on a 1920x1080
    /// viewport.
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let origin = Utc::now().timestamp_millis();
        Self {
            x: rng.random_range(1320..=1330),
            y: rng.random_range(880..=890),
            origin,
            now: origin + rng.random_range(5000..=10_000),
        }
    }

    /// JSON string form embedded in the order payload.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_position_bounds() {
        for _ in 0..100 {
            let click = ClickPosition::generate();
            assert!((1320..=1330).contains(&click.x));
            assert!((880..=890).contains(&click.y));
            assert!(click.origin > 0);
            let delta = click.now - click.origin;
            assert!((5000..=10_000).contains(&delta));
        }
    }

    #[test]
    fn test_click_position_serializes_flat() {
        let click = ClickPosition {
            x: 1325,
            y: 885,
            origin: 1_700_000_000_000,
            now: 1_700_000_006_000,
        };
        let json = click.to_json().expect("serialize click");
        assert_eq!(
            json,
            r#"{"x":1325,"y":885,"origin":1700000000000,"now":1700000006000}"#
        );
    }
}
