use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use yew::{Html, ToHtml, html};

/// UTC instant rendered in the storefront's date format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// The current instant.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }
}

impl ToHtml for Timestamp {
    fn to_html(&self) -> Html {
        html! { self.0.format("%Y/%m/%d").to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json;

    #[test]
    fn test_timestamp_formatting() {
        let dt = Utc.with_ymd_and_hms(2026, 7, 12, 9, 15, 0).unwrap();
        let timestamp = Timestamp(dt);

        assert_eq!(timestamp.to_html(), html! { "2026/07/12" });
    }

    #[test]
    fn test_timestamp_serialization_roundtrip() {
        let dt = Utc.with_ymd_and_hms(2026, 7, 12, 9, 15, 0).unwrap();
        let timestamp = Timestamp(dt);

        let serialized = serde_json::to_string(&timestamp).unwrap();
        assert_eq!(serialized, "\"2026-07-12T09:15:00Z\"");

        let deserialized: Timestamp = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, timestamp);
    }

    #[test]
    fn test_timestamp_equality() {
        let dt1 = Utc.with_ymd_and_hms(2026, 7, 12, 9, 15, 0).unwrap();
        let dt2 = Utc.with_ymd_and_hms(2026, 7, 12, 9, 15, 1).unwrap();

        assert_eq!(Timestamp(dt1), Timestamp(dt1));
        assert_ne!(Timestamp(dt1), Timestamp(dt2));
    }
}
