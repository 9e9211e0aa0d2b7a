//! Canonical lead record and the rating-based priority classifier.

use serde::{Deserialize, Serialize};

/// Business status reported for an open, trading business.
pub const STATUS_OPERATIONAL: &str = "OPERATIONAL";

/// Business status reported for a business that has shut down for good.
/// Records carrying it never become leads.
pub const STATUS_CLOSED_PERMANENTLY: &str = "CLOSED_PERMANENTLY";

/// Placeholder used when a place carries no display name.
pub const UNKNOWN_COMPANY_NAME: &str = "Unknown";

/// Lower bound (inclusive) of the `high` tier.
pub const HIGH_RATING_FLOOR: f64 = 4.8;

/// Lower bound (inclusive) of the `medium` tier.
pub const MEDIUM_RATING_FLOOR: f64 = 4.5;

/// Outreach priority tier. Variant order is the rank order: `High` sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Classifies a rating into a tier.
    ///
    /// Missing (and NaN) ratings are `Low`.
    #[must_use]
    pub fn classify(rating: Option<f64>) -> Self {
        match rating {
            Some(r) if r >= HIGH_RATING_FLOOR => Priority::High,
            Some(r) if r >= MEDIUM_RATING_FLOOR => Priority::Medium,
            _ => Priority::Low,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized business lead.
///
/// Field order is the serialized order of the snapshot file. `priority` is
/// derived from `rating` at construction and there is no way to set it
/// independently. Reading a snapshot back recomputes it; any stored
/// `priority` value is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LeadRecord")]
pub struct Lead {
    pub company_name: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub rating: Option<f64>,
    pub business_status: String,
    priority: Priority,
}

/// Snapshot shape of a [`Lead`] without its derived tier.
#[derive(Deserialize)]
struct LeadRecord {
    company_name: String,
    phone: Option<String>,
    website: Option<String>,
    address: Option<String>,
    rating: Option<f64>,
    business_status: Option<String>,
}

impl From<LeadRecord> for Lead {
    fn from(record: LeadRecord) -> Self {
        Lead::new(
            record.company_name,
            record.phone,
            record.website,
            record.address,
            record.rating,
            record.business_status,
        )
    }
}

impl Lead {
    /// Builds a lead, classifying its priority from `rating`.
    ///
    /// A missing `business_status` is recorded as [`STATUS_OPERATIONAL`].
    #[must_use]
    pub fn new(
        company_name: String,
        phone: Option<String>,
        website: Option<String>,
        address: Option<String>,
        rating: Option<f64>,
        business_status: Option<String>,
    ) -> Self {
        Self {
            company_name,
            phone,
            website,
            address,
            rating,
            business_status: business_status.unwrap_or_else(|| STATUS_OPERATIONAL.to_string()),
            priority: Priority::classify(rating),
        }
    }

    #[must_use]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// `true` when the lead's business is trading normally.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.business_status == STATUS_OPERATIONAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead_with(rating: Option<f64>, status: Option<&str>) -> Lead {
        Lead::new(
            "Cool Air HVAC".to_owned(),
            Some("(214) 555-0101".to_owned()),
            None,
            None,
            rating,
            status.map(str::to_owned),
        )
    }

    #[test]
    fn classify_boundaries_are_inclusive_on_lower_bound() {
        assert_eq!(Priority::classify(Some(4.8)), Priority::High);
        assert_eq!(Priority::classify(Some(5.0)), Priority::High);
        assert_eq!(Priority::classify(Some(4.79)), Priority::Medium);
        assert_eq!(Priority::classify(Some(4.5)), Priority::Medium);
        assert_eq!(Priority::classify(Some(4.49)), Priority::Low);
        assert_eq!(Priority::classify(Some(0.0)), Priority::Low);
    }

    #[test]
    fn classify_missing_rating_is_low() {
        assert_eq!(Priority::classify(None), Priority::Low);
    }

    #[test]
    fn classify_nan_is_low() {
        assert_eq!(Priority::classify(Some(f64::NAN)), Priority::Low);
    }

    #[test]
    fn priority_orders_high_before_low() {
        assert!(Priority::High < Priority::Medium);
        assert!(Priority::Medium < Priority::Low);
    }

    #[test]
    fn lead_priority_follows_rating() {
        assert_eq!(lead_with(Some(4.9), None).priority(), Priority::High);
        assert_eq!(lead_with(Some(4.6), None).priority(), Priority::Medium);
        assert_eq!(lead_with(None, None).priority(), Priority::Low);
    }

    #[test]
    fn lead_defaults_missing_status_to_operational() {
        let lead = lead_with(None, None);
        assert_eq!(lead.business_status, STATUS_OPERATIONAL);
        assert!(lead.is_active());
    }

    #[test]
    fn temporarily_closed_lead_is_not_active() {
        assert!(!lead_with(Some(4.9), Some("CLOSED_TEMPORARILY")).is_active());
    }

    #[test]
    fn lead_serializes_fields_in_snapshot_order() {
        let json = serde_json::to_string(&lead_with(Some(4.6), None)).unwrap();
        assert_eq!(
            json,
            r#"{"company_name":"Cool Air HVAC","phone":"(214) 555-0101","website":null,"address":null,"rating":4.6,"business_status":"OPERATIONAL","priority":"medium"}"#
        );
    }

    #[test]
    fn deserializing_recomputes_priority_from_rating() {
        let lead: Lead = serde_json::from_str(
            r#"{"company_name":"Cool Air HVAC","phone":null,"website":null,"address":null,"rating":4.9,"business_status":"OPERATIONAL","priority":"low"}"#,
        )
        .unwrap();
        assert_eq!(lead.priority(), Priority::High);
        assert_eq!(lead.priority(), Priority::classify(lead.rating));
    }

    #[test]
    fn deserializing_without_priority_or_status_uses_defaults() {
        let lead: Lead =
            serde_json::from_str(r#"{"company_name":"Arctic Air","rating":4.6}"#).unwrap();
        assert_eq!(lead.priority(), Priority::Medium);
        assert_eq!(lead.business_status, STATUS_OPERATIONAL);
        assert!(lead.phone.is_none());
    }

    #[test]
    fn snapshot_round_trip_preserves_lead() {
        let original = lead_with(Some(4.5), Some("CLOSED_TEMPORARILY"));
        let json = serde_json::to_string(&original).unwrap();
        let restored: Lead = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }
}
