use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// KYC review state of a profile
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    #[default]
    Unverified,
    Pending,
    Verified,
    Rejected,
}

impl KycStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            KycStatus::Unverified => "unverified",
            KycStatus::Pending => "pending",
            KycStatus::Verified => "verified",
            KycStatus::Rejected => "rejected",
        }
    }
}

// Unknown or null statuses read as unverified so a new backend value never
// breaks profile loading.
impl<'de> Deserialize<'de> for KycStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw.as_deref() {
            Some("pending") => KycStatus::Pending,
            Some("verified") => KycStatus::Verified,
            Some("rejected") => KycStatus::Rejected,
            _ => KycStatus::Unverified,
        })
    }
}

/// Profile row keyed by the owning identity id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub id: Uuid,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub referral_code: Option<String>,
    #[serde(default)]
    pub referral_earnings: Decimal,
    #[serde(default)]
    pub referral_count: u32,
    #[serde(default)]
    pub kyc_status: KycStatus,
    #[serde(default)]
    pub kyc_submitted: bool,
}

/// Partial profile update. Only `Some` fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kyc_status: Option<KycStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kyc_submitted: Option<bool>,
}

impl ProfileUpdate {
    /// Apply the update to a cached profile row
    pub fn apply_to(&self, profile: &mut Profile) {
        if let Some(full_name) = &self.full_name {
            profile.full_name = Some(full_name.clone());
        }
        if let Some(country) = &self.country {
            profile.country = Some(country.clone());
        }
        if let Some(phone_number) = &self.phone_number {
            profile.phone_number = Some(phone_number.clone());
        }
        if let Some(status) = self.kyc_status {
            profile.kyc_status = status;
        }
        if let Some(submitted) = self.kyc_submitted {
            profile.kyc_submitted = submitted;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update_omits_unset_fields() {
        let update = ProfileUpdate {
            full_name: Some("Ada Obi".to_string()),
            kyc_submitted: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "full_name": "Ada Obi", "kyc_submitted": true }));
    }

    #[test]
    fn test_profile_with_sparse_columns() {
        let json = r#"{
            "id": "7d6f0c1e-4b8a-4a55-9d0b-0f1e2a3b4c5d",
            "referral_code": "ADA7",
            "referral_earnings": 12.5,
            "kyc_status": null
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.referral_code.as_deref(), Some("ADA7"));
        assert_eq!(profile.referral_earnings, Decimal::new(125, 1));
        assert_eq!(profile.kyc_status, KycStatus::Unverified);
        assert!(!profile.kyc_submitted);
    }

    #[test]
    fn test_apply_update() {
        let mut profile: Profile =
            serde_json::from_str(r#"{"id":"7d6f0c1e-4b8a-4a55-9d0b-0f1e2a3b4c5d"}"#).unwrap();
        ProfileUpdate {
            country: Some("Nigeria".to_string()),
            kyc_status: Some(KycStatus::Pending),
            ..Default::default()
        }
        .apply_to(&mut profile);

        assert_eq!(profile.country.as_deref(), Some("Nigeria"));
        assert_eq!(profile.kyc_status, KycStatus::Pending);
        assert_eq!(profile.full_name, None);
    }
}
