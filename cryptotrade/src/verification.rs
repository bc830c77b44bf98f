//! # Verification Wizard
//!
//! Three-step KYC flow: personal details, document upload, confirmation.
//! Steps only move forward, one at a time.
//!
//! Submitting the personal details marks the profile `kyc_status = pending`
//! and `kyc_submitted = true`. The document step is a placeholder: nothing
//! is uploaded.

use shared::{KycStatus, Profile, ProfileUpdate};

use crate::core::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerificationStep {
    #[default]
    PersonalInfo,
    Documents,
    Confirmed,
}

impl VerificationStep {
    pub fn all() -> &'static [VerificationStep] {
        &[
            VerificationStep::PersonalInfo,
            VerificationStep::Documents,
            VerificationStep::Confirmed,
        ]
    }

    pub fn number(&self) -> usize {
        match self {
            VerificationStep::PersonalInfo => 1,
            VerificationStep::Documents => 2,
            VerificationStep::Confirmed => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            VerificationStep::PersonalInfo => "Personal Info",
            VerificationStep::Documents => "Documents",
            VerificationStep::Confirmed => "Verification",
        }
    }

    fn next(&self) -> Option<VerificationStep> {
        match self {
            VerificationStep::PersonalInfo => Some(VerificationStep::Documents),
            VerificationStep::Documents => Some(VerificationStep::Confirmed),
            VerificationStep::Confirmed => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct VerificationWizard {
    pub step: VerificationStep,
    pub full_name: String,
    pub phone_number: String,
    pub country: String,
    pub error: Option<String>,
    pub submitting: bool,
    prefilled: bool,
}

impl VerificationWizard {
    /// Fill empty fields from the profile, once
    pub fn prefill(&mut self, profile: &Profile) {
        if self.prefilled {
            return;
        }
        self.prefilled = true;

        let fill = |field: &mut String, value: &Option<String>| {
            if field.is_empty() {
                if let Some(value) = value {
                    *field = value.clone();
                }
            }
        };
        fill(&mut self.full_name, &profile.full_name);
        fill(&mut self.phone_number, &profile.phone_number);
        fill(&mut self.country, &profile.country);
    }

    /// Profile update for the personal details step
    pub fn personal_info_update(&self) -> Result<ProfileUpdate> {
        if self.step != VerificationStep::PersonalInfo {
            return Err(AppError::State(format!(
                "Personal details cannot be submitted from the {} step",
                self.step.title()
            )));
        }

        let full_name = self.full_name.trim();
        let phone_number = self.phone_number.trim();
        let country = self.country.trim();
        if full_name.is_empty() || phone_number.is_empty() || country.is_empty() {
            return Err(AppError::Validation("Please fill in all fields".to_string()));
        }

        Ok(ProfileUpdate {
            full_name: Some(full_name.to_string()),
            phone_number: Some(phone_number.to_string()),
            country: Some(country.to_string()),
            kyc_status: Some(KycStatus::Pending),
            kyc_submitted: Some(true),
        })
    }

    /// Move to `target`, which must be the step right after the current one
    pub fn advance(&mut self, target: VerificationStep) -> Result<()> {
        if self.step.next() != Some(target) {
            return Err(AppError::State(format!(
                "Cannot move from {} to {}",
                self.step.title(),
                target.title()
            )));
        }
        tracing::info!(from = ?self.step, to = ?target, "Verification step advanced");
        self.step = target;
        self.error = None;
        Ok(())
    }

    /// Outcome of the personal details update
    pub fn personal_info_saved(&mut self, result: Result<()>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                if let Err(e) = self.advance(VerificationStep::Documents) {
                    tracing::warn!(error = %e, "Personal details saved out of order");
                }
            }
            Err(e) => self.error = Some(e.user_message().to_string()),
        }
    }

    /// "Upload Document": no file is transferred
    pub fn upload_document(&mut self) -> Result<()> {
        self.advance(VerificationStep::Confirmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn filled() -> VerificationWizard {
        VerificationWizard {
            full_name: "Ada Obi".to_string(),
            phone_number: "+2348000000000".to_string(),
            country: "Nigeria".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_update_marks_kyc_pending() {
        let update = filled().personal_info_update().unwrap();
        assert_eq!(update.kyc_status, Some(KycStatus::Pending));
        assert_eq!(update.kyc_submitted, Some(true));
        assert_eq!(update.full_name.as_deref(), Some("Ada Obi"));
    }

    #[test]
    fn test_all_fields_required() {
        let mut wizard = filled();
        wizard.country = "  ".to_string();
        assert!(matches!(wizard.personal_info_update(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_happy_path() {
        let mut wizard = filled();
        wizard.personal_info_saved(Ok(()));
        assert_eq!(wizard.step, VerificationStep::Documents);

        wizard.upload_document().unwrap();
        assert_eq!(wizard.step, VerificationStep::Confirmed);
    }

    #[test]
    fn test_failed_save_stays_on_step() {
        let mut wizard = filled();
        wizard.submitting = true;
        wizard.personal_info_saved(Err(AppError::Api("HTTP 500: boom".to_string())));

        assert_eq!(wizard.step, VerificationStep::PersonalInfo);
        assert_eq!(wizard.error.as_deref(), Some("HTTP 500: boom"));
        assert!(!wizard.submitting);
    }

    #[test]
    fn test_out_of_order_transitions_rejected() {
        let mut wizard = filled();
        assert!(matches!(wizard.upload_document(), Err(AppError::State(_))));
        assert!(wizard.advance(VerificationStep::Confirmed).is_err());

        wizard.advance(VerificationStep::Documents).unwrap();
        assert!(wizard.advance(VerificationStep::PersonalInfo).is_err());
        assert!(wizard.personal_info_update().is_err());

        wizard.advance(VerificationStep::Confirmed).unwrap();
        assert!(wizard.advance(VerificationStep::Confirmed).is_err());
    }

    #[test]
    fn test_prefill_keeps_user_input() {
        let mut wizard = VerificationWizard {
            full_name: "Typed Name".to_string(),
            ..Default::default()
        };
        let mut profile = crate::services::fake::empty_profile(Uuid::new_v4());
        profile.full_name = Some("Stored Name".to_string());
        profile.country = Some("Ghana".to_string());

        wizard.prefill(&profile);
        assert_eq!(wizard.full_name, "Typed Name");
        assert_eq!(wizard.country, "Ghana");

        profile.phone_number = Some("+233".to_string());
        wizard.prefill(&profile);
        assert!(wizard.phone_number.is_empty());
    }
}
