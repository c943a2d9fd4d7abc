//! Vocal-mix quote session
//!
//! Holds the option selections and form fields for one customer filling in
//! the vocal-mix form. The total and summary are derived on every call; the
//! session only stores inputs.
//!
//! # Usage
//!
//! ```
//! use quote_application::{PricingConfig, VocalMixSession};
//! use quote_domain::{ContactMethod, OptionKey, SelectionUpdate, VocalMixForm};
//!
//! let mut session = VocalMixSession::new(PricingConfig::default());
//! session.set_form(VocalMixForm::new("山田太郎", "https://youtu.be/abc123"));
//! session.update_option(OptionKey::Encoding, SelectionUpdate::Selected(true));
//!
//! assert_eq!(session.total(), 3500);
//! assert!(session.summary(&ContactMethod::Email).ends_with("¥3,500"));
//! ```

use super::shared::{SubmitError, send_summary};
use crate::config::PricingConfig;
use crate::ports::order_submitter::{OrderSubmitter, SubmissionReceipt};
use quote_domain::{
    ContactMethod, OptionKey, QuoteOptions, SelectionUpdate, Service, VocalMixForm,
    apply_selection_update, compute_total, generate_vocal_mix_summary, url_warning,
};
use tracing::debug;

/// State of one vocal-mix form-filling session.
#[derive(Debug, Clone)]
pub struct VocalMixSession {
    base_price: u64,
    default_options: QuoteOptions,
    options: QuoteOptions,
    form: VocalMixForm,
}

impl VocalMixSession {
    pub fn new(pricing: PricingConfig) -> Self {
        Self {
            base_price: pricing.vocal_mix_base,
            default_options: pricing.options,
            options: pricing.options,
            form: VocalMixForm::default(),
        }
    }

    pub fn options(&self) -> &QuoteOptions {
        &self.options
    }

    pub fn form(&self) -> &VocalMixForm {
        &self.form
    }

    pub fn base_price(&self) -> u64 {
        self.base_price
    }

    /// Apply one option change, keeping the urgency options exclusive.
    pub fn update_option(&mut self, key: OptionKey, update: SelectionUpdate) {
        debug!(option = %key, ?update, "Updating option");
        self.options = apply_selection_update(&self.options, key, update);
    }

    pub fn set_form(&mut self, form: VocalMixForm) {
        self.form = form;
    }

    pub fn form_mut(&mut self) -> &mut VocalMixForm {
        &mut self.form
    }

    pub fn total(&self) -> u64 {
        compute_total(self.base_price, &self.options)
    }

    /// Current summary; empty while name or video URL is blank.
    pub fn summary(&self, contact: &ContactMethod) -> String {
        generate_vocal_mix_summary(&self.form, &self.options, self.total(), contact)
    }

    pub fn is_ready(&self) -> bool {
        !self.summary(&ContactMethod::Email).is_empty()
    }

    /// Whether the video URL should be flagged as suspicious.
    pub fn url_warning(&self) -> bool {
        url_warning(&self.form.video_url)
    }

    /// Clear the form and return options to their starting state.
    pub fn reset(&mut self) {
        self.form = VocalMixForm::default();
        self.options = self.default_options;
    }

    /// Send the current summary. The session resets only on success.
    pub async fn submit(
        &mut self,
        submitter: &dyn OrderSubmitter,
        contact: &ContactMethod,
    ) -> Result<SubmissionReceipt, SubmitError> {
        let summary = self.summary(contact);
        let receipt = send_summary(
            submitter,
            Service::VocalMix,
            &self.form.name,
            &self.form.email,
            summary,
        )
        .await?;
        self.reset();
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::order_submitter::{
        DryRunSubmitter, SubmissionError, SubmissionPayload,
    };
    use async_trait::async_trait;
    use std::sync::Mutex;

    // ==================== Test doubles ====================

    #[derive(Default)]
    struct RecordingSubmitter {
        sent: Mutex<Vec<SubmissionPayload>>,
    }

    #[async_trait]
    impl OrderSubmitter for RecordingSubmitter {
        async fn submit(
            &self,
            payload: &SubmissionPayload,
        ) -> Result<SubmissionReceipt, SubmissionError> {
            self.sent.lock().unwrap().push(payload.clone());
            Ok(SubmissionReceipt::now(payload.service, "memory"))
        }
    }

    struct FailingSubmitter;

    #[async_trait]
    impl OrderSubmitter for FailingSubmitter {
        async fn submit(
            &self,
            _payload: &SubmissionPayload,
        ) -> Result<SubmissionReceipt, SubmissionError> {
            Err(SubmissionError::Rejected("offline".to_string()))
        }
    }

    fn filled_session() -> VocalMixSession {
        let mut session = VocalMixSession::new(PricingConfig::default());
        session.set_form(
            VocalMixForm::new("山田太郎", "https://youtu.be/abc123")
                .with_email("taro@example.com"),
        );
        session.update_option(OptionKey::VocalAddition, SelectionUpdate::Selected(true));
        session.update_option(OptionKey::VocalAddition, SelectionUpdate::Quantity(2));
        session.update_option(OptionKey::Encoding, SelectionUpdate::Selected(true));
        session
    }

    // ==================== Derived values ====================

    #[test]
    fn test_new_session_total_is_base() {
        let session = VocalMixSession::new(PricingConfig::default());
        assert_eq!(session.total(), 3000);
        assert!(!session.is_ready());
        assert_eq!(session.summary(&ContactMethod::Email), "");
    }

    #[test]
    fn test_total_and_summary_follow_options() {
        let session = filled_session();
        assert_eq!(session.total(), 7500);
        let summary = session.summary(&ContactMethod::Email);
        assert!(summary.lines().any(|l| l == "・ボーカル追加: 2人"));
        assert!(summary.lines().any(|l| l == "合計金額 : ¥7,500"));
    }

    #[test]
    fn test_urgency_exclusion_through_session() {
        let mut session = filled_session();
        session.update_option(OptionKey::UrgentThreeDay, SelectionUpdate::Selected(true));
        session.update_option(OptionKey::UrgentSevenDay, SelectionUpdate::Selected(true));
        assert!(!session.options().urgent_three_day.selected);
        assert_eq!(session.total(), 7500 + 1000);
    }

    #[test]
    fn test_custom_base_price() {
        let session = VocalMixSession::new(PricingConfig::default().with_vocal_mix_base(4000));
        assert_eq!(session.total(), 4000);
    }

    #[test]
    fn test_url_warning() {
        let mut session = VocalMixSession::new(PricingConfig::default());
        assert!(!session.url_warning());
        session.form_mut().video_url = "youtu.be/abc".to_string();
        assert!(session.url_warning());
        session.form_mut().name = "山田".to_string();
        // Warning is advisory; the summary is still produced.
        assert!(session.is_ready());
    }

    // ==================== Submission ====================

    #[tokio::test]
    async fn test_submit_sends_summary_and_resets() {
        let mut session = filled_session();
        let expected_message = session.summary(&ContactMethod::Email);
        let submitter = RecordingSubmitter::default();

        let receipt = session
            .submit(&submitter, &ContactMethod::Email)
            .await
            .unwrap();
        assert_eq!(receipt.service, Service::VocalMix);

        let sent = submitter.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].name, "山田太郎");
        assert_eq!(sent[0].email, "taro@example.com");
        assert_eq!(sent[0].message, expected_message);

        assert_eq!(session.options(), &QuoteOptions::default());
        assert_eq!(session.form(), &VocalMixForm::default());
    }

    #[tokio::test]
    async fn test_submit_not_ready() {
        let mut session = VocalMixSession::new(PricingConfig::default());
        session.form_mut().name = "山田太郎".to_string();
        let result = session.submit(&DryRunSubmitter, &ContactMethod::Email).await;
        assert!(matches!(result, Err(SubmitError::NotReady)));
        assert_eq!(session.form().name, "山田太郎");
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_state() {
        let mut session = filled_session();
        let result = session.submit(&FailingSubmitter, &ContactMethod::Email).await;
        assert!(matches!(result, Err(SubmitError::Submission(_))));
        assert_eq!(session.total(), 7500);
        assert!(session.is_ready());
    }
}
