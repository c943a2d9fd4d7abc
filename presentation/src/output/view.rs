//! Read-only snapshot of a session, ready to print.

use quote_application::{VocalMixSession, WebCreateSession};
use quote_domain::{ContactMethod, Service};
use serde::Serialize;

/// One line of the price breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceLine {
    pub label: String,
    pub amount: u64,
}

impl PriceLine {
    fn new(label: impl Into<String>, amount: u64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Everything the formatters need about one quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteView {
    pub service: Service,
    pub total: u64,
    pub breakdown: Vec<PriceLine>,
    /// Order summary; empty while required fields are missing
    pub summary: String,
    pub ready: bool,
    pub missing_fields: Vec<&'static str>,
    /// Vocal mix only: the video URL looks malformed
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub url_warning: bool,
}

impl QuoteView {
    pub fn from_vocal_mix(session: &VocalMixSession, contact: &ContactMethod) -> Self {
        let mut breakdown = vec![PriceLine::new("基本料金", session.base_price())];
        for (key, sel) in session.options().selected() {
            let (label, amount) = if key.is_quantity_capable() {
                (
                    format!("{} ×{}", key.label(), sel.quantity),
                    sel.unit_price.saturating_mul(u64::from(sel.quantity)),
                )
            } else {
                (key.label().to_string(), sel.unit_price)
            };
            breakdown.push(PriceLine::new(label, amount));
        }

        let summary = session.summary(contact);
        Self {
            service: Service::VocalMix,
            total: session.total(),
            breakdown,
            ready: !summary.is_empty(),
            summary,
            missing_fields: session.form().missing_required(),
            url_warning: session.url_warning(),
        }
    }

    pub fn from_web_create(session: &WebCreateSession, contact: &ContactMethod) -> Self {
        let pages = session.form().page_count();
        let breakdown = vec![PriceLine::new(
            format!("{}ページ", pages),
            session.estimate(),
        )];

        let summary = session.summary(contact);
        Self {
            service: Service::WebCreate,
            total: session.estimate(),
            breakdown,
            ready: !summary.is_empty(),
            summary,
            missing_fields: session.form().missing_required(),
            url_warning: false,
        }
    }
}
