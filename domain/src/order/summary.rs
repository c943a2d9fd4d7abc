//! Order summary generation.
//!
//! Summaries are newline-joined lines meant for a fixed-width text area.
//! Each generator returns `""` while a required field is blank; callers
//! treat that as "not ready to submit", not as an empty order.

use super::contact::ContactMethod;
use super::form::{VocalMixForm, WebCreateForm};
use crate::core::string::{is_blank, or_placeholder};
use crate::core::yen::{format_yen, parse_yen};
use crate::pricing::{OptionKey, QuoteOptions};

/// Divider between summary sections (46 hyphens).
pub const SEPARATOR: &str = "----------------------------------------------";

/// Shown in place of a page name the customer left empty.
pub const PAGE_NAME_PLACEHOLDER: &str = "(未入力)";

const TOTAL_PREFIX: &str = "合計金額 : ";

/// Summary for a vocal-mix order.
///
/// `total` should come from [`compute_total`](crate::pricing::compute_total)
/// over the same `options`.
///
/// ```
/// use quote_domain::{ContactMethod, QuoteOptions, VocalMixForm, generate_vocal_mix_summary};
///
/// let options = QuoteOptions::default();
/// let form = VocalMixForm::new("", "https://example.com/v");
/// assert_eq!(generate_vocal_mix_summary(&form, &options, 3000, &ContactMethod::Email), "");
/// ```
pub fn generate_vocal_mix_summary(
    form: &VocalMixForm,
    options: &QuoteOptions,
    total: u64,
    contact: &ContactMethod,
) -> String {
    if is_blank(&form.name) || is_blank(&form.video_url) {
        return String::new();
    }

    let mut lines = Vec::new();
    lines.push(format!("名前 : {}", form.name));
    if contact.is_email() && !is_blank(&form.email) {
        lines.push(format!("メール : {}", form.email));
    }
    lines.push(format!("動画URL : {}", form.video_url));
    lines.push(SEPARATOR.to_string());
    lines.push("ボーカルミックス基本プラン".to_string());

    for (key, sel) in options.selected() {
        match key {
            OptionKey::VocalAddition => {
                lines.push(format!("・{}: {}人", key.label(), sel.quantity));
            }
            _ => lines.push(format!("・{}", key.label())),
        }
    }

    lines.push(SEPARATOR.to_string());
    if !is_blank(&form.other_requests) {
        lines.push("その他のご要望・ご質問等 : ".to_string());
        lines.push(form.other_requests.trim().to_string());
        lines.push(SEPARATOR.to_string());
    }
    lines.push(format!("{}{}", TOTAL_PREFIX, format_yen(total)));

    lines.join("\n")
}

/// Summary for a web-create order.
///
/// Pages with neither name nor content are skipped but keep their original
/// number. The estimate block is only written when `estimate` is given;
/// `unit_price` is the per-page price shown next to it.
pub fn generate_web_create_summary(
    form: &WebCreateForm,
    contact: &ContactMethod,
    estimate: Option<u64>,
    unit_price: u64,
) -> String {
    if is_blank(&form.name) || is_blank(&form.site_overview) {
        return String::new();
    }

    let mut lines = Vec::new();
    lines.push(format!("名前: {}", form.name));
    if contact.is_email() && !is_blank(&form.email) {
        lines.push(format!("メール: {}", form.email));
    }
    lines.push(format!("サイトの概要: {}", form.site_overview));
    lines.push(SEPARATOR.to_string());
    lines.push("ページ構成:".to_string());

    for (index, page) in form.pages.iter().enumerate() {
        if page.is_empty() {
            continue;
        }
        lines.push(format!(
            "{}. {}",
            index + 1,
            or_placeholder(&page.name, PAGE_NAME_PLACEHOLDER)
        ));
        if !is_blank(&page.content) {
            lines.push(format!("   内容: {}", page.content));
        }
    }

    lines.push(SEPARATOR.to_string());

    if let Some(estimate) = estimate {
        lines.push(format!(
            "概算見積もり: {} ({}ページ × {})",
            format_yen(estimate),
            form.page_count(),
            format_yen(unit_price)
        ));
        lines.push("※内容により料金は変動いたします".to_string());
        lines.push(SEPARATOR.to_string());
    }

    if !is_blank(&form.deadline) {
        lines.push(format!("納期: {}", form.deadline));
    }
    if !is_blank(&form.budget) {
        lines.push(format!("予算: {}", form.budget));
    }

    lines.join("\n")
}

/// Read the total back from a vocal-mix summary's last line.
pub fn total_from_summary(summary: &str) -> Option<u64> {
    summary
        .lines()
        .last()?
        .strip_prefix(TOTAL_PREFIX)
        .and_then(parse_yen)
}
