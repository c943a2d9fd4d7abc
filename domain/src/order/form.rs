//! Form field records for each service.
//!
//! All fields are free text. Required-field checks live in the summary
//! formatter, which returns an empty string while a required field is blank.

use crate::core::string::is_blank;
use serde::{Deserialize, Serialize};

/// Vocal-mix order form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocalMixForm {
    pub name: String,
    pub email: String,
    /// Link to the video/audio to mix (required)
    pub video_url: String,
    pub other_requests: String,
}

impl VocalMixForm {
    pub fn new(name: impl Into<String>, video_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            video_url: video_url.into(),
            ..Default::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_other_requests(mut self, requests: impl Into<String>) -> Self {
        self.other_requests = requests.into();
        self
    }

    /// Names of required fields that are still blank.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.name) {
            missing.push("name");
        }
        if is_blank(&self.video_url) {
            missing.push("video_url");
        }
        missing
    }
}

/// One page of a requested website.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSpec {
    pub name: String,
    pub content: String,
}

impl PageSpec {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// A page with neither name nor content is left out of the summary.
    pub fn is_empty(&self) -> bool {
        is_blank(&self.name) && is_blank(&self.content)
    }
}

/// Web-create order form.
///
/// `pages` always holds at least one entry; an empty list deserializes to a
/// single empty page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebCreateForm {
    pub name: String,
    pub email: String,
    pub contact_info: String,
    /// What the site is for (required)
    pub site_overview: String,
    #[serde(deserialize_with = "deserialize_pages")]
    pub pages: Vec<PageSpec>,
    pub deadline: String,
    pub budget: String,
}

impl Default for WebCreateForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            contact_info: String::new(),
            site_overview: String::new(),
            pages: vec![PageSpec::default()],
            deadline: String::new(),
            budget: String::new(),
        }
    }
}

impl WebCreateForm {
    pub fn new(name: impl Into<String>, site_overview: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            site_overview: site_overview.into(),
            ..Default::default()
        }
    }

    /// Replace the page list. An empty list becomes one empty page.
    pub fn with_pages(mut self, pages: Vec<PageSpec>) -> Self {
        self.pages = non_empty(pages);
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = deadline.into();
        self
    }

    pub fn with_budget(mut self, budget: impl Into<String>) -> Self {
        self.budget = budget.into();
        self
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Names of required fields that are still blank.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.name) {
            missing.push("name");
        }
        if is_blank(&self.site_overview) {
            missing.push("site_overview");
        }
        missing
    }
}

fn non_empty(pages: Vec<PageSpec>) -> Vec<PageSpec> {
    if pages.is_empty() {
        vec![PageSpec::default()]
    } else {
        pages
    }
}

fn deserialize_pages<'de, D>(deserializer: D) -> Result<Vec<PageSpec>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Vec::<PageSpec>::deserialize(deserializer).map(non_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_form_default_has_one_page() {
        let form = WebCreateForm::default();
        assert_eq!(form.page_count(), 1);
        assert!(form.pages[0].is_empty());
    }

    #[test]
    fn test_with_pages_never_empty() {
        let form = WebCreateForm::new("A", "B").with_pages(vec![]);
        assert_eq!(form.page_count(), 1);
    }

    #[test]
    fn test_deserialize_empty_pages() {
        let form: WebCreateForm =
            serde_json::from_str(r#"{"name": "A", "site_overview": "B", "pages": []}"#).unwrap();
        assert_eq!(form.page_count(), 1);
    }

    #[test]
    fn test_deserialize_missing_pages() {
        let form: WebCreateForm = serde_json::from_str(r#"{"name": "A"}"#).unwrap();
        assert_eq!(form.page_count(), 1);
    }

    #[test]
    fn test_missing_required() {
        assert_eq!(VocalMixForm::default().missing_required(), vec!["name", "video_url"]);
        assert!(VocalMixForm::new("A", "https://a.b").missing_required().is_empty());
        assert_eq!(
            WebCreateForm::new("A", " ").missing_required(),
            vec!["site_overview"]
        );
    }

    #[test]
    fn test_page_is_empty() {
        assert!(PageSpec::new(" ", "").is_empty());
        assert!(!PageSpec::new("", "会社概要").is_empty());
    }
}
