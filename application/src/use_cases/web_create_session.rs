//! Web-create quote session
//!
//! Holds the form for one website request. The estimate is the page count
//! times the configured per-page price, recomputed on every call.

use super::shared::{SubmitError, send_summary};
use crate::config::PricingConfig;
use crate::ports::order_submitter::{OrderSubmitter, SubmissionReceipt};
use quote_domain::{
    ContactMethod, PageSpec, Service, WebCreateForm, generate_web_create_summary,
    web_create_estimate,
};
use thiserror::Error;
use tracing::debug;

/// Errors from editing the page list
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PageEditError {
    #[error("Page {index} does not exist ({count} pages)")]
    OutOfRange { index: usize, count: usize },

    #[error("A site needs at least one page")]
    LastPage,
}

/// State of one web-create form-filling session.
#[derive(Debug, Clone)]
pub struct WebCreateSession {
    price_per_page: u64,
    form: WebCreateForm,
}

impl WebCreateSession {
    pub fn new(pricing: PricingConfig) -> Self {
        Self {
            price_per_page: pricing.web_create_per_page,
            form: WebCreateForm::default(),
        }
    }

    pub fn form(&self) -> &WebCreateForm {
        &self.form
    }

    pub fn price_per_page(&self) -> u64 {
        self.price_per_page
    }

    /// Replace the form. An empty page list becomes one empty page.
    pub fn set_form(&mut self, form: WebCreateForm) {
        self.form = form;
        self.ensure_page();
    }

    /// Edit the form in place. A page list left empty by `edit` becomes one
    /// empty page again.
    pub fn edit_form(&mut self, edit: impl FnOnce(&mut WebCreateForm)) {
        edit(&mut self.form);
        self.ensure_page();
    }

    /// Append an empty page and return its index.
    pub fn add_page(&mut self) -> usize {
        self.form.pages.push(PageSpec::default());
        debug!(pages = self.form.pages.len(), "Page added");
        self.form.pages.len() - 1
    }

    /// Remove a page. The last remaining page cannot be removed.
    pub fn remove_page(&mut self, index: usize) -> Result<PageSpec, PageEditError> {
        self.check_index(index)?;
        if self.form.pages.len() == 1 {
            return Err(PageEditError::LastPage);
        }
        let removed = self.form.pages.remove(index);
        debug!(pages = self.form.pages.len(), "Page removed");
        Ok(removed)
    }

    pub fn update_page(&mut self, index: usize, page: PageSpec) -> Result<(), PageEditError> {
        self.check_index(index)?;
        self.form.pages[index] = page;
        Ok(())
    }

    pub fn estimate(&self) -> u64 {
        web_create_estimate(self.form.page_count(), self.price_per_page)
    }

    /// Current summary; empty while name or site overview is blank.
    pub fn summary(&self, contact: &ContactMethod) -> String {
        generate_web_create_summary(
            &self.form,
            contact,
            Some(self.estimate()),
            self.price_per_page,
        )
    }

    pub fn is_ready(&self) -> bool {
        !self.summary(&ContactMethod::Email).is_empty()
    }

    pub fn reset(&mut self) {
        self.form = WebCreateForm::default();
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
            Service::WebCreate,
            &self.form.name,
            &self.form.email,
            summary,
        )
        .await?;
        self.reset();
        Ok(receipt)
    }

    fn ensure_page(&mut self) {
        if self.form.pages.is_empty() {
            self.form.pages.push(PageSpec::default());
        }
    }

    fn check_index(&self, index: usize) -> Result<(), PageEditError> {
        let count = self.form.pages.len();
        if index >= count {
            return Err(PageEditError::OutOfRange { index, count });
        }
        Ok(())
    }
}
