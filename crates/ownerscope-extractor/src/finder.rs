//! Core OwnerFinder implementation

use crate::cleaner::clean_content;
use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::merge::apply_followup;
use crate::parser::{parse_company_info, parse_owners_response};
use crate::prompt::{company_prompt, owners_prompt};
use crate::types::Extraction;
use ownerscope_domain::is_supported_url;
use ownerscope_domain::traits::CompletionProvider;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// The OwnerFinder sequences the full question-to-record pipeline
///
/// One instance per execution context; the provider (and with it the
/// credential) is an explicit constructor input, never process-wide state.
pub struct OwnerFinder<P>
where
    P: CompletionProvider,
{
    provider: Arc<P>,
    config: FinderConfig,
}

impl<P> OwnerFinder<P>
where
    P: CompletionProvider + Send + Sync + 'static,
    P::Error: std::fmt::Display,
{
    /// Create a new OwnerFinder
    pub fn new(provider: P, config: FinderConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            config,
        }
    }

    /// Find company owners and information for a website URL.
    ///
    /// Fails with [`FinderError::InvalidUrl`] before any remote call when
    /// the URL lacks an accepted scheme. Remote-call and envelope failures
    /// on the mandatory first query are wrapped into
    /// [`FinderError::OperationFailed`]. Parse trouble never fails the
    /// operation; it degrades into the returned record.
    pub async fn find(&self, website_url: &str) -> Result<Extraction, FinderError> {
        if !is_supported_url(website_url) {
            return Err(FinderError::InvalidUrl(website_url.to_string()));
        }

        info!("Analyzing company website {}", website_url);

        let prompt = company_prompt(website_url);
        let content = self
            .call_provider(&prompt)
            .await
            .map_err(FinderError::OperationFailed)?;

        debug!("Reply length: {} chars", content.len());

        let cleaned = clean_content(&content);
        let mut extraction = parse_company_info(&cleaned, website_url);

        if self.config.second_pass && self.needs_followup(&extraction) {
            self.run_followup(&mut extraction).await;
        }

        info!(
            "Extraction complete for {}: {} owner(s){}",
            website_url,
            extraction.record().owners.len(),
            if extraction.is_degraded() {
                " (degraded)"
            } else {
                ""
            }
        );

        Ok(extraction)
    }

    /// The follow-up only runs when the first pass found no owners but did
    /// recover a usable company name to ask about.
    fn needs_followup(&self, extraction: &Extraction) -> bool {
        let record = extraction.record();
        !record.has_owners() && record.has_usable_name()
    }

    /// Best-effort second pass; every failure is downgraded to a warning
    /// and the first-pass record is kept unchanged.
    async fn run_followup(&self, extraction: &mut Extraction) {
        let company_name = extraction.record().company_name.clone();
        info!(
            "No owners found in initial search. Searching specifically for {} owners",
            company_name
        );

        let prompt = owners_prompt(&company_name);
        match self.call_provider(&prompt).await {
            Ok(content) => {
                let cleaned = clean_content(&content);
                let (owners, management) = parse_owners_response(&cleaned);
                if owners.is_empty() {
                    info!("No additional owners found in detailed search");
                } else {
                    info!("Found {} owner(s) in detailed search", owners.len());
                }
                apply_followup(extraction.record_mut(), owners, management);
            }
            Err(e) => {
                warn!("Failed to find additional owners: {}", e);
            }
        }
    }

    /// Call the completion provider
    async fn call_provider(&self, prompt: &str) -> Result<String, String> {
        let provider = Arc::clone(&self.provider);
        let prompt = prompt.to_string();

        // Call in a blocking context since CompletionProvider is not async
        let call = tokio::task::spawn_blocking(move || {
            provider.complete(&prompt).map_err(|e| e.to_string())
        });

        timeout(self.config.request_timeout(), call)
            .await
            .map_err(|_| {
                format!(
                    "request timed out after {}s",
                    self.config.request_timeout_secs
                )
            })?
            .map_err(|e| format!("task join error: {}", e))?
    }
}
