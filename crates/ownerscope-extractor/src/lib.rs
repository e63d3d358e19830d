//! Ownerscope Extractor
//!
//! Turns unreliable model replies about a company into a normalized
//! [`CompanyRecord`](ownerscope_domain::CompanyRecord).
//!
//! # Overview
//!
//! The extractor owns the whole question-to-record pipeline: it builds the
//! company and owners prompts, cleans the reply text, recovers a record
//! through three escalating strategies (whole-text JSON parse, fenced or
//! embedded JSON, keyword text scraping), and conditionally issues a
//! narrower owners-only follow-up query whose results are merged into the
//! first-pass record.
//!
//! # Architecture
//!
//! ```text
//! URL → prompt → CompletionProvider → clean → parse ┬→ Extraction
//!                                                   └→ owners follow-up → merge
//! ```
//!
//! # Key Features
//!
//! - **Layered recovery**: direct JSON, embedded JSON, then regex scraping
//! - **Never fails outright**: unparseable replies yield a degraded record
//!   with a diagnostic description instead of an error
//! - **Best-effort second pass**: follow-up failures are logged and ignored
//!
//! # Example Usage
//!
//! ```no_run
//! use ownerscope_extractor::{FinderConfig, OwnerFinder};
//! use ownerscope_llm::PerplexityProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = PerplexityProvider::new("pplx-...");
//! let finder = OwnerFinder::new(provider, FinderConfig::default());
//!
//! let extraction = finder.find("https://example.com").await?;
//! let record = extraction.record();
//!
//! println!("{}: {} owner(s)", record.company_name, record.owners.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod cleaner;
mod config;
mod error;
mod finder;
mod merge;
mod parser;
mod prompt;
mod types;

#[cfg(test)]
mod tests;

pub use cleaner::clean_content;
pub use config::FinderConfig;
pub use error::FinderError;
pub use finder::OwnerFinder;
pub use parser::{parse_company_info, parse_owners_response};
pub use prompt::{company_prompt, owners_prompt};
pub use types::Extraction;
