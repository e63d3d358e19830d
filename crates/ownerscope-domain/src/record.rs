//! Record module - the normalized company/ownership structure

use serde::{Deserialize, Serialize};

/// Placeholder name used when a company name cannot be recovered.
pub const UNKNOWN_COMPANY: &str = "Unknown";

/// Placeholder description used when no description was recovered.
pub const NO_DESCRIPTION: &str = "No description available";

/// A single owner or founder of a company.
///
/// The `name` is required and never empty in a mapped record; `title` and
/// `ownership_percentage` are carried through verbatim when the source
/// supplied them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Full name of the owner/founder
    pub name: String,

    /// Role or title (e.g. "Founder", "Major Shareholder")
    pub title: Option<String>,

    /// Ownership stake if publicly known (e.g. "60%")
    pub ownership_percentage: Option<String>,
}

impl Owner {
    /// Create an owner with a name only.
    ///
    /// Used for bare-string owner entries where the source supplied no
    /// title or stake.
    ///
    /// # Examples
    ///
    /// ```
    /// use ownerscope_domain::Owner;
    ///
    /// let owner = Owner::named("Alice Example");
    /// assert_eq!(owner.name, "Alice Example");
    /// assert!(owner.title.is_none());
    /// assert!(owner.ownership_percentage.is_none());
    /// ```
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            ownership_percentage: None,
        }
    }
}

/// Name and title for a single executive slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutiveInfo {
    /// Full name of the executive
    pub name: Option<String>,

    /// Official title (e.g. "Chief Executive Officer")
    pub title: Option<String>,
}

/// The leadership block of a company record.
///
/// Absent from the record (not an empty object) when no slot is populated.
/// `note` holds the degenerate free-text capture of the text-scrape path,
/// which recovers a leadership blurb rather than a structured executive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Management {
    /// Chief executive officer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ceo: Option<ExecutiveInfo>,

    /// Chief financial officer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cfo: Option<ExecutiveInfo>,

    /// Chief operating officer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coo: Option<ExecutiveInfo>,

    /// Free-text leadership capture from the text-scrape fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Management {
    /// True when no slot (including the note) is populated.
    pub fn is_empty(&self) -> bool {
        self.ceo.is_none() && self.cfo.is_none() && self.coo.is_none() && self.note.is_none()
    }

    /// Fill slots that are currently absent from `other`.
    ///
    /// Populated slots are never overwritten. This is the per-slot half of
    /// the second-pass merge policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use ownerscope_domain::{ExecutiveInfo, Management};
    ///
    /// let mut primary = Management {
    ///     ceo: Some(ExecutiveInfo { name: Some("Ada".into()), title: None }),
    ///     ..Default::default()
    /// };
    /// let followup = Management {
    ///     ceo: Some(ExecutiveInfo { name: Some("Eve".into()), title: None }),
    ///     cfo: Some(ExecutiveInfo { name: Some("Bob".into()), title: None }),
    ///     ..Default::default()
    /// };
    ///
    /// primary.fill_missing_from(followup);
    /// assert_eq!(primary.ceo.unwrap().name.as_deref(), Some("Ada"));
    /// assert_eq!(primary.cfo.unwrap().name.as_deref(), Some("Bob"));
    /// ```
    pub fn fill_missing_from(&mut self, other: Management) {
        if self.ceo.is_none() {
            self.ceo = other.ceo;
        }
        if self.cfo.is_none() {
            self.cfo = other.cfo;
        }
        if self.coo.is_none() {
            self.coo = other.coo;
        }
        if self.note.is_none() {
            self.note = other.note;
        }
    }
}

/// The normalized company/ownership record produced by the pipeline.
///
/// Invariants:
/// - `owners` is always present in the serialized form; absent data yields
///   an empty list, never a missing field
/// - `website` is the verbatim input URL, regardless of what the remote
///   source claims
/// - `management`, when present, has at least one populated slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Company name, or [`UNKNOWN_COMPANY`] when unrecoverable
    pub company_name: String,

    /// The original input URL, verbatim
    pub website: String,

    /// Short description, or [`NO_DESCRIPTION`] when unrecoverable
    pub description: String,

    /// Owners/founders in source order; empty when none were found
    #[serde(default)]
    pub owners: Vec<Owner>,

    /// Leadership block, absent when no executive data was found
    pub management: Option<Management>,

    /// Industry or sector
    pub industry: Option<String>,

    /// Founding year as reported by the source
    pub founded_year: Option<String>,

    /// Headquarters location
    pub headquarters: Option<String>,
}

impl CompanyRecord {
    /// Create a record with the required fields and everything else empty.
    pub fn new(
        company_name: impl Into<String>,
        website: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            website: website.into(),
            description: description.into(),
            owners: Vec::new(),
            management: None,
            industry: None,
            founded_year: None,
            headquarters: None,
        }
    }

    /// Create the degraded record returned when every extraction strategy
    /// failed: unknown name, a diagnostic description, empty owners.
    pub fn degraded(website: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(UNKNOWN_COMPANY, website, reason)
    }

    /// True when at least one owner was recovered.
    pub fn has_owners(&self) -> bool {
        !self.owners.is_empty()
    }

    /// True when the company name is usable for a follow-up query, i.e.
    /// non-empty and not the unknown placeholder.
    pub fn has_usable_name(&self) -> bool {
        !self.company_name.is_empty() && self.company_name != UNKNOWN_COMPANY
    }
}

/// Check that a URL uses one of the accepted scheme prefixes.
///
/// # Examples
///
/// ```
/// use ownerscope_domain::is_supported_url;
///
/// assert!(is_supported_url("https://example.com"));
/// assert!(is_supported_url("http://example.com"));
/// assert!(!is_supported_url("ftp://example.com"));
/// assert!(!is_supported_url("example.com"));
/// ```
pub fn is_supported_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
