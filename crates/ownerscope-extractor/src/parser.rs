//! Structured extraction engine
//!
//! Recovers a [`CompanyRecord`] from cleaned reply text through three
//! escalating strategies, first match wins:
//!
//! 1. Whole-text JSON object parse
//! 2. JSON located inside fenced code blocks or brace-delimited substrings
//! 3. Keyword-anchored text scraping
//!
//! The engine never errors; replies that defeat all three strategies yield
//! a degraded placeholder record.

use crate::types::Extraction;
use ownerscope_domain::{
    CompanyRecord, ExecutiveInfo, Management, Owner, NO_DESCRIPTION, UNKNOWN_COMPANY,
};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

// Owner name captures at this length or beyond are mismatches, not names.
const MAX_SCRAPED_NAME_LEN: usize = 100;

static RE_FENCED_JSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json\s*(\{.*?\})\s*```").unwrap());
static RE_FENCED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```\s*(\{.*?\})\s*```").unwrap());
static RE_BRACED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)(\{.*\})").unwrap());

fn keyword_patterns(keywords: &[&str]) -> Vec<Regex> {
    keywords
        .iter()
        .map(|k| {
            Regex::new(&format!(r"(?i){}[:\s]+([^\n\r.]+)", regex::escape(k)))
                .expect("keyword pattern")
        })
        .collect()
}

static NAME_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| keyword_patterns(&["company name", "name"]));
static DESCRIPTION_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| keyword_patterns(&["description", "about", "what"]));
static INDUSTRY_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| keyword_patterns(&["industry", "sector"]));
static FOUNDED_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| keyword_patterns(&["founded", "established", "year"]));
static HEADQUARTERS_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| keyword_patterns(&["headquarters", "location", "based"]));
static MANAGEMENT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    keyword_patterns(&["management", "leadership", "executive", "board of directors"])
});

static OWNER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)founders?[:\s]+([^\n\r.]+)",
        r"(?i)owners?[:\s]+([^\n\r.]+)",
        r"(?i)CEO[:\s]+([^\n\r.]+)",
        r"(?i)founded by[:\s]+([^\n\r.]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("owner pattern"))
    .collect()
});

/// Run the extraction engine over cleaned reply text.
///
/// `website_url` is carried into the record verbatim; the reply never
/// overrides it. Empty content yields the degraded variant; everything
/// else yields an extracted record, however sparse.
pub fn parse_company_info(content: &str, website_url: &str) -> Extraction {
    if content.trim().is_empty() {
        let reason = "response content is empty".to_string();
        let record =
            CompanyRecord::degraded(website_url, format!("Error parsing response: {reason}"));
        return Extraction::Degraded { record, reason };
    }

    match extract_json_from_text(content) {
        Some(json) => Extraction::Extracted(structure_company_data(&json, website_url)),
        None => Extraction::Extracted(parse_text_response(content, website_url)),
    }
}

/// Parse a second-pass owners reply.
///
/// Restricted to the `owners` and `management` keys when a JSON object with
/// an `owners` key is recoverable; otherwise falls back to owner text
/// scraping (which never yields management data).
pub fn parse_owners_response(content: &str) -> (Vec<Owner>, Option<Management>) {
    if content.trim().is_empty() {
        return (Vec::new(), None);
    }

    match extract_json_from_text(content) {
        Some(json) if json.contains_key("owners") => (
            map_owner_entries(json.get("owners")),
            map_management(json.get("management")),
        ),
        _ => (scrape_owners(content), None),
    }
}

/// Locate a JSON object in text that may contain additional content.
///
/// Tries the whole text first, then fenced-json blocks, then untagged
/// fences, then any brace-delimited substring. Candidates are trimmed to
/// their last closing brace to discard trailing prose; within each pattern
/// every match is tried before moving to the next pattern.
fn extract_json_from_text(text: &str) -> Option<Map<String, Value>> {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(text.trim()) {
        return Some(map);
    }

    for pattern in [&*RE_FENCED_JSON, &*RE_FENCED, &*RE_BRACED] {
        for caps in pattern.captures_iter(text) {
            let candidate = caps[1].trim();
            let candidate = match candidate.rfind('}') {
                Some(idx) => &candidate[..=idx],
                None => candidate,
            };
            if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(candidate) {
                return Some(map);
            }
        }
    }

    None
}

/// Map a recovered JSON object into the record shape.
fn structure_company_data(json: &Map<String, Value>, website_url: &str) -> CompanyRecord {
    let mut record = CompanyRecord::new(
        value_to_string(json.get("company_name"))
            .unwrap_or_else(|| UNKNOWN_COMPANY.to_string()),
        website_url,
        value_to_string(json.get("description")).unwrap_or_else(|| NO_DESCRIPTION.to_string()),
    );

    record.owners = map_owner_entries(json.get("owners"));
    record.management = map_management(json.get("management"));
    record.industry = value_to_string(json.get("industry"));
    record.founded_year = value_to_string(json.get("founded_year"));
    record.headquarters = value_to_string(json.get("headquarters"));
    record
}

fn map_owner_entries(value: Option<&Value>) -> Vec<Owner> {
    let Some(Value::Array(entries)) = value else {
        return Vec::new();
    };

    let mut owners = Vec::new();
    for entry in entries {
        match entry {
            Value::Object(obj) => {
                // Entries whose resolved name is absent, empty, or the
                // placeholder are dropped entirely
                match value_to_string(obj.get("name")) {
                    Some(name) if name != UNKNOWN_COMPANY => owners.push(Owner {
                        name,
                        title: value_to_string(obj.get("title")),
                        ownership_percentage: value_to_string(obj.get("ownership_percentage")),
                    }),
                    _ => {}
                }
            }
            // Bare strings are taken as names, unfiltered
            Value::String(name) => owners.push(Owner::named(name.clone())),
            _ => {}
        }
    }
    owners
}

fn map_management(value: Option<&Value>) -> Option<Management> {
    let Some(Value::Object(obj)) = value else {
        return None;
    };

    let management = Management {
        ceo: obj.get("ceo").and_then(map_executive),
        cfo: obj.get("cfo").and_then(map_executive),
        coo: obj.get("coo").and_then(map_executive),
        note: None,
    };

    if management.is_empty() {
        None
    } else {
        Some(management)
    }
}

fn map_executive(value: &Value) -> Option<ExecutiveInfo> {
    match value {
        Value::Object(obj) => {
            let info = ExecutiveInfo {
                name: value_to_string(obj.get("name")),
                title: value_to_string(obj.get("title")),
            };
            if info.name.is_none() && info.title.is_none() {
                None
            } else {
                Some(info)
            }
        }
        Value::String(name) if !name.trim().is_empty() => Some(ExecutiveInfo {
            name: Some(name.clone()),
            title: None,
        }),
        // null, false, and other falsy sub-keys are skipped
        _ => None,
    }
}

/// Coerce a scalar JSON value to a non-empty string.
///
/// Models routinely emit numbers where the record expects strings
/// (`"founded_year": 2020`); those are stringified.
fn value_to_string(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Keyword-anchored scraping over plain text, the strategy of last resort.
fn parse_text_response(text: &str, website_url: &str) -> CompanyRecord {
    let mut record = CompanyRecord::new(
        scan_labeled_field(text, &NAME_PATTERNS).unwrap_or_else(|| UNKNOWN_COMPANY.to_string()),
        website_url,
        scan_labeled_field(text, &DESCRIPTION_PATTERNS)
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
    );

    record.owners = scrape_owners(text);
    record.management = scrape_management_note(text).map(|note| Management {
        note: Some(note),
        ..Default::default()
    });
    record.industry = scan_labeled_field(text, &INDUSTRY_PATTERNS);
    record.founded_year = scan_labeled_field(text, &FOUNDED_PATTERNS);
    record.headquarters = scan_labeled_field(text, &HEADQUARTERS_PATTERNS);
    record
}

/// First matching keyword synonym wins; first match in the text wins.
fn scan_labeled_field(text: &str, patterns: &[Regex]) -> Option<String> {
    for pattern in patterns {
        if let Some(caps) = pattern.captures(text) {
            return Some(caps[1].trim().to_string());
        }
    }
    None
}

/// Every match across all four owner keyword patterns is kept, duplicates
/// included.
fn scrape_owners(text: &str) -> Vec<Owner> {
    let mut owners = Vec::new();
    for pattern in OWNER_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let name = caps[1].trim();
            if !name.is_empty() && name.chars().count() < MAX_SCRAPED_NAME_LEN {
                owners.push(Owner::named(name));
            }
        }
    }
    owners
}

/// Weak heuristic: the first leadership-keyword match becomes a free-text
/// note, not a structured executive.
fn scrape_management_note(text: &str) -> Option<String> {
    for pattern in MANAGEMENT_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            let note = caps[1].trim();
            if !note.is_empty() && note.chars().count() < MAX_SCRAPED_NAME_LEN {
                return Some(note.to_string());
            }
        }
    }
    None
}
