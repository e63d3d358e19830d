//! Prompt construction for the two remote queries

const COMPANY_KEYS: &str = r#"Please format the response as a JSON object with these exact keys:
- company_name
- description
- owners (array of objects with name, title, ownership_percentage)
- management (object with ceo, cfo, coo sub-objects, each with name and title)
- industry
- founded_year
- headquarters"#;

const OWNER_KEYS: &str = r#"Please provide the response in JSON format with these exact keys:
- owners (array of objects with name, title, ownership_percentage if known)

Each owner object should include:
- name: Full name of the owner/founder
- title: Their role/title (Founder, Owner, Major Shareholder, etc.)
- ownership_percentage: Their ownership stake if publicly known (or null if unknown)"#;

/// Build the general company-information prompt for a website URL.
///
/// Requests every field of the record shape and instructs the model to
/// reply with a single JSON object, using `null` for unknown fields.
pub fn company_prompt(website_url: &str) -> String {
    format!(
        r#"Please analyze the company website at {website_url}, then find and provide the following information in JSON format:

1. Company name
2. Brief description of what the company does (1-2 sentences)
3. List of owners/founders with their names and titles
4. Management (CEO, CFO, COO names and titles)
5. Industry/sector
6. Year founded (if available)
7. Headquarters location (if available)

{COMPANY_KEYS}

If any information is not available, use null for that field. Respond with a single JSON object. Focus on publicly available information about ownership, leadership, and company details."#
    )
}

/// Build the narrow owners-only follow-up prompt for a company name.
///
/// Used only when the first pass recovered no owners.
pub fn owners_prompt(company_name: &str) -> String {
    format!(
        r#"Find the owner of {company_name}.

{OWNER_KEYS}

If you cannot find specific ownership information, please indicate that in the response. Focus only on actual ownership, not just management positions."#
    )
}
