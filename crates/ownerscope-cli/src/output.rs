//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use ownerscope_domain::{CompanyRecord, Owner};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a finished record for display.
    pub fn format_record(&self, record: &CompanyRecord) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
            OutputFormat::Table => Ok(self.format_record_table(record)),
            OutputFormat::Quiet => Ok(record.company_name.clone()),
        }
    }

    /// Format a record as a two-column field table.
    fn format_record_table(&self, record: &CompanyRecord) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);

        builder.push_record(["Name", &record.company_name]);
        builder.push_record(["Website", &record.website]);

        let owners = if record.owners.is_empty() {
            "Not found".to_string()
        } else {
            record
                .owners
                .iter()
                .map(describe_owner)
                .collect::<Vec<_>>()
                .join("; ")
        };
        builder.push_record(["Owners/Founders", &owners]);

        builder.push_record(["Description", &record.description]);
        builder.push_record([
            "Industry",
            record.industry.as_deref().unwrap_or("Not specified"),
        ]);
        builder.push_record([
            "Founded",
            record.founded_year.as_deref().unwrap_or("Not specified"),
        ]);
        builder.push_record([
            "Headquarters",
            record.headquarters.as_deref().unwrap_or("Not specified"),
        ]);

        let ceo = record
            .management
            .as_ref()
            .and_then(|m| m.ceo.as_ref())
            .map(|ceo| {
                let name = ceo.name.as_deref().unwrap_or("Unknown");
                match ceo.title.as_deref() {
                    Some(title) => format!("{} - {}", name, title),
                    None => name.to_string(),
                }
            })
            .unwrap_or_else(|| "Not found".to_string());
        builder.push_record(["CEO", &ceo]);

        if let Some(note) = record.management.as_ref().and_then(|m| m.note.as_deref()) {
            builder.push_record(["Leadership note", note]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// True when the formatter is in quiet mode.
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("! {}", message), "yellow")
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "red" => text.red().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// One display line per owner: name, optional title, optional stake.
fn describe_owner(owner: &Owner) -> String {
    let mut line = owner.name.clone();
    if let Some(title) = &owner.title {
        line.push_str(&format!(" - {}", title));
    }
    if let Some(stake) = &owner.ownership_percentage {
        line.push_str(&format!(" ({})", stake));
    }
    line
}
