// Field extraction from attendance document text.
//
// Purpose
// - Pick the five labelled punch fields out of text already extracted from a scanned document.
// - Convert the extracted `DD/MM/YYYY` date into the ISO form a PunchEvent carries.
//
// Boundaries
// - Turning a binary document into text happens upstream.
// - Missing labels become `None`; deciding which fields are required is left to RecordPunch.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::modules::attendance::core::calendar::to_iso_date;
use crate::modules::attendance::core::validation::ValidationError;
use crate::modules::attendance::use_cases::record_punch::command::PunchEvent;

static EMPLOYEE_ID: LazyLock<Regex> = LazyLock::new(|| pattern(r"ID:\s*(\d+)"));
static EMPLOYEE_NAME: LazyLock<Regex> = LazyLock::new(|| pattern(r"Nome do colaborador:\s*(.+)"));
static TAX_ID: LazyLock<Regex> = LazyLock::new(|| pattern(r"CPF:\s*(\d+)"));
static DATE: LazyLock<Regex> = LazyLock::new(|| pattern(r"Data:\s*(\d{2}/\d{2}/\d{4})"));
static TIME: LazyLock<Regex> = LazyLock::new(|| pattern(r"Hora:\s*(\d{2}:\d{2}:\d{2})"));

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("extraction patterns are valid")
}

/// The punch fields as handed over by extraction. The date is `DD/MM/YYYY`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedPunch {
    pub employee_id: Option<String>,
    pub employee_name: Option<String>,
    pub tax_id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

impl ExtractedPunch {
    /// Rewrites the date to ISO. A missing date stays missing.
    pub fn into_event(self) -> Result<PunchEvent, ValidationError> {
        let date = self
            .date
            .filter(|d| !d.trim().is_empty())
            .map(|d| to_iso_date(&d))
            .transpose()?;
        Ok(PunchEvent {
            employee_id: self.employee_id,
            employee_name: self.employee_name,
            tax_id: self.tax_id,
            date,
            time: self.time,
        })
    }
}

pub fn extract_punch(text: &str) -> ExtractedPunch {
    ExtractedPunch {
        employee_id: capture(&EMPLOYEE_ID, text),
        employee_name: capture(&EMPLOYEE_NAME, text),
        tax_id: capture(&TAX_ID, text),
        date: capture(&DATE, text),
        time: capture(&TIME, text),
    }
}

fn capture(regex: &Regex, text: &str) -> Option<String> {
    regex
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
}
