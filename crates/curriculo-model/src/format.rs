//! pt-BR date formatting shared by both renderers
//!
//! Dates are stored as ISO `YYYY-MM-DD` strings and rendered as an
//! abbreviated month plus year ("mai. de 2021"), matching the pt-BR
//! locale output of the original interface. Values that do not parse are
//! rendered as-is rather than failing the whole render.

use chrono::{Datelike, NaiveDate};

/// Label rendered for an empty end date
pub const CURRENT_LABEL: &str = "Atual";

/// Abbreviated pt-BR month names, January first
const MONTHS_PT_BR: [&str; 12] = [
    "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.", "nov.", "dez.",
];

/// Format an ISO date string as "mmm. de yyyy"
///
/// An empty input yields an empty string; an unparseable input is returned
/// unchanged.
pub fn format_month_year(iso_date: &str) -> String {
    if iso_date.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(iso_date, "%Y-%m-%d") {
        Ok(date) => {
            let month = MONTHS_PT_BR[date.month0() as usize];
            format!("{} de {}", month, date.year())
        }
        Err(_) => iso_date.to_string(),
    }
}

/// Format a start/end date pair as a display range
///
/// An empty end date renders the "Atual" label; a pair with both dates
/// empty yields an empty string so callers can skip the range entirely.
pub fn format_date_range(start_date: &str, end_date: &str) -> String {
    if start_date.is_empty() && end_date.is_empty() {
        return String::new();
    }
    let end = if end_date.is_empty() {
        CURRENT_LABEL.to_string()
    } else {
        format_month_year(end_date)
    };
    format!("{} - {}", format_month_year(start_date), end)
}
