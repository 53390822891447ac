//! Display Formatting
//!
//! Dates and amounts as shown in forms and the payments table.

use chrono::{DateTime, Local, NaiveDate};

use crate::models::PaymentRecord;

/// Today's date in the `YYYY-MM-DD` form date inputs expect
pub fn today_iso() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// `2025-01-15` → `15 Jan 2025`; anything unparseable is shown as-is
pub fn format_payment_date(raw: &str) -> String {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()));
    match date {
        Some(d) => d.format("%d %b %Y").to_string(),
        None => raw.to_string(),
    }
}

pub fn format_amount(amount: i64) -> String {
    amount.to_string()
}

/// One row of the payments table
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRow {
    pub date: String,
    pub receipt_id: String,
    pub amount: String,
}

impl From<&PaymentRecord> for PaymentRow {
    fn from(record: &PaymentRecord) -> Self {
        Self {
            date: format_payment_date(&record.payment_date),
            receipt_id: record.receipt_id.clone(),
            amount: format_amount(record.payment_amount),
        }
    }
}
