//! # Checkout History Log
//!
//! Append-only record of completed sessions, newest first.
//!
//! The core never edits or removes an entry once recorded; the log is pure
//! history and drives no further state transitions. The read side offers
//! the filters and aggregates the history screen shows: free-text search,
//! a calendar-day filter and revenue/session/drink totals. Filtering never
//! synthesizes or drops an entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::CheckoutRecord;

// =============================================================================
// Checkout Log
// =============================================================================

/// Completed sessions, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutLog {
    records: Vec<CheckoutRecord>,
}

impl CheckoutLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        CheckoutLog {
            records: Vec::new(),
        }
    }

    /// Prepends a completed session. Records are immutable from here on.
    pub fn record(&mut self, record: CheckoutRecord) {
        self.records.insert(0, record);
    }

    /// All records, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &CheckoutRecord> {
        self.records.iter()
    }

    /// The most recent checkout, if any.
    pub fn latest(&self) -> Option<&CheckoutRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching a free-text term and/or a calendar day (UTC, by
    /// end time), newest first.
    ///
    /// The term matches case-insensitively against the customer name, the
    /// phone number and the room name. An empty term matches everything.
    pub fn filtered<'a>(
        &'a self,
        term: &'a str,
        day: Option<NaiveDate>,
    ) -> impl Iterator<Item = &'a CheckoutRecord> {
        let needle = term.trim().to_lowercase();

        self.records.iter().filter(move |record| {
            let text_match = needle.is_empty()
                || record
                    .customer_name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&needle))
                || record.phone.contains(&needle)
                || record.room_name.to_lowercase().contains(&needle);

            let day_match = day.is_none_or(|d| record.ended_at.date_naive() == d);

            text_match && day_match
        })
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Aggregates over a set of checkout records (the history screen tiles).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LogSummary {
    /// Sum of final totals.
    pub revenue_total: Money,

    /// Number of completed sessions.
    pub sessions: usize,

    /// Sum of drink quantities across all orders.
    pub drinks_ordered: i64,
}

impl LogSummary {
    /// Summarizes any iterator of records (typically `CheckoutLog::filtered`).
    pub fn of<'a>(records: impl Iterator<Item = &'a CheckoutRecord>) -> Self {
        let mut summary = LogSummary::default();
        for record in records {
            summary.revenue_total += record.total;
            summary.sessions += 1;
            summary.drinks_ordered += record.orders.iter().map(|o| o.quantity).sum::<i64>();
        }
        summary
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
