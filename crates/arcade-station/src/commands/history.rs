//! # History Commands
//!
//! Read-only queries over the checkout history log: the history screen's
//! free-text search, calendar-day filter and summary tiles. Pure reads;
//! no command here can create, edit or drop a record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use arcade_core::{CheckoutRecord, LogSummary};

use crate::error::ApiError;
use crate::state::CafeState;

/// One history screenful: the filtered records plus their aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryView {
    pub records: Vec<CheckoutRecord>,
    pub summary: LogSummary,
}

/// All history, newest first, with overall totals.
pub fn list_history(state: &CafeState) -> HistoryView {
    debug!("list_history command");
    state.with_cafe(|cafe| HistoryView {
        records: cafe.history().iter().cloned().collect(),
        summary: LogSummary::of(cafe.history().iter()),
    })
}

/// Filtered history. The term matches customer name, phone or room name
/// case-insensitively; `day` is an ISO date (`2024-03-01`) compared
/// against the checkout end time in UTC.
pub fn search_history(
    state: &CafeState,
    term: String,
    day: Option<String>,
) -> Result<HistoryView, ApiError> {
    debug!(term = %term, day = ?day, "search_history command");

    let day = day
        .map(|raw| {
            raw.parse::<NaiveDate>()
                .map_err(|_| ApiError::validation(format!("invalid date: {raw}")))
        })
        .transpose()?;

    Ok(state.with_cafe(|cafe| {
        let records: Vec<CheckoutRecord> =
            cafe.history().filtered(&term, day).cloned().collect();
        let summary = LogSummary::of(records.iter());
        HistoryView { records, summary }
    }))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, ManualClock};
    use crate::error::ErrorCode;
    use arcade_core::Guest;
    use chrono::{Duration, TimeZone, Utc};
    use std::sync::Arc;

    fn state_with_history() -> CafeState {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap();
        let clock = Arc::new(ManualClock::at(start));
        let state = CafeState::with_clock(clock.clone());

        state.with_cafe_mut(|cafe| {
            cafe.book(1, Guest::walk_in("01001234567"), clock.now())?;
            cafe.book(6, Guest::walk_in("01207654321"), clock.now())?;
            Ok::<(), arcade_core::CoreError>(())
        })
        .unwrap();

        clock.advance(Duration::hours(1));
        state.with_cafe_mut(|cafe| cafe.checkout(1, clock.now())).unwrap();

        clock.advance(Duration::days(1));
        state.with_cafe_mut(|cafe| cafe.checkout(6, clock.now())).unwrap();

        state
    }

    #[test]
    fn test_list_history_newest_first_with_totals() {
        let state = state_with_history();
        let view = list_history(&state);

        assert_eq!(view.records.len(), 2);
        assert_eq!(view.records[0].room_id, 6); // newest first
        assert_eq!(view.summary.sessions, 2);
        // Room 1: 1h PS5 at 40. Room 6: 25h Billiards at 50.
        assert_eq!(view.summary.revenue_total.units(), 40 + 25 * 50);
    }

    #[test]
    fn test_search_by_term_and_day() {
        let state = state_with_history();

        let by_phone = search_history(&state, "0120".to_string(), None).unwrap();
        assert_eq!(by_phone.records.len(), 1);
        assert_eq!(by_phone.records[0].room_id, 6);

        let by_day = search_history(&state, String::new(), Some("2024-03-01".to_string()))
            .unwrap();
        assert_eq!(by_day.records.len(), 1);
        assert_eq!(by_day.records[0].room_id, 1);
        assert_eq!(by_day.summary.revenue_total.units(), 40);
    }

    #[test]
    fn test_search_rejects_bad_date() {
        let state = state_with_history();
        let err = search_history(&state, String::new(), Some("03/01/2024".to_string()))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
