//! Decides when the keyword fallback query is worth issuing.

use chrono::NaiveDate;
use headline_newsapi::RawHeadline;

/// Fewer combined headlines than this triggers the fallback query.
pub const MIN_FRESH_HEADLINES: usize = 10;

/// Returns `true` when the combined top + category results are too thin or
/// too stale.
///
/// Two independent conditions, OR'd:
/// - fewer than [`MIN_FRESH_HEADLINES`] headlines, or
/// - no headline whose `publishedAt` starts with `today` as `YYYY-MM-DD`.
///
/// The date check compares the raw string prefix against the UTC date, so a
/// timestamp rendered in another zone near midnight can be misclassified.
#[must_use]
pub fn needs_fallback(headlines: &[RawHeadline], today: NaiveDate) -> bool {
    if headlines.len() < MIN_FRESH_HEADLINES {
        return true;
    }

    let today = today.format("%Y-%m-%d").to_string();
    !headlines.iter().any(|h| {
        h.published_at
            .as_deref()
            .and_then(|p| p.get(..10))
            .is_some_and(|prefix| prefix == today)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headline(published_at: Option<&str>) -> RawHeadline {
        RawHeadline {
            title: Some("t".to_string()),
            url: Some("https://example.com".to_string()),
            published_at: published_at.map(str::to_string),
            ..RawHeadline::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()
    }

    #[test]
    fn empty_set_needs_fallback() {
        assert!(needs_fallback(&[], today()));
    }

    #[test]
    fn few_results_need_fallback_even_when_fresh() {
        let headlines = vec![headline(Some("2026-01-02T08:00:00Z")); 5];
        assert!(needs_fallback(&headlines, today()));
    }

    #[test]
    fn enough_results_with_one_from_today_skip_fallback() {
        let mut headlines = vec![headline(Some("2026-01-01T08:00:00Z")); 11];
        headlines.push(headline(Some("2026-01-02T00:30:00Z")));
        assert!(!needs_fallback(&headlines, today()));
    }

    #[test]
    fn enough_results_all_stale_need_fallback() {
        let headlines = vec![headline(Some("2026-01-01T23:59:59Z")); 20];
        assert!(needs_fallback(&headlines, today()));
    }

    #[test]
    fn exactly_the_minimum_is_enough() {
        let headlines = vec![headline(Some("2026-01-02T12:00:00Z")); MIN_FRESH_HEADLINES];
        assert!(!needs_fallback(&headlines, today()));
    }

    #[test]
    fn missing_or_short_timestamps_never_count_as_today() {
        let mut headlines = vec![headline(None); 10];
        headlines.push(headline(Some("2026-01")));
        assert!(needs_fallback(&headlines, today()));
    }

    #[test]
    fn offset_timestamps_compare_by_literal_prefix() {
        // 23:30 at -05:00 is already Jan 2 in UTC, but the prefix says Jan 1.
        let headlines = vec![headline(Some("2026-01-01T23:30:00-05:00")); 10];
        assert!(needs_fallback(&headlines, today()));
    }
}
