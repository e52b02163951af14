//! Search request construction for "popular repositories created this week".

use chrono::{Days, NaiveDate};
use url::Url;

use crate::{FailureKind, FetchError};

/// How far back the `created:>` qualifier reaches.
pub const LOOKBACK_DAYS: u64 = 7;

/// The date exactly one lookback window before `today`.
pub fn created_after(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_days(Days::new(LOOKBACK_DAYS))
        .unwrap_or(NaiveDate::MIN)
}

/// Search qualifier for repositories created strictly after `date`.
pub fn search_query(date: NaiveDate) -> String {
    format!("created:>{}", date.format("%Y-%m-%d"))
}

/// Builds `{base}/search/repositories?q=created:>DATE&sort=stars&order=desc`.
pub fn search_url(api_base_url: &str, created_after: NaiveDate) -> Result<Url, FetchError> {
    let mut base = Url::parse(api_base_url)
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    let mut url = base
        .join("search/repositories")
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    url.query_pairs_mut()
        .append_pair("q", &search_query(created_after))
        .append_pair("sort", "stars")
        .append_pair("order", "desc");
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn lookback_crosses_month_and_year() {
        assert_eq!(created_after(date(2024, 3, 5)), date(2024, 2, 27));
        assert_eq!(created_after(date(2025, 1, 3)), date(2024, 12, 27));
    }

    #[test]
    fn query_is_zero_padded() {
        assert_eq!(search_query(date(2024, 2, 3)), "created:>2024-02-03");
    }

    #[test]
    fn url_carries_sort_and_order() {
        let url = search_url("https://api.github.com", date(2024, 2, 3)).unwrap();
        assert_eq!(url.path(), "/search/repositories");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "created:>2024-02-03".to_string()),
                ("sort".to_string(), "stars".to_string()),
                ("order".to_string(), "desc".to_string()),
            ]
        );
    }

    #[test]
    fn url_keeps_base_path_prefix() {
        let url = search_url("http://127.0.0.1:9000/api/v3", date(2024, 2, 3)).unwrap();
        assert_eq!(url.path(), "/api/v3/search/repositories");
    }

    #[test]
    fn invalid_base_is_rejected() {
        let err = search_url("not a url", date(2024, 2, 3)).unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidUrl);
    }
}
