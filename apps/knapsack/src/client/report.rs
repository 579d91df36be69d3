//! Results summary: re-posts the solve payload to `/results` and formats the
//! totals for display.

use serde_json::Value;

use crate::client::api::KnapsackApi;
use crate::client::errors::ClientError;
use crate::input::parse_positive_numbers;
use crate::models::{ResultsRequest, ResultsResponse};

/// Parses the (already validated) field text and asks the server for totals.
pub async fn fetch_results(
    api: &dyn KnapsackApi,
    data: Value,
    values_text: &str,
    volumes_text: &str,
) -> Result<ResultsResponse, ClientError> {
    let request = ResultsRequest {
        data,
        values: parse_positive_numbers(values_text)?,
        volumes: parse_positive_numbers(volumes_text)?,
    };
    api.results(&request).await
}

/// Fixed three-line summary. Items are numbered from 1.
pub fn format_summary(results: &ResultsResponse) -> String {
    let items = if results.items.is_empty() {
        "none".to_string()
    } else {
        results
            .items
            .iter()
            .map(|i| (i + 1).to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "Chosen items: {items}\nTotal value: {}\nTotal volume: {}",
        results.value, results.volume
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_summary() {
        let results = ResultsResponse {
            items: vec![0, 2],
            value: 220.0,
            volume: 5.0,
        };
        assert_eq!(
            format_summary(&results),
            "Chosen items: 1, 3\nTotal value: 220\nTotal volume: 5"
        );
    }

    #[test]
    fn test_format_summary_empty_selection() {
        let results = ResultsResponse {
            items: vec![],
            value: 0.0,
            volume: 0.0,
        };
        assert_eq!(
            format_summary(&results),
            "Chosen items: none\nTotal value: 0\nTotal volume: 0"
        );
    }

    #[test]
    fn test_format_summary_keeps_fractions() {
        let results = ResultsResponse {
            items: vec![1],
            value: 2.5,
            volume: 0.75,
        };
        assert!(format_summary(&results).ends_with("Total value: 2.5\nTotal volume: 0.75"));
    }
}
