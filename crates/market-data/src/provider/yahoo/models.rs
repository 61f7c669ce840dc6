use serde::Deserialize;

/// Top-level envelope of the Yahoo quoteSummary endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResponse {
    pub quote_summary: QuoteSummary,
}

/// Result container. The API also carries an `error` field here; failures
/// are detected through HTTP status and empty result lists instead.
#[derive(Debug, Deserialize)]
pub struct QuoteSummary {
    #[serde(default)]
    pub result: Vec<QuoteSummaryResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResult {
    pub price: Option<PriceModule>,
}

/// Subset of the `price` module with the fields the provider reads.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceModule {
    pub currency: Option<String>,
    pub regular_market_open: Option<PriceDetail>,
    pub regular_market_previous_close: Option<PriceDetail>,
}

/// Yahoo wraps each numeric field in an object with `raw` and `fmt`
/// variants. Only `raw` is read.
#[derive(Debug, Deserialize)]
pub struct PriceDetail {
    pub raw: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_price_module() {
        let json = r#"{
            "quoteSummary": {
                "result": [
                    {
                        "price": {
                            "currency": "USD",
                            "regularMarketOpen": {"raw": 101.5, "fmt": "101.50"},
                            "regularMarketPreviousClose": {"raw": 100.0, "fmt": "100.00"}
                        }
                    }
                ],
                "error": null
            }
        }"#;

        let response: QuoteSummaryResponse = serde_json::from_str(json).unwrap();
        let price = response.quote_summary.result[0].price.as_ref().unwrap();
        assert_eq!(price.currency.as_deref(), Some("USD"));
        assert_eq!(price.regular_market_open.as_ref().unwrap().raw, Some(101.5));
        assert_eq!(
            price.regular_market_previous_close.as_ref().unwrap().raw,
            Some(100.0)
        );
    }

    #[test]
    fn test_deserialize_empty_detail_objects() {
        let json = r#"{
            "quoteSummary": {
                "result": [
                    {
                        "price": {
                            "currency": null,
                            "regularMarketOpen": {},
                            "regularMarketPreviousClose": {"raw": null}
                        }
                    }
                ]
            }
        }"#;

        let response: QuoteSummaryResponse = serde_json::from_str(json).unwrap();
        let price = response.quote_summary.result[0].price.as_ref().unwrap();
        assert!(price.currency.is_none());
        assert_eq!(price.regular_market_open.as_ref().unwrap().raw, None);
        assert_eq!(price.regular_market_previous_close.as_ref().unwrap().raw, None);
    }

    #[test]
    fn test_deserialize_empty_result_list() {
        let json = r#"{"quoteSummary": {"result": []}}"#;
        let response: QuoteSummaryResponse = serde_json::from_str(json).unwrap();
        assert!(response.quote_summary.result.is_empty());
    }
}
