use tokio::time::Instant;

use crate::config::COINGECKO;
use crate::data::error::MarketDataError;
use crate::data::source::JsonSource;
use crate::domain::Catalog;
use crate::models::{MarketRecord, PriceSnapshotRow};

/// Current USD price for every asset in `catalog`, one request, provider order
/// (market cap descending). No retry: any failure is returned as
/// `MarketDataError::ExternalService`.
pub async fn fetch_current_prices<S: JsonSource + ?Sized>(
    source: &S,
    catalog: &Catalog,
) -> Result<Vec<PriceSnapshotRow>, MarketDataError> {
    let path = COINGECKO.endpoints.markets_path;
    let query = [
        ("vs_currency", COINGECKO.query.vs_currency.to_string()),
        ("ids", catalog.ids_param()),
        ("order", COINGECKO.query.markets_order.to_string()),
    ];
    let context = format!("{} GET {}", source.signature(), path);
    let start_time = Instant::now();

    let body = source
        .get_json(path, &query)
        .await
        .map_err(|e| MarketDataError::external(context.as_str(), e))?;

    let records: Vec<MarketRecord> =
        serde_json::from_value(body).map_err(|e| MarketDataError::external(context.as_str(), e))?;

    log::info!(
        "{} returned {} market records for {} catalog assets in {:?}",
        source.signature(),
        records.len(),
        catalog.len(),
        start_time.elapsed()
    );

    Ok(records.into_iter().map(PriceSnapshotRow::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::error::TransportError;
    use crate::data::source::testing::StubSource;
    use crate::domain::AssetDescriptor;
    use serde_json::json;

    fn btc_only() -> Catalog {
        Catalog::new(vec![AssetDescriptor::new("bitcoin", "BTC", "Bitcoin").unwrap()]).unwrap()
    }

    #[tokio::test]
    async fn single_asset_snapshot() {
        let source = StubSource::new().with_json(
            "/coins/markets",
            json!([{"name": "Bitcoin", "symbol": "btc", "current_price": 63521.4}]),
        );

        let rows = fetch_current_prices(&source, &btc_only()).await.unwrap();

        assert_eq!(
            rows,
            vec![PriceSnapshotRow {
                display_name: "Bitcoin".to_string(),
                symbol: "btc".to_string(),
                formatted_price: "$63,521.40".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn request_is_batched_over_whole_catalog() {
        let source = StubSource::new().with_json("/coins/markets", json!([]));
        let catalog = Catalog::from_config().unwrap();

        fetch_current_prices(&source, &catalog).await.unwrap();

        let requests = source.requests();
        assert_eq!(requests.len(), 1);
        let (path, query) = &requests[0];
        assert_eq!(path, "/coins/markets");
        assert_eq!(
            query,
            &vec![
                ("vs_currency".to_string(), "usd".to_string()),
                ("ids".to_string(), catalog.ids_param()),
                ("order".to_string(), "market_cap_desc".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn rows_follow_provider_order() {
        // Provider sorts by market cap, which need not match catalog order
        let source = StubSource::new().with_json(
            "/coins/markets",
            json!([
                {"name": "Ethereum", "symbol": "eth", "current_price": 3012.5},
                {"name": "Bitcoin", "symbol": "btc", "current_price": 63521.4},
                {"name": "Dogecoin", "symbol": "doge", "current_price": 0.1234}
            ]),
        );
        let rows = fetch_current_prices(&source, &Catalog::from_config().unwrap())
            .await
            .unwrap();

        let symbols: Vec<&str> = rows.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["eth", "btc", "doge"]);
        assert_eq!(rows[0].formatted_price, "$3,012.50");
        assert_eq!(rows[2].formatted_price, "$0.12");
    }

    #[tokio::test]
    async fn transport_failure_is_external_service_error() {
        let source = StubSource::new().with_failure("/coins/markets", "HTTP 500");

        let err = fetch_current_prices(&source, &btc_only()).await.unwrap_err();

        assert!(matches!(
            err,
            MarketDataError::ExternalService {
                source: TransportError::Unavailable(_),
                ..
            }
        ));
        // One call only, no retry
        assert_eq!(source.requests().len(), 1);
    }

    #[tokio::test]
    async fn unexpected_body_is_external_service_error() {
        let source = StubSource::new()
            .with_json("/coins/markets", json!({"status": {"error_code": 429}}));

        let err = fetch_current_prices(&source, &btc_only()).await.unwrap_err();

        assert!(matches!(
            err,
            MarketDataError::ExternalService {
                source: TransportError::Decode(_),
                ..
            }
        ));
    }
}
