use hashbrown::HashMap;
use tracing::warn;

use crate::structs::{HoldingDetail, Portfolio, QuoteRecord, Settings, ValuationResult};

/* Compute one valuation cycle. Pure in (portfolio, quotes, settings). A
holding without a usable quote contributes nothing to NLV this cycle, which
understates the true value; the warning is the signal to fix the data feed
rather than the valuation. */
pub fn calculate_nlv(
    portfolio: &Portfolio,
    quotes: &HashMap<String, QuoteRecord>,
    settings: &Settings,
) -> ValuationResult {
    let mut nlv = portfolio.cash;
    let mut prev_nlv = portfolio.cash;
    let mut stock_details = HashMap::new();

    for (symbol, &quantity) in &portfolio.holdings {
        let Some(quote) = quotes.get(symbol) else {
            warn!(symbol = %symbol, "No quote data available for holding");
            continue;
        };
        let (Some(price), Some(prev_close)) = (quote.price, quote.prev_close) else {
            warn!(symbol = %symbol, "Quote record has no usable price for holding");
            continue;
        };

        let current_value = price * quantity as f64;
        let prev_value = prev_close * quantity as f64;
        nlv += current_value;
        prev_nlv += prev_value;

        let change = current_value - prev_value;
        let change_percentage = if prev_value != 0.0 {
            change / prev_value * 100.0
        } else {
            0.0
        };

        stock_details.insert(
            symbol.clone(),
            HoldingDetail {
                quantity,
                current_price: price,
                prev_price: prev_close,
                change,
                change_percentage,
            },
        );
    }

    let change = nlv - prev_nlv;
    let change_percentage = if prev_nlv != 0.0 {
        change / prev_nlv * 100.0
    } else {
        0.0
    };

    return ValuationResult {
        nlv,
        prev_nlv,
        change,
        change_percentage,
        stock_details,
        market_comment: market_comment(quotes, settings),
        benchmark_change: benchmark_change(quotes, settings),
    };
}

fn benchmark_change(quotes: &HashMap<String, QuoteRecord>, settings: &Settings) -> Option<f64> {
    return quotes
        .get(&settings.benchmark_index.to_uppercase())
        .and_then(|quote| quote.change_percentage);
}

/* Ordered-bucket classifier over the benchmark move: first bucket whose
threshold strictly exceeds the change percentage wins, the last bucket
catches everything above. Thresholds are expected ascending; ordering is not
validated here. */
pub fn market_comment(quotes: &HashMap<String, QuoteRecord>, settings: &Settings) -> String {
    let Some(change) = benchmark_change(quotes, settings) else {
        return format!("Unable to retrieve {} index data", settings.benchmark_name);
    };

    let sign = if change > 0.0 { "+" } else { "" };
    let percentage = format!("{sign}{change:.2}%");

    let bucket = settings
        .market_comments
        .iter()
        .find(|bucket| change < bucket.threshold)
        .or_else(|| settings.market_comments.last());

    return match bucket {
        Some(bucket) => bucket
            .comment
            .replace("{benchmark_name}", &settings.benchmark_name)
            .replace("{percentage}", &percentage),
        None => format!("{} {}", settings.benchmark_name, percentage),
    };
}
