use chrono::NaiveDateTime;

/* One symbol's market snapshot as returned by the quote provider. Every
numeric field is optional: empty or unparsable source text becomes None so
that downstream arithmetic never runs on a silently substituted zero. The
P/E ratio stays text because the provider emits non-numeric values there. */
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuoteRecord {
    pub symbol: String,
    pub name: String,
    pub price: Option<f64>,
    pub change_percentage: Option<f64>,
    pub timestamp: Option<NaiveDateTime>,
    pub change_value: Option<f64>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub year_high: Option<f64>,
    pub year_low: Option<f64>,
    pub volume: Option<i64>,
    pub avg_volume: Option<i64>,
    pub market_cap: Option<f64>,
    pub earnings_per_share: Option<f64>,
    pub price_to_earnings_ratio: String,
    pub dividend_yield: Option<f64>,
    pub capital: Option<i64>,
    pub pre_post_price: Option<f64>,
    pub pre_post_change_percent: Option<f64>,
    pub pre_post_change_value: Option<f64>,
    pub pre_post_time: String,
    pub last_trade_time: String,
    pub prev_close: Option<f64>,
    pub pre_post_volume: Option<i64>,
    pub year: Option<i32>,
}
