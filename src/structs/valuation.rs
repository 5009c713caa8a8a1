use hashbrown::HashMap;

/* Per-holding breakdown of one valuation cycle. */
#[derive(Debug, Clone, PartialEq)]
pub struct HoldingDetail {
    pub quantity: i64,
    pub current_price: f64,
    pub prev_price: f64,
    pub change: f64,
    pub change_percentage: f64,
}

/* Derived output of one valuation run. Recomputed fresh each run, never
persisted. benchmark_change is None when the benchmark quote was missing. */
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationResult {
    pub nlv: f64,
    pub prev_nlv: f64,
    pub change: f64,
    pub change_percentage: f64,
    pub stock_details: HashMap<String, HoldingDetail>,
    pub market_comment: String,
    pub benchmark_change: Option<f64>,
}
