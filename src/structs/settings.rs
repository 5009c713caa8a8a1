use serde::{Deserialize, Serialize};

use crate::errors::IoError;
use crate::utils::read_file;

/* One bucket of the market comment classifier. Buckets are supplied in
ascending threshold order; the first bucket whose threshold strictly exceeds
the benchmark change percentage wins, the last one catches everything else.
The comment template may reference {benchmark_name} and {percentage}. */
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketComment {
    pub threshold: f64,
    pub comment: String,
}

/* Static configuration, loaded once at startup and passed around explicitly
so the valuation stays a pure function of its inputs. */
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub benchmark_index: String,
    pub benchmark_name: String,
    pub market_comments: Vec<MarketComment>,
    pub bark_key: String,
    pub bark_group: String,
}

impl Settings {
    pub fn load(path: &str) -> Result<Self, IoError> {
        let contents = read_file(path).map_err(|e| IoError::new(e.to_string()))?;
        let settings: Settings =
            serde_json::from_str(&contents).map_err(|e| IoError::new(e.to_string()))?;
        return Ok(settings);
    }
}
