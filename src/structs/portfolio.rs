use hashbrown::HashMap;
use serde_json::{Map, Number, Value};

use crate::errors::IoError;
use crate::utils::{read_file, write_file};

/* Reserved key of the backing file; everything else is a holding. */
pub const CASH_BALANCE_KEY: &str = "cash_balance";

/* The persisted portfolio: symbol -> share quantity plus a cash balance. The
backing file is one flat JSON object. The cash balance may be negative
(margin). The main path only ever loads; save exists so externally edited
portfolios can be written back programmatically. */
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Portfolio {
    pub holdings: HashMap<String, i64>,
    pub cash: f64,
}

impl Portfolio {
    pub fn load(path: &str) -> Result<Self, IoError> {
        let contents = read_file(path).map_err(|e| IoError::new(e.to_string()))?;
        let data: Map<String, Value> =
            serde_json::from_str(&contents).map_err(|e| IoError::new(e.to_string()))?;

        let mut holdings = HashMap::new();
        let mut cash = 0.0;
        for (key, value) in data {
            if key == CASH_BALANCE_KEY {
                cash = value.as_f64().ok_or_else(|| {
                    IoError::new(format!("{CASH_BALANCE_KEY} is not a number"))
                })?;
            } else {
                let quantity = value.as_i64().ok_or_else(|| {
                    IoError::new(format!("Quantity for {key} is not an integer"))
                })?;
                holdings.insert(key, quantity);
            }
        }
        return Ok(Portfolio { holdings, cash });
    }

    pub fn save(&self, path: &str) -> Result<(), IoError> {
        let mut data = Map::new();
        for (symbol, quantity) in &self.holdings {
            data.insert(symbol.clone(), Value::from(*quantity));
        }
        let cash = Number::from_f64(self.cash)
            .ok_or_else(|| IoError::new("Cash balance is not a finite number".to_string()))?;
        data.insert(CASH_BALANCE_KEY.to_string(), Value::Number(cash));

        let contents =
            serde_json::to_string(&Value::Object(data)).map_err(|e| IoError::new(e.to_string()))?;
        write_file(path, &contents).map_err(|e| IoError::new(e.to_string()))?;
        return Ok(());
    }
}
