use std::str::FromStr;

use chrono::NaiveDateTime;
use hashbrown::HashMap;
use regex::Regex;
use tracing::warn;

use crate::structs::QuoteRecord;

const RECORD_PATTERN: &str = r#"var hq_str_gb_(\S+?)="(.+?)";"#;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/* Positional schema of one comma-separated quote record. Field meaning is
fixed by position in the provider format; format drift is handled by editing
this table. Positions not listed are filler the provider emits but nothing
consumes. */
mod field {
    pub const NAME: usize = 0;
    pub const PRICE: usize = 1;
    pub const CHANGE_PERCENTAGE: usize = 2;
    pub const TIMESTAMP: usize = 3;
    pub const CHANGE_VALUE: usize = 4;
    pub const OPEN: usize = 5;
    pub const HIGH: usize = 6;
    pub const LOW: usize = 7;
    pub const YEAR_HIGH: usize = 8;
    pub const YEAR_LOW: usize = 9;
    pub const VOLUME: usize = 10;
    pub const AVG_VOLUME: usize = 11;
    pub const MARKET_CAP: usize = 12;
    pub const EARNINGS_PER_SHARE: usize = 13;
    pub const PRICE_TO_EARNINGS_RATIO: usize = 14;
    pub const DIVIDEND_YIELD: usize = 17;
    pub const CAPITAL: usize = 19;
    pub const PRE_POST_PRICE: usize = 21;
    pub const PRE_POST_CHANGE_PERCENT: usize = 22;
    pub const PRE_POST_CHANGE_VALUE: usize = 23;
    pub const PRE_POST_TIME: usize = 24;
    pub const LAST_TRADE_TIME: usize = 25;
    pub const PREV_CLOSE: usize = 26;
    pub const PRE_POST_VOLUME: usize = 27;
    pub const YEAR: usize = 29;

    pub const COUNT: usize = 30;
}

/* Empty string -> None, failed conversion -> None, otherwise the value. */
fn safe_parse<T: FromStr>(value: &str) -> Option<T> {
    if value.is_empty() {
        return None;
    }
    return value.parse().ok();
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if value.is_empty() {
        return None;
    }
    return NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).ok();
}

/* Extract every quote record found in the raw provider text, keyed by
uppercased symbol. Symbols absent from the text are simply absent from the
map; a record with fewer fields than the schema expects is skipped with a
warning so one malformed record does not lose the whole batch. */
pub fn parse_quotes(data: &str) -> HashMap<String, QuoteRecord> {
    let pattern = Regex::new(RECORD_PATTERN).unwrap();
    let mut result = HashMap::new();

    for capture in pattern.captures_iter(data) {
        let symbol = capture[1].to_uppercase();
        let fields: Vec<&str> = capture[2].split(',').collect();
        if fields.len() < field::COUNT {
            warn!(
                symbol = %symbol,
                fields = fields.len(),
                expected = field::COUNT,
                "Skipping quote record with too few fields"
            );
            continue;
        }

        let record = QuoteRecord {
            symbol: symbol.clone(),
            name: fields[field::NAME].to_string(),
            price: safe_parse(fields[field::PRICE]),
            change_percentage: safe_parse(fields[field::CHANGE_PERCENTAGE]),
            timestamp: parse_timestamp(fields[field::TIMESTAMP]),
            change_value: safe_parse(fields[field::CHANGE_VALUE]),
            open: safe_parse(fields[field::OPEN]),
            high: safe_parse(fields[field::HIGH]),
            low: safe_parse(fields[field::LOW]),
            year_high: safe_parse(fields[field::YEAR_HIGH]),
            year_low: safe_parse(fields[field::YEAR_LOW]),
            volume: safe_parse(fields[field::VOLUME]),
            avg_volume: safe_parse(fields[field::AVG_VOLUME]),
            market_cap: safe_parse(fields[field::MARKET_CAP]),
            earnings_per_share: safe_parse(fields[field::EARNINGS_PER_SHARE]),
            price_to_earnings_ratio: fields[field::PRICE_TO_EARNINGS_RATIO].to_string(),
            dividend_yield: safe_parse(fields[field::DIVIDEND_YIELD]),
            capital: safe_parse(fields[field::CAPITAL]),
            pre_post_price: safe_parse(fields[field::PRE_POST_PRICE]),
            pre_post_change_percent: safe_parse(fields[field::PRE_POST_CHANGE_PERCENT]),
            pre_post_change_value: safe_parse(fields[field::PRE_POST_CHANGE_VALUE]),
            pre_post_time: fields[field::PRE_POST_TIME].to_string(),
            last_trade_time: fields[field::LAST_TRADE_TIME].to_string(),
            prev_close: safe_parse(fields[field::PREV_CLOSE]),
            pre_post_volume: safe_parse(fields[field::PRE_POST_VOLUME]),
            year: safe_parse(fields[field::YEAR]),
        };
        result.insert(symbol, record);
    }

    return result;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record_text(symbol: &str, fields: &[&str]) -> String {
        return format!("var hq_str_gb_{}=\"{}\";", symbol, fields.join(","));
    }

    fn full_fields() -> Vec<&'static str> {
        return vec![
            "Apple Inc",
            "150.00",
            "7.14",
            "2026-08-25 16:00:00",
            "10.00",
            "141.00",
            "151.00",
            "140.50",
            "199.62",
            "124.17",
            "38215975",
            "43520000",
            "2230000000000",
            "6.42",
            "23.36",
            "150.98",
            "140.21",
            "0.44",
            "0.68",
            "15204137000",
            "1.02",
            "151.20",
            "0.80",
            "1.20",
            "Aug 25 07:59PM EDT",
            "Aug 25 04:00PM EDT",
            "140.00",
            "1200000",
            "0.00",
            "2026",
        ];
    }

    #[test]
    fn text_without_records_yields_empty_map() {
        assert!(parse_quotes("").is_empty());
        assert!(parse_quotes("var some_other_payload=\"a,b,c\";").is_empty());
    }

    #[test]
    fn parses_a_full_record() {
        let data = record_text("aapl", &full_fields());
        let quotes = parse_quotes(&data);

        let record = quotes.get("AAPL").unwrap();
        assert_eq!(record.symbol, "AAPL");
        assert_eq!(record.name, "Apple Inc");
        assert_eq!(record.price, Some(150.00));
        assert_eq!(record.change_percentage, Some(7.14));
        assert_eq!(
            record.timestamp,
            NaiveDate::from_ymd_opt(2026, 8, 25)
                .unwrap()
                .and_hms_opt(16, 0, 0)
        );
        assert_eq!(record.volume, Some(38215975));
        assert_eq!(record.price_to_earnings_ratio, "23.36");
        assert_eq!(record.dividend_yield, Some(0.44));
        assert_eq!(record.capital, Some(15204137000));
        assert_eq!(record.last_trade_time, "Aug 25 04:00PM EDT");
        assert_eq!(record.prev_close, Some(140.00));
        assert_eq!(record.year, Some(2026));
    }

    #[test]
    fn empty_fields_become_none() {
        let mut fields = full_fields();
        fields[field::PRICE] = "";
        fields[field::TIMESTAMP] = "";
        fields[field::VOLUME] = "";
        let data = record_text("aapl", &fields);

        let quotes = parse_quotes(&data);
        let record = quotes.get("AAPL").unwrap();
        assert_eq!(record.price, None);
        assert_eq!(record.timestamp, None);
        assert_eq!(record.volume, None);
    }

    #[test]
    fn unparsable_fields_become_none() {
        let mut fields = full_fields();
        fields[field::PRICE] = "N/A";
        fields[field::YEAR] = "--";
        let data = record_text("aapl", &fields);

        let quotes = parse_quotes(&data);
        let record = quotes.get("AAPL").unwrap();
        assert_eq!(record.price, None);
        assert_eq!(record.year, None);
    }

    #[test]
    fn short_record_is_skipped_but_batch_survives() {
        let short = record_text("msft", &["Microsoft", "500.00", "1.00"]);
        let full = record_text("aapl", &full_fields());
        let data = format!("{short}\n{full}");

        let quotes = parse_quotes(&data);
        assert_eq!(quotes.len(), 1);
        assert!(quotes.contains_key("AAPL"));
        assert!(!quotes.contains_key("MSFT"));
    }

    #[test]
    fn multiple_records_parse_independently() {
        let aapl = record_text("aapl", &full_fields());
        let mut ixic_fields = full_fields();
        ixic_fields[field::NAME] = "NASDAQ Composite";
        ixic_fields[field::CHANGE_PERCENTAGE] = "-1.25";
        let ixic = record_text("ixic", &ixic_fields);

        let quotes = parse_quotes(&format!("{aapl}\n{ixic}"));
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes.get("IXIC").unwrap().change_percentage, Some(-1.25));
    }
}
