use serde_json::json;

use crate::structs::ValuationResult;

fn round2(value: f64) -> f64 {
    return (value * 100.0).round() / 100.0;
}

fn sorted_symbols(result: &ValuationResult) -> Vec<&String> {
    let mut symbols: Vec<&String> = result.stock_details.keys().collect();
    symbols.sort();
    return symbols;
}

/* JSON rendering of a valuation. All monetary and percentage figures are
rounded to two decimals; benchmark_change is null when the benchmark quote
was missing. */
pub fn render_json(
    result: &ValuationResult,
    benchmark_name: &str,
) -> Result<String, serde_json::Error> {
    let mut stock_details = serde_json::Map::new();
    for symbol in sorted_symbols(result) {
        let detail = &result.stock_details[symbol];
        stock_details.insert(
            symbol.clone(),
            json!({
                "quantity": detail.quantity,
                "current_price": round2(detail.current_price),
                "change": round2(detail.change),
                "change_percentage": round2(detail.change_percentage),
            }),
        );
    }

    let report = json!({
        "market_comment": result.market_comment,
        "benchmark_index": benchmark_name,
        "benchmark_change": result.benchmark_change,
        "nlv": {
            "current": round2(result.nlv),
            "change": round2(result.change),
            "change_percentage": round2(result.change_percentage),
        },
        "stock_details": stock_details,
    });
    return serde_json::to_string_pretty(&report);
}

/* Human-readable rendering: optional commentary section, NLV summary and a
fixed-width per-holding table in sorted symbol order. */
pub fn render_text(result: &ValuationResult, include_market_comment: bool) -> String {
    let mut report: Vec<String> = Vec::new();

    if include_market_comment {
        report.push("Market Commentary".to_string());
        report.push("-".repeat(30));
        report.push(result.market_comment.clone());
        report.push(String::new());
    }

    report.push("NLV Report".to_string());
    report.push("-".repeat(30));
    report.push(format!("Current NLV: ${:.2}", result.nlv));
    report.push(format!("Change: ${:.2}", result.change));
    report.push(format!(
        "Change Percentage: {:+.2}%",
        result.change_percentage
    ));
    report.push(String::new());
    report.push("Detailed Stock Report".to_string());
    report.push("-".repeat(45));
    report.push(format!(
        "{:<10}{:<10}{:<15}{:<10}",
        "Symbol", "Quantity", "NLV Change", "Change %"
    ));
    report.push("-".repeat(45));

    for symbol in sorted_symbols(result) {
        let detail = &result.stock_details[symbol];
        report.push(format!(
            "{:<10}{:<10}${:<14.2}{:+.2}%",
            symbol, detail.quantity, detail.change, detail.change_percentage
        ));
    }

    return report.join("\n");
}
