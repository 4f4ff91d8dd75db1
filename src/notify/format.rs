//! Message rendering

use super::AssetCategory;
use crate::options::OptionsSetup;
use crate::signal::ScoreResult;
use crate::summary::DailySummary;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt::Write;

/// Signals listed in a call message; the rest are dropped, never reordered
pub const MAX_SIGNALS_SHOWN: usize = 4;

/// Assets listed under "best setups" in the daily summary
const SUMMARY_TOP: usize = 5;

const RULE_WIDTH: usize = 30;

fn heavy_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn light_rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Format a price the way the asset is usually quoted
pub fn format_price(price: Decimal, category: AssetCategory) -> String {
    match category {
        AssetCategory::Crypto if price > Decimal::ONE_THOUSAND => {
            format!("${}", group_thousands(price.round_dp(2)))
        }
        AssetCategory::Crypto if price > Decimal::ONE => format!("${:.4}", price.round_dp(4)),
        AssetCategory::Crypto => format!("${:.6}", price.round_dp(6)),
        c if c.quoted_in_usd() => format!("${:.2}", price.round_dp(2)),
        _ => format!("R${:.2}", price.round_dp(2)),
    }
}

fn group_thousands(value: Decimal) -> String {
    let text = format!("{value:.2}");
    let (int_part, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}.{frac}")
}

/// Render a call for delivery
pub fn format_call(
    asset: &str,
    category: AssetCategory,
    result: &ScoreResult,
    now: DateTime<Utc>,
) -> String {
    let mut lines = vec![
        heavy_rule(),
        format!("[{category}] CALL - {asset}"),
        format!("{} | Score: {}/100", result.direction, result.score),
        now.format("%d/%m %H:%M UTC").to_string(),
        light_rule(),
    ];

    if !result.price.is_zero() {
        lines.push(format!("Entry: {}", format_price(result.price, category)));
    }
    if let Some(stop) = result.stop {
        lines.push(format!("Stop loss: {}", format_price(stop, category)));
    }
    if let Some(target) = result.target {
        lines.push(format!("Take profit: {}", format_price(target, category)));
    }
    if let Some(rsi) = result.rsi {
        lines.push(format!("RSI: {rsi:.1}"));
    }

    if !result.signals.is_empty() {
        lines.push(light_rule());
        lines.push("Signals:".to_string());
        lines.extend(
            result
                .signals
                .iter()
                .take(MAX_SIGNALS_SHOWN)
                .map(|s| format!("  {s}")),
        );
    }

    lines.push(heavy_rule());
    lines.push("Not a recommendation. Use your own judgment.".to_string());
    lines.join("\n")
}

/// Render an options setup suggestion
pub fn format_options_setup(
    setup: &OptionsSetup,
    category: AssetCategory,
    now: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", heavy_rule());
    let _ = writeln!(out, "OPTIONS SETUP - {}", setup.asset);
    let _ = writeln!(out, "{}", now.format("%d/%m %H:%M UTC"));
    let _ = writeln!(out, "{}", light_rule());
    let _ = writeln!(out, "Strategy: {}", setup.strategy.name());
    let _ = writeln!(out, "How to build it:");
    let _ = writeln!(out, "  {}", setup.strategy.describe(category));
    let _ = writeln!(out, "Historical vol: {}% p.a.", setup.historical_vol_pct);
    let _ = writeln!(out, "{}", heavy_rule());
    out.push_str("Options carry elevated risk. Size accordingly.");
    out
}

/// Render the end-of-day summary
pub fn format_daily_summary(summary: &DailySummary, now: DateTime<Utc>) -> String {
    let mut lines = vec![
        heavy_rule(),
        format!("DAILY SUMMARY - {}", now.format("%d/%m/%Y")),
        light_rule(),
        format!("Buy calls: {}", summary.buy_count()),
        format!("Sell calls: {}", summary.sell_count()),
        light_rule(),
        "Best setups of the day:".to_string(),
    ];
    lines.extend(summary.top(SUMMARY_TOP).into_iter().map(|entry| {
        format!(
            "  {} {} - score {}",
            entry.result.direction, entry.asset, entry.result.score
        )
    }));
    lines.push(heavy_rule());
    lines.join("\n")
}

/// Startup / connectivity check message
pub fn format_test_message() -> String {
    [
        "Call scanner active",
        "Notification channel connected.",
        "Market analysis started; calls will arrive here.",
    ]
    .join("\n")
}
