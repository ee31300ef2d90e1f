use rust_decimal::{Decimal, RoundingStrategy};

/// Two decimal places with thousand separators, e.g. `1234567.891` → `"1,234,567.89"`.
pub(crate) fn format_amount(val: Decimal) -> String {
    let formatted = format!("{:.2}", round_cents(val.abs()));
    let (int_part, dec_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let grouped = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    let sign = if val < Decimal::ZERO { "-" } else { "" };
    format!("{sign}{grouped}.{dec_part}")
}

/// Round half away from zero to two places, the way amounts are displayed.
pub(crate) fn round_cents(val: Decimal) -> Decimal {
    val.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
