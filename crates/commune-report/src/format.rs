#![deny(unsafe_code)]

use commune_model::StatValue;

/// Rendered in place of any missing value.
pub const MISSING_PLACEHOLDER: &str = "—";

/// fr-FR thousands separator (narrow no-break space).
const GROUP_SEPARATOR: char = '\u{202F}';

/// Rounded integer with grouped thousands: 23325 → "23 325".
pub fn fmt_int(value: StatValue) -> String {
    match value.as_f64() {
        Some(v) => format_decimal(v, 0),
        None => MISSING_PLACEHOLDER.to_string(),
    }
}

/// Grouped number with up to three fractional digits and a decimal comma.
pub fn fmt_number(value: StatValue) -> String {
    match value.as_f64() {
        Some(v) => format_decimal(v, 3),
        None => MISSING_PLACEHOLDER.to_string(),
    }
}

/// Population shorthand: 1 250 000 → "1,25 M", 12 500 → "12 k".
pub fn fmt_pop(value: StatValue) -> String {
    match value.as_f64() {
        Some(v) if v >= 1_000_000.0 => format!("{} M", format_decimal(v / 1_000_000.0, 2)),
        Some(v) if v >= 1_000.0 => format!("{} k", format_decimal(v / 1_000.0, 0)),
        Some(v) => format_decimal(v, 3),
        None => MISSING_PLACEHOLDER.to_string(),
    }
}

/// Rounded surface with its unit: 15.95 → "16 km²".
pub fn fmt_area(value: StatValue) -> String {
    match value.as_f64() {
        Some(v) => format!("{} km²", format_decimal(v, 0)),
        None => MISSING_PLACEHOLDER.to_string(),
    }
}

/// Grouped integer amount with the euro sign.
pub fn fmt_euros(value: StatValue) -> String {
    match value.as_f64() {
        Some(v) => format!("{} €", format_decimal(v, 0)),
        None => MISSING_PLACEHOLDER.to_string(),
    }
}

/// Percentage with one fractional digit: 48.7 → "48,7 %".
pub fn fmt_percent(value: f64) -> String {
    format!("{} %", format_decimal(value, 1))
}

/// Unicode mini-chart of a series, scaled to its own min/max.
pub fn sparkline(values: &[f64]) -> String {
    const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    let Some(min) = values.iter().copied().reduce(f64::min) else {
        return String::new();
    };
    let max = values.iter().copied().fold(min, f64::max);
    let span = max - min;
    values
        .iter()
        .map(|value| {
            let t = if span > 0.0 { (value - min) / span } else { 0.5 };
            let index = (t * (BARS.len() - 1) as f64).round() as usize;
            BARS[index.min(BARS.len() - 1)]
        })
        .collect()
}

/// Fixed-point rendering with trailing zeros trimmed, decimal comma, and
/// grouped thousands.
fn format_decimal(value: f64, max_fraction_digits: usize) -> String {
    let text = format!("{value:.max_fraction_digits$}");
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, fraction) = match unsigned.split_once('.') {
        Some((int_part, fraction)) => (int_part, fraction.trim_end_matches('0')),
        None => (unsigned, ""),
    };
    let grouped = group_thousands(int_part);
    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped},{fraction}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && index % 3 == offset {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_grouped() {
        assert_eq!(fmt_int(StatValue::Observed(23_325.0)), "23\u{202F}325");
        assert_eq!(fmt_int(StatValue::Observed(450.0)), "450");
        assert_eq!(fmt_int(StatValue::Observed(1_234_567.0)), "1\u{202F}234\u{202F}567");
    }

    #[test]
    fn missing_renders_as_placeholder() {
        assert_eq!(fmt_int(StatValue::Missing), MISSING_PLACEHOLDER);
        assert_eq!(fmt_pop(StatValue::Missing), MISSING_PLACEHOLDER);
        assert_eq!(fmt_area(StatValue::Missing), MISSING_PLACEHOLDER);
        assert_eq!(fmt_euros(StatValue::Missing), MISSING_PLACEHOLDER);
    }

    #[test]
    fn numbers_use_a_decimal_comma_without_trailing_zeros() {
        assert_eq!(fmt_number(StatValue::Observed(12.3)), "12,3");
        assert_eq!(fmt_number(StatValue::Observed(12.0)), "12");
        assert_eq!(fmt_number(StatValue::Observed(1234.5)), "1\u{202F}234,5");
    }

    #[test]
    fn population_shorthand() {
        assert_eq!(fmt_pop(StatValue::Observed(1_250_000.0)), "1,25 M");
        assert_eq!(fmt_pop(StatValue::Observed(29_677.0)), "30 k");
        assert_eq!(fmt_pop(StatValue::Observed(767.0)), "767");
    }

    #[test]
    fn area_rounds_to_whole_km2() {
        assert_eq!(fmt_area(StatValue::Observed(15.95)), "16 km²");
    }

    #[test]
    fn percent_keeps_one_digit() {
        assert_eq!(fmt_percent(48.7189), "48,7 %");
        assert_eq!(fmt_percent(0.0), "0 %");
    }

    #[test]
    fn negative_values_keep_their_sign() {
        assert_eq!(fmt_int(StatValue::Observed(-1_234.0)), "-1\u{202F}234");
    }

    #[test]
    fn sparkline_spans_the_bar_alphabet() {
        let line = sparkline(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(line.chars().count(), 4);
        assert!(line.starts_with('▁'));
        assert!(line.ends_with('█'));
        assert_eq!(sparkline(&[]), "");
    }
}
