use serde::{Deserialize, Serialize};

/// Insert `,` every three digits of a run of ASCII digits.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Largest scaled magnitude still exactly representable as an integer.
const EXACT_SCALED_MAX: f64 = 9_007_199_254_740_992.0;

/// en-US number: grouped thousands, exactly `digits` fraction digits,
/// half-way values rounded away from zero. Non-finite values render as
/// `NaN`, `∞` and `-∞`.
pub fn format_number(value: f64, digits: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let precision = digits as usize;
    let magnitude = value.abs();
    // `{:.N}` breaks ties to even; round half away from zero first while the
    // scaled value is still an exact integer.
    let scale = 10f64.powi(digits.min(308) as i32);
    let scaled = magnitude * scale;
    let rounded = if scaled.is_finite() && scaled < EXACT_SCALED_MAX {
        scaled.round() / scale
    } else {
        magnitude
    };

    let text = format!("{rounded:.precision$}");
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };
    let is_zero = text.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{sign}{}.{frac}", group_thousands(int_part)),
        None => format!("{sign}{}", group_thousands(int_part)),
    }
}

pub fn format_percentage(value: f64, digits: u32) -> String {
    format!("{}%", format_number(value, digits))
}

/// Whole US dollars, e.g. `$2,739` or `-$1,234`.
pub fn format_currency(value: f64) -> String {
    let body = format_number(value.abs(), 0);
    if value < 0.0 && body != "0" {
        format!("-${body}")
    } else {
        format!("${body}")
    }
}

/// Visual class of a weather alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    Heat,
    Wind,
    Water,
    General,
}

impl AlertKind {
    /// Keyword match, case-insensitive. Heat/fire wins over wind/storm, which
    /// wins over flood/rain.
    pub fn classify(alert: &str) -> Self {
        let lower = alert.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));
        if has(&["heat", "fire"]) {
            AlertKind::Heat
        } else if has(&["wind", "storm"]) {
            AlertKind::Wind
        } else if has(&["flood", "rain"]) {
            AlertKind::Water
        } else {
            AlertKind::General
        }
    }
}
