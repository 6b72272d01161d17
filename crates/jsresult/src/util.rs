use std::num::FpCategory;

/// Formats a number the way `String(n)` does in JavaScript.
pub fn format_f64(n: f64) -> String {
    match n.classify() {
        FpCategory::Infinite if n.is_sign_negative() => "-Infinity".into(),
        FpCategory::Infinite => "Infinity".into(),
        FpCategory::Nan => "NaN".into(),
        // -0 prints as 0
        FpCategory::Zero => "0".into(),
        _ if n.abs() >= 1e21f64 => format!("{n:e}").replacen('e', "e+", 1),
        _ if n.abs() < 1e-6f64 => format!("{n:e}"),
        _ => format!("{n}"),
    }
}
