//! Output rendering (Markdown tables and lists)

pub mod markdown;

/// Format `value` with `digits` decimals, rounding halves away from zero
/// (`0.625` becomes `0.63`, not the `0.62` that `{:.2}` gives).
pub fn fixed(value: f64, digits: usize) -> String {
    let scale = 10f64.powi(digits as i32);
    format!("{:.digits$}", (value * scale).round() / scale)
}
