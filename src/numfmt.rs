//! Number formatting shared by the derivation text and diagram labels

/// Unrounded value: shortest text that reads back as the same `f64`,
/// always with a fractional part (`3.0`, `16.0`, `1.2100000000000002`)
///
/// Very large or small magnitudes switch to exponent form without a sign,
/// e.g. `1e20` rather than `1e+20`.
pub fn raw(value: f64) -> String {
    format!("{:?}", value)
}

/// Final results are shown with exactly two decimals
pub fn fixed2(value: f64) -> String {
    format!("{:.2}", value)
}

/// Compact coordinate for SVG attributes: two decimals at most, no trailing zeros
pub fn coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{}", rounded)
}
