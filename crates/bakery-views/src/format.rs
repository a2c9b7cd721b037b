//! Number formatting shared by the renderers

/// Dollar amount to 2 decimals; `n/a` when not finite
#[must_use]
pub fn money(value: f64) -> String {
    if value.is_finite() {
        format!("${value:.2}")
    } else {
        "n/a".to_string()
    }
}

/// Integer with thousands separators (`2,450`)
#[must_use]
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Quantity without a trailing `.0` (`2.5`, `450`)
#[must_use]
pub fn quantity(value: f64) -> String {
    format!("{value}")
}
