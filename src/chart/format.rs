//! Text formatting helpers shared by the SVG elements.

/// Escape text for use in SVG element content and attribute values.
#[must_use]
pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a y-axis tick value. Counts are shown unscaled; fractional steps
/// keep only the digits the step needs.
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    if step >= 1.0 || value == 0.0 {
        return format!("{value:.0}");
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let decimals = (-step.log10()).ceil().max(0.0) as usize;
    format!("{value:.decimals$}")
}

/// Pick a "nice" tick step (1, 2 or 5 times a power of ten) so that `span`
/// is covered by roughly `target` intervals.
#[must_use]
pub fn nice_step(span: f64, target: u32) -> f64 {
    if !span.is_finite() || span <= 0.0 {
        return 1.0;
    }
    let raw = span / f64::from(target.max(1));
    let magnitude = 10_f64.powf(raw.log10().floor());
    let residual = raw / magnitude - 1e-9;
    let factor = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
