use crate::model::AxisRange;

/// Parses `"MIN MAX"` (or `"MIN,MAX"`). Blank input clears the range.
pub(in crate::tui_shell) fn parse_range(raw: &str) -> Result<Option<AxisRange>, String> {
    let parts: Vec<&str> = raw
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    if parts.is_empty() {
        return Ok(None);
    }
    let [lo, hi] = parts.as_slice() else {
        return Err(format!("expected two numbers, got {}", parts.len()));
    };
    let lo: f64 = lo.parse().map_err(|_| format!("not a number: {}", lo))?;
    let hi: f64 = hi.parse().map_err(|_| format!("not a number: {}", hi))?;
    if !lo.is_finite() || !hi.is_finite() {
        return Err("bounds must be finite".to_string());
    }
    if lo == hi {
        return Err("range is empty".to_string());
    }
    Ok(Some(AxisRange::new(lo, hi)))
}

#[cfg(test)]
#[path = "../../tests/tui_shell/parse_utils_tests.rs"]
mod tests;
