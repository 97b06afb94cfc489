//! Rate formatting

/// Format a whole percentage: `85` → `"85%"`
pub fn format_percent(rate: u32) -> String {
    format!("{rate}%")
}

/// Format a bid margin: `Some(18.5)` → `"18.5%"`, missing or zero → `"N/A"`
pub fn format_margin(margin: Option<f64>) -> String {
    match margin {
        Some(m) if m.is_finite() && m != 0.0 => format!("{m}%"),
        _ => "N/A".to_string(),
    }
}

/// Text progress bar for terminals: `progress_bar(85, 20)` → `"[#################---]"`
pub fn progress_bar(rate: u32, width: usize) -> String {
    let rate = rate.min(100) as usize;
    let filled = (rate * width + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(85), "85%");
        assert_eq!(format_percent(0), "0%");
        assert_eq!(format_percent(100), "100%");
    }

    #[test]
    fn test_format_margin() {
        assert_eq!(format_margin(Some(18.5)), "18.5%");
        assert_eq!(format_margin(Some(16.2)), "16.2%");
        assert_eq!(format_margin(Some(20.0)), "20%");
        assert_eq!(format_margin(Some(0.0)), "N/A");
        assert_eq!(format_margin(None), "N/A");
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0, 10), "[----------]");
        assert_eq!(progress_bar(100, 10), "[##########]");
        assert_eq!(progress_bar(85, 20), "[#################---]");
        assert_eq!(progress_bar(150, 4), "[####]");
    }
}
