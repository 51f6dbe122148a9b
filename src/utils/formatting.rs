//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// Render a completion ratio (0.0..=1.0) as `[#####---] 62% Complete`.
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let ratio = ratio.clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    format!(
        "[{}{}] {}% Complete",
        "#".repeat(filled),
        "-".repeat(width - filled),
        (ratio * 100.0).round() as u32
    )
}

/// `8` → `8 h`, `1` → `1 h`
pub fn hours_label(hours: usize) -> String {
    format!("{hours} h")
}

/// Truncate to `max` characters, appending `...` when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_rounds_to_width() {
        assert_eq!(progress_bar(0.0, 8), "[--------] 0% Complete");
        assert_eq!(progress_bar(5.0 / 8.0, 8), "[#####---] 63% Complete");
        assert_eq!(progress_bar(1.0, 8), "[########] 100% Complete");
    }

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate("abc", 10), "abc");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
    }
}
