use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a millimetre value, dropping a trailing `.0`
///
/// # Examples
/// ```
/// use wardrobe_core::utils::text::format_mm;
/// assert_eq!(format_mm(32.0), "32");
/// assert_eq!(format_mm(25.5), "25.5");
/// ```
pub fn format_mm(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

/// Truncate text to a display width, appending "..." when cut
pub fn truncate_text_unicode(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    const ELLIPSIS: &str = "...";
    let ellipsis_width = ELLIPSIS.width();

    if max_width <= ellipsis_width {
        return ELLIPSIS[..max_width].to_string();
    }

    let target_width = max_width - ellipsis_width;
    let mut result = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > target_width {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }

    result.push_str(ELLIPSIS);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mm() {
        assert_eq!(format_mm(0.0), "0");
        assert_eq!(format_mm(2164.0), "2164");
        assert_eq!(format_mm(7.5), "7.5");
    }

    #[test]
    fn test_truncate_text_unicode() {
        assert_eq!(truncate_text_unicode("Landing", 10), "Landing");
        assert_eq!(truncate_text_unicode("Master bedroom", 9), "Master...");
        assert_eq!(truncate_text_unicode("Smith – Landing", 8), "Smith...");
        assert_eq!(truncate_text_unicode("", 5), "");
        assert_eq!(truncate_text_unicode("Landing", 2), "..");
    }
}
