//! Environment variable configuration

/// Environment variable configuration reader
pub struct EnvConfigReader;

impl EnvConfigReader {
    /// Read NO_COLOR environment variable
    pub fn read_no_color() -> bool {
        std::env::var("NO_COLOR").is_ok()
    }

    /// Read WARDROBE_FORMAT environment variable, ignoring empty values
    pub fn read_format() -> Option<String> {
        std::env::var("WARDROBE_FORMAT").ok().and_then(non_empty)
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(" json ".to_string()), Some("json".to_string()));
        assert_eq!(non_empty("   ".to_string()), None);
        assert_eq!(non_empty(String::new()), None);
    }

    #[test]
    fn test_read_no_color_default() {
        // Only checks the call succeeds; the result depends on the environment
        let _result = EnvConfigReader::read_no_color();
    }
}
