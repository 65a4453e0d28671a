use crate::error::ValidationError;

/// Strip leading and trailing whitespace (spaces, tabs, carriage returns) from a physical line.
///
/// Returns `None` when nothing is left, since blank lines never reach the recognizers.
pub(crate) fn normalize_line(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() { None } else { Some(line) }
}

/// Check that `text` is already in the form `normalize_line` would produce.
pub(crate) fn ensure_canonical(text: &str) -> Result<(), ValidationError> {
    if text.contains(['\n', '\r']) {
        return Err(ValidationError::LineBreak {
            text: text.to_owned(),
        });
    }

    if text.trim() != text {
        return Err(ValidationError::Untrimmed {
            text: text.to_owned(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_surrounding_whitespace() {
        assert_eq!(normalize_line("  \tkey = value \t"), Some("key = value"));
    }

    #[test]
    fn strips_carriage_return() {
        assert_eq!(normalize_line("[Section]\r"), Some("[Section]"));
    }

    #[test]
    fn keeps_internal_whitespace() {
        assert_eq!(normalize_line(" a  b\tc "), Some("a  b\tc"));
    }

    #[test]
    fn whitespace_only_is_dropped() {
        assert_eq!(normalize_line(""), None);
        assert_eq!(normalize_line(" \t \r"), None);
    }

    #[test]
    fn canonical_text() {
        assert_eq!(ensure_canonical("value"), Ok(()));
        assert_eq!(ensure_canonical(""), Ok(()));
        assert!(matches!(
            ensure_canonical(" value"),
            Err(ValidationError::Untrimmed { .. })
        ));
        assert!(matches!(
            ensure_canonical("a\nb"),
            Err(ValidationError::LineBreak { .. })
        ));
    }
}
