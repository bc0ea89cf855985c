//! Name padding for the generated enum.

/// How the computed padding count is applied to a name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaddingStyle {
    /// Append exactly [`padding_count`] spaces after the name
    #[default]
    Append,
    /// Treat [`padding_count`] as a total width and pad the name up to it
    Column,
}

/// Padding count for a name of `name_len` characters against the longest
/// name `max_len`.
///
/// Shorter names get `max_len`; all others get `name_len - max_len`.
pub fn padding_count(name_len: usize, max_len: usize) -> usize {
    if name_len < max_len {
        return max_len;
    }
    name_len - max_len
}

/// Number of spaces to write after a name
pub fn padding_spaces(style: PaddingStyle, name_len: usize, max_len: usize) -> usize {
    let count = padding_count(name_len, max_len);
    match style {
        PaddingStyle::Append => count,
        PaddingStyle::Column => count.saturating_sub(name_len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_count_is_asymmetric() {
        assert_eq!(padding_count(4, 10), 10);
        assert_eq!(padding_count(9, 10), 10);
        assert_eq!(padding_count(10, 10), 0);
        assert_eq!(padding_count(12, 10), 2);
        assert_eq!(padding_count(0, 0), 0);
    }

    #[test]
    fn test_append_style() {
        assert_eq!(padding_spaces(PaddingStyle::Append, 4, 10), 10);
        assert_eq!(padding_spaces(PaddingStyle::Append, 10, 10), 0);
    }

    #[test]
    fn test_column_style() {
        assert_eq!(padding_spaces(PaddingStyle::Column, 4, 10), 6);
        assert_eq!(padding_spaces(PaddingStyle::Column, 10, 10), 0);
        assert_eq!(padding_spaces(PaddingStyle::Column, 12, 10), 0);
    }
}
