//! String helpers and the name field rule

use crate::FieldError;

/// Minimum number of characters in a trimmed name
pub const NAME_MIN_LENGTH: usize = 3;

/// True when the value is empty or whitespace only
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Length in characters, not bytes
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Validates minimum length in characters
pub fn has_min_chars(value: &str, min: usize) -> bool {
    char_len(value) >= min
}

/// Name rule: required, then at least [`NAME_MIN_LENGTH`] characters after trimming.
pub fn validate_name(name: &str) -> Result<(), FieldError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FieldError::NameRequired);
    }
    if !has_min_chars(name, NAME_MIN_LENGTH) {
        return Err(FieldError::NameTooShort {
            min: NAME_MIN_LENGTH,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   \t"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(char_len("abc"), 3);
        assert_eq!(char_len("Zoë"), 3);
    }

    #[test]
    fn test_name_rules() {
        assert_eq!(validate_name(""), Err(FieldError::NameRequired));
        assert_eq!(validate_name("    "), Err(FieldError::NameRequired));
        assert_eq!(
            validate_name("Al"),
            Err(FieldError::NameTooShort { min: 3 })
        );
        assert_eq!(
            validate_name("  Al  "),
            Err(FieldError::NameTooShort { min: 3 })
        );
        assert!(validate_name("Ana").is_ok());
        assert!(validate_name("Zoë").is_ok());
    }
}
