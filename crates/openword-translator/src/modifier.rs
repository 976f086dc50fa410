//! Part-of-speech tags paired positionally with translation entries.

use crate::error::LookupError;

/// Format the modifier at `index` as `"(x.)"`, where `x` is the last
/// character of the anchor text.
pub fn locate_modifier(modifiers: &[String], index: usize) -> Result<String, LookupError> {
    let source = modifiers.get(index).ok_or(LookupError::ModifierIndex {
        index,
        available: modifiers.len(),
    })?;

    let tag = source
        .trim()
        .chars()
        .last()
        .ok_or(LookupError::EmptyModifier { index })?;

    tracing::trace!("modifier {index}: '{source}' -> {tag}");
    Ok(format!("({tag}.)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modifiers(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_last_character_becomes_tag() {
        let list = modifiers(&["noun", " verb ", "adj3"]);
        assert_eq!(locate_modifier(&list, 0).unwrap(), "(n.)");
        assert_eq!(locate_modifier(&list, 1).unwrap(), "(b.)");
        assert_eq!(locate_modifier(&list, 2).unwrap(), "(3.)");
    }

    #[test]
    fn test_out_of_range() {
        let list = modifiers(&["n"]);
        assert!(matches!(
            locate_modifier(&list, 1),
            Err(LookupError::ModifierIndex {
                index: 1,
                available: 1
            })
        ));
    }

    #[test]
    fn test_blank_anchor() {
        let list = modifiers(&["  "]);
        assert!(matches!(
            locate_modifier(&list, 0),
            Err(LookupError::EmptyModifier { index: 0 })
        ));
    }
}
