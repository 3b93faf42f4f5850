use dicta_lexer::Character;

fn strippable(ch: char, strip: Option<&str>) -> bool {
    strip.map_or_else(|| ch.is_whitespace(), |set| set.contains(ch))
}

/// Strips characters from both ends, whitespace when `strip` is `None`.
#[must_use]
pub fn strip_characters<'a>(chars: &'a [Character], strip: Option<&str>) -> &'a [Character] {
    let mut slice = chars;
    while let Some(first) = slice.first() {
        if strippable(first.ch, strip) {
            slice = &slice[1..];
        } else {
            break;
        }
    }
    while let Some(last) = slice.last() {
        if strippable(last.ch, strip) {
            slice = &slice[..slice.len() - 1];
        } else {
            break;
        }
    }
    slice
}

/// Splits the character sequence on a separator character. Empty
/// segments between adjacent separators are dropped.
#[must_use]
pub fn split_on<'a>(chars: &'a [Character], sep: char) -> Vec<&'a [Character]> {
    let mut result = Vec::new();
    let mut start = 0;
    for (i, c) in chars.iter().enumerate() {
        if c.ch == sep {
            if i > start {
                result.push(&chars[start..i]);
            }
            start = i + 1;
        }
    }
    if start != chars.len() {
        result.push(&chars[start..]);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicta_lexer::character::raw_text;

    fn chars(text: &str) -> Vec<Character> {
        text.chars().map(Character::plain).collect()
    }

    #[test]
    fn test_strip_whitespace() {
        let input = chars("  кол\t");
        assert_eq!(raw_text(strip_characters(&input, None)), "кол");
    }

    #[test]
    fn test_strip_custom_set() {
        let input = chars("(kol)");
        assert_eq!(raw_text(strip_characters(&input, Some("()"))), "kol");
    }

    #[test]
    fn test_strip_everything() {
        let input = chars("   ");
        assert!(strip_characters(&input, None).is_empty());
    }

    #[test]
    fn test_split_on_drops_empty_segments() {
        let input = chars("a;;b;");
        let parts = split_on(&input, ';');
        assert_eq!(parts.len(), 2);
        assert_eq!(raw_text(parts[0]), "a");
        assert_eq!(raw_text(parts[1]), "b");
    }

    #[test]
    fn test_split_without_separator() {
        let input = chars("abc");
        let parts = split_on(&input, ';');
        assert_eq!(parts.len(), 1);
        assert_eq!(raw_text(parts[0]), "abc");
    }
}
