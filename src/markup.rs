//! Markup translation from the `&`-escape convention to the host's native
//! section-sign color codes.

/// The host's native format escape character.
pub const SECTION_CHAR: char = '\u{a7}';

/// Code letters the host understands: colors `0-9 a-f`, formats `k-o`, and
/// reset `r`. Case-insensitive.
fn is_format_code(c: char) -> bool {
    matches!(c,
        '0'..='9' | 'a'..='f' | 'A'..='F' | 'k'..='o' | 'K'..='O' | 'r' | 'R')
}

/// Translate every `&x` pair with a valid code letter into the host's native
/// `§x` form. Invalid pairs and a trailing `&` pass through unchanged.
pub fn translate_color_codes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '&' {
            match chars.peek() {
                Some(&next) if is_format_code(next) => {
                    out.push(SECTION_CHAR);
                    out.push(next);
                    chars.next();
                }
                _ => out.push(c),
            }
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translates_color_and_format_codes() {
        assert_eq!(translate_color_codes("&cDenied"), "\u{a7}cDenied");
        assert_eq!(
            translate_color_codes("&8&l»&r &6store"),
            "\u{a7}8\u{a7}l»\u{a7}r \u{a7}6store"
        );
        assert_eq!(translate_color_codes("&E&Nlink"), "\u{a7}E\u{a7}Nlink");
    }

    #[test]
    fn test_invalid_codes_pass_through() {
        assert_eq!(translate_color_codes("fish & chips"), "fish & chips");
        assert_eq!(translate_color_codes("&zplain"), "&zplain");
        assert_eq!(translate_color_codes("trailing &"), "trailing &");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(translate_color_codes("no markup here"), "no markup here");
    }
}
