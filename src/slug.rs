//! Slug generation for identifiers and URLs.
//!
//! [`slug_with`] runs a fixed pipeline over the input: camel-case word
//! boundaries are marked, non-alphanumeric runs collapse to the separator,
//! extended characters are transliterated to ASCII, leftovers are stripped,
//! separators are trimmed and de-duplicated, and the result is lowercased.
//! An input the pipeline reduces to nothing is returned unchanged.

use deunicode::deunicode;
use regex::{NoExpand, Regex};

/// Shorthand for [`slug_with`] using `-` in strict mode.
pub fn slug(input: &str) -> String {
    slug_with(input, '-', false)
}

/// Create the slug version of a string.
///
/// `separator` delimits words in the output. In lenient mode, existing `-`
/// and `_` characters count as valid separators and are preserved instead of
/// being collapsed into `separator`.
pub fn slug_with(input: &str, separator: char, lenient: bool) -> String {
    let mut separators = vec![separator];
    if lenient {
        for candidate in ['-', '_'] {
            if !separators.contains(&candidate) {
                separators.push(candidate);
            }
        }
    }

    match run_pipeline(input, separator, &separators) {
        Some(result) if !result.is_empty() => result,
        _ => input.to_string(),
    }
}

fn run_pipeline(input: &str, separator: char, separators: &[char]) -> Option<String> {
    let class = class_pattern(separators);
    let sep = separator.to_string();

    let mut current = insert_word_boundaries(input.trim(), separator, separators);
    if current.is_empty() {
        return None;
    }

    // Replace runs of anything that is not a letter, digit, or separator.
    let non_word = Regex::new(&format!("[^\\p{{L}}0-9{}]+", class)).ok()?;
    current = non_word.replace_all(&current, NoExpand(&sep)).into_owned();
    if current.is_empty() {
        return None;
    }

    current = deunicode(&current);
    if current.is_empty() {
        return None;
    }

    // Drop whatever transliteration left behind that is not a word
    // character or separator.
    let residual = Regex::new(&format!("[^{}\\w]+", class)).ok()?;
    current = residual.replace_all(&current, NoExpand("")).into_owned();
    if current.is_empty() {
        return None;
    }

    current = current
        .trim()
        .trim_matches(|c: char| separators.contains(&c))
        .to_string();
    if current.is_empty() {
        return None;
    }

    let runs = Regex::new(&format!("[{}]{{2,}}", class)).ok()?;
    current = runs.replace_all(&current, NoExpand(&sep)).into_owned();
    if current.is_empty() {
        return None;
    }

    Some(current.to_lowercase())
}

/// Mark camel-case word boundaries with the separator.
///
/// A boundary starts at an uppercase letter, or at a digit run that leads
/// straight into an uppercase letter, unless the preceding character is
/// itself uppercase or an already-valid separator.
fn insert_word_boundaries(input: &str, separator: char, separators: &[char]) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 8);
    let mut index = 0;

    while index < chars.len() {
        let current = chars[index];
        let guarded = index > 0 && {
            let prev = chars[index - 1];
            prev.is_ascii_uppercase() || separators.contains(&prev)
        };

        if current.is_ascii_uppercase() {
            if !guarded {
                out.push(separator);
            }
            out.push(current);
            index += 1;
        } else if current.is_ascii_digit() {
            let mut end = index;
            while end < chars.len() && chars[end].is_ascii_digit() {
                end += 1;
            }
            let bridges_words = end < chars.len() && chars[end].is_ascii_uppercase();
            if bridges_words && !guarded {
                out.push(separator);
            }
            out.extend(&chars[index..end]);
            index = end;
        } else {
            out.push(current);
            index += 1;
        }
    }

    out
}

/// Render the separator set as a regex character-class fragment.
fn class_pattern(separators: &[char]) -> String {
    let mut pattern = String::new();
    for sep in separators {
        if sep.is_ascii_punctuation() {
            pattern.push('\\');
        }
        pattern.push(*sep);
    }
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_matrix_covers_separators_and_modes() {
        let cases: &[(&str, &str, char, bool)] = &[
            ("", "", '-', false),
            ("test", "test", '-', false),
            ("testStringIsSlugified", "test-string-is-slugified", '-', false),
            ("testString2IsSlugified", "test-string-2-is-slugified", '-', false),
            ("test_string_is_slugified", "test-string-is-slugified", '-', false),
            ("test_string_2_is_slugified", "test-string-2-is-slugified", '-', false),
            ("Lorem dolor sit", "lorem-dolor-sit", '-', false),
            (
                "Lorem dolor sit 23 et lorem 89",
                "lorem-dolor-sit-23-et-lorem-89",
                '-',
                false,
            ),
            ("", "", '_', false),
            ("test", "test", '_', false),
            ("testStringIsSlugified", "test_string_is_slugified", '_', false),
            ("testString2IsSlugified", "test_string_2_is_slugified", '_', false),
            ("test_string_is_slugified", "test_string_is_slugified", '_', false),
            ("test_string_2_is_slugified", "test_string_2_is_slugified", '_', false),
            ("Lorem dolor sit", "lorem_dolor_sit", '_', false),
            (
                "Lorem dolor sit 23 et lorem 89",
                "lorem_dolor_sit_23_et_lorem_89",
                '_',
                false,
            ),
            ("testStringIsSlugified", "test-string-is-slugified", '-', true),
            ("testString2IsSlugified", "test-string-2-is-slugified", '-', true),
            ("test_string_is_slugified", "test_string_is_slugified", '-', true),
            ("test_string_Is_Slugified", "test_string_is_slugified", '-', true),
            ("test_string_23_is_slugified", "test_string_23_is_slugified", '-', true),
            ("test_string_2_is_slugified", "test_string_2_is_slugified", '-', true),
            ("testStringIsSlugified", "test_string_is_slugified", '_', true),
            ("testString2IsSlugified", "test_string_2_is_slugified", '_', true),
            ("test_string_is_slugified", "test_string_is_slugified", '_', true),
            ("test_string_2_is_slugified", "test_string_2_is_slugified", '_', true),
            ("test-string-is-slugified", "test-string-is-slugified", '_', true),
            ("test-string-2-is-slugified", "test-string-2-is-slugified", '_', true),
        ];

        for (input, expected, separator, lenient) in cases {
            assert_eq!(
                slug_with(input, *separator, *lenient),
                *expected,
                "slug_with({:?}, {:?}, {})",
                input,
                separator,
                lenient
            );
        }
    }

    #[test]
    fn clean_input_passes_through() {
        assert_eq!(slug("cat1"), "cat1");
    }

    #[test]
    fn trailing_digits_stay_attached() {
        assert_eq!(slug("plugin2"), "plugin2");
        assert_eq!(slug("testString2"), "test-string2");
    }

    #[test]
    fn punctuation_collapses_to_single_separators() {
        assert_eq!(slug("Hello, World!"), "hello-world");
        assert_eq!(slug("  spaced   out  "), "spaced-out");
    }

    #[test]
    fn extended_characters_transliterate_to_ascii() {
        assert_eq!(slug("crème brûlée"), "creme-brulee");
        assert_eq!(slug("Übermäßig"), "ubermassig");
    }

    #[test]
    fn input_with_no_slug_content_is_returned_unchanged() {
        assert_eq!(slug("!!!"), "!!!");
        assert_eq!(slug("   "), "   ");
    }

    #[test]
    fn consecutive_capitals_get_a_single_boundary() {
        assert_eq!(slug("parseHTTPResponse"), "parse-httpresponse");
    }

    #[test]
    fn lenient_mode_keeps_mixed_existing_separators() {
        assert_eq!(
            slug_with("snake_case-and-kebab", '-', true),
            "snake_case-and-kebab"
        );
    }
}
