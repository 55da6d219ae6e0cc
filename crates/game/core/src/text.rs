//! Small text-assembly helpers shared by narration code.
//!
//! Everything here is pure string manipulation: articles, pluralization,
//! comma-joined lists, and the fixed-column word wrap the client applies to
//! each turn's output block.

/// Prefixes `description` with its indefinite article.
pub fn a(description: &str) -> String {
    let article = match description.chars().next() {
        Some(c) if "aeiouAEIOU".contains(c) => "an",
        _ => "a",
    };
    format!("{article} {description}")
}

/// Naive pluralization: appends "s" unless the count is exactly one.
pub fn plural(word: &str, count: i32) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// A count followed by the correctly pluralized unit, e.g. "3 hit points".
pub fn number_of(count: i32, word: &str) -> String {
    format!("{count} {}", plural(word, count))
}

/// Joins items with commas and a final "and": "a, b, and c".
pub fn commify(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Greedy word wrap at `width` columns. Words longer than `width` get a line
/// of their own rather than being split.
pub fn wrap(s: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in s.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn articles() {
        assert_eq!(a("ring of great power"), "a ring of great power");
        assert_eq!(a("axe"), "an axe");
        assert_eq!(a("open door"), "an open door");
    }

    #[test]
    fn plurals() {
        assert_eq!(number_of(1, "hit point"), "1 hit point");
        assert_eq!(number_of(3, "hit point"), "3 hit points");
        assert_eq!(number_of(0, "hit point"), "0 hit points");
    }

    #[test]
    fn commify_lists() {
        assert_eq!(commify(&[]), "");
        assert_eq!(commify(&["a sword".into()]), "a sword");
        assert_eq!(commify(&["a sword".into(), "an axe".into()]), "a sword and an axe");
        assert_eq!(
            commify(&["a sword".into(), "an axe".into(), "a ring".into()]),
            "a sword, an axe, and a ring"
        );
    }

    #[test]
    fn capitalize_phrases() {
        assert_eq!(capitalize("on the floor"), "On the floor");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn wrap_respects_width() {
        let wrapped = wrap("the quick brown fox jumps over the lazy dog", 15);
        for line in wrapped.lines() {
            assert!(line.len() <= 15, "line too long: {line:?}");
        }
        assert_eq!(wrapped.split_whitespace().count(), 9);
    }

    #[test]
    fn wrap_keeps_oversized_words_whole() {
        let wrapped = wrap("hi incomprehensibilities yo", 10);
        assert_eq!(wrapped, "hi\nincomprehensibilities\nyo");
    }
}
