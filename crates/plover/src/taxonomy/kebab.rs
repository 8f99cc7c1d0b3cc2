/// Normalizes a taxonomy title into a kebab-case slug.
///
/// Apostrophes are dropped, camel case humps and letter/digit transitions
/// become word boundaries, and the result is transliterated to lowercase
/// ASCII with every run of other characters collapsed into a single hyphen.
///
/// Distinct titles can normalize to the same slug (`"Node.js"` and
/// `"Node JS"` both become `"node-js"`).
pub fn kebab_case(title: &str) -> String {
    let chars = title
        .chars()
        .filter(|ch| !is_apostrophe(*ch))
        .collect::<Vec<_>>();

    let mut words = String::with_capacity(title.len() + 4);

    for (index, &ch) in chars.iter().enumerate() {
        let next = chars.get(index + 1).copied();

        if index > 0 && is_word_boundary(chars[index - 1], ch, next) {
            words.push(' ');
        }

        words.push(ch);
    }

    slug::slugify(words)
}

/// Whether a new word starts at `ch`, given its neighbors.
fn is_word_boundary(previous: char, ch: char, next: Option<char>) -> bool {
    if ch.is_uppercase() {
        let is_hump = previous.is_lowercase() || previous.is_numeric();
        let ends_acronym = previous.is_uppercase() && next.is_some_and(char::is_lowercase);

        return is_hump || ends_acronym;
    }

    (previous.is_alphabetic() && ch.is_numeric())
        || (previous.is_numeric() && ch.is_alphabetic())
}

fn is_apostrophe(ch: char) -> bool {
    matches!(ch, '\'' | '\u{2019}')
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_kebab_case_words() {
        assert_eq!(kebab_case("Open Source"), "open-source");
        assert_eq!(kebab_case("news"), "news");
        assert_eq!(kebab_case("  --Rust--  "), "rust");
        assert_eq!(kebab_case("snake_case_tag"), "snake-case-tag");
    }

    #[test]
    fn test_kebab_case_strips_symbols() {
        assert_eq!(kebab_case("C++"), "c");
        assert_eq!(kebab_case("C#"), "c");
        assert_eq!(kebab_case("++"), "");
    }

    #[test]
    fn test_kebab_case_camel_case() {
        assert_eq!(kebab_case("JavaScript"), "java-script");
        assert_eq!(kebab_case("XMLHttpRequest"), "xml-http-request");
        assert_eq!(kebab_case("HTML"), "html");
    }

    #[test]
    fn test_kebab_case_digits() {
        assert_eq!(kebab_case("HTML5"), "html-5");
        assert_eq!(kebab_case("ES6"), "es-6");
        assert_eq!(kebab_case("Web3"), "web-3");
        assert_eq!(kebab_case("foo2bar"), "foo-2-bar");
        assert_eq!(kebab_case("3D Printing"), "3-d-printing");
        assert_eq!(kebab_case("2024"), "2024");
    }

    #[test]
    fn test_kebab_case_apostrophes() {
        assert_eq!(kebab_case("Don't Panic"), "dont-panic");
        assert_eq!(kebab_case("Don\u{2019}t Panic"), "dont-panic");
    }

    #[test]
    fn test_kebab_case_transliterates() {
        assert_eq!(kebab_case("Café"), "cafe");
        assert_eq!(kebab_case("日本語"), "ri-ben-yu");
    }

    #[test]
    fn test_kebab_case_collisions() {
        assert_eq!(kebab_case("Node.js"), "node-js");
        assert_eq!(kebab_case("Node JS"), "node-js");
    }
}
