//! Character set construction for password generation.

use std::collections::BTreeSet;
use std::fmt;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Which character sources feed the charset. Assembled once per generation
/// request; the builder never sees live UI state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharsetSpec {
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub punctuation: bool,
    pub space: bool,
    pub additional: String,
    pub blacklist: String,
}

impl CharsetSpec {
    /// True when at least one class is enabled or custom characters were
    /// supplied. A spec failing this can only build an empty charset.
    pub fn has_sources(&self) -> bool {
        self.upper
            || self.lower
            || self.digits
            || self.punctuation
            || self.space
            || !self.additional.is_empty()
    }
}

/// A deduplicated character pool, kept in sorted order so its display form
/// is stable across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    chars: Vec<char>,
}

impl Charset {
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Build the charset: union every enabled class with the additional
/// characters, then drop everything on the blacklist. The blacklist wins
/// even over explicitly enabled classes. An empty result is valid; callers
/// reject it before generating.
pub fn build(spec: &CharsetSpec) -> Charset {
    let mut set: BTreeSet<char> = BTreeSet::new();

    if spec.upper {
        set.extend(UPPERCASE.chars());
    }
    if spec.lower {
        set.extend(LOWERCASE.chars());
    }
    if spec.digits {
        set.extend(DIGITS.chars());
    }
    if spec.punctuation {
        set.extend(PUNCTUATION.chars());
    }
    if spec.space {
        set.insert(' ');
    }
    set.extend(spec.additional.chars());

    for c in spec.blacklist.chars() {
        set.remove(&c);
    }

    Charset {
        chars: set.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> CharsetSpec {
        CharsetSpec::default()
    }

    fn has(charset: &Charset, c: char) -> bool {
        charset.chars().contains(&c)
    }

    #[test]
    fn classes_union() {
        let charset = build(&CharsetSpec {
            upper: true,
            digits: true,
            ..spec()
        });
        assert_eq!(charset.len(), 36);
        assert!(has(&charset, 'A'));
        assert!(has(&charset, '7'));
        assert!(!has(&charset, 'a'));
    }

    #[test]
    fn additional_is_deduplicated() {
        let charset = build(&CharsetSpec {
            additional: "aabbcc".into(),
            ..spec()
        });
        assert_eq!(charset.len(), 3);
        assert_eq!(charset.to_string(), "abc");
    }

    #[test]
    fn blacklist_wins_over_classes() {
        let charset = build(&CharsetSpec {
            upper: true,
            lower: true,
            digits: true,
            blacklist: "O0Il1".into(),
            ..spec()
        });
        assert_eq!(charset.len(), 26 + 26 + 10 - 5);
        for c in "O0Il1".chars() {
            assert!(!has(&charset, c), "{c:?} should be excluded");
        }
        assert!(has(&charset, 'P'));
        assert!(has(&charset, '2'));
    }

    #[test]
    fn blacklist_wins_over_additional() {
        let charset = build(&CharsetSpec {
            additional: "xyz".into(),
            blacklist: "y".into(),
            ..spec()
        });
        assert_eq!(charset.to_string(), "xz");
    }

    #[test]
    fn space_toggle() {
        let charset = build(&CharsetSpec {
            space: true,
            ..spec()
        });
        assert_eq!(charset.len(), 1);
        assert!(has(&charset, ' '));
    }

    #[test]
    fn empty_spec_builds_empty_charset() {
        let charset = build(&spec());
        assert!(charset.is_empty());
        assert!(!spec().has_sources());
    }

    #[test]
    fn blacklist_can_empty_the_charset() {
        let charset = build(&CharsetSpec {
            additional: "ab".into(),
            blacklist: "ba".into(),
            ..spec()
        });
        assert!(charset.is_empty());
    }

    #[test]
    fn build_is_idempotent() {
        let s = CharsetSpec {
            lower: true,
            punctuation: true,
            additional: "ä漢".into(),
            blacklist: "a!".into(),
            ..spec()
        };
        assert_eq!(build(&s), build(&s));
    }

    #[test]
    fn display_is_sorted() {
        let charset = build(&CharsetSpec {
            additional: "cba".into(),
            ..spec()
        });
        assert_eq!(charset.to_string(), "abc");
    }

    #[test]
    fn punctuation_matches_ascii_set() {
        let charset = build(&CharsetSpec {
            punctuation: true,
            ..spec()
        });
        assert_eq!(charset.len(), 32);
        assert!(charset.chars().iter().all(|c| c.is_ascii_punctuation()));
    }
}
