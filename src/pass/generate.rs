//! Constrained random password generation.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};
use zeroize::Zeroize;

use super::charset::Charset;
use super::error::GenerateError;

/// OS-backed cryptographically secure RNG. Stateless and safe to
/// instantiate per call; never seedable.
fn csprng() -> impl CryptoRng + Rng {
    OsRng
}

/// Generate one password of exactly `length` characters from `charset`.
///
/// The charset itself is never mutated: draws come from a private working
/// copy, so one built charset can serve a whole batch. When
/// `max_duplicates > 0`, a character that reaches the cap is removed from
/// the working copy and cannot be drawn again for this password. The
/// working copy is checked before every draw; if it empties short of the
/// target length the call fails instead of looping.
pub fn generate(
    charset: &Charset,
    length: usize,
    max_duplicates: usize,
) -> Result<String, GenerateError> {
    if length == 0 {
        return Ok(String::new());
    }
    if charset.is_empty() {
        return Err(GenerateError::EmptyCharset { requested: length });
    }

    // Working copy: each charset character paired with its draw count.
    // Entries are unique, so removing an index removes that character.
    let mut working: Vec<(char, usize)> =
        charset.chars().iter().map(|&c| (c, 0)).collect();

    let mut rng = csprng();
    let mut password = String::with_capacity(length);

    for drawn in 0..length {
        if working.is_empty() {
            password.zeroize();
            return Err(GenerateError::ExhaustedCharset {
                generated: drawn,
                requested: length,
            });
        }

        let idx = rng.gen_range(0..working.len());
        let entry = &mut working[idx];
        let c = entry.0;
        entry.1 += 1;
        let capped = max_duplicates > 0 && entry.1 >= max_duplicates;

        password.push(c);
        if capped {
            working.swap_remove(idx);
        }
    }

    Ok(password)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::pass::charset::{self, CharsetSpec};

    fn charset_of(chars: &str) -> Charset {
        charset::build(&CharsetSpec {
            additional: chars.into(),
            ..CharsetSpec::default()
        })
    }

    fn counts(password: &str) -> HashMap<char, usize> {
        let mut map = HashMap::new();
        for c in password.chars() {
            *map.entry(c).or_insert(0) += 1;
        }
        map
    }

    #[test]
    fn zero_length_is_empty() {
        let charset = charset_of("abc");
        assert_eq!(generate(&charset, 0, 0), Ok(String::new()));
        // Also fine on an empty charset: no draws are performed.
        assert_eq!(generate(&charset_of(""), 0, 0), Ok(String::new()));
    }

    #[test]
    fn empty_charset_is_rejected() {
        assert_eq!(
            generate(&charset_of(""), 4, 0),
            Err(GenerateError::EmptyCharset { requested: 4 })
        );
    }

    #[test]
    fn unlimited_duplicates_hit_exact_length() {
        let charset = charset_of("ab");
        for _ in 0..3 {
            let password = generate(&charset, 8, 0).unwrap();
            assert_eq!(password.chars().count(), 8);
            assert!(password.chars().all(|c| charset.chars().contains(&c)));
        }
    }

    #[test]
    fn duplicate_cap_is_respected() {
        let charset = charset_of("abcdefgh");
        for _ in 0..20 {
            let password = generate(&charset, 16, 2).unwrap();
            assert_eq!(password.chars().count(), 16);
            assert!(counts(&password).values().all(|&n| n <= 2));
        }
    }

    #[test]
    fn cap_of_one_forces_a_permutation() {
        let charset = charset_of("abcde");
        let password = generate(&charset, 5, 1).unwrap();
        assert_eq!(password.chars().count(), 5);
        assert!(counts(&password).values().all(|&n| n == 1));
        assert!(password.chars().all(|c| charset.chars().contains(&c)));
    }

    #[test]
    fn exhaustion_fails_instead_of_hanging() {
        let charset = charset_of("ab");
        assert_eq!(
            generate(&charset, 6, 1),
            Err(GenerateError::ExhaustedCharset {
                generated: 2,
                requested: 6,
            })
        );
    }

    #[test]
    fn length_at_the_exhaustion_boundary_succeeds() {
        // Charset of 3, cap 2: exactly 6 draws are possible.
        let charset = charset_of("abc");
        let password = generate(&charset, 6, 2).unwrap();
        assert_eq!(password.chars().count(), 6);
        assert!(counts(&password).values().all(|&n| n == 2));
    }

    #[test]
    fn source_charset_survives_a_batch() {
        let charset = charset_of("abc");
        let before = charset.clone();
        for _ in 0..4 {
            generate(&charset, 3, 1).unwrap();
        }
        assert_eq!(charset, before);
    }

    #[test]
    fn non_ascii_charsets_generate() {
        let charset = charset_of("äöü漢字");
        let password = generate(&charset, 10, 0).unwrap();
        assert_eq!(password.chars().count(), 10);
        assert!(password.chars().all(|c| charset.chars().contains(&c)));
    }
}
