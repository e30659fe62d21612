use crate::*;
use caesar_core::{AnalyzerConfig, CaesarError, Direction, FrequencyTable, Shift};

fn shift(n: i64) -> Shift {
    Shift::new(n).unwrap()
}

fn all_shifts() -> impl Iterator<Item = Shift> {
    (0..26).map(shift)
}

fn pangram_dictionary() -> Dictionary {
    Dictionary::from_words(["the", "cat", "sat", "on", "mat"])
}

// ========== Cipher ==========

#[test]
fn test_transform_wraps_at_z() {
    assert_eq!(transform('Z', shift(1), Direction::Encrypt), 'A');
    assert_eq!(transform('z', shift(1), Direction::Encrypt), 'a');
}

#[test]
fn test_transform_decrypt_wraps_below_a() {
    // offset 0 - 3 must land on 23, not underflow
    assert_eq!(transform('a', shift(3), Direction::Decrypt), 'x');
    assert_eq!(transform('C', shift(25), Direction::Decrypt), 'D');
}

#[test]
fn test_transform_round_trip_all_letters() {
    for c in ('a'..='z').chain('A'..='Z') {
        for k in all_shifts() {
            let enc = transform(c, k, Direction::Encrypt);
            assert_eq!(transform(enc, k, Direction::Decrypt), c, "{c} with {k}");
        }
    }
}

#[test]
fn test_transform_non_letters_unchanged() {
    for c in [' ', '1', ',', '!', '\n', 'é', 'ß', '中'] {
        for k in all_shifts() {
            assert_eq!(transform(c, k, Direction::Encrypt), c);
            assert_eq!(transform(c, k, Direction::Decrypt), c);
        }
    }
}

#[test]
fn test_transform_preserves_case() {
    for k in all_shifts() {
        assert!(transform('a', k, Direction::Encrypt).is_ascii_lowercase());
        assert!(transform('A', k, Direction::Encrypt).is_ascii_uppercase());
    }
}

#[test]
fn test_encrypt_hello_world() {
    assert_eq!(encrypt("Hello, World!", shift(3)), "Khoor, Zruog!");
    assert_eq!(decrypt("Khoor, Zruog!", shift(3)), "Hello, World!");
}

#[test]
fn test_encrypt_zero_is_identity() {
    let text = "Mixed CASE, digits 123 and symbols #!";
    assert_eq!(encrypt(text, Shift::ZERO), text);
}

#[test]
fn test_shift_additivity() {
    let text = "The Quick Brown Fox Jumps Over The Lazy Dog.";
    for k in all_shifts() {
        let once = encrypt(text, k);
        assert_eq!(encrypt(&once, k.inverse()), text);
    }
}

#[test]
fn test_apply_matches_direction() {
    assert_eq!(cipher::apply("abc", shift(1), Direction::Encrypt), "bcd");
    assert_eq!(cipher::apply("abc", shift(1), Direction::Decrypt), "zab");
}

// ========== Dictionary ==========

#[test]
fn test_dictionary_uppercases_and_dedups() {
    let dict = Dictionary::from_words(["apple", "Apple", "APPLE", "pear"]);
    assert_eq!(dict.len(), 2);
    assert!(dict.contains("APPLE"));
    assert!(dict.contains("pear"));
}

#[test]
fn test_dictionary_skips_blank_words() {
    let dict = Dictionary::from_words(["", "one", ""]);
    assert_eq!(dict.len(), 1);
}

#[test]
fn test_dictionary_empty() {
    let dict = Dictionary::default();
    assert!(dict.is_empty());
    assert!(!dict.contains("anything"));
}

#[test]
fn test_match_fraction_raw_tokens() {
    let dict = Dictionary::from_words(["hello", "world"]);
    assert_eq!(dict.match_fraction("hello world", false), Some(1.0));
    assert_eq!(dict.match_fraction("Hello, World!", false), Some(0.0));
    assert_eq!(dict.match_fraction("hello there", false), Some(0.5));
}

#[test]
fn test_match_fraction_strip_punctuation() {
    let dict = Dictionary::from_words(["hello", "world"]);
    assert_eq!(dict.match_fraction("Hello, World!", true), Some(1.0));
    assert_eq!(dict.match_fraction("\"hello\" ...", true), Some(0.5));
}

#[test]
fn test_match_fraction_no_tokens() {
    let dict = Dictionary::from_words(["hello"]);
    assert_eq!(dict.match_fraction("", false), None);
    assert_eq!(dict.match_fraction("  \t\n ", true), None);
}

// ========== Letter counts ==========

#[test]
fn test_counts_case_folded() {
    let counts = LetterCounts::from_text("aAb, 12!");
    assert_eq!(counts.count('a'), 2);
    assert_eq!(counts.count('B'), 1);
    assert_eq!(counts.count('1'), 0);
    assert_eq!(counts.total(), 3);
}

#[test]
fn test_most_frequent() {
    assert_eq!(LetterCounts::from_text("Khoor, Zruog!").most_frequent(), Some('O'));
}

#[test]
fn test_most_frequent_tie_is_alphabetical() {
    assert_eq!(LetterCounts::from_text("bbaa").most_frequent(), Some('A'));
    assert_eq!(LetterCounts::from_text("zzyy").most_frequent(), Some('Y'));
    assert_eq!(LetterCounts::from_text("wkh").most_frequent(), Some('H'));
}

#[test]
fn test_most_frequent_no_letters() {
    assert_eq!(LetterCounts::from_text("12345").most_frequent(), None);
    assert_eq!(LetterCounts::from_text("").most_frequent(), None);
}

// ========== Recovery ==========

#[test]
fn test_recover_known_shift() {
    let table = FrequencyTable::english();
    let dict = pangram_dictionary();
    let ciphertext = encrypt("the cat sat on the mat", shift(3));
    let recovery = recover_shift_and_plaintext(&ciphertext, &table, &dict).unwrap();
    assert_eq!(recovery.shift.value(), 3);
    assert_eq!(recovery.plaintext, "the cat sat on the mat");
    assert_eq!(recovery.reference_letter, 'T');
    assert_eq!(recovery.attempts, 2);
    assert_eq!(recovery.match_fraction, 1.0);
}

#[test]
fn test_recover_preserves_case_and_punctuation() {
    let table = FrequencyTable::english();
    let dict = pangram_dictionary();
    let plaintext = "The cat sat on the mat 42 times";
    let ciphertext = encrypt(plaintext, shift(3));
    let recovery = recover_shift_and_plaintext(&ciphertext, &table, &dict).unwrap();
    assert_eq!(recovery.plaintext, plaintext);
}

#[test]
fn test_recover_empty_input() {
    let table = FrequencyTable::english();
    let dict = pangram_dictionary();
    assert!(matches!(
        recover_shift_and_plaintext("12345", &table, &dict),
        Err(CaesarError::EmptyInput)
    ));
    assert!(matches!(
        recover_shift_and_plaintext("   ", &table, &dict),
        Err(CaesarError::EmptyInput)
    ));
}

#[test]
fn test_recover_exhausts_after_26_attempts() {
    let table = FrequencyTable::english();
    let dict = Dictionary::from_words(["hello"]);
    assert!(matches!(
        recover_shift_and_plaintext("xqzv jkwp", &table, &dict),
        Err(CaesarError::NoCandidateFound { attempts: 26 })
    ));
}

#[test]
fn test_recover_absolute_difference_misses_wrapped_shift() {
    // 't' shifted by 23 lands on 'q'; |q - r| never reaches 23.
    let table = FrequencyTable::english();
    let dict = pangram_dictionary();
    let ciphertext = encrypt("the cat sat on the mat", shift(23));
    assert!(matches!(
        recover_shift_and_plaintext(&ciphertext, &table, &dict),
        Err(CaesarError::NoCandidateFound { attempts: 26 })
    ));
}

#[test]
fn test_recover_raw_tokens_reject_punctuation() {
    let table = FrequencyTable::english();
    let dict = Dictionary::from_words(["hello", "world"]);
    assert!(matches!(
        recover_shift_and_plaintext("Khoor, Zruog!", &table, &dict),
        Err(CaesarError::NoCandidateFound { .. })
    ));
}

#[test]
fn test_recover_strip_punctuation_opt_in() {
    let table = FrequencyTable::english();
    let dict = Dictionary::from_words(["hello", "world"]);
    let config = AnalyzerConfig { strip_punctuation: true, ..AnalyzerConfig::default() };
    let recovery = KeyRecovery::new(&table, &dict)
        .with_config(config)
        .recover("Khoor, Zruog!")
        .unwrap();
    assert_eq!(recovery.plaintext, "Hello, World!");
    assert_eq!(recovery.shift.value(), 3);
    assert_eq!(recovery.reference_letter, 'R');
}

#[test]
fn test_recover_max_candidates_bound() {
    let table = FrequencyTable::english();
    let dict = pangram_dictionary();
    let ciphertext = encrypt("the cat sat on the mat", shift(3));
    let config = AnalyzerConfig { max_candidates: 1, ..AnalyzerConfig::default() };
    let engine = KeyRecovery::new(&table, &dict).with_config(config);
    assert!(matches!(
        engine.recover(&ciphertext),
        Err(CaesarError::NoCandidateFound { attempts: 1 })
    ));
}

#[test]
fn test_recover_threshold() {
    let table = FrequencyTable::english();
    let dict = Dictionary::from_words(["the", "cat"]);
    let ciphertext = encrypt("the cat sat on the mat", shift(3));
    // 3 of 6 tokens known: exactly at the default threshold
    let recovery = recover_shift_and_plaintext(&ciphertext, &table, &dict).unwrap();
    assert_eq!(recovery.match_fraction, 0.5);

    let strict = AnalyzerConfig { match_threshold: 0.6, ..AnalyzerConfig::default() };
    assert!(KeyRecovery::new(&table, &dict)
        .with_config(strict)
        .recover(&ciphertext)
        .is_err());
}

#[test]
fn test_recover_rejects_invalid_config() {
    let table = FrequencyTable::english();
    let dict = pangram_dictionary();
    let config = AnalyzerConfig { max_candidates: 0, ..AnalyzerConfig::default() };
    assert!(matches!(
        KeyRecovery::new(&table, &dict).with_config(config).recover("abc"),
        Err(CaesarError::InvalidConfig(_))
    ));
}

#[test]
fn test_candidates_ranked() {
    let table = FrequencyTable::english();
    let dict = Dictionary::default();
    let candidates = KeyRecovery::new(&table, &dict).candidates("Khoor, Zruog!").unwrap();
    assert_eq!(candidates.len(), 26);
    assert_eq!(candidates[0].reference_letter, 'E');
    assert_eq!(candidates[0].shift.value(), 10);
    assert_eq!(candidates[1].reference_letter, 'T');
    assert_eq!(candidates[1].shift.value(), 5);
}

#[test]
fn test_candidates_empty_input() {
    let table = FrequencyTable::english();
    let dict = Dictionary::default();
    assert!(matches!(
        KeyRecovery::new(&table, &dict).candidates("!!!"),
        Err(CaesarError::EmptyInput)
    ));
}
