pub(crate) use super::*;

fn tokens(text: &str) -> Vec<String> {
    AlphanumericTokenizer::new()
        .tokenize(text)
        .expect("tokenize should succeed")
}

#[test]
fn test_splits_on_whitespace() {
    assert_eq!(tokens("animation disney magie"), vec!["animation", "disney", "magie"]);
}

#[test]
fn test_splits_on_punctuation() {
    assert_eq!(tokens("crime,drame;tarantino"), vec!["crime", "drame", "tarantino"]);
    assert_eq!(tokens("spider-man"), vec!["spider", "man"]);
}

#[test]
fn test_lowercases() {
    assert_eq!(tokens("SciFi Espace"), vec!["scifi", "espace"]);
}

#[test]
fn test_keeps_unicode_letters_whole() {
    assert_eq!(tokens("Amélie Poulain"), vec!["amélie", "poulain"]);
}

#[test]
fn test_keeps_digits() {
    assert_eq!(tokens("toy story 2"), vec!["toy", "story"]);
    assert_eq!(tokens("blade runner 2049"), vec!["blade", "runner", "2049"]);
}

#[test]
fn test_drops_short_fragments() {
    assert_eq!(tokens("d'Amélie a b"), vec!["amélie"]);
}

#[test]
fn test_min_len_one_keeps_single_chars() {
    let tokenizer = AlphanumericTokenizer::new().with_min_len(1);
    let result = tokenizer.tokenize("a-b c").expect("tokenize should succeed");
    assert_eq!(result, vec!["a", "b", "c"]);
}

#[test]
fn test_min_len_zero_is_clamped() {
    let tokenizer = AlphanumericTokenizer::new().with_min_len(0);
    assert_eq!(tokenizer.min_len(), 1);
    let result = tokenizer.tokenize("--").expect("tokenize should succeed");
    assert!(result.is_empty());
}

#[test]
fn test_preserve_case() {
    let tokenizer = AlphanumericTokenizer::new().with_lowercase(false);
    let result = tokenizer.tokenize("Nolan REVE").expect("tokenize should succeed");
    assert_eq!(result, vec!["Nolan", "REVE"]);
}

#[test]
fn test_empty_and_blank_input() {
    assert!(tokens("").is_empty());
    assert!(tokens("   \t\n").is_empty());
    assert!(tokens("!?.,").is_empty());
}
