//! Integration tests for gmail-dot-forge

use assert_cmd::Command;
use gmail_dot_forge::{
    address::{self, AddressValidator},
    export, generate_variants,
    types::{GenerationReport, GenerationRequest},
    DotForgeError, PatternGenerator, PreferenceStore, Theme, MAX_VARIATIONS,
};
use predicates::prelude::*;
use std::collections::HashSet;
use tempfile::TempDir;

fn cli(prefs: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gmail-dot-forge").unwrap();
    cmd.env("DOT_FORGE_PREFS_PATH", prefs.path().join("prefs.json"))
        .env_remove("DOT_FORGE_MAX_VARIATIONS")
        .env_remove("DOT_FORGE_DOMAINS")
        .env_remove("DOT_FORGE_EXPORT_PATH")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_full_space_for_every_length() {
    let base = "abcdefghij";
    for len in 2..=base.len() {
        let username = &base[..len];
        let total = (1_usize << (len - 1)) - 1;
        let variants = generate_variants(username, total);

        assert_eq!(variants.len(), total, "length {}", len);
        let unique: HashSet<_> = variants.iter().collect();
        assert_eq!(unique.len(), total);

        for variant in &variants {
            assert_ne!(variant, username);
            assert!(variant.len() >= len && variant.len() <= 2 * len - 1);
            assert_eq!(variant.replace('.', ""), username);
        }
    }
}

#[test]
fn test_single_character_username() {
    for n in [1, 5, 1000] {
        assert!(generate_variants("x", n).is_empty());
    }
}

#[test]
fn test_concrete_scenarios() {
    assert_eq!(generate_variants("ab", 10), vec!["a.b"]);
    assert_eq!(generate_variants("abc", 10), vec!["ab.c", "a.bc", "a.b.c"]);
    assert_eq!(generate_variants("abc", 1), vec!["ab.c"]);
}

#[test]
fn test_request_larger_than_space() {
    assert_eq!(generate_variants("abcd", MAX_VARIATIONS).len(), 7);
}

#[test]
fn test_ordering_is_stable() {
    let first = generate_variants("johnsmith", 100);
    let second = generate_variants("johnsmith", 100);
    assert_eq!(first, second);

    let longer = generate_variants("johnsmith", 101);
    assert_eq!(first[..], longer[..100]);
}

#[test]
fn test_generator_iterator_agrees_with_generate() {
    let from_iter: Vec<String> = PatternGenerator::new("gmail").take(10).collect();
    assert_eq!(from_iter, generate_variants("gmail", 10));
}

#[test]
fn test_validate_generate_compose_flow() {
    let validator = AddressValidator::new();
    let validated = validator.validate("AbC@gmail.com").unwrap();

    let request = GenerationRequest::new(validated.username.clone(), address::clamp_count("10", MAX_VARIATIONS));
    let addresses = address::compose(&request.generate(), &validated.domain);

    assert_eq!(addresses, vec!["ab.c@gmail.com", "a.bc@gmail.com", "a.b.c@gmail.com"]);
    for generated in &addresses {
        assert_eq!(address::canonical(generated), "abc@gmail.com");
    }
}

#[test]
fn test_validation_rejects_bad_input() {
    let validator = AddressValidator::new();
    for input in ["", "john", "@gmail.com", "john.doe@gmail.com", "john@yahoo.com"] {
        let err = validator.validate(input).unwrap_err();
        assert!(matches!(err, DotForgeError::Validation { .. }), "{input}");
    }
}

#[test]
fn test_export_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gmail-variations.txt");
    let addresses = address::compose(&generate_variants("abcd", 5), "gmail.com");

    export::write_plaintext(&path, &addresses).unwrap();
    assert_eq!(export::read_plaintext(&path).unwrap(), addresses);

    let report = GenerationReport::new("abcd@gmail.com", "gmail.com", 5, addresses.clone());
    let json_path = dir.path().join("report.json");
    export::write_json(&json_path, &report).unwrap();
    assert_eq!(export::read_json(&json_path).unwrap().addresses, addresses);
}

#[test]
fn test_theme_preference_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");

    let store = PreferenceStore::open(&path).unwrap();
    assert_eq!(store.toggle_theme().unwrap(), Theme::Dark);
    drop(store);

    let store = PreferenceStore::open(&path).unwrap();
    assert_eq!(store.theme(), Some(Theme::Dark));
}

#[test]
fn test_cli_generates_addresses() {
    let prefs = TempDir::new().unwrap();
    cli(&prefs)
        .args(["ab@gmail.com", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.b@gmail.com"))
        .stdout(predicate::str::contains("Generated 1 address(es)"));
}

#[test]
fn test_cli_clamps_count() {
    let prefs = TempDir::new().unwrap();
    cli(&prefs)
        .args(["abc@gmail.com", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ab.c@gmail.com"))
        .stdout(predicate::str::contains("a.bc@gmail.com").not());
}

#[test]
fn test_cli_rejects_invalid_address() {
    let prefs = TempDir::new().unwrap();
    cli(&prefs)
        .args(["john@yahoo.com", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a Gmail domain"));
}

#[test]
fn test_cli_single_character_username() {
    let prefs = TempDir::new().unwrap();
    cli(&prefs)
        .args(["a@gmail.com", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No addresses could be generated"));
}

#[test]
fn test_cli_export() {
    let prefs = TempDir::new().unwrap();
    let out = prefs.path().join("out/variants.txt");

    cli(&prefs)
        .args(["abc@gmail.com", "10", "--export"])
        .arg(&out)
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).unwrap();
    assert_eq!(content, "ab.c@gmail.com\na.bc@gmail.com\na.b.c@gmail.com");
}

#[test]
fn test_cli_export_bare_filename() {
    let prefs = TempDir::new().unwrap();

    cli(&prefs)
        .current_dir(prefs.path())
        .args(["abc@gmail.com", "--export", "variants"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Addresses (3)"))
        .stdout(predicate::str::contains("Exported to variants"));

    let content = std::fs::read_to_string(prefs.path().join("variants")).unwrap();
    assert_eq!(content.lines().count(), 3);
    assert!(!prefs.path().join("gmail-variations.txt").exists());
}

#[test]
fn test_cli_help_lists_export_alias() {
    let prefs = TempDir::new().unwrap();
    cli(&prefs)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--export|-o"));
}

#[test]
fn test_cli_theme_toggle() {
    let prefs = TempDir::new().unwrap();

    cli(&prefs)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"));

    cli(&prefs)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current theme: dark"));
}

#[test]
fn test_cli_unknown_option() {
    let prefs = TempDir::new().unwrap();
    cli(&prefs)
        .args(["--frobnicate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown option"));
}
