//! CLI contract tests: output shape and exit codes of each subcommand.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn cli() -> Command {
    Command::cargo_bin("seq_cli").unwrap()
}

#[test]
fn test_help_lists_subcommands() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("test"))
        .stdout(predicate::str::contains("doc"));
}

#[test]
fn test_search_help_shows_bounds() {
    cli()
        .args(["search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--max-generators"))
        .stdout(predicate::str::contains("--max-coefficient"))
        .stdout(predicate::str::contains("--no-products"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_search_primes() {
    cli()
        .args(["search", "2", "3", "5", "7", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. p\n"))
        .stdout(predicate::str::contains("2 3 5 7 11 13 17 19 23 29"));
}

#[test]
fn test_search_mersenne_exponents() {
    cli()
        .args(["search", "2", "3", "5", "7", "13", "17"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. m_exp\n"))
        .stdout(predicate::str::contains("2 3 5 7 13 17 19 31 61 89"));
}

#[test]
fn test_search_linear_combination() {
    cli()
        .args([
            "search", "10", "15", "25", "35", "71", "97", "101", "191", "419", "625",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. -3 * p + 8 * m_exp"));
}

#[test]
fn test_search_accepts_negative_values() {
    cli()
        .args([
            "search", "2", "-4", "-2", "-7", "-10", "-22", "-39", "-72", "-124", "-209",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. -7 * fib01 + p"));
}

#[test]
fn test_search_without_match_succeeds() {
    cli()
        .args(["search", "1", "1", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no match"));
}

#[test]
fn test_search_rejects_non_integers() {
    cli().args(["search", "1", "x"]).assert().failure();
    cli().arg("search").assert().failure();
}

#[test]
fn test_search_limit() {
    cli()
        .args(["search", "0", "1", "3", "6", "10", "15", "21", "28", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. triangular"))
        .stdout(predicate::str::contains("2. ").not());
}

#[test]
fn test_test_product_is_found() {
    cli()
        .args(["test", "p * zero_one"])
        .assert()
        .success()
        .stdout(predicate::str::contains("canonical: zero_one * p"))
        .stdout(predicate::str::contains("prefix: 0 3 0 7 0 13 0 19 0 29"))
        .stdout(predicate::str::contains("found: zero_one * p"))
        .stdout(predicate::str::contains("not found").not());
}

#[test]
fn test_test_combination_is_found() {
    cli()
        .args(["test", "p - 7 * fib01"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "prefix: 2 -4 -2 -7 -10 -22 -39 -72 -124 -209",
        ))
        .stdout(predicate::str::contains("found: -7 * fib01 + p"));
}

#[test]
fn test_test_miss_is_reported_not_fatal() {
    // equal to triangular, which ranks first
    cli()
        .args(["test", "2 * square - pentagonal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found: 2 * square - pentagonal"));
}

#[test]
fn test_test_unknown_generator_fails() {
    cli()
        .args(["test", "p + nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope"));
}

#[test]
fn test_test_syntax_error_fails() {
    cli()
        .args(["test", "p +"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("syntax error"));
}

#[test]
fn test_test_empty_expression_fails() {
    cli().args(["test", "  "]).assert().failure();
}

#[test]
fn test_doc_lists_everything() {
    cli()
        .arg("doc")
        .assert()
        .success()
        .stdout(predicate::str::contains("zero_one:"))
        .stdout(predicate::str::contains("m_exp:"))
        .stdout(predicate::str::contains("sigma:"));
}

#[test]
fn test_doc_single_generator() {
    cli()
        .args(["doc", "p", "--items", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("p: "))
        .stdout(predicate::str::contains("2 3 5 7 11\n"))
        .stdout(predicate::str::contains("fib01").not());
}

#[test]
fn test_doc_partially_known_generator() {
    cli()
        .args(["doc", "m_exp", "--items", "31"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" 132049\n"))
        .stdout(predicate::str::contains("(only 30 terms known)"));
}

#[test]
fn test_test_past_known_terms_fails() {
    cli()
        .args(["test", "m_exp", "--items", "31"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no known value of m_exp at index 30"));
}

#[test]
fn test_test_deep_nesting_fails() {
    let nested = format!("{}p{}", "(".repeat(500), ")".repeat(500));
    cli()
        .args(["test", nested.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nesting too deep"));
}

#[test]
fn test_doc_unknown_generator_fails() {
    cli()
        .args(["doc", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown generator 'nope'"));
}

#[test]
fn test_config_file_overrides_defaults() {
    let path = std::env::temp_dir().join(format!("seq_cli_config_{}.toml", std::process::id()));
    std::fs::write(&path, "products = false\n").unwrap();
    cli()
        .args(["search", "0", "3", "0", "7", "0", "13", "0", "19", "0", "29"])
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("zero_one * p").not());
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_missing_config_file_fails() {
    cli()
        .args(["search", "1", "2", "--config", "/nonexistent/seq.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config"));
}
