//! CLI Integration Tests
//!
//! These tests run the `space` binary end-to-end. Every command gets an
//! explicit config file so a developer's own config cannot leak in.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

const DEFAULT_CONFIG: &str = "{}";

const RELAY_CONFIG: &str = r#"{
    "relay": {
        "service_id": "service_abc",
        "template_id": "template_xyz",
        "public_key": "pk_123"
    }
}"#;

/// Create a CLI command reading `config` from a temp file
fn cli_cmd(dir: &TempDir, config: &str) -> Command {
    let path = dir.path().join("site.json");
    std::fs::write(&path, config).expect("Failed to write config");

    let mut cmd = Command::cargo_bin("space").expect("Failed to find space binary");
    cmd.env_remove("SPACE_EMAILJS_SERVICE_ID")
        .env_remove("SPACE_EMAILJS_TEMPLATE_ID")
        .env_remove("SPACE_EMAILJS_PUBLIC_KEY")
        .arg("--config")
        .arg(path);
    cmd
}

fn jane_doe_args() -> Vec<String> {
    [
        "quote",
        "--name",
        "Jane Doe",
        "--email",
        "jane@x.com",
        "--phone",
        "+911234567890",
        "--service",
        "Frontend",
        "--budget",
        "50k-150k",
        "--deadline",
        "8 weeks",
        "--date",
        "2026-10-16",
        "--description",
    ]
    .iter()
    .map(|s| s.to_string())
    .chain(std::iter::once("x".repeat(60)))
    .collect()
}

// ============================================================================
// Quote Command Tests
// ============================================================================

#[test]
fn test_quote_happy_path() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, DEFAULT_CONFIG)
        .args(jane_doe_args())
        .assert()
        .success()
        .stdout(predicate::str::contains("Quote request ready"))
        .stdout(predicate::str::contains(
            "Subject: Custom Quote Request: Frontend Website Development - Jane Doe",
        ))
        .stdout(predicate::str::contains("Estimate: ₹15,000 - ₹50,000"))
        .stdout(predicate::str::contains("mailto:spaceforwebsite@gmail.com?subject="))
        .stdout(predicate::str::contains("https://wa.me/919110687983?text="));
}

#[test]
fn test_quote_body_includes_date_and_attachment() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, DEFAULT_CONFIG)
        .args(jane_doe_args())
        .args(["--attachment", "brief.pdf", "--attachment-size", "2048", "--body"])
        .assert()
        .success()
        .stdout(predicate::str::contains("16 October 2026"))
        .stdout(predicate::str::contains("Attachment: brief.pdf (2.00 KB)"));
}

#[test]
fn test_quote_invalid_email_stops_at_step_one() {
    let dir = TempDir::new().unwrap();
    let mut args = jane_doe_args();
    let at = args.iter().position(|a| a == "jane@x.com").unwrap();
    args[at] = "not-an-email".to_string();

    cli_cmd(&dir, DEFAULT_CONFIG)
        .args(args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Step 1 (Contact) is incomplete"))
        .stderr(predicate::str::contains("email: Email is invalid"))
        .stdout(predicate::str::contains("mailto:").not());
}

#[test]
fn test_quote_unknown_service_lists_codes() {
    let dir = TempDir::new().unwrap();
    let mut args = jane_doe_args();
    let at = args.iter().position(|a| a == "Frontend").unwrap();
    args[at] = "Blockchain".to_string();

    cli_cmd(&dir, DEFAULT_CONFIG)
        .args(args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Step 2 (Project) is incomplete"))
        .stderr(predicate::str::contains("serviceNeeded: Please select a service"))
        .stderr(predicate::str::contains("accepted services: Frontend, FullStack"));
}

#[test]
fn test_quote_oversized_attachment_rejected() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, DEFAULT_CONFIG)
        .args(jane_doe_args())
        .args(["--attachment", "video.mp4", "--attachment-size", "20000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("video.mp4"));
}

// ============================================================================
// Contact Command Tests
// ============================================================================

#[test]
fn test_contact_prints_links() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, DEFAULT_CONFIG)
        .args([
            "contact",
            "--name",
            "Kiran",
            "--email",
            "kiran@college.edu",
            "--project-type",
            "IEEE",
            "--message",
            "Need help with a paper on federated learning.",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Subject: New Inquiry: IEEE Paper Support - Kiran",
        ))
        .stdout(predicate::str::contains("https://wa.me/919110687983?text="));
}

#[test]
fn test_contact_short_message_fails() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, DEFAULT_CONFIG)
        .args([
            "contact",
            "--name",
            "Kiran",
            "--email",
            "kiran@college.edu",
            "--project-type",
            "IEEE",
            "--message",
            "help",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("message:"));
}

// ============================================================================
// Chat Command Tests
// ============================================================================

#[test]
fn test_chat_medilink() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, DEFAULT_CONFIG)
        .args(["chat", "what", "about", "the", "medilink", "project"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AI medical diagnosis system"));
}

#[test]
fn test_chat_json_transcript() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, DEFAULT_CONFIG)
        .args(["chat", "--json", "hello there"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sender\": \"bot\""))
        .stdout(predicate::str::contains("\"sender\": \"user\""))
        .stdout(predicate::str::contains("hello there"));
}

#[test]
fn test_chat_requires_question() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, DEFAULT_CONFIG).arg("chat").assert().failure();
}

// ============================================================================
// Links / Relay Tests
// ============================================================================

#[test]
fn test_links_use_config() {
    let dir = TempDir::new().unwrap();

    cli_cmd(
        &dir,
        r#"{"contact": {"email": "hello@space.dev", "phone": "+91 80000 00000"}}"#,
    )
    .arg("links")
    .assert()
    .success()
    .stdout(predicate::str::contains(
        "mailto:hello@space.dev?subject=Inquiry%20from%20SPACE%20Website",
    ))
    .stdout(predicate::str::contains("tel:+918000000000"))
    .stdout(predicate::str::contains("LinkedIn"));
}

#[test]
fn test_relay_payload_needs_credentials() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, DEFAULT_CONFIG)
        .args(["relay-payload", "--name", "Asha", "--email", "asha@x.com", "--phone", "98450"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not configured"));
}

#[test]
fn test_relay_payload_json() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, RELAY_CONFIG)
        .args([
            "relay-payload",
            "--name",
            "Asha",
            "--email",
            "asha@x.com",
            "--phone",
            "98450",
            "--service",
            "AI/ML Projects",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "POST https://api.emailjs.com/api/v1.0/email/send",
        ))
        .stdout(predicate::str::contains("\"service_id\": \"service_abc\""))
        .stdout(predicate::str::contains("\"user_id\": \"pk_123\""))
        .stdout(predicate::str::contains("\"service\": \"AI/ML Projects\""));
}

#[test]
fn test_relay_payload_missing_phone() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, RELAY_CONFIG)
        .args(["relay-payload", "--name", "Asha", "--email", "asha@x.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("phone:"));
}

#[test]
fn test_bad_config_file_fails() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, "{ not json")
        .arg("links")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[test]
fn test_services_filter() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, DEFAULT_CONFIG)
        .args(["services", "--category", "development", "--query", "figma"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Frontend"));
}

#[test]
fn test_services_unknown_category() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, DEFAULT_CONFIG)
        .args(["services", "--category", "blockchain"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn test_workshops_level() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir, DEFAULT_CONFIG)
        .args(["workshops", "--level", "advanced"])
        .assert()
        .success();
}
