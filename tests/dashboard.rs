use std::io::Write as _;

use chrono::{TimeZone, Utc};

use totp_dashboard::{config, dashboard, totp, Error};

fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn github_account_end_to_end() {
    let file = config_file(
        "accounts:
  - id: 1
    name: GitHub
    username: alice
    site: github.com
    secret: JBSWY3DPEHPK3PXP
",
    );
    let config = config::load(file.path()).unwrap().validate().unwrap();

    // 2005-03-18 01:58:29 UTC, one of the RFC 6238 reference times
    let now = Utc.timestamp_opt(1_111_111_109, 0).unwrap();
    assert_eq!(totp::generate("JBSWY3DPEHPK3PXP", 1_111_111_109).unwrap().to_string(), "071271");

    let mut frame = Vec::new();
    dashboard::render(&mut frame, &config.accounts, &now).unwrap();
    let frame = String::from_utf8(frame).unwrap();

    assert!(frame.contains("071 271"));
    assert!(!frame.contains("071271"));
    assert!(frame.contains("GitHub"));
    assert!(frame.contains("alice"));
    assert!(frame.contains("github.com"));
    assert!(frame.contains("1s"));
    assert!(frame.contains("01:58:29"));
}

#[test]
fn same_code_all_window_long() {
    let accounts = vec![config::Account {
        id: 1,
        secret: "JBSWY3DPK5XXE3DE".into(),
        ..Default::default()
    }];

    // June 1st 2022, 12:00 UTC
    for offset in 0..30 {
        let now = Utc.timestamp_opt(1_654_084_800 + offset, 0).unwrap();
        assert_eq!(dashboard::code_for(&accounts[0], now.timestamp() as u64), "435428");
    }
}

#[test]
fn fatal_config_errors() {
    let empty = config_file("accounts: []\n");
    assert!(matches!(
        config::load(empty.path()).and_then(config::Config::validate),
        Err(Error::EmptyConfig)
    ));

    let garbage = config_file("accounts:\n  - id: [1, 2\n");
    assert!(matches!(config::load(garbage.path()), Err(Error::Parse(_))));

    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        config::load(dir.path().join("config.yml")),
        Err(Error::File { .. })
    ));
}
