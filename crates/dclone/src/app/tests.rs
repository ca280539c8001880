use super::*;

#[test]
fn test_cli_build() {
    let app = build_cli();
    assert_eq!(app.get_name(), "dclone");
}

#[test]
fn test_cli_requires_subcommand() {
    let app = build_cli();
    assert!(app.try_get_matches_from(vec!["dclone"]).is_err());
}

#[test]
fn test_cli_status_selection() {
    let app = build_cli();
    let matches = app
        .try_get_matches_from(vec![
            "dclone", "status", "--core", "hardcore", "--ladder", "non-ladder", "--json",
        ])
        .unwrap();
    let status = matches.subcommand_matches("status").unwrap();
    assert_eq!(status.get_one::<String>("core").unwrap(), "hardcore");
    assert_eq!(status.get_one::<String>("ladder").unwrap(), "non-ladder");
    assert!(status.get_flag("json"));
}

#[test]
fn test_cli_status_rejects_unknown_core() {
    let app = build_cli();
    assert!(
        app.try_get_matches_from(vec!["dclone", "status", "--core", "medium"])
            .is_err()
    );
}

#[test]
fn test_cli_status_all_conflicts_with_selection() {
    let app = build_cli();
    assert!(
        app.try_get_matches_from(vec!["dclone", "status", "--all", "--core", "hardcore"])
            .is_err()
    );
}

#[test]
fn test_cli_notify_subcommands() {
    for action in ["on", "off", "status"] {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["dclone", "notify", action])
            .unwrap();
        let notify = matches.subcommand_matches("notify").unwrap();
        assert_eq!(notify.subcommand_name(), Some(action));
    }
}

#[test]
fn test_cli_notify_requires_action() {
    let app = build_cli();
    assert!(app.try_get_matches_from(vec!["dclone", "notify"]).is_err());
}

#[test]
fn test_cli_track_takes_server_key() {
    let app = build_cli();
    let matches = app
        .try_get_matches_from(vec!["dclone", "track", "europe-ladder-softcore"])
        .unwrap();
    let track = matches.subcommand_matches("track").unwrap();
    assert_eq!(
        track.get_one::<String>("server").unwrap(),
        "europe-ladder-softcore"
    );
}

#[test]
fn test_cli_toggle_requires_server() {
    let app = build_cli();
    assert!(app.try_get_matches_from(vec!["dclone", "toggle"]).is_err());
}

#[test]
fn test_cli_watch_interval() {
    let app = build_cli();
    let matches = app
        .try_get_matches_from(vec!["dclone", "watch", "--interval", "30"])
        .unwrap();
    let watch = matches.subcommand_matches("watch").unwrap();
    assert_eq!(*watch.get_one::<u64>("interval").unwrap(), 30);
}

#[test]
fn test_cli_watch_rejects_zero_interval() {
    let app = build_cli();
    assert!(
        app.try_get_matches_from(vec!["dclone", "watch", "--interval", "0"])
            .is_err()
    );
}

#[test]
fn test_cli_global_flags_after_subcommand() {
    let app = build_cli();
    let matches = app
        .try_get_matches_from(vec!["dclone", "servers", "-v", "--no-color"])
        .unwrap();
    assert!(matches.get_flag("verbose"));
    assert!(matches.get_flag("no-color"));
}

#[test]
fn test_cli_completions_shell() {
    let app = build_cli();
    let matches = app
        .try_get_matches_from(vec!["dclone", "completions", "zsh"])
        .unwrap();
    assert!(matches.subcommand_matches("completions").is_some());
}
