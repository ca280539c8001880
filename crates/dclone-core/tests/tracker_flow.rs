//! End-to-end flow: file-backed preferences, detection, and dispatch.

use std::sync::Mutex;

use dclone_core::notify::{NotificationRequest, NotifyError};
use dclone_core::{
    Core, JsonFileStore, Ladder, NotificationBackend, PreferenceStore, ProgressBaseline, Region,
    Server, ServerSnapshot, detect, dispatch,
};

#[derive(Default)]
struct RecordingBackend {
    sent: Mutex<Vec<NotificationRequest>>,
}

impl NotificationBackend for RecordingBackend {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn send(&self, request: &NotificationRequest) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(request.clone());
        Ok(())
    }
}

fn batch(values: &[(Server, &str)]) -> Vec<ServerSnapshot> {
    values
        .iter()
        .map(|(server, progress)| ServerSnapshot::new(*server, *progress, 1_700_000_000))
        .collect()
}

#[test]
fn preferences_survive_reopen_and_drive_detection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    let tracked = Server::new(Region::Europe, Ladder::Ladder, Core::Softcore);
    let other = Server::new(Region::Asia, Ladder::Ladder, Core::Softcore);

    {
        let mut prefs = PreferenceStore::open(JsonFileStore::new(path.clone()));
        prefs.set_global_enabled(true).unwrap();
        prefs.set_server_enabled(tracked.key(), true).unwrap();
    }

    let raw = std::fs::read_to_string(&path).unwrap();
    let on_disk: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(on_disk["notificationsEnabled"], "true");
    assert_eq!(
        on_disk["notificationSettings"],
        r#"{"europe-ladder-softcore":true}"#
    );

    let prefs = PreferenceStore::open(JsonFileStore::new(path));
    let backend = RecordingBackend::default();
    let mut baseline = ProgressBaseline::new();

    let events = detect(
        &batch(&[(tracked, "2"), (other, "4")]),
        prefs.preferences(),
        &mut baseline,
    );
    assert_eq!(dispatch(&events, &backend), 1);

    let events = detect(
        &batch(&[(tracked, "2"), (other, "5")]),
        prefs.preferences(),
        &mut baseline,
    );
    assert_eq!(dispatch(&events, &backend), 0);

    let sent = backend.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].body,
        "Europe Ladder Softcore\nProgress: [0/6] \u{2192} [2/6]"
    );
}

#[test]
fn turning_global_switch_off_silences_everything() {
    let dir = tempfile::tempdir().unwrap();
    let server = Server::new(Region::Americas, Ladder::NonLadder, Core::Hardcore);
    let mut prefs = PreferenceStore::open(JsonFileStore::new(dir.path().join("p.json")));
    prefs.set_server_enabled(server.key(), true).unwrap();
    prefs.set_global_enabled(false).unwrap();

    let mut baseline = ProgressBaseline::new();
    let events = detect(&batch(&[(server, "6")]), prefs.preferences(), &mut baseline);
    assert!(events.is_empty());
    assert!(baseline.is_empty());
}
