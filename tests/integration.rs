// SPDX-License-Identifier: MPL-2.0
use iced_toasts::config::{self, Settings, ToastConfig};
use iced_toasts::diagnostics::{DiagnosticEventKind, DiagnosticsCollector, WarningType};
use iced_toasts::ui::notifications::{
    Container, EmbeddedMessages, FlashFile, FlashMessage, ManualClock, Manager,
    NotificationMessage, Phase, Severity, Template,
};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

fn ready_manager(settings: Settings) -> (Manager<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let mut manager = Manager::with_clock(settings, clock.clone());
    assert!(manager.attach(Some(Container::new()), Some(Template::standard())));
    (manager, clock)
}

#[test]
fn timed_toast_lives_through_its_duration_then_leaves() {
    let (mut manager, clock) = ready_manager(Settings::default());

    let id = manager
        .success("Saved", Some(Duration::from_millis(1000)))
        .expect("toast shown");
    let container = manager.container().expect("attached");
    assert_eq!(container.get(id).map(|v| v.phase()), Some(Phase::Entering));

    manager.poll();
    let view = manager.container().and_then(|c| c.get(id)).expect("view");
    assert_eq!(view.phase(), Phase::Visible);
    assert_eq!(view.progress(), Some(100.0));

    clock.advance(Duration::from_millis(500));
    manager.poll();
    let progress = manager
        .container()
        .and_then(|c| c.get(id))
        .and_then(|v| v.progress())
        .expect("progress");
    assert!((progress - 50.0).abs() < 1.0, "progress was {progress}");

    clock.advance(Duration::from_millis(500));
    manager.poll();
    assert!(!manager.contains(id));
    let view = manager.container().and_then(|c| c.get(id)).expect("leaving");
    assert_eq!(view.phase(), Phase::Leaving);

    clock.advance(Duration::from_millis(300));
    manager.poll();
    assert!(manager.container().is_some_and(Container::is_empty));
    assert_eq!(manager.pending_timers(), 0);
}

#[test]
fn default_duration_applies_when_none_is_given() {
    let (mut manager, clock) =
        ready_manager(Settings::default().with_default_duration(Duration::from_millis(800)));

    let id = manager.info("Copied", None).expect("toast shown");
    assert_eq!(
        manager.get(id).map(|toast| toast.duration()),
        Some(Duration::from_millis(800))
    );

    clock.advance(Duration::from_millis(800));
    manager.poll();
    assert!(!manager.contains(id));
}

#[test]
fn oldest_toast_is_evicted_when_full() {
    let (mut manager, _clock) = ready_manager(Settings::default().with_max_toasts(2));

    let first = manager.info("one", None).expect("first");
    let second = manager.info("two", None).expect("second");
    let third = manager.info("three", None).expect("third");

    assert_eq!(manager.ids(), vec![second, third]);
    assert!(!manager.contains(first));
    let evicted = manager
        .container()
        .and_then(|c| c.get(first))
        .expect("evicted view still animating out");
    assert_eq!(evicted.phase(), Phase::Leaving);
}

#[test]
fn persistent_toast_survives_until_dismissed() {
    let (mut manager, clock) = ready_manager(Settings::default());

    let id = manager
        .error("Connection lost", Some(Duration::ZERO))
        .expect("toast shown");
    assert!(manager
        .container()
        .and_then(|c| c.get(id))
        .is_some_and(|v| v.progress().is_none()));

    clock.advance(Duration::from_secs(3600));
    manager.poll();
    assert!(manager.contains(id));

    let close = manager
        .container()
        .and_then(|c| c.get(id))
        .map(|v| v.close_message())
        .expect("close message");
    manager.handle_message(&close);
    assert!(!manager.contains(id));

    clock.advance(Duration::from_millis(300));
    manager.poll();
    assert!(manager.container().is_some_and(Container::is_empty));
}

#[test]
fn dismissing_twice_is_a_no_op() {
    let (mut manager, _clock) = ready_manager(Settings::default());
    let id = manager.warning("Careful", None).expect("toast shown");

    assert!(manager.dismiss(id));
    assert!(!manager.dismiss(id));
}

#[test]
fn dismiss_all_clears_every_toast() {
    let (mut manager, clock) = ready_manager(Settings::default());
    for text in ["a", "b", "c"] {
        manager.info(text, None);
    }

    manager.handle_message(&NotificationMessage::DismissAll);
    assert!(manager.is_empty());

    clock.advance(Duration::from_millis(300));
    manager.poll();
    assert!(manager.container().is_some_and(Container::is_empty));
}

#[test]
fn show_before_attach_is_ignored_with_a_warning() {
    let mut collector = DiagnosticsCollector::default();
    let mut manager = Manager::with_clock(Settings::default(), ManualClock::new());
    manager.set_diagnostics(collector.handle());

    assert_eq!(manager.info("too early", None), None);
    assert!(manager.is_empty());

    collector.process_pending();
    let warned = collector.iter().any(|event| {
        matches!(
            &event.kind,
            DiagnosticEventKind::Warning { event } if event.warning_type == WarningType::NotReady
        )
    });
    assert!(warned);
}

#[test]
fn notifier_requests_apply_on_poll() {
    let (mut manager, _clock) = ready_manager(Settings::default());
    let notifier = manager.notifier();

    let worker = std::thread::spawn(move || notifier.success("Background job done", None));
    worker.join().expect("worker thread");
    assert!(manager.is_empty());

    manager.poll();
    assert_eq!(manager.len(), 1);
    let toast = manager.iter().next().expect("toast");
    assert_eq!(toast.severity(), Severity::Success);
    assert_eq!(toast.message(), "Background job done");
}

#[test]
fn setup_shows_embedded_batch_once() {
    let clock = ManualClock::new();
    let mut manager = Manager::with_clock(Settings::default(), clock);
    let mut source = EmbeddedMessages::new(vec![
        FlashMessage::new("  Welcome back  ", "success"),
        FlashMessage::new("Stale cache", "debug"),
    ]);

    assert!(manager.setup(
        Some(Container::new()),
        Some(Template::standard()),
        &mut source
    ));
    assert_eq!(manager.len(), 2);

    let toasts: Vec<_> = manager.iter().collect();
    assert_eq!(toasts[0].message(), "Welcome back");
    assert_eq!(toasts[0].severity(), Severity::Success);
    assert_eq!(toasts[1].severity(), Severity::Info);

    assert_eq!(manager.ingest_external_messages(&mut source), 0);
    assert_eq!(manager.len(), 2);
}

#[test]
fn flash_file_is_ingested_and_removed() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("flash.toml");
    fs::write(
        &path,
        "[[message]]\ntext = \"Profile updated\"\nlevel = \"success\"\n\n[[message]]\ntext = \"Quota at 90%\"\nlevel = \"warning\"\n",
    )
    .expect("write flash file");

    let (mut manager, _clock) = ready_manager(Settings::default());
    let mut source = FlashFile::new(&path);

    assert_eq!(manager.ingest_external_messages(&mut source), 2);
    assert!(!path.exists());
    assert_eq!(manager.ingest_external_messages(&mut source), 0);
}

#[test]
fn malformed_flash_file_is_reported_and_dropped() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("flash.json");
    fs::write(&path, "{ not json").expect("write flash file");

    let mut collector = DiagnosticsCollector::default();
    let (mut manager, _clock) = ready_manager(Settings::default());
    manager.set_diagnostics(collector.handle());

    assert_eq!(manager.ingest_external_messages(&mut FlashFile::new(&path)), 0);
    assert!(!path.exists());

    collector.process_pending();
    assert!(collector.iter().any(|event| matches!(
        &event.kind,
        DiagnosticEventKind::Warning { event } if event.warning_type == WarningType::IngestFailed
    )));
}

#[test]
fn config_round_trip_drives_manager_settings() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("toasts.toml");

    let saved = ToastConfig {
        max_toasts: Some(1),
        default_duration_ms: Some(2000),
        ..ToastConfig::default()
    };
    config::save_to_path(&saved, &path).expect("save config");
    let loaded = config::load_from_path(&path).expect("load config");
    assert_eq!(loaded, saved);

    let (mut manager, clock) = ready_manager(loaded.settings());
    let first = manager.info("first", None).expect("first");
    let second = manager.info("second", None).expect("second");
    assert_eq!(manager.ids(), vec![second]);
    assert!(!manager.contains(first));

    clock.advance(Duration::from_millis(2000));
    manager.poll();
    assert!(manager.is_empty());
}

#[test]
fn unreadable_config_falls_back_with_warning() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("toasts.toml");
    fs::write(&path, "max_toasts = \"many\"").expect("write config");

    let (loaded, warning) = config::load_or_default(&path);
    assert_eq!(loaded, ToastConfig::default());
    assert!(warning.is_some());
}
