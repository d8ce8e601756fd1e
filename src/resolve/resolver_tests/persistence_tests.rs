//! Tests for writing the resolved section back.

use super::*;

#[test]
fn round_trip_reproduces_settings_and_document() {
    let fixture = Fixture::with_document(STORED);
    let resolver = fixture.resolver();

    let first = run(&resolver, &["--port", "9090", "--tag", "blue"]);
    let after_first = fixture.read();
    let second = run(&resolver, &[]);

    assert_eq!(second.settings, first.settings);
    assert_eq!(fixture.read(), after_first);
}

#[test]
fn other_sections_keep_their_bytes() {
    let document = r#"{"Before":{"A":[1,  2]},"AppSettings":{"Port":1},"Other":{"X":1}}"#;
    let fixture = Fixture::with_document(document);

    run(&fixture.resolver(), &["--folder", "elsewhere"]);

    let written = fixture.read();
    assert!(written.contains(r#""Before": {"A":[1,  2]}"#));
    assert!(written.contains(r#""Other": {"X":1}"#));
}

#[test]
fn caller_can_suppress_persistence() {
    let fixture = Fixture::with_document(STORED);

    let result = resolved(
        fixture
            .resolver()
            .resolve(&args(&["--port", "9090"]), Persist::from(false)),
    );

    assert_eq!(result.settings.port, 9090);
    assert!(matches!(result.persist, PersistStatus::Suppressed));
    assert_eq!(fixture.read(), STORED);
}

#[test]
fn corrupted_document_is_not_overwritten() {
    let fixture = Fixture::with_document("{{{ broken");

    let result = run(&fixture.resolver(), &[]);

    assert_eq!(result.settings, AppSettings::default());
    assert!(matches!(result.source, Source::Defaults));
    assert!(matches!(
        result.persist,
        PersistStatus::Failed(DocumentError::Unreadable { .. })
    ));
    assert_eq!(fixture.read(), "{{{ broken");
}

#[test]
fn non_utf8_document_keeps_other_sections() {
    let fixture = Fixture::new();
    let original: &[u8] = b"{\"Other\":\"\xff\"}";
    fs::write(fixture.path(), original).unwrap();

    let result = run(&fixture.resolver(), &["--port", "9090"]);

    assert_eq!(result.settings.port, 9090);
    assert!(result.persist.is_failed());
    assert_eq!(fs::read(fixture.path()).unwrap(), original);
}

#[test]
fn write_failure_is_reported_but_settings_survive() {
    let dir = TempDir::new().unwrap();
    // A non-empty directory where the document should be cannot be replaced.
    let path = dir.path().join("settings.json");
    fs::create_dir(&path).unwrap();
    fs::write(path.join("keep"), "x").unwrap();
    let resolver: Resolver<AppSettings> = Resolver::builder(SettingsDocument::json(&path), registry())
        .build()
        .unwrap();

    let result = run(&resolver, &["--port", "9090"]);

    assert_eq!(result.settings.port, 9090);
    assert!(result.persist.is_failed());
}

#[test]
fn toml_document_is_supported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[AppSettings]\nPort = 8080\n\n[Other]\nX = 1\n").unwrap();
    let resolver = Resolver::<AppSettings, _>::builder(SettingsDocument::toml(&path), registry())
        .build()
        .unwrap();

    let first = run_toml(&resolver, &["--folder", "D:\\Toml"]);
    let second = run_toml(&resolver, &[]);

    assert_eq!(first.settings.port, 8080);
    assert_eq!(second.settings, first.settings);
    assert!(fs::read_to_string(&path).unwrap().contains("[Other]"));
}

fn run_toml(
    resolver: &Resolver<AppSettings, crate::document::TomlFormat>,
    items: &[&str],
) -> Resolved<AppSettings> {
    match resolver.resolve(&args(items), Persist::Yes) {
        Outcome::Resolved(resolved) => resolved,
        Outcome::Help(_) => panic!("Expected resolved settings, got help"),
    }
}

#[test]
fn non_flat_schema_is_rejected_at_build() {
    #[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
    struct Scalar(u32);

    impl Settings for Scalar {
        const SECTION: &'static str = "Scalar";
    }

    let fixture = Fixture::new();
    let result = Resolver::<Scalar>::builder(SettingsDocument::json(fixture.path()), registry()).build();

    assert!(result.is_err());
}
