use egui::Color32;
use fishbowl::defaults::*;
use fishbowl::*;

fn registry_in(dir: &std::path::Path, format: StoreFormat) -> StyleRegistry {
    StyleRegistry::with_config(
        RegistryConfig::default()
            .with_preset_dir(dir)
            .with_store_format(format),
    )
}

#[test]
fn builtin_store_cannot_save() {
    let reg = StyleRegistry::new();
    let err = reg.save_palette("mine", &[Color32::RED]).unwrap_err();
    assert!(matches!(err, StyleError::NoStoreDir(Category::Palette)));
}

#[test]
fn saved_palette_is_usable_by_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut reg = registry_in(dir.path(), StoreFormat::Json);

    reg.save_palette("mine", &[Color32::RED, Color32::from_rgb(0, 128, 255)])
        .unwrap();
    assert!(dir.path().join("fishbowl.color.json").exists());

    reg.set(StyleRequest::new().palette("mine")).unwrap();
    assert_eq!(
        reg.get_style()[AXES_PROP_CYCLE],
        StyleValue::from(vec!["#ff0000", "#0080ff"])
    );
}

#[test]
fn saves_are_cumulative_and_rewrite_the_whole_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = PresetStore::new(dir.path(), StoreFormat::Json);

    store.save_hex_palette("a", &["#000000"]).unwrap();
    store.save_hex_palette("b", &["#ffffff"]).unwrap();
    store.save_hex_palette("a", &["#111111"]).unwrap();

    let text = std::fs::read_to_string(dir.path().join("fishbowl.color.json")).unwrap();
    let table: std::collections::BTreeMap<String, Vec<String>> =
        serde_json::from_str(&text).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table["a"], vec!["#111111"]);
    assert_eq!(table["b"], vec!["#ffffff"]);
}

#[test]
fn invalid_hex_palette_is_rejected_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let store = PresetStore::new(dir.path(), StoreFormat::Json);
    let err = store.save_hex_palette("bad", &["#000000", "teal"]).unwrap_err();
    assert!(matches!(err, StyleError::InvalidColor(ref c) if c == "teal"));
    assert!(!dir.path().join("fishbowl.color.json").exists());
}

#[test]
fn stored_preset_shadows_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let store = PresetStore::new(dir.path(), StoreFormat::Json);

    store
        .save_axes("minimal", PresetSource::Options(style_map([(AXES_GRID, false)])))
        .unwrap();
    let minimal = store.axes("minimal").unwrap();
    assert_eq!(minimal, style_map([(AXES_GRID, false)]));

    // other built-ins are still reachable
    assert!(store.axes("classic").is_ok());
}

#[test]
fn axes_preset_can_be_copied_by_name() {
    let dir = tempfile::tempdir().unwrap();
    let reg = registry_in(dir.path(), StoreFormat::Yaml);

    reg.save_axes("clean", "minimal").unwrap();
    assert!(dir.path().join("fishbowl.axes.yaml").exists());
    assert_eq!(
        reg.store().axes("clean").unwrap(),
        reg.store().axes("minimal").unwrap()
    );

    let err = reg.save_axes("broken", "doesnotexist").unwrap_err();
    assert!(matches!(
        err,
        StyleError::UnknownPreset {
            category: Category::Axes,
            ..
        }
    ));
}

#[test]
fn yaml_store_round_trips_typed_values() {
    let dir = tempfile::tempdir().unwrap();
    let reg = registry_in(dir.path(), StoreFormat::Yaml);
    let preset = style_map([
        (FONT_FAMILY, StyleValue::from("monospace")),
        (FONT_SIZE, 14.5.into()),
        (FONT_MONOSPACE, vec!["Iosevka", "Inconsolata"].into()),
    ]);
    reg.save_font("code", preset.clone()).unwrap();
    assert_eq!(reg.store().font("code").unwrap(), preset);
}

#[test]
fn hand_written_json_file_is_picked_up_lazily() {
    let dir = tempfile::tempdir().unwrap();
    let mut reg = registry_in(dir.path(), StoreFormat::Json);
    assert!(reg.set(StyleRequest::new().font("poster")).is_err());

    std::fs::write(
        dir.path().join("fishbowl.font.json"),
        r#"{"poster": {"font.size": "28", "font.family": "sans-serif"}}"#,
    )
    .unwrap();

    reg.set(StyleRequest::new().font("poster")).unwrap();
    assert_eq!(reg.plot_config().font.size, 28.0);
}

#[test]
fn malformed_store_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("fishbowl.axes.json"), "{ not json").unwrap();
    let mut reg = registry_in(dir.path(), StoreFormat::Json);
    let before = reg.get_style();
    let err = reg.set(StyleRequest::new().axes("minimal")).unwrap_err();
    assert!(matches!(err, StyleError::Json(_)));
    assert_eq!(reg.get_style(), before);
}

#[test]
fn names_merge_builtin_and_stored() {
    let dir = tempfile::tempdir().unwrap();
    let store = PresetStore::new(dir.path(), StoreFormat::Json);
    store.save_hex_palette("angelfish", &["#abcdef"]).unwrap();
    let names = store.names(Category::Palette).unwrap();
    assert_eq!(names, vec!["angelfish", "betta", "goldfish", "gourami", "koi"]);
    assert!(store.names(Category::Cmap).unwrap().is_empty());
}

#[test]
fn hex_palette_is_stored_and_cycled_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let mut reg = registry_in(dir.path(), StoreFormat::Json);
    let colors = ["#ABCDEF", "#ff000000", "12345680"];

    reg.store().save_hex_palette("glass", &colors).unwrap();
    assert_eq!(reg.store().palette("glass").unwrap(), colors);

    reg.set(StyleRequest::new().palette("glass")).unwrap();
    assert_eq!(
        reg.get_style()[AXES_PROP_CYCLE],
        StyleValue::from(colors.to_vec())
    );
    assert_eq!(reg.plot_config().cycle.len(), 3);
}

#[test]
fn hand_written_palette_keeps_its_spelling() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("fishbowl.color.json"),
        r##"{"neon": ["#ABCDEF", "00FF00"], "broken": ["#ABCDEF", "teal"]}"##,
    )
    .unwrap();
    let mut reg = registry_in(dir.path(), StoreFormat::Json);

    reg.set(StyleRequest::new().palette("neon")).unwrap();
    assert_eq!(
        reg.get_style()[AXES_PROP_CYCLE],
        StyleValue::from(vec!["#ABCDEF", "00FF00"])
    );

    let before = reg.get_style();
    let err = reg.set(StyleRequest::new().palette("broken")).unwrap_err();
    assert!(matches!(err, StyleError::InvalidColor(ref c) if c == "teal"));
    assert_eq!(reg.get_style(), before);
}

#[test]
fn every_file_backed_category_has_its_own_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = PresetStore::new(dir.path(), StoreFormat::Yaml);
    for category in Category::all() {
        match store.path_for(*category) {
            Some(path) => {
                assert_eq!(path.extension().and_then(|e| e.to_str()), Some("yaml"));
                assert!(!store.names(*category).unwrap().is_empty());
            }
            None => assert_eq!(*category, Category::Cmap),
        }
    }
}
