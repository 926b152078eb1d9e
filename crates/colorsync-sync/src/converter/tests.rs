use super::*;
use colorsync_common::DEFAULT_OPACITY;

fn converter() -> Converter {
    Converter::new(EventBus::new(32))
}

fn text_of(updates: &[FieldUpdate], field: ColorFormat) -> Option<&str> {
    updates
        .iter()
        .find(|u| u.field == field)
        .map(|u| u.text.as_str())
}

/// Apply updates to a simulated set of fields, the way a view would.
fn render(fields: &mut [String; 3], updates: &[FieldUpdate]) {
    for update in updates {
        let idx = ColorFormat::ALL
            .iter()
            .position(|f| *f == update.field)
            .unwrap();
        fields[idx] = update.text.clone();
    }
}

#[test]
fn starts_at_defaults() {
    let c = converter();
    assert_eq!(c.color().as_str(), "#ffffff");
    assert_eq!(c.opacity(), DEFAULT_OPACITY);
    assert!(c.is_valid());
    assert_eq!(c.active_field(), None);
}

#[test]
fn initial_fields() {
    let c = converter();
    let fields = c.fields();
    assert_eq!(text_of(&fields, ColorFormat::Hex), Some("#ffffff"));
    assert_eq!(text_of(&fields, ColorFormat::Rgb), Some("255, 255, 255"));
    assert_eq!(text_of(&fields, ColorFormat::Hsl), Some("0, 100%, 100%"));
}

#[test]
fn starts_from_config() {
    let mut config = ColorsyncConfig::default();
    config.startup.color = "#FEA".into();
    config.startup.opacity = 0.5;
    let c = Converter::from_config(&config, EventBus::new(4));
    assert_eq!(c.color().as_str(), "#ffeeaa");
    assert_eq!(c.opacity(), 0.5);
}

#[test]
fn bad_startup_color_falls_back_to_white() {
    let mut config = ColorsyncConfig::default();
    config.startup.color = "teal".into();
    let c = Converter::from_config(&config, EventBus::new(4));
    assert_eq!(c.color().as_str(), "#ffffff");
}

// -- direct edits --

#[test]
fn hex_edit_updates_other_fields() {
    let mut c = converter();
    c.focus(Some(ColorFormat::Hex));
    let updates = c.edit(ColorFormat::Hex, "#ffed24");

    assert!(c.is_valid());
    assert_eq!(c.color().as_str(), "#ffed24");
    assert_eq!(text_of(&updates, ColorFormat::Hex), None);
    assert_eq!(text_of(&updates, ColorFormat::Rgb), Some("255, 237, 36"));
    assert_eq!(text_of(&updates, ColorFormat::Hsl), Some("55, 100%, 57%"));
}

#[test]
fn every_field_edit_converges_on_the_same_values() {
    let inputs = [
        (ColorFormat::Hex, "#ffed24"),
        (ColorFormat::Rgb, "255, 237, 36"),
        (ColorFormat::Hsl, "55, 100%, 57%"),
    ];
    for (field, text) in inputs {
        let mut c = converter();
        let mut shown = [String::new(), String::new(), String::new()];
        render(&mut shown, &c.fields());

        c.focus(Some(field));
        let idx = ColorFormat::ALL.iter().position(|f| *f == field).unwrap();
        shown[idx] = text.to_owned();
        render(&mut shown, &c.edit(field, text));

        assert_eq!(
            shown,
            ["#ffed24", "255, 237, 36", "55, 100%, 57%"].map(String::from),
            "editing {field}"
        );
    }
}

#[test]
fn shorthand_hex_edit_is_normalized() {
    let mut c = converter();
    let updates = c.edit(ColorFormat::Hex, "#F00");
    assert_eq!(c.color().as_str(), "#ff0000");
    assert_eq!(text_of(&updates, ColorFormat::Rgb), Some("255, 0, 0"));
}

#[test]
fn focused_other_field_is_left_alone() {
    let mut c = converter();
    c.focus(Some(ColorFormat::Rgb));
    let updates = c.edit(ColorFormat::Hex, "#000000");
    assert_eq!(text_of(&updates, ColorFormat::Rgb), None);
    assert_eq!(text_of(&updates, ColorFormat::Hsl), Some("0, 0%, 0%"));
}

#[test]
fn out_of_range_rgb_edit_marks_invalid() {
    let mut c = converter();
    c.edit(ColorFormat::Hex, "#ffed24");
    let updates = c.edit(ColorFormat::Rgb, "256,0,0");

    assert!(!c.is_valid());
    assert!(updates.is_empty());
    assert_eq!(c.color().as_str(), "#ffed24");
    assert_eq!(c.field_text(ColorFormat::Hex), "#ffed24");
    assert_eq!(c.field_text(ColorFormat::Hsl), "55, 100%, 57%");
}

#[test]
fn malformed_edit_marks_invalid_and_keeps_state() {
    let mut c = converter();
    c.edit(ColorFormat::Hex, "#ffed24");
    c.set_opacity(0.4);
    let before = c.state();

    c.edit(ColorFormat::Hex, "#ffed2");

    assert!(!c.is_valid());
    assert_eq!(c.color(), &before.color);
    assert_eq!(c.opacity(), before.opacity);
}

#[test]
fn valid_edit_clears_invalid_flag() {
    let mut c = converter();
    c.edit(ColorFormat::Hsl, "360, 0%, 0%");
    assert!(!c.is_valid());
    c.edit(ColorFormat::Hsl, "0, 0%, 0%");
    assert!(c.is_valid());
    assert_eq!(c.color().as_str(), "#000000");
}

#[test]
fn typed_edit_resets_opacity() {
    let mut c = converter();
    c.set_opacity(0.62);
    c.edit(ColorFormat::Rgb, "1, 2, 3");
    assert_eq!(c.opacity(), DEFAULT_OPACITY);
}

// -- opacity --

#[test]
fn opacity_is_clamped_and_independent_of_validity() {
    let mut c = converter();
    c.edit(ColorFormat::Rgb, "nope");
    c.set_opacity(1.7);
    assert_eq!(c.opacity(), 1.0);
    c.set_opacity(-2.0);
    assert_eq!(c.opacity(), 0.0);
    assert!(!c.is_valid());
}

#[test]
fn opacity_snaps_to_hundredths() {
    let mut c = converter();
    c.set_opacity(0.125);
    assert_eq!(c.opacity(), 0.13);
    assert_eq!(c.copy_text(ColorFormat::Hex), "#ffffff0d");
    assert_eq!(c.copy_text(ColorFormat::Rgb), "rgba(255, 255, 255, 0.13)");
    assert_eq!(c.copy_text(ColorFormat::Hsl), "hsla(0, 100%, 100%, 0.13)");

    c.set_opacity(0.999);
    assert_eq!(c.opacity(), 1.0);
    assert_eq!(c.copy_text(ColorFormat::Rgb), "rgb(255, 255, 255)");
}

#[test]
fn nan_opacity_is_ignored() {
    let mut c = converter();
    c.set_opacity(0.3);
    c.set_opacity(f64::NAN);
    assert_eq!(c.opacity(), 0.3);
}

// -- paste --

#[test]
fn paste_rgb_overwrites_all_fields() {
    let mut c = converter();
    c.focus(Some(ColorFormat::Hex));
    let PasteOutcome::Applied(updates) = c.paste("rgb(255, 237, 36)") else {
        panic!("paste not applied");
    };

    assert!(c.is_valid());
    assert_eq!(updates.len(), 3);
    assert_eq!(text_of(&updates, ColorFormat::Hex), Some("#ffed24"));
    assert_eq!(text_of(&updates, ColorFormat::Rgb), Some("255, 237, 36"));
    assert_eq!(text_of(&updates, ColorFormat::Hsl), Some("55, 100%, 57%"));
}

#[test]
fn paste_hex_with_alpha_sets_opacity() {
    let mut c = converter();
    assert!(matches!(c.paste("#ffed243e"), PasteOutcome::Applied(_)));
    assert_eq!(c.opacity(), 0.62);
    assert_eq!(c.copy_text(ColorFormat::Hex), "#ffed243e");
}

#[test]
fn paste_clears_invalid_flag() {
    let mut c = converter();
    c.edit(ColorFormat::Hex, "zzz");
    assert!(!c.is_valid());
    c.paste("hsl(0, 100%, 50%)");
    assert!(c.is_valid());
    assert_eq!(c.color().as_str(), "#ff0000");
}

#[test]
fn paste_of_plain_text_changes_nothing() {
    let mut c = converter();
    c.edit(ColorFormat::Hex, "#ffed24");
    c.set_opacity(0.5);
    let before = c.state();

    assert_eq!(c.paste("just some words"), PasteOutcome::Ignored);
    assert_eq!(c.state(), before);
}

#[test]
fn paste_does_not_touch_invalid_flag_when_ignored() {
    let mut c = converter();
    c.edit(ColorFormat::Rgb, "999, 0, 0");
    assert_eq!(c.paste("hello"), PasteOutcome::Ignored);
    assert!(!c.is_valid());
}

#[test]
fn out_of_range_paste_is_handled_without_mutation() {
    let mut c = converter();
    let before = c.state();
    assert_eq!(
        c.paste("rgb(300, 0, 0) hsl(0, 100%, 50%)"),
        PasteOutcome::OutOfRange(ColorFormat::Rgb)
    );
    assert_eq!(c.state(), before);
}

// -- copy strings --

#[test]
fn copy_text_without_and_with_opacity() {
    let mut c = converter();
    c.edit(ColorFormat::Hex, "#ffed24");
    assert_eq!(c.copy_text(ColorFormat::Hex), "#ffed24");
    assert_eq!(c.copy_text(ColorFormat::Rgb), "rgb(255, 237, 36)");
    assert_eq!(c.copy_text(ColorFormat::Hsl), "hsl(55, 100%, 57%)");

    c.set_opacity(0.62);
    assert_eq!(c.copy_text(ColorFormat::Hex), "#ffed243e");
    assert_eq!(c.copy_text(ColorFormat::Rgb), "rgba(255, 237, 36, 0.62)");
    assert_eq!(c.copy_text(ColorFormat::Hsl), "hsla(55, 100%, 57%, 0.62)");
}

#[test]
fn label_color_follows_background() {
    let mut c = converter();
    assert_eq!(c.label_color(), "#1a1a1a");
    c.edit(ColorFormat::Hex, "#000080");
    assert_eq!(c.label_color(), "#ffffff");
}

// -- events --

#[tokio::test]
async fn mutations_are_published() {
    let bus = EventBus::new(32);
    let mut rx = bus.subscribe();
    let mut c = Converter::new(bus);

    c.edit(ColorFormat::Hex, "#ffed24");
    c.edit(ColorFormat::Rgb, "bad");
    c.set_opacity(0.5);
    c.paste("nothing here");

    let e1 = rx.recv().await.unwrap();
    assert!(matches!(e1, Event::ColorChanged(ref s) if s.color.as_str() == "#ffed24"));
    let e2 = rx.recv().await.unwrap();
    assert!(matches!(e2, Event::InputRejected(ColorFormat::Rgb)));
    let e3 = rx.recv().await.unwrap();
    assert!(matches!(e3, Event::OpacityChanged(o) if o == 0.5));
    assert!(rx.try_recv().is_err());
}
