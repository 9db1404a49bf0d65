//! Input controller behavior against the built-in N'Ko layout.

use std::sync::Arc;

use nkoboard::controller::{InputController, KeyMessage};
use nkoboard::models::{LayerId, LayoutTable, PhysicalKey};

mod fixtures;
use fixtures::RecordingHost;

fn nko_controller() -> InputController<RecordingHost> {
    let table = Arc::new(LayoutTable::nko().expect("built-in layout is valid"));
    let mut controller = InputController::new(table, RecordingHost::default());
    controller.sync_labels();
    controller
}

fn press(controller: &mut InputController<RecordingHost>, keys: &[PhysicalKey]) {
    for &key in keys {
        controller.handle(KeyMessage::Activated(key));
    }
}

#[test]
fn test_every_position_has_a_glyph_on_every_layer() {
    let table = LayoutTable::nko().unwrap();
    for layer in LayerId::ALL {
        for (position, _key) in table.iter_keys() {
            assert!(
                table
                    .glyph_at(layer, position.row as usize, position.col as usize)
                    .is_some(),
                "{layer} layer has no entry at {position}"
            );
        }
    }
}

#[test]
fn test_glyph_appends_in_primary() {
    let mut controller = nko_controller();
    let table = controller.table();
    assert_eq!(table.key_at(2, 1), Some(PhysicalKey::KeyA));
    let expected = table.glyph_at(LayerId::Primary, 2, 1).unwrap().to_string();

    press(&mut controller, &[PhysicalKey::KeyA]);

    assert_eq!(controller.buffer(), expected);
    assert_eq!(controller.buffer(), "\u{07CA}");
    assert_eq!(controller.active_layer(), LayerId::Primary);
    assert_eq!(controller.host().last_text(), Some("\u{07CA}"));
    assert_eq!(controller.host().focus_requests, 1);
}

#[test]
fn test_backspace_on_empty_buffer_is_safe() {
    let mut controller = nko_controller();
    press(&mut controller, &[PhysicalKey::Backspace, PhysicalKey::Backspace]);
    assert_eq!(controller.buffer(), "");
    assert_eq!(controller.active_layer(), LayerId::Primary);
    assert_eq!(controller.host().last_text(), Some(""));
}

#[test]
fn test_shift_toggles_layer_and_every_label() {
    let mut controller = nko_controller();
    let table = Arc::new(LayoutTable::nko().unwrap());

    press(&mut controller, &[PhysicalKey::ShiftLeft]);
    assert_eq!(controller.active_layer(), LayerId::Alternate);
    for (_, key) in table.iter_keys() {
        assert_eq!(
            controller.host().label(key),
            table.label_for(LayerId::Alternate, key).unwrap(),
            "{key} should show its alternate label"
        );
    }

    press(&mut controller, &[PhysicalKey::ShiftRight]);
    assert_eq!(controller.active_layer(), LayerId::Primary);
    for (_, key) in table.iter_keys() {
        assert_eq!(
            controller.host().label(key),
            table.label_for(LayerId::Primary, key).unwrap()
        );
    }

    // Shift never touches the text
    assert!(controller.host().texts.is_empty());
    assert_eq!(controller.host().focus_requests, 0);
}

#[test]
fn test_alternate_layer_lasts_one_glyph() {
    let mut controller = nko_controller();
    press(&mut controller, &[PhysicalKey::ShiftLeft, PhysicalKey::KeyA]);

    assert_eq!(controller.buffer(), "\u{07EE}");
    assert_eq!(controller.active_layer(), LayerId::Primary);
    assert_eq!(controller.host().label(PhysicalKey::KeyA), "\u{07CA}");

    press(&mut controller, &[PhysicalKey::KeyA]);
    assert_eq!(controller.buffer(), "\u{07EE}\u{07CA}");
}

#[test]
fn test_space_and_enter_append_one_char() {
    let mut controller = nko_controller();
    press(&mut controller, &[PhysicalKey::Space]);
    assert_eq!(controller.buffer(), " ");
    press(&mut controller, &[PhysicalKey::Enter]);
    assert_eq!(controller.buffer(), " \n");
    assert_eq!(controller.buffer().chars().count(), 2);
}

#[test]
fn test_control_keys_keep_alternate_layer() {
    let mut controller = nko_controller();
    press(&mut controller, &[PhysicalKey::ShiftLeft, PhysicalKey::Space]);
    assert_eq!(controller.active_layer(), LayerId::Alternate);
    press(&mut controller, &[PhysicalKey::Backspace]);
    assert_eq!(controller.active_layer(), LayerId::Alternate);
    assert_eq!(controller.buffer(), "");
}

#[test]
fn test_typing_sequence() {
    let mut controller = nko_controller();
    press(
        &mut controller,
        &[
            PhysicalKey::KeyA,
            PhysicalKey::Space,
            PhysicalKey::KeyS,
            PhysicalKey::Backspace,
            PhysicalKey::Enter,
        ],
    );
    assert_eq!(controller.buffer(), "\u{07CA} \n");
    assert_eq!(controller.host().last_text(), Some("\u{07CA} \n"));
}

#[test]
fn test_inert_keys_do_nothing() {
    let mut controller = nko_controller();
    let pushes = controller.host().label_pushes;
    press(
        &mut controller,
        &[
            PhysicalKey::Tab,
            PhysicalKey::CapsLock,
            PhysicalKey::ControlLeft,
            PhysicalKey::AltRight,
            PhysicalKey::CommandLeft,
        ],
    );
    assert_eq!(controller.buffer(), "");
    assert!(controller.host().texts.is_empty());
    assert_eq!(controller.host().label_pushes, pushes);
}

#[test]
fn test_blank_alternate_key_reverts_layer() {
    let mut controller = nko_controller();
    press(&mut controller, &[PhysicalKey::ShiftLeft, PhysicalKey::KeyT]);
    assert_eq!(controller.buffer(), "");
    assert_eq!(controller.active_layer(), LayerId::Primary);
}

#[test]
fn test_backspace_removes_whole_character() {
    let mut controller = nko_controller();
    // Tone mark after a letter: two code points, removed one at a time
    press(
        &mut controller,
        &[PhysicalKey::KeyA, PhysicalKey::ShiftLeft, PhysicalKey::KeyJ],
    );
    assert_eq!(controller.buffer(), "\u{07CA}\u{07EB}");
    press(&mut controller, &[PhysicalKey::Backspace]);
    assert_eq!(controller.buffer(), "\u{07CA}");
}
