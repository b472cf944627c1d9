//! Entry state machine flows: typing, deleting, switching masks, and
//! external updates, driven through the widget's key handling.

mod fixtures;
use fixtures::*;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use phoneform::tui::{Component, PhoneField, PhoneInput, PhoneInputEvent};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_str(input: &mut PhoneInput, text: &str) -> Vec<PhoneInputEvent> {
    text.chars()
        .filter_map(|c| input.handle_input(key(KeyCode::Char(c))))
        .collect()
}

#[test]
fn test_typing_emits_growing_values() {
    let mut input = PhoneInput::new(test_masks(), "").unwrap();
    let events = type_str(&mut input, "123");

    assert_eq!(
        events,
        vec![
            PhoneInputEvent::Changed("+7(1".to_string()),
            PhoneInputEvent::Changed("+7(12".to_string()),
            PhoneInputEvent::Changed("+7(123) - ".to_string()),
        ]
    );
}

#[test]
fn test_typing_full_number() {
    let mut input = PhoneInput::new(test_masks(), "").unwrap();
    let events = type_str(&mut input, "1234567890");

    assert_eq!(events.len(), 10);
    assert_eq!(
        events.last(),
        Some(&PhoneInputEvent::Changed(
            "+7(123) - 456 - 78 - 90".to_string()
        ))
    );
    assert!(input.field().is_complete());
}

#[test]
fn test_letters_between_digits_are_dropped() {
    let mut input = PhoneInput::new(test_masks(), "").unwrap();
    let events = type_str(&mut input, "1a2b3");

    assert_eq!(events.len(), 3);
    assert_eq!(input.field().digits(), "123");
}

#[test]
fn test_overtyping_complete_number_keeps_last_cell() {
    let mut input = PhoneInput::new(test_masks(), "").unwrap();
    type_str(&mut input, "12345678909999");

    // Focus stays on the last cell and each extra digit overwrites it
    assert_eq!(input.field().digits(), "1234567899");
    assert_eq!(input.field().focused_cell(), 9);
}

#[test]
fn test_backspace_walks_backwards() {
    let mut input = PhoneInput::new(test_masks(), "").unwrap();
    type_str(&mut input, "123");

    // Focus is on cell 3 (empty); three deletions clear the sequence
    input.handle_input(key(KeyCode::Backspace));
    input.handle_input(key(KeyCode::Backspace));
    input.handle_input(key(KeyCode::Backspace));
    let last = input.handle_input(key(KeyCode::Backspace));

    assert_eq!(input.field().digits(), "");
    assert_eq!(last, Some(PhoneInputEvent::Changed("+7".to_string())));
    assert_eq!(input.field().focused_cell(), 0);
}

#[test]
fn test_mask_switch_truncates_digits() {
    let mut masks = test_masks();
    masks.push(short_mask());
    let mut field = PhoneField::new(masks, "+71234567890").unwrap();
    assert_eq!(field.digits(), "1234567890");

    // short_mask sits at index 4 with six cells
    field.select_mask_at(4);
    assert_eq!(field.current_mask().key, "short");
    assert_eq!(field.digits(), "123456");
    assert_eq!(field.focused_cell(), 0);
}

#[test]
fn test_dropdown_selection_switches_mask() {
    let mut input = PhoneInput::new(test_masks(), "").unwrap();
    type_str(&mut input, "12");

    input.handle_input(key(KeyCode::Down)); // open dropdown
    input.handle_input(key(KeyCode::Down)); // highlight us
    let event = input.handle_input(key(KeyCode::Enter));

    assert_eq!(input.field().current_mask().key, "us");
    // Two digits survive the switch (both masks hold ten cells)
    assert_eq!(event, Some(PhoneInputEvent::Changed("+1(12".to_string())));
    assert_eq!(input.field().focused_cell(), 0);
}

#[test]
fn test_external_update_guard() {
    let mut field = PhoneField::new(test_masks(), "").unwrap();
    field.enter_digit(0, '5');

    // Echo of our own formatted value: ignored
    assert!(!field.set_value("+7(5"));
    // Repeat of the last external value: ignored
    assert!(!field.set_value(""));
    // A genuinely new value re-imports and may switch masks
    assert!(field.set_value("+44 7911 123456"));
    assert_eq!(field.current_mask().key, "uk");
    assert_eq!(field.digits(), "7911123456");
}

#[test]
fn test_external_update_with_unknown_shape_truncates() {
    let mut field = PhoneField::new(vec![ru_mask()], "").unwrap();
    assert!(field.set_value("tel: 123456789012345"));
    assert_eq!(field.digits(), "1234567890");
}

#[test]
fn test_mask_set_replacement_keeps_key_when_present() {
    let mut field = PhoneField::new(test_masks(), "+1 (555) 123 - 4567").unwrap();
    assert_eq!(field.current_mask().key, "us");

    let mut reordered = test_masks();
    reordered.rotate_left(2); // us moves to the back
    field.set_masks(reordered).unwrap();
    assert_eq!(field.current_mask().key, "us");
    assert_eq!(field.digits(), "5551234567");
}

#[test]
fn test_mask_set_replacement_falls_back_to_first() {
    let mut field = PhoneField::new(test_masks(), "+1 (555) 123 - 4567").unwrap();

    field.set_masks(vec![short_mask()]).unwrap();
    assert_eq!(field.current_mask().key, "short");
    // Ten digits truncate to the six cells of the fallback mask
    assert_eq!(field.digits(), "555123");
}

#[test]
fn test_construction_from_garbage_is_empty() {
    let field = PhoneField::new(test_masks(), "call me maybe").unwrap();
    assert_eq!(field.digits(), "");
    assert_eq!(field.formatted_value(), "+7");
}

#[test]
fn test_notification_never_repeats() {
    let mut field = PhoneField::new(test_masks(), "").unwrap();

    let first = field.enter_digit(0, '1');
    assert!(first.is_some());
    // Re-entering the same digit at the same cell formats identically
    assert_eq!(field.enter_digit(0, '1'), None);
    // Deleting an empty downstream cell changes nothing either
    assert_eq!(field.clear_cell(7), None);
}

#[test]
fn test_enter_submits_complete_number() {
    let mut input = PhoneInput::new(test_masks(), "").unwrap();
    type_str(&mut input, "1234567890");

    assert_eq!(
        input.handle_input(key(KeyCode::Enter)),
        Some(PhoneInputEvent::Submitted(
            "+7(123) - 456 - 78 - 90".to_string()
        ))
    );
}

#[test]
fn test_enter_on_partial_number_does_nothing() {
    let mut input = PhoneInput::new(test_masks(), "").unwrap();
    type_str(&mut input, "123");
    assert_eq!(input.handle_input(key(KeyCode::Enter)), None);
}
