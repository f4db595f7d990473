use knd_dnd::{collect_key_intents, DndEngine, Identifiable, Key, KeyEvent};

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: char,
}

impl Identifiable for Row {
    type Id = char;

    fn id(&self) -> char {
        self.id
    }
}

fn row(id: char) -> Row {
    Row { id }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn engine_with_rows(ids: &str) -> DndEngine<Row> {
    init_logger();
    let mut engine = DndEngine::new();
    engine
        .set_registry(ids.chars().map(row))
        .expect("Registry sollte gelingen");
    engine
}

fn selected_ids(engine: &DndEngine<Row>) -> String {
    engine.selected_items().keys().collect()
}

fn shift_hovered_ids(engine: &DndEngine<Row>) -> String {
    engine
        .state_map()
        .iter()
        .filter(|(_, entry)| entry.state.is_shift_hovered)
        .map(|(key, _)| *key)
        .collect()
}

#[test]
fn test_shift_range_selects_between_anchor_and_clicked_item() {
    let mut engine = engine_with_rows("ABCDE");

    engine.select(row('B')).expect("Selektion sollte gelingen");
    engine.hover(row('D')).expect("Hover sollte gelingen");
    engine.set_shift_active(true);

    let hovered = shift_hovered_ids(&engine);
    assert!(hovered.contains('C') && hovered.contains('D'));
    assert!(!hovered.contains('A') && !hovered.contains('E'));

    engine.select(row('D')).expect("Bereichsselektion sollte gelingen");

    assert_eq!(selected_ids(&engine), "BCD");
    assert_eq!(engine.signals().latest_selected().map(|k| k.key), Some('D'));
    let map = engine.state_map();
    assert!(!map.state_of(&'E').is_selected);
    assert!(!map.state_of(&'E').is_shift_hovered);
}

#[test]
fn test_shift_range_works_in_both_directions() {
    let mut engine = engine_with_rows("ABCDE");

    engine.select(row('D')).expect("Selektion sollte gelingen");
    engine.set_shift_active(true);
    engine.hover(row('A')).expect("Hover sollte gelingen");
    engine.select(row('A')).expect("Bereichsselektion sollte gelingen");

    // Bereichsreihenfolge, Anker zuerst selektiert
    assert_eq!(selected_ids(&engine), "DABC");
}

#[test]
fn test_duplicate_selection_is_warning_without_state_change() {
    let mut engine = engine_with_rows("ABC");
    engine.select(row('A')).expect("Selektion sollte gelingen");
    let before = engine.selected_items();

    let err = engine
        .select(row('A'))
        .expect_err("Doppelte Selektion muss gemeldet werden");

    assert!(err.is_warning());
    assert!(std::sync::Arc::ptr_eq(&before, &engine.selected_items()));
}

#[test]
fn test_invalid_deselection_reports_error_and_keeps_state() {
    let mut engine = engine_with_rows("ABC");
    engine.select(row('A')).expect("Selektion sollte gelingen");

    let err = engine
        .deselect(row('B'))
        .expect_err("Deselektion eines unselektierten Items muss fehlschlagen");

    assert!(!err.is_warning());
    assert_eq!(selected_ids(&engine), "A");
    assert_eq!(engine.signals().latest_selected().map(|k| k.key), Some('A'));
}

#[test]
fn test_deselect_all_clears_map_and_anchor() {
    let mut engine = engine_with_rows("ABC");
    engine.select(row('A')).expect("Selektion sollte gelingen");
    engine.select(row('C')).expect("Selektion sollte gelingen");

    engine.deselect_all();

    assert!(engine.selected_items().is_empty());
    assert!(engine.signals().latest_selected().is_none());
    assert!(engine.state_map().iter().all(|(_, e)| !e.state.is_selected));
    assert_eq!(engine.command_log().last(), Some("DeselectAll"));
}

#[test]
fn test_toggle_selects_and_deselects() {
    let mut engine = engine_with_rows("AB");

    engine.toggle(row('B')).expect("Toggle sollte gelingen");
    assert_eq!(selected_ids(&engine), "B");

    engine.toggle(row('B')).expect("Toggle sollte gelingen");
    assert!(engine.selected_items().is_empty());
    assert!(engine.signals().latest_selected().is_none());
}

#[test]
fn test_select_all_keeps_order_and_sets_last_as_anchor() {
    let mut engine = engine_with_rows("ABCD");
    engine.select(row('B')).expect("Selektion sollte gelingen");

    engine.select_all();

    assert_eq!(selected_ids(&engine), "BACD");
    assert_eq!(engine.signals().latest_selected().map(|k| k.key), Some('D'));
}

#[test]
fn test_keyboard_shift_and_escape_drive_selection() {
    let mut engine = engine_with_rows("ABCDE");
    engine.select(row('A')).expect("Selektion sollte gelingen");
    engine.hover(row('C')).expect("Hover sollte gelingen");

    let intents = collect_key_intents(&KeyEvent::down(Key::Shift), engine.options());
    engine.handle_intents(intents).expect("Shift sollte gelingen");
    assert!(engine.signals().shift_active());
    assert_eq!(shift_hovered_ids(&engine), "ABC");

    let intents = collect_key_intents(&KeyEvent::up(Key::Shift), engine.options());
    engine.handle_intents(intents).expect("Shift-Up sollte gelingen");
    assert!(!engine.signals().shift_active());
    assert!(shift_hovered_ids(&engine).is_empty());

    let intents = collect_key_intents(&KeyEvent::down(Key::from_name("Esc")), engine.options());
    engine.handle_intents(intents).expect("Escape sollte gelingen");
    assert!(engine.selected_items().is_empty());
}
