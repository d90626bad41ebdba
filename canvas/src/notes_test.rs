#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

use super::*;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn note(id: NoteId, x: f64, y: f64) -> StickyNote {
    StickyNote { id, text: format!("note {id}"), x, y, color: NoteColor::Yellow, width: 120.0, height: 50.0 }
}

fn store_with(notes: Vec<StickyNote>) -> NoteStore {
    let mut store = NoteStore::new();
    store.load(notes);
    store
}

// =============================================================
// create
// =============================================================

#[test]
fn create_rejects_empty_text() {
    let mut store = NoteStore::new();
    assert!(store.create("", &mut rng()).is_none());
    assert!(store.is_empty());
}

#[test]
fn create_rejects_whitespace_text() {
    let mut store = NoteStore::new();
    assert!(store.create("   \t\n", &mut rng()).is_none());
    assert!(store.is_empty());
}

#[test]
fn create_ship_beta_scenario() {
    let mut store = NoteStore::new();
    let note = store.create("Ship beta", &mut rng()).unwrap().clone();
    assert_eq!(note.text, "Ship beta");
    assert!((50.0..=650.0).contains(&note.x), "x = {}", note.x);
    assert!((50.0..=350.0).contains(&note.y), "y = {}", note.y);
    assert!(NoteColor::PALETTE.contains(&note.color));
    assert_eq!(note.width, 120.0);
    assert_eq!(note.height, 50.0);
    assert_eq!(store.len(), 1);
}

#[test]
fn create_keeps_untrimmed_text() {
    let mut store = NoteStore::new();
    let note = store.create("  padded ", &mut rng()).unwrap();
    assert_eq!(note.text, "  padded ");
}

#[test]
fn create_placement_is_exact_for_injected_rng() {
    let mut expected = rng();
    let ux: f64 = expected.random();
    let uy: f64 = expected.random();
    let ci = expected.random_range(0..5);

    let mut store = NoteStore::new();
    let note = store.create("deterministic", &mut rng()).unwrap();
    assert_eq!(note.x, 50.0 + ux * 600.0);
    assert_eq!(note.y, 50.0 + uy * 300.0);
    assert_eq!(note.color, NoteColor::PALETTE[ci]);
}

#[test]
fn create_placement_stays_in_band_over_many_draws() {
    let mut store = NoteStore::new();
    let mut r = StdRng::seed_from_u64(42);
    for i in 0..500 {
        store.create(&format!("n{i}"), &mut r);
    }
    for n in store.notes() {
        assert!(n.x >= 50.0 && n.x <= 650.0);
        assert!(n.y >= 50.0 && n.y <= 350.0);
    }
}

#[test]
fn create_uses_every_palette_entry() {
    let mut store = NoteStore::new();
    let mut r = StdRng::seed_from_u64(3);
    for i in 0..200 {
        store.create(&format!("n{i}"), &mut r);
    }
    for color in NoteColor::PALETTE {
        assert!(store.notes().iter().any(|n| n.color == color), "{color:?} never drawn");
    }
}

#[test]
fn create_ids_are_unique_and_increasing() {
    let mut store = NoteStore::new();
    let mut r = rng();
    for i in 0..50 {
        store.create(&format!("n{i}"), &mut r);
    }
    let ids: Vec<NoteId> = store.notes().iter().map(|n| n.id).collect();
    for pair in ids.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn create_appends_on_top() {
    let mut store = NoteStore::new();
    let mut r = rng();
    store.create("first", &mut r);
    store.create("second", &mut r);
    assert_eq!(store.notes()[0].text, "first");
    assert_eq!(store.notes()[1].text, "second");
}

// =============================================================
// delete
// =============================================================

#[test]
fn delete_removes_note() {
    let mut store = store_with(vec![note(1, 0.0, 0.0), note(2, 0.0, 0.0)]);
    let removed = store.delete(1).unwrap();
    assert_eq!(removed.id, 1);
    assert!(store.get(1).is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn delete_absent_is_noop() {
    let mut store = store_with(vec![note(1, 0.0, 0.0)]);
    assert!(store.delete(99).is_none());
    assert!(store.delete(99).is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn deleted_id_is_never_reused() {
    let mut store = NoteStore::new();
    let mut r = rng();
    let id = store.create("a", &mut r).unwrap().id;
    store.delete(id);
    let next = store.create("b", &mut r).unwrap().id;
    assert!(next > id);
}

// =============================================================
// in-place mutations
// =============================================================

#[test]
fn update_text_replaces_text() {
    let mut store = store_with(vec![note(1, 0.0, 0.0)]);
    assert!(store.update_text(1, "edited"));
    assert_eq!(store.get(1).unwrap().text, "edited");
}

#[test]
fn update_text_absent_returns_false() {
    let mut store = NoteStore::new();
    assert!(!store.update_text(5, "x"));
}

#[test]
fn reposition_moves_origin() {
    let mut store = store_with(vec![note(1, 0.0, 0.0)]);
    assert!(store.reposition(1, 290.0, 40.0));
    assert_eq!(store.get(1).unwrap().origin(), Point::new(290.0, 40.0));
}

#[test]
fn reposition_absent_returns_false() {
    let mut store = store_with(vec![note(1, 3.0, 4.0)]);
    assert!(!store.reposition(2, 10.0, 10.0));
    assert_eq!(store.get(1).unwrap().origin(), Point::new(3.0, 4.0));
}

#[test]
fn resize_sets_size() {
    let mut store = store_with(vec![note(1, 0.0, 0.0)]);
    assert!(store.resize(1, 200.0, 90.0));
    assert_eq!(store.get(1).unwrap().size(), Size::new(200.0, 90.0));
}

#[test]
fn resize_absent_returns_false() {
    let mut store = NoteStore::new();
    assert!(!store.resize(1, 200.0, 90.0));
}

#[test]
fn clear_all_empties_store() {
    let mut store = store_with(vec![note(1, 0.0, 0.0), note(2, 0.0, 0.0)]);
    assert_eq!(store.clear_all(), 2);
    assert!(store.is_empty());
    assert_eq!(store.clear_all(), 0);
}

// =============================================================
// load
// =============================================================

#[test]
fn load_preserves_order() {
    let store = store_with(vec![note(30, 0.0, 0.0), note(10, 0.0, 0.0), note(20, 0.0, 0.0)]);
    let ids: Vec<NoteId> = store.notes().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![30, 10, 20]);
}

#[test]
fn load_replaces_existing_notes() {
    let mut store = NoteStore::new();
    store.create("old", &mut rng());
    store.load(vec![note(1, 0.0, 0.0)]);
    assert_eq!(store.len(), 1);
    assert_eq!(store.notes()[0].id, 1);
}

#[test]
fn ids_after_load_exceed_restored_ids() {
    let far_future = u64::MAX / 2;
    let mut store = store_with(vec![note(far_future, 0.0, 0.0)]);
    let id = store.create("new", &mut rng()).unwrap().id;
    assert!(id > far_future);
}

// =============================================================
// Geometry accessors
// =============================================================

#[test]
fn bounds_spans_origin_and_size() {
    let n = note(1, 10.0, 20.0);
    assert_eq!(n.bounds(), Rect::new(10.0, 20.0, 120.0, 50.0));
}

// =============================================================
// Serde
// =============================================================

#[test]
fn color_serializes_as_hex() {
    for color in NoteColor::PALETTE {
        let s = serde_json::to_string(&color).unwrap();
        assert_eq!(s, format!("\"{}\"", color.hex()));
    }
}

#[test]
fn color_rejects_off_palette_value() {
    assert!(serde_json::from_str::<NoteColor>("\"#000000\"").is_err());
}

#[test]
fn note_wire_format_field_names() {
    let value = serde_json::to_value(note(7, 100.0, 100.0)).unwrap();
    assert_eq!(
        value,
        json!({
            "id": 7,
            "text": "note 7",
            "x": 100.0,
            "y": 100.0,
            "color": "#ffeb3b",
            "width": 120.0,
            "height": 50.0,
        })
    );
}

#[test]
fn note_without_size_gets_defaults() {
    let n: StickyNote =
        serde_json::from_value(json!({ "id": 1, "text": "t", "x": 5.5, "y": 6.5, "color": "#2196f3" })).unwrap();
    assert_eq!(n.width, 120.0);
    assert_eq!(n.height, 50.0);
    assert_eq!(n.color, NoteColor::Blue);
}
