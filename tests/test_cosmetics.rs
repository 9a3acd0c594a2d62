use std::collections::BTreeSet;

use flappy_game::cosmetics::*;

#[test]
fn catalog_starts_with_free_default() {
    let first = &catalog()[0];
    assert_eq!(first.id, DEFAULT_SKIN);
    assert_eq!(first.cost, 0);
    assert!(catalog().iter().all(|s| !s.frames.is_empty()));
}

#[test]
fn frame_wraps_around() {
    let red = skin(1).unwrap();
    assert_eq!(red.frame(0), red.frame(red.frames.len()));
    assert_eq!(red.frame(3), Some(red.frames[3]));
}

#[test]
fn skin_without_frames_has_no_frame() {
    let bare = Skin { id: 9, name: "Bare", cost: 0, frames: &[] };
    assert_eq!(bare.frame(0), None);
}

#[test]
fn default_owns_only_skin_zero() {
    let owned = PlayerCosmetics::default();
    assert_eq!(owned.unlocked, BTreeSet::from([0]));
    assert_eq!(owned.selected, 0);
    assert!(owned.is_valid());
}

// ── attempt_select ────────────────────────────────────────────────────────────

#[test]
fn unaffordable_skin_changes_nothing() {
    let mut owned = PlayerCosmetics::default();
    assert_eq!(attempt_select(&mut owned, 1, 15), SelectOutcome::Unaffordable);
    assert_eq!(owned, PlayerCosmetics::default());
}

#[test]
fn affordable_skin_is_unlocked_and_worn() {
    let mut owned = PlayerCosmetics::default();
    assert_eq!(attempt_select(&mut owned, 1, 25), SelectOutcome::Unlocked);
    assert!(owned.is_unlocked(1));
    assert_eq!(owned.selected, 1);
    assert_eq!(owned.selected_skin().name, "Red");
}

#[test]
fn exact_cost_is_enough() {
    let mut owned = PlayerCosmetics::default();
    assert_eq!(attempt_select(&mut owned, 2, 40), SelectOutcome::Unlocked);
}

#[test]
fn owned_skin_is_selected_regardless_of_score() {
    let mut owned = PlayerCosmetics {
        unlocked: BTreeSet::from([0, 2]),
        selected: 2,
    };
    assert_eq!(attempt_select(&mut owned, 0, 0), SelectOutcome::Selected);
    assert_eq!(owned.selected, 0);
    assert_eq!(attempt_select(&mut owned, 2, 0), SelectOutcome::Selected);
    assert_eq!(owned.selected, 2);
}

#[test]
fn unknown_skin_is_rejected() {
    let mut owned = PlayerCosmetics::default();
    assert_eq!(attempt_select(&mut owned, 77, 1000), SelectOutcome::UnknownSkin);
    assert!(!SelectOutcome::UnknownSkin.changed());
    assert_eq!(owned, PlayerCosmetics::default());
}

// ── validation ────────────────────────────────────────────────────────────────

#[test]
fn records_are_validated() {
    let missing_default = PlayerCosmetics {
        unlocked: BTreeSet::from([1]),
        selected: 1,
    };
    let wears_unowned = PlayerCosmetics {
        unlocked: BTreeSet::from([0]),
        selected: 2,
    };
    let unknown = PlayerCosmetics {
        unlocked: BTreeSet::from([0, 42]),
        selected: 0,
    };
    assert!(!missing_default.is_valid());
    assert!(!wears_unowned.is_valid());
    assert!(!unknown.is_valid());
}
