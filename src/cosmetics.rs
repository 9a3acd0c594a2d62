//! Unlockable bird skins.
//!
//! The catalog is static.  `PlayerCosmetics` is the persisted part: which
//! skins are owned and which one is worn.  Skin 0 is always owned and can
//! never be bought.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skin {
    pub id: u32,
    pub name: &'static str,
    pub cost: u32,
    /// Animation frame asset references, in playback order.
    pub frames: &'static [&'static str],
}

impl Skin {
    /// Frame asset for animation step `index`, if the skin has any frames.
    pub fn frame(&self, index: usize) -> Option<&'static str> {
        if self.frames.is_empty() {
            None
        } else {
            Some(self.frames[index % self.frames.len()])
        }
    }
}

pub const DEFAULT_SKIN: u32 = 0;

const YELLOW_FRAMES: [&str; 8] = [
    "frames/frame-1.png",
    "frames/frame-2.png",
    "frames/frame-3.png",
    "frames/frame-4.png",
    "frames/frame-5.png",
    "frames/frame-6.png",
    "frames/frame-7.png",
    "frames/frame-8.png",
];

const RED_FRAMES: [&str; 8] = [
    "frames/frame-9.png",
    "frames/frame-10.png",
    "frames/frame-11.png",
    "frames/frame-12.png",
    "frames/frame-13.png",
    "frames/frame-14.png",
    "frames/frame-15.png",
    "frames/frame-16.png",
];

const BLUE_FRAMES: [&str; 8] = [
    "frames/frame-17.png",
    "frames/frame-18.png",
    "frames/frame-19.png",
    "frames/frame-20.png",
    "frames/frame-21.png",
    "frames/frame-22.png",
    "frames/frame-23.png",
    "frames/frame-24.png",
];

pub static CATALOG: [Skin; 3] = [
    Skin { id: 0, name: "Yellow", cost: 0, frames: &YELLOW_FRAMES },
    Skin { id: 1, name: "Red", cost: 20, frames: &RED_FRAMES },
    Skin { id: 2, name: "Blue", cost: 40, frames: &BLUE_FRAMES },
];

pub fn catalog() -> &'static [Skin] {
    &CATALOG
}

pub fn skin(id: u32) -> Option<&'static Skin> {
    CATALOG.iter().find(|s| s.id == id)
}

// ── Owned state ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCosmetics {
    pub unlocked: BTreeSet<u32>,
    pub selected: u32,
}

impl Default for PlayerCosmetics {
    fn default() -> Self {
        PlayerCosmetics {
            unlocked: BTreeSet::from([DEFAULT_SKIN]),
            selected: DEFAULT_SKIN,
        }
    }
}

impl PlayerCosmetics {
    /// A stored record is only trusted if it names known skins, owns the
    /// default one, and wears something it owns.
    pub fn is_valid(&self) -> bool {
        self.unlocked.contains(&DEFAULT_SKIN)
            && self.unlocked.contains(&self.selected)
            && self.unlocked.iter().all(|id| skin(*id).is_some())
    }

    pub fn is_unlocked(&self, id: u32) -> bool {
        self.unlocked.contains(&id)
    }

    pub fn selected_skin(&self) -> &'static Skin {
        skin(self.selected).unwrap_or(&CATALOG[0])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Already owned; selection switched.
    Selected,
    /// Bought with session score and selected.
    Unlocked,
    Unaffordable,
    UnknownSkin,
}

impl SelectOutcome {
    /// Whether the owned state changed and must be persisted.
    pub fn changed(&self) -> bool {
        matches!(self, SelectOutcome::Selected | SelectOutcome::Unlocked)
    }
}

/// Select `id`, buying it first if needed.  Buying compares against the
/// current session `score`; score is not spent.
pub fn attempt_select(owned: &mut PlayerCosmetics, id: u32, score: u32) -> SelectOutcome {
    let Some(target) = skin(id) else {
        return SelectOutcome::UnknownSkin;
    };
    if owned.is_unlocked(id) {
        owned.selected = id;
        return SelectOutcome::Selected;
    }
    if score < target.cost {
        return SelectOutcome::Unaffordable;
    }
    owned.unlocked.insert(id);
    owned.selected = id;
    SelectOutcome::Unlocked
}
