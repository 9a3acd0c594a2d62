//! Input events delivered by the host and the clickable regions of the menu
//! and shop screens.  Coordinates are world units, origin top-left.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Flap,
    Pause,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove(Point),
    PointerClick(Point),
    KeyDown(Key),
    KeyUp(Key),
}

// ── Hit regions ───────────────────────────────────────────────────────────────

/// Axis-aligned rectangle with inclusive edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuButton {
    Play,
    Shop,
    Quit,
}

impl MenuButton {
    pub const ALL: [MenuButton; 3] = [MenuButton::Play, MenuButton::Shop, MenuButton::Quit];

    pub fn rect(&self) -> Rect {
        match self {
            MenuButton::Play => Rect::new(120.0, 250.0, 160.0, 60.0),
            MenuButton::Shop => Rect::new(120.0, 350.0, 160.0, 60.0),
            MenuButton::Quit => Rect::new(120.0, 440.0, 160.0, 60.0),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuButton::Play => "Play",
            MenuButton::Shop => "Shop",
            MenuButton::Quit => "Quit",
        }
    }
}

pub fn menu_button_at(p: Point) -> Option<MenuButton> {
    MenuButton::ALL.into_iter().find(|b| b.rect().contains(p))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShopTarget {
    Back,
    Skin(u32),
}

/// Size of a skin preview tile in the shop grid.
pub const SKIN_TILE: f32 = 64.0;

/// Preview tile for the skin at `index`: four per row.
pub fn skin_tile(index: usize) -> Rect {
    let col = (index % 4) as f32;
    let row = (index / 4) as f32;
    Rect::new(60.0 + col * 100.0, 120.0 + row * 140.0, SKIN_TILE, SKIN_TILE)
}

pub fn back_button(height: f32) -> Rect {
    Rect::new(40.0, height - 50.0, 80.0, 40.0)
}

pub fn shop_target_at(p: Point, height: f32, skin_count: usize) -> Option<ShopTarget> {
    if back_button(height).contains(p) {
        return Some(ShopTarget::Back);
    }
    (0..skin_count)
        .find(|&i| skin_tile(i).contains(p))
        .map(|i| ShopTarget::Skin(i as u32))
}
