//! Rendering layer. All terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable snapshot of the
//! game.  No game logic is performed; this module only translates world
//! coordinates into terminal cells and cells into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use flappy_game::cosmetics::{self, Skin};
use flappy_game::entities::{GameMode, RenderSnapshot};
use flappy_game::input::{self, MenuButton, Point, Rect};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_BEST: Color = Color::DarkYellow;
const C_PIPE: Color = Color::Green;
const C_TITLE: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;
const C_OVERLAY: Color = Color::White;

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps the world rectangle onto the terminal.  Row 0 is the HUD and the last
/// row the controls hint; the world fills the box in between, keeping roughly
/// its aspect ratio (a cell is about twice as tall as it is wide).
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub left: u16,
    pub top: u16,
    pub cols: u16,
    pub rows: u16,
    world_w: f32,
    world_h: f32,
}

impl Viewport {
    pub fn fit(term_w: u16, term_h: u16, world_w: f32, world_h: f32) -> Self {
        let rows = term_h.saturating_sub(4).max(1);
        let wanted_cols = (rows as f32 * 2.0 * world_w / world_h).round() as u16;
        let cols = wanted_cols.min(term_w.saturating_sub(2)).max(1);
        Viewport {
            left: (term_w.saturating_sub(cols)) / 2,
            top: 2,
            cols,
            rows,
            world_w,
            world_h,
        }
    }

    pub fn col(&self, x: f32) -> i32 {
        self.left as i32 + (x * self.cols as f32 / self.world_w).floor() as i32
    }

    pub fn row(&self, y: f32) -> i32 {
        self.top as i32 + (y * self.rows as f32 / self.world_h).floor() as i32
    }

    /// World point at the centre of a terminal cell.
    pub fn to_world(&self, col: u16, row: u16) -> Point {
        let cx = col as f32 - self.left as f32 + 0.5;
        let cy = row as f32 - self.top as f32 + 0.5;
        Point::new(
            cx * self.world_w / self.cols as f32,
            cy * self.world_h / self.rows as f32,
        )
    }

    fn contains(&self, col: i32, row: i32) -> bool {
        col >= self.left as i32
            && col < (self.left + self.cols) as i32
            && row >= self.top as i32
            && row < (self.top + self.rows) as i32
    }

    fn cell_rect(&self, r: Rect) -> (u16, u16, u16, u16) {
        let c0 = self.col(r.x).max(0) as u16;
        let r0 = self.row(r.y).max(0) as u16;
        let c1 = self.col(r.x + r.w).max(c0 as i32 + 1) as u16;
        let r1 = self.row(r.y + r.h).max(r0 as i32 + 1) as u16;
        (c0, r0, c1 - c0, r1 - r0)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    snap: &RenderSnapshot,
    view: &Viewport,
    term_h: u16,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, view)?;

    match snap.mode {
        GameMode::Menu | GameMode::Quit => draw_menu(out, snap, view)?,
        GameMode::Shop => draw_shop(out, snap, view)?,
        GameMode::Playing | GameMode::Paused | GameMode::PauseCountdown | GameMode::GameOver => {
            draw_pipes(out, snap, view)?;
            draw_bird(out, snap, view)?;
            draw_hud(out, snap)?;
        }
    }

    match snap.mode {
        GameMode::GameOver => draw_game_over(out, snap, view)?,
        GameMode::Paused => draw_box(
            out,
            view,
            &[("PAUSED", Color::Yellow), ("P - Resume   Q - Quit", C_OVERLAY)],
        )?,
        GameMode::PauseCountdown => {
            let digit = snap.countdown.unwrap_or(0).to_string();
            draw_box(out, view, &[("Get Ready!", Color::Yellow), (digit.as_str(), C_OVERLAY)])?;
        }
        _ => {}
    }

    draw_controls_hint(out, snap, term_h)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, term_h.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let left = view.left.saturating_sub(1);
    let right = view.left + view.cols;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(left, view.top.saturating_sub(1)))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;

    out.queue(cursor::MoveTo(left, view.top + view.rows))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in view.top..view.top + view.rows {
        out.queue(cursor::MoveTo(left, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(right, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, snap: &RenderSnapshot) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>5}", snap.score)))?;
    out.queue(style::SetForegroundColor(C_HUD_BEST))?;
    out.queue(Print(format!("  High Score:{:>5}", snap.high_score)))?;
    Ok(())
}

// ── Course ────────────────────────────────────────────────────────────────────

fn draw_pipes<W: Write>(
    out: &mut W,
    snap: &RenderSnapshot,
    view: &Viewport,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_PIPE))?;
    for pipe in &snap.obstacles {
        let c0 = view.col(pipe.x);
        let c1 = view.col(pipe.x + snap.pipe_width).max(c0 + 1);
        let gap_top = view.row(pipe.gap_top);
        let gap_bottom = view.row(pipe.gap_top + snap.pipe_gap);
        for row in view.top as i32..(view.top + view.rows) as i32 {
            if row >= gap_top && row < gap_bottom {
                continue;
            }
            for col in c0..c1 {
                if view.contains(col, row) {
                    out.queue(cursor::MoveTo(col as u16, row as u16))?;
                    out.queue(Print("█"))?;
                }
            }
        }
    }
    Ok(())
}

fn skin_color(skin: &Skin) -> Color {
    match skin.id {
        1 => Color::Red,
        2 => Color::Blue,
        _ => Color::Yellow,
    }
}

/// Wing position cycles with the animation frame.  A skin without frames
/// draws a placeholder instead.
fn bird_glyph(skin: &Skin, frame: usize) -> &'static str {
    const WINGS: [&str; 4] = ["(>", "(^", "(-", "(v"];
    match skin.frame(frame) {
        Some(_) => WINGS[frame % WINGS.len()],
        None => "??",
    }
}

fn draw_bird<W: Write>(out: &mut W, snap: &RenderSnapshot, view: &Viewport) -> std::io::Result<()> {
    let skin = snap.cosmetics.selected_skin();
    let col = view.col(snap.bird_x - snap.bird_size / 2.0);
    let row = view.row(snap.bird.y);
    if view.contains(col, row) {
        out.queue(cursor::MoveTo(col as u16, row as u16))?;
        out.queue(style::SetForegroundColor(skin_color(skin)))?;
        out.queue(Print(bird_glyph(skin, snap.skin_frame)))?;
    }
    Ok(())
}

// ── Menu ──────────────────────────────────────────────────────────────────────

fn centered<W: Write>(
    out: &mut W,
    view: &Viewport,
    row: i32,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let col = (view.left + view.cols / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row.max(0) as u16))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn draw_button<W: Write>(
    out: &mut W,
    view: &Viewport,
    rect: Rect,
    label: &str,
    color: Color,
) -> std::io::Result<()> {
    let (c0, r0, w, h) = view.cell_rect(rect);
    out.queue(style::SetForegroundColor(color))?;
    for row in r0..r0 + h {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print("▒".repeat(w as usize)))?;
    }
    let label_col = (c0 + w / 2).saturating_sub(label.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(label_col, r0 + h / 2))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(label))?;
    Ok(())
}

fn draw_menu<W: Write>(out: &mut W, snap: &RenderSnapshot, view: &Viewport) -> std::io::Result<()> {
    centered(out, view, view.row(100.0), "FLAPPY BIRD", C_TITLE)?;
    centered(
        out,
        view,
        view.row(200.0),
        &format!("High Score: {}", snap.high_score),
        C_HUD_SCORE,
    )?;

    for button in MenuButton::ALL {
        let hovered = snap.hovered == Some(button);
        let color = match (button, hovered) {
            (MenuButton::Play, false) => Color::DarkGreen,
            (MenuButton::Play, true) => Color::Green,
            (MenuButton::Shop, false) => Color::DarkBlue,
            (MenuButton::Shop, true) => Color::Blue,
            (MenuButton::Quit, false) => Color::DarkRed,
            (MenuButton::Quit, true) => Color::Red,
        };
        draw_button(out, view, button.rect(), button.label(), color)?;
    }
    Ok(())
}

// ── Shop ──────────────────────────────────────────────────────────────────────

fn draw_shop<W: Write>(out: &mut W, snap: &RenderSnapshot, view: &Viewport) -> std::io::Result<()> {
    centered(out, view, view.row(40.0), "BIRD SHOP", C_TITLE)?;
    centered(out, view, view.row(80.0), "Click a bird to buy/select", C_OVERLAY)?;

    for (i, skin) in cosmetics::catalog().iter().enumerate() {
        let tile = input::skin_tile(i);
        let owned = snap.cosmetics.is_unlocked(skin.id);
        let color = if owned { skin_color(skin) } else { Color::DarkGrey };
        draw_button(out, view, tile, bird_glyph(skin, 0), color)?;

        let (c0, r0, _, h) = view.cell_rect(tile);
        out.queue(cursor::MoveTo(c0, r0 + h))?;
        out.queue(style::SetForegroundColor(C_OVERLAY))?;
        out.queue(Print(skin.name))?;

        out.queue(cursor::MoveTo(c0, r0 + h + 1))?;
        if !owned {
            out.queue(style::SetForegroundColor(Color::Yellow))?;
            out.queue(Print(format!("Cost: {}", skin.cost)))?;
        } else if snap.cosmetics.selected == skin.id {
            out.queue(style::SetForegroundColor(Color::Green))?;
            out.queue(Print("Selected"))?;
        } else {
            out.queue(style::SetForegroundColor(C_OVERLAY))?;
            out.queue(Print("Owned"))?;
        }
    }

    draw_button(out, view, input::back_button(snap.height), "Back", Color::DarkGrey)?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(
    out: &mut W,
    snap: &RenderSnapshot,
    term_h: u16,
) -> std::io::Result<()> {
    let hint = match snap.mode {
        GameMode::Menu | GameMode::Quit | GameMode::Shop => "Mouse : Select   ESC : Exit",
        _ => "SPACE : Flap   P : Pause   Q : Quit   ESC : Exit",
    };
    out.queue(cursor::MoveTo(1, term_h.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_box<W: Write>(
    out: &mut W,
    view: &Viewport,
    lines: &[(&str, Color)],
) -> std::io::Result<()> {
    let inner = lines
        .iter()
        .map(|(text, _)| text.chars().count())
        .max()
        .unwrap_or(0)
        + 4;
    let start_row = (view.top + view.rows / 2).saturating_sub(lines.len() as u16 / 2 + 1) as i32;

    centered(out, view, start_row, &format!("╔{}╗", "═".repeat(inner)), C_OVERLAY)?;
    for (i, (text, color)) in lines.iter().enumerate() {
        let row = start_row + 1 + i as i32;
        centered(out, view, row, &format!("║{:^width$}║", "", width = inner), C_OVERLAY)?;
        centered(out, view, row, text, *color)?;
    }
    centered(
        out,
        view,
        start_row + 1 + lines.len() as i32,
        &format!("╚{}╝", "═".repeat(inner)),
        C_OVERLAY,
    )?;
    Ok(())
}

fn draw_game_over<W: Write>(
    out: &mut W,
    snap: &RenderSnapshot,
    view: &Viewport,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>5}", snap.score);
    let new_best = snap.score >= snap.high_score && snap.score > 0;
    let best_line = if new_best {
        format!("★ NEW BEST: {:>5} ★", snap.high_score)
    } else {
        format!("Best Score:  {:>5}", snap.high_score)
    };
    let best_color = if new_best { Color::Yellow } else { Color::DarkGrey };

    draw_box(
        out,
        view,
        &[
            ("GAME OVER", Color::Red),
            (score_line.as_str(), Color::Yellow),
            (best_line.as_str(), best_color),
            ("SPACE - Play Again  Q - Menu", C_OVERLAY),
        ],
    )
}
