//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only translates
//! world rectangles into terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use platformer::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use platformer::entities::{
    Coin, Enemy, Facing, GameState, GameStatus, Platform, Player, PowerUp, PowerUpKind, Rect,
    Surface, Tint,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_CLOUD: Color = Color::White;
const C_GRASS: Color = Color::Green;
const C_BRICK: Color = Color::DarkYellow;
const C_COIN: Color = Color::Yellow;
const C_STAR: Color = Color::Yellow;
const C_MUSHROOM: Color = Color::Red;
const C_ENEMY: Color = Color::Blue;
const C_PLAYER_RED: Color = Color::Red;
const C_PLAYER_YELLOW: Color = Color::Yellow;
const C_PLAYER_BLINK: Color = Color::White;
const C_FACE: Color = Color::White;
const C_HUD: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

/// Smallest terminal the playfield is legible in.
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 16;

const CLOUD_COUNT: u64 = 5;

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps world units onto terminal cells.  Row 0 holds the HUD and the last
/// row the controls hint; the playfield is scaled into the rows between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    fn play_rows(&self) -> u16 {
        self.rows.saturating_sub(2).max(1)
    }

    fn col(&self, x: f32) -> i32 {
        (x * self.cols as f32 / SCREEN_WIDTH).floor() as i32
    }

    fn row(&self, y: f32) -> i32 {
        1 + (y * self.play_rows() as f32 / SCREEN_HEIGHT).floor() as i32
    }

    /// Inclusive cell span `(col0, row0, col1, row1)` covered by `rect`;
    /// never smaller than one cell.
    pub fn cells(&self, rect: &Rect) -> (i32, i32, i32, i32) {
        let col0 = self.col(rect.left());
        let row0 = self.row(rect.top());
        let col1 = (self.col(rect.right()) - 1).max(col0);
        let row1 = (self.row(rect.bottom()) - 1).max(row0);
        (col0, row0, col1, row1)
    }

    fn in_screen(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && col < self.cols as i32 && row < self.rows as i32
    }

    fn in_playfield(&self, col: i32, row: i32) -> bool {
        self.in_screen(col, row) && row >= 1 && row <= self.play_rows() as i32
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState, vp: Viewport) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_clouds(out, state.frame, vp)?;
    for platform in &state.platforms {
        draw_platform(out, platform, vp)?;
    }
    for coin in &state.coins {
        draw_coin(out, coin, vp)?;
    }
    for power_up in &state.power_ups {
        draw_power_up(out, power_up, vp)?;
    }
    for enemy in &state.enemies {
        draw_enemy(out, enemy, vp)?;
    }
    draw_player(out, &state.player, vp)?;

    draw_hud(out, state, vp)?;
    draw_controls_hint(out, vp)?;

    match state.status {
        GameStatus::GameOver => draw_banner(
            out,
            vp,
            ("GAME OVER", Color::Red),
            &format!("Final Score: {}", state.score),
            "Press R to restart",
        )?,
        GameStatus::LevelComplete => draw_banner(
            out,
            vp,
            ("LEVEL COMPLETE!", Color::Yellow),
            &format!("Score: {}", state.score),
            "Press R for next level",
        )?,
        GameStatus::Playing => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, vp.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Cell primitives ───────────────────────────────────────────────────────────

/// Print `text` at a cell, clipped to the right edge of the screen.
fn put<W: Write>(
    out: &mut W,
    vp: Viewport,
    col: i32,
    row: i32,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    if !vp.in_screen(col, row) {
        return Ok(());
    }
    let room = (vp.cols as i32 - col) as usize;
    let clipped: String = text.chars().take(room).collect();
    out.queue(cursor::MoveTo(col as u16, row as u16))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(clipped))?;
    Ok(())
}

/// Like `put`, but only inside the playfield rows.
fn put_field<W: Write>(
    out: &mut W,
    vp: Viewport,
    col: i32,
    row: i32,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    if vp.in_playfield(col, row) {
        put(out, vp, col, row, text, color)?;
    }
    Ok(())
}

/// Fill every playfield cell under `rect` with `glyph`.
fn fill<W: Write>(
    out: &mut W,
    vp: Viewport,
    rect: &Rect,
    glyph: char,
    color: Color,
) -> std::io::Result<()> {
    let (col0, row0, col1, row1) = vp.cells(rect);
    let first = col0.max(0);
    let last = col1.min(vp.cols as i32 - 1);
    if first > last {
        return Ok(());
    }
    let line: String = std::iter::repeat(glyph)
        .take((last - first + 1) as usize)
        .collect();
    for row in row0..=row1 {
        put_field(out, vp, first, row, &line, color)?;
    }
    Ok(())
}

// ── Background ────────────────────────────────────────────────────────────────

/// Clouds drift right at ~20 world units per second and wrap around.
fn draw_clouds<W: Write>(out: &mut W, frame: u64, vp: Viewport) -> std::io::Result<()> {
    let span = SCREEN_WIDTH as u64 + 400;
    for i in 0..CLOUD_COUNT {
        let x = ((frame / 3 + i * 200) % span) as f32 - 200.0;
        let y = 100.0 + i as f32 * 40.0;
        fill(out, vp, &Rect::new(x, y, 130.0, 20.0), '░', C_CLOUD)?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_platform<W: Write>(out: &mut W, platform: &Platform, vp: Viewport) -> std::io::Result<()> {
    match platform.surface {
        Surface::Grass => fill(out, vp, &platform.rect, '█', C_GRASS),
        Surface::Brick => fill(out, vp, &platform.rect, '▓', C_BRICK),
    }
}

/// Coins pulse between a small and a large glyph with their phase.
fn draw_coin<W: Write>(out: &mut W, coin: &Coin, vp: Viewport) -> std::io::Result<()> {
    let size = 10.0 + (5.0 - coin.phase).abs() * 2.0;
    let glyph = if size >= 15.0 { "O" } else { "o" };
    let (col0, row0, _, _) = vp.cells(&coin.rect);
    put_field(out, vp, col0, row0, glyph, C_COIN)
}

fn draw_power_up<W: Write>(out: &mut W, power_up: &PowerUp, vp: Viewport) -> std::io::Result<()> {
    let bounce = 5.0 * (power_up.phase * 90.0).to_radians().cos().abs();
    let col = vp.col(power_up.rect.center_x());
    let row = vp.row(power_up.rect.center_y() + bounce.floor());
    match power_up.kind {
        PowerUpKind::Star => put_field(out, vp, col, row, "★", C_STAR),
        PowerUpKind::Mushroom => put_field(out, vp, col, row, "♠", C_MUSHROOM),
    }
}

fn draw_enemy<W: Write>(out: &mut W, enemy: &Enemy, vp: Viewport) -> std::io::Result<()> {
    fill(out, vp, &enemy.rect, '▒', C_ENEMY)?;
    // The eye trails the direction of travel
    let eye_x = enemy.rect.center_x() + if enemy.vx > 0.0 { -5.0 } else { 5.0 };
    put_field(
        out,
        vp,
        vp.col(eye_x),
        vp.row(enemy.rect.center_y() - 5.0),
        "•",
        C_FACE,
    )
}

fn draw_player<W: Write>(out: &mut W, player: &Player, vp: Viewport) -> std::io::Result<()> {
    let body = if player.invincible % 10 < 5 {
        match player.tint {
            Tint::Red => C_PLAYER_RED,
            Tint::Yellow => C_PLAYER_YELLOW,
        }
    } else {
        C_PLAYER_BLINK
    };
    let rect = &player.rect;

    fill(out, vp, rect, '█', body)?;

    // Hat: one row above the body, a little wider
    let hat = Rect::new(rect.left() - 5.0, rect.top() - 10.0, rect.w + 10.0, 1.0);
    fill(out, vp, &hat, '▄', body)?;

    let face_x = rect.center_x()
        + match player.facing {
            Facing::Right => 10.0,
            Facing::Left => -10.0,
        };
    put_field(
        out,
        vp,
        vp.col(face_x),
        vp.row(rect.center_y() - 5.0),
        "o",
        C_FACE,
    )
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, vp: Viewport) -> std::io::Result<()> {
    let left = format!(
        "Score: {}  Coins: {}  Lives: {}",
        state.score, state.player.collected_coins, state.player.lives
    );
    put(out, vp, 1, 0, &left, C_HUD)?;

    let level = format!("Level: {}", state.level);
    let col = vp.cols as i32 - level.chars().count() as i32 - 1;
    if col > left.chars().count() as i32 + 2 {
        put(out, vp, col, 0, &level, C_HUD)?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, vp: Viewport) -> std::io::Result<()> {
    put(
        out,
        vp,
        1,
        vp.rows as i32 - 1,
        "← → / A D : Move   SPACE / ↑ : Jump   R : Restart   ESC / Q : Quit",
        C_HINT,
    )
}

// ── End-of-level overlay ──────────────────────────────────────────────────────

fn draw_banner<W: Write>(
    out: &mut W,
    vp: Viewport,
    title: (&str, Color),
    score_line: &str,
    hint: &str,
) -> std::io::Result<()> {
    let (title, title_color) = title;
    let inner = title.chars().count() + 8;
    let top = format!("╔{}╗", "═".repeat(inner));
    let middle = format!("║{:^width$}║", title, width = inner);
    let bottom = format!("╚{}╝", "═".repeat(inner));

    let lines: [(&str, Color); 5] = [
        (top.as_str(), title_color),
        (middle.as_str(), title_color),
        (bottom.as_str(), title_color),
        (score_line, Color::White),
        (hint, Color::White),
    ];

    let cx = vp.cols as i32 / 2;
    let start_row = vp.rows as i32 / 2 - lines.len() as i32 / 2;

    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = (cx - msg.chars().count() as i32 / 2).max(0);
        put(out, vp, col, start_row + i as i32, msg, *color)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use platformer::compute::init_state;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rendered(state: &GameState, vp: Viewport) -> String {
        let mut buf = Vec::new();
        render(&mut buf, state, vp).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn ground_fills_last_playfield_row() {
        let vp = Viewport::new(100, 30);
        let ground = Rect::new(0.0, 650.0, 1000.0, 50.0);
        let (col0, _, col1, row1) = vp.cells(&ground);
        assert_eq!(col0, 0);
        assert_eq!(col1, 99);
        assert_eq!(row1, 28); // rows 1..=28 are the playfield
    }

    #[test]
    fn tiny_rect_still_covers_one_cell() {
        let vp = Viewport::new(40, 16);
        let (col0, row0, col1, row1) = vp.cells(&Rect::new(500.0, 350.0, 1.0, 1.0));
        assert_eq!((col0, row0), (col1, row1));
    }

    #[test]
    fn hud_shows_score_coins_and_lives() {
        let mut state = init_state(&mut StdRng::seed_from_u64(7));
        state.score = 300;
        state.player.collected_coins = 4;
        let out = rendered(&state, Viewport::new(120, 40));
        assert!(out.contains("Score: 300  Coins: 4  Lives: 3"));
        assert!(out.contains("Level: 1"));
        assert!(!out.contains("GAME OVER"));
    }

    #[test]
    fn overlays_follow_status() {
        let mut state = init_state(&mut StdRng::seed_from_u64(7));
        state.status = GameStatus::GameOver;
        let out = rendered(&state, Viewport::new(120, 40));
        assert!(out.contains("GAME OVER"));
        assert!(out.contains("Press R to restart"));

        state.status = GameStatus::LevelComplete;
        let out = rendered(&state, Viewport::new(120, 40));
        assert!(out.contains("LEVEL COMPLETE!"));
        assert!(out.contains("Press R for next level"));
    }

    #[test]
    fn renders_into_minimum_terminal() {
        let state = init_state(&mut StdRng::seed_from_u64(1));
        let out = rendered(&state, Viewport::new(MIN_COLS, MIN_ROWS));
        assert!(out.contains("Score: 0"));
    }
}
