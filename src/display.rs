//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only projects the
//! virtual playfield onto the terminal grid and queues draw commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use space_battle::assets::{Art, Sprite};
use space_battle::entities::{Bullet, BulletOwner, Enemy, GameState, BULLET_H, BULLET_W};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_SCORE: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_BULLET_PLAYER: Color = Color::Cyan;
const C_BULLET_ENEMY: Color = Color::Magenta;
const C_BACKGROUND: Color = Color::DarkBlue;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame: background, player, projectiles, enemies,
/// score overlay.
pub fn render<W: Write>(out: &mut W, state: &GameState, art: &Art) -> std::io::Result<()> {
    let term = terminal::size()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    if let Some(bg) = &art.background {
        draw_background(out, bg, term)?;
    }

    draw_player(out, state, &art.ship, term)?;
    for bullet in &state.bullets {
        draw_bullet(out, state, bullet, term)?;
    }
    for enemy in &state.enemies {
        draw_enemy(out, state, enemy, &art.enemy, term)?;
    }
    draw_hud(out, state)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, term.1.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Projection ────────────────────────────────────────────────────────────────

/// Map a playfield point onto the terminal grid.  The result can be
/// off-grid; the draw helpers clip.
fn project(state: &GameState, term: (u16, u16), x: f32, y: f32) -> (i32, i32) {
    let (tw, th) = term;
    (
        (x / state.width * tw as f32) as i32,
        (y / state.height * th as f32) as i32,
    )
}

/// Draw a sprite centred on a terminal cell, skipping rows that would fall
/// outside the grid.
fn draw_sprite<W: Write>(
    out: &mut W,
    sprite: &Sprite,
    cx: i32,
    cy: i32,
    term: (u16, u16),
) -> std::io::Result<()> {
    let (tw, th) = term;
    let left = cx - sprite.width() as i32 / 2;
    let top = cy - sprite.height() as i32 / 2;
    if left < 0 || left + sprite.width() as i32 > tw as i32 {
        return Ok(());
    }
    for (i, row) in sprite.rows.iter().enumerate() {
        let ry = top + i as i32;
        if ry < 0 || ry >= th as i32 {
            continue;
        }
        out.queue(cursor::MoveTo(left as u16, ry as u16))?;
        out.queue(Print(row))?;
    }
    Ok(())
}

// ── Background ────────────────────────────────────────────────────────────────

fn draw_background<W: Write>(out: &mut W, bg: &Sprite, term: (u16, u16)) -> std::io::Result<()> {
    let (tw, th) = term;
    out.queue(style::SetForegroundColor(C_BACKGROUND))?;
    for (i, row) in bg.rows.iter().enumerate() {
        if i as u16 >= th {
            break;
        }
        let visible: String = row.chars().take(tw as usize).collect();
        out.queue(cursor::MoveTo(0, i as u16))?;
        out.queue(Print(visible))?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(
    out: &mut W,
    state: &GameState,
    ship: &Sprite,
    term: (u16, u16),
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    let (cx, cy) = project(state, term, state.player.x, state.player.y);
    draw_sprite(out, ship, cx, cy, term)
}

fn draw_enemy<W: Write>(
    out: &mut W,
    state: &GameState,
    enemy: &Enemy,
    sprite: &Sprite,
    term: (u16, u16),
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_ENEMY))?;
    let (cx, cy) = project(state, term, enemy.x, enemy.y);
    draw_sprite(out, sprite, cx, cy, term)
}

fn draw_bullet<W: Write>(
    out: &mut W,
    state: &GameState,
    bullet: &Bullet,
    term: (u16, u16),
) -> std::io::Result<()> {
    let (cx, cy) = project(
        state,
        term,
        bullet.x + BULLET_W / 2.0,
        bullet.y + BULLET_H / 2.0,
    );
    let (tw, th) = term;
    if cx < 0 || cx >= tw as i32 || cy < 0 || cy >= th as i32 {
        return Ok(());
    }
    out.queue(cursor::MoveTo(cx as u16, cy as u16))?;
    match bullet.owner {
        BulletOwner::Player => {
            out.queue(style::SetForegroundColor(C_BULLET_PLAYER))?;
            out.queue(Print("║"))?;
        }
        BulletOwner::Enemy => {
            out.queue(style::SetForegroundColor(C_BULLET_ENEMY))?;
            out.queue(Print("↓"))?;
        }
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {}", state.score)))?;
    Ok(())
}
