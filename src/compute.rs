//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (plus the frame delta and, where needed, an RNG handle) and
//! returns a brand-new `GameState`.  Side effects are limited to the
//! injected RNG, so a seeded RNG makes every run reproducible.

use rand::Rng;

use crate::entities::{
    Bullet, BulletOwner, Enemy, GameState, GameStatus, Player, BULLET_H, BULLET_W, ENEMY_H,
    PLAYER_H, PLAYER_W,
};

// ── Playfield & tuning constants ──────────────────────────────────────────────

/// Virtual playfield size.  All simulation math happens in this space; the
/// display layer scales it onto whatever terminal it finds.
pub const PLAY_WIDTH: f32 = 800.0;
pub const PLAY_HEIGHT: f32 = 600.0;

/// Horizontal player speed, units/second.
pub const PLAYER_SPEED: f32 = 300.0;
/// Player-bullet speed, units/second (upward).
pub const PLAYER_BULLET_SPEED: f32 = 500.0;
/// Enemy-bullet speed, units/second (downward).
pub const ENEMY_BULLET_SPEED: f32 = 300.0;
/// Horizontal formation speed, units/second.
pub const ENEMY_SPEED: f32 = 200.0;
/// Vertical drop applied to the whole formation on edge contact.
pub const DROP_DISTANCE: f32 = 30.0;
/// Min seconds between player shots.
pub const SHOOT_COOLDOWN: f32 = 0.2;
/// Seconds between enemy shots.
pub const ENEMY_SHOOT_COOLDOWN: f32 = 1.0;
/// Score awarded per enemy destroyed.
pub const KILL_SCORE: u32 = 10;

// Enemy grid layout.
const GRID_ROWS: usize = 3;
const GRID_COLS: usize = 8;
const GRID_START_X: f32 = 100.0;
const GRID_START_Y: f32 = 50.0;
const GRID_COL_STEP: f32 = 60.0;
const GRID_ROW_STEP: f32 = 50.0;

/// Vertical gap between the player's centre and the playfield bottom.
const PLAYER_BOTTOM_MARGIN: f32 = 40.0;

// ── Constructors ──────────────────────────────────────────────────────────────

/// Build the initial game state for a playfield of the given size: the
/// player bottom-centre, the full enemy grid marching right, score zero.
pub fn init_state(width: f32, height: f32) -> GameState {
    let mut enemies = Vec::with_capacity(GRID_ROWS * GRID_COLS);
    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            enemies.push(Enemy {
                x: GRID_START_X + col as f32 * GRID_COL_STEP,
                y: GRID_START_Y + row as f32 * GRID_ROW_STEP,
            });
        }
    }
    GameState {
        player: Player {
            x: width / 2.0,
            y: height - PLAYER_BOTTOM_MARGIN,
        },
        enemies,
        bullets: Vec::new(),
        moving_right: true,
        shoot_timer: 0.0,
        enemy_shoot_timer: 0.0,
        score: 0,
        status: GameStatus::Playing,
        width,
        height,
    }
}

// ── Input-driven state transitions (pure) ─────────────────────────────────────

/// Step the player left by `PLAYER_SPEED * dt`, clamped so the ship stays
/// inside the playfield.  Callers apply this every frame the key is held.
pub fn move_player_left(state: &GameState, dt: f32) -> GameState {
    let new_x = (state.player.x - PLAYER_SPEED * dt).max(PLAYER_W / 2.0);
    GameState {
        player: Player {
            x: new_x,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// Mirror of `move_player_left`.
pub fn move_player_right(state: &GameState, dt: f32) -> GameState {
    let new_x = (state.player.x + PLAYER_SPEED * dt).min(state.width - PLAYER_W / 2.0);
    GameState {
        player: Player {
            x: new_x,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// Fire a bullet from the ship's nose — a no-op until `SHOOT_COOLDOWN`
/// seconds have passed since the previous shot.
pub fn player_shoot(state: &GameState) -> GameState {
    if state.shoot_timer < SHOOT_COOLDOWN {
        return state.clone();
    }
    let new_bullet = Bullet {
        x: state.player.x - BULLET_W / 2.0,
        y: state.player.y - PLAYER_H / 2.0 - BULLET_H,
        owner: BulletOwner::Player,
    };
    let mut bullets = state.bullets.clone();
    bullets.push(new_bullet);
    GameState {
        bullets,
        shoot_timer: 0.0,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ────────────────────────────

/// Advance the simulation by `dt` seconds.
///
/// Phase order: projectile movement, formation march, enemy fire, then the
/// two collision passes.  Entities removed in an earlier phase are gone
/// before the later phases run.
pub fn tick(state: &GameState, dt: f32, rng: &mut impl Rng) -> GameState {
    let shoot_timer = state.shoot_timer + dt;
    let enemy_shoot_timer = state.enemy_shoot_timer + dt;

    // ── 1. Move bullets along their fixed axis, cull off-screen ones ─────────
    let bullets: Vec<Bullet> = state
        .bullets
        .iter()
        .filter_map(|b| {
            let new_y = match b.owner {
                BulletOwner::Player => b.y - PLAYER_BULLET_SPEED * dt,
                BulletOwner::Enemy => b.y + ENEMY_BULLET_SPEED * dt,
            };
            let moved = Bullet {
                y: new_y,
                ..b.clone()
            };
            // Gone once the whole box has left the screen on its moving side
            let off = match moved.owner {
                BulletOwner::Player => moved.bounds().bottom() < 0.0,
                BulletOwner::Enemy => moved.y > state.height,
            };
            if off {
                None
            } else {
                Some(moved)
            }
        })
        .collect();

    // ── 2. March the formation; reverse and drop on edge contact ─────────────
    let dx = ENEMY_SPEED * dt * if state.moving_right { 1.0 } else { -1.0 };
    let mut enemies: Vec<Enemy> = state
        .enemies
        .iter()
        .map(|e| Enemy {
            x: e.x + dx,
            ..e.clone()
        })
        .collect();
    let at_edge = enemies
        .iter()
        .any(|e| e.bounds().x <= 0.0 || e.bounds().right() >= state.width);
    let moving_right = if at_edge {
        !state.moving_right
    } else {
        state.moving_right
    };
    if at_edge {
        // One formation-wide reaction, however many enemies crossed
        for e in &mut enemies {
            e.y += DROP_DISTANCE;
        }
    }

    // ── 3. Enemy fire: a random enemy shoots on the cooldown ─────────────────
    let mut bullets = bullets;
    let enemy_shoot_timer = if enemy_shoot_timer >= ENEMY_SHOOT_COOLDOWN && !enemies.is_empty() {
        let shooter = &enemies[rng.gen_range(0..enemies.len())];
        bullets.push(Bullet {
            x: shooter.x - BULLET_W / 2.0,
            y: shooter.y + ENEMY_H / 2.0,
            owner: BulletOwner::Enemy,
        });
        0.0
    } else {
        enemy_shoot_timer
    };

    // ── 4. Collision: player bullets ↔ enemies ───────────────────────────────
    // Collect doomed indices during the scan, remove after it.  A bullet
    // claims at most one enemy, and a claimed enemy can't be claimed again.
    let mut killed_enemies: Vec<usize> = Vec::new();
    let mut used_bullets: Vec<usize> = Vec::new();

    for (bi, bullet) in bullets.iter().enumerate() {
        if bullet.owner != BulletOwner::Player {
            continue;
        }
        for (ei, enemy) in enemies.iter().enumerate() {
            if !killed_enemies.contains(&ei) && bullet.bounds().intersects(&enemy.bounds()) {
                killed_enemies.push(ei);
                used_bullets.push(bi);
                break;
            }
        }
    }

    let score = state.score + killed_enemies.len() as u32 * KILL_SCORE;

    let enemies: Vec<Enemy> = enemies
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !killed_enemies.contains(i))
        .map(|(_, e)| e)
        .collect();

    let bullets: Vec<Bullet> = bullets
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !used_bullets.contains(i))
        .map(|(_, b)| b)
        .collect();

    // ── 5. Collision: enemy bullets ↔ player ─────────────────────────────────
    let player_box = state.player.bounds();
    let player_hit = bullets
        .iter()
        .any(|b| b.owner == BulletOwner::Enemy && b.bounds().intersects(&player_box));
    let status = if player_hit {
        GameStatus::GameOver
    } else {
        state.status.clone()
    };

    GameState {
        enemies,
        bullets,
        moving_right,
        shoot_timer,
        enemy_shoot_timer,
        score,
        status,
        ..state.clone()
    }
}
