//! Sprite art loading.
//!
//! Art lives in plain text files under `assets/`, referenced by fixed
//! relative paths.  A missing or unusable file is never fatal: the ship and
//! enemy fall back to generated solid-block placeholders, the background is
//! simply not drawn.  The game stays playable with no asset files at all.

use std::fs;
use std::path::Path;

/// Directory the default art set is resolved from.
pub const ASSET_DIR: &str = "assets";

pub const SHIP_FILE: &str = "ship.txt";
pub const ENEMY_FILE: &str = "enemy.txt";
pub const BACKGROUND_FILE: &str = "background.txt";

// Placeholder block dimensions, in terminal cells.
const SHIP_PLACEHOLDER: (u16, u16) = (5, 3);
const ENEMY_PLACEHOLDER: (u16, u16) = (5, 2);

// ── Sprites ───────────────────────────────────────────────────────────────────

/// A rectangular block of text rows.  Rows are padded to a common width at
/// parse time, so `width()` holds for every row.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub rows: Vec<String>,
}

impl Sprite {
    /// Parse art text.  Trailing whitespace is stripped, trailing blank
    /// lines dropped, and the remaining rows padded to the widest one.
    /// Art with no visible characters is rejected.
    pub fn parse(text: &str) -> Option<Sprite> {
        let mut rows: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
        while rows.last().map_or(false, |r| r.is_empty()) {
            rows.pop();
        }
        if rows.iter().all(|r| r.trim().is_empty()) {
            return None;
        }
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        for row in &mut rows {
            let pad = width - row.chars().count();
            row.extend(std::iter::repeat(' ').take(pad));
        }
        Some(Sprite { rows })
    }

    pub fn width(&self) -> u16 {
        self.rows.first().map_or(0, |r| r.chars().count() as u16)
    }

    pub fn height(&self) -> u16 {
        self.rows.len() as u16
    }
}

/// Generate a solid block sprite — the placeholder substituted for missing
/// art so the game never launches without a visible ship or enemy.
pub fn placeholder(w: u16, h: u16) -> Sprite {
    Sprite {
        rows: vec!["█".repeat(w as usize); h as usize],
    }
}

/// Load a sprite from an art file.  `None` on any failure — unreadable
/// file, blank art — so callers can substitute a placeholder.
pub fn load_sprite(path: impl AsRef<Path>) -> Option<Sprite> {
    let text = fs::read_to_string(path).ok()?;
    Sprite::parse(&text)
}

// ── The full art set ──────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Art {
    pub ship: Sprite,
    pub enemy: Sprite,
    /// Optional backdrop; `None` → plain cleared background.
    pub background: Option<Sprite>,
}

impl Art {
    /// Resolve the art set from `assets/` in the working directory.
    pub fn load() -> Art {
        Self::load_from(Path::new(ASSET_DIR))
    }

    /// Resolve the art set from an arbitrary directory, substituting
    /// placeholders for whatever is missing.
    pub fn load_from(dir: &Path) -> Art {
        let (sw, sh) = SHIP_PLACEHOLDER;
        let (ew, eh) = ENEMY_PLACEHOLDER;
        Art {
            ship: load_sprite(dir.join(SHIP_FILE)).unwrap_or_else(|| placeholder(sw, sh)),
            enemy: load_sprite(dir.join(ENEMY_FILE)).unwrap_or_else(|| placeholder(ew, eh)),
            background: load_sprite(dir.join(BACKGROUND_FILE)),
        }
    }
}
