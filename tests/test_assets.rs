use std::fs;

use space_battle::assets::{load_sprite, placeholder, Art, Sprite, ENEMY_FILE, SHIP_FILE};

// ── Sprite parsing ────────────────────────────────────────────────────────────

#[test]
fn parse_pads_ragged_rows_to_common_width() {
    let s = Sprite::parse("ab\ncdef\ng").unwrap();
    assert_eq!(s.width(), 4);
    assert_eq!(s.height(), 3);
    assert_eq!(s.rows[0], "ab  ");
    assert_eq!(s.rows[2], "g   ");
}

#[test]
fn parse_drops_trailing_blank_lines() {
    let s = Sprite::parse("x\n\n\n").unwrap();
    assert_eq!(s.height(), 1);
    assert_eq!(s.rows[0], "x");
}

#[test]
fn parse_strips_trailing_whitespace_before_padding() {
    let s = Sprite::parse("ab   \ncd").unwrap();
    assert_eq!(s.width(), 2);
}

#[test]
fn parse_rejects_blank_art() {
    assert!(Sprite::parse("").is_none());
    assert!(Sprite::parse("   \n \n\t").is_none());
}

// ── Placeholder generation ────────────────────────────────────────────────────

#[test]
fn placeholder_is_a_solid_block() {
    let p = placeholder(5, 3);
    assert_eq!(p.width(), 5);
    assert_eq!(p.height(), 3);
    for row in &p.rows {
        assert_eq!(row, &"█".repeat(5));
    }
}

// ── File loading ──────────────────────────────────────────────────────────────

#[test]
fn load_sprite_missing_file_is_none() {
    assert!(load_sprite("no/such/directory/art.txt").is_none());
}

#[test]
fn load_sprite_reads_art_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("art.txt");
    fs::write(&path, "<=>\n | ").unwrap();
    let s = load_sprite(&path).unwrap();
    assert_eq!(s.width(), 3);
    assert_eq!(s.height(), 2);
}

#[test]
fn load_sprite_blank_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("art.txt");
    fs::write(&path, "\n\n  \n").unwrap();
    assert!(load_sprite(&path).is_none());
}

// ── Art resolution with fallback ──────────────────────────────────────────────

#[test]
fn art_falls_back_to_placeholders_when_directory_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let art = Art::load_from(dir.path());

    // Ship and enemy resolve to generated solid blocks; no backdrop
    assert_eq!(art.ship, placeholder(art.ship.width(), art.ship.height()));
    assert_eq!(art.enemy, placeholder(art.enemy.width(), art.enemy.height()));
    assert!(art.ship.height() > 0);
    assert!(art.enemy.height() > 0);
    assert!(art.background.is_none());
}

#[test]
fn art_prefers_files_when_present() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(SHIP_FILE), " ^\n/_\\").unwrap();
    fs::write(dir.path().join(ENEMY_FILE), "[oo]").unwrap();
    let art = Art::load_from(dir.path());

    assert_eq!(art.ship.height(), 2);
    assert_eq!(art.enemy.rows[0], "[oo]");
    assert!(art.background.is_none());
}

#[test]
fn art_mixes_files_and_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(SHIP_FILE), "A").unwrap();
    let art = Art::load_from(dir.path());

    assert_eq!(art.ship.rows[0], "A");
    // Enemy art is missing → solid block substitute
    assert_eq!(art.enemy, placeholder(art.enemy.width(), art.enemy.height()));
}
