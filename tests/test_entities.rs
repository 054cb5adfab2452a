use space_battle::entities::*;

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rect_edges() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(r.right(), 40.0);
    assert_eq!(r.bottom(), 60.0);
}

#[test]
fn rect_overlap_intersects() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn rect_disjoint_does_not_intersect() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(20.0, 0.0, 10.0, 10.0);
    assert!(!a.intersects(&b));
}

#[test]
fn rect_touching_edges_do_not_intersect() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(10.0, 0.0, 10.0, 10.0); // shares the x=10 edge
    assert!(!a.intersects(&b));
    let c = Rect::new(0.0, 10.0, 10.0, 10.0); // shares the y=10 edge
    assert!(!a.intersects(&c));
}

#[test]
fn rect_containment_intersects() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
}

// ── Bounding boxes derived from positions ─────────────────────────────────────

#[test]
fn player_bounds_centred_on_position() {
    let p = Player { x: 400.0, y: 560.0 };
    let b = p.bounds();
    assert_eq!(b, Rect::new(400.0 - PLAYER_W / 2.0, 560.0 - PLAYER_H / 2.0, PLAYER_W, PLAYER_H));
}

#[test]
fn enemy_bounds_centred_on_position() {
    let e = Enemy { x: 100.0, y: 50.0 };
    let b = e.bounds();
    assert_eq!(b, Rect::new(100.0 - ENEMY_W / 2.0, 50.0 - ENEMY_H / 2.0, ENEMY_W, ENEMY_H));
}

#[test]
fn bullet_bounds_anchored_top_left() {
    let b = Bullet { x: 397.5, y: 529.0, owner: BulletOwner::Player };
    assert_eq!(b.bounds(), Rect::new(397.5, 529.0, BULLET_W, BULLET_H));
}

// ── Enums & cloning ───────────────────────────────────────────────────────────

#[test]
fn entity_clone_and_eq() {
    // Enums derive PartialEq — equality comparisons must work
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
    assert_eq!(BulletOwner::Player, BulletOwner::Player);
    assert_ne!(BulletOwner::Player, BulletOwner::Enemy);

    // Clone must produce an equal value
    let owner = BulletOwner::Enemy;
    assert_eq!(owner.clone(), BulletOwner::Enemy);
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        player: Player { x: 400.0, y: 560.0 },
        enemies: Vec::new(),
        bullets: Vec::new(),
        moving_right: true,
        shoot_timer: 0.0,
        enemy_shoot_timer: 0.0,
        score: 0,
        status: GameStatus::Playing,
        width: 800.0,
        height: 600.0,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99.0;
    cloned.score = 999;
    cloned.enemies.push(Enemy { x: 100.0, y: 50.0 });

    assert_eq!(original.player.x, 400.0);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
}
