use platformer::compute::new_player;
use platformer::entities::*;

#[test]
fn rect_edges_and_centre() {
    let r = Rect::new(10.0, 20.0, 40.0, 60.0);
    assert_eq!(r.left(), 10.0);
    assert_eq!(r.right(), 50.0);
    assert_eq!(r.top(), 20.0);
    assert_eq!(r.bottom(), 80.0);
    assert_eq!(r.center_x(), 30.0);
    assert_eq!(r.center_y(), 50.0);
}

#[test]
fn rect_setters_keep_size() {
    let mut r = Rect::new(0.0, 0.0, 40.0, 60.0);
    r.set_bottom(650.0);
    assert_eq!(r.y, 590.0);
    r.set_right(1000.0);
    assert_eq!(r.x, 960.0);
    r.set_top(5.0);
    r.set_left(7.0);
    assert_eq!(r, Rect::new(7.0, 5.0, 40.0, 60.0));
}

#[test]
fn overlap_is_strict() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(a.overlaps(&Rect::new(9.0, 9.0, 10.0, 10.0)));
    // Shared edges do not count
    assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    // Neither do empty rectangles
    assert!(!a.overlaps(&Rect::new(5.0, 5.0, 0.0, 3.0)));
}

#[test]
fn overlap_is_symmetric() {
    let a = Rect::new(0.0, 0.0, 40.0, 60.0);
    let b = Rect::new(30.0, 50.0, 35.0, 35.0);
    assert_eq!(a.overlaps(&b), b.overlaps(&a));
}

#[test]
fn enum_equality() {
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::GameOver, GameStatus::LevelComplete);
    assert_ne!(PowerUpKind::Star, PowerUpKind::Mushroom);
    assert_ne!(Surface::Grass, Surface::Brick);
    assert_ne!(Facing::Left, Facing::Right);
}

#[test]
fn player_invincibility_flag() {
    let mut player = new_player();
    assert!(!player.is_invincible());
    player.invincible = 1;
    assert!(player.is_invincible());
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        player: new_player(),
        platforms: Vec::new(),
        enemies: Vec::new(),
        coins: vec![Coin {
            rect: Rect::new(50.0, 50.0, 20.0, 20.0),
            phase: 0.0,
        }],
        power_ups: Vec::new(),
        score: 0,
        level: 1,
        status: GameStatus::Playing,
        frame: 0,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.rect.x = 99.0;
    cloned.score = 999;
    cloned.coins.clear();
    cloned.enemies.push(Enemy {
        rect: Rect::new(5.0, 5.0, 35.0, 35.0),
        vx: 2.0,
    });

    assert_eq!(original.player.rect.x, 100.0);
    assert_eq!(original.score, 0);
    assert_eq!(original.coins.len(), 1);
    assert!(original.enemies.is_empty());
}

#[test]
fn finished_states() {
    let mut state = GameState {
        player: new_player(),
        platforms: Vec::new(),
        enemies: Vec::new(),
        coins: Vec::new(),
        power_ups: Vec::new(),
        score: 0,
        level: 1,
        status: GameStatus::Playing,
        frame: 0,
    };
    assert!(!state.is_finished());
    state.status = GameStatus::GameOver;
    assert!(state.is_finished());
    state.status = GameStatus::LevelComplete;
    assert!(state.is_finished());
}
