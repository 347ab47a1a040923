// End-to-end checks of the public game loop on the host.
// No browser APIs are touched; these run under plain `cargo test`.

use role_drop::Settings;
use role_drop::sim::{
    Catalog, CatalogEntry, Game, GameEvent, GamePhase, Outcome, Role, Service, TickInput,
    Viewport,
};

fn phone(seed: u64, catalog: Catalog) -> Game {
    Game::new(
        seed,
        Viewport::new(1080.0, 1920.0, 1.0),
        Settings::default().tuning,
        catalog,
    )
}

// A cumulative drag far past the edge pins the icon flush with the screen edge
#[test]
fn drag_clamps_at_max_offset() {
    let mut game = phone(1, Catalog::default());
    for _ in 0..100 {
        game.drag(100.0);
    }
    assert_eq!(game.icon().offset().x, 490.0);

    game.drag(-10_000.0);
    assert_eq!(game.icon().offset().x, -490.0);
}

// At density 2 the icon is 200px, leaving 440px of travel each way
#[test]
fn drag_clamp_follows_icon_size() {
    let mut game = Game::new(
        1,
        Viewport::new(1080.0, 1920.0, 2.0),
        Settings::default().tuning,
        Catalog::default(),
    );
    game.drag(10_000.0);
    assert_eq!(game.icon().offset().x, 440.0);
}

// Full cycle: fall to the bottom, show the outcome, drop a fresh icon
#[test]
fn miss_then_resume_cycle() {
    let mut game = phone(2, Catalog::default());
    let first = game.state().active_service();

    let events = game.advance(9_100, &TickInput::default());
    assert_eq!(
        events,
        vec![GameEvent::Landed(Outcome::Missed { service: first })]
    );
    assert_eq!(game.state().phase(), GamePhase::Resolved);
    assert_eq!(game.state().score(), 0);

    assert!(game.advance(2_999, &TickInput::default()).is_empty());
    let events = game.advance(1, &TickInput::default());
    let [GameEvent::Spawned(next)] = events.as_slice() else {
        panic!("expected a spawn, got {:?}", events);
    };
    assert_eq!(game.state().active_service(), *next);
    assert_eq!(game.state().phase(), GamePhase::Falling);
    assert!(game.state().popup_message().is_empty());
}

// With only one mapped service, every other service can only score wrong
#[test]
fn unmapped_services_lose_points() {
    let catalog = Catalog::new(vec![CatalogEntry {
        service: Service::Playground,
        role: Role::Child,
        explanation: "Children play here".to_string(),
    }]);
    let mut game = phone(3, catalog);

    let mut unmapped_wrong = 0;
    for _ in 0..10 {
        // Pin left so the icon lands on the infant zone
        game.drag(-10_000.0);
        let service = game.state().active_service();
        // Lands at 4100ms, next icon drops at 7100ms
        let events = game.advance(7_100, &TickInput::default());
        let Some(GameEvent::Landed(outcome)) = events.first() else {
            panic!("no landing in {:?}", events);
        };
        assert_eq!(outcome.service(), service);
        if service != Service::Playground {
            assert!(matches!(outcome, Outcome::Wrong { expected: None, landed: Role::Infant, .. }));
            unmapped_wrong += 1;
        }
    }
    assert_eq!(game.stats().wrong, 10);
    assert!(unmapped_wrong > 0);
    assert_eq!(game.state().score(), -10);
}

// The autopilot demo never misses with the default catalog
#[test]
fn autopilot_plays_a_clean_game() {
    let mut game = phone(4, Catalog::default());
    let input = TickInput {
        drag_dx: 0.0,
        autopilot: true,
    };
    while game.stats().rounds() < 20 {
        game.advance(16, &input);
    }
    let stats = game.stats();
    assert_eq!(stats.correct, 20);
    assert_eq!(stats.wrong + stats.missed, 0);
}

// Settings JSON flows through to the loop timing
#[test]
fn settings_tuning_drives_timing() {
    let settings = Settings::from_json(
        r#"{"tuning": {"tick_ms": 50, "fall_step_px": 40, "resolve_delay_ms": 1000}}"#,
    )
    .unwrap();
    let mut game = Game::new(
        5,
        Viewport::new(1080.0, 1920.0, 1.0),
        settings.tuning.clone(),
        settings.catalog(),
    );
    // ceil(1820 / 40) = 46 ticks of 50ms
    assert!(game.advance(2_299, &TickInput::default()).is_empty());
    assert_eq!(game.advance(1, &TickInput::default()).len(), 1);
    assert!(game.advance(999, &TickInput::default()).is_empty());
    assert_eq!(game.advance(1, &TickInput::default()).len(), 1);
    assert_eq!(game.state().phase(), GamePhase::Falling);
}
