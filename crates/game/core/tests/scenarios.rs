//! Session-level scenarios driven through the public engine API.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use game_core::{
    DropOutcome, FireOutcome, GameConfig, GameEngine, GameEvent, Hint, InventoryStore,
    ItemCatalog, ItemDefinition, ItemHandle, PickupOutcome, Position, Presence, WorldItemId,
    WorldPlacement,
};

const KEYCARD: ItemHandle = ItemHandle(1);
const DATAPAD: ItemHandle = ItemHandle(2);
const FUSE: ItemHandle = ItemHandle(3);
const PISTOL: ItemHandle = ItemHandle(10);
const RIFLE: ItemHandle = ItemHandle(11);
const NINE_MM: ItemHandle = ItemHandle(100);
const RIFLE_ROUNDS: ItemHandle = ItemHandle(101);

fn catalog() -> ItemCatalog {
    ItemCatalog::new([
        ItemDefinition::generic(KEYCARD, "Keycard"),
        ItemDefinition::generic(DATAPAD, "Datapad"),
        ItemDefinition::generic(FUSE, "Fuse"),
        ItemDefinition::weapon(PISTOL, "Pistol", NINE_MM),
        ItemDefinition::weapon(RIFLE, "Rifle", RIFLE_ROUNDS),
        ItemDefinition::ammo(NINE_MM, "9mm Rounds", 50),
        ItemDefinition::ammo(RIFLE_ROUNDS, "Rifle Rounds", 1),
    ])
    .expect("catalog is valid")
}

fn session(items: &[ItemHandle]) -> GameEngine {
    let mut world = WorldPlacement::new();
    for (index, item) in items.iter().enumerate() {
        world.spawn(*item, Position::new(index as f32, 0.0, 0.0));
    }
    GameEngine::new(catalog(), world, GameConfig::default()).expect("engine builds")
}

/// Three generics, two weapons and one ammo pack.
fn standard_level() -> GameEngine {
    session(&[KEYCARD, DATAPAD, FUSE, PISTOL, RIFLE, NINE_MM])
}

#[test]
fn weapons_collapse_and_ammo_is_excluded_from_the_goal() {
    let mut engine = standard_level();
    assert_eq!(engine.progress().total(), 4);

    let wins = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&wins);
    engine.subscribe(move |event| {
        if matches!(event, GameEvent::WinConditionMet { .. }) {
            *counter.borrow_mut() += 1;
        }
    });

    for id in 0..3 {
        assert_eq!(engine.request_pickup(WorldItemId(id)), Ok(PickupOutcome::Success));
        assert!(!engine.progress().has_won());
    }
    assert_eq!(engine.request_pickup(WorldItemId(3)), Ok(PickupOutcome::Success));
    assert_eq!(engine.progress().collected(), 4);
    assert!(engine.progress().has_won());
    assert_eq!(engine.progress().progress_string(), "(4/4)");

    assert_eq!(engine.request_pickup(WorldItemId(5)), Ok(PickupOutcome::Success));
    assert_eq!(engine.progress().collected(), 4);
    assert_eq!(engine.current_ammo(), 50);
    assert_eq!(*wins.borrow(), 1);
}

#[test]
fn win_is_not_announced_again_after_drop_and_pickup() {
    let mut engine = session(&[KEYCARD, DATAPAD]);
    let recorder = engine.events_mut().record();

    engine.request_pickup(WorldItemId(0)).unwrap();
    engine.request_pickup(WorldItemId(1)).unwrap();
    assert_eq!(engine.request_drop(Some(DATAPAD)), Ok(DropOutcome::Success));
    assert_eq!(engine.progress().collected(), 1);

    // the dropped datapad is a fresh instance
    assert_eq!(engine.request_pickup(WorldItemId(2)), Ok(PickupOutcome::Success));
    assert_eq!(engine.progress().collected(), 2);

    let wins = recorder
        .take()
        .iter()
        .filter(|event| matches!(event, GameEvent::WinConditionMet { .. }))
        .count();
    assert_eq!(wins, 1);
}

#[test]
fn second_weapon_is_refused_while_one_is_held() {
    let mut engine = standard_level();
    let recorder = engine.events_mut().record();

    assert_eq!(engine.request_pickup(WorldItemId(3)), Ok(PickupOutcome::Success));
    assert_eq!(
        engine.request_pickup(WorldItemId(4)),
        Ok(PickupOutcome::WeaponAlreadyHeld)
    );

    assert!(engine.equipment().is_equipped(PISTOL));
    assert!(!engine.inventory().has_id(RIFLE));
    assert!(engine.world().is_interactable(WorldItemId(4)));
    assert_eq!(engine.progress().collected(), 1);
    assert_eq!(
        recorder.take().last(),
        Some(&GameEvent::PickupFailed {
            world: WorldItemId(4),
            reason: PickupOutcome::WeaponAlreadyHeld
        })
    );
}

#[test]
fn firing_consumes_ammo_and_empties_the_stack() {
    let mut engine = session(&[RIFLE, RIFLE_ROUNDS]);
    engine.request_pickup(WorldItemId(0)).unwrap();

    assert_eq!(engine.request_fire(), FireOutcome::NoAmmo);
    assert!(!engine.inventory().has_id(RIFLE_ROUNDS));

    engine.request_pickup(WorldItemId(1)).unwrap();
    assert_eq!(engine.current_ammo(), 1);
    assert_eq!(engine.request_fire(), FireOutcome::Fired);
    assert_eq!(engine.current_ammo(), 0);
    assert!(!engine.inventory().has_id(RIFLE_ROUNDS));
    assert_eq!(engine.inventory().stackable_type_count(), 0);
}

#[test]
fn delayed_hint_is_superseded_by_newer_requests() {
    let mut engine = session(&[PISTOL, NINE_MM]);
    let delay = engine.config().hint_delay();

    engine.request_pickup(WorldItemId(0)).unwrap();
    assert!(engine.hint_pending());
    engine.advance(delay / 2);
    assert_eq!(engine.hint(), Hint::Hidden);

    // the ammo pickup restarts the countdown
    engine.request_pickup(WorldItemId(1)).unwrap();
    engine.advance(delay / 2);
    assert_eq!(engine.hint(), Hint::Hidden);
    engine.advance(delay / 2);
    assert_eq!(engine.hint(), Hint::PressFire);
    assert!(!engine.hint_pending());
}

#[test]
fn zero_delay_request_cancels_pending_evaluation() {
    let mut engine = session(&[PISTOL, NINE_MM]);
    let delay = engine.config().hint_delay();

    engine.request_pickup(WorldItemId(1)).unwrap();
    engine.request_pickup(WorldItemId(0)).unwrap();
    assert!(engine.hint_pending());

    assert_eq!(engine.request_fire(), FireOutcome::Fired);
    assert!(!engine.hint_pending());
    assert_eq!(engine.hint(), Hint::Hidden);

    engine.advance(delay * 2);
    assert_eq!(engine.hint(), Hint::Hidden);
}

#[test]
fn ammo_without_a_gun_suggests_finding_one() {
    let mut engine = session(&[PISTOL, NINE_MM]);
    engine.request_pickup(WorldItemId(1)).unwrap();
    engine.advance(Duration::from_secs(5));
    assert_eq!(engine.hint(), Hint::PickGunToUseAmmo);

    engine.request_pickup(WorldItemId(0)).unwrap();
    engine.advance(Duration::from_secs(5));
    assert_eq!(engine.hint(), Hint::PressFire);

    // dropping the gun re-evaluates immediately
    assert_eq!(engine.request_drop(Some(PISTOL)), Ok(DropOutcome::Success));
    assert_eq!(engine.hint(), Hint::PickGunToUseAmmo);
}

#[test]
fn dropped_weapon_returns_the_same_instance() {
    let mut engine = standard_level();
    engine.set_drop_origin(Position::new(0.0, 0.0, 0.0), Position::new(0.0, 0.0, 1.0));
    engine.request_pickup(WorldItemId(3)).unwrap();
    assert_eq!(
        engine.world().get(WorldItemId(3)).map(|i| i.presence),
        Some(Presence::Held)
    );

    assert_eq!(engine.request_drop(Some(PISTOL)), Ok(DropOutcome::Success));

    let instance = engine.world().get(WorldItemId(3)).expect("instance kept");
    assert_eq!(instance.presence, Presence::Present);
    assert_eq!(instance.position, Position::new(0.0, 0.0, 1.5));
    assert_eq!(engine.world().len(), 6);
    assert_eq!(engine.progress().collected(), 0);

    // a different weapon can now be equipped
    assert_eq!(engine.request_pickup(WorldItemId(4)), Ok(PickupOutcome::Success));
    assert!(engine.equipment().is_equipped(RIFLE));
}

#[test]
fn ammo_cannot_be_dropped() {
    let mut engine = standard_level();
    engine.request_pickup(WorldItemId(5)).unwrap();

    assert_eq!(
        engine.request_drop(Some(NINE_MM)),
        Ok(DropOutcome::AmmoNotDroppable)
    );
    assert_eq!(engine.inventory().count_of(NINE_MM), 50);
}

#[test]
fn capacity_is_never_exceeded() {
    let mut world = WorldPlacement::new();
    for item in [KEYCARD, DATAPAD, FUSE, PISTOL] {
        world.spawn(item, Position::ORIGIN);
    }
    let config = GameConfig::default().with_max_unique_items(2);
    let mut engine = GameEngine::new(catalog(), world, config).unwrap();

    let outcomes: Vec<_> = (0..4)
        .map(|id| engine.request_pickup(WorldItemId(id)).unwrap())
        .collect();
    assert_eq!(
        outcomes,
        vec![
            PickupOutcome::Success,
            PickupOutcome::Success,
            PickupOutcome::InventoryFull,
            PickupOutcome::InventoryFull,
        ]
    );
    assert_eq!(engine.inventory().unique_count(), 2);
    assert!(!engine.equipment().has_weapon());
}

#[test]
fn stack_counts_track_adds_and_removes() {
    let ammo = catalog().get(NINE_MM).cloned().unwrap();
    let mut inventory = InventoryStore::new(4);

    let mut expected: u32 = 0;
    for (add, remove) in [(5, 2), (1, 4), (10, 3), (0, 7)] {
        if add > 0 {
            expected += add;
            assert_eq!(inventory.try_add(&ammo, add), Ok(expected));
        }
        match inventory.try_remove(&ammo, remove) {
            Ok(left) => {
                expected -= remove;
                assert_eq!(left, expected);
            }
            Err(_) => assert!(remove > expected),
        }
        assert_eq!(inventory.count(&ammo), expected);
        assert_eq!(inventory.has_id(NINE_MM), expected > 0);
    }
}
