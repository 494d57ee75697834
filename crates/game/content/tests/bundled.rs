//! The sample level shipped in `data/` must load and be winnable.

use game_content::ContentFactory;
use game_core::{FireOutcome, ItemHandle, PickupOutcome, WorldItemId};

#[test]
fn bundled_level_loads() {
    let engine = ContentFactory::bundled().build_engine().unwrap();

    assert_eq!(engine.catalog().len(), 7);
    assert_eq!(engine.world().len(), 8);
    // three generics plus one for weapons
    assert_eq!(engine.progress().total(), 4);
}

#[test]
fn bundled_level_is_winnable() {
    let mut engine = ContentFactory::bundled().build_engine().unwrap();

    for id in [0, 1, 2, 3] {
        assert_eq!(engine.request_pickup(WorldItemId(id)), Ok(PickupOutcome::Success));
    }
    assert!(engine.progress().has_won());

    engine.request_pickup(WorldItemId(5)).unwrap();
    assert_eq!(engine.inventory().count_of(ItemHandle(100)), 12);
    assert_eq!(engine.request_fire(), FireOutcome::Fired);
    assert_eq!(engine.current_ammo(), 11);
}

#[test]
fn data_dir_can_be_copied_and_edited() {
    let dir = tempfile::TempDir::new().unwrap();
    for file in ["items.ron", "world.ron", "config.toml"] {
        std::fs::copy(ContentFactory::bundled_data_dir().join(file), dir.path().join(file))
            .unwrap();
    }
    std::fs::write(dir.path().join("config.toml"), "max_unique_items = 2\n").unwrap();

    let mut engine = ContentFactory::new(dir.path()).build_engine().unwrap();

    assert_eq!(engine.request_pickup(WorldItemId(0)), Ok(PickupOutcome::Success));
    assert_eq!(engine.request_pickup(WorldItemId(1)), Ok(PickupOutcome::Success));
    assert_eq!(engine.request_pickup(WorldItemId(2)), Ok(PickupOutcome::InventoryFull));
}

#[test]
fn weapon_bound_to_missing_ammo_fails_to_load() {
    let dir = tempfile::TempDir::new().unwrap();
    let items = std::fs::read_to_string(ContentFactory::bundled_data_dir().join("items.ron"))
        .unwrap()
        .replace("ammo: ItemHandle(101)", "ammo: ItemHandle(404)");
    std::fs::write(dir.path().join("items.ron"), items).unwrap();

    let err = ContentFactory::new(dir.path()).load_items().unwrap_err();

    assert!(format!("{err:#}").contains("#404"));
}
