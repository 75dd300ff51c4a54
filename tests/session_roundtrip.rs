// Tests for state surviving a simulated session restart: everything is
// persisted through the keyed store and reloaded into fresh store structs.
use chrono::{TimeZone, Utc};
use frigo::context::{AppContext, TestContext};
use frigo::model::{Category, FoodItem, Unit};
use frigo::settings::RefrigeratorSettings;
use frigo::storage::{KEY_FOOD_ITEMS, KEY_SETTINGS, LocalStore};
use frigo::store::{InventoryStore, ShoppingList};

#[test]
fn test_inventory_survives_restart_with_real_dates() {
    let ctx = TestContext::new();
    let expires = Utc.with_ymd_and_hms(2026, 8, 12, 23, 59, 59).unwrap();

    let mut inventory = InventoryStore::new();
    inventory.add_item(
        &ctx,
        FoodItem::new("Milk", Category::Dairy, expires, 1.0, Unit::L),
    );

    // "Restart": load a fresh store from the same context.
    let reloaded = InventoryStore::load(&ctx);

    assert_eq!(reloaded.items.len(), 1);
    let item = &reloaded.items[0];
    assert_eq!(item.name, "Milk");
    // The persisted RFC 3339 string came back as a real instant, not text.
    assert_eq!(item.expires, expires);
    assert_eq!(item.category, Category::Dairy);
}

#[test]
fn test_settings_replaced_wholesale() {
    let ctx = TestContext::new();

    let mut settings = RefrigeratorSettings::default();
    settings.set_fridge_temp(6);
    settings.toggle_quick_cool();
    LocalStore::save(&ctx, KEY_SETTINGS, &settings).unwrap();

    let reloaded: RefrigeratorSettings =
        LocalStore::load(&ctx, KEY_SETTINGS, RefrigeratorSettings::default());
    assert_eq!(reloaded, settings);

    // A later save replaces the whole struct; no field merging happens
    // beyond overwriting old with new.
    let mut updated = reloaded;
    updated.set_fridge_temp(2);
    LocalStore::save(&ctx, KEY_SETTINGS, &updated).unwrap();

    let last: RefrigeratorSettings =
        LocalStore::load(&ctx, KEY_SETTINGS, RefrigeratorSettings::default());
    assert_eq!(last.fridge_temp, 2);
    assert!(last.quick_cool);
}

#[test]
fn test_shopping_list_survives_restart() {
    let ctx = TestContext::new();

    let mut list = ShoppingList::new();
    let bread = list.add_item(&ctx, "Bread").unwrap();
    list.add_item(&ctx, "Eggs").unwrap();
    list.toggle_item(&ctx, &bread.id);

    let reloaded = ShoppingList::load(&ctx);
    assert_eq!(reloaded.items.len(), 2);
    assert!(reloaded.items[0].completed);
    assert!(!reloaded.items[1].completed);
}

#[test]
fn test_missing_files_fall_back_to_defaults() {
    let ctx = TestContext::new();

    assert!(InventoryStore::load(&ctx).items.is_empty());
    assert!(ShoppingList::load(&ctx).items.is_empty());
    let settings: RefrigeratorSettings =
        LocalStore::load(&ctx, KEY_SETTINGS, RefrigeratorSettings::default());
    assert_eq!(settings, RefrigeratorSettings::default());
}

#[test]
fn test_corrupt_inventory_yields_defaults_not_errors() {
    let ctx = TestContext::new();
    let path = LocalStore::get_path(&ctx, KEY_FOOD_ITEMS).unwrap();
    std::fs::write(&path, "definitely not json").unwrap();

    // A failed load is answered with the default, never an error.
    let inventory = InventoryStore::load(&ctx);
    assert!(inventory.items.is_empty());

    // The unreadable file must not be clobbered by a later save.
    assert!(LocalStore::save(&ctx, KEY_FOOD_ITEMS, &inventory.items).is_err());
    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert_eq!(on_disk, "definitely not json");
}

#[test]
fn test_keys_map_to_separate_files() {
    let ctx = TestContext::new();

    let mut inventory = InventoryStore::new();
    inventory.add_item(
        &ctx,
        FoodItem::new("Milk", Category::Dairy, Utc::now(), 1.0, Unit::L),
    );
    let mut list = ShoppingList::new();
    list.add_item(&ctx, "Bread").unwrap();

    let data_dir = ctx.get_data_dir().unwrap();
    assert!(data_dir.join("food-items.json").exists());
    assert!(data_dir.join("shopping-list.json").exists());
}
