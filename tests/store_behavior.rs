// Tests for inventory and shopping list store behavior.
use chrono::{Duration, Utc};
use frigo::context::TestContext;
use frigo::model::{Category, FoodItem, Unit};
use frigo::store::{InventoryFilter, InventoryStore, ShoppingList};

fn item(name: &str, category: Category) -> FoodItem {
    FoodItem::new(
        name,
        category,
        Utc::now() + Duration::days(7),
        1.0,
        Unit::Pcs,
    )
}

#[test]
fn test_add_and_remove_item() {
    let ctx = TestContext::new();
    let mut inventory = InventoryStore::new();

    let milk = item("Milk", Category::Dairy);
    let milk_id = milk.id.clone();
    inventory.add_item(&ctx, milk);
    inventory.add_item(&ctx, item("Apples", Category::Fruits));
    assert_eq!(inventory.items.len(), 2);

    let removed = inventory.remove_item(&ctx, &milk_id).unwrap();
    assert_eq!(removed.name, "Milk");
    assert_eq!(inventory.items.len(), 1);
    assert!(inventory.get(&milk_id).is_none());

    // Removing an unknown id is a no-op.
    assert!(inventory.remove_item(&ctx, "no-such-id").is_none());
    assert_eq!(inventory.items.len(), 1);
}

#[test]
fn test_filter_by_search_and_category() {
    let ctx = TestContext::new();
    let mut inventory = InventoryStore::new();
    inventory.add_item(&ctx, item("Whole Milk", Category::Dairy));
    inventory.add_item(&ctx, item("Oat Milk", Category::Beverages));
    inventory.add_item(&ctx, item("Apples", Category::Fruits));

    let by_search = inventory.filter(InventoryFilter {
        search_term: "milk",
        category: None,
    });
    assert_eq!(by_search.len(), 2);

    let by_both = inventory.filter(InventoryFilter {
        search_term: "milk",
        category: Some(Category::Dairy),
    });
    assert_eq!(by_both.len(), 1);
    assert_eq!(by_both[0].name, "Whole Milk");

    let all = inventory.filter(InventoryFilter {
        search_term: "",
        category: None,
    });
    assert_eq!(all.len(), 3);
}

#[test]
fn test_shopping_toggle_targets_one_item() {
    let ctx = TestContext::new();
    let mut list = ShoppingList::new();

    let bread = list.add_item(&ctx, "Bread").unwrap();
    let eggs = list.add_item(&ctx, "Eggs").unwrap();

    let toggled = list.toggle_item(&ctx, &bread.id).unwrap();
    assert!(toggled.completed);

    // Only the targeted entry flipped.
    assert!(list.items.iter().find(|i| i.id == bread.id).unwrap().completed);
    assert!(!list.items.iter().find(|i| i.id == eggs.id).unwrap().completed);

    // Toggling again flips it back.
    let untoggled = list.toggle_item(&ctx, &bread.id).unwrap();
    assert!(!untoggled.completed);
}

#[test]
fn test_shopping_blank_names_rejected() {
    let ctx = TestContext::new();
    let mut list = ShoppingList::new();

    assert!(list.add_item(&ctx, "").is_none());
    assert!(list.add_item(&ctx, "   ").is_none());
    assert!(list.items.is_empty());

    // Names are trimmed on the way in.
    let item = list.add_item(&ctx, "  Butter ").unwrap();
    assert_eq!(item.name, "Butter");
}

#[test]
fn test_clear_completed_counts_and_keeps_rest() {
    let ctx = TestContext::new();
    let mut list = ShoppingList::new();

    let a = list.add_item(&ctx, "Milk").unwrap();
    list.add_item(&ctx, "Eggs").unwrap();
    let c = list.add_item(&ctx, "Bread").unwrap();

    list.toggle_item(&ctx, &a.id);
    list.toggle_item(&ctx, &c.id);

    let removed = list.clear_completed(&ctx);
    assert_eq!(removed, 2);
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].name, "Eggs");

    // Nothing completed left; a second clear removes nothing.
    assert_eq!(list.clear_completed(&ctx), 0);
}
