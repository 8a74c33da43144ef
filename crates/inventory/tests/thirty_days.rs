//! Multi-day scenarios over the standard stock list.

use gildedrose_inventory::{
    AGED_BRIE, BACKSTAGE_PASSES, CONJURED, Inventory, Item, MAX_QUALITY, SULFURAS,
};

fn standard_stock() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(SULFURAS, -1, 80),
        Item::new(BACKSTAGE_PASSES, 15, 20),
        Item::new(BACKSTAGE_PASSES, 10, 49),
        Item::new(BACKSTAGE_PASSES, 5, 49),
        Item::new(CONJURED, 3, 6),
    ]
}

#[test]
fn one_day_of_standard_stock() {
    let mut inventory = Inventory::new(standard_stock());
    inventory.tick();

    assert_eq!(
        inventory.items(),
        &[
            Item::new("+5 Dexterity Vest", 9, 19),
            Item::new(AGED_BRIE, 1, 1),
            Item::new("Elixir of the Mongoose", 4, 6),
            Item::new(SULFURAS, 0, 80),
            Item::new(SULFURAS, -1, 80),
            Item::new(BACKSTAGE_PASSES, 14, 21),
            Item::new(BACKSTAGE_PASSES, 9, 50),
            Item::new(BACKSTAGE_PASSES, 4, 50),
            Item::new(CONJURED, 1, 4),
        ]
    );
}

#[test]
fn thirty_days_keep_invariants() {
    let mut inventory = Inventory::new(standard_stock());
    let initial = inventory.items().to_vec();

    for _ in 0..30 {
        let before = inventory.items().to_vec();
        inventory.tick();

        for (prev, item) in before.iter().zip(inventory.items()) {
            assert_eq!(prev.name, item.name);
            if item.name == SULFURAS {
                assert_eq!(item.quality, 80);
                assert_eq!(item.sell_in, prev.sell_in);
            } else {
                assert!((0..=MAX_QUALITY).contains(&item.quality), "{item}");
                assert!(item.sell_in < prev.sell_in, "{item}");
            }
        }
    }

    assert_eq!(inventory.day(), 30);
    assert_eq!(inventory.items().len(), initial.len());
}

#[test]
fn thirty_days_end_state() {
    let mut inventory = Inventory::new(standard_stock());
    inventory.advance(30);

    assert_eq!(
        inventory.into_items(),
        vec![
            Item::new("+5 Dexterity Vest", -20, 0),
            Item::new(AGED_BRIE, -28, 50),
            Item::new("Elixir of the Mongoose", -25, 0),
            Item::new(SULFURAS, 0, 80),
            Item::new(SULFURAS, -1, 80),
            Item::new(BACKSTAGE_PASSES, -15, 0),
            Item::new(BACKSTAGE_PASSES, -20, 0),
            Item::new(BACKSTAGE_PASSES, -25, 0),
            Item::new(CONJURED, -57, 0),
        ]
    );
}
