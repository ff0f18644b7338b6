use toolshop_core::Item;

/// Records every fresh seeded store starts with (ids 1 and 2).
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new(1, "Martillo", 19.99)
            .with_description("Herramienta para clavar mucho")
            .with_offer(true),
        Item::new(2, "Destornillador", 9.99)
            .with_description("Herramienta para tornillos")
            .with_offer(false),
    ]
}
