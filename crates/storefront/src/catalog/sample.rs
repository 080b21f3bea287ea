//! Built-in sample menu.

use rust_decimal::Decimal;
use sushi_shop_core::{CategoryId, CurrencyCode, ImageRef, Price, ProductId};

use super::{Category, DietaryFlags, NutritionalInfo, Product, ProductBadges};

fn category(id: &str, name: &str) -> Category {
    Category {
        id: CategoryId::new(id),
        name: name.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

const fn nutrition(calories: u32, protein: u32, carbs: u32, fat: u32) -> Option<NutritionalInfo> {
    Some(NutritionalInfo {
        calories: Some(calories),
        protein: Some(protein),
        carbs: Some(carbs),
        fat: Some(fat),
    })
}

#[allow(clippy::too_many_lines)]
pub(super) fn products() -> Vec<Product> {
    let usd = |cents| Price::from_cents(cents, CurrencyCode::USD);

    vec![
        Product {
            id: ProductId::new("1"),
            name: "Salmon Nigiri".to_string(),
            description: "Fresh salmon on a bed of seasoned rice. Served with wasabi and soy sauce."
                .to_string(),
            price: usd(1299),
            image: ImageRef::new("/images/hero-sushi.jpg"),
            category: category("sushi", "Sushi"),
            dietary: DietaryFlags::default(),
            badges: ProductBadges {
                popular: true,
                ..ProductBadges::default()
            },
            ingredients: strings(&["Salmon", "Sushi Rice", "Wasabi", "Soy Sauce"]),
            allergens: strings(&["Fish", "Soy"]),
            nutrition: nutrition(220, 12, 30, 6),
            rating: Some(Decimal::new(48, 1)),
            review_count: 124,
        },
        Product {
            id: ProductId::new("2"),
            name: "Tuna Sashimi".to_string(),
            description: "Premium cuts of raw bluefin tuna. A delicacy for sashimi lovers."
                .to_string(),
            price: usd(1850),
            image: ImageRef::new("/images/category-sashimi.jpg"),
            category: category("sashimi", "Sashimi"),
            dietary: DietaryFlags {
                gluten_free: true,
                ..DietaryFlags::default()
            },
            badges: ProductBadges {
                featured: true,
                ..ProductBadges::default()
            },
            ingredients: strings(&["Bluefin Tuna", "Daikon Radish", "Shiso Leaf", "Wasabi"]),
            allergens: strings(&["Fish"]),
            nutrition: nutrition(180, 32, 2, 5),
            rating: Some(Decimal::new(49, 1)),
            review_count: 87,
        },
        Product {
            id: ProductId::new("3"),
            name: "California Roll".to_string(),
            description:
                "Crab, avocado and cucumber wrapped in seaweed and rice. Perfect for beginners."
                    .to_string(),
            price: usd(999),
            image: ImageRef::new("/images/category-sushi.jpg"),
            category: category("maki", "Maki Rolls"),
            dietary: DietaryFlags::default(),
            badges: ProductBadges {
                popular: true,
                ..ProductBadges::default()
            },
            ingredients: strings(&[
                "Imitation Crab",
                "Avocado",
                "Cucumber",
                "Sushi Rice",
                "Nori",
                "Sesame Seeds",
            ]),
            allergens: strings(&["Shellfish", "Sesame"]),
            nutrition: nutrition(350, 9, 45, 14),
            rating: Some(Decimal::new(45, 1)),
            review_count: 246,
        },
        Product {
            id: ProductId::new("4"),
            name: "Vegetable Tempura".to_string(),
            description: "Assorted vegetables fried in a light, crispy batter. Served with tempura dipping sauce."
                .to_string(),
            price: usd(1099),
            image: ImageRef::new("/images/vegetable-tempura.jpg"),
            category: category("appetizers", "Appetizers"),
            dietary: DietaryFlags {
                vegetarian: true,
                ..DietaryFlags::default()
            },
            badges: ProductBadges::default(),
            ingredients: strings(&["Seasonal Vegetables", "Tempura Batter", "Dipping Sauce"]),
            allergens: strings(&["Wheat", "Soy"]),
            nutrition: nutrition(320, 5, 42, 16),
            rating: Some(Decimal::new(43, 1)),
            review_count: 78,
        },
        Product {
            id: ProductId::new("5"),
            name: "Spicy Tuna Roll".to_string(),
            description:
                "Diced tuna mixed with spicy mayo and cucumber, wrapped in seaweed and rice."
                    .to_string(),
            price: usd(1150),
            image: ImageRef::new("/images/spicy-tuna-roll.jpg"),
            category: category("maki", "Maki Rolls"),
            dietary: DietaryFlags {
                spicy: true,
                ..DietaryFlags::default()
            },
            badges: ProductBadges {
                popular: true,
                ..ProductBadges::default()
            },
            ingredients: strings(&[
                "Tuna",
                "Spicy Mayo",
                "Cucumber",
                "Sushi Rice",
                "Nori",
                "Togarashi",
            ]),
            allergens: strings(&["Fish", "Egg", "Soy"]),
            nutrition: nutrition(380, 15, 40, 18),
            rating: Some(Decimal::new(47, 1)),
            review_count: 156,
        },
        Product {
            id: ProductId::new("6"),
            name: "Dragon Roll".to_string(),
            description: "Eel and cucumber roll topped with avocado and eel sauce.".to_string(),
            price: usd(1499),
            image: ImageRef::new("/images/dragon-roll.jpg"),
            category: category("maki", "Maki Rolls"),
            dietary: DietaryFlags::default(),
            badges: ProductBadges {
                featured: true,
                ..ProductBadges::default()
            },
            ingredients: strings(&[
                "Eel",
                "Cucumber",
                "Avocado",
                "Sushi Rice",
                "Nori",
                "Eel Sauce",
            ]),
            allergens: strings(&["Fish", "Soy"]),
            nutrition: nutrition(410, 16, 50, 19),
            rating: Some(Decimal::new(46, 1)),
            review_count: 112,
        },
        Product {
            id: ProductId::new("7"),
            name: "Vegan Avocado Roll".to_string(),
            description: "Fresh avocado, cucumber and carrot wrapped in seaweed and rice."
                .to_string(),
            price: usd(899),
            image: ImageRef::new("/images/vegan-avocado-roll.jpg"),
            category: category("maki", "Maki Rolls"),
            dietary: DietaryFlags {
                vegetarian: true,
                gluten_free: true,
                spicy: false,
            },
            badges: ProductBadges {
                new: true,
                ..ProductBadges::default()
            },
            ingredients: strings(&["Avocado", "Cucumber", "Carrot", "Sushi Rice", "Nori"]),
            allergens: Vec::new(),
            nutrition: nutrition(280, 4, 40, 12),
            rating: Some(Decimal::new(42, 1)),
            review_count: 45,
        },
        Product {
            id: ProductId::new("8"),
            name: "Salmon Poke Bowl".to_string(),
            description:
                "Diced raw salmon, avocado, cucumber, edamame and carrots on a bed of sushi rice."
                    .to_string(),
            price: usd(1599),
            image: ImageRef::new("/images/salmon-poke-bowl.jpg"),
            category: category("bowls", "Poke Bowls"),
            dietary: DietaryFlags {
                gluten_free: true,
                ..DietaryFlags::default()
            },
            badges: ProductBadges {
                new: true,
                ..ProductBadges::default()
            },
            ingredients: strings(&[
                "Salmon",
                "Avocado",
                "Cucumber",
                "Edamame",
                "Carrots",
                "Sushi Rice",
                "Poke Sauce",
            ]),
            allergens: strings(&["Fish", "Soy"]),
            nutrition: nutrition(550, 28, 60, 22),
            rating: Some(Decimal::new(48, 1)),
            review_count: 67,
        },
    ]
}
