//! Seed Data
//!
//! Fixed default datasets used when a snapshot key is absent or unreadable.
//! Each collection falls back independently (a missing product snapshot does
//! not reseed categories or the store config).

use chrono::{DateTime, Utc};

use super::models::{
    CartItem, Category, Order, OrderStatus, Product, SocialLinks, StoreInfo, WholesaleTier,
};

/// Default store configuration
pub fn store_info() -> StoreInfo {
    StoreInfo {
        id: "1".to_string(),
        name: "Delícia de Bolos".to_string(),
        slug: "delicia-de-bolos".to_string(),
        banner: None,
        theme_color: "#D43F6D".to_string(),
        delivery_info: Some("Entrega Grátis acima de R$ 50".to_string()),
        phone: Some("(11) 99999-9999".to_string()),
        social_links: Some(SocialLinks {
            instagram: Some("@deliciadebolossabor".to_string()),
            facebook: None,
            whatsapp: Some("5511999999999".to_string()),
        }),
    }
}

/// Default categories; `todos` is the storefront's "all products" tab
pub fn categories() -> Vec<Category> {
    [
        ("1", "Todos", "todos"),
        ("2", "Bolos", "bolos"),
        ("3", "Docinhos", "docinhos"),
        ("4", "Tortas", "tortas"),
        ("5", "Salgados", "salgados"),
        ("6", "Bebidas", "bebidas"),
    ]
    .into_iter()
    .map(|(id, name, slug)| Category {
        id: id.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
    })
    .collect()
}

/// Default product catalog
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Bolo de Chocolate Premium".to_string(),
            description: "Delicioso bolo de chocolate com cobertura de ganache e morangos frescos"
                .to_string(),
            price: 4500,
            image: "/assets/product-1.jpg".to_string(),
            category: "bolos".to_string(),
            preparation_time: "2-3 dias".to_string(),
            stock: 5,
            is_promo: true,
            promo_text: Some("Promo 20%".to_string()),
            wholesale_tiers: vec![
                WholesaleTier {
                    min_quantity: 3,
                    price: 4000,
                },
                WholesaleTier {
                    min_quantity: 5,
                    price: 3800,
                },
            ],
        },
        Product {
            id: "2".to_string(),
            name: "Macarons Sortidos".to_string(),
            description: "Caixa com 12 macarons de sabores variados: baunilha, chocolate, morango"
                .to_string(),
            price: 2800,
            image: "/assets/product-2.jpg".to_string(),
            category: "docinhos".to_string(),
            preparation_time: "1-2 dias".to_string(),
            stock: 8,
            is_promo: false,
            promo_text: None,
            wholesale_tiers: Vec::new(),
        },
        Product {
            id: "3".to_string(),
            name: "Torta de Morango".to_string(),
            description: "Torta cremosa com morangos frescos e chantilly, massa amanteigada"
                .to_string(),
            price: 3200,
            image: "/assets/product-3.jpg".to_string(),
            category: "tortas".to_string(),
            preparation_time: "10 minutos".to_string(),
            stock: 3,
            is_promo: true,
            promo_text: Some("Entrega Rápida".to_string()),
            wholesale_tiers: Vec::new(),
        },
        Product {
            id: "4".to_string(),
            name: "Brigadeiros Gourmet".to_string(),
            description: "Brigadeiros artesanais com cobertura de chocolate belga".to_string(),
            price: 1800,
            image: "/assets/product-1.jpg".to_string(),
            category: "docinhos".to_string(),
            preparation_time: "1 dia".to_string(),
            stock: 12,
            is_promo: false,
            promo_text: None,
            wholesale_tiers: Vec::new(),
        },
        Product {
            id: "5".to_string(),
            name: "Bolo Red Velvet".to_string(),
            description: "Clássico bolo red velvet com cream cheese e frutas vermelhas".to_string(),
            price: 5500,
            image: "/assets/product-2.jpg".to_string(),
            category: "bolos".to_string(),
            preparation_time: "2-3 dias".to_string(),
            stock: 2,
            is_promo: true,
            promo_text: Some("Limitado".to_string()),
            wholesale_tiers: Vec::new(),
        },
        Product {
            id: "6".to_string(),
            name: "Cheesecake de Frutas".to_string(),
            description: "Cheesecake cremoso com calda de frutas vermelhas".to_string(),
            price: 3800,
            image: "/assets/product-3.jpg".to_string(),
            category: "tortas".to_string(),
            preparation_time: "1-2 dias".to_string(),
            stock: 6,
            is_promo: false,
            promo_text: None,
            wholesale_tiers: Vec::new(),
        },
    ]
}

/// Default orders shown on the dashboard
pub fn orders() -> Vec<Order> {
    let catalog = products();
    vec![
        Order {
            id: "1".to_string(),
            customer_name: "Maria Silva".to_string(),
            phone: "(11) 98765-4321".to_string(),
            address: Some("Rua das Flores, 123 - Centro".to_string()),
            items: vec![
                CartItem {
                    product: catalog[0].clone(),
                    quantity: 1,
                },
                CartItem {
                    product: catalog[1].clone(),
                    quantity: 2,
                },
            ],
            subtotal: 10100,
            status: OrderStatus::Pending,
            created_at: ts("2024-01-15T10:30:00Z"),
            observations: Some("Entregar até 18h".to_string()),
        },
        Order {
            id: "2".to_string(),
            customer_name: "João Santos".to_string(),
            phone: "(11) 99887-6655".to_string(),
            address: None,
            items: vec![CartItem {
                product: catalog[2].clone(),
                quantity: 1,
            }],
            subtotal: 3200,
            status: OrderStatus::Ready,
            created_at: ts("2024-01-15T14:20:00Z"),
            observations: None,
        },
    ]
}

// Fixed literals above always parse; a bad one yields the epoch instead of
// panicking.
fn ts(rfc3339: &str) -> DateTime<Utc> {
    rfc3339.parse().unwrap_or_default()
}
