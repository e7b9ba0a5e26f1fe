//! The fixed product lineup shown on the products page.

pub const CUSTOM_QUOTE: &str = "Custom Quote";

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=200&width=300";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub image_url: &'static str,
}

impl Product {
    pub fn has_fixed_price(&self) -> bool {
        self.price != CUSTOM_QUOTE
    }
}

pub static PRODUCTS: [Product; 3] = [
    Product {
        title: "Minimalist Desk Lamp",
        description: "A sleek, adjustable desk lamp with touch controls and multiple light temperatures.",
        price: "$89.99",
        image_url: PLACEHOLDER_IMAGE,
    },
    Product {
        title: "Geometric Bookshelf",
        description: "Modern geometric bookshelf with an asymmetrical design that creates visual interest.",
        price: "$249.99",
        image_url: PLACEHOLDER_IMAGE,
    },
    Product {
        title: "Living Space Concept",
        description: "A holistic approach to living spaces that combines functionality, aesthetics, and sustainability.",
        price: CUSTOM_QUOTE,
        image_url: PLACEHOLDER_IMAGE,
    },
];

pub fn products() -> &'static [Product] {
    &PRODUCTS
}
