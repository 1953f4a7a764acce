// food_app/src/models/mod.rs

//! Contains data structures representing database rows and API payloads.

pub mod cart;
pub mod cart_item;
pub mod product;

// Re-export the model structs for convenient access
pub use cart::CartView;
pub use cart_item::{AddToCartRequest, CartLine};
pub use product::Product;
