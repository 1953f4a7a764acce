// food_app/src/services/mod.rs

//! Cart operations composed from single store calls.

pub mod cart_service;
