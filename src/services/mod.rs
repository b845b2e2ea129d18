pub mod cart_service;
pub mod checkout_service;
pub mod item_service;
