pub mod greeting;
pub mod items;
