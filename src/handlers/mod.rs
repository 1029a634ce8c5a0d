pub mod greeting;
pub mod resources;
