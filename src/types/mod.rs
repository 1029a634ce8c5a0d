pub mod greeting;
pub mod hal;
