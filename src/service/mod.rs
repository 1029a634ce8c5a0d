pub mod mapper;
pub mod preload;
