pub mod health;
pub mod home;

pub use health::health_handler;
pub use home::home_handler;
