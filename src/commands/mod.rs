pub mod events;
pub mod export;
pub mod profile;
