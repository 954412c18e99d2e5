pub mod entities;
pub mod profile;
