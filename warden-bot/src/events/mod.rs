pub mod afk;
pub mod interactions;
