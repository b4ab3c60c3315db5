pub mod afk;
pub mod warnings;
