pub mod afk;
pub mod help;
pub mod invite;
pub mod ping;
pub mod scripts;
pub mod serverinfo;
pub mod stats;
pub mod uptime;
pub mod userinfo;

pub(crate) mod embeds;
