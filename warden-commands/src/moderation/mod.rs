pub mod ban;
pub mod clear;
pub mod kick;
pub mod lock;
pub mod timeout;
pub mod unlock;
pub mod warn;
pub mod warnings;

pub(crate) mod embeds;
