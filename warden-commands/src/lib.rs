pub mod moderation;
pub mod utility;

use warden_core::{Data, Error};

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    moderation::kick::META,
    moderation::ban::META,
    moderation::warn::META,
    moderation::timeout::META,
    moderation::clear::META,
    moderation::warnings::META,
    moderation::lock::META,
    moderation::unlock::META,
    utility::serverinfo::META,
    utility::userinfo::META,
    utility::stats::META,
    utility::afk::META,
    utility::scripts::META,
    utility::invite::META,
    utility::ping::META,
    utility::uptime::META,
    utility::help::META,
];

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        moderation::kick::kick(),
        moderation::ban::ban(),
        moderation::warn::warn(),
        moderation::timeout::timeout(),
        moderation::clear::clear(),
        moderation::warnings::warnings(),
        moderation::lock::lock(),
        moderation::unlock::unlock(),
        utility::serverinfo::serverinfo(),
        utility::userinfo::userinfo(),
        utility::stats::stats(),
        utility::afk::afk(),
        utility::scripts::search_scripts(),
        utility::invite::invite(),
        utility::ping::ping(),
        utility::uptime::uptime(),
        utility::help::help(),
    ]
}
