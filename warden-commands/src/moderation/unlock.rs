use crate::CommandMeta;
use crate::moderation::lock::set_channel_lock;
use warden_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "unlock",
    desc: "Unlock this channel.",
    category: "channels",
    usage: "!unlock [reason]",
};

#[poise::command(prefix_command, slash_command, category = "Channels")]
pub async fn unlock(
    ctx: Context<'_>,
    #[description = "Reason for unlocking the channel"]
    #[rest]
    reason: Option<String>,
) -> Result<(), Error> {
    set_channel_lock(ctx, reason, false).await
}
