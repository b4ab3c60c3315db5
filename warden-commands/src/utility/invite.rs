use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use warden_core::{Context, Error};
use warden_utils::embed::DEFAULT_EMBED_COLOR;
use warden_utils::permissions::{invite_permissions, invite_url};

pub const META: CommandMeta = CommandMeta {
    name: "invite",
    desc: "Get the bot invite link.",
    category: "utility",
    usage: "!invite",
};

const PERMISSIONS_NEEDED: &str = "• Kick Members\n• Ban Members\n• Manage Messages\n• Manage Channels\n• Moderate Members\n• Send Messages & Embeds";

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn invite(ctx: Context<'_>) -> Result<(), Error> {
    let url = invite_url(ctx.framework().bot_id, invite_permissions());

    let embed = serenity::CreateEmbed::new()
        .title("🤖 Invite Bot")
        .color(DEFAULT_EMBED_COLOR)
        .field(
            "Invite Link",
            format!("[Click here to invite me!]({})", url),
            false,
        )
        .field("Permissions Needed", PERMISSIONS_NEEDED, false)
        .footer(serenity::CreateEmbedFooter::new(
            "Thank you for using our bot!",
        ));

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
