use poise::serenity_prelude as serenity;

use crate::utility::embeds::grouped_help_fields;
use crate::{COMMANDS, CommandMeta};
use warden_core::{Context, Error};
use warden_utils::embed::DEFAULT_EMBED_COLOR;

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Show this help menu.",
    category: "utility",
    usage: "!help",
};

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    let embed = serenity::CreateEmbed::new()
        .title("🤖 Bot Commands")
        .description("Here are all available moderation commands:")
        .color(DEFAULT_EMBED_COLOR)
        .fields(
            grouped_help_fields(COMMANDS)
                .into_iter()
                .map(|(name, value)| (name, value, false)),
        )
        .footer(serenity::CreateEmbedFooter::new(
            "Use these commands responsibly!",
        ));

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
