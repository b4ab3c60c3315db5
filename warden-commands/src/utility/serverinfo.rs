use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::guild_only_message;
use warden_core::{Context, Error};
use warden_utils::embed::DEFAULT_EMBED_COLOR;

pub const META: CommandMeta = CommandMeta {
    name: "serverinfo",
    desc: "Get server information.",
    category: "information",
    usage: "!serverinfo",
};

#[poise::command(prefix_command, slash_command, category = "Information")]
pub async fn serverinfo(ctx: Context<'_>) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let guild = guild_id.to_partial_guild_with_counts(ctx.http()).await?;
    let channels = guild_id.channels(ctx.http()).await?;

    let members = guild
        .approximate_member_count
        .map_or_else(|| "Unknown".to_owned(), |count| count.to_string());

    let mut embed = serenity::CreateEmbed::new()
        .title(format!("Server Info - {}", guild.name))
        .color(DEFAULT_EMBED_COLOR)
        .field("Owner", format!("<@{}>", guild.owner_id.get()), true)
        .field("Members", members, true)
        .field(
            "Created",
            format!("<t:{}:D>", guild_id.created_at().unix_timestamp()),
            true,
        )
        .field("Channels", channels.len().to_string(), true)
        .field("Roles", guild.roles.len().to_string(), true)
        .field(
            "Boost Level",
            u8::from(guild.premium_tier).to_string(),
            true,
        );

    if let Some(icon_url) = guild.icon_url() {
        embed = embed.thumbnail(icon_url);
    }

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
