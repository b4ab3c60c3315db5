use poise::serenity_prelude as serenity;

use crate::moderation::embeds::guild_only_message;
use crate::{COMMANDS, CommandMeta};
use warden_core::{Context, Error};
use warden_ledger::impls::afk::guild_afk_count;
use warden_ledger::impls::warnings::guild_warning_total;
use warden_utils::embed::DEFAULT_EMBED_COLOR;

pub const META: CommandMeta = CommandMeta {
    name: "stats",
    desc: "Bot statistics.",
    category: "information",
    usage: "!stats",
};

#[poise::command(prefix_command, slash_command, category = "Information")]
pub async fn stats(ctx: Context<'_>) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let guild = guild_id.to_partial_guild_with_counts(ctx.http()).await?;
    let ledger = &ctx.data().ledger;
    let total_warnings = guild_warning_total(ledger, guild_id.get());
    let total_afk = guild_afk_count(ledger, guild_id.get());
    let latency_ms = ctx.ping().await.as_millis();

    let members = guild
        .approximate_member_count
        .map_or_else(|| "Unknown".to_owned(), |count| count.to_string());

    let mut embed = serenity::CreateEmbed::new()
        .title("📊 Bot Statistics")
        .color(DEFAULT_EMBED_COLOR)
        .field("Server", guild.name.clone(), false)
        .field("Total Members", members, true)
        .field("Bot Uptime", "Online ✅", true)
        .field("Commands Available", COMMANDS.len().to_string(), true)
        .field("Total Warnings Issued", total_warnings.to_string(), true)
        .field("Currently AFK Users", total_afk.to_string(), true)
        .field("Bot Latency", format!("{}ms", latency_ms), true)
        .footer(serenity::CreateEmbedFooter::new(format!(
            "Bot ID: {}",
            ctx.framework().bot_id.get()
        )));

    if let Some(icon_url) = guild.icon_url() {
        embed = embed.thumbnail(icon_url);
    }

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
