use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use warden_core::{Context, Error};
use warden_utils::formatting::latency_status;

pub const META: CommandMeta = CommandMeta {
    name: "ping",
    desc: "Check bot latency.",
    category: "utility",
    usage: "!ping",
};

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    let latency_ms = ctx.ping().await.as_millis();
    let status = latency_status(latency_ms);

    let embed = serenity::CreateEmbed::new()
        .title("🏓 Pong!")
        .color(status.color)
        .field("Bot Latency", format!("{}ms", latency_ms), true)
        .field("Status", status.label, true)
        .footer(serenity::CreateEmbedFooter::new(
            "Response time to Discord API",
        ));

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
