use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use warden_core::{Context, Error};
use warden_utils::embed::SUCCESS_COLOR;
use warden_utils::formatting::format_uptime;

pub const META: CommandMeta = CommandMeta {
    name: "uptime",
    desc: "Check bot uptime.",
    category: "utility",
    usage: "!uptime",
};

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn uptime(ctx: Context<'_>) -> Result<(), Error> {
    let started = ctx.data().started;

    let embed = serenity::CreateEmbed::new()
        .title("⏰ Bot Uptime")
        .color(SUCCESS_COLOR)
        .field("Current Uptime", format_uptime(started.uptime_secs()), false)
        .field(
            "Started At",
            format!("<t:{}:F>", started.unix_secs()),
            false,
        )
        .field("Status", "🟢 Online & Running", false)
        .footer(serenity::CreateEmbedFooter::new(
            "Bot has been running continuously",
        ));

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
