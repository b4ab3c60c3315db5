use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{DEFAULT_REASON, guild_only_message};
use warden_core::{Context, Error};
use warden_ledger::impls::afk::set_afk;
use warden_ledger::model::afk::AfkRecord;
use warden_utils::COMMAND_PREFIX;
use warden_utils::embed::{MUTED_COLOR, SUCCESS_COLOR, field_embed};
use warden_utils::formatting::format_time_away;

pub const META: CommandMeta = CommandMeta {
    name: "afk",
    desc: "Set AFK status.",
    category: "utility",
    usage: "!afk [reason]",
};

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn afk(
    ctx: Context<'_>,
    #[description = "Reason for being AFK"]
    #[rest]
    reason: Option<String>,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let reason = reason.unwrap_or_else(|| DEFAULT_REASON.to_owned());
    let record = set_afk(
        &ctx.data().ledger,
        guild_id.get(),
        ctx.author().id.get(),
        &reason,
    );

    let embed = field_embed(
        "💤 AFK Status Set",
        MUTED_COLOR,
        [
            ("User", format!("<@{}>", ctx.author().id.get())),
            ("Reason", record.reason),
        ],
    )
    .footer(serenity::CreateEmbedFooter::new(
        "You will be marked as back when you send a message!",
    ));

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Whether a message is itself a prefix `afk` invocation. Such a message
/// must not count as the member coming back.
pub fn is_afk_invocation(content: &str) -> bool {
    let Some(rest) = content.trim_start().strip_prefix(COMMAND_PREFIX) else {
        return false;
    };
    let Some(after) = rest.trim_start().strip_prefix(META.name) else {
        return false;
    };

    after.chars().next().is_none_or(char::is_whitespace)
}

/// Posted when an AFK member speaks again.
pub fn welcome_back_embed(record: &AfkRecord, now_unix_secs: u64) -> serenity::CreateEmbed {
    field_embed(
        "👋 Welcome Back!",
        SUCCESS_COLOR,
        [("Time Away", format_time_away(record.away_secs(now_unix_secs)))],
    )
}

/// Posted when someone mentions a member who is AFK.
pub fn afk_notice_embed(
    user_id: u64,
    record: &AfkRecord,
    now_unix_secs: u64,
) -> serenity::CreateEmbed {
    field_embed(
        "💤 User is AFK",
        MUTED_COLOR,
        [
            ("User", format!("<@{}>", user_id)),
            ("Reason", record.reason.clone()),
            ("Time Away", format_time_away(record.away_secs(now_unix_secs))),
        ],
    )
}
