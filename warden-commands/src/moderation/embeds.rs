use poise::serenity_prelude as serenity;

use warden_core::{Context, Error};
use warden_utils::embed::{WARNING_COLOR, field_embed};
use warden_utils::formatting::escape_mentions;
use warden_utils::permissions::has_user_permission;

pub const DEFAULT_REASON: &str = "No reason provided";

/// Embed announcing a moderation action: Member, Moderator, then any
/// extra fields, then Reason.
pub fn moderation_action_embed(
    title: &str,
    color: u32,
    target: &serenity::User,
    moderator_id: serenity::UserId,
    extra: Vec<(&str, String)>,
    reason: &str,
) -> serenity::CreateEmbed {
    let mut fields = vec![
        ("Member", format!("<@{}> ({})", target.id.get(), target.name)),
        ("Moderator", format!("<@{}>", moderator_id.get())),
    ];
    fields.extend(extra);
    fields.push(("Reason", escape_mentions(reason)));

    field_embed(title, color, fields)
}

pub fn warning_dm_embed(guild_name: &str, reason: &str) -> serenity::CreateEmbed {
    field_embed(
        "You've been warned",
        WARNING_COLOR,
        [
            ("Server", guild_name.to_owned()),
            ("Reason", escape_mentions(reason)),
        ],
    )
}

pub async fn send_warning_dm(
    http: &serenity::Http,
    target_user: &serenity::User,
    guild_id: serenity::GuildId,
    reason: &str,
) -> Result<(), serenity::Error> {
    let guild_name = match guild_id.to_partial_guild(http).await {
        Ok(guild) => guild.name,
        Err(_) => format!("Server {}", guild_id.get()),
    };

    let dm_channel = target_user.create_dm_channel(http).await?;
    dm_channel
        .send_message(
            http,
            serenity::CreateMessage::new().embed(warning_dm_embed(&guild_name, reason)),
        )
        .await?;

    Ok(())
}

pub fn usage_message(usage: &str) -> String {
    format!("Usage: `{usage}`")
}

pub fn guild_only_message() -> &'static str {
    "This command only works in servers."
}

pub fn permission_denied_message(action: &str) -> String {
    format!("❌ You don't have permission to {action}!")
}

pub fn moderation_self_action_message(action: &str) -> String {
    format!("You can't {action} yourself.")
}

/// Reply for a failed platform call: a permission hint when the bot was
/// refused, otherwise the error itself.
pub fn action_failure_message(source: &serenity::Error, action: &str) -> String {
    if is_missing_permissions_error(source) {
        format!("❌ I don't have permission to {action}!")
    } else {
        format!("❌ An error occurred: {source}")
    }
}

pub fn is_missing_permissions_error(source: &serenity::Error) -> bool {
    matches!(
        source,
        serenity::Error::Http(serenity::HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 403 || response.error.code == 50013
    )
}

pub async fn say_ephemeral(ctx: Context<'_>, content: impl Into<String>) -> Result<(), Error> {
    ctx.send(
        poise::CreateReply::default()
            .content(content)
            .ephemeral(true),
    )
    .await?;
    Ok(())
}

/// Check the invoker's guild permission, answering with a denial when it
/// is missing. Returns whether the command may proceed.
pub async fn require_permission(
    ctx: Context<'_>,
    guild_id: serenity::GuildId,
    required: serenity::Permissions,
    denied_action: &str,
) -> Result<bool, Error> {
    if has_user_permission(ctx.http(), guild_id, ctx.author().id, required).await? {
        return Ok(true);
    }

    say_ephemeral(ctx, permission_denied_message(denied_action)).await?;
    Ok(false)
}
