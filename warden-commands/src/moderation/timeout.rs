use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{
    DEFAULT_REASON, action_failure_message, guild_only_message, is_missing_permissions_error,
    moderation_action_embed, moderation_self_action_message, require_permission, say_ephemeral,
    usage_message,
};
use warden_core::{Context, Error};
use warden_utils::embed::MUTED_COLOR;
use warden_utils::validate::timeout_minutes;

pub const META: CommandMeta = CommandMeta {
    name: "timeout",
    desc: "Timeout a member for a number of minutes.",
    category: "moderation",
    usage: "!timeout <user> <minutes> [reason]",
};

#[poise::command(prefix_command, slash_command, category = "Moderation")]
pub async fn timeout(
    ctx: Context<'_>,
    #[description = "The member to timeout"] user: Option<serenity::User>,
    #[description = "Duration in minutes"] duration: Option<i64>,
    #[description = "Reason for timeout"]
    #[rest]
    reason: Option<String>,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    if !require_permission(
        ctx,
        guild_id,
        serenity::Permissions::MODERATE_MEMBERS,
        "timeout members",
    )
    .await?
    {
        return Ok(());
    }

    let (Some(user), Some(duration)) = (user, duration) else {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    };

    let minutes = match timeout_minutes(duration) {
        Ok(minutes) => minutes,
        Err(invalid) => {
            say_ephemeral(ctx, format!("❌ {invalid}")).await?;
            return Ok(());
        }
    };

    if user.id == ctx.author().id {
        ctx.say(moderation_self_action_message("timeout")).await?;
        return Ok(());
    }

    let until_system_time = SystemTime::now()
        .checked_add(Duration::from_secs(minutes * 60))
        .unwrap_or(SystemTime::now());
    let until_unix = until_system_time
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_secs()) as i64;
    let until = serenity::Timestamp::from_unix_timestamp(until_unix)?;

    let reason = reason.unwrap_or_else(|| DEFAULT_REASON.to_owned());
    let edit = serenity::EditMember::new()
        .disable_communication_until_datetime(until)
        .audit_log_reason(&reason);

    if let Err(source) = guild_id.edit_member(ctx.http(), user.id, edit).await {
        if !is_missing_permissions_error(&source) {
            error!(?source, "timeout request failed");
        }
        say_ephemeral(ctx, action_failure_message(&source, "timeout this member")).await?;
        return Ok(());
    }

    let embed = moderation_action_embed(
        "Member Timed Out",
        MUTED_COLOR,
        &user,
        ctx.author().id,
        vec![("Duration", format!("{} minutes", minutes))],
        &reason,
    );
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
