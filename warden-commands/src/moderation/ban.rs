use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{
    DEFAULT_REASON, action_failure_message, guild_only_message, is_missing_permissions_error,
    moderation_action_embed, moderation_self_action_message, require_permission, say_ephemeral,
    usage_message,
};
use warden_core::{Context, Error};
use warden_utils::embed::DANGER_COLOR;
use warden_utils::validate::delete_message_days;

pub const META: CommandMeta = CommandMeta {
    name: "ban",
    desc: "Ban a member from the server.",
    category: "moderation",
    usage: "!ban <user> [delete_days 0-7] [reason]",
};

#[poise::command(prefix_command, slash_command, category = "Moderation")]
pub async fn ban(
    ctx: Context<'_>,
    #[description = "The member to ban"] user: Option<serenity::User>,
    #[description = "Days of messages to delete (0-7)"] delete_messages: Option<i64>,
    #[description = "Reason for banning"]
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
        serenity::Permissions::BAN_MEMBERS,
        "ban members",
    )
    .await?
    {
        return Ok(());
    }

    let Some(user) = user else {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    };

    let delete_days = match delete_message_days(delete_messages.unwrap_or(0)) {
        Ok(days) => days,
        Err(invalid) => {
            say_ephemeral(ctx, format!("❌ {invalid}")).await?;
            return Ok(());
        }
    };

    if user.id == ctx.author().id {
        ctx.say(moderation_self_action_message("ban")).await?;
        return Ok(());
    }

    let reason = reason.unwrap_or_else(|| DEFAULT_REASON.to_owned());

    if let Err(source) = guild_id
        .ban_with_reason(ctx.http(), user.id, delete_days, &reason)
        .await
    {
        if !is_missing_permissions_error(&source) {
            error!(?source, "ban request failed");
        }
        say_ephemeral(ctx, action_failure_message(&source, "ban this member")).await?;
        return Ok(());
    }

    let embed = moderation_action_embed(
        "Member Banned",
        DANGER_COLOR,
        &user,
        ctx.author().id,
        Vec::new(),
        &reason,
    );
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
