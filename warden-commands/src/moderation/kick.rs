use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{
    DEFAULT_REASON, action_failure_message, guild_only_message, is_missing_permissions_error,
    moderation_action_embed, moderation_self_action_message, require_permission, say_ephemeral,
    usage_message,
};
use warden_core::{Context, Error};
use warden_utils::embed::KICK_COLOR;

pub const META: CommandMeta = CommandMeta {
    name: "kick",
    desc: "Kick a member from the server.",
    category: "moderation",
    usage: "!kick <user> [reason]",
};

#[poise::command(prefix_command, slash_command, category = "Moderation")]
pub async fn kick(
    ctx: Context<'_>,
    #[description = "The member to kick"] user: Option<serenity::User>,
    #[description = "Reason for kicking"]
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
        serenity::Permissions::KICK_MEMBERS,
        "kick members",
    )
    .await?
    {
        return Ok(());
    }

    let Some(user) = user else {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    };

    if user.id == ctx.author().id {
        ctx.say(moderation_self_action_message("kick")).await?;
        return Ok(());
    }

    let reason = reason.unwrap_or_else(|| DEFAULT_REASON.to_owned());

    if let Err(source) = guild_id
        .kick_with_reason(ctx.http(), user.id, &reason)
        .await
    {
        if !is_missing_permissions_error(&source) {
            error!(?source, "kick request failed");
        }
        say_ephemeral(ctx, action_failure_message(&source, "kick this member")).await?;
        return Ok(());
    }

    let embed = moderation_action_embed(
        "Member Kicked",
        KICK_COLOR,
        &user,
        ctx.author().id,
        Vec::new(),
        &reason,
    );
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
