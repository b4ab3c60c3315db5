use tracing::debug;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{
    DEFAULT_REASON, guild_only_message, moderation_action_embed, moderation_self_action_message,
    require_permission, send_warning_dm, usage_message,
};
use warden_core::{Context, Error};
use warden_ledger::impls::warnings::record_warning;
use warden_utils::embed::WARNING_COLOR;

pub const META: CommandMeta = CommandMeta {
    name: "warn",
    desc: "Warn a member.",
    category: "moderation",
    usage: "!warn <user> [reason]",
};

#[poise::command(prefix_command, slash_command, category = "Moderation")]
pub async fn warn(
    ctx: Context<'_>,
    #[description = "The member to warn"] user: Option<serenity::User>,
    #[description = "Reason for warning"]
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
        "warn members",
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
        ctx.say(moderation_self_action_message("warn")).await?;
        return Ok(());
    }

    let reason = reason.unwrap_or_else(|| DEFAULT_REASON.to_owned());
    let (_, total) = record_warning(
        &ctx.data().ledger,
        guild_id.get(),
        user.id.get(),
        &ctx.author().name,
        &reason,
    );

    let embed = moderation_action_embed(
        "Member Warned",
        WARNING_COLOR,
        &user,
        ctx.author().id,
        Vec::new(),
        &reason,
    )
    .field("Total Warnings", total.to_string(), false);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    // Best effort: members with closed DMs still get warned.
    if let Err(source) = send_warning_dm(ctx.http(), &user, guild_id, &reason).await {
        debug!(?source, user_id = user.id.get(), "warning DM not delivered");
    }

    Ok(())
}
