use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{
    action_failure_message, guild_only_message, is_missing_permissions_error, require_permission,
    say_ephemeral, usage_message,
};
use warden_core::{Context, Error};
use warden_utils::embed::{SUCCESS_COLOR, field_embed};
use warden_utils::validate::purge_amount;

pub const META: CommandMeta = CommandMeta {
    name: "clear",
    desc: "Clear recent messages from this channel.",
    category: "moderation",
    usage: "!clear <amount 1-100>",
};

#[poise::command(prefix_command, slash_command, category = "Moderation")]
pub async fn clear(
    ctx: Context<'_>,
    #[description = "Number of messages to delete (1-100)"] amount: Option<i64>,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    if !require_permission(
        ctx,
        guild_id,
        serenity::Permissions::MANAGE_MESSAGES,
        "manage messages",
    )
    .await?
    {
        return Ok(());
    }

    let Some(requested) = amount else {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    };

    let limit = match purge_amount(requested) {
        Ok(limit) => limit,
        Err(invalid) => {
            say_ephemeral(ctx, format!("❌ {invalid}")).await?;
            return Ok(());
        }
    };

    ctx.defer_ephemeral().await?;

    let channel_id = ctx.channel_id();
    let messages = channel_id
        .messages(ctx.http(), serenity::GetMessages::new().limit(limit))
        .await?;

    let ids: Vec<serenity::MessageId> = messages.into_iter().map(|message| message.id).collect();
    let deleted_count = ids.len();

    if ids.is_empty() {
        say_ephemeral(ctx, "No messages found to delete.").await?;
        return Ok(());
    }

    let delete_result = if ids.len() == 1 {
        channel_id.delete_message(ctx.http(), ids[0]).await
    } else {
        channel_id.delete_messages(ctx.http(), ids).await
    };

    if let Err(source) = delete_result {
        if !is_missing_permissions_error(&source) {
            error!(?source, "clear delete request failed");
        }
        say_ephemeral(ctx, action_failure_message(&source, "delete messages")).await?;
        return Ok(());
    }

    let embed = field_embed(
        "Messages Cleared",
        SUCCESS_COLOR,
        [
            ("Amount", format!("{} messages", deleted_count)),
            ("Moderator", format!("<@{}>", ctx.author().id.get())),
            ("Channel", format!("<#{}>", channel_id.get())),
        ],
    );
    ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
        .await?;

    Ok(())
}
