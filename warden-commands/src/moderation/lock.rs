use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{
    DEFAULT_REASON, action_failure_message, guild_only_message, is_missing_permissions_error,
    require_permission, say_ephemeral,
};
use warden_core::{Context, Error};
use warden_utils::embed::{DANGER_COLOR, SUCCESS_COLOR, field_embed};
use warden_utils::formatting::escape_mentions;

pub const META: CommandMeta = CommandMeta {
    name: "lock",
    desc: "Lock this channel for everyone.",
    category: "channels",
    usage: "!lock [reason]",
};

#[poise::command(prefix_command, slash_command, category = "Channels")]
pub async fn lock(
    ctx: Context<'_>,
    #[description = "Reason for locking the channel"]
    #[rest]
    reason: Option<String>,
) -> Result<(), Error> {
    set_channel_lock(ctx, reason, true).await
}

/// Shared body of `lock` and `unlock`: flip SEND_MESSAGES on the
/// @everyone overwrite and announce the change.
pub(crate) async fn set_channel_lock(
    ctx: Context<'_>,
    reason: Option<String>,
    locked: bool,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    if !require_permission(
        ctx,
        guild_id,
        serenity::Permissions::MANAGE_CHANNELS,
        "manage channels",
    )
    .await?
    {
        return Ok(());
    }

    let Some(channel) = ctx.guild_channel().await else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let everyone = serenity::RoleId::new(guild_id.get());
    let overwrite = everyone_send_overwrite(&channel.permission_overwrites, everyone, locked);

    if let Err(source) = channel.id.create_permission(ctx.http(), overwrite).await {
        if !is_missing_permissions_error(&source) {
            error!(?source, locked, "channel overwrite update failed");
        }
        say_ephemeral(ctx, action_failure_message(&source, "manage this channel")).await?;
        return Ok(());
    }

    let (title, color) = if locked {
        ("🔒 Channel Locked", DANGER_COLOR)
    } else {
        ("🔓 Channel Unlocked", SUCCESS_COLOR)
    };
    let reason = reason.unwrap_or_else(|| DEFAULT_REASON.to_owned());
    let embed = field_embed(
        title,
        color,
        [
            ("Channel", format!("<#{}>", channel.id.get())),
            ("Moderator", format!("<@{}>", ctx.author().id.get())),
            ("Reason", escape_mentions(&reason)),
        ],
    );
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}

/// Compute the @everyone overwrite with SEND_MESSAGES denied (locked) or
/// reset to inherit (unlocked), keeping every other bit as it was.
fn everyone_send_overwrite(
    existing: &[serenity::PermissionOverwrite],
    everyone: serenity::RoleId,
    locked: bool,
) -> serenity::PermissionOverwrite {
    let kind = serenity::PermissionOverwriteType::Role(everyone);
    let (mut allow, mut deny) = existing
        .iter()
        .find(|overwrite| overwrite.kind == kind)
        .map(|overwrite| (overwrite.allow, overwrite.deny))
        .unwrap_or((
            serenity::Permissions::empty(),
            serenity::Permissions::empty(),
        ));

    allow.remove(serenity::Permissions::SEND_MESSAGES);
    if locked {
        deny.insert(serenity::Permissions::SEND_MESSAGES);
    } else {
        deny.remove(serenity::Permissions::SEND_MESSAGES);
    }

    serenity::PermissionOverwrite { allow, deny, kind }
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude as serenity;

    use super::everyone_send_overwrite;

    fn everyone() -> serenity::RoleId {
        serenity::RoleId::new(1)
    }

    #[test]
    fn locking_denies_send_and_keeps_other_bits() {
        let existing = vec![serenity::PermissionOverwrite {
            allow: serenity::Permissions::SEND_MESSAGES | serenity::Permissions::ADD_REACTIONS,
            deny: serenity::Permissions::ATTACH_FILES,
            kind: serenity::PermissionOverwriteType::Role(everyone()),
        }];

        let locked = everyone_send_overwrite(&existing, everyone(), true);
        assert_eq!(locked.allow, serenity::Permissions::ADD_REACTIONS);
        assert_eq!(
            locked.deny,
            serenity::Permissions::ATTACH_FILES | serenity::Permissions::SEND_MESSAGES
        );
    }

    #[test]
    fn unlocking_resets_send_to_inherit() {
        let existing = vec![serenity::PermissionOverwrite {
            allow: serenity::Permissions::empty(),
            deny: serenity::Permissions::SEND_MESSAGES | serenity::Permissions::ATTACH_FILES,
            kind: serenity::PermissionOverwriteType::Role(everyone()),
        }];

        let unlocked = everyone_send_overwrite(&existing, everyone(), false);
        assert!(unlocked.allow.is_empty());
        assert_eq!(unlocked.deny, serenity::Permissions::ATTACH_FILES);
    }

    #[test]
    fn other_overwrites_are_ignored() {
        let existing = vec![serenity::PermissionOverwrite {
            allow: serenity::Permissions::empty(),
            deny: serenity::Permissions::VIEW_CHANNEL,
            kind: serenity::PermissionOverwriteType::Role(serenity::RoleId::new(2)),
        }];

        let locked = everyone_send_overwrite(&existing, everyone(), true);
        assert_eq!(locked.deny, serenity::Permissions::SEND_MESSAGES);
        assert_eq!(
            locked.kind,
            serenity::PermissionOverwriteType::Role(everyone())
        );
    }
}
