use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{
    guild_only_message, require_permission, say_ephemeral, usage_message,
};
use warden_core::{Context, Error};
use warden_ledger::impls::warnings::list_warnings;
use warden_ledger::model::warnings::WarningRecord;
use warden_utils::embed::WARNING_COLOR;
use warden_utils::formatting::escape_mentions;

pub const META: CommandMeta = CommandMeta {
    name: "warnings",
    desc: "Check warnings for a member.",
    category: "information",
    usage: "!warnings <user>",
};

const SHOWN_WARNINGS: usize = 10;

#[poise::command(prefix_command, slash_command, category = "Information")]
pub async fn warnings(
    ctx: Context<'_>,
    #[description = "The member to check warnings for"] user: Option<serenity::User>,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    if !require_permission(
        ctx,
        guild_id,
        serenity::Permissions::MODERATE_MEMBERS,
        "view warnings",
    )
    .await?
    {
        return Ok(());
    }

    let Some(user) = user else {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    };

    let entries = list_warnings(&ctx.data().ledger, guild_id.get(), user.id.get());
    if entries.is_empty() {
        say_ephemeral(ctx, format!("✅ <@{}> has no warnings!", user.id.get())).await?;
        return Ok(());
    }

    let display_name = user.global_name.as_deref().unwrap_or(&user.name);
    let embed = serenity::CreateEmbed::new()
        .title(format!("Warnings for {}", display_name))
        .color(WARNING_COLOR)
        .fields(
            recent_warning_fields(&entries)
                .into_iter()
                .map(|(name, value)| (name, value, false)),
        )
        .field("Total Warnings", entries.len().to_string(), false);

    ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
        .await?;

    Ok(())
}

/// One field per warning for the most recent ten, numbered from 1 in
/// chronological order.
fn recent_warning_fields(entries: &[WarningRecord]) -> Vec<(String, String)> {
    let shown = &entries[entries.len().saturating_sub(SHOWN_WARNINGS)..];

    shown
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            (
                format!("Warning {}", idx + 1),
                format!(
                    "**Reason:** {}\n**Moderator:** {}\n**Date:** <t:{}:D>",
                    escape_mentions(&entry.reason),
                    entry.moderator,
                    entry.warned_at
                ),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use warden_ledger::model::warnings::WarningRecord;

    use super::recent_warning_fields;

    fn warning(n: u64) -> WarningRecord {
        WarningRecord {
            reason: format!("reason {n}"),
            moderator: "mod".to_owned(),
            warned_at: 1_700_000_000 + n,
        }
    }

    #[test]
    fn shows_only_the_latest_ten() {
        let entries: Vec<WarningRecord> = (1..=12).map(warning).collect();
        let fields = recent_warning_fields(&entries);

        assert_eq!(fields.len(), 10);
        assert_eq!(fields[0].0, "Warning 1");
        assert!(fields[0].1.contains("reason 3"));
        assert!(fields[9].1.contains("reason 12"));
    }

    #[test]
    fn field_lists_reason_moderator_and_date() {
        let fields = recent_warning_fields(&[warning(0)]);

        assert_eq!(
            fields[0].1,
            "**Reason:** reason 0\n**Moderator:** mod\n**Date:** <t:1700000000:D>"
        );
    }
}
