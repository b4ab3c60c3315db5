use poise::serenity_prelude as serenity;
use tracing::{error, info};

use warden_commands::utility::afk::{afk_notice_embed, is_afk_invocation, welcome_back_embed};
use warden_core::Data;
use warden_ledger::impls::afk::{clear_afk_if_present, peek_afk};
use warden_utils::cleanup::{AFK_NOTICE_TTL, WELCOME_BACK_TTL, send_transient_embed};
use warden_utils::time::now_unix_secs;

/// Clear the author's AFK status and surface the status of any AFK member
/// the message mentions.
pub async fn handle_message_afk(ctx: &serenity::Context, data: &Data, message: &serenity::Message) {
    if message.author.bot || message.webhook_id.is_some() {
        return;
    }

    let Some(guild_id) = message.guild_id else {
        return;
    };

    let now = now_unix_secs();

    // Prefix commands are dispatched before this handler, so `!afk` has
    // already stored the record this message would otherwise clear.
    let returning = if is_afk_invocation(&message.content) {
        None
    } else {
        clear_afk_if_present(&data.ledger, guild_id.get(), message.author.id.get())
    };

    if let Some(record) = returning {
        info!(
            guild_id = guild_id.get(),
            user_id = message.author.id.get(),
            away_secs = record.away_secs(now),
            "member returned from AFK"
        );

        if let Err(source) = send_transient_embed(
            &ctx.http,
            message.channel_id,
            welcome_back_embed(&record, now),
            WELCOME_BACK_TTL,
        )
        .await
        {
            error!(?source, "failed to send welcome back notice");
        }
    }

    for mentioned in &message.mentions {
        let Some(record) = peek_afk(&data.ledger, guild_id.get(), mentioned.id.get()) else {
            continue;
        };

        if let Err(source) = send_transient_embed(
            &ctx.http,
            message.channel_id,
            afk_notice_embed(mentioned.id.get(), &record, now),
            AFK_NOTICE_TTL,
        )
        .await
        {
            error!(?source, "failed to send AFK notice");
        }
    }
}
