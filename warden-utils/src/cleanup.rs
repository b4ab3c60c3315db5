use std::sync::Arc;

use poise::serenity_prelude as serenity;
use tokio::time::{Duration, sleep};
use tracing::debug;

/// How long the AFK welcome-back notice stays in the channel.
pub const WELCOME_BACK_TTL: Duration = Duration::from_secs(10);
/// How long an "is AFK" notice stays in the channel.
pub const AFK_NOTICE_TTL: Duration = Duration::from_secs(15);

/// Post an embed and delete it again once `ttl` has passed.
///
/// Deletion runs on a detached task; a failed delete is only logged.
pub async fn send_transient_embed(
    http: &Arc<serenity::Http>,
    channel_id: serenity::ChannelId,
    embed: serenity::CreateEmbed,
    ttl: Duration,
) -> serenity::Result<serenity::MessageId> {
    let message = channel_id
        .send_message(http, serenity::CreateMessage::new().embed(embed))
        .await?;
    let message_id = message.id;

    let http = Arc::clone(http);
    tokio::spawn(async move {
        sleep(ttl).await;
        if let Err(source) = channel_id.delete_message(&http, message_id).await {
            debug!(?source, message_id = message_id.get(), "failed to delete transient message");
        }
    });

    Ok(message_id)
}
