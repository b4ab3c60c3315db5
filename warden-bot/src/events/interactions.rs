use poise::serenity_prelude as serenity;
use tracing::error;

use warden_commands::utility::scripts::{handle_script_navigation, is_script_navigation};
use warden_core::Data;

/// Dispatch script search button presses to their session. Components
/// whose custom id lacks the `scripts:` prefix are ignored.
pub async fn handle_component_interaction(
    ctx: &serenity::Context,
    data: &Data,
    interaction: &serenity::ComponentInteraction,
) {
    if !is_script_navigation(&interaction.data.custom_id) {
        return;
    }

    if let Err(source) = handle_script_navigation(ctx, data, interaction).await {
        error!(
            ?source,
            message_id = interaction.message.id.get(),
            "script navigation failed"
        );
    }
}
