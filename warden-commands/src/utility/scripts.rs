use poise::serenity_prelude as serenity;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::CommandMeta;
use warden_core::{Context, Data, Error};
use warden_scripts::{ProviderError, ScriptResult};
use warden_utils::embed::{DANGER_COLOR, DEFAULT_EMBED_COLOR, error_embed};
use warden_utils::formatting::format_thousands;
use warden_utils::pagination::{Direction, PageView, PaginationError, SearchSession};
use warden_utils::sessions::{SessionBinder, SessionHandle};

pub const META: CommandMeta = CommandMeta {
    name: "search-scripts",
    desc: "Search ScriptBlox scripts.",
    category: "utility",
    usage: "!search-scripts <query>",
};

pub const NAVIGATION_PREFIX: &str = "scripts:";
const PREVIOUS_ID: &str = "scripts:prev";
const NEXT_ID: &str = "scripts:next";

const PROVIDER_FAILURE: &str = "Failed to fetch scripts from ScriptBlox API";
const EXPIRED_NOTICE: &str = "This interaction has expired.";

#[poise::command(
    prefix_command,
    slash_command,
    rename = "search-scripts",
    category = "Utility"
)]
pub async fn search_scripts(
    ctx: Context<'_>,
    #[description = "Search query for scripts"]
    #[rest]
    query: String,
) -> Result<(), Error> {
    ctx.defer().await?;

    let data = ctx.data();
    let response = data.scripts.search(&query).await;
    let outcome = SearchOutcome::from_response(&query, response, Instant::now());

    let reply = ctx.send(outcome.reply(&query)).await?;
    if !outcome.has_session() {
        return Ok(());
    }

    let message = reply.message().await?;
    let message_id = message.id;
    let channel_id = message.channel_id;

    if let Some(handle) = outcome.bind(&data.script_sessions, message_id.get()) {
        info!(message_id = message_id.get(), "script search session started");
        spawn_expiry_watcher(ctx.serenity_context(), data, channel_id, message_id, handle);
    }

    Ok(())
}

/// First reply to a search, decided before any message exists.
#[derive(Debug)]
pub(crate) enum SearchOutcome {
    Unavailable,
    NoResults,
    Results(SearchSession<ScriptResult>),
}

impl SearchOutcome {
    pub(crate) fn from_response(
        query: &str,
        response: Result<Vec<ScriptResult>, ProviderError>,
        now: Instant,
    ) -> Self {
        let results = match response {
            Ok(results) => results,
            Err(source) => {
                warn!(?source, query, "script search failed");
                return Self::Unavailable;
            }
        };

        match SearchSession::create(query, results, now) {
            Ok(session) => Self::Results(session),
            Err(_) => Self::NoResults,
        }
    }

    pub(crate) fn has_session(&self) -> bool {
        matches!(self, Self::Results(_))
    }

    fn reply(&self, query: &str) -> poise::CreateReply {
        match self {
            Self::Unavailable => poise::CreateReply::default().embed(error_embed(PROVIDER_FAILURE)),
            Self::NoResults => poise::CreateReply::default().embed(no_results_embed(query)),
            Self::Results(session) => {
                let (embed, components) = render_session(session);
                poise::CreateReply::default()
                    .embed(embed)
                    .components(components)
            }
        }
    }

    /// Attach the session to the message that shows it. Terminal outcomes
    /// leave the binder untouched.
    pub(crate) fn bind(
        self,
        binder: &SessionBinder<ScriptResult>,
        message_id: u64,
    ) -> Option<SessionHandle<ScriptResult>> {
        match self {
            Self::Results(session) => Some(binder.bind(message_id, session)),
            Self::Unavailable | Self::NoResults => None,
        }
    }
}

/// Route a button press on a search result message to its session.
pub async fn handle_script_navigation(
    ctx: &serenity::Context,
    data: &Data,
    interaction: &serenity::ComponentInteraction,
) -> Result<(), Error> {
    let Some(direction) = parse_navigation(&interaction.data.custom_id) else {
        return Ok(());
    };

    let message_id = interaction.message.id.get();
    let Some(handle) = data.script_sessions.resolve(message_id, Instant::now()).await else {
        return respond_expired(ctx, interaction).await;
    };

    let mut session = handle.lock().await;
    if let Err(PaginationError::SessionExpired) = session.advance(direction, Instant::now()) {
        drop(session);
        return respond_expired(ctx, interaction).await;
    }

    let (embed, components) = render_session(&session);
    interaction
        .create_response(
            &ctx.http,
            serenity::CreateInteractionResponse::UpdateMessage(
                serenity::CreateInteractionResponseMessage::new()
                    .embed(embed)
                    .components(components),
            ),
        )
        .await?;

    debug!(
        message_id,
        page = session.current_page(),
        "script search page changed"
    );
    Ok(())
}

pub fn is_script_navigation(custom_id: &str) -> bool {
    custom_id.starts_with(NAVIGATION_PREFIX)
}

fn parse_navigation(custom_id: &str) -> Option<Direction> {
    match custom_id {
        PREVIOUS_ID => Some(Direction::Previous),
        NEXT_ID => Some(Direction::Next),
        _ => None,
    }
}

async fn respond_expired(
    ctx: &serenity::Context,
    interaction: &serenity::ComponentInteraction,
) -> Result<(), Error> {
    interaction
        .create_response(
            &ctx.http,
            serenity::CreateInteractionResponse::Message(
                serenity::CreateInteractionResponseMessage::new()
                    .content(EXPIRED_NOTICE)
                    .ephemeral(true),
            ),
        )
        .await?;
    Ok(())
}

fn spawn_expiry_watcher(
    ctx: &serenity::Context,
    data: &Data,
    channel_id: serenity::ChannelId,
    message_id: serenity::MessageId,
    handle: SessionHandle<ScriptResult>,
) {
    let http = ctx.http.clone();
    let sessions = data.script_sessions.clone();

    tokio::spawn(async move {
        if !sessions
            .expire_when_idle(message_id.get(), handle.clone())
            .await
        {
            return;
        }

        let components = {
            let session = handle.lock().await;
            navigation_buttons(&session.render_page(), session.controls_disabled())
        };

        if let Err(source) = channel_id
            .edit_message(
                &http,
                message_id,
                serenity::EditMessage::new().components(components),
            )
            .await
        {
            debug!(?source, message_id = message_id.get(), "failed to disable expired navigation");
        }
    });
}

fn render_session(
    session: &SearchSession<ScriptResult>,
) -> (serenity::CreateEmbed, Vec<serenity::CreateActionRow>) {
    let view = session.render_page();
    let embed = results_embed(session.query(), &view);
    let components = navigation_buttons(&view, session.controls_disabled());
    (embed, components)
}

fn results_embed(query: &str, view: &PageView<'_, ScriptResult>) -> serenity::CreateEmbed {
    let fields = view
        .items
        .iter()
        .enumerate()
        .map(|(offset, script)| {
            let (name, value) = result_field(view.first_item_index + offset + 1, script);
            (name, value, false)
        })
        .collect::<Vec<_>>();

    serenity::CreateEmbed::new()
        .title(results_title(view))
        .description(results_description(query, view))
        .color(DEFAULT_EMBED_COLOR)
        .fields(fields)
}

fn no_results_embed(query: &str) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title("🔍 Script Search")
        .description(format!("No scripts found for: **{}**", query))
        .color(DANGER_COLOR)
}

fn results_title(view: &PageView<'_, ScriptResult>) -> String {
    format!("🔍 Script Search Results - Page {}", view.page_index + 1)
}

fn results_description(query: &str, view: &PageView<'_, ScriptResult>) -> String {
    format!(
        "Search query: **{}**\nShowing {}-{} of {} results",
        query,
        view.first_item_index + 1,
        view.first_item_index + view.items.len(),
        view.total_items
    )
}

fn result_field(position: usize, script: &ScriptResult) -> (String, String) {
    let verified = if script.verified { "✅" } else { "❌" };
    (
        format!("{}. {}", position, script.display_title()),
        format!(
            "**Game:** {}\n**Views:** {}\n**Verified:** {}",
            script.game,
            format_thousands(script.views),
            verified
        ),
    )
}

fn navigation_buttons(
    view: &PageView<'_, ScriptResult>,
    disabled: bool,
) -> Vec<serenity::CreateActionRow> {
    vec![serenity::CreateActionRow::Buttons(vec![
        serenity::CreateButton::new(PREVIOUS_ID)
            .label("◀️ Previous")
            .style(serenity::ButtonStyle::Secondary)
            .disabled(disabled || view.is_first_page),
        serenity::CreateButton::new(NEXT_ID)
            .label("Next ▶️")
            .style(serenity::ButtonStyle::Primary)
            .disabled(disabled || view.is_last_page),
    ])]
}
