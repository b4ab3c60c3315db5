use poise::serenity_prelude as serenity;

/// Default embed color used for informational replies.
pub const DEFAULT_EMBED_COLOR: u32 = 0x00_99_ff;
pub const KICK_COLOR: u32 = 0xff_6b_6b;
pub const DANGER_COLOR: u32 = 0xff_00_00;
pub const WARNING_COLOR: u32 = 0xff_a5_00;
pub const MUTED_COLOR: u32 = 0x80_80_80;
pub const SUCCESS_COLOR: u32 = 0x00_ff_00;

/// Build an embed with a title and a list of non-inline fields.
pub fn field_embed<'a>(
    title: impl Into<String>,
    color: u32,
    fields: impl IntoIterator<Item = (&'a str, String)>,
) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(title)
        .color(color)
        .fields(fields.into_iter().map(|(name, value)| (name, value, false)))
}

/// Terminal error embed shown when a request could not be completed.
pub fn error_embed(description: impl Into<String>) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title("❌ Error")
        .description(description)
        .color(DANGER_COLOR)
}
