use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::guild_only_message;
use warden_core::{Context, Error};
use warden_utils::embed::DEFAULT_EMBED_COLOR;

pub const META: CommandMeta = CommandMeta {
    name: "userinfo",
    desc: "Get user information.",
    category: "information",
    usage: "!userinfo [user]",
};

#[poise::command(prefix_command, slash_command, category = "Information")]
pub async fn userinfo(
    ctx: Context<'_>,
    #[description = "The member to get info about"] user: Option<serenity::User>,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let user = user.unwrap_or_else(|| ctx.author().clone());
    let member = guild_id.member(ctx.http(), user.id).await?;
    let roles = guild_id.roles(ctx.http()).await?;

    let top_role = member
        .roles
        .iter()
        .filter_map(|role_id| roles.get(role_id))
        .max_by_key(|role| role.position);

    let color = top_role
        .map(|role| role.colour.0)
        .filter(|color| *color != 0)
        .unwrap_or(DEFAULT_EMBED_COLOR);
    let top_role = top_role.map_or_else(
        || "@everyone".to_owned(),
        |role| format!("<@&{}>", role.id.get()),
    );
    let joined = member.joined_at.map_or_else(
        || "Unknown".to_owned(),
        |at| format!("<t:{}:D>", at.unix_timestamp()),
    );

    let embed = serenity::CreateEmbed::new()
        .title(format!("User Info - {}", member.display_name()))
        .color(color)
        .thumbnail(user.face())
        .field("Username", user.tag(), true)
        .field("ID", user.id.get().to_string(), true)
        .field("Joined Server", joined, true)
        .field(
            "Account Created",
            format!("<t:{}:D>", user.created_at().unix_timestamp()),
            true,
        )
        .field("Top Role", top_role, true);

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
