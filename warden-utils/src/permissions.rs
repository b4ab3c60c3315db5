use poise::serenity_prelude as serenity;

/// Permissions requested by the invite link.
pub fn invite_permissions() -> serenity::Permissions {
    serenity::Permissions::KICK_MEMBERS
        | serenity::Permissions::BAN_MEMBERS
        | serenity::Permissions::MANAGE_MESSAGES
        | serenity::Permissions::MANAGE_CHANNELS
        | serenity::Permissions::MODERATE_MEMBERS
        | serenity::Permissions::VIEW_CHANNEL
        | serenity::Permissions::SEND_MESSAGES
        | serenity::Permissions::EMBED_LINKS
        | serenity::Permissions::READ_MESSAGE_HISTORY
}

/// Build the OAuth2 authorize URL that adds the bot with slash commands.
pub fn invite_url(bot_id: serenity::UserId, permissions: serenity::Permissions) -> String {
    format!(
        "https://discord.com/oauth2/authorize?client_id={}&permissions={}&scope=bot+applications.commands",
        bot_id.get(),
        permissions.bits()
    )
}

/// Resolve the invoking author's effective guild permissions.
pub async fn resolve_user_permissions(
    http: &serenity::Http,
    guild_id: serenity::GuildId,
    user_id: serenity::UserId,
) -> anyhow::Result<serenity::Permissions> {
    let guild = guild_id.to_partial_guild(http).await?;
    if guild.owner_id == user_id {
        return Ok(serenity::Permissions::all());
    }

    let member = guild_id.member(http, user_id).await?;
    let everyone_role_id = serenity::RoleId::new(guild_id.get());

    let mut resolved = serenity::Permissions::empty();
    for role in guild.roles.values() {
        if role.id == everyone_role_id || member.roles.contains(&role.id) {
            resolved |= role.permissions;
        }
    }

    Ok(resolved)
}

pub async fn has_user_permission(
    http: &serenity::Http,
    guild_id: serenity::GuildId,
    user_id: serenity::UserId,
    required: serenity::Permissions,
) -> anyhow::Result<bool> {
    let perms = resolve_user_permissions(http, guild_id, user_id).await?;

    Ok(grants(perms, required))
}

/// `ADMINISTRATOR` implicitly grants every permission.
pub fn grants(held: serenity::Permissions, required: serenity::Permissions) -> bool {
    held.contains(serenity::Permissions::ADMINISTRATOR) || held.contains(required)
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude as serenity;

    use super::{grants, invite_permissions, invite_url};

    #[test]
    fn administrator_grants_everything() {
        assert!(grants(
            serenity::Permissions::ADMINISTRATOR,
            serenity::Permissions::BAN_MEMBERS
        ));
        assert!(grants(
            serenity::Permissions::BAN_MEMBERS | serenity::Permissions::KICK_MEMBERS,
            serenity::Permissions::KICK_MEMBERS
        ));
        assert!(!grants(
            serenity::Permissions::KICK_MEMBERS,
            serenity::Permissions::BAN_MEMBERS
        ));
    }

    #[test]
    fn invite_url_carries_client_id_and_bits() {
        let perms = invite_permissions();
        let url = invite_url(serenity::UserId::new(42), perms);

        assert!(url.starts_with("https://discord.com/oauth2/authorize?client_id=42&"));
        assert!(url.contains(&format!("permissions={}", perms.bits())));
        assert!(url.ends_with("scope=bot+applications.commands"));
        assert!(perms.contains(serenity::Permissions::MODERATE_MEMBERS));
        assert!(!perms.contains(serenity::Permissions::ADMINISTRATOR));
    }
}
