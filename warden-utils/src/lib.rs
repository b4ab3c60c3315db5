/// Self-deleting channel notices.
pub mod cleanup;
/// Embed palette and builders shared across commands.
pub mod embed;
/// Shared formatting helpers (durations, counts, latency buckets).
pub mod formatting;
/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';
/// Page cursor over a fixed result list.
pub mod pagination;
/// Permission helper utilities.
pub mod permissions;
/// Message-to-session binding for interactive pagination.
pub mod sessions;
/// Shared time helpers.
pub mod time;
/// Bounds checks for numeric command arguments.
pub mod validate;
