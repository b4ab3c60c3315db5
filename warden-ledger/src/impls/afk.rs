use crate::time::now_unix_secs;
use crate::{ledger::Ledger, model::afk::AfkRecord};

/// Mark a user as AFK, replacing any previous status.
pub fn set_afk(ledger: &Ledger, guild_id: u64, user_id: u64, reason: &str) -> AfkRecord {
    let record = AfkRecord {
        reason: reason.to_owned(),
        since: now_unix_secs(),
    };
    ledger.afk().insert((guild_id, user_id), record.clone());
    record
}

/// Remove and return the user's AFK status, if any.
pub fn clear_afk_if_present(ledger: &Ledger, guild_id: u64, user_id: u64) -> Option<AfkRecord> {
    ledger
        .afk()
        .remove(&(guild_id, user_id))
        .map(|(_, record)| record)
}

pub fn peek_afk(ledger: &Ledger, guild_id: u64, user_id: u64) -> Option<AfkRecord> {
    ledger
        .afk()
        .get(&(guild_id, user_id))
        .map(|record| record.value().clone())
}

/// Count users currently AFK in a guild.
pub fn guild_afk_count(ledger: &Ledger, guild_id: u64) -> usize {
    ledger
        .afk()
        .iter()
        .filter(|entry| entry.key().0 == guild_id)
        .count()
}

#[cfg(test)]
mod tests {
    use super::{clear_afk_if_present, guild_afk_count, peek_afk, set_afk};
    use crate::Ledger;

    #[test]
    fn clearing_returns_the_record_exactly_once() {
        let ledger = Ledger::new();
        set_afk(&ledger, 1, 7, "lunch");

        let cleared = clear_afk_if_present(&ledger, 1, 7).map(|record| record.reason);
        assert_eq!(cleared.as_deref(), Some("lunch"));
        assert!(clear_afk_if_present(&ledger, 1, 7).is_none());
    }

    #[test]
    fn setting_again_overwrites_previous_status() {
        let ledger = Ledger::new();
        set_afk(&ledger, 1, 7, "lunch");
        set_afk(&ledger, 1, 7, "meeting");

        let current = peek_afk(&ledger, 1, 7).map(|record| record.reason);
        assert_eq!(current.as_deref(), Some("meeting"));
        assert_eq!(guild_afk_count(&ledger, 1), 1);
    }

    #[test]
    fn peek_does_not_remove() {
        let ledger = Ledger::new();
        set_afk(&ledger, 1, 7, "sleep");

        assert!(peek_afk(&ledger, 1, 7).is_some());
        assert!(peek_afk(&ledger, 1, 7).is_some());
        assert!(peek_afk(&ledger, 2, 7).is_none());
    }

    #[test]
    fn afk_count_is_scoped_to_guild() {
        let ledger = Ledger::new();
        set_afk(&ledger, 1, 7, "a");
        set_afk(&ledger, 1, 8, "b");
        set_afk(&ledger, 2, 7, "c");

        assert_eq!(guild_afk_count(&ledger, 1), 2);
        clear_afk_if_present(&ledger, 1, 8);
        assert_eq!(guild_afk_count(&ledger, 1), 1);
        assert_eq!(guild_afk_count(&ledger, 2), 1);
    }
}
