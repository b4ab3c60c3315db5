use tracing::debug;

use crate::time::now_unix_secs;
use crate::{ledger::Ledger, model::warnings::WarningRecord};

/// Append a warning for a target user and return it with the new total.
pub fn record_warning(
    ledger: &Ledger,
    guild_id: u64,
    user_id: u64,
    moderator: &str,
    reason: &str,
) -> (WarningRecord, usize) {
    record_warning_at(ledger, guild_id, user_id, moderator, reason, now_unix_secs())
}

fn record_warning_at(
    ledger: &Ledger,
    guild_id: u64,
    user_id: u64,
    moderator: &str,
    reason: &str,
    warned_at: u64,
) -> (WarningRecord, usize) {
    let record = WarningRecord {
        reason: reason.to_owned(),
        moderator: moderator.to_owned(),
        warned_at,
    };

    // The entry guard keeps the append and the count atomic for this key.
    let mut entries = ledger.warnings().entry((guild_id, user_id)).or_default();
    entries.push(record.clone());
    let total = entries.len();
    drop(entries);

    debug!(guild_id, user_id, total, "warning recorded");
    (record, total)
}

/// Return every warning for a target user, oldest first.
pub fn list_warnings(ledger: &Ledger, guild_id: u64, user_id: u64) -> Vec<WarningRecord> {
    ledger
        .warnings()
        .get(&(guild_id, user_id))
        .map(|entries| entries.value().clone())
        .unwrap_or_default()
}

/// Count warnings issued across all users of a guild.
pub fn guild_warning_total(ledger: &Ledger, guild_id: u64) -> usize {
    ledger
        .warnings()
        .iter()
        .filter(|entry| entry.key().0 == guild_id)
        .map(|entry| entry.value().len())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::{guild_warning_total, list_warnings, record_warning, record_warning_at};
    use crate::Ledger;

    #[test]
    fn warnings_keep_insertion_order_and_count_up() {
        let ledger = Ledger::new();

        let totals: Vec<usize> = ["a", "b", "c"]
            .iter()
            .map(|reason| record_warning(&ledger, 1, 7, "mod#0001", reason).1)
            .collect();
        assert_eq!(totals, vec![1, 2, 3]);

        let reasons: Vec<String> = list_warnings(&ledger, 1, 7)
            .into_iter()
            .map(|record| record.reason)
            .collect();
        assert_eq!(reasons, vec!["a", "b", "c"]);
    }

    #[test]
    fn missing_member_has_no_warnings() {
        let ledger = Ledger::new();
        assert!(list_warnings(&ledger, 1, 7).is_empty());
    }

    #[test]
    fn warnings_are_partitioned_by_guild_and_user() {
        let ledger = Ledger::new();
        record_warning_at(&ledger, 1, 7, "mod", "spam", 100);
        record_warning_at(&ledger, 1, 8, "mod", "spam", 101);
        record_warning_at(&ledger, 2, 7, "mod", "spam", 102);

        assert_eq!(list_warnings(&ledger, 1, 7).len(), 1);
        assert_eq!(list_warnings(&ledger, 2, 7)[0].warned_at, 102);
        assert_eq!(guild_warning_total(&ledger, 1), 2);
        assert_eq!(guild_warning_total(&ledger, 2), 1);
        assert_eq!(guild_warning_total(&ledger, 3), 0);
    }

    #[test]
    fn returned_record_matches_stored_record() {
        let ledger = Ledger::new();
        let (record, total) = record_warning_at(&ledger, 5, 9, "alice", "rude", 42);

        assert_eq!(total, 1);
        assert_eq!(record.moderator, "alice");
        assert_eq!(list_warnings(&ledger, 5, 9), vec![record]);
    }

    #[test]
    fn concurrent_appends_are_not_lost() {
        let ledger = Ledger::new();

        std::thread::scope(|scope| {
            for worker in 0..8 {
                let ledger = &ledger;
                scope.spawn(move || {
                    for n in 0..50 {
                        record_warning(ledger, 1, 7, "mod", &format!("{worker}-{n}"));
                    }
                });
            }
        });

        assert_eq!(list_warnings(&ledger, 1, 7).len(), 400);
    }
}
