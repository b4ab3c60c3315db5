use std::sync::Arc;

use dashmap::DashMap;

use crate::model::afk::AfkRecord;
use crate::model::warnings::WarningRecord;

/// `(guild_id, user_id)` pair that partitions all moderation state.
pub type MemberKey = (u64, u64);

/// Process-scoped moderation ledger shared across handlers.
///
/// State is volatile and lives from process start to process stop.
/// Each map is sharded, so read-modify-write on one member key never
/// blocks unrelated guilds or users.
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    inner: Arc<LedgerInner>,
}

#[derive(Debug, Default)]
struct LedgerInner {
    warnings: DashMap<MemberKey, Vec<WarningRecord>>,
    afk: DashMap<MemberKey, AfkRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expose the warning map for query modules.
    pub(crate) fn warnings(&self) -> &DashMap<MemberKey, Vec<WarningRecord>> {
        &self.inner.warnings
    }

    /// Expose the AFK map for query modules.
    pub(crate) fn afk(&self) -> &DashMap<MemberKey, AfkRecord> {
        &self.inner.afk
    }
}
