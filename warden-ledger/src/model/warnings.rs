#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WarningRecord {
    pub reason: String,
    pub moderator: String,
    pub warned_at: u64,
}
