use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in unix seconds, or 0 if the clock reads
/// before the epoch.
pub fn now_unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_secs())
}

#[cfg(test)]
mod tests {
    use super::now_unix_secs;

    #[test]
    fn clock_reads_after_2020() {
        assert!(now_unix_secs() > 1_577_836_800);
    }
}
