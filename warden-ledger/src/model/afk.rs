#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AfkRecord {
    pub reason: String,
    pub since: u64,
}

impl AfkRecord {
    /// Seconds elapsed since the record was set, clamped at zero if the
    /// wall clock moved backwards.
    pub fn away_secs(&self, now: u64) -> u64 {
        now.saturating_sub(self.since)
    }
}

#[cfg(test)]
mod tests {
    use super::AfkRecord;

    #[test]
    fn away_time_never_goes_negative() {
        let record = AfkRecord {
            reason: "lunch".to_owned(),
            since: 1_000,
        };

        assert_eq!(record.away_secs(1_600), 600);
        assert_eq!(record.away_secs(900), 0);
    }
}
