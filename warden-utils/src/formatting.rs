/// Format an uptime like `2d 3h 4m 5s`, omitting zero day/hour/minute parts.
pub fn format_uptime(total_seconds: u64) -> String {
    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;

    let mut out = String::new();
    if days > 0 {
        out.push_str(&format!("{}d ", days));
    }
    if hours > 0 {
        out.push_str(&format!("{}h ", hours));
    }
    if minutes > 0 {
        out.push_str(&format!("{}m ", minutes));
    }
    out.push_str(&format!("{}s", seconds));
    out
}

/// Format an AFK absence as total hours and leftover minutes.
pub fn format_time_away(total_seconds: u64) -> String {
    format!("{}h {}m", total_seconds / 3_600, (total_seconds / 60) % 60)
}

/// Insert `,` thousands separators (`1234567` -> `1,234,567`).
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Break user-supplied text's mentions so embeds never ping anyone.
pub fn escape_mentions(text: &str) -> String {
    text.replace('@', "@\u{200B}")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LatencyStatus {
    pub label: &'static str,
    pub color: u32,
}

/// Bucket a gateway latency in milliseconds.
pub fn latency_status(latency_ms: u128) -> LatencyStatus {
    match latency_ms {
        0..100 => LatencyStatus {
            label: "🟢 Excellent",
            color: 0x00_ff_00,
        },
        100..200 => LatencyStatus {
            label: "🟡 Good",
            color: 0xff_ff_00,
        },
        200..300 => LatencyStatus {
            label: "🟠 Fair",
            color: 0xff_80_00,
        },
        _ => LatencyStatus {
            label: "🔴 Poor",
            color: 0xff_00_00,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{
        escape_mentions, format_thousands, format_time_away, format_uptime, latency_status,
    };

    #[test]
    fn uptime_skips_empty_leading_units() {
        assert_eq!(format_uptime(0), "0s");
        assert_eq!(format_uptime(59), "59s");
        assert_eq!(format_uptime(61), "1m 1s");
        assert_eq!(format_uptime(3_600), "1h 0s");
        assert_eq!(format_uptime(86_400 + 60), "1d 1m 0s");
        assert_eq!(format_uptime(2 * 86_400 + 3 * 3_600 + 4 * 60 + 5), "2d 3h 4m 5s");
    }

    #[test]
    fn time_away_counts_total_hours() {
        assert_eq!(format_time_away(0), "0h 0m");
        assert_eq!(format_time_away(59), "0h 0m");
        assert_eq!(format_time_away(3_660), "1h 1m");
        assert_eq!(format_time_away(26 * 3_600 + 5 * 60), "26h 5m");
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
        assert_eq!(format_thousands(100_000), "100,000");
    }

    #[test]
    fn mentions_are_defused() {
        assert_eq!(escape_mentions("hi @everyone"), "hi @\u{200B}everyone");
        assert_eq!(escape_mentions("plain"), "plain");
    }

    #[test]
    fn latency_buckets() {
        assert_eq!(latency_status(0).label, "🟢 Excellent");
        assert_eq!(latency_status(99).label, "🟢 Excellent");
        assert_eq!(latency_status(100).label, "🟡 Good");
        assert_eq!(latency_status(250).label, "🟠 Fair");
        assert_eq!(latency_status(300).label, "🔴 Poor");
        assert_eq!(latency_status(300).color, 0xff_00_00);
    }
}
