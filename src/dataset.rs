use crate::models::TrendingRecord;

fn record(
    topic: &str,
    platform: &str,
    mentions: u64,
    shares: u64,
    likes: u64,
    timestamp: &str,
) -> TrendingRecord {
    TrendingRecord {
        topic: topic.to_string(),
        platform: platform.to_string(),
        mentions,
        shares,
        likes,
        timestamp: timestamp.to_string(),
    }
}

// Mock dataset, fixed at process start and never mutated. Shared read-only
// across requests.
pub fn mock_dataset() -> Vec<TrendingRecord> {
    vec![
        record("#Politics", "Twitter", 45000, 15800, 67000, "2025-01-03 21:30:00"),
        record("#WorldCup2026", "Facebook", 38000, 12400, 52000, "2025-01-03 10:15:00"),
        record("SpaceX", "Twitter", 32000, 9800, 41000, "2025-01-02 09:00:00"),
        record("#TaylorSwift", "Twitter", 28000, 8900, 95000, "2025-01-03 08:45:00"),
        record("#AI", "Instagram", 15000, 6200, 18000, "2025-01-03 06:30:00"),
        record("#CyberSecurity", "LinkedIn", 22000, 7500, 25000, "2025-01-02 22:15:00"),
        record("#War", "Twitter", 19000, 5900, 28000, "2025-01-02 18:00:00"),
        record("#Gaming", "Twitter", 25000, 8200, 45000, "2025-01-02 18:00:00"),
        record("#Semantic Web", "LinkedIn", 17000, 6800, 22000, "2025-01-02 18:00:00"),
        record("#NFTs", "Instagram", 12000, 4500, 15000, "2025-01-02 18:00:00"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_timestamps_parse() {
        for rec in mock_dataset() {
            assert!(rec.parsed_timestamp().is_ok(), "bad timestamp in {:?}", rec.topic);
        }
    }
}
