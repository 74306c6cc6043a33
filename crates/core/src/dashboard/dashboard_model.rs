use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Overall system health as reported by the server.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum SystemHealth {
    Healthy,
    Warning,
    Error,
}

/// Aggregate dashboard counters.
///
/// Treated as a single replaceable snapshot: every accepted
/// `dashboard:stats_updated` push replaces the whole value, there is no
/// partial merge. The timestamp orders snapshots under out-of-order delivery.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_events: i64,
    pub active_events: i64,
    pub upcoming_events: i64,
    pub system_health: SystemHealth,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_deserialization() {
        let stats: DashboardStats = serde_json::from_str(
            r#"{"totalEvents":5,"activeEvents":2,"upcomingEvents":3,"systemHealth":"warning","timestamp":"2026-08-25T12:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(stats.total_events, 5);
        assert_eq!(stats.system_health, SystemHealth::Warning);
    }

    #[test]
    fn test_bad_health_value_is_rejected() {
        let result = serde_json::from_str::<SystemHealth>(r#""critical""#);
        assert!(result.is_err());
    }
}
