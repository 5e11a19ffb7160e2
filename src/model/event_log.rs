use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::store::Model;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    EventTracked { now: Option<DateTime<Utc>> },
}

/// A tracked event, stamped in milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub timestamp: i64,
}

/// Append-only log of tracked events, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<EventRecord>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.events.len()
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::EventTracked { now } => {
                let now = now.unwrap_or_else(Utc::now);
                let record = EventRecord {
                    timestamp: now.timestamp_millis(),
                };
                tracing::debug!(count = self.events.len() + 1, ?record, "event tracked");
                self.events.push(record);
            }
        }
    }
}

impl Model for EventLog {
    type Message = Message;

    fn update(&mut self, message: Message) {
        EventLog::update(self, message);
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_log_is_empty() {
        let log = EventLog::new();
        assert_eq!(log.count(), 0);
        assert!(log.events().is_empty());
        assert_eq!(log, EventLog::default());
    }

    #[test]
    fn test_event_tracked_uses_given_time() {
        let mut log = EventLog::new();
        let now = Utc
            .timestamp_millis_opt(1_700_000_000_123)
            .single()
            .expect("valid timestamp");

        log.update(Message::EventTracked { now: Some(now) });

        assert_eq!(
            log.events(),
            &[EventRecord {
                timestamp: 1_700_000_000_123
            }]
        );
    }

    #[test]
    fn test_event_tracked_preserves_insertion_order() {
        let mut log = EventLog::new();
        for millis in [30, 10, 20] {
            let now = Utc.timestamp_millis_opt(millis).single();
            log.update(Message::EventTracked { now });
        }

        let stamps: Vec<i64> = log.events().iter().map(|e| e.timestamp).collect();
        assert_eq!(stamps, vec![30, 10, 20]);
    }

    #[test]
    fn test_event_tracked_wall_clock_is_non_decreasing() {
        let mut log = EventLog::new();
        let before = Utc::now().timestamp_millis();
        for _ in 0..50 {
            log.update(Message::EventTracked { now: None });
        }
        let after = Utc::now().timestamp_millis();

        assert_eq!(log.count(), 50);
        assert!(log
            .events()
            .windows(2)
            .all(|pair| pair[0].timestamp <= pair[1].timestamp));
        assert!(log.events()[0].timestamp >= before);
        assert!(log.events()[49].timestamp <= after);
    }

    #[test]
    fn test_event_record_serde() -> serde_json::Result<()> {
        let record = EventRecord { timestamp: 42 };
        let json = serde_json::to_string(&record)?;
        assert_eq!(json, r#"{"timestamp":42}"#);
        assert_eq!(serde_json::from_str::<EventRecord>(&json)?, record);
        Ok(())
    }
}
