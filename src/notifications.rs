use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 64;

#[derive(Clone, Debug, Serialize)]
pub struct Notification {
    pub event: String,
    pub data: Value,
    pub timestamp: DateTime<Utc>,
}

/// Broadcasts entity mutations to every connected subscriber. Publishing
/// never fails the mutation that triggered it.
#[derive(Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notification>,
}

impl Notifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);

        Self { tx }
    }

    #[tracing::instrument(skip(self, data))]
    pub fn notify(&self, event: &str, data: Value) {
        let notification = Notification {
            event: event.into(),
            data,
            timestamp: Utc::now(),
        };

        // a send error only means nobody is listening
        let _ = self.tx.send(notification);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn notifications_reach_subscribers() {
    tokio_test::block_on(async {
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();

        notifier.notify("DRIVER_CREATED", serde_json::json!({ "name": "João" }));

        let notification = rx.recv().await.unwrap();
        assert_eq!(notification.event, "DRIVER_CREATED");
        assert_eq!(notification.data["name"], "João");
    });
}

#[test]
fn notify_without_subscribers_is_a_no_op() {
    let notifier = Notifier::new();

    notifier.notify("TRANSPORT_REMOVED", serde_json::json!({}));
}
