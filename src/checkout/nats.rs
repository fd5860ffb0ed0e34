//! NATS notifier: publishes the order as JSON for downstream fulfilment.

use tracing::info;
use super::notifier::{Notifier, NotifyError};
use crate::config::NotifierSettings;
use crate::domain::OrderNotification;

#[derive(Clone)]
pub struct NatsNotifier {
    client: async_nats::Client,
    subject: String,
}

impl NatsNotifier {
    pub fn new(client: async_nats::Client, subject: impl Into<String>) -> Self {
        Self { client, subject: subject.into() }
    }

    pub async fn connect(settings: &NotifierSettings) -> Result<Self, NotifyError> {
        let client = async_nats::connect(settings.nats_url.as_str())
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;
        Ok(Self::new(client, settings.nats_subject.clone()))
    }
}

impl Notifier for NatsNotifier {
    async fn dispatch(&self, order: &OrderNotification) -> Result<(), NotifyError> {
        let payload = serde_json::to_vec(order)?;
        self.client
            .publish(self.subject.clone(), payload.into())
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;
        self.client.flush().await.map_err(|e| NotifyError::Transport(e.to_string()))?;
        info!(order_id = %order.order_id, subject = %self.subject, "Order notification published");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_to_unreachable_server_fails() {
        let settings = NotifierSettings { nats_url: "nats://127.0.0.1:1".into(), ..NotifierSettings::default() };
        let result = NatsNotifier::connect(&settings).await;
        assert!(matches!(result, Err(NotifyError::Transport(_))));
    }
}
