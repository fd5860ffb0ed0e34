//! File-drop notifier
//!
//! Writes each order as a mail-formatted text file into a directory that a
//! mail pickup service (or a person) watches.

use std::path::PathBuf;
use tracing::info;
use super::notifier::{Notifier, NotifyError};
use crate::config::NotifierSettings;
use crate::domain::OrderNotification;

#[derive(Clone, Debug)]
pub struct FileDropNotifier {
    directory: PathBuf,
    mail_to: String,
    mail_from: String,
    subject: String,
}

impl FileDropNotifier {
    pub fn new(settings: &NotifierSettings) -> Self {
        Self {
            directory: settings.file_location.clone(),
            mail_to: settings.mail_to.clone(),
            mail_from: settings.mail_from.clone(),
            subject: settings.subject.clone(),
        }
    }

    pub fn path_for(&self, order: &OrderNotification) -> PathBuf {
        self.directory.join(format!("{}.eml", order.order_id))
    }

    fn render(&self, order: &OrderNotification) -> String {
        format!(
            "To: {}\r\nFrom: {}\r\nSubject: {}\r\nDate: {}\r\nContent-Type: text/plain; charset=utf-8\r\n\r\n{}\r\n",
            self.mail_to, self.mail_from, self.subject, order.placed_at.to_rfc2822(), order,
        )
    }
}

impl Notifier for FileDropNotifier {
    async fn dispatch(&self, order: &OrderNotification) -> Result<(), NotifyError> {
        tokio::fs::create_dir_all(&self.directory).await?;
        let path = self.path_for(order);
        tokio::fs::write(&path, self.render(order)).await?;
        info!(order_id = %order.order_id, path = %path.display(), "Order notification written");
        Ok(())
    }
}
