use crate::models::SiteData;
use crate::notify::TelegramNotifier;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<SiteData>>,
    pub notifier: Option<Arc<TelegramNotifier>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: SiteData, notifier: Option<TelegramNotifier>) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            notifier: notifier.map(Arc::new),
        }
    }
}
