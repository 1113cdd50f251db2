use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::TextSource;
use crate::error::ProviderError;
use crate::prompt::Prompt;

/// Bounds how long a [`TextSource`] may take to answer.
///
/// Each call runs on a worker thread. When the deadline passes the caller
/// gets [`ProviderError::Timeout`] and the worker is left to finish on its
/// own; its late answer is dropped. A source that is still busy holds the
/// lock, so the next call waits behind it (and may time out as well).
pub struct TimeoutSource<S> {
    model_id: String,
    inner: Arc<Mutex<S>>,
    timeout: Duration,
}

impl<S: TextSource + Send + 'static> TimeoutSource<S> {
    pub fn new(source: S, timeout: Duration) -> Self {
        Self {
            model_id: source.model_id().to_string(),
            inner: Arc::new(Mutex::new(source)),
            timeout,
        }
    }
}

impl<S: TextSource + Send + 'static> TextSource for TimeoutSource<S> {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn complete(&mut self, prompt: &Prompt) -> Result<String, ProviderError> {
        let (tx, rx) = mpsc::channel();
        let inner = Arc::clone(&self.inner);
        let prompt = prompt.clone();

        thread::spawn(move || {
            let result = match inner.lock() {
                Ok(mut source) => source.complete(&prompt),
                Err(_) => Err(ProviderError::Unavailable("text source panicked".into())),
            };
            // receiver is gone if the caller already timed out
            let _ = tx.send(result);
        });

        match rx.recv_timeout(self.timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(ProviderError::Timeout(self.timeout)),
            Err(RecvTimeoutError::Disconnected) => {
                Err(ProviderError::Unavailable("text source worker exited".into()))
            }
        }
    }
}
