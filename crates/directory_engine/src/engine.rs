use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use directory_core::RequestId;
use directory_logging::{directory_debug, directory_error};
use tokio_util::sync::CancellationToken;

use crate::fetch::{FetchSettings, PageFetcher, ReqwestPageFetcher};
use crate::{EngineEvent, FetchError};

enum EngineCommand {
    FetchPage {
        request_id: RequestId,
        page: u32,
        page_size: u32,
    },
    CancelAll,
}

/// Runs page fetches on a background tokio runtime and reports completions as events.
///
/// Dropping the handle cancels every outstanding fetch; a cancelled fetch never
/// produces an event.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let fetcher = ReqwestPageFetcher::new(settings)?;
        Ok(Self::with_fetcher(Arc::new(fetcher)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn PageFetcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    directory_error!("Failed to start fetch runtime: {}", err);
                    return;
                }
            };
            let mut cancel = CancellationToken::new();
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::FetchPage {
                        request_id,
                        page,
                        page_size,
                    } => {
                        let fetcher = fetcher.clone();
                        let event_tx = event_tx.clone();
                        let cancel = cancel.clone();
                        runtime.spawn(async move {
                            tokio::select! {
                                biased;
                                _ = cancel.cancelled() => {
                                    directory_debug!("request {} cancelled", request_id);
                                }
                                result = fetcher.fetch_page(page, page_size) => {
                                    // The receiver is gone once the handle is dropped.
                                    let _ = event_tx.send(EngineEvent::PageFetched {
                                        request_id,
                                        page,
                                        result,
                                    });
                                }
                            }
                        });
                    }
                    EngineCommand::CancelAll => {
                        cancel.cancel();
                        cancel = CancellationToken::new();
                    }
                }
            }
            cancel.cancel();
        });

        Self { cmd_tx, event_rx }
    }

    pub fn fetch_page(&self, request_id: RequestId, page: u32, page_size: u32) {
        let _ = self.cmd_tx.send(EngineCommand::FetchPage {
            request_id,
            page,
            page_size,
        });
    }

    pub fn cancel_all(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CancelAll);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}
