use directory_core::{Effect, Msg};
use directory_engine::{EngineEvent, EngineHandle, FetchError, FetchSettings};
use directory_logging::{directory_debug, directory_info, directory_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        directory_info!("Fetching from {}/{}", settings.base_url, settings.collection);
        let engine = EngineHandle::new(settings)?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage {
                    request_id,
                    page,
                    page_size,
                } => {
                    directory_info!(
                        "FetchPage request_id={} page={} page_size={}",
                        request_id,
                        page,
                        page_size
                    );
                    self.engine.fetch_page(request_id, page, page_size);
                }
                Effect::CancelFetches => {
                    directory_debug!("Cancelling outstanding fetches");
                    self.engine.cancel_all();
                }
            }
        }
    }

    /// Drains completed fetches as controller messages.
    pub fn poll(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PageFetched {
            request_id,
            page,
            result,
        } => Msg::PageFetched {
            request_id,
            page,
            result: result.map_err(|err| {
                directory_warn!("Request {} for page {} failed: {}", request_id, page, err);
                err.to_string()
            }),
        },
    }
}
