use std::sync::Arc;
use std::thread;

use tracing::debug;
use tracing::warn;

use crate::contracts::OpenError;
use crate::contracts::OpenRequest;

const ALLOWED_SCHEMES: &[&str] = &["https://", "http://", "mailto:"];

pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<(), OpenError>;
}

/// Opens links in the user's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserOpener;

impl LinkOpener for BrowserOpener {
    fn open(&self, url: &str) -> Result<(), OpenError> {
        ensure_web_url(url)?;
        webbrowser::open(url).map_err(|source| OpenError::Launch {
            url: url.to_string(),
            source,
        })
    }
}

/// Accepts requests and drops them, for sessions without a browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledOpener;

impl LinkOpener for DisabledOpener {
    fn open(&self, url: &str) -> Result<(), OpenError> {
        debug!(url, "external open disabled; ignoring");
        Ok(())
    }
}

pub fn ensure_web_url(url: &str) -> Result<(), OpenError> {
    let lower = url.to_ascii_lowercase();
    if ALLOWED_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
        Ok(())
    } else {
        Err(OpenError::UnsupportedScheme(url.to_string()))
    }
}

/// Sleeps for `request.delay`, then opens `request.url` on the calling thread.
pub fn open_after_delay(opener: &dyn LinkOpener, request: &OpenRequest) -> Result<(), OpenError> {
    thread::sleep(request.delay());
    opener.open(&request.url)
}

/// Opens `request.url` on a detached thread after `request.delay`.
///
/// Fire-and-forget: there is no handle, no retry and no cancellation. A failed
/// open is logged and otherwise unobservable to the caller.
pub fn schedule_open(opener: Arc<dyn LinkOpener>, request: OpenRequest) {
    debug!(url = %request.url, delay_ms = request.delay_ms, "scheduling external open");
    let spawn = thread::Builder::new()
        .name("folio-open".to_string())
        .spawn(move || {
            if let Err(err) = open_after_delay(opener.as_ref(), &request) {
                warn!(error = %err, "external open failed");
            }
        });
    if let Err(err) = spawn {
        warn!(error = %err, "could not spawn external open thread");
    }
}
