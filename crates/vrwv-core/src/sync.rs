//! Host → client URL sync without a transport.
//!
//! The host checks its URL source every `interval` and emits it when it
//! changed since the last broadcast. Delivery is the caller's business; the
//! in-process loop below writes to a tokio channel. Clients hand received URLs
//! to [`WebView::submit`](crate::view::WebView::submit), so remote URLs still
//! pass admission.

use std::time::Duration;
use tokio::sync::{mpsc, watch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Host,
    Client,
}

impl Role {
    pub fn from_host_flag(host: bool) -> Self {
        if host {
            Role::Host
        } else {
            Role::Client
        }
    }
}

/// Change detector for the shared URL.
#[derive(Debug, Clone)]
pub struct UrlSync {
    role: Role,
    interval: Duration,
    elapsed: Duration,
    last: Option<String>,
}

impl UrlSync {
    pub fn new(role: Role, interval: Duration) -> Self {
        Self {
            role,
            interval,
            elapsed: Duration::ZERO,
            last: None,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Last URL broadcast or received.
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// Only the host may change the shared URL.
    pub fn can_change_url(&self) -> bool {
        self.role == Role::Host
    }

    /// Accumulates `elapsed`; once a full interval has passed, returns `source`
    /// if it differs from the last broadcast. Clients never broadcast.
    pub fn tick(&mut self, elapsed: Duration, source: &str) -> Option<String> {
        if self.role != Role::Host {
            return None;
        }
        self.elapsed += elapsed;
        if self.elapsed < self.interval {
            return None;
        }
        self.elapsed = Duration::ZERO;
        if self.last.as_deref() == Some(source) {
            return None;
        }
        self.last = Some(source.to_string());
        tracing::debug!(url = source, "broadcasting URL change");
        Some(source.to_string())
    }

    /// Records a URL from the host. Empty strings are ignored.
    pub fn receive(&mut self, url: &str) -> Option<String> {
        if url.is_empty() {
            return None;
        }
        self.last = Some(url.to_string());
        tracing::debug!(url, "received URL update");
        Some(url.to_string())
    }
}

/// Drives `sync` on a tokio interval, reading the current URL from `source`
/// and sending changes to `out`.
///
/// Returns once the source sender or the output receiver is dropped. A client
/// role returns immediately.
pub async fn run_host_loop(
    mut sync: UrlSync,
    source: watch::Receiver<String>,
    out: mpsc::Sender<String>,
) {
    if !sync.can_change_url() {
        tracing::debug!("sync loop not started: not host");
        return;
    }
    let period = sync.interval().max(Duration::from_millis(1));
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    // Interval ticks immediately once; the first check happens one period in.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = out.closed() => {
                tracing::debug!("sync loop stopped: receiver dropped");
                return;
            }
            _ = ticker.tick() => {}
        }
        let current = source.borrow().clone();
        if let Some(url) = sync.tick(period, &current) {
            if out.send(url).await.is_err() {
                tracing::debug!("sync loop stopped: receiver dropped");
                return;
            }
        }
        if source.has_changed().is_err() {
            tracing::debug!("sync loop stopped: source closed");
            return;
        }
    }
}
