//! Headless web-view controller.
//!
//! Owns the view lifecycle (`Uninitialized → Ready → Destroyed`), the
//! current canonical URL, visibility and the loading indicator. Input comes
//! from a [`UrlField`] and a [`GrabHandle`] through subscriptions taken in
//! [`WebView::setup`] and released in [`WebView::destroy`] (or on drop).
//! Actual page rendering is out of scope; a load is recorded and published
//! as [`ViewEvent::Loaded`].

mod state;

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::admission::AdmissionPolicy;
use crate::events::{EventHub, Subscription};
use crate::surface::{GrabHandle, SurfaceSize, UrlField};

pub use state::{Lifecycle, LifecycleError, SubmitError, ViewEvent, ViewSettings};
use state::ViewState;

struct Shared {
    settings: ViewSettings,
    policy: Arc<AdmissionPolicy>,
    state: Mutex<ViewState>,
    events: EventHub<ViewEvent>,
}

impl Shared {
    fn state(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(|p| p.into_inner())
    }

    // Events go out after the state lock is released so listeners may query the view.
    fn publish(&self, events: impl IntoIterator<Item = ViewEvent>) {
        for event in events {
            self.events.emit(&event);
        }
    }

    fn submit(&self, raw: &str) -> Result<String, SubmitError> {
        let lifecycle = self.state().lifecycle;
        if lifecycle != Lifecycle::Ready {
            tracing::debug!(%lifecycle, "submission ignored");
            return Err(SubmitError::NotReady(lifecycle));
        }

        match self.policy.normalize_and_admit(raw).into_result() {
            Ok(url) => {
                self.load(&url);
                Ok(url)
            }
            Err(reason) => {
                tracing::warn!(input = raw, %reason, "URL rejected");
                self.publish([ViewEvent::Rejected {
                    input: raw.to_string(),
                    reason: reason.clone(),
                }]);
                Err(SubmitError::Rejected(reason))
            }
        }
    }

    fn load(&self, url: &str) {
        let mut events = vec![ViewEvent::Loaded(url.to_string())];
        {
            let mut st = self.state();
            if st.lifecycle != Lifecycle::Ready {
                return;
            }
            st.current_url = Some(url.to_string());
            events.extend(st.set_loading(true));
            st.hide_in = Some(self.settings.loading_hold);
        }
        tracing::info!(url, "loading URL");
        self.publish(events);
    }

    fn set_loading(&self, on: bool) {
        let event = {
            let mut st = self.state();
            if st.lifecycle != Lifecycle::Ready {
                return;
            }
            st.set_loading(on)
        };
        self.publish(event);
    }
}

/// Controller for one embedded web surface.
pub struct WebView {
    shared: Arc<Shared>,
    subscriptions: Vec<Subscription>,
}

impl std::fmt::Debug for WebView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebView")
            .field("state", &self.state())
            .field("current_url", &self.current_url())
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}

impl WebView {
    pub fn new(settings: ViewSettings, policy: Arc<AdmissionPolicy>) -> Self {
        Self {
            shared: Arc::new(Shared {
                settings,
                policy,
                state: Mutex::new(ViewState::default()),
                events: EventHub::new(),
            }),
            subscriptions: Vec::new(),
        }
    }

    /// Wires the view to its inputs and loads the default URL.
    ///
    /// The field, when present, gets the default URL as its text and every
    /// committed edit is submitted. Grabbing raises the loading indicator,
    /// releasing lowers it. The default URL is trusted configuration and is
    /// loaded without admission.
    pub fn setup(&mut self, grab: &GrabHandle, field: Option<&UrlField>) -> Result<(), LifecycleError> {
        match self.state() {
            Lifecycle::Uninitialized => {}
            Lifecycle::Ready => return Err(LifecycleError::AlreadySetUp),
            Lifecycle::Destroyed => return Err(LifecycleError::Destroyed),
        }

        let default_url = self.shared.settings.default_url.clone();

        match field {
            Some(field) => {
                let shared = Arc::clone(&self.shared);
                self.subscriptions.push(field.end_edit().subscribe(move |text: &String| {
                    // Outcome is logged and published by `submit`.
                    let _ = shared.submit(text);
                }));
                field.set_text(&default_url);
            }
            None => tracing::warn!("URL field missing; only programmatic submissions will load"),
        }

        let shared = Arc::clone(&self.shared);
        self.subscriptions
            .push(grab.select_entered().subscribe(move |i| {
                tracing::debug!(interactor = %i.interactor, "grabbed");
                shared.set_loading(true);
            }));
        let shared = Arc::clone(&self.shared);
        self.subscriptions
            .push(grab.select_exited().subscribe(move |i| {
                tracing::debug!(interactor = %i.interactor, "released");
                shared.set_loading(false);
            }));

        self.shared.state().lifecycle = Lifecycle::Ready;
        tracing::info!(subscriptions = self.subscriptions.len(), "web view ready");

        self.shared.load(&default_url);
        Ok(())
    }

    /// Normalizes and admits `raw`; on acceptance the canonical URL becomes current.
    ///
    /// A rejected URL leaves the previous content in place.
    pub fn submit(&self, raw: &str) -> Result<String, SubmitError> {
        self.shared.submit(raw)
    }

    /// Flips visibility and returns the new value.
    pub fn toggle_visibility(&self) -> Result<bool, LifecycleError> {
        let visible = {
            let mut st = self.shared.state();
            if st.lifecycle != Lifecycle::Ready {
                return Err(LifecycleError::NotReady(st.lifecycle));
            }
            st.visible = !st.visible;
            st.visible
        };
        self.shared.publish([ViewEvent::VisibilityChanged(visible)]);
        Ok(visible)
    }

    /// Advances the loading-indicator timer by `elapsed`.
    pub fn advance(&self, elapsed: Duration) {
        let event = {
            let mut st = self.shared.state();
            if st.lifecycle != Lifecycle::Ready {
                return;
            }
            st.advance(elapsed)
        };
        self.shared.publish(event);
    }

    /// Releases every input subscription and moves to `Destroyed`. Idempotent.
    pub fn destroy(&mut self) {
        self.subscriptions.clear();
        let mut st = self.shared.state();
        if st.lifecycle != Lifecycle::Destroyed {
            st.lifecycle = Lifecycle::Destroyed;
            st.hide_in = None;
            tracing::info!("web view destroyed");
        }
    }

    pub fn state(&self) -> Lifecycle {
        self.shared.state().lifecycle
    }

    pub fn current_url(&self) -> Option<String> {
        self.shared.state().current_url.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.shared.state().visible
    }

    pub fn is_loading(&self) -> bool {
        self.shared.state().loading
    }

    pub fn size(&self) -> SurfaceSize {
        self.shared.settings.size
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.shared.settings
    }

    pub fn events(&self) -> &EventHub<ViewEvent> {
        &self.shared.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admission::AdmissionError;

    fn settings() -> ViewSettings {
        ViewSettings {
            default_url: "https://docs.google.com/presentation/".to_string(),
            size: SurfaceSize::default(),
            loading_hold: Duration::from_secs(1),
        }
    }

    fn ready_view() -> (WebView, GrabHandle, UrlField) {
        let mut view = WebView::new(settings(), Arc::new(AdmissionPolicy::default()));
        let grab = GrabHandle::new();
        let field = UrlField::new();
        view.setup(&grab, Some(&field)).unwrap();
        (view, grab, field)
    }

    fn record(view: &WebView) -> (Arc<Mutex<Vec<ViewEvent>>>, Subscription) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let l = Arc::clone(&log);
        let sub = view
            .events()
            .subscribe(move |e: &ViewEvent| l.lock().unwrap().push(e.clone()));
        (log, sub)
    }

    #[test]
    fn submit_before_setup_is_not_ready() {
        let view = WebView::new(settings(), Arc::new(AdmissionPolicy::default()));
        assert_eq!(
            view.submit("youtube.com/watch?v=a"),
            Err(SubmitError::NotReady(Lifecycle::Uninitialized))
        );
        assert_eq!(view.current_url(), None);
    }

    #[test]
    fn setup_loads_default_and_fills_field() {
        let (view, _grab, field) = ready_view();
        assert_eq!(view.state(), Lifecycle::Ready);
        assert_eq!(
            view.current_url().as_deref(),
            Some("https://docs.google.com/presentation/")
        );
        assert_eq!(field.text(), "https://docs.google.com/presentation/");
        assert!(view.is_loading());
    }

    #[test]
    fn setup_twice_is_an_error() {
        let (mut view, grab, field) = ready_view();
        assert_eq!(
            view.setup(&grab, Some(&field)),
            Err(LifecycleError::AlreadySetUp)
        );
    }

    #[test]
    fn accepted_submit_replaces_current_url() {
        let (view, _grab, _field) = ready_view();
        let url = view
            .submit("https://docs.google.com/presentation/d/abc123/view")
            .unwrap();
        assert_eq!(url, "https://docs.google.com/presentation/d/abc123/edit");
        assert_eq!(view.current_url().as_deref(), Some(url.as_str()));
    }

    #[test]
    fn rejected_submit_keeps_previous_content() {
        let (view, _grab, _field) = ready_view();
        view.submit("youtube.com/watch?v=keep").unwrap();
        let (log, _sub) = record(&view);

        let err = view.submit("https://example.com").unwrap_err();
        assert!(matches!(
            err,
            SubmitError::Rejected(AdmissionError::NoRuleMatched { .. })
        ));
        assert_eq!(
            view.current_url().as_deref(),
            Some("https://youtube.com/watch?v=keep")
        );
        assert_eq!(
            *log.lock().unwrap(),
            vec![ViewEvent::Rejected {
                input: "https://example.com".to_string(),
                reason: AdmissionError::NoRuleMatched {
                    normalized: "https://example.com".to_string()
                },
            }]
        );
    }

    #[test]
    fn field_commit_submits() {
        let (view, _grab, field) = ready_view();
        field.commit("www.youtube.com/watch?v=f1");
        assert_eq!(
            view.current_url().as_deref(),
            Some("https://www.youtube.com/watch?v=f1")
        );
    }

    #[test]
    fn loading_indicator_hides_after_hold() {
        let (view, _grab, _field) = ready_view();
        assert!(view.is_loading());
        view.advance(Duration::from_millis(999));
        assert!(view.is_loading());
        view.advance(Duration::from_millis(1));
        assert!(!view.is_loading());
    }

    #[test]
    fn grab_raises_and_release_lowers_indicator() {
        let (view, grab, _field) = ready_view();
        view.advance(Duration::from_secs(2));
        assert!(!view.is_loading());
        grab.grab("right-hand");
        assert!(view.is_loading());
        grab.release("right-hand");
        assert!(!view.is_loading());
    }

    #[test]
    fn toggle_visibility_flips_and_publishes() {
        let (view, _grab, _field) = ready_view();
        let (log, _sub) = record(&view);
        assert!(view.is_visible());
        assert_eq!(view.toggle_visibility(), Ok(false));
        assert_eq!(view.toggle_visibility(), Ok(true));
        assert_eq!(
            *log.lock().unwrap(),
            vec![
                ViewEvent::VisibilityChanged(false),
                ViewEvent::VisibilityChanged(true)
            ]
        );
    }

    #[test]
    fn destroy_releases_subscriptions_and_blocks_input() {
        let (mut view, grab, field) = ready_view();
        assert_eq!(field.end_edit().listener_count(), 1);
        assert_eq!(grab.select_entered().listener_count(), 1);
        assert_eq!(grab.select_exited().listener_count(), 1);

        view.destroy();
        assert_eq!(view.state(), Lifecycle::Destroyed);
        assert_eq!(field.end_edit().listener_count(), 0);
        assert_eq!(grab.select_entered().listener_count(), 0);
        assert_eq!(grab.select_exited().listener_count(), 0);

        assert_eq!(
            view.submit("youtube.com/watch?v=late"),
            Err(SubmitError::NotReady(Lifecycle::Destroyed))
        );
        assert_eq!(
            view.toggle_visibility(),
            Err(LifecycleError::NotReady(Lifecycle::Destroyed))
        );
        assert_eq!(view.setup(&grab, Some(&field)), Err(LifecycleError::Destroyed));

        view.destroy();
        assert_eq!(view.state(), Lifecycle::Destroyed);
    }

    #[test]
    fn dropping_view_unsubscribes() {
        let grab = GrabHandle::new();
        let field = UrlField::new();
        {
            let mut view = WebView::new(settings(), Arc::new(AdmissionPolicy::default()));
            view.setup(&grab, Some(&field)).unwrap();
            assert_eq!(field.end_edit().listener_count(), 1);
        }
        assert_eq!(field.end_edit().listener_count(), 0);
        assert_eq!(grab.select_entered().listener_count(), 0);
    }

    #[test]
    fn setup_without_field_still_accepts_programmatic_submit() {
        let mut view = WebView::new(settings(), Arc::new(AdmissionPolicy::default()));
        let grab = GrabHandle::new();
        view.setup(&grab, None).unwrap();
        assert!(view.submit("youtube.com/watch?v=p").is_ok());
    }
}
