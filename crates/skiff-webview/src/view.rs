//! Web View Shell
//!
//! Orchestrates navigation, zoom, and input routing against a replaceable
//! page collaborator. The host feeds events in through
//! [`WebView::handle_event`] and pumps deferred continuations with
//! [`WebView::pump`] once per loop turn.

use std::rc::Rc;

use url::Url;

use crate::dns::{DnsLookup, DnsResolver};
use crate::engine::{HitTestResult, PageAction, PageHandle, ScriptWorld, WebPage};
use crate::input::{
    ContextMenuReason, InputEvent, InputRouter, NewTabMode, Point, RouterDelegate, Surface,
    WheelEvent,
};
use crate::navigation::{classify, search_url, Disposition};
use crate::plugins::PluginHook;
use crate::request::{LoadRequest, Operation};
use crate::scripts;
use crate::settings::Settings;
use crate::task::{Task, TaskQueue};
use crate::zoom::ZoomController;

/// Title reported for pages with nothing better to show
const EMPTY_PAGE_TITLE: &str = "Empty page";

/// Blank-page marker address
const BLANK_PAGE: &str = "about:blank";

/// Outbound notifications to the embedding shell
pub trait ViewDelegate {
    fn zoom_changed(&self, level: usize) {
        let _ = level;
    }

    fn focus_changed(&self, focused: bool) {
        let _ = focused;
    }

    /// The view wants a URL opened in a new tab; tab containers live
    /// outside this crate.
    fn open_in_new_tab(&self, url: &Url, mode: NewTabMode) {
        let _ = (url, mode);
    }

    fn url_changed(&self, url: &Url) {
        let _ = url;
    }

    /// Deferred context-menu re-raise, delivered from the pump
    fn context_menu_requested(&self, position: Point, reason: ContextMenuReason) {
        let _ = (position, reason);
    }

    fn privacy_changed(&self, private: bool) {
        let _ = private;
    }

    fn viewport_resized(&self, width: u32, height: u32) {
        let _ = (width, height);
    }

    /// Rescaled wheel event to re-deliver to the rendering child
    fn forward_wheel_to_child(&self, event: &WheelEvent) {
        let _ = event;
    }
}

/// Shortcut scope for an edit action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutScope {
    Widget,
    WidgetWithChildren,
    Window,
}

/// An engine-native action bound to a label and accelerator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionBinding {
    pub action: PageAction,
    pub label: &'static str,
    pub shortcut: &'static str,
    pub scope: ShortcutScope,
}

/// Standard edit-action set, rebuilt on every page swap
fn standard_actions() -> Vec<ActionBinding> {
    use PageAction::*;
    let edit = |action, label, shortcut| ActionBinding {
        action,
        label,
        shortcut,
        scope: ShortcutScope::WidgetWithChildren,
    };
    vec![
        edit(Undo, "&Undo", "Ctrl+Z"),
        edit(Redo, "&Redo", "Ctrl+Shift+Z"),
        edit(Cut, "&Cut", "Ctrl+X"),
        edit(Copy, "&Copy", "Ctrl+C"),
        edit(Paste, "&Paste", "Ctrl+V"),
        edit(SelectAll, "Select All", "Ctrl+A"),
        ActionBinding {
            action: Reload,
            label: "&Reload",
            shortcut: "",
            scope: ShortcutScope::Widget,
        },
        ActionBinding {
            action: Stop,
            label: "S&top",
            shortcut: "",
            scope: ShortcutScope::Widget,
        },
    ]
}

/// Mutable view state, touched only from the view's own handlers
#[derive(Debug)]
struct ViewState {
    /// Load progress percentage; 100 means idle
    progress: u8,
    /// Whether any load has been dispatched yet
    first_load: bool,
    /// Whether the rendering child currently holds focus
    child_focused: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            progress: 100,
            first_load: false,
            child_focused: false,
        }
    }
}

/// Bare-hostname load waiting for DNS confirmation. Superseded (dropped)
/// whenever a newer classification is issued, so a late completion can
/// never retroactively navigate.
struct PendingResolve {
    lookup: DnsLookup,
    url: Url,
    request: LoadRequest,
}

/// Everything the router acts on; split from [`WebView`] so routing can
/// borrow the router and the shell disjointly.
pub struct ViewShell {
    page: Option<PageHandle>,
    delegate: Rc<dyn ViewDelegate>,
    hook: Rc<dyn PluginHook>,
    resolver: Rc<dyn DnsResolver>,
    settings: Settings,
    zoom: ZoomController,
    state: ViewState,
    queue: TaskQueue,
    pending_resolve: Option<PendingResolve>,
    actions: Vec<ActionBinding>,
}

impl ViewShell {
    fn new(
        delegate: Rc<dyn ViewDelegate>,
        hook: Rc<dyn PluginHook>,
        resolver: Rc<dyn DnsResolver>,
        settings: Settings,
    ) -> Self {
        let zoom = ZoomController::new(settings.default_zoom_level());
        Self {
            page: None,
            delegate,
            hook,
            resolver,
            settings,
            zoom,
            state: ViewState::default(),
            queue: TaskQueue::new(),
            pending_resolve: None,
            actions: Vec::new(),
        }
    }

    /// Run a closure against the page collaborator. Calling view
    /// operations before a page is attached is a contract violation;
    /// release builds degrade to a no-op.
    fn with_page<R>(&self, f: impl FnOnce(&mut dyn WebPage) -> R) -> Option<R> {
        debug_assert!(self.page.is_some(), "page collaborator not attached");
        let page = self.page.as_ref()?;
        let mut page = page.borrow_mut();
        Some(f(&mut *page))
    }

    fn current_url(&self) -> Option<Url> {
        self.with_page(|p| p.url()).flatten()
    }

    fn apply_zoom(&mut self) {
        let factor = self.zoom.factor();
        self.with_page(|p| p.set_zoom_factor(factor));
        self.delegate.zoom_changed(self.zoom.level());
    }

    fn zoom_reset_to_default(&mut self) {
        let default = self.settings.default_zoom_level();
        self.zoom.set_default_level(default);
        if self.zoom.reset() {
            self.apply_zoom();
        }
    }

    fn load(&mut self, request: LoadRequest) {
        // Empty input classifies to nothing and must leave all state
        // untouched, including an in-flight hostname probe.
        let Some(disposition) = classify(&request) else {
            return;
        };

        // Any new classification supersedes an in-flight hostname probe.
        self.pending_resolve = None;

        match disposition {
            Disposition::Script(source) => {
                self.with_page(|p| p.run_script(&source, ScriptWorld::Main));
            }
            Disposition::Load(url) => self.dispatch(&url, &request),
            Disposition::ResolveHost { host, url } => {
                log::debug!("probing hostname {host} for {}", request.target());
                let lookup = self.resolver.lookup(&host);
                self.pending_resolve = Some(PendingResolve {
                    lookup,
                    url,
                    request,
                });
            }
            Disposition::Search(url) => {
                log::info!("searching: {}", request.target());
                self.load_url(&url);
            }
        }
    }

    fn dispatch(&mut self, url: &Url, request: &LoadRequest) {
        match request.operation() {
            Operation::Get => self.load_url(url),
            Operation::Post => {
                let script = scripts::send_post_data(url, request.body().unwrap_or_default());
                self.with_page(|p| p.run_script(&script, ScriptWorld::Application));
                self.state.first_load = true;
            }
        }
    }

    fn load_url(&mut self, url: &Url) {
        log::info!("Loading: {url}");
        self.with_page(|p| p.load(url));
        self.state.first_load = true;
    }

    /// Run deferred continuations: the DNS continuation first, then the
    /// zero-delay task queue, FIFO. Only entry point for either.
    fn pump(&mut self) {
        if let Some(mut pending) = self.pending_resolve.take() {
            match pending.lookup.poll() {
                None => self.pending_resolve = Some(pending),
                // Taking the slot re-validates currency: a superseded
                // probe was already dropped and can never land here.
                Some(Ok(())) => {
                    log::debug!("hostname confirmed, loading {}", pending.url);
                    self.dispatch(&pending.url, &pending.request);
                }
                Some(Err(e)) => {
                    log::debug!("hostname probe failed ({e}), falling back to search");
                    let url = search_url(pending.request.target());
                    self.load_url(&url);
                }
            }
        }

        while let Some(task) = self.queue.pop() {
            match task {
                Task::RaiseContextMenu { position, reason } => {
                    self.delegate.context_menu_requested(position, reason);
                }
            }
        }
    }
}

impl RouterDelegate for ViewShell {
    fn hit_test(&self, position: Point) -> HitTestResult {
        self.with_page(|p| p.hit_test(position)).unwrap_or_default()
    }

    fn zoom_in(&mut self) {
        if self.zoom.zoom_in() {
            self.apply_zoom();
        }
    }

    fn zoom_out(&mut self) {
        if self.zoom.zoom_out() {
            self.apply_zoom();
        }
    }

    fn zoom_reset(&mut self) {
        self.zoom_reset_to_default();
    }

    fn navigate_back(&mut self) {
        let navigated = self
            .with_page(|p| {
                if p.can_go_back() {
                    p.go_back();
                    true
                } else {
                    false
                }
            })
            .unwrap_or(false);
        if navigated {
            if let Some(url) = self.current_url() {
                self.delegate.url_changed(&url);
            }
        }
    }

    fn navigate_forward(&mut self) {
        let navigated = self
            .with_page(|p| {
                if p.can_go_forward() {
                    p.go_forward();
                    true
                } else {
                    false
                }
            })
            .unwrap_or(false);
        if navigated {
            if let Some(url) = self.current_url() {
                self.delegate.url_changed(&url);
            }
        }
    }

    fn open_in_new_tab(&mut self, url: Url, mode: NewTabMode) {
        self.delegate.open_in_new_tab(&url, mode);
    }

    fn toggle_audio_mute(&mut self) {
        self.with_page(|p| {
            let muted = p.is_audio_muted();
            p.set_audio_muted(!muted);
        });
    }

    fn is_full_screen(&self) -> bool {
        self.with_page(|p| p.is_full_screen()).unwrap_or(false)
    }

    fn exit_full_screen(&mut self) {
        self.with_page(|p| p.trigger_action(PageAction::ExitFullScreen));
    }

    fn focus_changed(&mut self, focused: bool) {
        self.state.child_focused = focused;
        self.delegate.focus_changed(focused);
    }

    fn forward_wheel_to_child(&mut self, event: WheelEvent) {
        self.delegate.forward_wheel_to_child(&event);
    }

    fn defer_context_menu(&mut self, position: Point, reason: ContextMenuReason) {
        self.queue.post(Task::RaiseContextMenu { position, reason });
    }
}

/// The interactive view: input router plus shell
pub struct WebView {
    router: InputRouter,
    shell: ViewShell,
}

impl WebView {
    /// Create a view wired to its collaborators. The container surface is
    /// watched from the start; the rendering child is watched once
    /// [`WebView::child_attached`] reports it.
    pub fn new(
        delegate: Rc<dyn ViewDelegate>,
        hook: Rc<dyn PluginHook>,
        resolver: Rc<dyn DnsResolver>,
        settings: Settings,
    ) -> Self {
        let mut router = InputRouter::new(hook.clone(), 3.0);
        router.watch(Surface::Container);
        Self {
            router,
            shell: ViewShell::new(delegate, hook, resolver, settings),
        }
    }

    /// Platform lines-per-notch wheel setting (3.0 disables rescaling)
    pub fn set_wheel_scroll_lines(&mut self, lines: f64) {
        self.router.set_wheel_scroll_lines(lines);
    }

    /// Attach or swap the page collaborator. A no-op when the handle is
    /// identical to the current one.
    pub fn set_page(&mut self, page: PageHandle) {
        if let Some(current) = &self.shell.page {
            if Rc::ptr_eq(current, &page) {
                return;
            }
        }

        let private = page.borrow().is_private();
        self.shell.page = Some(page);

        self.shell.delegate.privacy_changed(private);
        self.shell.zoom_reset_to_default();
        self.shell.actions = standard_actions();
        self.shell.hook.page_created();
    }

    pub fn page(&self) -> Option<PageHandle> {
        self.shell.page.clone()
    }

    /// Resolve and dispatch a navigation request
    pub fn load(&mut self, request: LoadRequest) {
        self.shell.load(request);
    }

    /// Resolve and dispatch raw address-bar text
    pub fn load_text(&mut self, text: &str) {
        self.shell.load(LoadRequest::get(text));
    }

    /// Filter one input event. Returns `true` when the event was handled
    /// and default processing should be skipped.
    pub fn handle_event(&mut self, surface: Surface, event: &InputEvent) -> bool {
        self.router.route(surface, event, &mut self.shell)
    }

    /// Run deferred continuations. Call once per host loop turn.
    pub fn pump(&mut self) {
        self.shell.pump();
    }

    /// A new rendering child was attached; re-install the filter on it
    pub fn child_attached(&mut self) {
        self.router.watch(Surface::Child);
    }

    /// The view was reparented; re-install the filter on the container
    pub fn reparented(&mut self) {
        self.router.watch(Surface::Container);
    }

    /// Title shown for this view: engine title, else the address without
    /// its fragment, else a fixed placeholder for blank pages.
    pub fn title(&self) -> String {
        let mut title = self.shell.with_page(|p| p.title()).unwrap_or_default();

        if title.is_empty() {
            if let Some(mut url) = self.shell.current_url() {
                url.set_fragment(None);
                title = url.to_string();
            }
        }

        if title.is_empty() || title == BLANK_PAGE {
            return EMPTY_PAGE_TITLE.to_string();
        }
        title
    }

    pub fn load_started(&mut self) {
        self.shell.state.progress = 0;
    }

    pub fn load_progress(&mut self, progress: u8) {
        self.shell.state.progress = progress.min(100);
    }

    pub fn load_finished(&mut self) {
        self.shell.state.progress = 100;
    }

    pub fn is_loading(&self) -> bool {
        self.shell.state.progress < 100
    }

    pub fn loading_progress(&self) -> u8 {
        self.shell.state.progress
    }

    /// Whether any load has been dispatched on this view
    pub fn has_loaded(&self) -> bool {
        self.shell.state.first_load
    }

    /// Which surface should receive synthetic input
    pub fn input_surface(&self) -> Surface {
        if self.shell.state.child_focused {
            Surface::Child
        } else {
            Surface::Container
        }
    }

    pub fn zoom_level(&self) -> usize {
        self.shell.zoom.level()
    }

    pub fn zoom_factor(&self) -> f64 {
        self.shell.zoom.factor()
    }

    pub fn zoom_in(&mut self) {
        RouterDelegate::zoom_in(&mut self.shell);
    }

    pub fn zoom_out(&mut self) {
        RouterDelegate::zoom_out(&mut self.shell);
    }

    pub fn zoom_reset(&mut self) {
        self.shell.zoom_reset_to_default();
    }

    pub fn set_zoom_level(&mut self, level: usize) {
        if self.shell.zoom.set_level(level) {
            self.shell.apply_zoom();
        }
    }

    /// Persist a new default zoom level
    pub fn set_default_zoom_level(&mut self, level: usize) {
        self.shell.zoom.set_default_level(level);
        if let Err(e) = self.shell.settings.set_default_zoom_level(level) {
            log::warn!("failed to persist zoom level: {e}");
        }
    }

    pub fn back(&mut self) {
        self.shell.navigate_back();
    }

    pub fn forward(&mut self) {
        self.shell.navigate_forward();
    }

    /// Standard edit-action set for the current page
    pub fn actions(&self) -> &[ActionBinding] {
        &self.shell.actions
    }

    pub fn trigger_action(&mut self, action: PageAction) {
        self.shell.with_page(|p| p.trigger_action(action));
    }

    /// Open a URL in a new tab through the embedding shell
    pub fn open_in_new_tab(&mut self, url: Url, mode: NewTabMode) {
        RouterDelegate::open_in_new_tab(&mut self.shell, url, mode);
    }

    /// Search the page's current text selection in a new tab
    pub fn search_selected_text(&mut self, mode: NewTabMode) {
        let text = self
            .shell
            .with_page(|p| p.selected_text())
            .unwrap_or_default();
        if text.is_empty() {
            return;
        }
        self.shell
            .delegate
            .open_in_new_tab(&search_url(&text), mode);
    }

    /// Report a viewport resize to the embedding shell
    pub fn resized(&mut self, width: u32, height: u32) {
        self.shell.delegate.viewport_resized(width, height);
    }
}
