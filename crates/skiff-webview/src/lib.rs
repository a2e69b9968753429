//! Skiff WebView - Embeddable Web View Shell
//!
//! The interactive view component of the Skiff browser shell. It sits
//! between the windowing layer and an external rendering engine:
//! raw input events are filtered through an [`InputRouter`], user-entered
//! addresses are resolved by the navigation classifier, and the
//! [`WebView`] orchestrates both against a replaceable page collaborator.
//!
//! The rendering engine itself is an opaque collaborator behind the
//! [`WebPage`] trait. The host owns the event loop; it feeds events into
//! [`WebView::handle_event`] and calls [`WebView::pump`] once per loop
//! turn to run deferred continuations (context-menu re-raise, DNS probe
//! completion).

pub mod dns;
pub mod engine;
pub mod input;
pub mod navigation;
pub mod plugins;
pub mod request;
pub mod scripts;
pub mod settings;
pub mod task;
pub mod view;
pub mod zoom;

pub use dns::{DnsError, DnsLookup, DnsResolver, SystemResolver};
pub use engine::{HitTestResult, PageAction, PageHandle, ScriptWorld, WebPage};
pub use input::{
    ContextMenuReason, InputEvent, InputRouter, Key, KeyEvent, Modifiers, MouseButton,
    MouseEvent, NewTabMode, PendingClick, Point, RouterDelegate, Surface, WheelEvent,
};
pub use navigation::{classify, is_url_valid, search_url, Disposition};
pub use plugins::{NoopHook, PluginHook};
pub use request::{LoadRequest, Operation};
pub use settings::Settings;
pub use task::{Task, TaskQueue};
pub use view::{ActionBinding, ShortcutScope, ViewDelegate, WebView};
pub use zoom::{ZoomController, DEFAULT_ZOOM_INDEX, ZOOM_LEVELS};
