//! Rendering Engine Interface
//!
//! The view never owns the engine; it drives a replaceable page
//! collaborator through this trait.

use std::cell::RefCell;
use std::rc::Rc;

use url::Url;

use crate::input::Point;

/// Engine-native page actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    SelectAll,
    Reload,
    Stop,
    ExitFullScreen,
    SavePage,
}

/// Script execution world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptWorld {
    /// The page's own world
    #[default]
    Main,
    /// Isolated world for browser-synthesized scripts
    Application,
}

/// Result of a hit-test against rendered content
#[derive(Debug, Clone, Default)]
pub struct HitTestResult {
    /// Link target under the point, if any
    pub link_url: Option<Url>,
}

/// A page hosted by the external rendering engine
///
/// Shared-but-not-owned: the view holds a handle and must tolerate the
/// page being swapped between any two calls.
pub trait WebPage {
    /// Begin loading a URL (GET; bodies go through [`WebPage::run_script`])
    fn load(&mut self, url: &Url);

    /// Execute script source in the given world
    fn run_script(&mut self, source: &str, world: ScriptWorld);

    /// Apply a rendering scale factor
    fn set_zoom_factor(&mut self, factor: f64);

    /// Trigger an engine-native page action
    fn trigger_action(&mut self, action: PageAction);

    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    fn go_back(&mut self);
    fn go_forward(&mut self);

    /// Query rendered content at a point
    fn hit_test(&self, position: Point) -> HitTestResult;

    fn set_audio_muted(&mut self, muted: bool);
    fn is_audio_muted(&self) -> bool;

    fn is_full_screen(&self) -> bool;

    /// Engine-reported title (may be empty)
    fn title(&self) -> String;

    /// Current address, if any
    fn url(&self) -> Option<Url>;

    /// Currently selected text (empty when nothing is selected)
    fn selected_text(&self) -> String;

    /// Whether the page runs in a private profile
    fn is_private(&self) -> bool;
}

/// Shared handle to a page collaborator
pub type PageHandle = Rc<RefCell<dyn WebPage>>;
