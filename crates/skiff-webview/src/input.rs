//! Input Routing
//!
//! Event-filter state machine over the two watched surfaces: the
//! rendering child and the enclosing container. Every routable event is
//! offered to the plugin hook first; default handling runs only when no
//! plugin consumed it.

use std::rc::Rc;

use url::Url;

use crate::engine::HitTestResult;
use crate::navigation::is_url_valid;
use crate::plugins::PluginHook;

/// A position in view coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Keyboard/mouse modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }
}

/// Mouse buttons the router cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// Extra button bound to history back
    Back,
    /// Extra button bound to history forward
    Forward,
}

/// Keys with default bindings in the router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ZoomIn,
    ZoomOut,
    Plus,
    Minus,
    Digit0,
    M,
    Escape,
    /// Any other key, by platform scan code
    Other(u32),
}

/// Wheel event; `delta` is in notches, positive away from the user
#[derive(Debug, Clone, PartialEq)]
pub struct WheelEvent {
    pub position: Point,
    pub delta: f64,
    pub modifiers: Modifiers,
    /// Hardware-originated, as opposed to synthesized by the shell
    pub spontaneous: bool,
}

/// Mouse press/release/move event
#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent {
    pub button: MouseButton,
    pub position: Point,
    pub modifiers: Modifiers,
}

/// Key press/release event
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

/// Why a context menu was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuReason {
    Mouse,
    Keyboard,
    Other,
}

/// An event delivered to one of the watched surfaces
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Wheel(WheelEvent),
    MousePress(MouseEvent),
    MouseRelease(MouseEvent),
    MouseMove(MouseEvent),
    KeyPress(KeyEvent),
    KeyRelease(KeyEvent),
    FocusIn,
    FocusOut,
    ContextMenu {
        position: Point,
        reason: ContextMenuReason,
    },
}

/// Which watched surface an event originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// The engine's rendering child
    Child,
    /// The enclosing container
    Container,
}

/// Where a link opened from a click should land
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewTabMode {
    Foreground,
    Background,
}

/// Press-to-release correlation record. A release navigates only when the
/// destination under the release point exactly matches the one recorded at
/// press time, which defends against drag-released-elsewhere misfires.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingClick {
    pub url: Url,
    pub position: Point,
}

/// Actions the router triggers on the view shell
pub trait RouterDelegate {
    fn hit_test(&self, position: Point) -> HitTestResult;

    fn zoom_in(&mut self);
    fn zoom_out(&mut self);
    fn zoom_reset(&mut self);

    fn navigate_back(&mut self);
    fn navigate_forward(&mut self);

    fn open_in_new_tab(&mut self, url: Url, mode: NewTabMode);

    fn toggle_audio_mute(&mut self);

    fn is_full_screen(&self) -> bool;
    fn exit_full_screen(&mut self);

    fn focus_changed(&mut self, focused: bool);

    /// Re-deliver a synthesized wheel event to the rendering child
    fn forward_wheel_to_child(&mut self, event: WheelEvent);

    /// Schedule a context-menu re-raise after the current event returns
    fn defer_context_menu(&mut self, position: Point, reason: ContextMenuReason);
}

/// Event filter over the child and container surfaces
pub struct InputRouter {
    hook: Rc<dyn PluginHook>,
    pending: Option<PendingClick>,
    /// Platform lines-per-notch setting; 3.0 means no rescaling
    wheel_scroll_lines: f64,
    watch_child: bool,
    watch_container: bool,
}

impl InputRouter {
    pub fn new(hook: Rc<dyn PluginHook>, wheel_scroll_lines: f64) -> Self {
        Self {
            hook,
            pending: None,
            wheel_scroll_lines,
            watch_child: false,
            watch_container: false,
        }
    }

    /// Replace the platform lines-per-notch wheel setting
    pub fn set_wheel_scroll_lines(&mut self, lines: f64) {
        self.wheel_scroll_lines = lines;
    }

    /// Install the filter on a surface. Called again whenever a new child
    /// is attached or the view is reparented.
    pub fn watch(&mut self, surface: Surface) {
        match surface {
            Surface::Child => self.watch_child = true,
            Surface::Container => self.watch_container = true,
        }
    }

    /// Drop the registration for a surface
    pub fn unwatch(&mut self, surface: Surface) {
        match surface {
            Surface::Child => self.watch_child = false,
            Surface::Container => self.watch_container = false,
        }
    }

    pub fn is_watching(&self, surface: Surface) -> bool {
        match surface {
            Surface::Child => self.watch_child,
            Surface::Container => self.watch_container,
        }
    }

    /// Currently recorded press candidate, if any
    pub fn pending_click(&self) -> Option<&PendingClick> {
        self.pending.as_ref()
    }

    /// Single dispatch entry point. Returns `true` when the event was
    /// handled and should not receive default processing.
    pub fn route(
        &mut self,
        surface: Surface,
        event: &InputEvent,
        delegate: &mut dyn RouterDelegate,
    ) -> bool {
        if !self.is_watching(surface) {
            return false;
        }

        match (surface, event) {
            (Surface::Child, InputEvent::Wheel(ev)) => self.on_wheel(event, ev, delegate),
            (Surface::Child, InputEvent::MousePress(ev)) => self.on_mouse_press(event, ev, delegate),
            (Surface::Child, InputEvent::MouseRelease(ev)) => {
                self.on_mouse_release(event, ev, delegate)
            }
            (Surface::Child, InputEvent::MouseMove(_)) => {
                self.hook.process_event(surface, event)
            }
            // Focus notifications are never swallowed by plugins.
            (Surface::Child, InputEvent::FocusIn) => {
                delegate.focus_changed(true);
                false
            }
            (Surface::Child, InputEvent::FocusOut) => {
                delegate.focus_changed(false);
                false
            }
            (Surface::Child, InputEvent::ContextMenu { position, reason }) => {
                // Deferred so the engine's own menu suppression has taken
                // effect before downstream handling sees the event.
                delegate.defer_context_menu(*position, *reason);
                true
            }
            (Surface::Container, InputEvent::KeyPress(ev)) => self.on_key_press(event, ev, delegate),
            (Surface::Container, InputEvent::KeyRelease(ev)) => {
                self.on_key_release(event, ev, delegate)
            }
            _ => false,
        }
    }

    fn on_wheel(
        &mut self,
        event: &InputEvent,
        ev: &WheelEvent,
        delegate: &mut dyn RouterDelegate,
    ) -> bool {
        if self.hook.process_event(Surface::Child, event) {
            return true;
        }

        if ev.modifiers.ctrl {
            if ev.delta > 0.0 {
                delegate.zoom_in();
            } else {
                delegate.zoom_out();
            }
            return true;
        }

        if ev.spontaneous {
            let multiplier = self.wheel_scroll_lines / 3.0;
            if multiplier != 1.0 {
                let mut scaled = ev.clone();
                scaled.delta *= multiplier;
                scaled.spontaneous = false;
                delegate.forward_wheel_to_child(scaled);
                return true;
            }
        }

        false
    }

    fn on_mouse_press(
        &mut self,
        event: &InputEvent,
        ev: &MouseEvent,
        delegate: &mut dyn RouterDelegate,
    ) -> bool {
        // Every press starts a fresh correlation window.
        self.pending = None;

        if self.hook.process_event(Surface::Child, event) {
            return true;
        }

        match ev.button {
            MouseButton::Back => {
                delegate.navigate_back();
                true
            }
            MouseButton::Forward => {
                delegate.navigate_forward();
                true
            }
            MouseButton::Middle => {
                if let Some(url) = delegate.hit_test(ev.position).link_url {
                    self.pending = Some(PendingClick {
                        url,
                        position: ev.position,
                    });
                    true
                } else {
                    false
                }
            }
            MouseButton::Left => {
                // Recorded, but not accepted: normal selection/click
                // behavior still applies.
                if let Some(url) = delegate.hit_test(ev.position).link_url {
                    self.pending = Some(PendingClick {
                        url,
                        position: ev.position,
                    });
                }
                false
            }
            MouseButton::Right => false,
        }
    }

    fn on_mouse_release(
        &mut self,
        event: &InputEvent,
        ev: &MouseEvent,
        delegate: &mut dyn RouterDelegate,
    ) -> bool {
        if self.hook.process_event(Surface::Child, event) {
            return true;
        }

        match ev.button {
            MouseButton::Middle => self.complete_click(ev, delegate),
            MouseButton::Left => {
                // Left release opens a tab only with the new-tab modifier.
                if ev.modifiers.ctrl {
                    self.complete_click(ev, delegate)
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Re-hit-test at the release point; navigate only on an exact match
    /// with the press-time candidate.
    fn complete_click(&mut self, ev: &MouseEvent, delegate: &mut dyn RouterDelegate) -> bool {
        let Some(pending) = self.pending.as_ref() else {
            return false;
        };

        match delegate.hit_test(ev.position).link_url {
            Some(url) if url == pending.url && is_url_valid(&url) => {
                let mode = if ev.modifiers.shift {
                    NewTabMode::Foreground
                } else {
                    NewTabMode::Background
                };
                log::debug!("link click resolved to {url} ({mode:?})");
                delegate.open_in_new_tab(url, mode);
                true
            }
            _ => false,
        }
    }

    fn on_key_press(
        &mut self,
        event: &InputEvent,
        ev: &KeyEvent,
        delegate: &mut dyn RouterDelegate,
    ) -> bool {
        if self.hook.process_event(Surface::Container, event) {
            return true;
        }

        match ev.key {
            Key::ZoomIn => {
                delegate.zoom_in();
                true
            }
            Key::ZoomOut => {
                delegate.zoom_out();
                true
            }
            Key::Plus if ev.modifiers.ctrl => {
                delegate.zoom_in();
                true
            }
            Key::Minus if ev.modifiers.ctrl => {
                delegate.zoom_out();
                true
            }
            Key::Digit0 if ev.modifiers.ctrl => {
                delegate.zoom_reset();
                true
            }
            Key::M if ev.modifiers.ctrl => {
                delegate.toggle_audio_mute();
                true
            }
            _ => false,
        }
    }

    fn on_key_release(
        &mut self,
        event: &InputEvent,
        ev: &KeyEvent,
        delegate: &mut dyn RouterDelegate,
    ) -> bool {
        if self.hook.process_event(Surface::Container, event) {
            return true;
        }

        match ev.key {
            Key::Escape if delegate.is_full_screen() => {
                delegate.exit_full_screen();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::NoopHook;

    #[derive(Default)]
    struct MockDelegate {
        links: Vec<(Point, Url)>,
        opened: Vec<(Url, NewTabMode)>,
        zoom_ins: u32,
        zoom_outs: u32,
        zoom_resets: u32,
        backs: u32,
        forwards: u32,
        mutes: u32,
        full_screen: bool,
        exits: u32,
        focus: Vec<bool>,
        forwarded_wheels: Vec<WheelEvent>,
        deferred_menus: Vec<(Point, ContextMenuReason)>,
    }

    impl RouterDelegate for MockDelegate {
        fn hit_test(&self, position: Point) -> HitTestResult {
            HitTestResult {
                link_url: self
                    .links
                    .iter()
                    .find(|(p, _)| *p == position)
                    .map(|(_, url)| url.clone()),
            }
        }

        fn zoom_in(&mut self) {
            self.zoom_ins += 1;
        }

        fn zoom_out(&mut self) {
            self.zoom_outs += 1;
        }

        fn zoom_reset(&mut self) {
            self.zoom_resets += 1;
        }

        fn navigate_back(&mut self) {
            self.backs += 1;
        }

        fn navigate_forward(&mut self) {
            self.forwards += 1;
        }

        fn open_in_new_tab(&mut self, url: Url, mode: NewTabMode) {
            self.opened.push((url, mode));
        }

        fn toggle_audio_mute(&mut self) {
            self.mutes += 1;
        }

        fn is_full_screen(&self) -> bool {
            self.full_screen
        }

        fn exit_full_screen(&mut self) {
            self.exits += 1;
        }

        fn focus_changed(&mut self, focused: bool) {
            self.focus.push(focused);
        }

        fn forward_wheel_to_child(&mut self, event: WheelEvent) {
            self.forwarded_wheels.push(event);
        }

        fn defer_context_menu(&mut self, position: Point, reason: ContextMenuReason) {
            self.deferred_menus.push((position, reason));
        }
    }

    /// Hook that consumes everything except focus events (which are never
    /// offered to it in the first place)
    struct ConsumingHook;

    impl PluginHook for ConsumingHook {
        fn process_event(&self, _surface: Surface, _event: &InputEvent) -> bool {
            true
        }
    }

    fn router() -> InputRouter {
        let mut router = InputRouter::new(Rc::new(NoopHook), 3.0);
        router.watch(Surface::Child);
        router.watch(Surface::Container);
        router
    }

    fn press(button: MouseButton, position: Point, modifiers: Modifiers) -> InputEvent {
        InputEvent::MousePress(MouseEvent {
            button,
            position,
            modifiers,
        })
    }

    fn release(button: MouseButton, position: Point, modifiers: Modifiers) -> InputEvent {
        InputEvent::MouseRelease(MouseEvent {
            button,
            position,
            modifiers,
        })
    }

    fn link(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_unwatched_surface_is_ignored() {
        let mut router = InputRouter::new(Rc::new(NoopHook), 3.0);
        let mut delegate = MockDelegate::default();

        let ev = press(MouseButton::Back, Point::new(0.0, 0.0), Modifiers::NONE);
        assert!(!router.route(Surface::Child, &ev, &mut delegate));
        assert_eq!(delegate.backs, 0);

        router.watch(Surface::Child);
        assert!(router.route(Surface::Child, &ev, &mut delegate));
        assert_eq!(delegate.backs, 1);
    }

    #[test]
    fn test_back_forward_buttons() {
        let mut router = router();
        let mut delegate = MockDelegate::default();

        let p = Point::new(10.0, 10.0);
        assert!(router.route(Surface::Child, &press(MouseButton::Back, p, Modifiers::NONE), &mut delegate));
        assert!(router.route(Surface::Child, &press(MouseButton::Forward, p, Modifiers::NONE), &mut delegate));
        assert_eq!(delegate.backs, 1);
        assert_eq!(delegate.forwards, 1);
    }

    #[test]
    fn test_middle_click_same_link_opens_background_tab() {
        let mut router = router();
        let mut delegate = MockDelegate::default();
        let p = Point::new(5.0, 5.0);
        delegate.links.push((p, link("https://example.com/a")));

        assert!(router.route(Surface::Child, &press(MouseButton::Middle, p, Modifiers::NONE), &mut delegate));
        assert!(router.route(Surface::Child, &release(MouseButton::Middle, p, Modifiers::NONE), &mut delegate));

        assert_eq!(
            delegate.opened,
            vec![(link("https://example.com/a"), NewTabMode::Background)]
        );
    }

    #[test]
    fn test_shift_release_selects_foreground_tab() {
        let mut router = router();
        let mut delegate = MockDelegate::default();
        let p = Point::new(5.0, 5.0);
        delegate.links.push((p, link("https://example.com/a")));

        router.route(Surface::Child, &press(MouseButton::Middle, p, Modifiers::NONE), &mut delegate);
        router.route(Surface::Child, &release(MouseButton::Middle, p, Modifiers::shift()), &mut delegate);

        assert_eq!(delegate.opened[0].1, NewTabMode::Foreground);
    }

    #[test]
    fn test_release_over_different_link_does_not_navigate() {
        let mut router = router();
        let mut delegate = MockDelegate::default();
        let a = Point::new(5.0, 5.0);
        let b = Point::new(50.0, 50.0);
        delegate.links.push((a, link("https://example.com/a")));
        delegate.links.push((b, link("https://example.com/b")));

        router.route(Surface::Child, &press(MouseButton::Middle, a, Modifiers::NONE), &mut delegate);
        assert!(!router.route(Surface::Child, &release(MouseButton::Middle, b, Modifiers::NONE), &mut delegate));
        assert!(delegate.opened.is_empty());
    }

    #[test]
    fn test_release_off_any_link_does_not_navigate() {
        let mut router = router();
        let mut delegate = MockDelegate::default();
        let p = Point::new(5.0, 5.0);
        delegate.links.push((p, link("https://example.com/a")));

        router.route(Surface::Child, &press(MouseButton::Middle, p, Modifiers::NONE), &mut delegate);
        let off = Point::new(400.0, 300.0);
        assert!(!router.route(Surface::Child, &release(MouseButton::Middle, off, Modifiers::NONE), &mut delegate));
        assert!(delegate.opened.is_empty());
    }

    #[test]
    fn test_left_release_requires_new_tab_modifier() {
        let mut router = router();
        let mut delegate = MockDelegate::default();
        let p = Point::new(5.0, 5.0);
        delegate.links.push((p, link("https://example.com/a")));

        // Press is recorded but not accepted.
        assert!(!router.route(Surface::Child, &press(MouseButton::Left, p, Modifiers::NONE), &mut delegate));
        assert!(router.pending_click().is_some());

        // Without ctrl the release defers to the engine's own click.
        assert!(!router.route(Surface::Child, &release(MouseButton::Left, p, Modifiers::NONE), &mut delegate));
        assert!(delegate.opened.is_empty());

        router.route(Surface::Child, &press(MouseButton::Left, p, Modifiers::ctrl()), &mut delegate);
        assert!(router.route(Surface::Child, &release(MouseButton::Left, p, Modifiers::ctrl()), &mut delegate));
        assert_eq!(delegate.opened.len(), 1);
        assert_eq!(delegate.opened[0].1, NewTabMode::Background);
    }

    #[test]
    fn test_new_press_clears_pending_click() {
        let mut router = router();
        let mut delegate = MockDelegate::default();
        let p = Point::new(5.0, 5.0);
        delegate.links.push((p, link("https://example.com/a")));

        router.route(Surface::Child, &press(MouseButton::Middle, p, Modifiers::NONE), &mut delegate);
        assert!(router.pending_click().is_some());

        // A press somewhere without a link clears the record.
        let empty = Point::new(100.0, 100.0);
        router.route(Surface::Child, &press(MouseButton::Middle, empty, Modifiers::NONE), &mut delegate);
        assert!(router.pending_click().is_none());

        assert!(!router.route(Surface::Child, &release(MouseButton::Middle, p, Modifiers::NONE), &mut delegate));
        assert!(delegate.opened.is_empty());
    }

    #[test]
    fn test_wheel_with_zoom_modifier_zooms() {
        let mut router = router();
        let mut delegate = MockDelegate::default();

        let zoom_in = InputEvent::Wheel(WheelEvent {
            position: Point::default(),
            delta: 1.0,
            modifiers: Modifiers::ctrl(),
            spontaneous: true,
        });
        let zoom_out = InputEvent::Wheel(WheelEvent {
            position: Point::default(),
            delta: -1.0,
            modifiers: Modifiers::ctrl(),
            spontaneous: true,
        });

        assert!(router.route(Surface::Child, &zoom_in, &mut delegate));
        assert!(router.route(Surface::Child, &zoom_out, &mut delegate));
        assert_eq!(delegate.zoom_ins, 1);
        assert_eq!(delegate.zoom_outs, 1);
    }

    #[test]
    fn test_spontaneous_wheel_is_rescaled_and_forwarded() {
        let mut router = InputRouter::new(Rc::new(NoopHook), 6.0);
        router.watch(Surface::Child);
        let mut delegate = MockDelegate::default();

        let ev = InputEvent::Wheel(WheelEvent {
            position: Point::default(),
            delta: 1.0,
            modifiers: Modifiers::NONE,
            spontaneous: true,
        });
        assert!(router.route(Surface::Child, &ev, &mut delegate));

        assert_eq!(delegate.forwarded_wheels.len(), 1);
        let forwarded = &delegate.forwarded_wheels[0];
        assert_eq!(forwarded.delta, 2.0);
        assert!(!forwarded.spontaneous);
    }

    #[test]
    fn test_unity_multiplier_leaves_wheel_alone() {
        let mut router = router(); // lines = 3.0, multiplier 1.0
        let mut delegate = MockDelegate::default();

        let ev = InputEvent::Wheel(WheelEvent {
            position: Point::default(),
            delta: 1.0,
            modifiers: Modifiers::NONE,
            spontaneous: true,
        });
        assert!(!router.route(Surface::Child, &ev, &mut delegate));
        assert!(delegate.forwarded_wheels.is_empty());
    }

    #[test]
    fn test_focus_events_reach_delegate_despite_hook() {
        let mut router = InputRouter::new(Rc::new(ConsumingHook), 3.0);
        router.watch(Surface::Child);
        let mut delegate = MockDelegate::default();

        assert!(!router.route(Surface::Child, &InputEvent::FocusIn, &mut delegate));
        assert!(!router.route(Surface::Child, &InputEvent::FocusOut, &mut delegate));
        assert_eq!(delegate.focus, vec![true, false]);
    }

    #[test]
    fn test_consuming_hook_blocks_default_handling() {
        let mut router = InputRouter::new(Rc::new(ConsumingHook), 3.0);
        router.watch(Surface::Child);
        router.watch(Surface::Container);
        let mut delegate = MockDelegate::default();

        let p = Point::new(0.0, 0.0);
        assert!(router.route(Surface::Child, &press(MouseButton::Back, p, Modifiers::NONE), &mut delegate));
        assert_eq!(delegate.backs, 0);

        let key = InputEvent::KeyPress(KeyEvent {
            key: Key::ZoomIn,
            modifiers: Modifiers::NONE,
        });
        assert!(router.route(Surface::Container, &key, &mut delegate));
        assert_eq!(delegate.zoom_ins, 0);

        // Mouse move is hook-only; a consuming hook accepts it.
        let mv = InputEvent::MouseMove(MouseEvent {
            button: MouseButton::Left,
            position: p,
            modifiers: Modifiers::NONE,
        });
        assert!(router.route(Surface::Child, &mv, &mut delegate));
    }

    #[test]
    fn test_zoom_keys() {
        let mut router = router();
        let mut delegate = MockDelegate::default();

        let cases = [
            (Key::ZoomIn, Modifiers::NONE),
            (Key::ZoomOut, Modifiers::NONE),
            (Key::Plus, Modifiers::ctrl()),
            (Key::Minus, Modifiers::ctrl()),
            (Key::Digit0, Modifiers::ctrl()),
        ];
        for (key, modifiers) in cases {
            let ev = InputEvent::KeyPress(KeyEvent { key, modifiers });
            assert!(router.route(Surface::Container, &ev, &mut delegate));
        }
        assert_eq!(delegate.zoom_ins, 2);
        assert_eq!(delegate.zoom_outs, 2);
        assert_eq!(delegate.zoom_resets, 1);

        // Plus without ctrl stays unhandled.
        let plain_plus = InputEvent::KeyPress(KeyEvent {
            key: Key::Plus,
            modifiers: Modifiers::NONE,
        });
        assert!(!router.route(Surface::Container, &plain_plus, &mut delegate));
    }

    #[test]
    fn test_ctrl_m_toggles_mute() {
        let mut router = router();
        let mut delegate = MockDelegate::default();

        let ev = InputEvent::KeyPress(KeyEvent {
            key: Key::M,
            modifiers: Modifiers::ctrl(),
        });
        assert!(router.route(Surface::Container, &ev, &mut delegate));
        assert_eq!(delegate.mutes, 1);
    }

    #[test]
    fn test_escape_exits_full_screen_only_when_full_screen() {
        let mut router = router();
        let mut delegate = MockDelegate::default();

        let esc = InputEvent::KeyRelease(KeyEvent {
            key: Key::Escape,
            modifiers: Modifiers::NONE,
        });
        assert!(!router.route(Surface::Container, &esc, &mut delegate));
        assert_eq!(delegate.exits, 0);

        delegate.full_screen = true;
        assert!(router.route(Surface::Container, &esc, &mut delegate));
        assert_eq!(delegate.exits, 1);
    }

    #[test]
    fn test_context_menu_is_deferred() {
        let mut router = router();
        let mut delegate = MockDelegate::default();

        let p = Point::new(33.0, 44.0);
        let ev = InputEvent::ContextMenu {
            position: p,
            reason: ContextMenuReason::Mouse,
        };
        assert!(router.route(Surface::Child, &ev, &mut delegate));
        assert_eq!(delegate.deferred_menus, vec![(p, ContextMenuReason::Mouse)]);
    }

    #[test]
    fn test_key_events_ignored_on_child_surface() {
        let mut router = router();
        let mut delegate = MockDelegate::default();

        let ev = InputEvent::KeyPress(KeyEvent {
            key: Key::ZoomIn,
            modifiers: Modifiers::NONE,
        });
        assert!(!router.route(Surface::Child, &ev, &mut delegate));
        assert_eq!(delegate.zoom_ins, 0);
    }
}
