//! Plugin Interception Hook
//!
//! Plugins get first refusal on input events before default handling.
//! The hook is an injected capability rather than an ambient registry,
//! so the router stays testable without live plugins.

use crate::input::{InputEvent, Surface};

/// Interception hook offered every routable event
pub trait PluginHook {
    /// Returns `true` if a plugin consumed the event; default handling is
    /// then skipped and the event marked handled.
    fn process_event(&self, surface: Surface, event: &InputEvent) -> bool {
        let _ = (surface, event);
        false
    }

    /// A new page collaborator was attached to the view
    fn page_created(&self) {}
}

/// Hook that consumes nothing
#[derive(Debug, Default)]
pub struct NoopHook;

impl PluginHook for NoopHook {}
