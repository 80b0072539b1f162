//! Contributed Action UI Traits
//!
//! Seams implemented by plugins that contribute custom policy-action widgets.
//! A factory produces one widget instance per edited action; the widget knows
//! how to round-trip between its edit state and the policy payload shape.

use serde_json::Value;

/// A UI widget editing or displaying a single policy action
///
/// Implementations wrap one action payload (the JSON fragment stored inside a
/// policy state) and expose it back to the editor. Widgets are constructed by
/// a [`UiActionFactory`] and are never stored in the registry themselves.
pub trait UiAction: Send + Sync {
    /// The action type this widget edits (e.g. "rollover")
    fn action_type(&self) -> &str;

    /// Serialize the widget's current state back to the policy payload shape
    fn to_action(&self) -> Value;

    /// Produce a fresh widget of the same kind wrapping a different payload
    fn clone_with(&self, action: Value) -> Box<dyn UiAction>;
}

/// Factory producing [`UiAction`] widgets for one action type
///
/// Registered once per action type during the setup phase. The factory must be
/// cheap to call; widget construction happens on every editor interaction.
pub trait UiActionFactory: Send + Sync {
    /// Build a widget wrapping the given action payload
    fn create(&self, action: Value) -> Box<dyn UiAction>;
}
