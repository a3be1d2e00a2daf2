//! Form context
//!
//! Lets an enclosing form disable every grid inside it. The state is shared
//! as a `Memo<FormState>` derived from the scope's props, so grids re-render
//! when the form toggles.

use dioxus::prelude::*;

/// State a form shares with its fields
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub disabled: bool,
}

/// Effective disabled state: the field's own flag or the enclosing form's.
pub fn use_form_disabled(disabled: bool) -> bool {
    let form = try_use_context::<Memo<FormState>>();
    disabled || form.is_some_and(|state| state.read().disabled)
}

/// Provides [`FormState`] to its children
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FormScope { disabled: saving(),
///         ImageUpload { files: files() }
///     }
/// }
/// ```
#[component]
pub fn FormScope(
    /// Disable every field inside the scope
    disabled: ReadOnlySignal<bool>,
    children: Element,
) -> Element {
    let state = use_memo(move || FormState {
        disabled: disabled(),
    });
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}
