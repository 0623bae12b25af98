use leptos::prelude::*;

use crate::clipboard::CopyFeedback;

/// A button that copies the text of another element on the page.
/// Rendered as plain markup; `bind_copy_buttons` attaches the click listener
/// when the WASM bundle starts.
#[component]
pub fn CopyButton(
    /// Id of the element whose text is copied
    #[prop(into)]
    target: String,
    /// Accessible label (the visible content is an icon)
    #[prop(into, default = "Copy to clipboard".to_string())]
    label: String,
    /// How the result is reported
    #[prop(optional)]
    feedback: CopyFeedback,
) -> impl IntoView {
    let selector = format!("#{}", target);

    view! {
        <button
            type="button"
            class="copy-btn"
            data-clipboard-target=selector
            data-copy-feedback=feedback.as_attr()
            title=label.clone()
            aria-label=label
        >
            <i class="fa fa-copy"></i>
        </button>
    }
}
