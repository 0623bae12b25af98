use highlight::Token;
use leptos::prelude::*;

use super::CopyButton;
use crate::clipboard::CopyFeedback;

/// Highlighted source listing with its file name and a copy button.
///
/// Only the `content_id` element holds code, so copying never picks up the
/// file name label or the button itself.
#[component]
pub fn CodeBlock(
    /// Label shown above the code
    #[prop(into)]
    file_name: String,
    /// Value of the `data-type` attribute (`"c++"`, `"text"`, ...)
    #[prop(into)]
    language: String,
    /// Unique id of the code element on the page
    #[prop(into)]
    content_id: String,
    tokens: Vec<Token>,
    #[prop(optional)] feedback: CopyFeedback,
) -> impl IntoView {
    let code = highlighted_runs(&tokens)
        .into_iter()
        .map(|(class, text)| match class {
            Some(class) => view! { <span class=class>{text}</span> }.into_any(),
            None => text.into_any(),
        })
        .collect_view();

    view! {
        <pre>
            <code data-type=language>
                <span class="code-filename">{file_name}</span>
                <CopyButton target=content_id.clone() feedback=feedback />
                <span id=content_id class="code-content">{code}</span>
            </code>
        </pre>
    }
}

/// Classed tokens keep their own span; consecutive unclassed tokens are
/// merged into one text run.
fn highlighted_runs(tokens: &[Token]) -> Vec<(Option<&'static str>, String)> {
    let mut runs: Vec<(Option<&'static str>, String)> = Vec::new();
    for token in tokens {
        let class = token.kind.css_class();
        if let (None, Some((None, text))) = (class, runs.last_mut()) {
            text.push_str(&token.text);
            continue;
        }
        runs.push((class, token.text.clone()));
    }
    runs
}
