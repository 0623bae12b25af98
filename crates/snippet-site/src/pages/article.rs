use leptos::prelude::*;

use crate::clipboard::CopyFeedback;
use crate::components::CodeBlock;
use highlight::Token;

/// A content block after source files have been read and tokenized.
#[derive(Debug, Clone)]
pub enum ArticleBlock {
    /// Author-supplied HTML, wrapped in a paragraph
    Text(String),
    Code {
        file_name: String,
        language: String,
        content_id: String,
        tokens: Vec<Token>,
    },
}

/// Page body: a title followed by text paragraphs and code listings.
#[component]
pub fn Article(
    #[prop(into)] title: String,
    blocks: Vec<ArticleBlock>,
    #[prop(optional)] feedback: CopyFeedback,
) -> impl IntoView {
    let body = blocks
        .into_iter()
        .map(|block| match block {
            ArticleBlock::Text(content) => view! { <p inner_html=content></p> }.into_any(),
            ArticleBlock::Code {
                file_name,
                language,
                content_id,
                tokens,
            } => view! {
                <CodeBlock
                    file_name=file_name
                    language=language
                    content_id=content_id
                    tokens=tokens
                    feedback=feedback
                />
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <article>
            <h3>{title}</h3>
            {body}
        </article>
    }
}
