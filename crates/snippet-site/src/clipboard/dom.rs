//! Browser implementations of [`CopySurface`], [`Notifier`] and
//! [`ButtonLabel`], and the listener wiring for copy buttons.

use gloo_timers::callback::Timeout;
use leptos::logging::{error, log};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlDocument, HtmlElement, Window};

use super::{
    ButtonLabel, COPY_BUTTON_SELECTOR, CopyError, CopyFeedback, CopyHandler, CopySurface, FEEDBACK_ATTR,
    LabelNotifier, Notifier, TARGET_ATTR,
};

fn js_error(value: JsValue) -> CopyError {
    CopyError::Platform(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// Selection range + `execCommand("copy")` on the live document.
pub struct DomSurface {
    window: Window,
    document: Document,
}

impl DomSurface {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    fn target(&self, id: &str) -> Result<Element, CopyError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| CopyError::MissingTarget(id.to_string()))
    }
}

impl CopySurface for DomSurface {
    fn target_text(&self, id: &str) -> Option<String> {
        self.document
            .get_element_by_id(id)
            .map(|el| el.text_content().unwrap_or_default())
    }

    fn select_target(&mut self, id: &str) -> Result<(), CopyError> {
        let target = self.target(id)?;

        let range = self.document.create_range().map_err(js_error)?;
        range.select_node(&target).map_err(js_error)?;

        let selection = self
            .window
            .get_selection()
            .map_err(js_error)?
            .ok_or_else(|| CopyError::Platform("selection API unavailable".to_string()))?;
        selection.remove_all_ranges().map_err(js_error)?;
        selection.add_range(&range).map_err(js_error)
    }

    fn copy_selection(&mut self) -> Result<bool, CopyError> {
        self.document
            .dyn_ref::<HtmlDocument>()
            .ok_or_else(|| CopyError::Platform("document is not an HTML document".to_string()))?
            .exec_command("copy")
            .map_err(js_error)
    }

    fn clear_selection(&mut self) {
        if let Ok(Some(selection)) = self.window.get_selection() {
            if let Err(e) = selection.remove_all_ranges() {
                error!("clearing the selection failed: {:?}", e);
            }
        }
    }
}

/// Blocking `alert()` dialog.
pub struct AlertNotifier {
    window: Window,
}

impl AlertNotifier {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            error!("alert failed: {:?}", e);
        }
    }
}

impl ButtonLabel for HtmlElement {
    fn markup(&self) -> String {
        self.inner_html()
    }

    fn show_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn restore_after(&self, markup: String, delay_ms: u32) {
        let button = self.clone();
        Timeout::new(delay_ms, move || button.set_inner_html(&markup)).forget();
    }
}

/// Attach a click listener to every copy button in `document`.
///
/// Each button copies the element named by its `data-clipboard-target`
/// attribute and reports according to `data-copy-feedback`. Returns the
/// number of buttons bound.
pub fn bind_copy_buttons(window: &Window, document: &Document) -> Result<u32, JsValue> {
    let buttons = document.query_selector_all(COPY_BUTTON_SELECTOR)?;
    let mut bound = 0;

    for i in 0..buttons.length() {
        let Some(button) = buttons.item(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };

        let handler = CopyHandler::from_selector(button.get_attribute(TARGET_ATTR).as_deref());
        let feedback = CopyFeedback::from_attr(button.get_attribute(FEEDBACK_ATTR).as_deref());

        // Built before any click so the label keeps the button's original markup
        let label = LabelNotifier::new(button.clone());
        let window = window.clone();
        let document = document.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let mut surface = DomSurface::new(window.clone(), document.clone());
            match feedback {
                CopyFeedback::Alert => handler.handle_click(&mut surface, &AlertNotifier::new(window.clone())),
                CopyFeedback::Label => handler.handle_click(&mut surface, &label),
            };
        });

        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref::<js_sys::Function>())?;
        // Listeners live as long as the page
        on_click.forget();
        bound += 1;
    }

    log!("[clipboard] bound {} copy button(s)", bound);
    Ok(bound)
}
