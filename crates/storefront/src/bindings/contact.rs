//! Contact form submission.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, HtmlTextAreaElement};

use crate::contact::{ContactSubmission, Field, FieldErrors};
use crate::dom::{self, Hooks};
use crate::error::Result;
use crate::state::AppState;

pub fn bind(state: &AppState, hooks: &Hooks) -> Result<()> {
    let Some(form) = &hooks.contact_form else {
        tracing::debug!("No .contact-form on page");
        return Ok(());
    };

    let state = state.clone();
    let document = hooks.document.clone();
    let window = hooks.window.clone();
    let target = form.clone();

    dom::listen(form, "submit", move |event| {
        event.prevent_default();

        let submission = ContactSubmission {
            name: field_value(&document, Field::Name),
            email: field_value(&document, Field::Email),
            message: field_value(&document, Field::Message),
        };

        match submission.validate() {
            Ok(message) => {
                show_errors(&document, &FieldErrors::default());
                tracing::info!(domain = message.email.domain(), "Contact message accepted");
                dom::alert(&window, &state.config().contact_success_message);
                target.reset();
            }
            Err(errors) => {
                tracing::debug!(fields = ?errors.failed().collect::<Vec<_>>(), "Contact form rejected");
                show_errors(&document, &errors);
            }
        }
    })
}

/// Current value of a form control, empty if it is missing.
fn field_value(document: &Document, field: Field) -> String {
    let Some(el) = document.get_element_by_id(field.id()) else {
        return String::new();
    };

    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

/// Write each field's message into its error region, clearing passing fields.
fn show_errors(document: &Document, errors: &FieldErrors) {
    for field in Field::ALL {
        let selector = format!(".error[data-for=\"{}\"]", field.id());
        let Ok(Some(region)) = dom::query(document, &selector) else {
            continue;
        };
        let text = errors.get(field).map(ToString::to_string).unwrap_or_default();
        dom::set_text(&region, &text);
    }
}
