//! Page element lookup and small DOM helpers.
//!
//! Every element a feature needs is queried once at startup into [`Hooks`].
//! Missing optional elements simply leave their feature unbound.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlFormElement, NodeList,
    Window,
};

use crate::error::{AppError, Result};

/// Elements of the header and navigation.
#[derive(Debug, Clone)]
pub struct HeaderHooks {
    pub header: Option<Element>,
    pub toggle: Option<Element>,
    pub nav_links: Vec<Element>,
    pub order_buttons: Vec<Element>,
    pub anchors: Vec<Element>,
    pub year: Option<Element>,
}

/// Elements of the hero carousel.
#[derive(Debug, Clone)]
pub struct SliderHooks {
    pub root: Element,
    pub slides: Vec<Element>,
    pub prev: Option<Element>,
    pub next: Option<Element>,
    pub dots: Option<Element>,
}

/// Elements of the cart drawer.
#[derive(Debug, Clone)]
pub struct CartHooks {
    pub open_button: Option<Element>,
    pub close_button: Option<Element>,
    pub overlay: Option<Element>,
    pub panel: Option<Element>,
    pub items: Option<Element>,
    pub total: Option<Element>,
    pub count: Option<Element>,
    pub clear_button: Option<Element>,
    pub checkout_button: Option<Element>,
}

/// Everything the storefront binds to.
#[derive(Debug, Clone)]
pub struct Hooks {
    pub window: Window,
    pub document: Document,
    pub header: HeaderHooks,
    pub reveals: Vec<Element>,
    pub slider: Option<SliderHooks>,
    pub contact_form: Option<HtmlFormElement>,
    pub cart: CartHooks,
}

impl Hooks {
    /// Query the page.
    ///
    /// # Errors
    ///
    /// Returns an error if `window` or `document` is missing or a selector
    /// query throws.
    pub fn bind() -> Result<Self> {
        let window = web_sys::window().ok_or(AppError::MissingGlobal("window"))?;
        let document = window
            .document()
            .ok_or(AppError::MissingGlobal("document"))?;

        let header = HeaderHooks {
            header: query(&document, ".site-header")?,
            toggle: query(&document, ".nav-toggle")?,
            nav_links: query_all(&document, ".primary-nav a")?,
            order_buttons: query_all(&document, ".order")?,
            anchors: query_all(&document, "a[href^=\"#\"]")?,
            year: document.get_element_by_id("year"),
        };

        let slider = match query(&document, ".slider")? {
            Some(root) => Some(SliderHooks {
                slides: query_all(&root, ".slide")?,
                prev: query(&root, ".prev")?,
                next: query(&root, ".next")?,
                dots: query(&document, ".dots")?,
                root,
            }),
            None => None,
        };

        let contact_form = query(&document, ".contact-form")?
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());

        let cart = CartHooks {
            open_button: query(&document, ".cart-btn")?,
            close_button: query(&document, ".cart-close")?,
            overlay: query(&document, ".cart-overlay")?,
            panel: query(&document, ".cart-panel")?,
            items: query(&document, ".cart-items")?,
            total: document.get_element_by_id("cart-total"),
            count: document.get_element_by_id("cart-count"),
            clear_button: query(&document, ".cart-clear")?,
            checkout_button: query(&document, ".cart-checkout")?,
        };

        Ok(Self {
            header,
            reveals: query_all(&document, ".reveal")?,
            slider,
            contact_form,
            cart,
            window,
            document,
        })
    }
}

/// Parent nodes that support selector queries.
pub trait Queryable {
    /// `querySelector`.
    ///
    /// # Errors
    ///
    /// Returns the thrown value for an invalid selector.
    fn find(&self, selector: &str) -> Result<Option<Element>>;

    /// `querySelectorAll`.
    ///
    /// # Errors
    ///
    /// Returns the thrown value for an invalid selector.
    fn find_all(&self, selector: &str) -> Result<NodeList>;
}

impl Queryable for Document {
    fn find(&self, selector: &str) -> Result<Option<Element>> {
        self.query_selector(selector).map_err(AppError::from)
    }

    fn find_all(&self, selector: &str) -> Result<NodeList> {
        self.query_selector_all(selector).map_err(AppError::from)
    }
}

impl Queryable for Element {
    fn find(&self, selector: &str) -> Result<Option<Element>> {
        self.query_selector(selector).map_err(AppError::from)
    }

    fn find_all(&self, selector: &str) -> Result<NodeList> {
        self.query_selector_all(selector).map_err(AppError::from)
    }
}

/// First element under `root` matching `selector`.
///
/// # Errors
///
/// Returns an error if the selector is invalid.
pub fn query(root: &impl Queryable, selector: &str) -> Result<Option<Element>> {
    root.find(selector)
}

/// All elements under `root` matching `selector`, in document order.
///
/// # Errors
///
/// Returns an error if the selector is invalid.
pub fn query_all(root: &impl Queryable, selector: &str) -> Result<Vec<Element>> {
    let nodes = root.find_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Add or remove `class` on `el`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    if let Err(e) = el.class_list().toggle_with_force(class, on) {
        tracing::debug!(error = %AppError::from(e), class, "classList.toggle failed");
    }
}

/// Set an attribute, logging failures.
pub fn set_attr(el: &Element, name: &str, value: &str) {
    if let Err(e) = el.set_attribute(name, value) {
        tracing::debug!(error = %AppError::from(e), name, "setAttribute failed");
    }
}

/// Replace the text of `el`.
pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

/// Attach `handler` for `event` on `target` for the life of the page.
///
/// # Errors
///
/// Returns an error if `addEventListener` throws.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`listen`], but marks the listener passive.
///
/// # Errors
///
/// Returns an error if `addEventListener` throws.
pub fn listen_passive(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<()> {
    let options = AddEventListenerOptions::new();
    options.set_passive(true);

    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// The element an event was dispatched to.
#[must_use]
pub fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// Nearest ancestor of `el` (or `el` itself) matching `selector`.
#[must_use]
pub fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).ok().flatten()
}

/// Text of the `<script type="application/json">` block with id `id`.
#[must_use]
pub fn data_block(document: &Document, id: &str) -> Option<String> {
    document.get_element_by_id(id)?.text_content()
}

/// Show a blocking alert.
pub fn alert(window: &Window, message: &str) {
    if let Err(e) = window.alert_with_message(message) {
        tracing::warn!(error = %AppError::from(e), "alert failed");
    }
}
