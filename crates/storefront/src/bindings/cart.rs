//! Cart drawer: add buttons, row controls, panel and checkout.

use web_sys::{Element, Event};

use crate::cart::{CardListing, Command, Effect};
use crate::dom::{self, CartHooks, Hooks};
use crate::error::Result;
use crate::state::AppState;

const OPEN_CLASS: &str = "cart-open";

/// Everything an [`Effect`] may touch.
#[derive(Clone)]
struct Drawer {
    state: AppState,
    hooks: CartHooks,
    window: web_sys::Window,
    body: Option<web_sys::HtmlElement>,
}

impl Drawer {
    fn run(&self, command: Command) {
        let effects = self.state.cart().dispatch(command);
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(&self, effect: Effect) {
        match effect {
            Effect::Render => {
                if let Err(e) = self.render() {
                    e.report("cart");
                }
            }
            Effect::OpenPanel => self.set_open(true),
            Effect::ClosePanel => self.set_open(false),
            Effect::Notify(message) => dom::alert(&self.window, &message),
            Effect::Navigate(path) => {
                if let Err(e) = self.window.location().set_href(&path) {
                    crate::error::AppError::from(e).report("checkout");
                }
            }
        }
    }

    fn render(&self) -> Result<()> {
        let view = self.state.cart().render();

        let Some(items) = &self.hooks.items else {
            return Ok(());
        };
        items.set_inner_html(&view.render_items()?);

        if let Some(total) = &self.hooks.total {
            dom::set_text(total, &view.subtotal);
        }
        if let Some(count) = &self.hooks.count {
            dom::set_text(count, &view.item_count.to_string());
        }
        Ok(())
    }

    fn set_open(&self, open: bool) {
        if let Some(body) = &self.body {
            dom::set_class(body, OPEN_CLASS, open);
        }
        let hidden = if open { "false" } else { "true" };
        for el in [&self.hooks.panel, &self.hooks.overlay].into_iter().flatten() {
            dom::set_attr(el, "aria-hidden", hidden);
        }
    }

    /// Decode a click anywhere on the page.
    fn on_click(&self, event: &Event) {
        let Some(target) = dom::event_element(event) else {
            return;
        };

        if let Some((add, card)) = dom::closest(&target, ".add")
            .and_then(|add| dom::closest(&add, ".card").map(|card| (add, card)))
        {
            let listing = read_listing(&self.window, &add, &card);
            self.run(Command::Add(listing.resolve(self.state.catalog())));
        }

        if let Some(control) = dom::closest(&target, "[data-act]") {
            let act = control.get_attribute("data-act");
            let id = control.get_attribute("data-id");
            if let Some(command) = Command::from_row_control(act.as_deref(), id.as_deref()) {
                self.run(command);
            }
        }
    }
}

pub fn bind(state: &AppState, hooks: &Hooks) -> Result<()> {
    let drawer = Drawer {
        state: state.clone(),
        hooks: hooks.cart.clone(),
        window: hooks.window.clone(),
        body: hooks.document.body(),
    };

    let buttons = [
        (&hooks.cart.open_button, Command::Open),
        (&hooks.cart.close_button, Command::Close),
        (&hooks.cart.overlay, Command::Close),
        (&hooks.cart.clear_button, Command::Clear),
        (&hooks.cart.checkout_button, Command::Checkout),
    ];
    for (button, command) in buttons {
        let Some(button) = button else {
            tracing::debug!(?command, "Cart control missing");
            continue;
        };
        let drawer = drawer.clone();
        dom::listen(button, "click", move |_| drawer.run(command.clone()))?;
    }

    {
        let drawer = drawer.clone();
        dom::listen(&hooks.document, "click", move |event| drawer.on_click(&event))?;
    }

    drawer.apply(Effect::Render);
    tracing::debug!(
        lines = state.cart().cart().len(),
        catalog = state.catalog().len(),
        "Cart bound"
    );
    Ok(())
}

/// Read what a menu card shows about its dish.
fn read_listing(window: &web_sys::Window, add: &Element, card: &Element) -> CardListing {
    let item_ref = add
        .get_attribute("data-item")
        .or_else(|| card.get_attribute("data-item"));

    let text_of = |selector: &str| {
        dom::query(card, selector)
            .ok()
            .flatten()
            .and_then(|el| el.text_content())
    };

    let background_image = dom::query(card, ".card-media")
        .ok()
        .flatten()
        .and_then(|media| window.get_computed_style(&media).ok().flatten())
        .and_then(|style| style.get_property_value("background-image").ok());

    CardListing {
        item_ref,
        title: text_of("h3"),
        price_text: text_of(".price"),
        background_image,
    }
}
