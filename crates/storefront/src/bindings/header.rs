//! Sticky header, mobile nav, smooth anchors and the footer year.

use chrono::Datelike;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom::{self, HeaderHooks, Hooks};
use crate::error::Result;
use crate::nav::{self, OPEN_CLASS, SCROLLED_CLASS};
use crate::state::AppState;

pub fn bind(state: &AppState, hooks: &Hooks) -> Result<()> {
    let header_hooks = &hooks.header;

    if let Some(header) = &header_hooks.header {
        let update = {
            let state = state.clone();
            let window = hooks.window.clone();
            let header = header.clone();
            move || {
                let offset = window.scroll_y().unwrap_or(0.0);
                let threshold = state.config().scroll_threshold_px;
                let mut current = state.header();
                if current.on_scroll(offset, threshold) {
                    dom::set_class(&header, SCROLLED_CLASS, current.scrolled);
                }
            }
        };

        // Apply once so a page restored mid-scroll starts in the right state
        update();
        dom::listen_passive(&hooks.window, "scroll", move |_| update())?;

        bind_nav(state, header_hooks, header)?;
    } else {
        tracing::debug!("No .site-header on page");
    }

    bind_anchors(hooks)?;

    if let Some(year) = &header_hooks.year {
        dom::set_text(year, &chrono::Local::now().year().to_string());
    }

    Ok(())
}

fn bind_nav(state: &AppState, hooks: &HeaderHooks, header: &web_sys::Element) -> Result<()> {
    if let Some(toggle) = &hooks.toggle {
        let state = state.clone();
        let header = header.clone();
        dom::listen(toggle, "click", move |_| {
            let open = state.header().toggle_nav();
            dom::set_class(&header, OPEN_CLASS, open);
        })?;
    }

    for link in hooks.nav_links.iter().chain(&hooks.order_buttons) {
        let state = state.clone();
        let header = header.clone();
        dom::listen(link, "click", move |_| {
            state.header().close_nav();
            dom::set_class(&header, OPEN_CLASS, false);
        })?;
    }

    Ok(())
}

fn bind_anchors(hooks: &Hooks) -> Result<()> {
    for anchor in &hooks.header.anchors {
        let document = hooks.document.clone();
        let link = anchor.clone();
        dom::listen(anchor, "click", move |event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(target) = nav::anchor_target(&href)
                .and_then(|selector| dom::query(&document, selector).ok().flatten())
            else {
                return;
            };

            event.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }

    Ok(())
}
