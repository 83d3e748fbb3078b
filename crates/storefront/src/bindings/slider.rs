//! Hero carousel with indicator dots and autoplay.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Window};

use crate::carousel::{Autoplay, Carousel};
use crate::dom::{self, Hooks, SliderHooks};
use crate::error::Result;
use crate::state::AppState;

const ACTIVE_CLASS: &str = "active";

/// Live carousel: state plus the elements it paints.
struct Slider {
    carousel: Carousel,
    autoplay: Autoplay,
    slides: Vec<Element>,
    dots: Vec<Element>,
    window: Window,
    tick: Option<js_sys::Function>,
}

impl Slider {
    fn show(&mut self, step: impl FnOnce(&mut Carousel) -> usize) {
        let index = step(&mut self.carousel);
        tracing::trace!(index, "Slide shown");
        self.paint();
    }

    fn paint(&self) {
        for (n, slide) in self.slides.iter().enumerate() {
            dom::set_class(slide, ACTIVE_CLASS, self.carousel.is_active(n));
        }
        for (n, dot) in self.dots.iter().enumerate() {
            dom::set_class(dot, ACTIVE_CLASS, self.carousel.is_active(n));
        }
    }

    fn start_autoplay(&mut self) {
        let Some(tick) = &self.tick else {
            return;
        };
        let window = &self.window;

        self.autoplay.start(
            |period| {
                window
                    .set_interval_with_callback_and_timeout_and_arguments_0(tick, period)
                    .map_err(|e| {
                        tracing::warn!(error = %crate::error::AppError::from(e), "setInterval failed");
                    })
                    .ok()
            },
            |handle| window.clear_interval_with_handle(handle),
        );
    }

    fn stop_autoplay(&mut self) {
        let window = &self.window;
        self.autoplay
            .stop(|handle| window.clear_interval_with_handle(handle));
    }
}

pub fn bind(state: &AppState, hooks: &Hooks) -> Result<()> {
    let Some(slider_hooks) = &hooks.slider else {
        tracing::debug!("No .slider on page");
        return Ok(());
    };
    let Some(carousel) = Carousel::new(slider_hooks.slides.len()) else {
        tracing::debug!("Slider has no slides, leaving it inactive");
        return Ok(());
    };

    let dots = match &slider_hooks.dots {
        Some(container) => build_dots(&hooks.document, container, carousel.len())?,
        None => Vec::new(),
    };

    let slider = Rc::new(RefCell::new(Slider {
        carousel,
        autoplay: Autoplay::new(state.config().autoplay_interval()),
        slides: slider_hooks.slides.clone(),
        dots: dots.clone(),
        window: hooks.window.clone(),
        tick: None,
    }));

    let tick = {
        let slider = Rc::clone(&slider);
        Closure::<dyn FnMut()>::new(move || slider.borrow_mut().show(Carousel::next))
    };
    slider.borrow_mut().tick = Some(tick.into_js_value().unchecked_into());

    for (n, dot) in dots.iter().enumerate() {
        let slider = Rc::clone(&slider);
        let n = i64::try_from(n).unwrap_or(0);
        dom::listen(dot, "click", move |_| {
            slider.borrow_mut().show(|c| c.goto(n));
        })?;
    }

    bind_controls(&slider, slider_hooks)?;

    let mut current = slider.borrow_mut();
    current.show(|c| c.goto(0));
    current.start_autoplay();
    drop(current);

    tracing::debug!(slides = slider_hooks.slides.len(), "Slider bound");
    Ok(())
}

fn bind_controls(slider: &Rc<RefCell<Slider>>, hooks: &SliderHooks) -> Result<()> {
    if let Some(prev) = &hooks.prev {
        let slider = Rc::clone(slider);
        dom::listen(prev, "click", move |_| slider.borrow_mut().show(Carousel::prev))?;
    }
    if let Some(next) = &hooks.next {
        let slider = Rc::clone(slider);
        dom::listen(next, "click", move |_| slider.borrow_mut().show(Carousel::next))?;
    }

    {
        let slider = Rc::clone(slider);
        dom::listen(&hooks.root, "mouseenter", move |_| {
            slider.borrow_mut().stop_autoplay();
        })?;
    }
    {
        let slider = Rc::clone(slider);
        dom::listen(&hooks.root, "mouseleave", move |_| {
            slider.borrow_mut().start_autoplay();
        })?;
    }

    Ok(())
}

/// Replace the dots container's children with one button per slide.
fn build_dots(
    document: &web_sys::Document,
    container: &Element,
    count: usize,
) -> Result<Vec<Element>> {
    container.set_inner_html("");

    (0..count)
        .map(|_| -> Result<Element> {
            let dot = document.create_element("button")?;
            dot.set_attribute("type", "button")?;
            container.append_child(&dot)?;
            Ok(dot)
        })
        .collect()
}
