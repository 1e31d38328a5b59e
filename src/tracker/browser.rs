use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::observer::{ActiveSectionTracker, ScrollHandler, ScrollObserver, ScrollSource, Subscription};
use super::policy::{ActivePolicy, Geometry, Rect};
use super::registry::SectionRegistry;

/// `scroll` events of the browser window.
pub struct WindowScrollSource;

impl ScrollSource for WindowScrollSource {
    fn subscribe(&self, handler: ScrollHandler) -> Subscription {
        let Some(window) = web_sys::window() else {
            warn!("no window, scroll tracking disabled");
            return Subscription::noop();
        };

        let scroll_callback = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);

        if let Err(err) =
            window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
        {
            warn!("failed to register scroll listener: {:?}", err);
            return Subscription::noop();
        }

        Subscription::new(move || {
            if let Err(err) =
                window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
            {
                warn!("failed to remove scroll listener: {:?}", err);
            }
        })
    }
}

/// Live layout measurements from the document.
pub struct DomGeometry;

impl Geometry for DomGeometry {
    fn scroll_y(&self) -> Option<f64> {
        web_sys::window()?.scroll_y().ok()
    }

    fn viewport_height(&self) -> Option<f64> {
        web_sys::window()?.inner_height().ok()?.as_f64()
    }

    fn section_rect(&self, id: &str) -> Option<Rect> {
        let element = web_sys::window()?.document()?.get_element_by_id(id)?;
        let rect = element.get_bounding_client_rect();
        Some(Rect::new(rect.top(), rect.bottom()))
    }
}

/// Id of the section currently under the header, updated on scroll.
#[hook]
pub fn use_active_section(registry: SectionRegistry, policy: ActivePolicy) -> &'static str {
    let first = registry.first().id;
    let active = use_state(move || first);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |(registry, policy)| {
                let tracker = Rc::new(RefCell::new(ActiveSectionTracker::new(registry.clone(), *policy)));
                let observer = ScrollObserver::mount(
                    &WindowScrollSource,
                    Rc::new(DomGeometry),
                    tracker,
                    Rc::new(move |id: &'static str| active.set(id)),
                );
                move || drop(observer)
            },
            (registry, policy),
        );
    }

    *active
}

/// True once the page is scrolled further than `threshold` pixels.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                let check: ScrollHandler = Rc::new(move || {
                    if let Some(scroll_y) = DomGeometry.scroll_y() {
                        is_scrolled.set(scroll_y > threshold);
                    }
                });
                check();
                let subscription = WindowScrollSource.subscribe(check);
                move || drop(subscription)
            },
            threshold,
        );
    }

    *is_scrolled
}
