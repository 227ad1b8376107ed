//! Browser-side glue: smooth scrolling to anchors and watching which
//! section sits in the middle of the viewport.

use log::debug;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    window, Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions,
};
use yew::Callback;

use crate::state::sections::SectionDescriptor;

/// Shrinks the observation root to the horizontal midline, so a section
/// only counts as intersecting while it crosses the center of the screen.
pub const CENTER_BAND_MARGIN: &str = "-50% 0px -50% 0px";

#[derive(Debug, Error)]
pub enum ViewportError {
    #[error("no browser window or document available")]
    NoDocument,
    #[error("failed to create intersection observer: {0}")]
    Observer(String),
}

impl ViewportError {
    fn observer(err: JsValue) -> Self {
        ViewportError::Observer(format!("{:?}", err))
    }
}

fn document() -> Result<Document, ViewportError> {
    window()
        .and_then(|w| w.document())
        .ok_or(ViewportError::NoDocument)
}

/// Something that can bring an anchor into view.
pub trait Scroller {
    /// Returns false when there is nothing to scroll to.
    fn scroll_to(&self, anchor: &str) -> bool;
}

/// Smooth-scrolls elements of the live document.
pub struct DocumentScroller;

impl Scroller for DocumentScroller {
    fn scroll_to(&self, anchor: &str) -> bool {
        let element = match document().ok().and_then(|d| d.get_element_by_id(anchor)) {
            Some(element) => element,
            None => return false,
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Keeps an `IntersectionObserver` on the nav sections alive. Dropping it
/// disconnects the observer.
pub struct SectionObserver {
    observer: IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl SectionObserver {
    /// Starts observing every section present in the document. Each batch
    /// of sections that entered the center band is emitted as a list of ids.
    pub fn attach(
        sections: &[SectionDescriptor],
        on_view: Callback<Vec<String>>,
    ) -> Result<Self, ViewportError> {
        let document = document()?;

        let on_intersect = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            let in_view: Vec<String> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter(|entry| entry.is_intersecting())
                .map(|entry| entry.target().id())
                .collect();
            if !in_view.is_empty() {
                on_view.emit(in_view);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(CENTER_BAND_MARGIN);
        let observer = IntersectionObserver::new_with_options(
            on_intersect.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(ViewportError::observer)?;

        for section in sections {
            match document.get_element_by_id(section.id) {
                Some(element) => observer.observe(&element),
                None => debug!("section '{}' not in document, not observing", section.id),
            }
        }

        Ok(Self {
            observer,
            _on_intersect: on_intersect,
        })
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
