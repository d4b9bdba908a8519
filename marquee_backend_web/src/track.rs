// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM-backed [`TrackSurface`].
//!
//! A [`DomTrack`] wraps one belt container. Nothing in the page is touched
//! until the geometry builder first asks for the strip to be rebuilt; at that
//! point the container's items move into a `.conveyor-track` element (card
//! items each wrapped in a `.conveyor-item`), navigation buttons are added
//! for belts with controls, and the container is flagged with
//! `data-conveyor-ready="1"` so a second install on the same container is
//! refused.

use alloc::format;
use alloc::vec::Vec;

use kurbo::Rect;
use marquee_core::belt::TrackSurface;
use marquee_core::config::BeltConfig;
use wasm_bindgen::JsCast as _;
use web_sys::{Document, HtmlElement};

/// Marks a container whose strip has been installed.
pub const READY_ATTR: &str = "data-conveyor-ready";
/// Marks a duplicated item.
pub const CLONE_ATTR: &str = "data-clone";

const ARROW_PREVIOUS: &str = r#"<svg viewBox="0 0 24 24" aria-hidden="true"><path d="M15.5 19 8.5 12l7-7 1.4 1.4L11.3 12l5.6 5.6L15.5 19Z"/></svg>"#;
const ARROW_NEXT: &str = r#"<svg viewBox="0 0 24 24" aria-hidden="true"><path d="M8.5 19 7.1 17.6 12.7 12 7.1 6.4 8.5 5l7 7-7 7Z"/></svg>"#;

/// Previous/next buttons of a card belt.
#[derive(Clone, Debug)]
pub struct Controls {
    /// The "previous" (left) button.
    pub previous: HtmlElement,
    /// The "next" (right) button.
    pub next: HtmlElement,
}

/// One belt container and its strip.
pub struct DomTrack {
    container: HtmlElement,
    /// Original items in strip order. Card items are replaced by their
    /// `.conveyor-item` wrappers on install.
    originals: Vec<HtmlElement>,
    gap: f64,
    with_controls: bool,
    track: Option<HtmlElement>,
    controls: Option<Controls>,
}

impl core::fmt::Debug for DomTrack {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomTrack")
            .field("originals", &self.originals.len())
            .field("gap", &self.gap)
            .field("installed", &self.track.is_some())
            .field("controls", &self.controls.is_some())
            .finish_non_exhaustive()
    }
}

impl DomTrack {
    /// Collects the items matching `item_selector` inside `container`.
    ///
    /// Returns `None` if the container was already installed. The page is
    /// not modified.
    #[must_use]
    pub fn new(container: HtmlElement, item_selector: &str, belt: &BeltConfig) -> Option<Self> {
        if container.get_attribute(READY_ATTR).as_deref() == Some("1") {
            return None;
        }
        let originals = select_all(&container, item_selector);
        Some(Self {
            container,
            originals,
            gap: belt.gap,
            with_controls: belt.controls,
            track: None,
            controls: None,
        })
    }

    /// The belt container.
    #[must_use]
    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    /// The strip element, once installed.
    #[must_use]
    pub fn track(&self) -> Option<&HtmlElement> {
        self.track.as_ref()
    }

    /// Navigation buttons, once installed on a belt with controls.
    #[must_use]
    pub fn controls(&self) -> Option<&Controls> {
        self.controls.as_ref()
    }

    /// Strip item at `index` (duplicates included).
    #[must_use]
    pub fn item(&self, index: usize) -> Option<HtmlElement> {
        let track = self.track.as_ref()?;
        let index = u32::try_from(index).ok()?;
        track.children().item(index)?.dyn_into::<HtmlElement>().ok()
    }

    /// Moves the items into a fresh track and adds the controls.
    fn install(&mut self) {
        if self.track.is_some() {
            return;
        }
        let Some(doc) = self.container.owner_document() else {
            return;
        };
        let Some(track) = create(&doc, "div", "conveyor-track") else {
            return;
        };
        let _ = track.style().set_property("--gap", &format!("{}px", self.gap));

        if self.with_controls {
            let mut wrapped = Vec::with_capacity(self.originals.len());
            for item in &self.originals {
                let Some(wrap) = create(&doc, "div", "conveyor-item") else {
                    continue;
                };
                let _ = wrap.append_child(item);
                let _ = track.append_child(&wrap);
                wrapped.push(wrap);
            }
            self.originals = wrapped;
        } else {
            for item in &self.originals {
                let _ = track.append_child(item);
            }
        }

        let _ = self.container.class_list().add_1("conveyor");
        self.container.set_text_content(Some(""));
        let _ = self.container.append_child(&track);

        if self.with_controls {
            let previous = create_button(&doc, "left", "Scroll left", ARROW_PREVIOUS);
            let next = create_button(&doc, "right", "Scroll right", ARROW_NEXT);
            if let (Some(previous), Some(next)) = (previous, next) {
                let _ = self.container.append_child(&previous);
                let _ = self.container.append_child(&next);
                self.controls = Some(Controls { previous, next });
            }
        }

        let _ = self.container.set_attribute(READY_ATTR, "1");
        self.track = Some(track);
    }
}

impl TrackSurface for DomTrack {
    fn container_width(&self) -> f64 {
        self.container.get_bounding_client_rect().width()
    }

    fn original_count(&self) -> usize {
        self.originals.len()
    }

    fn len(&self) -> usize {
        match &self.track {
            Some(track) => track.child_element_count() as usize,
            None => self.originals.len(),
        }
    }

    fn item_rect(&self, index: usize) -> Option<Rect> {
        let el = self.item(index)?;
        let x = f64::from(el.offset_left());
        let y = f64::from(el.offset_top());
        let width = el.get_bounding_client_rect().width();
        let height = f64::from(el.offset_height());
        Some(Rect::new(x, y, x + width, y + height))
    }

    fn extent(&self) -> f64 {
        self.track
            .as_ref()
            .map_or(0.0, |track| f64::from(track.scroll_width()))
    }

    fn remove_duplicates(&mut self) {
        self.install();
        let Some(track) = &self.track else {
            return;
        };
        for clone in select_all(track, &format!("[{CLONE_ATTR}='1']")) {
            clone.remove();
        }
    }

    fn append_duplicate_set(&mut self) {
        let Some(track) = &self.track else {
            return;
        };
        for item in &self.originals {
            let Ok(node) = item.clone_node_with_deep(true) else {
                continue;
            };
            let Ok(clone) = node.dyn_into::<HtmlElement>() else {
                continue;
            };
            let _ = clone.set_attribute(CLONE_ATTR, "1");
            let _ = track.append_child(&clone);
        }
    }
}

/// Every element matching `selector` under `root`, in document order.
pub(crate) fn select_all(root: &web_sys::Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn create(doc: &Document, tag: &str, class: &str) -> Option<HtmlElement> {
    let el = doc.create_element(tag).ok()?.dyn_into::<HtmlElement>().ok()?;
    el.set_class_name(class);
    Some(el)
}

fn create_button(doc: &Document, side: &str, label: &str, icon: &str) -> Option<HtmlElement> {
    let button = create(doc, "button", &format!("conveyor-btn {side}"))?;
    let _ = button.set_attribute("type", "button");
    let _ = button.set_attribute("aria-label", label);
    button.set_inner_html(icon);
    Some(button)
}
