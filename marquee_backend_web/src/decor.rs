// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card icon badges and scroll reveal.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use marquee_core::ambient::decor::{self, Reveal, RevealMode};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

/// Inner markup of a badge showing the icon `path`.
#[must_use]
pub fn badge_markup(path: &str) -> String {
    format!(r#"<svg viewBox="0 0 24 24" aria-hidden="true"><path d="{path}"></path></svg>"#)
}

fn elements(doc: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

/// Appends an icon badge to every `.card` that lacks one.
///
/// Icons cycle by document order. Run this before the belts clone cards so
/// duplicates carry their badge. Returns how many badges were added.
pub fn add_badges(doc: &Document) -> Result<usize, JsValue> {
    let selector = format!(".{}", decor::BADGE_CLASS);
    let mut added = 0;
    for (index, card) in elements(doc, ".card").into_iter().enumerate() {
        if card.query_selector(&selector)?.is_some() {
            continue;
        }
        let badge = doc.create_element("div")?;
        badge.set_class_name(decor::BADGE_CLASS);
        badge.set_inner_html(&badge_markup(decor::badge_icon(index)));
        card.append_child(&badge)?;
        added += 1;
    }
    Ok(added)
}

/// Marks `reveal.selector` elements revealable and shows them as they
/// scroll into view.
///
/// Under reduced motion every element is shown at once and no observer is
/// created. Otherwise each element is unobserved after its first
/// intersection.
pub fn install_reveal(
    doc: &Document,
    reveal: &Reveal,
    reduced_motion: bool,
) -> Result<(), JsValue> {
    let targets = elements(doc, reveal.selector);
    for el in &targets {
        el.class_list().add_1(reveal.class)?;
    }

    match reveal.mode(reduced_motion) {
        RevealMode::Immediate => {
            for el in &targets {
                el.class_list().add_1(reveal.shown_class)?;
            }
        }
        RevealMode::OnIntersect => {
            let shown = reveal.shown_class;
            let callback = Closure::wrap(Box::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    let seen = entries
                        .iter()
                        .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                        .filter(IntersectionObserverEntry::is_intersecting);
                    for entry in seen {
                        let target = entry.target();
                        let _ = target.class_list().add_1(shown);
                        observer.unobserve(&target);
                    }
                },
            ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(reveal.threshold));
            options.set_root_margin(reveal.root_margin);
            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
            for el in &targets {
                observer.observe(el);
            }
            // The observer lives as long as the page.
            callback.forget();
        }
    }
    Ok(())
}
