//! Browser binding for the `animator` engine.
//!
//! Every route change scans the page for tagged elements and starts a fresh
//! cycle: one `IntersectionObserver` per set, plus an animation-frame loop
//! while counters run. Leaving the route disconnects the observers and
//! cancels any queued frame.

use animator::{
    Entry, ScrollAnimator as Animator, Scan, Surface, THRESHOLD, TargetId,
    TargetKind,
};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue, prelude::Closure};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;
use yew_router::prelude::*;

/// Attribute linking an element back to its [`TargetId`].
const TARGET_ATTRIBUTE: &str = "data-scroll-target";

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;
type FrameCallback = Closure<dyn FnMut(f64)>;
type FrameSlot = Rc<RefCell<Option<FrameCallback>>>;

#[derive(Default)]
struct DomSurface {
    elements: HashMap<TargetId, Element>,
}

impl DomSurface {
    fn element(&self, target: TargetId) -> Option<&Element> {
        self.elements.get(&target)
    }
}

impl Surface for DomSurface {
    fn classes(&self, target: TargetId) -> Vec<String> {
        let Some(element) = self.element(target) else {
            return Vec::new();
        };
        let list = element.class_list();
        (0..list.length()).filter_map(|i| list.item(i)).collect()
    }

    fn attribute(&self, target: TargetId, name: &str) -> Option<String> {
        self.element(target)?.get_attribute(name)
    }

    fn text(&self, target: TargetId) -> String {
        self.element(target)
            .and_then(|element| element.text_content())
            .unwrap_or_default()
    }

    fn add_class(&self, target: TargetId, class: &str) {
        if let Some(element) = self.element(target) {
            let _ = element.class_list().add_1(class);
        }
    }

    fn set_style(&self, target: TargetId, property: &str, value: &str) {
        if let Some(element) = self
            .element(target)
            .and_then(|element| element.dyn_ref::<HtmlElement>())
        {
            let _ = element.style().set_property(property, value);
        }
    }

    fn set_text(&self, target: TargetId, text: &str) {
        if let Some(element) = self.element(target) {
            element.set_text_content(Some(text));
        }
    }
}

fn target_id(element: &Element) -> Option<TargetId> {
    element
        .get_attribute(TARGET_ATTRIBUTE)?
        .parse()
        .ok()
        .map(TargetId)
}

/// Find every tagged element. An element in several sets keeps one id;
/// ids left over from an earlier cycle are replaced.
fn scan_document(document: &Document, next_id: &mut u64) -> (Scan, DomSurface) {
    let mut scan = Scan::default();
    let mut surface = DomSurface::default();

    for kind in TargetKind::ALL {
        let Ok(nodes) = document.query_selector_all(kind.selector()) else {
            continue;
        };
        for index in 0..nodes.length() {
            let Some(element) =
                nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            let target = match target_id(&element) {
                Some(id) if surface.elements.contains_key(&id) => id,
                _ => {
                    *next_id += 1;
                    let id = TargetId(*next_id);
                    let _ = element
                        .set_attribute(TARGET_ATTRIBUTE, &id.0.to_string());
                    surface.elements.insert(id, element);
                    id
                }
            };
            scan.targets_mut(kind).push(target);
        }
    }

    (scan, surface)
}

struct Engine {
    animator: Animator,
    surface: DomSurface,
    pending_frame: Option<i32>,
}

fn request_frame(engine: &mut Engine, frame: &FrameSlot) {
    if engine.pending_frame.is_some() || !engine.animator.wants_frame() {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(callback) = frame.borrow().as_ref() {
        engine.pending_frame = window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok();
    }
}

/// Observers and frame loop for one page.
struct Binding {
    engine: Rc<RefCell<Engine>>,
    observers: Vec<(IntersectionObserver, EntriesCallback)>,
    frame: FrameSlot,
}

impl Binding {
    fn attach(next_id: &mut u64) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let (scan, surface) = scan_document(&document, next_id);

        let mut animator = Animator::new();
        animator.mount(&scan);
        let engine = Rc::new(RefCell::new(Engine {
            animator,
            surface,
            pending_frame: None,
        }));

        let frame: FrameSlot = Rc::new(RefCell::new(None));
        let frame_callback: FrameCallback = {
            let engine = engine.clone();
            let frame = frame.clone();
            Closure::wrap(Box::new(move |now: f64| {
                let mut engine = engine.borrow_mut();
                engine.pending_frame = None;
                let Engine {
                    animator, surface, ..
                } = &mut *engine;
                animator.frame(&*surface, now);
                request_frame(&mut engine, &frame);
            }) as Box<dyn FnMut(f64)>)
        };
        *frame.borrow_mut() = Some(frame_callback);

        let observers = TargetKind::ALL
            .into_iter()
            .filter(|kind| !scan.targets(*kind).is_empty())
            .filter_map(|kind| observe(kind, scan.targets(kind), &engine, &frame))
            .collect();

        tracing::debug!(targets = scan.len(), "scroll animations attached");
        Some(Self {
            engine,
            observers,
            frame,
        })
    }

    fn teardown(self) {
        for (observer, _) in &self.observers {
            observer.disconnect();
        }
        {
            let mut engine = self.engine.borrow_mut();
            if let Some(handle) = engine.pending_frame.take()
                && let Some(window) = web_sys::window()
            {
                let _ = window.cancel_animation_frame(handle);
            }
            engine.animator.teardown();
        }
        // the frame callback holds its own slot
        self.frame.borrow_mut().take();
    }
}

fn observe(
    kind: TargetKind,
    targets: &[TargetId],
    engine: &Rc<RefCell<Engine>>,
    frame: &FrameSlot,
) -> Option<(IntersectionObserver, EntriesCallback)> {
    let callback: EntriesCallback = {
        let engine = engine.clone();
        let frame = frame.clone();
        Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let entries: Vec<Entry> = entries
                    .iter()
                    .filter_map(|entry| {
                        entry.dyn_into::<IntersectionObserverEntry>().ok()
                    })
                    .filter_map(|entry| {
                        Some(Entry {
                            target: target_id(&entry.target())?,
                            ratio: entry.intersection_ratio(),
                            is_intersecting: entry.is_intersecting(),
                        })
                    })
                    .collect();

                let mut engine = engine.borrow_mut();
                let fired = {
                    let Engine {
                        animator, surface, ..
                    } = &mut *engine;
                    animator.handle_entries(&*surface, kind, &entries)
                };
                for target in fired {
                    if let Some(element) = engine.surface.element(target) {
                        observer.unobserve(element);
                    }
                }
                request_frame(&mut engine, &frame);
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(THRESHOLD));
    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init,
    ) {
        Ok(observer) => observer,
        Err(e) => {
            tracing::warn!(?kind, "could not create observer: {e:?}");
            return None;
        }
    };

    let engine = engine.borrow();
    for target in targets {
        if let Some(element) = engine.surface.element(*target) {
            observer.observe(element);
        }
    }
    Some((observer, callback))
}

/// Runs the scroll animations of whatever page is showing. Mount once,
/// inside the router.
#[function_component]
pub fn ScrollAnimator() -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();
    let next_id = use_mut_ref(|| 0u64);

    use_effect_with(path, move |_| {
        let binding = Rc::new(RefCell::new(None::<Binding>));

        // scan once the new page is in the DOM
        let timeout = {
            let binding = binding.clone();
            Timeout::new(0, move || {
                *binding.borrow_mut() = Binding::attach(&mut next_id.borrow_mut());
            })
        };

        move || {
            drop(timeout);
            if let Some(binding) = binding.borrow_mut().take() {
                binding.teardown();
            }
        }
    });

    html! {}
}
