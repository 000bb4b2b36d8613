//! Browser glue for the motion state: owns the `scroll` listener, the
//! animation-frame callback and the per-section `IntersectionObserver`, and
//! forwards plain numbers into the types in `crate::motion`.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Function};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};
use yew::prelude::*;

use crate::motion::reveal::{viewport_intersection, Rect, RevealLatch, RevealState, REVEAL_THRESHOLD};
use crate::motion::scroll_header::{FrameThrottle, HeaderStyle, ScrollHeaderController};
use crate::motion::signals::{Intersection, ScrollObserver, VisibilityObserver};

fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

fn js_number(value: Result<JsValue, JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

/// Header style for the current scroll offset, recomputed at most once per
/// animation frame.
#[hook]
pub fn use_scroll_header() -> HeaderStyle {
    let style = use_state_eq(|| {
        let mut controller = ScrollHeaderController::default();
        if let Some(window) = web_sys::window() {
            controller.on_scroll(scroll_offset(&window));
        }
        controller.style()
    });

    {
        let style = style.clone();
        use_effect_with_deps(
            move |_| {
                let listener = match web_sys::window() {
                    Some(window) => ScrollListener::attach(window, move |next| style.set(next)),
                    None => None,
                };
                if listener.is_none() {
                    warn!("Scroll listener not attached, header keeps its resting style");
                }
                move || drop(listener)
            },
            (),
        );
    }

    *style
}

struct ScrollListener {
    window: Window,
    throttle: Rc<RefCell<FrameThrottle>>,
    on_scroll: Closure<dyn FnMut()>,
    _on_frame: Rc<Closure<dyn FnMut()>>,
}

impl ScrollListener {
    fn attach(window: Window, publish: impl Fn(HeaderStyle) + 'static) -> Option<Self> {
        let controller = Rc::new(RefCell::new(ScrollHeaderController::default()));
        let throttle = Rc::new(RefCell::new(FrameThrottle::default()));

        let on_frame = {
            let window = window.clone();
            let throttle = throttle.clone();
            Rc::new(Closure::wrap(Box::new(move || {
                throttle.borrow_mut().complete();
                let mut controller = controller.borrow_mut();
                controller.on_scroll(scroll_offset(&window));
                publish(controller.style());
            }) as Box<dyn FnMut()>))
        };

        let on_scroll = {
            let window = window.clone();
            let throttle = throttle.clone();
            let on_frame = on_frame.clone();
            Closure::wrap(Box::new(move || {
                if !throttle.borrow_mut().request() {
                    return;
                }
                let frame: &Function = (*on_frame).as_ref().unchecked_ref();
                match window.request_animation_frame(frame) {
                    Ok(handle) => throttle.borrow_mut().scheduled(handle),
                    Err(_) => throttle.borrow_mut().complete(),
                }
            }) as Box<dyn FnMut()>)
        };

        window
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
            .ok()?;

        // Initial check, in case the page was restored mid-scroll
        let _ = on_scroll
            .as_ref()
            .unchecked_ref::<Function>()
            .call0(&JsValue::NULL);

        Some(Self {
            window,
            throttle,
            on_scroll,
            _on_frame: on_frame,
        })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        if let Some(handle) = self.throttle.borrow_mut().cancel() {
            let _ = self.window.cancel_animation_frame(handle);
        }
    }
}

/// Reveal state of the element behind `node`: Hidden until at least
/// [`REVEAL_THRESHOLD`] of it has been on screen once, Visible forever after.
#[hook]
pub fn use_reveal(node: NodeRef) -> RevealState {
    let state = use_state_eq(RevealState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let reveal: Rc<dyn Fn()> = Rc::new(move || state.set(RevealState::Visible));
                let watcher = match node.cast::<Element>() {
                    Some(element) => RevealWatcher::watch(&element, reveal),
                    None => {
                        warn!("Reveal target not mounted, showing it without animation");
                        reveal();
                        None
                    }
                };
                move || drop(watcher)
            },
            node,
        );
    }

    *state
}

struct RevealWatcher {
    observer: IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealWatcher {
    /// Runs the mount-time check and, if the element is not yet on screen,
    /// starts observing it. Returns `None` once `reveal` has already fired.
    fn watch(element: &Element, reveal: Rc<dyn Fn()>) -> Option<Self> {
        let latch = Rc::new(RefCell::new(RevealLatch::default()));

        let window = match web_sys::window() {
            Some(window) => window,
            None => {
                warn!("No window, revealing section immediately");
                reveal();
                return None;
            }
        };

        let rect = element.get_bounding_client_rect();
        let at_mount = viewport_intersection(
            Rect::new(rect.top(), rect.left(), rect.width(), rect.height()),
            js_number(window.inner_width()),
            js_number(window.inner_height()),
        );
        if latch.borrow_mut().observe(at_mount) {
            debug!("Section in view at mount (ratio {:.2})", at_mount.ratio);
            reveal();
            return None;
        }

        let on_intersect = {
            let latch = latch.clone();
            let reveal = reveal.clone();
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry = match entry.dyn_into::<IntersectionObserverEntry>() {
                        Ok(entry) => entry,
                        Err(_) => continue,
                    };
                    let mut latch = latch.borrow_mut();
                    let was_visible = latch.state().is_visible();
                    latch.on_intersection(Intersection::new(
                        entry.intersection_ratio(),
                        entry.is_intersecting(),
                    ));
                    if !was_visible && latch.state().is_visible() {
                        debug!("Section revealed (ratio {:.2})", entry.intersection_ratio());
                        reveal();
                        observer.disconnect();
                        break;
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

        match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(element);
                Some(Self {
                    observer,
                    _on_intersect: on_intersect,
                })
            }
            Err(_) => {
                warn!("IntersectionObserver unavailable, revealing section immediately");
                reveal();
                None
            }
        }
    }
}

impl Drop for RevealWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
