//! Infinite-scroll trigger.
//!
//! On the web an `IntersectionObserver` watches a sentinel element at the end
//! of the feed and fires `on_visible` every time it comes within 200px of the
//! viewport. Other platforms have no observer; the returned signal stays
//! `false` so the caller can render a manual "show more" control instead.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
pub fn use_infinite_scroll(sentinel_id: &'static str, on_visible: EventHandler<()>) -> Signal<bool> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures_util::StreamExt;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{js_sys, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    let mut attached = use_signal(|| false);
    let slot: Rc<RefCell<Option<(IntersectionObserver, ObserverCallback)>>> =
        use_hook(|| Rc::new(RefCell::new(None)));

    // The observer fires outside the Dioxus runtime, so hits are forwarded
    // through a channel and handled here.
    let hits = use_coroutine(move |mut rx: UnboundedReceiver<()>| async move {
        while rx.next().await.is_some() {
            on_visible.call(());
        }
    });

    {
        let slot = slot.clone();
        use_effect(move || {
            if slot.borrow().is_some() {
                return;
            }
            let Some(sentinel) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(sentinel_id))
            else {
                crate::log_warn!("infinite scroll: #{sentinel_id} not found");
                return;
            };

            let tx = hits.tx();
            let callback: ObserverCallback = Closure::wrap(Box::new(
                move |entries: js_sys::Array, _observer: IntersectionObserver| {
                    let intersecting = entries.iter().any(|entry| {
                        entry
                            .unchecked_into::<IntersectionObserverEntry>()
                            .is_intersecting()
                    });
                    if intersecting {
                        let _ = tx.unbounded_send(());
                    }
                },
            )
                as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

            let init = IntersectionObserverInit::new();
            init.set_root_margin("200px");
            init.set_threshold(&JsValue::from_f64(0.1));

            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => {
                    observer.observe(&sentinel);
                    *slot.borrow_mut() = Some((observer, callback));
                    attached.set(true);
                }
                Err(err) => {
                    crate::log_error!("infinite scroll: observer rejected: {err:?}");
                }
            }
        });
    }

    use_drop(move || {
        if let Some((observer, _callback)) = slot.borrow_mut().take() {
            observer.disconnect();
        }
    });

    attached
}

#[cfg(not(target_arch = "wasm32"))]
pub fn use_infinite_scroll(sentinel_id: &'static str, on_visible: EventHandler<()>) -> Signal<bool> {
    let _ = (sentinel_id, on_visible);
    use_signal(|| false)
}
