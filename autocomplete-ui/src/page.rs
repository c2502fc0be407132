//! Listener click-outside dùng chung cho mọi widget trên trang.

use std::cell::RefCell;

use autocomplete_core::{PageRegistry, WidgetId};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{console, Element, Event, Node};
use yew::html::Scope;

use crate::view::{AutocompleteView, Msg};

const OUTSIDE_EVENT: &str = "mousedown";

struct Mounted {
    anchor: Element,
    link: Scope<AutocompleteView>,
}

thread_local! {
    static PAGE: RefCell<PageRegistry<Mounted>> = RefCell::new(PageRegistry::new());
    static LISTENER: RefCell<Option<Closure<dyn FnMut(Event)>>> = RefCell::new(None);
}

pub fn register(anchor: Element, link: Scope<AutocompleteView>) -> WidgetId {
    PAGE.with(|page| {
        let mut page = page.borrow_mut();
        let id = page.register(Mounted { anchor, link });
        page.ensure_listener(install_listener);
        id
    })
}

pub fn unregister(id: WidgetId) {
    PAGE.with(|page| {
        page.borrow_mut().unregister(id);
    });
}

fn install_listener() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    let closure = Closure::<dyn FnMut(Event)>::new(close_outside);
    if let Err(err) =
        document.add_event_listener_with_callback(OUTSIDE_EVENT, closure.as_ref().unchecked_ref())
    {
        console::error_1(&err);
        return;
    }

    LISTENER.with(|slot| *slot.borrow_mut() = Some(closure));
    log::debug!("autocomplete-ui: đã gắn listener {OUTSIDE_EVENT} cho trang");
}

fn close_outside(event: Event) {
    let Some(target) = event
        .target()
        .and_then(|target| target.dyn_into::<Node>().ok())
    else {
        return;
    };

    // Thu thập trước rồi mới gửi để không giữ borrow khi component update.
    let links: Vec<Scope<AutocompleteView>> = PAGE.with(|page| {
        let page = page.borrow();
        let ids = page.outside_click_targets(|mounted| mounted.anchor.contains(Some(&target)));
        ids.into_iter()
            .filter_map(|id| page.get(id).map(|mounted| mounted.link.clone()))
            .collect()
    });

    for link in links {
        link.send_message(Msg::Close);
    }
}
