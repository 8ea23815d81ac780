use crate::dom;
use crate::input::{PointerKind, PointerPhase, TAP_EVENT};
use crate::render::SliderView;
use glam::Vec2;
use slider_core::SliderController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct SliderWiring {
    pub controller: Rc<RefCell<SliderController>>,
    pub view: Rc<SliderView>,
}

/// Client coordinates of a mouse event, or of the first touch of a touch event.
pub fn client_position(kind: PointerKind, ev: &web::Event) -> Option<Vec2> {
    match kind {
        PointerKind::Mouse => ev
            .dyn_ref::<web::MouseEvent>()
            .map(|m| Vec2::new(m.client_x() as f32, m.client_y() as f32)),
        PointerKind::Touch => ev
            .dyn_ref::<web::TouchEvent>()
            .and_then(|t| t.touches().get(0))
            .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32)),
    }
}

pub fn wire_pointer_handlers(w: &SliderWiring) {
    for kind in PointerKind::ALL {
        wire_drag_start(w, kind);
        wire_drag_move(w, kind);
        wire_drag_end(w, kind);
    }
    wire_tap(w);
}

fn listen(target: &web::EventTarget, name: &str, handler: impl FnMut(web::Event) + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
    {
        log::error!("[input] failed to listen for {name}: {:?}", e);
    }
    closure.forget();
}

fn wire_drag_start(w: &SliderWiring, kind: PointerKind) {
    let w2 = w.clone();
    listen(
        &w.view.elements.svg,
        kind.event_name(PointerPhase::Start),
        move |_ev| {
            w2.controller.borrow_mut().drag_start();
            w2.view.set_moving(true);
        },
    );
}

fn wire_drag_move(w: &SliderWiring, kind: PointerKind) {
    let w2 = w.clone();
    listen(
        &w.view.elements.svg,
        kind.event_name(PointerPhase::Move),
        move |ev| {
            ev.prevent_default();
            let Some(client) = client_position(kind, &ev) else {
                return;
            };
            let rect = dom::bounding_rect(&w2.view.elements.svg);
            let update = w2.controller.borrow_mut().on_move(client, &rect);
            if let Some(update) = update {
                w2.view.apply(&update);
            }
        },
    );
}

// Ends on the host so releasing anywhere over the widget stops the drag
fn wire_drag_end(w: &SliderWiring, kind: PointerKind) {
    let w2 = w.clone();
    listen(
        &w.view.elements.host,
        kind.event_name(PointerPhase::End),
        move |_ev| {
            w2.controller.borrow_mut().drag_end();
            w2.view.set_moving(false);
        },
    );
}

fn wire_tap(w: &SliderWiring) {
    let w2 = w.clone();
    listen(&w.view.elements.svg, TAP_EVENT, move |ev| {
        ev.prevent_default();
        let Some(client) = client_position(PointerKind::Mouse, &ev) else {
            return;
        };
        let rect = dom::bounding_rect(&w2.view.elements.svg);
        let update = w2.controller.borrow_mut().tap(client, &rect);
        w2.view.set_moving(false);
        if let Some(update) = update {
            log::debug!("[input] tap -> {}", update.value);
            w2.view.apply(&update);
        }
    });
}
