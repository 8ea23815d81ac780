use crate::constants::{CHANGE_EVENT, MOVING_CLASS};
use crate::dom::SliderElements;
use crate::markup;
use slider_core::SliderUpdate;
use std::cell::RefCell;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Writes controller updates into the DOM and announces value changes.
pub struct SliderView {
    pub elements: SliderElements,
    listener: RefCell<Option<js_sys::Function>>,
}

impl SliderView {
    pub fn new(elements: SliderElements) -> Self {
        Self {
            elements,
            listener: RefCell::new(None),
        }
    }

    pub fn set_listener(&self, callback: Option<js_sys::Function>) {
        *self.listener.borrow_mut() = callback;
    }

    /// Renders `update` and, when it carries a committed value, announces it.
    pub fn apply(&self, update: &SliderUpdate) {
        self.render(update);
        if update.committed {
            self.notify(update.value);
        }
    }

    /// Moves the thumb, resizes the progress arc and refreshes the label.
    pub fn render(&self, update: &SliderUpdate) {
        let el = &self.elements;
        _ = el
            .thumb
            .style()
            .set_property("transform", &markup::thumb_transform(&update.thumb));
        _ = el.progress.set_attribute(
            "stroke-dasharray",
            &markup::dash_array(update.arc_length, update.perimeter),
        );
        if let Some(label) = &el.value_label {
            label.set_text_content(Some(&markup::value_label(update.value)));
        }
    }

    pub fn set_moving(&self, moving: bool) {
        let el = &self.elements;
        for list in [el.host.class_list(), el.svg.class_list()] {
            _ = if moving {
                list.add_1(MOVING_CLASS)
            } else {
                list.remove_1(MOVING_CLASS)
            };
        }
    }

    fn notify(&self, value: f64) {
        let detail = JsValue::from_f64(value);
        // cloned so the callback may replace the listener
        let callback = self.listener.borrow().clone();
        if let Some(cb) = callback {
            if let Err(e) = cb.call1(&JsValue::NULL, &detail) {
                log::error!("[slider] change listener threw: {:?}", e);
            }
        }
        let init = web::CustomEventInit::new();
        init.set_detail(&detail);
        match web::CustomEvent::new_with_event_init_dict(CHANGE_EVENT, &init) {
            Ok(ev) => {
                _ = self.elements.host.dispatch_event(&ev);
            }
            Err(e) => log::error!("[slider] could not build change event: {:?}", e),
        }
    }
}
