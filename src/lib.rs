#![cfg(target_arch = "wasm32")]
use slider_core::{SliderController, SliderOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod input;
mod markup;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("circular-slider loaded");
    Ok(())
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

/// One mounted slider. Dropping the handle leaves the widget live in the page.
#[wasm_bindgen]
pub struct CircularSlider {
    wiring: events::SliderWiring,
}

#[wasm_bindgen]
impl CircularSlider {
    /// Mounts a slider into the element with id `host_id`.
    pub fn mount(
        host_id: &str,
        min: f64,
        max: f64,
        step: f64,
        value: f64,
        units: Option<String>,
    ) -> Result<CircularSlider, JsValue> {
        let opts = SliderOptions {
            min,
            max,
            step,
            value,
            units,
        };
        dom::host_element(host_id)
            .and_then(|host| mount_into(host, opts))
            .map_err(to_js)
    }

    /// Mounts using the host's `min`, `max`, `step`, `value` and `units` attributes.
    #[wasm_bindgen(js_name = fromAttributes)]
    pub fn from_attributes(host_id: &str) -> Result<CircularSlider, JsValue> {
        let mount = || -> anyhow::Result<CircularSlider> {
            let host = dom::host_element(host_id)?;
            let opts = dom::options_from_host(&host)?;
            mount_into(host, opts)
        };
        mount().map_err(to_js)
    }

    /// Sets the value from outside; clamped into range, rendered and announced.
    #[wasm_bindgen(js_name = setValue)]
    pub fn set_value(&self, value: f64) {
        let update = self.wiring.controller.borrow_mut().set_value(value);
        if let Some(update) = update {
            self.wiring.view.apply(&update);
        }
    }

    pub fn value(&self) -> f64 {
        self.wiring.controller.borrow().value()
    }

    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.wiring.controller.borrow().is_dragging()
    }

    /// Registers the value-changed callback; `undefined` clears it.
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&self, callback: Option<js_sys::Function>) {
        self.wiring.view.set_listener(callback);
    }

    /// Re-samples the track, e.g. after the page changed the slider's layout.
    pub fn relayout(&self) {
        events::layout::relayout(&self.wiring);
    }
}

fn mount_into(host: web::HtmlElement, opts: SliderOptions) -> anyhow::Result<CircularSlider> {
    let config = opts.config()?;
    let elements = dom::attach_markup(&host, opts.units.as_deref())?;
    let wiring = events::SliderWiring {
        controller: Rc::new(RefCell::new(SliderController::new(config, opts.value))),
        view: Rc::new(render::SliderView::new(elements)),
    };
    log::info!(
        "[slider] mounted #{} range {}..{} step {}",
        host.id(),
        config.min(),
        config.max(),
        config.step()
    );

    events::wire_pointer_handlers(&wiring);
    events::wire_breakpoint_relayout(&wiring);
    events::layout::relayout(&wiring);
    Ok(CircularSlider { wiring })
}
