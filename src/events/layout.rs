use super::SliderWiring;
use crate::constants::LAYOUT_BREAKPOINT_QUERY;
use crate::dom::SvgTrack;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Re-samples the track and re-renders the current value without announcing it.
pub fn relayout(w: &SliderWiring) {
    let track = SvgTrack(w.view.elements.track.clone());
    let update = w.controller.borrow_mut().layout(&track);
    if let Some(update) = update {
        w.view.render(&update);
    }
}

/// Regenerates the samples whenever the viewport crosses the layout breakpoint.
pub fn wire_breakpoint_relayout(w: &SliderWiring) {
    let Some(query) = web::window()
        .and_then(|window| window.match_media(LAYOUT_BREAKPOINT_QUERY).ok().flatten())
    else {
        log::warn!("[layout] matchMedia unavailable; track will not re-sample on breakpoints");
        return;
    };
    let w2 = w.clone();
    let change_closure = Closure::wrap(Box::new(move || {
        relayout(&w2);
    }) as Box<dyn FnMut()>);
    _ = query.add_event_listener_with_callback("change", change_closure.as_ref().unchecked_ref());
    change_closure.forget();
}
