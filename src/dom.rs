use crate::constants::*;
use crate::markup;
use glam::Vec2;
use slider_core::{ConfigError, Rect, SliderOptions, TrackPath};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// The rendered track, queried through the SVG geometry API.
pub struct SvgTrack(pub web::SvgGeometryElement);

impl TrackPath for SvgTrack {
    fn total_length(&self) -> Option<f32> {
        let len = self.0.get_total_length();
        (len.is_finite() && len > 0.0).then_some(len)
    }

    fn point_at_length(&self, d: f32) -> Option<Vec2> {
        self.0
            .get_point_at_length(d)
            .ok()
            .map(|p| Vec2::new(p.x(), p.y()))
    }
}

#[inline]
pub fn bounding_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect {
        left: r.left() as f32,
        top: r.top() as f32,
    }
}

/// Handles to the elements the slider updates after mounting.
#[derive(Clone)]
pub struct SliderElements {
    pub host: web::HtmlElement,
    pub svg: web::Element,
    pub track: web::SvgGeometryElement,
    pub progress: web::Element,
    pub thumb: web::SvgElement,
    pub value_label: Option<web::Element>,
}

pub fn host_element(id: &str) -> anyhow::Result<web::HtmlElement> {
    let document = window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{id} is not an HTML element: {:?}", e)))
}

/// Numeric options from the host's `min`/`max`/`step`/`value`/`units` attributes.
pub fn options_from_host(host: &web::Element) -> Result<SliderOptions, ConfigError> {
    SliderOptions::from_attributes(|name| host.get_attribute(name))
}

/// Renders the slider markup into the host's (open) shadow root and collects
/// the element handles.
pub fn attach_markup(
    host: &web::HtmlElement,
    units: Option<&str>,
) -> anyhow::Result<SliderElements> {
    let root = match host.shadow_root() {
        Some(root) => root,
        None => host
            .attach_shadow(&web::ShadowRootInit::new(web::ShadowRootMode::Open))
            .map_err(|e| anyhow::anyhow!("attach_shadow failed: {:?}", e))?,
    };
    root.set_inner_html(&markup::slider_markup());

    let find = |id: &str| {
        root.get_element_by_id(id)
            .ok_or_else(|| anyhow::anyhow!("slider markup lacks #{id}"))
    };
    let svg = find(SVG_ID)?;
    let track = find(TRACK_ID)?
        .dyn_into::<web::SvgGeometryElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{TRACK_ID} is not geometry: {:?}", e)))?;
    let progress = find(PROGRESS_ID)?;
    let thumb = find(THUMB_ID)?
        .dyn_into::<web::SvgElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{THUMB_ID} is not an SVG element: {:?}", e)))?;
    let value_label = root.get_element_by_id(VALUE_LABEL_ID);
    if let Some(label) = root.get_element_by_id(UNITS_LABEL_ID) {
        label.set_text_content(units);
    }

    Ok(SliderElements {
        host: host.clone(),
        svg,
        track,
        progress,
        thumb,
        value_label,
    })
}
