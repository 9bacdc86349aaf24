//! Leaflet interop
//!
//! Typed bindings over the Leaflet browser global (`window.L`, loaded from
//! the CDN tag in `index.html`). Option structs are serialized with
//! `serde_wasm_bindgen`; everything returned from here is an opaque handle.
//! The map is treated as a black box by the rest of the app: nothing reads
//! back out of it.

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;
    pub type TileLayer;
    pub type Marker;
    pub type LatLngBounds;
    pub type ZoomControl;
    pub type InteractionHandler;

    #[wasm_bindgen(js_namespace = ["window", "L"], js_name = "map")]
    fn leaflet_map(container_id: &str, options: &JsValue) -> LeafletMap;

    #[wasm_bindgen(js_namespace = ["window", "L"], js_name = "tileLayer")]
    fn leaflet_tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(js_namespace = ["window", "L"], js_name = "marker")]
    fn leaflet_marker(lat_lng: &JsValue, options: &JsValue) -> Marker;

    #[wasm_bindgen(js_namespace = ["window", "L"], js_name = "latLngBounds")]
    fn leaflet_lat_lng_bounds(south_west: &JsValue, north_east: &JsValue) -> LatLngBounds;

    #[wasm_bindgen(js_namespace = ["window", "L", "control"], js_name = "zoom")]
    fn leaflet_zoom_control(options: &JsValue) -> ZoomControl;

    // Map methods
    #[wasm_bindgen(method, js_name = "setView")]
    pub fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = "setMaxBounds")]
    pub fn set_max_bounds(this: &LeafletMap, bounds: &LatLngBounds) -> LeafletMap;

    #[wasm_bindgen(method, js_name = "panInsideBounds")]
    pub fn pan_inside_bounds(this: &LeafletMap, bounds: &LatLngBounds, options: &JsValue);

    #[wasm_bindgen(method)]
    pub fn on(this: &LeafletMap, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method, js_name = "getContainer")]
    pub fn get_container(this: &LeafletMap) -> web_sys::HtmlElement;

    #[wasm_bindgen(method)]
    pub fn remove(this: &LeafletMap);

    #[wasm_bindgen(method, getter, js_name = "scrollWheelZoom")]
    pub fn scroll_wheel_zoom(this: &LeafletMap) -> InteractionHandler;

    // Handler methods (scrollWheelZoom and friends)
    #[wasm_bindgen(method)]
    pub fn enable(this: &InteractionHandler);

    #[wasm_bindgen(method)]
    pub fn disable(this: &InteractionHandler);

    // Layer methods
    #[wasm_bindgen(method, js_name = "addTo")]
    pub fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    #[wasm_bindgen(method, js_name = "addTo")]
    pub fn add_to_map(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = "bindPopup")]
    pub fn bind_popup(this: &Marker, html: &str) -> Marker;

    #[wasm_bindgen(method, js_name = "openPopup")]
    pub fn open_popup(this: &Marker) -> Marker;

    #[wasm_bindgen(method, js_name = "addTo")]
    pub fn add_control_to(this: &ZoomControl, map: &LeafletMap) -> ZoomControl;
}

impl Clone for LeafletMap {
    fn clone(&self) -> Self {
        let value: &JsValue = self.as_ref();
        value.clone().unchecked_into()
    }
}

/// Map construction options. Field names follow Leaflet's API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub scroll_wheel_zoom: bool,
    pub zoom_control: bool,
    pub double_click_zoom: bool,
    pub dragging: bool,
    pub touch_zoom: bool,
    pub box_zoom: bool,
    pub keyboard: bool,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl MapOptions {
    /// Desktop defaults: everything interactive except scroll-wheel zoom,
    /// which stays off until the user holds Ctrl. The built-in zoom control
    /// is replaced by a repositioned one.
    pub fn desktop(min_zoom: f64, max_zoom: f64) -> Self {
        Self {
            scroll_wheel_zoom: false,
            zoom_control: false,
            double_click_zoom: true,
            dragging: true,
            touch_zoom: true,
            box_zoom: true,
            keyboard: true,
            min_zoom,
            max_zoom,
        }
    }

    /// Mobile: a static map. Every interaction is disabled and an overlay
    /// hint is shown instead.
    pub fn mobile(min_zoom: f64, max_zoom: f64) -> Self {
        Self {
            scroll_wheel_zoom: false,
            zoom_control: false,
            double_click_zoom: false,
            dragging: false,
            touch_zoom: false,
            box_zoom: false,
            keyboard: false,
            min_zoom,
            max_zoom,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayerOptions {
    pub attribution: String,
    pub max_zoom: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomControlOptions {
    pub position: String,
    pub zoom_in_title: String,
    pub zoom_out_title: String,
}

fn lat_lng(lat: f64, lng: f64) -> JsValue {
    js_sys::Array::of2(&JsValue::from_f64(lat), &JsValue::from_f64(lng)).into()
}

/// Creates a map in the element with id `container_id`, centered on
/// `(lat, lng)` at `zoom`.
pub fn create_map(
    container_id: &str,
    options: &MapOptions,
    lat: f64,
    lng: f64,
    zoom: f64,
) -> Result<LeafletMap, String> {
    let options_js = serde_wasm_bindgen::to_value(options)
        .map_err(|e| format!("Failed to serialize map options: {}", e))?;
    let map = leaflet_map(container_id, &options_js);
    map.set_view(&lat_lng(lat, lng), zoom);
    Ok(map)
}

/// Clamps panning to the rectangle between the two corners and keeps drags
/// inside it.
pub fn clamp_to_bounds(
    map: &LeafletMap,
    south_west: (f64, f64),
    north_east: (f64, f64),
) -> LatLngBounds {
    let bounds = leaflet_lat_lng_bounds(
        &lat_lng(south_west.0, south_west.1),
        &lat_lng(north_east.0, north_east.1),
    );
    map.set_max_bounds(&bounds);
    bounds
}

pub fn add_tile_layer(map: &LeafletMap, url_template: &str, options: &TileLayerOptions) -> Result<(), String> {
    let options_js = serde_wasm_bindgen::to_value(options)
        .map_err(|e| format!("Failed to serialize tile layer options: {}", e))?;
    leaflet_tile_layer(url_template, &options_js).add_to(map);
    Ok(())
}

pub fn add_zoom_control(map: &LeafletMap, options: &ZoomControlOptions) -> Result<(), String> {
    let options_js = serde_wasm_bindgen::to_value(options)
        .map_err(|e| format!("Failed to serialize zoom control options: {}", e))?;
    leaflet_zoom_control(&options_js).add_control_to(map);
    Ok(())
}

/// Drops a marker with an opened popup.
pub fn add_marker_with_popup(map: &LeafletMap, lat: f64, lng: f64, popup_html: &str) {
    leaflet_marker(&lat_lng(lat, lng), &JsValue::UNDEFINED)
        .add_to_map(map)
        .bind_popup(popup_html)
        .open_popup();
}
