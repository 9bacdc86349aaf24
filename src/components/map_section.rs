//! Campus map section
//!
//! Thin configuration over the Leaflet widget: fixed center, clamped
//! bounds, repositioned zoom control, marker with an open popup. On mobile
//! the map is static with an overlay hint. Scroll-wheel zoom only engages
//! while Ctrl is held and drops again when the pointer leaves the map.

use leptos::prelude::*;
use std::cell::Cell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::bindings::leaflet::{
    add_marker_with_popup, add_tile_layer, add_zoom_control, clamp_to_bounds, create_map,
    MapOptions, TileLayerOptions, ZoomControlOptions,
};

const MAP_CONTAINER_ID: &str = "campus-map";

const CAMPUS_LAT: f64 = 52.95340;
const CAMPUS_LNG: f64 = -1.18790;
const INITIAL_ZOOM: f64 = 15.0;
const MIN_ZOOM: f64 = 13.0;
const MAX_ZOOM: f64 = 19.0;

// Pan limits around campus: south-west / north-east corners.
const BOUNDS_SW: (f64, f64) = (52.90, -1.30);
const BOUNDS_NE: (f64, f64) = (53.00, -1.08);

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

const POPUP_HTML: &str = "<b>Northfield Polytechnic</b>";

fn is_mobile_viewport() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(max-width: 768px)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn init_map(mobile: bool) -> Result<(), String> {
    let options = if mobile {
        MapOptions::mobile(MIN_ZOOM, MAX_ZOOM)
    } else {
        MapOptions::desktop(MIN_ZOOM, MAX_ZOOM)
    };

    let map = create_map(MAP_CONTAINER_ID, &options, CAMPUS_LAT, CAMPUS_LNG, INITIAL_ZOOM)?;

    let bounds = clamp_to_bounds(&map, BOUNDS_SW, BOUNDS_NE);
    {
        // Drags that escape the clamp are pushed back without animation.
        let map_for_drag = map.clone();
        let handle_drag = Closure::wrap(Box::new(move || {
            let options = js_sys::Object::new();
            let _ = js_sys::Reflect::set(
                &options,
                &JsValue::from_str("animate"),
                &JsValue::FALSE,
            );
            map_for_drag.pan_inside_bounds(&bounds, &options);
        }) as Box<dyn FnMut()>);
        map.on("drag", handle_drag.as_ref().unchecked_ref());
        handle_drag.forget();
    }

    add_tile_layer(
        &map,
        TILE_URL,
        &TileLayerOptions {
            attribution: String::new(),
            max_zoom: MAX_ZOOM,
        },
    )?;

    if !mobile {
        add_zoom_control(
            &map,
            &ZoomControlOptions {
                position: "topright".to_string(),
                zoom_in_title: "Zoom in".to_string(),
                zoom_out_title: "Zoom out".to_string(),
            },
        )?;

        // Ctrl engages scroll-wheel zoom; releasing it or leaving the map
        // disengages it again.
        let map_for_keydown = map.clone();
        let handle_keydown = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            if evt.ctrl_key() {
                map_for_keydown.scroll_wheel_zoom().enable();
            }
        }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

        let map_for_keyup = map.clone();
        let handle_keyup = Closure::wrap(Box::new(move || {
            map_for_keyup.scroll_wheel_zoom().disable();
        }) as Box<dyn FnMut()>);

        let map_for_leave = map.clone();
        let handle_mouseleave = Closure::wrap(Box::new(move || {
            map_for_leave.scroll_wheel_zoom().disable();
        }) as Box<dyn FnMut()>);

        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback(
                "keydown",
                handle_keydown.as_ref().unchecked_ref(),
            );
            let _ = window
                .add_event_listener_with_callback("keyup", handle_keyup.as_ref().unchecked_ref());
        }
        let _ = map.get_container().add_event_listener_with_callback(
            "mouseleave",
            handle_mouseleave.as_ref().unchecked_ref(),
        );

        handle_keydown.forget();
        handle_keyup.forget();
        handle_mouseleave.forget();
    }

    add_marker_with_popup(&map, CAMPUS_LAT, CAMPUS_LNG, POPUP_HTML);

    Ok(())
}

#[component]
pub fn MapSection() -> impl IntoView {
    let mobile = is_mobile_viewport();
    let initialized = Cell::new(false);

    Effect::new(move |_| {
        if initialized.replace(true) {
            return;
        }
        // Defer a frame so the container exists before Leaflet measures it.
        let callback = Closure::once_into_js(move || {
            if let Err(error) = init_map(mobile) {
                log::error!("Map initialization failed: {}", error);
            }
        });
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(callback.unchecked_ref());
        }
    });

    view! {
        <div class="relative w-full h-full">
            <div
                id=MAP_CONTAINER_ID
                class=move || if mobile { "w-full h-full map-locked" } else { "w-full h-full" }
            ></div>
            <Show when=move || mobile>
                <div class="absolute inset-0 flex items-center justify-center bg-black/20 pointer-events-none z-[500]">
                    <div class="bg-white px-4 py-2 rounded-lg shadow-lg text-center">
                        <p class="text-sm text-slate-700">
                            "Rotate your phone to landscape to interact with the map"
                        </p>
                    </div>
                </div>
            </Show>
        </div>
    }
}
