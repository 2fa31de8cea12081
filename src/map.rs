//! Map surface used by the renderer and the controller, plus the Leaflet and geolocation glue.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use crate::config::{
    CURRENT_POSITION_LABEL, DEFAULT_CENTER, DEFAULT_CENTER_LABEL, INITIAL_ZOOM, MAP_CONTAINER_ID,
    TILE_ATTRIBUTION, TILE_URL,
};
use crate::model::Coords;
use crate::status::PERSON_ICON;
use crate::util::{clog, cwarn};

pub trait MapAdapter {
    fn clear_markers(&mut self);
    fn show_marker(&mut self, at: Coords, icon: &str, popup: &str);
    fn fly_to(&mut self, at: Coords, zoom: u8);
}

/// A map that is still loading swallows calls; markers are drawn again once it is ready.
impl<M: MapAdapter> MapAdapter for Option<M> {
    fn clear_markers(&mut self) {
        if let Some(m) = self {
            m.clear_markers();
        }
    }
    fn show_marker(&mut self, at: Coords, icon: &str, popup: &str) {
        if let Some(m) = self {
            m.show_marker(at, icon, popup);
        }
    }
    fn fly_to(&mut self, at: Coords, zoom: u8) {
        if let Some(m) = self {
            m.fly_to(at, zoom);
        }
    }
}

/// Where the map opens, and the popup for the person marker.
pub fn initial_center(located: Option<Coords>) -> (Coords, &'static str) {
    match located {
        Some(c) => (c, CURRENT_POSITION_LABEL),
        None => (DEFAULT_CENTER, DEFAULT_CENTER_LABEL),
    }
}

#[wasm_bindgen(inline_js = "
export function notes_map_open(container, lat, lng, zoom, tileUrl, attribution, personIcon, popup, onClick) {
    const map = L.map(container, { zoomControl: false }).setView([lat, lng], zoom);
    L.control.zoom({ position: 'bottomright' }).addTo(map);
    L.tileLayer(tileUrl, { attribution }).addTo(map);
    const layer = L.layerGroup().addTo(map);
    const icon = L.icon({ iconUrl: personIcon, iconSize: [50, 50] });
    L.marker([lat, lng], { icon }).addTo(map).bindPopup(popup);
    map.on('click', (e) => onClick(e.latlng.lat, e.latlng.lng));
    return { map, layer };
}

export function notes_map_clear(handle) {
    handle.layer.clearLayers();
}

export function notes_map_marker(handle, lat, lng, iconUrl, popup) {
    const icon = L.icon({ iconUrl, iconSize: [50, 50] });
    const content = document.createElement('span');
    content.textContent = popup;
    L.marker([lat, lng], { icon }).addTo(handle.layer).bindPopup(content);
}

export function notes_map_fly(handle, lat, lng, zoom) {
    handle.map.flyTo([lat, lng], zoom);
}
")]
extern "C" {
    type MapHandle;

    #[wasm_bindgen(catch)]
    fn notes_map_open(
        container: &str,
        lat: f64,
        lng: f64,
        zoom: u8,
        tile_url: &str,
        attribution: &str,
        person_icon: &str,
        popup: &str,
        on_click: &Closure<dyn FnMut(f64, f64)>,
    ) -> Result<MapHandle, JsValue>;

    fn notes_map_clear(handle: &MapHandle);
    fn notes_map_marker(handle: &MapHandle, lat: f64, lng: f64, icon_url: &str, popup: &str);
    fn notes_map_fly(handle: &MapHandle, lat: f64, lng: f64, zoom: u8);
}

/// Leaflet map with a dedicated layer group for note markers.
pub struct LeafletMap {
    handle: MapHandle,
    _on_click: Closure<dyn FnMut(f64, f64)>,
}

impl LeafletMap {
    /// Builds the map inside the `#map` container, centered on `center`, and reports clicks.
    pub fn open(
        center: Coords,
        popup: &str,
        on_click: impl FnMut(Coords) + 'static,
    ) -> Result<Self, JsValue> {
        let mut on_click = on_click;
        let closure = Closure::<dyn FnMut(f64, f64)>::new(move |lat: f64, lng: f64| {
            on_click(Coords::new(lat, lng));
        });
        let handle = notes_map_open(
            MAP_CONTAINER_ID,
            center.lat,
            center.lng,
            INITIAL_ZOOM,
            TILE_URL,
            TILE_ATTRIBUTION,
            PERSON_ICON,
            popup,
            &closure,
        )?;
        clog(&format!("map opened at {}, {}", center.lat, center.lng));
        Ok(Self {
            handle,
            _on_click: closure,
        })
    }
}

impl MapAdapter for LeafletMap {
    fn clear_markers(&mut self) {
        notes_map_clear(&self.handle);
    }

    fn show_marker(&mut self, at: Coords, icon: &str, popup: &str) {
        notes_map_marker(&self.handle, at.lat, at.lng, icon, popup);
    }

    fn fly_to(&mut self, at: Coords, zoom: u8) {
        notes_map_fly(&self.handle, at.lat, at.lng, zoom);
    }
}

/// Only the first call reaches `on_done`; later ones are dropped.
fn first_answer_wins(
    on_done: impl FnOnce(Option<Coords>) + 'static,
) -> impl Fn(Option<Coords>) + Clone + 'static {
    let slot: Rc<RefCell<Option<Box<dyn FnOnce(Option<Coords>)>>>> =
        Rc::new(RefCell::new(Some(Box::new(on_done))));
    move |result: Option<Coords>| {
        let cb = slot.borrow_mut().take();
        if let Some(cb) = cb {
            cb(result);
        }
    }
}

/// One-shot position query. `on_done` runs exactly once: with the position, or with `None`
/// when the user refuses, the lookup fails, or the browser has no geolocation at all.
pub fn request_location(on_done: impl FnOnce(Option<Coords>) + 'static) {
    let finish = first_answer_wins(on_done);

    let geolocation = web_sys::window().and_then(|win| win.navigator().geolocation().ok());
    let Some(geolocation) = geolocation else {
        cwarn("geolocation unavailable, using default location");
        finish(None);
        return;
    };

    let on_success = {
        let finish = finish.clone();
        Closure::once_into_js(move |pos: web_sys::Position| {
            let c = pos.coords();
            finish(Some(Coords::new(c.latitude(), c.longitude())));
        })
    };
    let on_error = {
        let finish = finish.clone();
        Closure::once_into_js(move |_err: JsValue| {
            cwarn("location request denied or failed, using default location");
            finish(None);
        })
    };

    if let Err(e) = geolocation.get_current_position_with_error_callback(
        on_success.unchecked_ref(),
        Some(on_error.unchecked_ref()),
    ) {
        cwarn(&format!("geolocation request failed: {:?}", e));
        finish(None);
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub enum MapCall {
        Clear,
        Marker { at: Coords, icon: String, popup: String },
        FlyTo { at: Coords, zoom: u8 },
    }

    /// Records every call so tests can assert on what reached the map.
    #[derive(Debug, Default)]
    pub struct RecordingMap {
        pub calls: Vec<MapCall>,
    }

    impl RecordingMap {
        /// Markers drawn since the last clear.
        pub fn visible_markers(&self) -> Vec<MapCall> {
            let start = self
                .calls
                .iter()
                .rposition(|c| *c == MapCall::Clear)
                .map_or(0, |i| i + 1);
            self.calls[start..]
                .iter()
                .filter(|c| matches!(c, MapCall::Marker { .. }))
                .cloned()
                .collect()
        }

        pub fn flights(&self) -> Vec<MapCall> {
            self.calls
                .iter()
                .filter(|c| matches!(c, MapCall::FlyTo { .. }))
                .cloned()
                .collect()
        }
    }

    impl MapAdapter for RecordingMap {
        fn clear_markers(&mut self) {
            self.calls.push(MapCall::Clear);
        }
        fn show_marker(&mut self, at: Coords, icon: &str, popup: &str) {
            self.calls.push(MapCall::Marker {
                at,
                icon: icon.to_string(),
                popup: popup.to_string(),
            });
        }
        fn fly_to(&mut self, at: Coords, zoom: u8) {
            self.calls.push(MapCall::FlyTo { at, zoom });
        }
    }
}
