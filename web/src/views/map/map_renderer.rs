use leptos::prelude::*;
use leptos_leaflet::{
    leaflet::{LatLng, LatLngBounds, Map},
    prelude::*,
};
use shared_types::{LatLong, MapBounds};

const SATELLITE_TILES: &str =
    "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}";
const LABEL_TILES: &str =
    "https://server.arcgisonline.com/ArcGIS/rest/services/Reference/World_Boundaries_and_Places/MapServer/tile/{z}/{y}/{x}";
const TILE_ATTRIBUTION: &str =
    "Tiles &copy; Esri &mdash; Source: Esri, Maxar, Earthstar Geographics";

/// Satellite map with a capture control. The capture button reads the
/// currently framed viewport and hands its bounds to the caller; this is
/// the "rectangle completed" event of the selection flow.
#[component]
pub fn MapRenderer<F>(show_labels: RwSignal<bool>, on_area_captured: F) -> impl IntoView
where
    F: Fn(MapBounds) + 'static + Copy + Send + Sync,
{
    // Default view over the pilot area (Noida, NCR).
    let center = Position::new(28.6188330349765, 77.3679098161358);
    let map: JsRwSignal<Option<Map>> = JsRwSignal::new_local(None::<Map>);

    let capture_area = move |_| {
        if let Some(map) = map.get_untracked() {
            let map_bounds: LatLngBounds = map.get_bounds();
            let north_east: LatLng = map_bounds.get_north_east();
            let south_west: LatLng = map_bounds.get_south_west();
            on_area_captured(MapBounds {
                north_east: LatLong {
                    lat: north_east.lat(),
                    long: north_east.lng(),
                },
                south_west: LatLong {
                    lat: south_west.lat(),
                    long: south_west.lng(),
                },
            });
        }
    };

    view! {
        <div class="map-frame">
            <MapContainer
                style="height: 100%; width: 100%; flex: 1"
                center=center
                zoom=12.0
                set_view=true
                map=map.write_only()
            >
                <TileLayer
                    url=SATELLITE_TILES
                    attribution=TILE_ATTRIBUTION
                />
                {move || show_labels.get().then(|| view! {
                    <TileLayer
                        url=LABEL_TILES
                        attribution=TILE_ATTRIBUTION
                    />
                })}
            </MapContainer>

            <div class="map-tools">
                <button class="capture-button" on:click=capture_area>
                    "Capture this area"
                </button>
            </div>
        </div>
    }
}
