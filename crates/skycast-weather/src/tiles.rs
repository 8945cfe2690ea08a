//! Map layers and slippy-map tile addressing.

use std::f64::consts::PI;

use crate::types::Coordinate;

/// Opacity the weather overlays are meant to be composited with
pub const OVERLAY_OPACITY: f32 = 0.8;

/// Web-mercator latitude limit
const MAX_LATITUDE: f64 = 85.051_128_78;

/// Selectable map layer: the plain base map or one weather overlay on top of it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapLayer {
    #[default]
    Standard,
    Clouds,
    Precipitation,
    Temperature,
    WindSpeed,
}

impl MapLayer {
    pub const ALL: [MapLayer; 5] = [
        MapLayer::Standard,
        MapLayer::Clouds,
        MapLayer::Precipitation,
        MapLayer::Temperature,
        MapLayer::WindSpeed,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "Standard Map",
            Self::Clouds => "Clouds",
            Self::Precipitation => "Precipitation",
            Self::Temperature => "Temperature",
            Self::WindSpeed => "Wind Speed",
        }
    }

    /// Provider layer id; `None` for the base map
    pub fn overlay_id(&self) -> Option<&'static str> {
        match self {
            Self::Standard => None,
            Self::Clouds => Some("clouds_new"),
            Self::Precipitation => Some("precipitation_new"),
            Self::Temperature => Some("temp_new"),
            Self::WindSpeed => Some("wind_new"),
        }
    }

    /// Next layer, wrapping around
    pub fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|l| l == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCoord {
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

/// Tile containing `coord` at `zoom`
pub fn tile_for(coord: Coordinate, zoom: u8) -> TileCoord {
    let n = 2f64.powi(i32::from(zoom));
    let max_index = n - 1.0;

    let lon = coord.longitude.clamp(-180.0, 180.0);
    let lat = coord.latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

    let x = ((lon + 180.0) / 360.0 * n).floor().clamp(0.0, max_index);
    let y = ((1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * n)
        .floor()
        .clamp(0.0, max_index);

    TileCoord {
        z: zoom,
        x: x as u32,
        y: y as u32,
    }
}

/// Tile URL templates for the base map and weather overlays
#[derive(Debug, Clone)]
pub struct TileUrls {
    /// Template with `{z}`, `{x}`, `{y}`
    pub base_template: String,
    /// Overlay root, e.g. `https://tile.openweathermap.org/map`
    pub overlay_root: String,
    pub api_key: String,
}

impl TileUrls {
    pub fn url(&self, layer: MapLayer, tile: TileCoord) -> String {
        match layer.overlay_id() {
            None => self
                .base_template
                .replace("{z}", &tile.z.to_string())
                .replace("{x}", &tile.x.to_string())
                .replace("{y}", &tile.y.to_string()),
            Some(id) => format!(
                "{}/{}/{}/{}/{}.png?appid={}",
                self.overlay_root.trim_end_matches('/'),
                id,
                tile.z,
                tile.x,
                tile.y,
                self.api_key
            ),
        }
    }
}
