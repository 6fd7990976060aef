//! GeoJSON feature source.
//!
//! Reads a `FeatureCollection` into [`RawFeature`]s. Coordinates are
//! `[longitude, latitude, ...]`; only a polygon's outer ring is kept.
//! `properties` are read in document order (`serde_json` with
//! `preserve_order`) because tag order decides classification.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

use tessera_engine::feature::{Coordinate, GeometryKind, RawFeature, TagKey, Tags};

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Option<Geometry>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Value,
}

type Position = Vec<f64>;

/// Reads and converts every supported feature in the file at `path`.
pub fn read_features(path: &Path) -> Result<Vec<RawFeature>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_features(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Parses a GeoJSON `FeatureCollection`.
///
/// Features without geometry or with an unsupported geometry type are
/// skipped with a warning.
pub fn parse_features(json: &str) -> Result<Vec<RawFeature>> {
    let collection: FeatureCollection =
        serde_json::from_str(json).context("invalid GeoJSON document")?;
    if collection.kind != "FeatureCollection" {
        bail!("expected a FeatureCollection, found {:?}", collection.kind);
    }

    let mut features = Vec::with_capacity(collection.features.len());
    let mut skipped = 0usize;

    for (index, feature) in collection.features.into_iter().enumerate() {
        let Some(geometry) = feature.geometry else {
            log::warn!("feature #{index}: no geometry, skipped");
            skipped += 1;
            continue;
        };

        let Some((kind, coordinates)) = convert_geometry(&geometry)
            .with_context(|| format!("feature #{index} has malformed coordinates"))?
        else {
            log::warn!("feature #{index}: unsupported geometry {:?}, skipped", geometry.kind);
            skipped += 1;
            continue;
        };

        features.push(RawFeature {
            geometry: kind,
            coordinates,
            tags: convert_properties(feature.properties.unwrap_or_default()),
        });
    }

    log::info!("read {} features ({} skipped)", features.len(), skipped);
    Ok(features)
}

/// `Ok(None)` for geometry types the engine has no kind for.
fn convert_geometry(geometry: &Geometry) -> Result<Option<(GeometryKind, Vec<Coordinate>)>> {
    let converted = match geometry.kind.as_str() {
        "Point" => {
            let p: Position = serde_json::from_value(geometry.coordinates.clone())?;
            (GeometryKind::Point, vec![to_coordinate(&p)?])
        }
        "LineString" => {
            let line: Vec<Position> = serde_json::from_value(geometry.coordinates.clone())?;
            (GeometryKind::Line, to_coordinates(&line)?)
        }
        "Polygon" => {
            let rings: Vec<Vec<Position>> = serde_json::from_value(geometry.coordinates.clone())?;
            let outer = rings.first().map(Vec::as_slice).unwrap_or_default();
            (GeometryKind::Polygon, to_coordinates(outer)?)
        }
        _ => return Ok(None),
    };
    Ok(Some(converted))
}

fn to_coordinate(p: &[f64]) -> Result<Coordinate> {
    match p {
        [lon, lat, ..] => Ok(Coordinate::new(*lat, *lon)),
        _ => bail!("position needs at least two numbers, got {}", p.len()),
    }
}

fn to_coordinates(points: &[Position]) -> Result<Vec<Coordinate>> {
    points.iter().map(|p| to_coordinate(p)).collect()
}

fn convert_properties(properties: Map<String, Value>) -> Tags {
    properties
        .into_iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| {
            let value = match v {
                Value::String(s) => s,
                other => other.to_string(),
            };
            (TagKey::from_osm_key(&k), value)
        })
        .collect()
}
