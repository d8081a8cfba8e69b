//! Game definition: board geometry, visual style, and asset shapes.
//!
//! A definition is authored once per map variant and shared by every state
//! snapshot of that variant. It is read-only for the whole render.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use super::index::AreaIndex;
use super::ordered::OrderedMap;
use super::scalar;
use crate::error::MapError;

/// A coordinate on the board, written as `[x, y]` in the input.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub const fn x(self) -> f64 {
        self.0
    }

    pub const fn y(self) -> f64 {
        self.1
    }
}

impl fmt::Display for Point {
    /// Formats as `x,y`, the form used inside `translate(...)`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.0, self.1)
    }
}

/// Board dimensions in document units.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "(f64, f64)")]
pub struct BoardSize {
    pub width: f64,
    pub height: f64,
}

impl From<(f64, f64)> for BoardSize {
    fn from((width, height): (f64, f64)) -> Self {
        BoardSize { width, height }
    }
}

/// Colors, strokes and fonts keyed by purpose.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleTable {
    #[serde(deserialize_with = "scalar::text")]
    pub land_fill: String,
    #[serde(deserialize_with = "scalar::text")]
    pub water_fill: String,
    #[serde(deserialize_with = "scalar::text")]
    pub stroke: String,
    #[serde(deserialize_with = "scalar::text")]
    pub stroke_linejoin: String,
    #[serde(deserialize_with = "scalar::text")]
    pub font_family: String,
    #[serde(deserialize_with = "scalar::text")]
    pub font_size: String,
    #[serde(deserialize_with = "scalar::text")]
    pub unowned_color: String,
}

/// A player faction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Nation {
    #[serde(deserialize_with = "scalar::text")]
    pub color: String,
}

/// The geometric form of a shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Geometry {
    Polygon { points: String },
    Path { d: String },
    Circle { r: String },
}

/// A declarative shape as written in the definition.
///
/// Exactly one of `points`, `path` or `circle` must be given; this is checked
/// by [`ShapeSpec::geometry`] when the shape is drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShapeSpec {
    #[serde(default, deserialize_with = "scalar::opt_text")]
    pub points: Option<String>,
    #[serde(default, deserialize_with = "scalar::opt_text")]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "scalar::opt_text")]
    pub circle: Option<String>,
    #[serde(default, deserialize_with = "scalar::opt_text")]
    pub class: Option<String>,
}

impl ShapeSpec {
    pub fn polygon(points: &str) -> Self {
        ShapeSpec {
            points: Some(points.to_string()),
            ..ShapeSpec::default()
        }
    }

    pub fn path(d: &str) -> Self {
        ShapeSpec {
            path: Some(d.to_string()),
            ..ShapeSpec::default()
        }
    }

    pub fn circle(r: &str) -> Self {
        ShapeSpec {
            circle: Some(r.to_string()),
            ..ShapeSpec::default()
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    /// Returns the single geometric form of this shape.
    pub fn geometry(&self) -> Result<Geometry, MapError> {
        match (&self.points, &self.path, &self.circle) {
            (Some(points), None, None) => Ok(Geometry::Polygon {
                points: points.clone(),
            }),
            (None, Some(d), None) => Ok(Geometry::Path { d: d.clone() }),
            (None, None, Some(r)) => Ok(Geometry::Circle { r: r.clone() }),
            (None, None, None) => Err(MapError::InvalidShapeSpec(format!(
                "{:?} has none of points, path or circle",
                self
            ))),
            _ => Err(MapError::InvalidShapeSpec(format!(
                "{:?} has more than one of points, path or circle",
                self
            ))),
        }
    }
}

/// Shapes for the three reusable unit and marker symbols.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetShapes {
    pub army: Vec<ShapeSpec>,
    pub fleet: Vec<ShapeSpec>,
    #[serde(alias = "supply_center")]
    pub sc: Vec<ShapeSpec>,
}

/// A territory on the board.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Area {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub short: Option<String>,
    /// Label anchor.
    pub label: Point,
    /// Where a unit without a coast is drawn.
    #[serde(default)]
    pub point: Option<Point>,
    #[serde(default)]
    pub coasts: Option<HashMap<String, Point>>,
    /// Supply-center marker position; present iff the area is a supply center.
    #[serde(default)]
    pub sc: Option<Point>,
}

impl Area {
    /// The name states use to refer to this area: `short`, falling back to `id`.
    pub fn key(&self) -> &str {
        self.short.as_deref().unwrap_or(&self.id)
    }

    pub fn has_supply_center(&self) -> bool {
        self.sc.is_some()
    }

    /// Looks up a coast coordinate. Areas without a coast table have no coasts.
    pub fn coast(&self, coast: &str) -> Option<Point> {
        self.coasts.as_ref().and_then(|c| c.get(coast)).copied()
    }
}

/// A complete map variant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameDefinition {
    pub name: String,
    #[serde(rename = "size")]
    pub board_size: BoardSize,
    pub style: StyleTable,
    pub nations: OrderedMap<Nation>,
    pub asset_shapes: AssetShapes,
    pub areas: Vec<Area>,
    pub shapes: OrderedMap<Vec<ShapeSpec>>,
}

impl GameDefinition {
    /// Builds the area lookup and checks that every shape list belongs to an
    /// area.
    pub fn index(&self) -> Result<AreaIndex<'_>, MapError> {
        let index = AreaIndex::build(&self.areas)?;
        if let Some(orphan) = self.shapes.keys().find(|id| index.area(id).is_none()) {
            return Err(MapError::UnknownShapeArea(orphan.to_string()));
        }
        Ok(index)
    }

    pub fn shapes_for(&self, area_id: &str) -> Option<&[ShapeSpec]> {
        self.shapes.get(area_id).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA_YAML: &str = "
id: stp
name: St. Petersburg
short: StP
label: [410, 95]
point: [420, 100]
coasts:
  nc: [415, 60]
  sc: [400, 130]
";

    #[test]
    fn area_reads_optional_fields() {
        let area: Area = serde_yaml::from_str(AREA_YAML).unwrap();
        assert_eq!(area.key(), "StP");
        assert!(!area.has_supply_center());
        assert_eq!(area.coast("nc"), Some(Point(415.0, 60.0)));
        assert_eq!(area.coast("ec"), None);
    }

    #[test]
    fn area_without_short_uses_id() {
        let area: Area =
            serde_yaml::from_str("id: nth\nname: North Sea\nlabel: [1, 2]\n").unwrap();
        assert_eq!(area.key(), "nth");
        assert_eq!(area.point, None);
        assert_eq!(area.coast("nc"), None);
    }

    #[test]
    fn misspelled_area_fields_are_rejected() {
        let yaml = "id: par\nname: Paris\nshrot: Par\nlabel: [1, 2]\n";
        let err = serde_yaml::from_str::<Area>(yaml).unwrap_err();
        assert!(err.to_string().contains("shrot"), "{}", err);

        let yaml = "id: spa\nname: Spain\nlabel: [1, 2]\ncoast: {nc: [1, 1]}\n";
        assert!(serde_yaml::from_str::<Area>(yaml).is_err());
    }

    #[test]
    fn supply_center_alias_is_accepted() {
        let shapes: AssetShapes = serde_yaml::from_str(
            "army: [{points: '0,0 1,1'}]\nfleet: []\nsupply_center: [{circle: 2}]\n",
        )
        .unwrap();
        assert_eq!(shapes.sc, vec![ShapeSpec::circle("2")]);
        assert!(serde_yaml::from_str::<ShapeSpec>("circle: 2\nklass: l").is_err());
    }

    #[test]
    fn point_formats_without_trailing_zeros() {
        assert_eq!(Point(5.0, 5.0).to_string(), "5,5");
        assert_eq!(Point(2.5, -1.0).to_string(), "2.5,-1");
    }

    #[test]
    fn board_size_from_pair() {
        let size: BoardSize = serde_yaml::from_str("[610, 560]").unwrap();
        assert_eq!(size.width, 610.0);
        assert_eq!(size.height, 560.0);
    }

    #[test]
    fn shape_geometry_variants() {
        assert_eq!(
            ShapeSpec::polygon("0,0 1,1").geometry(),
            Ok(Geometry::Polygon {
                points: "0,0 1,1".to_string()
            })
        );
        assert_eq!(
            ShapeSpec::path("M0 0").geometry(),
            Ok(Geometry::Path { d: "M0 0".to_string() })
        );
        assert_eq!(
            ShapeSpec::circle("4").geometry(),
            Ok(Geometry::Circle { r: "4".to_string() })
        );
    }

    #[test]
    fn shape_without_geometry_is_invalid() {
        let spec = ShapeSpec::default().with_class("l");
        assert!(matches!(spec.geometry(), Err(MapError::InvalidShapeSpec(_))));
    }

    #[test]
    fn shape_with_two_geometries_is_invalid() {
        let mut spec = ShapeSpec::polygon("0,0 1,1");
        spec.circle = Some("3".to_string());
        assert!(matches!(spec.geometry(), Err(MapError::InvalidShapeSpec(_))));
    }

    #[test]
    fn shape_reads_numeric_radius() {
        let spec: ShapeSpec = serde_yaml::from_str("circle: 6\nclass: w").unwrap();
        assert_eq!(spec.geometry(), Ok(Geometry::Circle { r: "6".to_string() }));
        assert_eq!(spec.class.as_deref(), Some("w"));
    }
}
