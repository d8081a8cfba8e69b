//! Location strings as written in state files.
//!
//! A location is either a bare area name (`Par`) or an area name followed by
//! a parenthesized coast (`StP(sc)`, `Spa (nc)`). Both tokens are ASCII
//! letters only.

use crate::board::{Area, AreaIndex};
use crate::error::MapError;

/// A parsed, not yet resolved, location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationRef<'a> {
    pub area: &'a str,
    pub coast: Option<&'a str>,
}

/// A location whose area has been looked up in the definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedLocation<'a> {
    pub area: &'a Area,
    pub coast: Option<&'a str>,
}

fn is_letters(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Splits a location string into area and optional coast tokens.
pub fn parse_location(s: &str) -> Result<LocationRef<'_>, MapError> {
    let malformed = || MapError::MalformedLocation(s.to_string());

    let (area, coast) = match s.find('(') {
        Some(open) => {
            let coast = s[open + 1..].strip_suffix(')').ok_or_else(malformed)?;
            let area = s[..open].trim_end_matches(|c: char| c.is_ascii_whitespace());
            (area, Some(coast))
        }
        None => (s, None),
    };

    if !is_letters(area) || !coast.map_or(true, is_letters) {
        return Err(malformed());
    }

    Ok(LocationRef { area, coast })
}

/// Parses a location string and resolves its area token.
///
/// The coast token is carried through unchecked; it is matched against the
/// area's coast table when the unit is drawn.
pub fn resolve_location<'a>(
    s: &'a str,
    index: &AreaIndex<'a>,
) -> Result<ResolvedLocation<'a>, MapError> {
    let loc = parse_location(s)?;
    let area = index.resolve(loc.area)?;
    Ok(ResolvedLocation {
        area,
        coast: loc.coast,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Point;

    fn bare(area: &str) -> LocationRef<'_> {
        LocationRef { area, coast: None }
    }

    #[test]
    fn bare_area() {
        assert_eq!(parse_location("Par"), Ok(bare("Par")));
        assert_eq!(parse_location("nth"), Ok(bare("nth")));
    }

    #[test]
    fn area_with_coast() {
        assert_eq!(
            parse_location("StP(sc)"),
            Ok(LocationRef {
                area: "StP",
                coast: Some("sc"),
            })
        );
        assert_eq!(
            parse_location("Spa (NC)"),
            Ok(LocationRef {
                area: "Spa",
                coast: Some("NC"),
            })
        );
    }

    #[test]
    fn malformed_locations() {
        for s in [
            "",
            "St P",
            "Par1",
            "stp.sc",
            "StP(sc",
            "StP()",
            "(sc)",
            "StP(sc)x",
            "StP(s c)",
            "StP(sc)(nc)",
            " Par",
            "Bul/ec",
        ] {
            assert_eq!(
                parse_location(s),
                Err(MapError::MalformedLocation(s.to_string())),
                "{:?} should be malformed",
                s
            );
        }
    }

    #[test]
    fn resolves_through_index() {
        let areas = vec![Area {
            id: "stp".to_string(),
            name: "St. Petersburg".to_string(),
            short: Some("StP".to_string()),
            label: Point(0.0, 0.0),
            point: Some(Point(1.0, 1.0)),
            coasts: None,
            sc: None,
        }];
        let index = AreaIndex::build(&areas).unwrap();

        let loc = resolve_location("StP(nc)", &index).unwrap();
        assert_eq!(loc.area.id, "stp");
        assert_eq!(loc.coast, Some("nc"));

        assert_eq!(
            resolve_location("Mos", &index).unwrap_err(),
            MapError::UnknownArea("Mos".to_string())
        );
        assert_eq!(
            resolve_location("Mos!", &index).unwrap_err(),
            MapError::MalformedLocation("Mos!".to_string())
        );
    }
}
