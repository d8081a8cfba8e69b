//! Stylesheet synthesis from the definition's style and nation tables.
//!
//! Area shapes use the `l` (land) and `w` (water) classes; unit and
//! supply-center markers use `nat-<id>` or `unowned` and take their fill from
//! the rules generated here. Values are copied verbatim, without validation.

use crate::board::{Nation, OrderedMap, StyleTable};

use super::node::Element;

pub const LAND_CLASS: &str = "l";
pub const WATER_CLASS: &str = "w";
pub const UNOWNED_CLASS: &str = "unowned";

/// Returns the style class of a nation's markers.
pub fn nation_class(nation: &str) -> String {
    format!("nat-{}", nation)
}

/// Builds the CSS text for a map.
pub fn stylesheet(style: &StyleTable, nations: &OrderedMap<Nation>) -> String {
    let mut css = String::with_capacity(512);
    css.push('\n');

    css.push_str(&format!(".{} {{ fill: {}; }}\n", LAND_CLASS, style.land_fill));
    css.push_str(&format!(".{} {{ fill: {}; }}\n", WATER_CLASS, style.water_fill));
    css.push_str(&format!(
        ".{}, .{} {{\n  stroke: {};\n  stroke-linejoin: {};\n}}\n",
        LAND_CLASS, WATER_CLASS, style.stroke, style.stroke_linejoin
    ));

    css.push_str(&format!(
        "text {{\n  font-family: {};\n  font-size: {};\n}}\n",
        style.font_family, style.font_size
    ));

    let mut selectors = vec![format!(".{}", UNOWNED_CLASS)];
    selectors.extend(nations.keys().map(|id| format!(".{}", nation_class(id))));
    css.push_str(&format!(
        "{} {{\n  stroke: {};\n}}\n",
        selectors.join(", "),
        style.stroke
    ));

    css.push_str(&format!(
        ".{} {{ fill: {}; }}\n",
        UNOWNED_CLASS, style.unowned_color
    ));

    for (id, nation) in nations.iter() {
        css.push_str(&format!(".{} {{ fill: {}; }}\n", nation_class(id), nation.color));
    }

    css
}

/// Wraps CSS text in a `<style>` element.
pub fn style_element(css: String) -> Element {
    Element::new("style").attr("type", "text/css").cdata(css)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> StyleTable {
        StyleTable {
            land_fill: "#ffe0a0".to_string(),
            water_fill: "#a0d0ff".to_string(),
            stroke: "black".to_string(),
            stroke_linejoin: "round".to_string(),
            font_family: "sans-serif".to_string(),
            font_size: "8".to_string(),
            unowned_color: "white".to_string(),
        }
    }

    fn nations(list: &[(&str, &str)]) -> OrderedMap<Nation> {
        list.iter()
            .map(|(id, color)| {
                (
                    id.to_string(),
                    Nation {
                        color: color.to_string(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn full_stylesheet() {
        let css = stylesheet(&style(), &nations(&[("A", "red"), ("B", "blue")]));
        let expected = "
.l { fill: #ffe0a0; }
.w { fill: #a0d0ff; }
.l, .w {
  stroke: black;
  stroke-linejoin: round;
}
text {
  font-family: sans-serif;
  font-size: 8;
}
.unowned, .nat-A, .nat-B {
  stroke: black;
}
.unowned { fill: white; }
.nat-A { fill: red; }
.nat-B { fill: blue; }
";
        assert_eq!(css, expected);
    }

    #[test]
    fn nation_rules_follow_definition_order() {
        let css = stylesheet(&style(), &nations(&[("Z", "green"), ("A", "red")]));
        let z = css.find(".nat-Z { fill").unwrap();
        let a = css.find(".nat-A { fill").unwrap();
        assert!(z < a);
        assert!(css.contains(".unowned, .nat-Z, .nat-A {"));
    }

    #[test]
    fn no_nations_leaves_only_unowned_selector() {
        let css = stylesheet(&style(), &OrderedMap::new());
        assert!(css.contains("\n.unowned {\n  stroke: black;\n}\n"));
        assert!(!css.contains("nat-"));
    }

    #[test]
    fn invalid_colors_pass_through() {
        let css = stylesheet(&style(), &nations(&[("A", "not-a-color;")]));
        assert!(css.contains(".nat-A { fill: not-a-color;; }"));
    }

    #[test]
    fn style_element_wraps_cdata() {
        let e = style_element(".x {}".to_string());
        assert_eq!(e.name(), "style");
        assert_eq!(e.get_attr("type"), Some("text/css"));
        assert_eq!(e.text_content(), ".x {}");
    }
}
