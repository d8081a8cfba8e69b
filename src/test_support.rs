//! Shared fixtures for unit tests.

/// A small definition: two nations, five areas.
///
/// `Par`, `Bre` and `Spa` are supply centers; `Spa` has two coasts; `nth` has
/// no short name; `Bur` has no supply center.
pub fn game_yaml() -> String {
    r##"
name: Tiny
size: [200, 100]
style:
  land_fill: "#ffe0a0"
  water_fill: "#a0d0ff"
  stroke: black
  stroke_linejoin: round
  font_family: sans-serif
  font_size: 8
  unowned_color: white
nations:
  A: {color: red}
  B: {color: blue}
asset_shapes:
  army:
    - points: "0,-4 4,4 -4,4"
  fleet:
    - path: "M-5 0 L5 0 L3 3 L-3 3 Z"
  sc:
    - circle: 3
      class: ring
areas:
  - {id: par, name: Paris, short: Par, label: [4, 4], point: [5, 5], sc: [10, 10]}
  - {id: bre, name: Brest, short: Bre, label: [20, 4], point: [22, 6], sc: [25, 9]}
  - id: spa
    name: Spain
    short: Spa
    label: [40, 40]
    point: [42, 42]
    sc: [45, 45]
    coasts:
      nc: [41, 30]
      sc: [44, 55]
  - {id: nth, name: North Sea, label: [60, 10], point: [62, 12]}
  - {id: bur, name: Burgundy, short: Bur, label: [30, 20], point: [31, 21]}
shapes:
  par:
    - {points: "0,0 10,0 10,10", class: l}
  bre:
    - {path: "M20 0 L30 0 L30 10 Z", class: l}
  spa:
    - {points: "30,30 50,30 50,50", class: l}
  nth:
    - {path: "M60 0 L80 0 L80 20 Z", class: w}
  bur:
    - {points: "28,18 34,18 34,24", class: l}
"##
    .to_string()
}

fn section(name: &str, body: &str) -> String {
    if body.is_empty() {
        return String::new();
    }
    let mut out = format!("{}:\n", name);
    for line in body.lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// A state for [`game_yaml`]. `units` and `scs` are YAML mapping bodies, one
/// nation per line, e.g. `A: {armies: [Par]}`.
pub fn state_yaml(units: &str, scs: &str) -> String {
    format!(
        "game: tiny\ndate: Spring 1901\n{}{}",
        section("units", units),
        section("scs", scs)
    )
}
