//! Star shape, per-instance style scope and markup generation.
//!
//! Every star is the same five-point shape split into two mirrored polygons. Fills come from
//! three linear gradients whose ids and class names are namespaced by the instance's
//! [`StyleScope`], so several widgets can share one document without colliding.

use crate::config::RatingConfig;
use crate::input::{SIDE_ATTR, Side};
use crate::instance::InstanceId;
use crate::paint::{Paint, StarPaint};
use std::fmt::Write as _;

pub const VIEW_BOX: &str = "64 -59 228.6 218";
pub const SVG_WIDTH: &str = "228.6px";
pub const SVG_HEIGHT: &str = "218px";
pub const LEFT_POINTS: &str = "146.7,17.6 64,23.9 127.1,77.7 107.5,158.3 178.2,114.9 178.3,-59";
pub const RIGHT_POINTS: &str = "292.6,24.1 209.9,17.7 178.3,-59 178.2,114.9 248.8,158.4 229.4,77.8";

/// Gradient vector shared by all three fills.
pub const GRADIENT_X1: &str = "121.1501";
pub const GRADIENT_Y1: &str = "-80.35";
pub const GRADIENT_X2: &str = "121.15";
pub const GRADIENT_Y2: &str = "102.0045";

pub const STAR_CLASS: &str = "fs-star";
pub const STAR_SVG_CLASS: &str = "fs-star-svg";

/// Names generated for one widget instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleScope {
    uid: String,
}

impl StyleScope {
    #[must_use]
    pub fn new(id: InstanceId) -> Self {
        Self {
            uid: format!("fs{}", id.get()),
        }
    }

    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Gradient element id backing `paint`, e.g. `fs3_SVGID_3_`.
    #[must_use]
    pub fn gradient_id(&self, paint: Paint) -> String {
        let slot = match paint {
            Paint::Empty => 1,
            Paint::Hovered => 2,
            Paint::Active => 3,
        };
        format!("{}_SVGID_{slot}_", self.uid)
    }

    /// Stylesheet binding each paint class to its gradient.
    #[must_use]
    pub fn stylesheet(&self) -> String {
        Paint::ALL.iter().fold(String::new(), |mut css, paint| {
            let _ = write!(
                css,
                ".{}{{fill:url(#{});}}",
                paint.class_name(self),
                self.gradient_id(*paint)
            );
            css
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientFill {
    pub id: String,
    pub start: String,
    pub end: String,
}

impl GradientFill {
    /// A gradient whose stops match renders as a flat color.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.start == self.end
    }

    fn write_markup(&self, out: &mut String) {
        let _ = write!(
            out,
            r#"<linearGradient id="{}" gradientUnits="userSpaceOnUse" x1="{GRADIENT_X1}" y1="{GRADIENT_Y1}" x2="{GRADIENT_X2}" y2="{GRADIENT_Y2}"><stop offset="0" style="stop-color:{}"/><stop offset="1" style="stop-color:{}"/></linearGradient>"#,
            self.id, self.start, self.end
        );
    }
}

/// Everything needed to draw one star of a widget; identical for every position.
#[derive(Debug, Clone, PartialEq)]
pub struct StarTemplate {
    pub scope: StyleScope,
    pub star_size: f64,
    pub stroke_width: f64,
    pub gradients: [GradientFill; 3],
}

impl StarTemplate {
    #[must_use]
    pub fn new(config: &RatingConfig, scope: StyleScope) -> Self {
        let (active_start, active_end) = config.active_stops();
        let fill = |paint: Paint, start: &str, end: &str| GradientFill {
            id: scope.gradient_id(paint),
            start: start.to_string(),
            end: end.to_string(),
        };
        let gradients = [
            fill(Paint::Empty, &config.empty_color, &config.empty_color),
            fill(Paint::Hovered, &config.hover_color, &config.hover_color),
            fill(Paint::Active, active_start, active_end),
        ];
        Self {
            scope,
            star_size: config.star_size,
            stroke_width: config.stroke_width,
            gradients,
        }
    }

    #[must_use]
    pub fn wrapper_style(&self) -> String {
        format!("width:{}px;height:{}px;", self.star_size, self.star_size)
    }

    #[must_use]
    pub fn svg_style(&self) -> String {
        format!(
            "enable-background:new {VIEW_BOX};stroke-width:{}px;",
            self.stroke_width
        )
    }

    #[must_use]
    pub fn class_for(&self, paint: Paint) -> String {
        paint.class_name(&self.scope)
    }

    /// Static markup for one star painted as `paint`.
    #[must_use]
    pub fn star_markup(&self, paint: StarPaint) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<div class="{STAR_CLASS}" style="{}"><svg version="1.1" class="{STAR_SVG_CLASS}" xmlns="http://www.w3.org/2000/svg" x="0px" y="0px" width="{SVG_WIDTH}" height="{SVG_HEIGHT}" viewBox="{VIEW_BOX}" style="{}" xml:space="preserve"><style type="text/css">{}</style>"#,
            self.wrapper_style(),
            self.svg_style(),
            self.scope.stylesheet()
        );
        for gradient in &self.gradients {
            gradient.write_markup(&mut out);
        }
        for (side, points, half) in [
            (Side::Left, LEFT_POINTS, paint.left),
            (Side::Right, RIGHT_POINTS, paint.right),
        ] {
            let _ = write!(
                out,
                r#"<polygon {SIDE_ATTR}="{}" class="{}" points="{points}"/>"#,
                side.as_str(),
                self.class_for(half)
            );
        }
        out.push_str("</svg></div>");
        out
    }

    /// Static markup for a whole row, one star per entry of `row`.
    #[must_use]
    pub fn row_markup(&self, row: &[StarPaint]) -> String {
        row.iter().map(|paint| self.star_markup(*paint)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(config: &RatingConfig, id: u32) -> StarTemplate {
        StarTemplate::new(config, StyleScope::new(InstanceId::new(id)))
    }

    #[test]
    fn stylesheet_binds_each_class_to_its_gradient() {
        let scope = StyleScope::new(InstanceId::new(4));
        let css = scope.stylesheet();
        assert!(css.contains(".svg-empty-fs4{fill:url(#fs4_SVGID_1_);}"));
        assert!(css.contains(".svg-hovered-fs4{fill:url(#fs4_SVGID_2_);}"));
        assert!(css.contains(".svg-active-fs4{fill:url(#fs4_SVGID_3_);}"));
    }

    #[test]
    fn empty_and_hover_fills_are_flat_active_is_gradient() {
        let tpl = template(&RatingConfig::default(), 1);
        assert!(tpl.gradients[0].is_flat());
        assert!(tpl.gradients[1].is_flat());
        assert!(!tpl.gradients[2].is_flat());
        assert_eq!(tpl.gradients[2].start, "#FEF7CD");

        let flat = RatingConfig {
            use_gradient: false,
            ..RatingConfig::default()
        };
        let tpl = template(&flat, 1);
        assert!(tpl.gradients[2].is_flat());
        assert_eq!(tpl.gradients[2].start, "yellow");
    }

    #[test]
    fn star_markup_carries_both_halves_and_size() {
        let cfg = RatingConfig {
            star_size: 24.0,
            stroke_width: 2.0,
            ..RatingConfig::default()
        };
        let tpl = template(&cfg, 9);
        let html = tpl.star_markup(StarPaint {
            left: Paint::Active,
            right: Paint::Empty,
        });
        assert!(html.contains("width:24px;height:24px;"));
        assert!(html.contains("stroke-width:2px;"));
        assert!(html.contains(r#"data-side="left" class="svg-active-fs9""#));
        assert!(html.contains(r#"data-side="right" class="svg-empty-fs9""#));
        assert_eq!(html.matches("<linearGradient").count(), 3);
    }

    #[test]
    fn row_markup_repeats_star_per_entry() {
        let tpl = template(&RatingConfig::default(), 2);
        let row = vec![StarPaint::EMPTY; 5];
        let html = tpl.row_markup(&row);
        assert_eq!(html.matches(r#"class="fs-star""#).count(), 5);
    }

    #[test]
    fn unvalidated_values_pass_through() {
        let cfg = RatingConfig {
            star_size: -10.0,
            empty_color: "not-a-color".to_string(),
            ..RatingConfig::default()
        };
        let html = template(&cfg, 3).star_markup(StarPaint::EMPTY);
        assert!(html.contains("width:-10px"));
        assert!(html.contains("stop-color:not-a-color"));
    }
}
