//! SVG document generation for icons.
//!
//! # Document Structure
//!
//! ```xml
//! <svg width="192" height="192" xmlns="http://www.w3.org/2000/svg">
//!   <defs>  gradient + drop shadow  </defs>
//!   <rect/>        rounded background
//!   <g opacity>    two "person" glyphs joined by a line
//!   <text/>        line1, white
//!   <text/>        line2, pale yellow (optional)
//! </svg>
//! ```

use std::fmt::Write;

use super::layout::IconLayout;
use crate::utils::xml::escape;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

const GRADIENT_STOPS: [(&str, &str); 3] =
    [("0%", "#dc2626"), ("50%", "#ef4444"), ("100%", "#b91c1c")];

const LINE1_FILL: &str = "#ffffff";
const LINE2_FILL: &str = "#fef08a";
const FONT_FAMILY: &str = "Arial, sans-serif";
const SUB_LINE_SCALE: f64 = 1.05;

/// Build the complete SVG document for a resolved layout.
pub fn compose(layout: &IconLayout) -> String {
    let s = layout.size.px();
    let mut svg = String::with_capacity(4096);

    writeln!(svg, r#"<svg width="{s}" height="{s}" xmlns="{SVG_NS}">"#).unwrap();
    push_defs(&mut svg, s);

    let corner_radius = s / 8;
    writeln!(
        svg,
        r#"  <rect width="{s}" height="{s}" fill="url(#bgGradient)" rx="{corner_radius}" ry="{corner_radius}"/>"#
    )
    .unwrap();

    push_glyphs(&mut svg, layout);

    push_text(
        &mut svg,
        s,
        layout.main_y,
        layout.main_font_size,
        LINE1_FILL,
        &layout.split.line1,
    );
    if layout.has_sub_line() {
        // The second line is drawn 5% larger than its computed size.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let sub_size = (f64::from(layout.sub_font_size) * SUB_LINE_SCALE) as u32;
        push_text(
            &mut svg,
            s,
            layout.sub_y,
            sub_size,
            LINE2_FILL,
            &layout.split.line2,
        );
    }

    svg.push_str("</svg>");
    svg
}

fn push_defs(svg: &mut String, s: u32) {
    svg.push_str("  <defs>\n");
    svg.push_str(
        r#"    <linearGradient id="bgGradient" x1="0%" y1="0%" x2="100%" y2="100%">"#,
    );
    svg.push('\n');
    for (offset, color) in GRADIENT_STOPS {
        writeln!(
            svg,
            r#"      <stop offset="{offset}" style="stop-color:{color};stop-opacity:1"/>"#
        )
        .unwrap();
    }
    svg.push_str("    </linearGradient>\n");
    svg.push_str("    <filter id=\"shadow\">\n");
    writeln!(
        svg,
        r#"      <feDropShadow dx="0" dy="{}" stdDeviation="{}" flood-opacity="0.3"/>"#,
        s / 64,
        s / 128
    )
    .unwrap();
    svg.push_str("    </filter>\n");
    svg.push_str("  </defs>\n");
}

/// Two circle-and-curve figures connected by a line, top-left corner.
fn push_glyphs(svg: &mut String, layout: &IconLayout) {
    let s = layout.size.px();
    let params = layout.size.params();
    let (o, g, sp) = (params.glyph_offset, params.glyph_size, params.glyph_spacing);

    let circle_stroke = (s / 192).max(1);
    let line_stroke = s / 96;
    let radius = g / 6;
    let head_y = o + g / 3;
    let shoulder_y = head_y + g / 6;
    let curve_y = head_y + g / 3;

    svg.push_str("  <g opacity=\"0.25\">\n");
    for head_x in [o + g / 3, o + sp - g / 3] {
        writeln!(
            svg,
            r##"    <circle cx="{head_x}" cy="{head_y}" r="{radius}" fill="#ffffff" stroke="#ffffff" stroke-width="{circle_stroke}" stroke-opacity="0.5"/>"##
        )
        .unwrap();
        writeln!(
            svg,
            r##"    <path d="M {} {shoulder_y} Q {head_x} {curve_y} {} {shoulder_y}" fill="none" stroke="#ffffff" stroke-width="{line_stroke}" stroke-linecap="round"/>"##,
            head_x - radius,
            head_x + radius,
        )
        .unwrap();
    }
    writeln!(
        svg,
        r##"    <line x1="{}" y1="{head_y}" x2="{}" y2="{head_y}" stroke="#ffffff" stroke-width="{line_stroke}" stroke-linecap="round"/>"##,
        o + g / 3 + radius,
        o + sp - g / 3 - radius,
    )
    .unwrap();
    svg.push_str("  </g>\n");
}

fn push_text(svg: &mut String, s: u32, y: u32, font_size: u32, fill: &str, content: &str) {
    writeln!(
        svg,
        r#"  <text x="{}" y="{y}" font-family="{FONT_FAMILY}" font-size="{font_size}" font-weight="bold" fill="{fill}" text-anchor="middle" dominant-baseline="middle" filter="url(#shadow)" letter-spacing="{}">{}</text>"#,
        s / 2,
        s / 384,
        escape(content),
    )
    .unwrap();
}
