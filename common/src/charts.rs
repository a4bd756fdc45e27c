//! SVG chart generation for the statistics dashboard
//!
//! Pure string builders so the dashboard markup is testable without a
//! browser. The frontend injects the returned SVG directly into the page.

use crate::stats::{MaterialDatum, RecyclabilityDatum};
use std::f64::consts::PI;

const COLORS: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8"];

const BAR_FILL: &str = "#8884d8";

/// Generate the material-distribution bar chart
pub fn material_bar_chart_svg(data: &[MaterialDatum]) -> String {
    let width = 460;
    let height = 300;
    let margin = 40;
    let chart_width = width - 2 * margin;
    let chart_height = height - 2 * margin;

    let max_amount = data.iter().map(|d| d.amount).max().unwrap_or(0).max(1);

    let mut svg = String::new();
    svg.push_str(&format!(
        r##"<svg viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg">"##,
        width, height
    ));

    // Axes
    svg.push_str(&format!(
        r##"<line x1="{m}" y1="{m}" x2="{m}" y2="{b}" stroke="#999" stroke-width="1"/>"##,
        m = margin,
        b = height - margin
    ));
    svg.push_str(&format!(
        r##"<line x1="{m}" y1="{b}" x2="{r}" y2="{b}" stroke="#999" stroke-width="1"/>"##,
        m = margin,
        b = height - margin,
        r = width - margin
    ));
    svg.push_str(&format!(
        r##"<text x="{}" y="{}" font-size="10" text-anchor="end" fill="#666">{}</text>"##,
        margin - 4,
        margin + 4,
        max_amount
    ));

    if !data.is_empty() {
        let slot_width = chart_width as f64 / data.len() as f64;
        let bar_width = slot_width * 0.6;

        for (i, datum) in data.iter().enumerate() {
            let bar_height = chart_height as f64 * datum.amount as f64 / max_amount as f64;
            let x = margin as f64 + i as f64 * slot_width + (slot_width - bar_width) / 2.0;
            let y = (height - margin) as f64 - bar_height;

            svg.push_str(&format!(
                r##"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"##,
                x, y, bar_width, bar_height, BAR_FILL
            ));
            svg.push_str(&format!(
                r##"<text x="{:.1}" y="{}" font-size="11" text-anchor="middle" fill="#333">{}</text>"##,
                x + bar_width / 2.0,
                height - margin + 14,
                datum.name
            ));
            svg.push_str(&format!(
                r##"<text x="{:.1}" y="{:.1}" font-size="10" text-anchor="middle" fill="#666">{}</text>"##,
                x + bar_width / 2.0,
                y - 4.0,
                datum.amount
            ));
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Generate the recyclability pie chart with a legend
pub fn recyclability_pie_chart_svg(data: &[RecyclabilityDatum]) -> String {
    let width = 460;
    let height = 300;
    let cx = 180.0;
    let cy = 150.0;
    let radius = 100.0;

    let total: u32 = data.iter().map(|d| d.value).sum();

    let mut svg = String::new();
    svg.push_str(&format!(
        r##"<svg viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg">"##,
        width, height
    ));

    if total == 0 {
        svg.push_str(&format!(
            r##"<text x="{}" y="{}" font-size="12" text-anchor="middle" fill="#666">No data</text>"##,
            cx, cy
        ));
        svg.push_str("</svg>");
        return svg;
    }

    // Start at 12 o'clock, clockwise
    let mut angle = -PI / 2.0;

    for (i, datum) in data.iter().enumerate() {
        let fraction = datum.value as f64 / total as f64;
        let sweep = fraction * 2.0 * PI;
        let color = COLORS[i % COLORS.len()];

        if data.len() == 1 || fraction >= 1.0 {
            svg.push_str(&format!(
                r##"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"##,
                cx, cy, radius, color
            ));
        } else {
            let x1 = cx + radius * angle.cos();
            let y1 = cy + radius * angle.sin();
            let end = angle + sweep;
            let x2 = cx + radius * end.cos();
            let y2 = cy + radius * end.sin();
            let large_arc = if sweep > PI { 1 } else { 0 };

            svg.push_str(&format!(
                r##"<path d="M {cx} {cy} L {x1:.2} {y1:.2} A {r} {r} 0 {large} 1 {x2:.2} {y2:.2} Z" fill="{color}"/>"##,
                cx = cx,
                cy = cy,
                x1 = x1,
                y1 = y1,
                r = radius,
                large = large_arc,
                x2 = x2,
                y2 = y2,
                color = color
            ));
        }

        // Legend entry
        let legend_y = 80.0 + i as f64 * 22.0;
        svg.push_str(&format!(
            r##"<rect x="320" y="{:.1}" width="12" height="12" fill="{}"/>"##,
            legend_y, color
        ));
        svg.push_str(&format!(
            r##"<text x="338" y="{:.1}" font-size="11" fill="#333">{} {:.0}%</text>"##,
            legend_y + 10.0,
            datum.name,
            fraction * 100.0
        ));

        angle += sweep;
    }

    svg.push_str("</svg>");
    svg
}
