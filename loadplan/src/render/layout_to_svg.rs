use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::render::RenderedLayout;
use crate::render::svg_util;
use crate::render::svg_util::SvgDrawOptions;

pub fn layout_to_svg(layout: &RenderedLayout, options: SvgDrawOptions, title: &str) -> Document {
    let theme = &options.theme;
    let (length, width) = (layout.unit_length, layout.unit_width);
    let scale = f32::max(length, width);

    let margin = 0.08 * scale;
    let font_size = 0.025 * scale;
    let legend_width = match options.legend {
        true => 0.25 * scale,
        false => 0.0,
    };
    let stroke_width = f32::min(length, width) * 0.001 * theme.stroke_width_multiplier;

    let header = {
        let content = match title.is_empty() {
            true => "Transport unit loading plan".to_string(),
            false => format!("Transport unit loading plan | {title}"),
        };
        Text::new(content)
            .set("x", 0.0)
            .set("y", -0.5 * margin)
            .set("font-size", 1.2 * font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let axes = Group::new()
        .set("id", "axes")
        .add(
            Text::new(format!("Length (m): {length:.2}"))
                .set("x", 0.5 * length)
                .set("y", width + 0.6 * margin)
                .set("font-size", font_size)
                .set("font-family", "monospace")
                .set("text-anchor", "middle"),
        )
        .add(
            Text::new(format!("Width (m): {width:.2}"))
                .set("x", -0.4 * margin)
                .set("y", 0.5 * width)
                .set("font-size", font_size)
                .set("font-family", "monospace")
                .set("text-anchor", "middle")
                .set(
                    "transform",
                    format!("rotate(-90 {} {})", -0.4 * margin, 0.5 * width),
                ),
        );

    //draw the floor of the unit
    let unit_group = Group::new()
        .set("id", "unit")
        .add(svg_util::rect(
            0.0,
            0.0,
            length,
            width,
            &[
                ("fill", &*format!("{}", theme.unit_fill)),
                ("fill-opacity", "0.3"),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "transport unit, length: {length:.3}, width: {width:.3}, floor usage: {:.1}%",
            layout.floor_usage() * 100.0
        )));

    //draw pallets
    let pallets_group = layout
        .placed
        .iter()
        .fold(Group::new().set("id", "pallets"), |group, pp| {
            let color = theme.pallet_fill(pp.type_index);
            let stroke_color = svg_util::change_brightness(color, 0.5);
            let pallet = Group::new()
                .set("class", format!("type_{}", pp.type_index))
                .add(
                    svg_util::rect(
                        pp.x,
                        pp.y,
                        pp.length,
                        pp.width,
                        &[
                            ("fill", &*format!("{color}")),
                            ("fill-opacity", &*format!("{}", theme.pallet_opacity)),
                            ("stroke", &*format!("{stroke_color}")),
                            ("stroke-width", &*format!("{stroke_width}")),
                        ],
                    )
                    .add(Title::new(format!(
                        "pallet, type: {}, x: {:.3}, y: {:.3}, footprint: {}x{}",
                        pp.label, pp.x, pp.y, pp.length, pp.width
                    ))),
                );
            let pallet = match options.labels {
                false => pallet,
                true => pallet.add(svg_util::centered_text(
                    pp.x + 0.5 * pp.length,
                    pp.y + 0.5 * pp.width,
                    &[pp.label.clone(), format!("{}x{}m", pp.length, pp.width)],
                    0.2 * f32::min(pp.length, pp.width),
                    theme.text_color,
                )),
            };
            group.add(pallet)
        });

    let legend_group = match options.legend {
        false => None,
        true => {
            let x = length + 0.5 * margin;
            let entry_height = 1.6 * font_size;
            let group = layout.legend().into_iter().enumerate().fold(
                Group::new().set("id", "legend"),
                |group, (row, (type_index, label))| {
                    let y = row as f32 * entry_height;
                    group
                        .add(svg_util::rect(
                            x,
                            y,
                            font_size,
                            font_size,
                            &[
                                ("fill", &*format!("{}", theme.pallet_fill(type_index))),
                                ("fill-opacity", &*format!("{}", theme.pallet_opacity)),
                                ("stroke", "black"),
                                ("stroke-width", &*format!("{stroke_width}")),
                            ],
                        ))
                        .add(
                            Text::new(label)
                                .set("x", x + 1.5 * font_size)
                                .set("y", y + 0.85 * font_size)
                                .set("font-size", font_size)
                                .set("font-family", "sans-serif"),
                        )
                },
            );
            Some(group)
        }
    };

    let vbox_svg = (
        -margin,
        -margin,
        length + 2.0 * margin + legend_width,
        width + 2.0 * margin,
    );

    let document = Document::new()
        .set("viewBox", vbox_svg)
        .add(header)
        .add(axes)
        .add(unit_group)
        .add(pallets_group);

    match legend_group {
        Some(legend) => document.add(legend),
        None => document,
    }
}
