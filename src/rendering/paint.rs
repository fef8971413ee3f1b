//! Display-list construction: layout boxes → flat paint commands

use crate::rendering::layout::{DisplayList, ElementType, LayoutNode, CHAR_CELL, RULE_HEIGHT};

pub const WHITE: (u8, u8, u8, u8) = (255, 255, 255, 255);
pub const INK: (u8, u8, u8, u8) = (32, 32, 32, 255);
pub const MUTED: (u8, u8, u8, u8) = (96, 96, 96, 255);
pub const ACCENT: (u8, u8, u8, u8) = (58, 109, 163, 255);
pub const CONTROL_FILL: (u8, u8, u8, u8) = (229, 231, 235, 255);

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    SolidRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        rgba: (u8, u8, u8, u8),
    },
    Glyphs {
        x: i32,
        y: i32,
        text: String,
        /// Device pixels per glyph pixel before supersampling
        scale: u32,
        bold: bool,
        rgba: (u8, u8, u8, u8),
    },
    Image {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        src: String,
    },
}

/// Lower a laid-out page to paint commands, background first.
pub fn build_display_list(list: &DisplayList) -> Vec<PaintCommand> {
    let mut commands = vec![PaintCommand::SolidRect {
        x: 0,
        y: 0,
        width: list.width,
        height: list.height,
        rgba: WHITE,
    }];
    for node in &list.nodes {
        paint_node(&mut commands, node);
    }
    commands
}

fn paint_node(commands: &mut Vec<PaintCommand>, node: &LayoutNode) {
    let rect = node.lb.rect;
    match node.elem_type {
        ElementType::Image => {
            if let Some(src) = &node.src {
                commands.push(PaintCommand::Image {
                    x: rect.x,
                    y: rect.y,
                    width: rect.width,
                    height: rect.height,
                    src: src.clone(),
                });
            }
        }
        ElementType::Button => {
            commands.push(PaintCommand::SolidRect {
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
                rgba: CONTROL_FILL,
            });
            let pad = node.lb.box_model.padding as i32;
            commands.push(PaintCommand::Glyphs {
                x: rect.x + (rect.width as i32 - node.text.chars().count() as i32 * CHAR_CELL as i32) / 2,
                y: rect.y + pad,
                text: node.text.clone(),
                scale: 1,
                bold: false,
                rgba: INK,
            });
        }
        ElementType::SectionHeading => {
            push_lines(commands, node, ACCENT);
            commands.push(PaintCommand::SolidRect {
                x: rect.x,
                y: rect.y + (rect.height - RULE_HEIGHT) as i32,
                width: rect.width,
                height: RULE_HEIGHT,
                rgba: ACCENT,
            });
        }
        ElementType::ContactLine => push_lines(commands, node, MUTED),
        ElementType::Bullet => {
            // Disc marker beside the first line
            let marker = (CHAR_CELL / 2).max(2);
            commands.push(PaintCommand::SolidRect {
                x: rect.x - 10,
                y: rect.y + 2,
                width: marker,
                height: marker,
                rgba: INK,
            });
            push_lines(commands, node, INK);
        }
        ElementType::Title | ElementType::SubHeading | ElementType::Paragraph => {
            push_lines(commands, node, INK)
        }
    }
}

fn push_lines(commands: &mut Vec<PaintCommand>, node: &LayoutNode, rgba: (u8, u8, u8, u8)) {
    let line_height = (CHAR_CELL * node.scale + 4) as i32;
    for (i, line) in node.text.lines().enumerate() {
        commands.push(PaintCommand::Glyphs {
            x: node.lb.rect.x,
            y: node.lb.rect.y + i as i32 * line_height,
            text: line.to_string(),
            scale: node.scale,
            bold: node.bold,
            rgba,
        });
    }
}
