//! Block layout for the rendered résumé document
//!
//! Walks the parsed document in order and stacks layout boxes vertically,
//! wrapping text by the fixed 8-px character cell metric scaled per element.
//! The full subtree is laid out; content height is never clipped to the
//! viewport. A suppressed export control contributes no boxes at all, so the
//! content height collapses the way `display: none` would.

use crate::markup::EXPORT_CONTROL_CLASS;
use crate::Viewport;
use scraper::{ElementRef, Html, Selector};

/// Glyph cell width/height in CSS pixels at scale 1
pub const CHAR_CELL: u32 = 8;

const PAGE_MARGIN: u32 = 24;
const LINE_GAP: u32 = 4;
const SECTION_GAP: u32 = 12;
const RULE_GAP: u32 = 4;
pub const RULE_HEIGHT: u32 = 2;
const BULLET_INDENT: u32 = 18;
pub const AVATAR_SIZE: u32 = 96;
const AVATAR_GAP: u32 = 12;
const BUTTON_PAD_X: u32 = 12;
const BUTTON_PAD_Y: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxModel {
    pub margin: u32,
    pub border: u32,
    pub padding: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutBox {
    pub rect: Rect,
    pub box_model: BoxModel,
}

impl LayoutBox {
    pub fn content_width(&self) -> u32 {
        let total = self.box_model.margin + self.box_model.border + self.box_model.padding;
        self.rect.width.saturating_sub(total)
    }
}

/// What a layout box renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    /// The `h1` name line
    Title,
    /// `h2` section headings, drawn with an underline rule
    SectionHeading,
    /// `h3` sub-headings (job headings, "Core Competencies:")
    SubHeading,
    Paragraph,
    ContactLine,
    Bullet,
    /// The profile photo box; `src` carries the reference
    Image,
    /// The export control, present only while it is visible
    Button,
}

/// A laid-out box with its rendered text and element kind.
#[derive(Debug, Clone)]
pub struct LayoutNode {
    pub lb: LayoutBox,
    pub text: String,
    pub elem_type: ElementType,
    /// Text size multiplier over the 8-px cell (headings are 2)
    pub scale: u32,
    pub bold: bool,
    pub src: Option<String>,
}

/// The laid-out page: boxes in paint order plus the page extent in CSS px.
#[derive(Debug, Clone)]
pub struct DisplayList {
    pub nodes: Vec<LayoutNode>,
    pub width: u32,
    pub height: u32,
}

/// Compute the block layout for the document at the given viewport width.
pub fn layout_document(document: &Html, viewport: Viewport, show_export_control: bool) -> DisplayList {
    let body_sel = Selector::parse("body").unwrap();
    let mut builder = Builder {
        nodes: Vec::new(),
        y: PAGE_MARGIN,
        width: viewport.width,
        show_export_control,
        in_header: false,
    };
    if let Some(body) = document.select(&body_sel).next() {
        builder.walk_children(body);
    }
    let height = (builder.y + PAGE_MARGIN).max(viewport.height);
    DisplayList {
        nodes: builder.nodes,
        width: viewport.width,
        height,
    }
}

struct Builder {
    nodes: Vec<LayoutNode>,
    y: u32,
    width: u32,
    show_export_control: bool,
    in_header: bool,
}

impl Builder {
    fn walk_children(&mut self, el: ElementRef) {
        let children: Vec<ElementRef> = el.children().filter_map(ElementRef::wrap).collect();
        for child in children {
            self.visit(child);
        }
    }

    fn visit(&mut self, el: ElementRef) {
        let classes = el.value().attr("class").unwrap_or_default();
        match el.value().name() {
            "head" | "style" | "script" => {}
            "h1" => self.push_text(el, ElementType::Title, 2, true, 0, CHAR_CELL),
            "h2" => self.push_text(
                el,
                ElementType::SectionHeading,
                2,
                false,
                0,
                RULE_GAP + RULE_HEIGHT + SECTION_GAP,
            ),
            "h3" => self.push_text(el, ElementType::SubHeading, 1, true, 0, LINE_GAP),
            "p" => self.push_text(el, ElementType::Paragraph, 1, false, 0, CHAR_CELL),
            "li" => self.push_text(el, ElementType::Bullet, 1, false, BULLET_INDENT, LINE_GAP),
            "img" => self.place_image(el),
            "header" => self.layout_header(el),
            "section" => {
                self.walk_children(el);
                self.y += SECTION_GAP;
            }
            "div" if classes.contains(EXPORT_CONTROL_CLASS) => {
                if self.show_export_control {
                    self.place_button(el);
                }
            }
            "div" if classes.contains("contact-item") => {
                self.push_text(el, ElementType::ContactLine, 1, false, 0, LINE_GAP)
            }
            _ => self.walk_children(el),
        }
    }

    // The header lays out its text column beside the reserved photo box.
    fn layout_header(&mut self, el: ElementRef) {
        let start_y = self.y;
        self.in_header = true;
        self.walk_children(el);
        self.in_header = false;
        // The photo box may extend below the header text column.
        self.y = self.y.max(start_y + AVATAR_SIZE) + SECTION_GAP;
    }

    fn text_width(&self, indent: u32) -> u32 {
        let mut avail = self.width.saturating_sub(2 * PAGE_MARGIN + indent);
        if self.in_header {
            avail = avail.saturating_sub(AVATAR_SIZE + AVATAR_GAP);
        }
        avail.max(CHAR_CELL)
    }

    fn push_text(
        &mut self,
        el: ElementRef,
        elem_type: ElementType,
        scale: u32,
        bold: bool,
        indent: u32,
        after_gap: u32,
    ) {
        let text = squash(&el.text().collect::<String>());
        if text.is_empty() {
            return;
        }
        let avail = self.text_width(indent);
        let chars_per_line = (avail / (CHAR_CELL * scale)).max(1) as usize;
        let wrapped = wrap(&text, chars_per_line);
        let lines = wrapped.lines().count().max(1) as u32;
        let line_height = CHAR_CELL * scale + LINE_GAP;
        let mut box_h = lines * line_height;
        if elem_type == ElementType::SectionHeading {
            box_h += RULE_GAP + RULE_HEIGHT;
        }
        self.nodes.push(LayoutNode {
            lb: LayoutBox {
                rect: Rect {
                    x: (PAGE_MARGIN + indent) as i32,
                    y: self.y as i32,
                    width: avail,
                    height: box_h,
                },
                box_model: BoxModel {
                    margin: 0,
                    border: 0,
                    padding: 0,
                },
            },
            text: wrapped,
            elem_type,
            scale,
            bold,
            src: None,
        });
        self.y += box_h + after_gap;
    }

    fn place_image(&mut self, el: ElementRef) {
        let Some(src) = el.value().attr("src") else {
            return;
        };
        // Photo sits in the reserved top-right corner of the header; images
        // encountered elsewhere stack like blocks.
        let (x, y) = if self.in_header {
            (
                (self.width.saturating_sub(PAGE_MARGIN + AVATAR_SIZE)) as i32,
                (self.nodes.first().map(|n| n.lb.rect.y).unwrap_or(PAGE_MARGIN as i32)),
            )
        } else {
            let y = self.y as i32;
            self.y += AVATAR_SIZE + SECTION_GAP;
            ((PAGE_MARGIN) as i32, y)
        };
        self.nodes.push(LayoutNode {
            lb: LayoutBox {
                rect: Rect {
                    x,
                    y,
                    width: AVATAR_SIZE,
                    height: AVATAR_SIZE,
                },
                box_model: BoxModel {
                    margin: 0,
                    border: 0,
                    padding: 0,
                },
            },
            text: String::new(),
            elem_type: ElementType::Image,
            scale: 1,
            bold: false,
            src: Some(src.to_string()),
        });
    }

    fn place_button(&mut self, el: ElementRef) {
        let label = squash(&el.text().collect::<String>());
        if label.is_empty() {
            return;
        }
        let w = label.chars().count() as u32 * CHAR_CELL + 2 * BUTTON_PAD_X;
        let h = CHAR_CELL + 2 * BUTTON_PAD_Y;
        let x = (self.width.saturating_sub(w) / 2) as i32;
        self.nodes.push(LayoutNode {
            lb: LayoutBox {
                rect: Rect {
                    x,
                    y: self.y as i32,
                    width: w,
                    height: h,
                },
                box_model: BoxModel {
                    margin: 0,
                    border: 1,
                    padding: BUTTON_PAD_Y,
                },
            },
            text: label,
            elem_type: ElementType::Button,
            scale: 1,
            bold: false,
            src: None,
        });
        self.y += h + SECTION_GAP;
    }
}

fn squash(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// Greedy word wrap against a per-line character limit.
fn wrap(text: &str, chars_per_line: usize) -> String {
    let mut lines = Vec::new();
    let mut cur = String::new();
    for word in text.split_whitespace() {
        if cur.chars().count() + word.chars().count() + 1 > chars_per_line && !cur.is_empty() {
            lines.push(cur);
            cur = word.to_string();
        } else {
            if !cur.is_empty() {
                cur.push(' ');
            }
            cur.push_str(word);
        }
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{content, markup, Viewport};

    fn laid_out(show_export_control: bool) -> DisplayList {
        let html = markup::render_page(content::resume());
        let document = Html::parse_document(&html);
        layout_document(&document, Viewport::default(), show_export_control)
    }

    #[test]
    fn layout_places_title_first() {
        let list = laid_out(true);
        assert!(!list.nodes.is_empty());
        assert_eq!(list.nodes[0].elem_type, ElementType::Title);
        assert_eq!(list.nodes[0].scale, 2);
        assert!(list.nodes[0].lb.rect.width > 0);
    }

    #[test]
    fn layout_covers_every_section() {
        let list = laid_out(true);
        let headings: Vec<&str> = list
            .nodes
            .iter()
            .filter(|n| n.elem_type == ElementType::SectionHeading)
            .map(|n| n.text.as_str())
            .collect();
        assert_eq!(headings.len(), 4);
        assert!(headings[0].starts_with("Summary"));
        let bullets = list
            .nodes
            .iter()
            .filter(|n| n.elem_type == ElementType::Bullet)
            .count();
        // competencies + job points + projects + skills
        let r = content::resume();
        let expected =
            r.competencies.len() + r.experience.iter().map(|j| j.points.len()).sum::<usize>()
                + r.projects.len()
                + r.skills.len();
        assert_eq!(bullets, expected);
    }

    #[test]
    fn boxes_stack_top_to_bottom() {
        let list = laid_out(true);
        let mut last_y = i32::MIN;
        for node in list
            .nodes
            .iter()
            .filter(|n| n.elem_type != ElementType::Image)
        {
            assert!(node.lb.rect.y >= last_y, "boxes out of order");
            last_y = node.lb.rect.y;
        }
        assert!(list.height > Viewport::default().height);
    }

    #[test]
    fn suppressed_control_collapses_layout() {
        let shown = laid_out(true);
        let hidden = laid_out(false);
        assert!(shown
            .nodes
            .iter()
            .any(|n| n.elem_type == ElementType::Button));
        assert!(!hidden
            .nodes
            .iter()
            .any(|n| n.elem_type == ElementType::Button));
        assert!(hidden.height < shown.height);
    }

    #[test]
    fn wrap_respects_the_line_limit() {
        let wrapped = wrap("alpha beta gamma delta", 11);
        assert_eq!(wrapped, "alpha beta\ngamma delta");
    }
}
