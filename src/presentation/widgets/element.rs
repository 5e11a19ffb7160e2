use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget};
use unicode_width::UnicodeWidthChar;

use crate::core::element::Element;

/// Draws an element tree top to bottom.
///
/// `focused` is an index into [`Element::interactives`]; the matching node is
/// highlighted.
#[derive(Debug, Clone, Copy)]
pub struct ElementWidget<'a> {
    element: &'a Element,
    focused: Option<usize>,
}

impl<'a> ElementWidget<'a> {
    pub fn new(element: &'a Element) -> Self {
        Self {
            element,
            focused: None,
        }
    }

    pub fn focused(mut self, focused: Option<usize>) -> Self {
        self.focused = focused;
        self
    }
}

struct FocusCursor {
    next: usize,
    focused: Option<usize>,
}

impl FocusCursor {
    fn advance(&mut self) -> bool {
        let index = self.next;
        self.next += 1;
        self.focused == Some(index)
    }
}

impl Widget for ElementWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let mut cursor = FocusCursor {
            next: 0,
            focused: self.focused,
        };
        render_node(self.element, area, buf, &mut cursor);
    }
}

fn render_node(element: &Element, area: Rect, buf: &mut Buffer, cursor: &mut FocusCursor) {
    match element {
        Element::Container { children, .. } => {
            let mut y = area.y;
            for child in children {
                let height = child.height().min(area.bottom().saturating_sub(y));
                let child_area = Rect::new(area.x, y, area.width, height);
                render_node(child, child_area, buf, cursor);
                y = y.saturating_add(height);
            }
        }
        Element::Text { content, .. } => {
            if !area.is_empty() {
                Paragraph::new(content.as_str()).render(area, buf);
            }
        }
        Element::Button { label, .. } => {
            let focused = cursor.advance();
            if area.is_empty() {
                return;
            }
            let style = if focused {
                Style::default().reversed()
            } else {
                Style::default().bold()
            };
            Line::styled(format!("[ {label} ]"), style).render(area, buf);
        }
        Element::Input { value, .. } => {
            let focused = cursor.advance();
            if area.is_empty() {
                return;
            }
            let border_style = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().dim()
            };
            let block = Block::bordered().border_style(border_style);
            let inner = block.inner(area);
            block.render(area, buf);
            if !inner.is_empty() {
                Line::raw(visible_tail(value, inner.width as usize)).render(inner, buf);
            }
        }
    }
}

/// Longest suffix of `value` that fits in `width` columns
fn visible_tail(value: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = value.len();
    for (idx, c) in value.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &value[start..]
}
