//! A [`Painter`] that records every call instead of drawing.
//!
//! Used by the widget tests, and by hosts that want to snapshot an
//! inspector frame as JSON. Layout is a simplified immediate-mode flow:
//! items stack vertically, `same_line` places the next item to the right of
//! the previous one, and a group becomes a single item when it ends.

use glam::Vec2;
use serde::Serialize;

use crate::geometry::{Color32, Rect};
use crate::painter::Painter;

/// Gap between laid-out items (px).
const ITEM_SPACING: f32 = 4.0;
/// Height of one text line (px).
const LINE_HEIGHT: f32 = 14.0;
/// Advance per character of text (px).
const CHAR_WIDTH: f32 = 7.0;
/// Width of one table column (px).
const COLUMN_WIDTH: f32 = 64.0;

/// One recorded [`Painter`] call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    BeginOverlay,
    EndOverlay,
    BeginGroup,
    EndGroup,
    SameLine,
    Reserve {
        id: String,
        rect: Rect,
    },
    RectFilled {
        rect: Rect,
        color: Color32,
    },
    Rect {
        rect: Rect,
        color: Color32,
        rounding: f32,
        thickness: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color32,
        thickness: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color32,
        segments: u32,
        thickness: f32,
    },
    Text {
        text: String,
        color: Option<Color32>,
        /// Table cell as `(row, column)` when emitted inside a table.
        cell: Option<(usize, usize)>,
    },
    Separator,
    BeginTable {
        id: String,
        columns: usize,
    },
    NextColumn,
    EndTable,
}

#[derive(Debug)]
struct GroupFrame {
    start: Vec2,
    bounds: Option<Rect>,
    indent: f32,
    line_bottom: f32,
}

#[derive(Debug)]
struct TableFrame {
    origin: Vec2,
    columns: usize,
    cell: Option<usize>,
}

impl TableFrame {
    fn position(&self) -> (usize, usize) {
        let cell = self.cell.unwrap_or(0);
        (cell / self.columns.max(1), cell % self.columns.max(1))
    }
}

/// Recording painter with a small layout model.
#[derive(Debug)]
pub struct RecordingPainter {
    commands: Vec<DrawCommand>,
    next_pos: Vec2,
    indent: f32,
    line_bottom: f32,
    last_item: Option<Rect>,
    groups: Vec<GroupFrame>,
    table: Option<TableFrame>,
}

impl Default for RecordingPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingPainter {
    /// Start laying out at the screen origin.
    pub fn new() -> Self {
        Self::at(Vec2::ZERO)
    }

    /// Start laying out at `origin`.
    pub fn at(origin: Vec2) -> Self {
        Self {
            commands: Vec::new(),
            next_pos: origin,
            indent: origin.x,
            line_bottom: origin.y,
            last_item: None,
            groups: Vec::new(),
            table: None,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Every text item in emission order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of commands matching `pred`.
    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    /// Rect of the first region reserved under `id`.
    pub fn reserved(&self, id: &str) -> Option<Rect> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Reserve { id: rid, rect } if rid == id => Some(*rect),
            _ => None,
        })
    }

    /// Serialise the recorded commands as a JSON array.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.commands)
    }

    fn place(&mut self, size: Vec2) -> Rect {
        let rect = Rect::from_min_size(self.next_pos, size);
        self.line_bottom = self.line_bottom.max(rect.max.y);
        self.next_pos = Vec2::new(self.indent, self.line_bottom + ITEM_SPACING);
        self.last_item = Some(rect);
        if let Some(group) = self.groups.last_mut() {
            group.bounds = Some(group.bounds.map_or(rect, |b| b.union(rect)));
        }
        rect
    }
}

impl Painter for RecordingPainter {
    fn begin_overlay(&mut self) {
        self.commands.push(DrawCommand::BeginOverlay);
    }

    fn end_overlay(&mut self) {
        self.commands.push(DrawCommand::EndOverlay);
    }

    fn begin_group(&mut self) {
        self.commands.push(DrawCommand::BeginGroup);
        self.groups.push(GroupFrame {
            start: self.next_pos,
            bounds: None,
            indent: self.indent,
            line_bottom: self.line_bottom,
        });
        self.indent = self.next_pos.x;
        self.line_bottom = self.next_pos.y;
    }

    fn end_group(&mut self) {
        self.commands.push(DrawCommand::EndGroup);
        let Some(frame) = self.groups.pop() else {
            return;
        };
        let bounds = frame
            .bounds
            .unwrap_or_else(|| Rect::from_min_size(frame.start, Vec2::ZERO));
        self.indent = frame.indent;
        self.line_bottom = frame.line_bottom;
        self.next_pos = bounds.min;
        self.place(bounds.size());
    }

    fn same_line(&mut self) {
        self.commands.push(DrawCommand::SameLine);
        if let Some(last) = self.last_item {
            self.next_pos = Vec2::new(last.max.x + ITEM_SPACING, last.min.y);
        }
    }

    fn reserve(&mut self, id: &str, size: Vec2) -> Rect {
        let rect = self.place(size);
        self.commands.push(DrawCommand::Reserve {
            id: id.to_owned(),
            rect,
        });
        rect
    }

    fn rect_filled(&mut self, rect: Rect, color: Color32) {
        self.commands.push(DrawCommand::RectFilled { rect, color });
    }

    fn rect(&mut self, rect: Rect, color: Color32, rounding: f32, thickness: f32) {
        self.commands.push(DrawCommand::Rect {
            rect,
            color,
            rounding,
            thickness,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color32, thickness: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            thickness,
        });
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Color32, segments: u32, thickness: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            segments,
            thickness,
        });
    }

    fn text(&mut self, text: &str) {
        self.push_text(text, None);
    }

    fn text_colored(&mut self, text: &str, color: Color32) {
        self.push_text(text, Some(color));
    }

    fn separator(&mut self) {
        self.commands.push(DrawCommand::Separator);
        self.place(Vec2::new(0.0, 1.0));
    }

    fn begin_table(&mut self, id: &str, columns: usize) {
        self.commands.push(DrawCommand::BeginTable {
            id: id.to_owned(),
            columns,
        });
        self.table = Some(TableFrame {
            origin: self.next_pos,
            columns,
            cell: None,
        });
    }

    fn next_column(&mut self) {
        self.commands.push(DrawCommand::NextColumn);
        if let Some(table) = self.table.as_mut() {
            table.cell = Some(table.cell.map_or(0, |c| c + 1));
        }
    }

    fn end_table(&mut self) {
        self.commands.push(DrawCommand::EndTable);
        if let Some(table) = self.table.take() {
            let rows = table.cell.map_or(0, |c| c / table.columns.max(1) + 1);
            self.next_pos = table.origin;
            self.place(Vec2::new(
                table.columns as f32 * COLUMN_WIDTH,
                rows as f32 * LINE_HEIGHT,
            ));
        }
    }
}

impl RecordingPainter {
    fn push_text(&mut self, text: &str, color: Option<Color32>) {
        let cell = self.table.as_ref().map(TableFrame::position);
        if cell.is_none() {
            self.place(Vec2::new(text.chars().count() as f32 * CHAR_WIDTH, LINE_HEIGHT));
        }
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            color,
            cell,
        });
    }
}
