use unicode_width::UnicodeWidthStr;

use crate::color;

/// Column-aligned box table. Cells may already carry color codes; widths
/// are measured on the plain text passed alongside.
pub struct Table {
    headers: Vec<&'static str>,
    widths: Vec<usize>,
    rows: Vec<Vec<Cell>>,
}

pub struct Cell {
    plain: String,
    styled: String,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        let plain = text.into();
        Self {
            styled: plain.clone(),
            plain,
        }
    }

    /// A cell rendered through `style`, padded by its unstyled width.
    pub fn styled(text: impl Into<String>, style: impl Fn(&str) -> String) -> Self {
        let plain = text.into();
        Self {
            styled: style(&plain),
            plain,
        }
    }
}

impl Table {
    pub fn new(headers: Vec<&'static str>) -> Self {
        let widths = headers.iter().map(|h| display_width(h)).collect();
        Self {
            headers,
            widths,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<Cell>) {
        for (width, cell) in self.widths.iter_mut().zip(&row) {
            *width = (*width).max(display_width(&cell.plain));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(self.border('┌', '┬', '┐'));
        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&self.widths)
            .map(|(h, w)| color::bold(&pad(h, *w)))
            .collect();
        lines.push(self.line(&header));
        lines.push(self.border('├', '┼', '┤'));
        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&self.widths)
                .map(|(cell, w)| {
                    let fill = w.saturating_sub(display_width(&cell.plain));
                    format!("{}{}", cell.styled, " ".repeat(fill))
                })
                .collect();
            lines.push(self.line(&cells));
        }
        lines.push(self.border('└', '┴', '┘'));
        lines
    }

    pub fn print(&self) {
        for line in self.render() {
            println!("{}", line);
        }
    }

    fn border(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self.widths.iter().map(|w| "─".repeat(w + 2)).collect();
        color::ash(&format!(
            "{}{}{}",
            left,
            segments.join(&mid.to_string()),
            right
        ))
    }

    fn line(&self, cells: &[String]) -> String {
        let sep = color::ash("│");
        let mut out = sep.clone();
        for cell in cells {
            out.push_str(&format!(" {} {}", cell, sep));
        }
        out
    }
}

/// Terminal display width; wide characters count as 2 columns.
pub(crate) fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad to a minimum display width without truncating.
pub(crate) fn pad(s: &str, min_width: usize) -> String {
    let width = display_width(s);
    if width >= min_width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(min_width - width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_shorter_than_width() {
        assert_eq!(pad("hi", 5), "hi   ");
    }

    #[test]
    fn test_pad_never_truncates() {
        assert_eq!(pad("hello world", 5), "hello world");
    }

    #[test]
    fn test_display_width_cjk() {
        assert_eq!(display_width("日本"), 4);
    }

    /// Drop ANSI SGR sequences so assertions hold with or without a TTY.
    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for n in chars.by_ref() {
                    if n == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_render_aligns_columns() {
        let mut table = Table::new(vec!["Region", "Progress"]);
        table.push(vec![Cell::plain("Americas"), Cell::plain("[3/6]")]);
        table.push(vec![Cell::plain("Asia"), Cell::plain("[0/6]")]);

        let lines: Vec<String> = table.render().iter().map(|l| strip_ansi(l)).collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "┌──────────┬──────────┐");
        assert_eq!(lines[1], "│ Region   │ Progress │");
        assert_eq!(lines[2], "├──────────┼──────────┤");
        assert_eq!(lines[3], "│ Americas │ [3/6]    │");
        assert_eq!(lines[4], "│ Asia     │ [0/6]    │");
        assert_eq!(lines[5], "└──────────┴──────────┘");
        for line in &lines {
            assert_eq!(display_width(line), display_width(&lines[0]));
        }
    }

    #[test]
    fn test_styled_cell_pads_by_plain_width() {
        let cell = Cell::styled("on", |s| format!("<{}>", s));
        let mut table = Table::new(vec!["Tracked"]);
        table.push(vec![cell]);
        assert_eq!(strip_ansi(&table.render()[3]), "│ <on>      │");
    }
}
