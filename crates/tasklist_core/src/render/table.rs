use crate::config::Palette;
use crate::model::Task;
use time::Date;

pub const BORDER_KNOT: char = '+';
pub const HORIZONTAL_BORDER: char = '-';
pub const VERTICAL_BORDER: char = '|';

pub const INDEX_WIDTH: usize = 4;
pub const DATE_WIDTH: usize = 12;
pub const TIME_WIDTH: usize = 7;
pub const PRIORITY_WIDTH: usize = 3;
pub const URGENCY_WIDTH: usize = 3;
pub const DESCRIPTION_WIDTH: usize = 44;

pub const EMPTY_LIST_MESSAGE: &str = "No tasks have been input";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub width: usize,
}

pub const COLUMNS: [Column; 6] = [
    Column { header: "N", width: INDEX_WIDTH },
    Column { header: "Date", width: DATE_WIDTH },
    Column { header: "Time", width: TIME_WIDTH },
    Column { header: "P", width: PRIORITY_WIDTH },
    Column { header: "D", width: URGENCY_WIDTH },
    // Trailing space puts the title one cell left of center.
    Column { header: "Task ", width: DESCRIPTION_WIDTH },
];

/// Text plus the number of terminal cells it occupies. Color tags carry
/// escape sequences, so byte or char length cannot be used for padding.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Cell {
    text: String,
    visible: usize,
}

impl Cell {
    fn plain<S: Into<String>>(text: S) -> Self {
        let text = text.into();
        let visible = text.chars().count();
        Self { text, visible }
    }

    fn tag(text: String) -> Self {
        Self { text, visible: 1 }
    }

    fn blank() -> Self {
        Self::plain("")
    }
}

/// Pads `text` to `width` cells, left pad `(width - visible) / 2` and the
/// remainder on the right. Content already at or beyond the width is returned
/// untouched.
pub fn center(text: &str, visible: usize, width: usize) -> String {
    if visible >= width {
        return text.to_string();
    }
    let left = (width - visible) / 2;
    let right = width - visible - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

fn center_cell(cell: &Cell, width: usize) -> String {
    center(&cell.text, cell.visible, width)
}

/// Splits every line into chunks of exactly `width` characters, right-padding
/// the last chunk of each line. Always yields at least one chunk.
pub fn wrap_description(lines: &[String], width: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    for line in lines {
        let chars: Vec<char> = line.chars().collect();
        for piece in chars.chunks(width.max(1)) {
            let mut chunk: String = piece.iter().collect();
            let padding = width.saturating_sub(piece.len());
            chunk.extend(std::iter::repeat_n(' ', padding));
            chunks.push(chunk);
        }
    }
    if chunks.is_empty() {
        chunks.push(" ".repeat(width));
    }
    chunks
}

pub fn horizontal_rule() -> String {
    let mut rule = String::new();
    rule.push(BORDER_KNOT);
    for column in COLUMNS.iter() {
        rule.extend(std::iter::repeat_n(HORIZONTAL_BORDER, column.width));
        rule.push(BORDER_KNOT);
    }
    rule
}

fn bordered<I, S>(cells: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut row = String::new();
    row.push(VERTICAL_BORDER);
    for cell in cells {
        row.push_str(cell.as_ref());
        row.push(VERTICAL_BORDER);
    }
    row
}

pub fn header_row() -> String {
    bordered(
        COLUMNS
            .iter()
            .map(|column| center(column.header, column.header.chars().count(), column.width)),
    )
}

/// Draws the task table relative to a fixed reference day.
#[derive(Debug, Clone, Copy)]
pub struct TableRenderer {
    palette: Palette,
    today: Date,
}

impl TableRenderer {
    pub fn new(palette: Palette, today: Date) -> Self {
        Self { palette, today }
    }

    pub fn render(&self, tasks: &[Task]) -> String {
        if tasks.is_empty() {
            return format!("{EMPTY_LIST_MESSAGE}\n");
        }

        let rule = horizontal_rule();
        let mut lines = vec![rule.clone(), header_row(), rule.clone()];
        for (position, task) in tasks.iter().enumerate() {
            lines.extend(self.task_rows(position + 1, task));
            lines.push(rule.clone());
        }

        let mut table = lines.join("\n");
        table.push('\n');
        table
    }

    /// All rows for one task: the first carries every column, the rest only
    /// continue the description.
    pub fn task_rows(&self, number: usize, task: &Task) -> Vec<String> {
        let urgency = task.urgency(self.today);
        let leading = [
            Cell::plain(number.to_string()),
            Cell::plain(task.date.to_string()),
            Cell::plain(task.time.to_string()),
            Cell::tag(self.palette.tag(task.priority.color(), task.priority.code())),
            Cell::tag(self.palette.tag(urgency.color(), urgency.code())),
        ];
        let blanks: [Cell; 5] = std::array::from_fn(|_| Cell::blank());

        wrap_description(task.description.lines(), DESCRIPTION_WIDTH)
            .into_iter()
            .enumerate()
            .map(|(row, chunk)| {
                let cells = if row == 0 { &leading } else { &blanks };
                let mut rendered: Vec<String> = cells
                    .iter()
                    .zip(COLUMNS.iter())
                    .map(|(cell, column)| center_cell(cell, column.width))
                    .collect();
                rendered.push(chunk);
                bordered(rendered)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        DESCRIPTION_WIDTH, TableRenderer, center, header_row, horizontal_rule, wrap_description,
    };
    use crate::config::Palette;
    use crate::model::{Description, DueDate, DueTime, Priority, Task};
    use time::macros::date;

    fn task(priority: Priority, date: &str, lines: &[&str]) -> Task {
        Task::new(
            priority,
            DueDate::parse(date).unwrap(),
            DueTime::parse("09:30").unwrap(),
            Description::from_lines(lines.iter().copied()),
        )
    }

    fn plain_renderer() -> TableRenderer {
        TableRenderer::new(Palette { colored: false }, date!(2024 - 01 - 10))
    }

    #[test]
    fn center_puts_odd_remainder_on_the_right() {
        assert_eq!(center("1", 1, 4), " 1  ");
        assert_eq!(center("ab", 2, 4), " ab ");
        assert_eq!(center("", 0, 3), "   ");
        assert_eq!(center("toolong", 7, 4), "toolong");
    }

    #[test]
    fn wrap_splits_long_lines_and_pads_each_chunk() {
        let line = "x".repeat(50);
        let chunks = wrap_description(&[line], DESCRIPTION_WIDTH);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], "x".repeat(44));
        assert_eq!(chunks[1], format!("{}{}", "x".repeat(6), " ".repeat(38)));
    }

    #[test]
    fn wrap_keeps_each_entered_line_separate() {
        let lines = vec!["short".to_string(), "y".repeat(44), "z".repeat(45)];
        let chunks = wrap_description(&lines, 10);
        assert_eq!(chunks.len(), 1 + 5 + 5);
        assert!(chunks.iter().all(|chunk| chunk.chars().count() == 10));
    }

    #[test]
    fn wrap_counts_characters_not_bytes() {
        let chunks = wrap_description(&["été".to_string()], 5);
        assert_eq!(chunks, vec!["été  ".to_string()]);
    }

    #[test]
    fn rule_and_header_follow_column_widths() {
        assert_eq!(
            horizontal_rule(),
            "+----+------------+-------+---+---+--------------------------------------------+"
        );
        assert_eq!(
            header_row(),
            "| N  |    Date    | Time  | P | D |                   Task                     |"
        );
    }

    #[test]
    fn empty_list_renders_message_only() {
        assert_eq!(plain_renderer().render(&[]), "No tasks have been input\n");
    }

    #[test]
    fn long_description_continues_on_blank_row() {
        let description = "d".repeat(50);
        let rows = plain_renderer().task_rows(
            1,
            &task(Priority::High, "2024-01-15", &[description.as_str()]),
        );

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            format!("| 1  | 2024-01-15 | 09:30 | H | I |{}|", "d".repeat(44))
        );
        assert_eq!(
            rows[1],
            format!("|    |            |       |   |   |{}{}|", "d".repeat(6), " ".repeat(38))
        );
    }

    #[test]
    fn render_draws_rule_after_every_task() {
        let tasks = vec![
            task(Priority::Critical, "2024-01-05", &["overdue thing"]),
            task(Priority::Low, "2024-01-10", &["today", "second line"]),
        ];
        let table = plain_renderer().render(&tasks);
        let lines: Vec<&str> = table.lines().collect();
        let rule = horizontal_rule();

        assert_eq!(lines.len(), 3 + 2 + 3);
        assert_eq!(lines[0], rule);
        assert_eq!(lines[2], rule);
        assert!(lines[3].starts_with("| 1  | 2024-01-05 | 09:30 | C | O |overdue thing"));
        assert_eq!(lines[4], rule);
        assert!(lines[5].starts_with("| 2  | 2024-01-10 | 09:30 | L | T |today"));
        assert!(lines[6].starts_with("|    |            |       |   |   |second line"));
        assert_eq!(lines[7], rule);
        assert!(lines.iter().all(|line| line.chars().count() == rule.chars().count()));
    }

    #[test]
    fn colored_tags_keep_the_grid_aligned() {
        let renderer = TableRenderer::new(Palette { colored: true }, date!(2024 - 01 - 10));
        let rows = renderer.task_rows(12, &task(Priority::Normal, "2024-01-15", &["x"]));

        assert_eq!(rows.len(), 1);
        let green = "\x1b[102m \x1b[0m";
        assert!(rows[0].starts_with(&format!("| 12 | 2024-01-15 | 09:30 | {green} | {green} |x")));
    }
}
