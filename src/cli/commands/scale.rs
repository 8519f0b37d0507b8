use crate::config::Config;
use crate::core::scale::{PAIN_SCALE, emoji_for, row_for};
use crate::errors::AppResult;
use crate::models::pain_level::PainLevel;
use crate::utils::colors::paint_token;
use crate::utils::table::{Column, Table};

/// Print every level of the scale with its label, category and face.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut columns = vec![
        Column::new("Level"),
        Column::new("Label"),
        Column::new("Category"),
    ];
    if cfg.show_emoji {
        columns.push(Column::new(""));
    }
    let mut table = Table::new(columns);

    for level in PainLevel::all() {
        let row = row_for(level);
        let mut cells = vec![
            level.to_string(),
            row.label.to_string(),
            row.category.to_string(),
        ];
        if cfg.show_emoji {
            cells.push(emoji_for(level).glyph().to_string());
        }
        table.add_row(cells);
    }

    // color each line by its level after padding so ANSI codes do not skew widths
    let rendered = table.render();
    let mut lines = rendered.lines();
    if let Some(head) = lines.next() {
        println!("{}", head);
    }
    for (row, line) in PAIN_SCALE.iter().zip(lines) {
        println!("{}", paint_token(row.color, line));
    }
    Ok(())
}
