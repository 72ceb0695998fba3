use crate::errors::AppResult;
use crate::models::meditation_type::MEDITATION_TYPES;
use crate::utils::table::{Column, Table};

pub fn handle() -> AppResult<()> {
    let mut table = Table::new(vec![
        Column::new("ID", 16),
        Column::new("NAME", 16),
        Column::new("COLOR", 8),
        Column::new("DESCRIPTION", 60),
    ]);

    for t in MEDITATION_TYPES {
        table.add_row(vec![
            t.id.to_string(),
            t.name.to_string(),
            t.color.to_string(),
            t.description.to_string(),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
