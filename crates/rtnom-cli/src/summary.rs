use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rtnom_map::{MappingTable, classify};
use rtnom_model::{CategorySets, StructureCatalog};

pub fn print_mapping(table: &MappingTable) {
    let mut out = Table::new();
    out.set_header(vec![
        header_cell("Key"),
        header_cell("Original label"),
        header_cell("Standardized name"),
    ]);
    apply_table_style(&mut out);
    for (key, entry) in table.entries() {
        let name_cell = if entry.extra.is_non_standard() {
            Cell::new(&entry.standardized_name).fg(Color::Yellow)
        } else {
            Cell::new(&entry.standardized_name)
        };
        out.add_row(vec![
            Cell::new(key),
            Cell::new(&entry.original_label),
            name_cell,
        ]);
    }
    println!("{out}");

    let summary = table.summary();
    println!(
        "{} structures mapped ({} non-standard, {} with margin, {} with dose)",
        summary.total, summary.non_standard, summary.with_margin, summary.with_dose
    );
}

pub fn print_catalog(catalog: &StructureCatalog, sets: Option<&CategorySets>) {
    let mut out = Table::new();
    let mut header = vec![header_cell("Identifier"), header_cell("Display name")];
    if sets.is_some() {
        header.extend([
            header_cell("Extra"),
            header_cell("Margin"),
            header_cell("Presets"),
            header_cell("Dose"),
        ]);
    }
    out.set_header(header);
    apply_table_style(&mut out);
    for index in 2..6 {
        align_column(&mut out, index, CellAlignment::Center);
    }

    for structure in catalog.iter() {
        let mut row = vec![
            Cell::new(&structure.identifier)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&structure.display_name),
        ];
        if let Some(sets) = sets {
            let eligibility = classify(&structure.display_name, sets);
            row.push(Cell::new(eligibility.extra_kind.to_string()));
            row.push(flag_cell(eligibility.margin_enabled));
            row.push(flag_cell(eligibility.margin_presets));
            row.push(flag_cell(eligibility.dose_enabled));
        }
        out.add_row(row);
    }
    println!("{out}");
}

fn flag_cell(enabled: bool) -> Cell {
    if enabled {
        Cell::new("✓").fg(Color::Green)
    } else {
        Cell::new("-").fg(Color::DarkGrey)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
