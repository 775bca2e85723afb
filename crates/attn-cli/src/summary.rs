use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use attn_report::MetricsRow;

use crate::commands::MergeOutcome;

pub fn print_merge_summary(outcome: &MergeOutcome) {
    println!(
        "Period: {} {} ({} days)",
        month_name(outcome.context.month),
        outcome.context.year,
        outcome.context.day_count
    );
    println!("Employees: {}", outcome.rows.len());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Working"),
        header_cell("Full"),
        header_cell("Half"),
        header_cell("Lates"),
        header_cell("Absent"),
        header_cell("Punch"),
        header_cell("Wknd/Hol"),
        header_cell("OT Hrs"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..=9 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut total_full = 0u32;
    let mut total_half = 0u32;
    let mut total_lates = 0u32;
    let mut total_absent = 0u32;
    let mut total_ot = 0.0f64;
    for row in &outcome.rows {
        total_full += row.full_days;
        total_half += row.half_days;
        total_lates += row.lates;
        total_absent += row.absent;
        total_ot += row.total_ot_hours;
        table.add_row(vec![
            Cell::new(&row.emp_id)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&row.emp_name),
            Cell::new(row.working_days),
            Cell::new(row.full_days),
            count_cell(row.half_days, Color::Yellow),
            count_cell(row.lates, Color::Yellow),
            count_cell(row.absent, Color::Red),
            count_cell(row.punch_missed, Color::Yellow),
            Cell::new(row.weekend_holiday_present_days),
            ot_cell(row.total_ot_hours),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} employees", outcome.rows.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_full).add_attribute(Attribute::Bold),
        count_cell(total_half, Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(total_lates, Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(total_absent, Color::Red).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        ot_cell(total_ot).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_remarks(&outcome.rows);
}

fn print_remarks(rows: &[MetricsRow]) {
    let flagged: Vec<&MetricsRow> = rows.iter().filter(|row| !row.remarks.is_empty()).collect();
    if flagged.is_empty() {
        return;
    }
    println!();
    println!("Remarks:");
    for row in flagged {
        println!("{} ({})", row.emp_name, row.emp_id);
        for remark in &row.remarks {
            println!("  - {remark}");
        }
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 10 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: u32, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn ot_cell(hours: f64) -> Cell {
    if hours > 0.0 {
        Cell::new(format!("{hours:.2}")).fg(Color::Green)
    } else {
        dim_cell("0.00")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}
