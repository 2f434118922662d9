//! Subcommand handlers and table output.

use crate::cli::{AddArgs, Command, DeleteArgs, GetArgs};
use anyhow::{bail, Result};
use log::info;
use speep_core::{ShortcutRecord, ShortcutRepository, ShortcutService};
use std::io::Write;

const HEADERS: [&str; 3] = ["Category", "Name", "Shortcut key"];

pub fn dispatch<R: ShortcutRepository>(
    service: &ShortcutService<R>,
    command: Command,
    out: &mut impl Write,
) -> Result<()> {
    let name = match &command {
        Command::Get(_) => "get",
        Command::Add(_) => "add",
        Command::Delete(_) => "delete",
    };
    info!("event=cli_command module=cli status=start command={name}");

    match command {
        Command::Get(args) => handle_get(service, args, out),
        Command::Add(args) => handle_add(service, args, out),
        Command::Delete(args) => handle_delete(service, args, out),
    }
}

fn handle_get<R: ShortcutRepository>(
    service: &ShortcutService<R>,
    args: GetArgs,
    out: &mut impl Write,
) -> Result<()> {
    let records = match (args.all, args.name, args.keyword) {
        (true, _, _) => service.list_all()?.into_records(),
        (false, Some(name), _) => service.find_by_name(&name)?.collect(),
        (false, None, Some(keyword)) => service.find_by_keyword(&keyword)?.collect(),
        (false, None, None) => bail!("specify the shortcuts to show with --all, --name or --keyword"),
    };

    if records.is_empty() {
        writeln!(out, "No shortcuts found")?;
        return Ok(());
    }
    write!(out, "{}", render_table(&records))?;
    Ok(())
}

fn handle_add<R: ShortcutRepository>(
    service: &ShortcutService<R>,
    args: AddArgs,
    out: &mut impl Write,
) -> Result<()> {
    let record = service.register(args.category, args.name, args.key)?;
    writeln!(
        out,
        "Added shortcut `{}` ({}) to category `{}`",
        record.name, record.key, record.category
    )?;
    Ok(())
}

fn handle_delete<R: ShortcutRepository>(
    service: &ShortcutService<R>,
    args: DeleteArgs,
    out: &mut impl Write,
) -> Result<()> {
    match (args.all, args.category, args.name) {
        (true, _, _) => {
            service.clear()?;
            writeln!(out, "Shortcut list deleted")?;
        }
        (false, Some(category), Some(name)) => {
            let removed = service.remove(&category, &name)?;
            writeln!(
                out,
                "Removed shortcut `{}` from category `{}`",
                removed.name, removed.category
            )?;
        }
        _ => bail!("specify the shortcut to delete with --all, or --category and --name"),
    }
    Ok(())
}

/// Left-aligned table sized to the widest cell of each column.
pub fn render_table(records: &[ShortcutRecord]) -> String {
    let rows: Vec<[&str; 3]> = records
        .iter()
        .map(|r| [r.category.as_str(), r.name.as_str(), r.key.as_str()])
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut table = String::new();
    push_row(&mut table, HEADERS, &widths);
    let rules = widths.map(|width| "-".repeat(width));
    push_row(&mut table, rules.each_ref().map(String::as_str), &widths);
    for row in rows {
        push_row(&mut table, row, &widths);
    }
    table
}

fn push_row(table: &mut String, cells: [&str; 3], widths: &[usize; 3]) {
    let mut line = String::new();
    for (index, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if index > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        line.push_str(&" ".repeat(width - cell.chars().count()));
    }
    table.push_str(line.trim_end());
    table.push('\n');
}
