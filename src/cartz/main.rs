use cartz::api::{CartzApi, CmdMessage, CmdResult, MessageLevel};
use cartz::error::{CartzError, Result};
use cartz::model::{Item, ItemId};
use cartz::store::memory::MemoryStore;
use clap::Parser;
use colored::*;
use std::io::{self, BufRead, Write};
use unicode_width::UnicodeWidthStr;

mod args;
use args::{tokenize, Cli, SessionCommand, SessionLine};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

type InputLines<'a> = io::Lines<io::StdinLock<'a>>;

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.plain {
        colored::control::set_override(false);
    }

    let mut api = CartzApi::new(MemoryStore::new());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!(
        "{}",
        "cartz session — `help` lists commands, `quit` ends.".dimmed()
    );

    while let Some(line) = read_line(&mut lines, "cartz> ")? {
        let tokens = tokenize(&line);
        if tokens.is_empty() {
            continue;
        }

        let parsed = match SessionLine::try_parse_from(&tokens) {
            Ok(parsed) => parsed,
            Err(e) => {
                // Also covers `help` and `--help`.
                let _ = e.print();
                continue;
            }
        };

        match parsed.command {
            SessionCommand::Add { name, quantity } => report(api.add_item(&name, &quantity)),
            SessionCommand::Edit { id } => handle_edit(&mut api, &mut lines, id)?,
            SessionCommand::Remove { id } => report(api.remove_item(id)),
            SessionCommand::List { json } => handle_list(&api, json)?,
            SessionCommand::Quit => break,
        }
    }

    Ok(())
}

/// The inline-editor flow: begin the edit (the list redraws with the
/// editing marker), prompt for both fields with the current values as
/// defaults, then commit. Validation failures re-prompt while the
/// editor stays open.
fn handle_edit(
    api: &mut CartzApi<MemoryStore>,
    lines: &mut InputLines,
    id: ItemId,
) -> Result<()> {
    let begun = match api.begin_edit(id) {
        Ok(result) => result,
        Err(e) => {
            print_error(&e);
            return Ok(());
        }
    };
    print_messages(&begun.messages);
    print_items(&begun.listed_items);

    let Some(current) = begun.affected_items.first().cloned() else {
        return Ok(());
    };

    loop {
        let name =
            prompt_with_default(lines, &format!("name [{}]: ", current.name), &current.name)?;
        let quantity = prompt_with_default(
            lines,
            &format!("quantity [{}]: ", current.quantity),
            &current.quantity.to_string(),
        )?;

        match api.finish_edit(id, &name, &quantity) {
            Ok(result) => {
                print_messages(&result.messages);
                print_items(&result.listed_items);
                return Ok(());
            }
            Err(e) if e.is_validation() => print_error(&e),
            Err(e) => {
                print_error(&e);
                return Ok(());
            }
        }
    }
}

fn handle_list(api: &CartzApi<MemoryStore>, json: bool) -> Result<()> {
    let result = api.list_items()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result.listed_items)?);
    } else {
        print_items(&result.listed_items);
    }
    Ok(())
}

fn report(outcome: Result<CmdResult>) {
    match outcome {
        Ok(result) => {
            print_messages(&result.messages);
            print_items(&result.listed_items);
        }
        Err(e) => print_error(&e),
    }
}

fn read_line(lines: &mut InputLines, prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt.dimmed());
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn prompt_with_default(lines: &mut InputLines, prompt: &str, default: &str) -> Result<String> {
    match read_line(lines, prompt)? {
        Some(line) if !line.trim().is_empty() => Ok(line),
        // Blank input (or end of input) keeps the current value.
        _ => Ok(default.to_string()),
    }
}

fn print_error(e: &CartzError) {
    println!("{}", e.to_string().red());
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const EDIT_MARKER: &str = "✎";

fn print_items(items: &[Item]) {
    if items.is_empty() {
        println!("{}", "Nothing on the list.".dimmed());
        return;
    }

    let name_width = items.iter().map(|i| i.name.width()).max().unwrap_or(0);
    for item in items {
        let marker = if item.is_editing {
            EDIT_MARKER.yellow().to_string()
        } else {
            " ".to_string()
        };
        let fill = " ".repeat(name_width - item.name.width());
        let id = format!("{:>3}", item.id);
        println!(
            "{} {} {}{}  {}",
            id.cyan(),
            marker,
            item.name.bold(),
            fill,
            format!("Qty: {}", item.quantity).dimmed()
        );
    }
}
