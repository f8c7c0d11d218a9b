use anyhow::Result;
use colored::Colorize;
use rustyline::highlight::Highlighter;
use rustyline::Editor;
use rustyline_derive::{Completer, Helper, Hinter, Validator};
use std::borrow::Cow;
use std::env;
use timepicker::prelude::*;
use timepicker::{PICKER_NAME, VERSION as LIB_VERSION};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SHELL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A custom helper struct for rustyline that enables syntax highlighting.
#[derive(Completer, Helper, Hinter, Validator)]
struct CommandHighlighter;

impl Highlighter for CommandHighlighter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if let Some((command, rest)) = line.split_once(' ') {
            Cow::Owned(format!("{} {}", command.yellow().bold(), rest.yellow()))
        } else {
            Cow::Owned(line.yellow().bold().to_string())
        }
    }
    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

fn print_banner() {
    if env::var("QUIET_MODE").is_ok() {
        return;
    }
    const LOGO_TEXT: &str = include_str!("../logo.log");
    println!("{}", LOGO_TEXT.cyan());

    let version_string = format!(
        "          Shell   v{:<8} Library   v{:<8}",
        SHELL_VERSION, LIB_VERSION
    );
    let rule = "-".repeat(72);
    println!("{}", rule.dimmed());
    println!("{}", version_string);
    println!(
        "{}",
        "    Distributed under the MIT OR Apache-2.0 license.".dimmed()
    );
    println!("{}", rule.dimmed());
}

/// Spawns a task that echoes every event the picker broadcasts.
fn spawn_event_listener(picker: &TimePicker) {
    let mut event_rx = picker.subscribe_events();
    tokio::spawn(async move {
        while let Ok(event) = event_rx.recv().await {
            println!("<-- [EVENT] {:?}", event);
        }
    });
}

fn print_state(picker: &TimePicker) {
    println!("  format   {:?}", picker.format());
    println!(
        "  tokens   hour={:?} minute={:?} second={:?} apm={:?}",
        picker.hour_type(),
        picker.minute_type(),
        picker.second_type(),
        picker.apm_type()
    );
    println!(
        "  interval minute={} second={}",
        picker.minute_interval(),
        picker.second_interval()
    );
    println!("  dropdown {:?}", picker.dropdown_state());
    println!("  display  {}", picker.display_time().green().bold());
    if let Some(time) = picker.time() {
        println!("  time     {}", time);
    }
    if picker.show_clear_button() {
        println!("  {}", "[clear available]".dimmed());
    }
}

fn print_list(picker: &TimePicker, kind: ComponentKind) {
    let values = picker.values(kind);
    if values.is_empty() {
        println!("The format has no {} component.", kind);
        return;
    }
    let disabled = picker.disabled_values();
    let selected = picker.value().get(kind);
    let rendered: Vec<String> = values
        .iter()
        .map(|v| {
            if selected == Some(v.as_str()) {
                v.green().bold().to_string()
            } else if disabled.is_disabled(kind, v) {
                v.dimmed().to_string()
            } else {
                v.to_string()
            }
        })
        .collect();
    println!("{}: {}", kind, rendered.join(" "));
}

fn print_help() {
    println!("Available commands:");
    println!("  format <FMT>              - Replaces the display format (e.g. 'hh:mm A').");
    println!("  interval <minute|second> <N> - Sets the step for minutes or seconds.");
    println!("  set <KIND> <VALUE>        - Selects a value (kind: hour, minute, second, apm).");
    println!("  list <KIND>               - Shows the selectable values for a component.");
    println!("  clear                     - Clears the current selection.");
    println!("  now                       - Seeds the selection from the local clock.");
    println!("  show                      - Prints the picker state.");
    println!("  open | close | esc        - Drives the dropdown.");
    println!("  exit                      - Quits the shell.");
}

#[tokio::main]
async fn main() -> Result<()> {
    print_banner();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = match env::var("TIMEPICKER_CONFIG") {
        Ok(path) => PickerConfig::load(path)?,
        Err(_) => PickerConfig::default(),
    };
    let mut picker = TimePicker::new(config)?;
    spawn_event_listener(&picker);
    info!("{} ready with format {:?}", PICKER_NAME.cyan(), picker.format());

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CommandHighlighter));

    println!("{} is running. Type 'help' for commands or 'exit' to quit.", PICKER_NAME.cyan());

    loop {
        let prompt = format!("{}", ">> ".cyan().bold());
        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(_) => {
                println!("Exiting pickershell...");
                break;
            }
        };
        rl.add_history_entry(line.as_str())?;
        let args = line.split_whitespace().collect::<Vec<_>>();
        let Some(command) = args.first() else {
            continue;
        };

        match *command {
            "format" => {
                // Formats may contain spaces, so take the rest of the line verbatim.
                match line.trim().split_once(' ') {
                    Some((_, format)) => {
                        picker.set_format(format.trim());
                        print_state(&picker);
                    }
                    None => println!("Usage: format <FMT>"),
                }
            }
            "interval" => match (args.get(1), args.get(2).map(|n| n.parse::<i64>())) {
                (Some(&"minute"), Some(Ok(n))) => report(picker.set_minute_interval(n)),
                (Some(&"second"), Some(Ok(n))) => report(picker.set_second_interval(n)),
                (_, Some(Err(_))) => println!("Error: the interval must be a whole number."),
                _ => println!("Usage: interval <minute|second> <N>"),
            },
            "set" => match (args.get(1).and_then(|k| ComponentKind::from_name(k)), args.get(2)) {
                (Some(kind), Some(value)) => {
                    report(picker.select(kind, value));
                    println!("  display  {}", picker.display_time().green().bold());
                }
                _ => println!("Usage: set <hour|minute|second|apm> <VALUE>"),
            },
            "list" => match args.get(1).and_then(|k| ComponentKind::from_name(k)) {
                Some(kind) => print_list(&picker, kind),
                None => {
                    for kind in ComponentKind::ALL {
                        if picker.resolved().is_present(kind) {
                            print_list(&picker, kind);
                        }
                    }
                }
            },
            "clear" => report(picker.clear()),
            "now" => {
                picker.seed_now();
                println!("  display  {}", picker.display_time().green().bold());
            }
            "show" => print_state(&picker),
            "open" | "close" => {
                let wants_open = *command == "open";
                let is_open = picker.dropdown_state() == DropdownState::Open;
                if wants_open == is_open {
                    println!("--> Dropdown is already {:?}.", picker.dropdown_state());
                } else {
                    match picker.toggle_dropdown() {
                        Some(action) => println!("--> {:?}", action),
                        None => println!("--> The picker is disabled."),
                    }
                }
            }
            "esc" => match picker.on_key(Key::Escape) {
                Some(action) => println!("--> {:?}", action),
                None => println!("--> Nothing to dismiss."),
            },
            "help" => print_help(),
            "exit" => break,
            _ => println!("Unknown command: '{}'. Type 'help'.", line.trim()),
        }
    }

    Ok(())
}

fn report(result: Result<(), PickerError>) {
    match result {
        Ok(()) => println!("--> ok"),
        Err(e) => println!("{} {}", "Error:".red().bold(), e),
    }
}
