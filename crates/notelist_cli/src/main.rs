//! Interactive presentation layer over `notelist_core`.
//!
//! # Responsibility
//! - Parse line commands and forward user intents into the store.
//! - Re-render the current view after every mutation.
//! - Own the confirmation step that guards bulk clears; the store only
//!   ever receives already-affirmed intent.

use log::warn;
use notelist_core::{core_version, default_log_level, init_logging, Filter, NoteId, NoteStore};
use std::io::{self, Write};

/// Yes/no confirmation capability injected into the command loop.
///
/// Kept as a trait so tests can script answers instead of prompting.
trait Confirmation {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Prompts on stdout and reads one answer line from stdin.
/// Anything other than `y`/`yes` (case-insensitive) declines.
struct StdinConfirmation;

impl Confirmation for StdinConfirmation {
    fn confirm(&mut self, message: &str) -> bool {
        print!("{message} [y/N]: ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        is_affirmative(&answer)
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// One parsed user intent.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// Raw title/status text; trimming and normalization is the store's job.
    Add { status: String, title: String },
    List,
    SetFilter(Filter),
    Delete(NoteId),
    Clear,
    Counts,
    Help,
    Quit,
}

/// Parses one non-blank input line.
///
/// `add` takes the status as its first word so multi-word titles need no
/// quoting: `add active Buy more milk`.
fn parse_command(line: &str) -> Result<Command, String> {
    let input = line.trim();
    let (keyword, rest) = match input.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim_start()),
        None => (input, ""),
    };

    match keyword.to_ascii_lowercase().as_str() {
        "add" => match rest.split_once(char::is_whitespace) {
            Some((status, title)) => Ok(Command::Add {
                status: status.to_string(),
                title: title.to_string(),
            }),
            None => Err("usage: add <status> <title...>".to_string()),
        },
        "list" => Ok(Command::List),
        "filter" => rest
            .parse::<Filter>()
            .map(Command::SetFilter)
            .map_err(|err| err.to_string()),
        "delete" => rest
            .trim()
            .parse::<NoteId>()
            .map(Command::Delete)
            .map_err(|_| format!("`{}` is not a note id", rest.trim())),
        "clear" => Ok(Command::Clear),
        "counts" => Ok(Command::Counts),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command `{other}`; type `help`")),
    }
}

/// Confirmation wording carried over from the original UI: the `all`
/// variant names the whole collection, the filtered variants name the
/// status being cleared.
fn clear_message(filter: Filter, candidate_count: usize) -> String {
    match filter {
        Filter::All => format!("Are you sure you want to delete all {candidate_count} notes?"),
        Filter::Active | Filter::Completed => format!(
            "Are you sure you want to delete all {candidate_count} {filter} notes?"
        ),
    }
}

fn render_view(store: &NoteStore, out: &mut impl Write) -> io::Result<()> {
    let view = store.view();
    if view.is_empty() {
        return match store.filter() {
            Filter::All => writeln!(out, "no notes yet"),
            filter => writeln!(out, "no {filter} notes found"),
        };
    }
    writeln!(out, "{:>4}  {:<32}  {}", "id", "title", "status")?;
    for note in view {
        writeln!(out, "{:>4}  {:<32}  {}", note.id, note.title, note.status)?;
    }
    Ok(())
}

/// Applies one command to the store. Returns `false` when the session
/// should end.
fn execute(
    store: &mut NoteStore,
    command: Command,
    confirm: &mut dyn Confirmation,
    out: &mut impl Write,
) -> io::Result<bool> {
    match command {
        Command::Add { status, title } => match store.add(&title, &status) {
            Ok(id) => {
                writeln!(out, "added note {id}")?;
                render_view(store, out)?;
            }
            Err(err) => writeln!(out, "{err}")?,
        },
        Command::List => render_view(store, out)?,
        Command::SetFilter(filter) => {
            store.set_filter(filter);
            render_view(store, out)?;
        }
        Command::Delete(id) => {
            store.delete(id);
            render_view(store, out)?;
        }
        Command::Clear => {
            let candidates = store.clear_candidate_count();
            if candidates == 0 {
                // Mirrors the original UI hiding the clear button: no
                // prompt is ever offered for an empty view.
                writeln!(out, "nothing to clear under filter `{}`", store.filter())?;
            } else if confirm.confirm(&clear_message(store.filter(), candidates)) {
                let removed = store.clear_filtered();
                writeln!(out, "removed {removed} notes")?;
                render_view(store, out)?;
            } else {
                writeln!(out, "clear cancelled")?;
            }
        }
        Command::Counts => {
            let counts = store.counts();
            writeln!(
                out,
                "total={} active={} completed={}",
                counts.total, counts.active, counts.completed
            )?;
        }
        Command::Help => {
            writeln!(out, "commands:")?;
            writeln!(out, "  add <status> <title...>     create a note")?;
            writeln!(out, "  list                        show the current view")?;
            writeln!(out, "  filter all|active|completed switch the view")?;
            writeln!(out, "  delete <id>                 remove one note")?;
            writeln!(out, "  clear                       remove the filtered set")?;
            writeln!(out, "  counts                      show badge counts")?;
            writeln!(out, "  quit                        end the session")?;
        }
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

fn main() -> io::Result<()> {
    let log_dir = std::env::temp_dir().join("notelist-logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        // The session works without file logs; report and continue.
        eprintln!("logging disabled: {err}");
    }

    let mut store = NoteStore::new();
    let mut confirm = StdinConfirmation;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "notelist {} (type `help` for commands)", core_version())?;
    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        line.clear();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(command) => {
                if !execute(&mut store, command, &mut confirm, &mut out)? {
                    break;
                }
            }
            Err(message) => {
                warn!("event=command_rejected module=cli status=rejected reason={message}");
                writeln!(out, "{message}")?;
            }
        }
    }
    Ok(())
}
