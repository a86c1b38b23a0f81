//! Terminal front end: input parsing and text rendering.

use std::collections::HashMap;
use std::io::Write;

use chrono::Local;
use tama_core::{Action, AnimalType, PetId, PetView, Stats};
use tama_names::NameSource;

use crate::hooks::PresentationHooks;

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// `new <animal> [name]`; no name means a random one.
    Create {
        /// Where the name comes from.
        source: NameSource,
        /// Species.
        animal: AnimalType,
    },
    /// `nap|play|eat <id>`.
    Act {
        /// Target pet.
        pet: PetId,
        /// What to do.
        action: Action,
    },
    /// `list`.
    List,
    /// `restart`.
    Restart,
    /// `help`.
    Help,
    /// `quit` / `exit`.
    Quit,
    /// Blank line.
    Nothing,
}

/// Usage text for `help`.
pub const HELP: &str = "\
commands:
  new <dog|cat|rabbit|chicken> [name]   adopt a pet (random name if omitted)
  nap <id> | play <id> | eat <id>       look after a pet
  list                                  show every pet
  restart                               start over
  quit";

/// Parse one input line.
///
/// # Errors
/// Returns a message for the player if the line is not a command.
pub fn parse_line(line: &str) -> Result<Input, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(Input::Nothing);
    };

    match verb.to_ascii_lowercase().as_str() {
        "new" | "adopt" => {
            let animal = words
                .next()
                .ok_or("which animal? dog, cat, rabbit or chicken")?
                .parse::<AnimalType>()
                .map_err(|e| e.to_string())?;
            let name = words.collect::<Vec<_>>().join(" ");
            let source = if name.is_empty() {
                NameSource::Random
            } else {
                NameSource::Manual(name)
            };
            Ok(Input::Create { source, animal })
        }
        "list" | "ls" => Ok(Input::List),
        "restart" => Ok(Input::Restart),
        "help" | "?" => Ok(Input::Help),
        "quit" | "exit" => Ok(Input::Quit),
        other => {
            let action = other
                .parse::<Action>()
                .map_err(|_| format!("unknown command {other:?}; try `help`"))?;
            let id = words
                .next()
                .ok_or_else(|| format!("{action} which pet? give its number"))?;
            let id = id
                .trim_start_matches('#')
                .parse::<u64>()
                .map_err(|_| format!("{id:?} is not a pet number"))?;
            Ok(Input::Act {
                pet: PetId(id),
                action,
            })
        }
    }
}

/// Card text for a pet.
#[must_use]
pub fn describe_pet(pet: &PetView) -> String {
    format!(
        "[{}] Hi I am \"{}\", the happy {} | {}",
        pet.id, pet.name, pet.animal, pet.stats
    )
}

/// Hooks that print to a writer, one line per change.
pub struct TerminalHooks<W> {
    out: W,
    names: HashMap<PetId, String>,
}

impl<W: Write> TerminalHooks<W> {
    /// Print to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            names: HashMap::new(),
        }
    }

    fn line(&mut self, text: &str) {
        // A closed stdout is not worth crashing the game over.
        let _ = writeln!(self.out, "{text}");
        let _ = self.out.flush();
    }
}

impl TerminalHooks<std::io::Stdout> {
    /// Print to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> PresentationHooks for TerminalHooks<W> {
    fn render(&mut self, pet: &PetView) {
        self.names.insert(pet.id, pet.name.clone());
        self.line(&describe_pet(pet));
    }

    fn update_stats(&mut self, id: PetId, stats: Stats) {
        let name = self.names.get(&id).cloned().unwrap_or_default();
        self.line(&format!("  [{id}] {name}: {stats}"));
    }

    fn log(&mut self, message: &str) {
        let stamp = Local::now().format("%H:%M:%S");
        self.line(&format!("{stamp}  {message}"));
    }

    fn remove(&mut self, id: PetId) {
        self.names.remove(&id);
    }

    fn clear_history(&mut self) {
        self.line("----------------------------------------");
    }

    fn alert(&mut self, message: &str) {
        self.line(&format!("!! {message}"));
    }
}
