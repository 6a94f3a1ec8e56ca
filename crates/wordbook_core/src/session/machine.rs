//! Interactive mode state machine.
//!
//! # Transitions
//! - `RunMode(m)` -> `SavePrompt(m)` on `exit` or end of input.
//! - `SavePrompt(m)`: `y` saves then `SwitchPrompt(m)`; `q` -> `Finished`;
//!   anything else -> `SwitchPrompt(m)`; end of input -> `FinalSave`.
//! - `SwitchPrompt(m)`: `find`/`write` -> `RunMode(new)`; `exit` ->
//!   `Finished`; anything else warns and -> `RunMode(m)`; end of input ->
//!   `FinalSave`.
//! - `FinalSave` -> `Finished` after one save attempt.
//!
//! # Invariants
//! - `q` and `exit` terminate without the final save.
//! - Save failures are printed; the in-memory collection is kept.

use crate::model::collection::DictionaryCollection;
use crate::model::dictionary::Dictionary;
use crate::repo::collection_repo::CollectionRepository;
use crate::service::dictionary_service::DictionaryService;
use crate::session::args::Mode;
use crate::session::console::Console;
use log::{error, info};
use std::io::{self, BufRead, Write};

const EXIT_WORD: &str = "exit";
const FIND_PROMPT: &str = "Enter word to translate: ";
const WORD_PROMPT: &str = "Enter word: ";
const TRANSLATION_PROMPT: &str = "Enter translation: ";
const SAVE_PROMPT: &str = "Save changes and continue? (y/n/q): ";
const SWITCH_PROMPT: &str = "Switch mode? (find/write/exit): ";

/// Session position in the interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    RunMode(Mode),
    SavePrompt(Mode),
    SwitchPrompt(Mode),
    FinalSave,
    Finished,
}

/// How the session terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// `q` at the save prompt.
    Quit,
    /// `exit` at the switch prompt.
    Exit,
    /// Input ran out at a prompt; the final save was attempted.
    EndOfInput,
}

/// Reply to the save prompt.
///
/// Unlike `SwitchAnswer`, unknown replies are not reported back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAnswer {
    Save,
    Skip,
    Quit,
}

impl SaveAnswer {
    /// Case-insensitive; unrecognized replies count as `Skip`.
    pub fn parse(reply: &str) -> Self {
        match reply.trim().to_lowercase().as_str() {
            "y" => Self::Save,
            "q" => Self::Quit,
            _ => Self::Skip,
        }
    }
}

/// Reply to the switch-mode prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchAnswer {
    Switch(Mode),
    Exit,
    /// Unrecognized reply; the current mode is kept.
    Keep(String),
}

impl SwitchAnswer {
    /// Case-sensitive match on the trimmed reply.
    pub fn parse(reply: &str) -> Self {
        let reply = reply.trim();
        if reply == EXIT_WORD {
            return Self::Exit;
        }
        match Mode::from_answer(reply) {
            Some(mode) => Self::Switch(mode),
            None => Self::Keep(reply.to_string()),
        }
    }
}

/// One interactive session over a single dictionary.
pub struct Session<'svc, Repo: CollectionRepository, R, W> {
    service: &'svc DictionaryService<Repo>,
    collection: DictionaryCollection,
    key: String,
    console: Console<R, W>,
}

impl<'svc, Repo, R, W> Session<'svc, Repo, R, W>
where
    Repo: CollectionRepository,
    R: BufRead,
    W: Write,
{
    /// Creates a session for `key`.
    ///
    /// # Invariants
    /// - `key` must exist in `collection`; `app::run` checks it first.
    pub fn new(
        service: &'svc DictionaryService<Repo>,
        collection: DictionaryCollection,
        key: impl Into<String>,
        console: Console<R, W>,
    ) -> Self {
        Self {
            service,
            collection,
            key: key.into(),
            console,
        }
    }

    /// Runs the state machine from `RunMode(initial)` until it finishes.
    ///
    /// Unreadable input counts as end of input, so it still reaches
    /// `FinalSave`.
    ///
    /// # Errors
    /// - Returns write failures on the console output.
    pub fn run(&mut self, initial: Mode) -> io::Result<SessionEnd> {
        info!(
            "event=session_start module=session key={} mode={}",
            self.key,
            initial.as_str()
        );

        let mut state = SessionState::RunMode(initial);
        let mut end = SessionEnd::EndOfInput;
        loop {
            state = match state {
                SessionState::RunMode(mode) => {
                    self.run_mode(mode)?;
                    SessionState::SavePrompt(mode)
                }
                SessionState::SavePrompt(mode) => match self.console.prompt(SAVE_PROMPT)? {
                    None => SessionState::FinalSave,
                    Some(reply) => match SaveAnswer::parse(&reply) {
                        SaveAnswer::Quit => {
                            // Why: `q` means "leave now"; only an explicit `y`
                            // before it persists anything.
                            end = SessionEnd::Quit;
                            SessionState::Finished
                        }
                        SaveAnswer::Save => {
                            self.save_and_report()?;
                            SessionState::SwitchPrompt(mode)
                        }
                        SaveAnswer::Skip => SessionState::SwitchPrompt(mode),
                    },
                },
                SessionState::SwitchPrompt(mode) => match self.console.prompt(SWITCH_PROMPT)? {
                    None => SessionState::FinalSave,
                    Some(reply) => match SwitchAnswer::parse(&reply) {
                        SwitchAnswer::Switch(next) => SessionState::RunMode(next),
                        SwitchAnswer::Exit => {
                            end = SessionEnd::Exit;
                            SessionState::Finished
                        }
                        SwitchAnswer::Keep(other) => {
                            writeln!(
                                self.console.out(),
                                "Unknown mode '{other}', keeping current mode"
                            )?;
                            SessionState::RunMode(mode)
                        }
                    },
                },
                SessionState::FinalSave => {
                    self.save_and_report()?;
                    SessionState::Finished
                }
                SessionState::Finished => break,
            };
        }

        info!(
            "event=session_end module=session key={} reason={:?}",
            self.key, end
        );
        Ok(end)
    }

    fn run_mode(&mut self, mode: Mode) -> io::Result<()> {
        // No remove operation exists, so the key checked at startup stays valid.
        let Some(dict) = self.collection.get_dictionary_mut(&self.key) else {
            error!(
                "event=mode_start module=session status=error key={} error_code=dictionary_missing",
                self.key
            );
            return Ok(());
        };

        match mode {
            Mode::Find => find_loop(&mut self.console, dict),
            Mode::Write => write_loop(&mut self.console, dict),
        }
    }

    fn save_and_report(&mut self) -> io::Result<()> {
        match self.service.save(&self.collection) {
            Ok(()) => writeln!(self.console.out(), "Dictionaries saved successfully"),
            Err(err) => writeln!(self.console.out(), "Failed to save dictionaries: {err}"),
        }
    }
}

fn print_mode_banner<W: Write>(out: &mut W, name: &str, dict: &Dictionary) -> io::Result<()> {
    writeln!(out, "{name} mode for {} dictionary", dict.label())?;
    writeln!(out, "Type '{EXIT_WORD}' to return to main menu")
}

fn find_loop<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    dict: &Dictionary,
) -> io::Result<()> {
    print_mode_banner(console.out(), "Find", dict)?;

    let mut lookups = 0_usize;
    let mut misses = 0_usize;
    while let Some(word) = console.prompt(FIND_PROMPT)? {
        if word == EXIT_WORD {
            break;
        }
        if word.is_empty() {
            continue;
        }

        lookups += 1;
        match dict.get_translation(&word) {
            Some(translation) => {
                writeln!(console.out(), "Translation: {word} = {translation}")?;
            }
            None => {
                misses += 1;
                writeln!(console.out(), "Word '{word}' not found in dictionary")?;
            }
        }
    }

    info!(
        "event=mode_end module=session mode=find lookups={} misses={}",
        lookups, misses
    );
    Ok(())
}

fn write_loop<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    dict: &mut Dictionary,
) -> io::Result<()> {
    print_mode_banner(console.out(), "Write", dict)?;

    let mut additions = 0_usize;
    while let Some(word) = console.prompt(WORD_PROMPT)? {
        if word == EXIT_WORD {
            break;
        }
        if word.is_empty() {
            continue;
        }

        let Some(translation) = console.prompt(TRANSLATION_PROMPT)? else {
            break;
        };
        if translation.is_empty() {
            writeln!(console.out(), "Translation cannot be empty")?;
            continue;
        }

        writeln!(console.out(), "Added: {word} = {translation}")?;
        dict.add_word(word, translation);
        additions += 1;
    }

    info!(
        "event=mode_end module=session mode=write additions={} words={}",
        additions,
        dict.len()
    );
    Ok(())
}
