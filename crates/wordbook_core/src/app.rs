//! Process-level entry: arguments -> load -> session.
//!
//! # Responsibility
//! - Print usage for malformed invocations before any file I/O.
//! - Load or seed the collection and resolve the requested dictionary.
//! - Run the interactive session and map the result to an exit outcome.

use crate::repo::collection_repo::CollectionRepository;
use crate::service::dictionary_service::DictionaryService;
use crate::session::{parse_args, Console, Session, SessionEnd, UsageError, USAGE};
use log::{info, warn};
use std::io::{self, BufRead, Write};

/// How the process run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// The interactive session ran and ended as described.
    Completed(SessionEnd),
    /// Wrong argument count or unknown mode.
    Usage,
    /// Requested dictionary key does not exist.
    DictionaryNotFound,
}

impl ExitOutcome {
    /// `0` once a session ran, `1` for an unknown key, `2` for bad usage.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Completed(_) => 0,
            Self::DictionaryNotFound => 1,
            Self::Usage => 2,
        }
    }
}

/// Runs one invocation against `repo`, reading replies from `input` and
/// writing the dialogue to `output`.
///
/// `args` excludes the program name.
///
/// # Errors
/// - Returns console write failures only; load and save failures are
///   reported in the dialogue.
pub fn run<S, Repo, R, W>(
    args: &[S],
    repo: Repo,
    input: R,
    output: &mut W,
) -> io::Result<ExitOutcome>
where
    S: AsRef<str>,
    Repo: CollectionRepository,
    R: BufRead,
    W: Write,
{
    let invocation = match parse_args(args) {
        Ok(invocation) => invocation,
        Err(err) => {
            warn!("event=usage_error module=app status=error error={}", err);
            if let UsageError::UnknownMode(_) = err {
                writeln!(output, "{err}")?;
            }
            output.write_all(USAGE.as_bytes())?;
            return Ok(ExitOutcome::Usage);
        }
    };

    let service = DictionaryService::new(repo);
    let loaded = service.load_or_seed();
    if let Some(err) = &loaded.recovered_from {
        writeln!(output, "Failed to load dictionaries, creating new ones: {err}")?;
    }

    let key = invocation.dictionary_key.as_str();
    if loaded.collection.get_dictionary(key).is_none() {
        info!("event=dictionary_lookup module=app status=not_found key={}", key);
        writeln!(output, "Dictionary '{key}' not found")?;
        writeln!(output, "Available dictionaries:")?;
        // Sorted by key, unlike hash-map iteration order.
        for (available, dict) in loaded.collection.iter() {
            writeln!(output, "  {available} ({})", dict.label())?;
        }
        return Ok(ExitOutcome::DictionaryNotFound);
    }

    let console = Console::new(input, output);
    let mut session = Session::new(&service, loaded.collection, key, console);
    let end = session.run(invocation.mode)?;
    Ok(ExitOutcome::Completed(end))
}

#[cfg(test)]
mod tests {
    use super::{run, ExitOutcome};
    use crate::repo::collection_repo::MemoryCollectionRepository;
    use crate::session::SessionEnd;
    use std::io::Cursor;

    fn run_with(
        args: &[&str],
        repo: &MemoryCollectionRepository,
        script: &str,
    ) -> (ExitOutcome, String) {
        let mut output = Vec::new();
        let outcome = run(args, repo, Cursor::new(script.to_string()), &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn exit_codes_distinguish_outcomes() {
        assert_eq!(ExitOutcome::Completed(SessionEnd::Quit).exit_code(), 0);
        assert_eq!(ExitOutcome::DictionaryNotFound.exit_code(), 1);
        assert_eq!(ExitOutcome::Usage.exit_code(), 2);
    }

    #[test]
    fn unknown_mode_prints_error_and_usage_without_loading() {
        let repo = MemoryCollectionRepository::new();
        let (outcome, output) = run_with(&["en-ru", "-edit"], &repo, "");

        assert_eq!(outcome, ExitOutcome::Usage);
        assert!(output.starts_with("Unknown mode '-edit'\nUsage: program <dictionary> <mode>\n"));
        assert!(!output.contains("Failed to load"));
    }

    #[test]
    fn not_found_lists_seeded_dictionaries_in_key_order() {
        let repo = MemoryCollectionRepository::new();
        let (outcome, output) = run_with(&["xx-yy", "-find"], &repo, "");

        assert_eq!(outcome, ExitOutcome::DictionaryNotFound);
        assert!(output.ends_with(
            "Dictionary 'xx-yy' not found\nAvailable dictionaries:\n  de-ru (German->Russian)\n  en-ru (English->Russian)\n  fr-ru (French->Russian)\n"
        ));
        assert_eq!(repo.save_count(), 0);
    }

    #[test]
    fn unreadable_input_after_addition_still_saves() {
        let repo = MemoryCollectionRepository::new();
        let mut output = Vec::new();
        let input = Cursor::new(b"bridge\n\xd0\xbc\xd0\xbe\xd1\x81\xd1\x82\n\xff\xfe\n".to_vec());

        let outcome = run(&["en-ru", "-write"], &repo, input, &mut output).unwrap();

        assert_eq!(outcome, ExitOutcome::Completed(SessionEnd::EndOfInput));
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Added: bridge = мост\n"));
        assert!(output.ends_with("Dictionaries saved successfully\n"));
        assert_eq!(repo.save_count(), 1);
        let saved = repo.snapshot().unwrap();
        assert_eq!(
            saved.get_dictionary("en-ru").unwrap().get_translation("bridge"),
            Some("мост")
        );
    }

    #[test]
    fn seeded_run_reports_load_failure_first() {
        let repo = MemoryCollectionRepository::new();
        let (outcome, output) = run_with(&["en-ru", "-find"], &repo, "hello\nexit\nq\n");

        assert_eq!(outcome, ExitOutcome::Completed(SessionEnd::Quit));
        assert!(output.starts_with(
            "Failed to load dictionaries, creating new ones: no persisted dictionaries\nFind mode for English->Russian dictionary\n"
        ));
        assert!(output.contains("Translation: hello = привет\n"));
    }
}
