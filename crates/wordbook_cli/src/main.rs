//! `wordbook` executable.
//!
//! Usage: `wordbook <dictionary-key> <-find|-write>`. Configuration comes
//! from `WORDBOOK_*` environment variables (see `wordbook_core::config`).

use std::io;
use std::process::ExitCode;
use wordbook_core::{init_logging, run, AppConfig, JsonFileCollectionRepository};

fn main() -> ExitCode {
    let config = AppConfig::from_env();
    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    // Why: non-UTF-8 bytes must reach the not-found path instead of panicking.
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let repo = JsonFileCollectionRepository::new(&config.dictionaries_path);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    match run(&args, repo, stdin.lock(), &mut stdout) {
        Ok(outcome) => {
            log::info!(
                "event=app_exit module=cli status=ok outcome={:?} code={}",
                outcome,
                outcome.exit_code()
            );
            ExitCode::from(outcome.exit_code())
        }
        Err(err) => {
            log::error!("event=app_exit module=cli status=error error={}", err);
            eprintln!("console error: {err}");
            ExitCode::FAILURE
        }
    }
}
