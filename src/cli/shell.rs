//! Interactive shell
//!
//! Reads one command per line, splits it with shell quoting rules and parses
//! it with the same clap definitions as the one-shot CLI. A failing command
//! is reported and the session carries on with the ledger unchanged.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use shell_words::split;

use super::session::Session;
use super::transaction::{handle_ledger_command, LedgerCommand};
use crate::error::TallyResult;

/// Whether the shell should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

#[derive(Parser, Debug)]
#[command(no_binary_name = true, name = "tally", disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    #[command(flatten)]
    Ledger(LedgerCommand),
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Run the shell over stdin
pub fn run_shell(session: &mut Session) -> TallyResult<()> {
    use std::io::IsTerminal;

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        println!("Tally shell. Type 'help' for commands, 'quit' to leave.");
    }
    run_lines(session, stdin.lock(), interactive)
}

/// Run the shell over any line source
pub fn run_lines<R: BufRead>(session: &mut Session, input: R, prompt: bool) -> TallyResult<()> {
    let mut lines = input.lines();

    loop {
        if prompt {
            print!("tally> ");
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        if handle_line(session, &line?) == LoopControl::Exit {
            break;
        }
    }

    Ok(())
}

/// Execute one line of input
pub fn handle_line(session: &mut Session, line: &str) -> LoopControl {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return LoopControl::Continue;
    }

    let tokens = match split(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("Error: {}", err);
            return LoopControl::Continue;
        }
    };

    let parsed = match ShellLine::try_parse_from(tokens) {
        Ok(parsed) => parsed,
        Err(err) => {
            // Covers `help` and `--help` as well as real usage errors.
            let _ = err.print();
            return LoopControl::Continue;
        }
    };

    match parsed.command {
        ShellCommand::Quit => LoopControl::Exit,
        ShellCommand::Ledger(cmd) => {
            if let Err(err) = handle_ledger_command(session, cmd) {
                tracing::debug!(error = %err, line, "Shell command failed");
                eprintln!("Error: {}", err);
            }
            LoopControl::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{Money, TransactionId};
    use crate::services::Ledger;

    fn session() -> Session {
        Session::new(Ledger::sample(), Settings::default())
    }

    #[test]
    fn test_parse_shell_line() {
        let parsed = ShellLine::try_parse_from(
            split("add --date 2023-01-10 --amount 50 --type expense --category bills").unwrap(),
        )
        .unwrap();
        assert!(matches!(parsed.command, ShellCommand::Ledger(LedgerCommand::Add { .. })));

        let parsed = ShellLine::try_parse_from(["exit"]).unwrap();
        assert!(matches!(parsed.command, ShellCommand::Quit));
    }

    #[test]
    fn test_script_session() {
        let mut session = session();
        let script = "\
add --date 2023-01-10 --amount 50 --category bills
# comments and blank lines are skipped

edit 1 --amount 600
delete 2
quit
add --date 2023-01-11 --amount 1 --category other
";
        run_lines(&mut session, script.as_bytes(), false).unwrap();

        let ids: Vec<_> = session.ledger.transactions().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TransactionId::new(1), TransactionId::new(3)]);
        assert_eq!(session.ledger.total_balance(), Money::new(550.0));
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let mut session = session();
        let script = "\
add --amount 50
edit 99 --amount 5
bogus
add --date \"2023-01-10 --amount 5
add --date 2023-01-12 --amount 5 --category other
";
        run_lines(&mut session, script.as_bytes(), false).unwrap();
        assert_eq!(session.ledger.len(), 3);
    }
}
