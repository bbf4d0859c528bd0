//! Interactive chat loop.
//!
//! Every line that is not a REPL command is submitted as a question. After
//! each submit only the newly appended messages are rendered.

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use veritas_sdk::{ChatSession, EvaluationBackend, SubmitOutcome};

/// Run the interactive chat session.
pub async fn run_repl<B: EvaluationBackend>(
    session: &mut ChatSession<B>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    println!("{}", formatter.info("Veritas chat - Type 'help' for commands, 'exit' to quit"));
    println!("Try: \"Is Berlin the capital of Germany?\"");
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("veritas> ") {
            Ok(line) => match parse_repl_line(&line) {
                ReplCommand::Empty => continue,
                ReplCommand::Exit => {
                    println!("{}", formatter.info("Goodbye!"));
                    break;
                }
                ReplCommand::Help => print_help(formatter),
                ReplCommand::History => {
                    if session.log().is_empty() {
                        println!("{}", formatter.info("No messages yet"));
                    }
                    for message in session.log().messages() {
                        println!("{}", formatter.format_message(message)?);
                    }
                }
                ReplCommand::Ask(question) => {
                    editor.add_history_entry(question.as_str()).ok();

                    let before = session.log().len();
                    session.set_input(question);
                    println!("{}", formatter.loading());

                    if let SubmitOutcome::Failed(e) = session.submit().await {
                        if e.is_client_error() {
                            eprintln!("{}", formatter.warning(&e.to_string()));
                        } else {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }

                    for message in session.log().since(before) {
                        println!("{}", formatter.format_message(message)?);
                    }
                    println!();
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Empty,
    Exit,
    Help,
    History,
    Ask(String),
}

/// Parse a REPL input line.
fn parse_repl_line(line: &str) -> ReplCommand {
    let trimmed = line.trim();

    match trimmed {
        "" => ReplCommand::Empty,
        "exit" | "quit" | "q" => ReplCommand::Exit,
        "help" | "?" => ReplCommand::Help,
        "history" => ReplCommand::History,
        _ => ReplCommand::Ask(trimmed.to_string()),
    }
}

fn get_history_path() -> Result<PathBuf> {
    let veritas_dir = Config::dir()?;
    std::fs::create_dir_all(&veritas_dir)?;
    Ok(veritas_dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <question>      - Evaluate a question");
    println!("  history         - Show every message in this session");
    println!("  help, ?         - Show this help");
    println!("  exit, quit, q   - Exit chat");
    println!();
}
