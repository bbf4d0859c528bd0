//! Ask command implementation.

use crate::cli::AskArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use veritas_sdk::VeritasClient;

/// Execute the ask command.
pub async fn execute_ask(
    args: AskArgs,
    client: &VeritasClient,
    formatter: &Formatter,
) -> Result<()> {
    let question = question_from(&args)?;

    let result = client.evaluate(&question).await?;

    println!("{}", formatter.format_evaluation(&result)?);

    Ok(())
}

/// Join the argument words into one question and validate it.
fn question_from(args: &AskArgs) -> Result<String> {
    let text = args.text();
    validate_question(&text)?;
    Ok(text)
}

/// Reject blank questions before any request is sent.
fn validate_question(question: &str) -> Result<&str> {
    if question.trim().is_empty() {
        return Err(CliError::InvalidInput("Question is required".to_string()));
    }
    Ok(question)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_question_rejected() {
        assert!(matches!(
            validate_question("  "),
            Err(CliError::InvalidInput(_))
        ));
        assert_eq!(validate_question("Why?").unwrap(), "Why?");
    }

    #[test]
    fn test_question_from_joins_words() {
        let args = AskArgs {
            question: ["Is", "Paris", "the", "capital?"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
        };
        assert_eq!(question_from(&args).unwrap(), "Is Paris the capital?");

        let blank = AskArgs {
            question: vec![" ".to_string(), "".to_string()],
        };
        assert!(matches!(question_from(&blank), Err(CliError::InvalidInput(_))));
    }
}
