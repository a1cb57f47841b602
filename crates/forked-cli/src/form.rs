//! Interactive form mode: collect the five fields over readline.

use crate::controller::Controller;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use forked_domain::SubmissionInput;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Run the interactive form loop: collect, submit, render, repeat.
pub async fn run_form(controller: &mut Controller<'_>, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("Forked - Butterfly Effect: Trade-off Simulator")
    );
    println!(
        "{}",
        formatter.info("Answer a few questions; Ctrl-C at any prompt quits.")
    );

    let mut editor = DefaultEditor::new().map_err(|e| {
        CliError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to initialize editor: {}", e),
        ))
    })?;

    loop {
        println!();
        let Some(input) = collect_submission(&mut editor)? else {
            break;
        };

        if let Err(e) = controller.submit(input).await {
            // The "alert": show it and fall through to a fresh form
            eprintln!("{}", formatter.error(&e.to_string()));
            continue;
        }

        match ask(&mut editor, "\nPress Enter for another simulation, or type 'exit': ")? {
            Some(line) if line != "exit" => continue,
            _ => break,
        }
    }

    Ok(())
}

/// Collect one submission. Returns `None` when the user bails out
/// (Ctrl-C / Ctrl-D) mid-form.
pub fn collect_submission(editor: &mut DefaultEditor) -> Result<Option<SubmissionInput>> {
    let Some(age) = ask(editor, "Your age: ")? else {
        return Ok(None);
    };
    let Some(profession) = ask(editor, "Profession (optional): ")? else {
        return Ok(None);
    };
    let Some(location) = ask(editor, "Location (optional): ")? else {
        return Ok(None);
    };
    let Some(risk) = ask(editor, "Risk appetite, e.g. Low/Medium/High (optional): ")? else {
        return Ok(None);
    };
    let Some(decision) = ask(editor, "The decision you keep wondering about: ")? else {
        return Ok(None);
    };

    Ok(Some(SubmissionInput {
        age,
        profession,
        location,
        risk,
        decision,
    }))
}

fn ask(editor: &mut DefaultEditor, prompt: &str) -> Result<Option<String>> {
    match editor.readline(prompt) {
        Ok(line) => Ok(Some(line.trim().to_string())),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(e) => Err(CliError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            e.to_string(),
        ))),
    }
}
