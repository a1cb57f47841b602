//! Submission flow: validate, send, extract, present.

use crate::animate::MeterAnimator;
use crate::client::GenerateClient;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use forked_domain::SubmissionInput;

/// The message shown when a required field is missing, before any
/// request is made.
pub const VALIDATION_MESSAGE: &str =
    "Please fill in your age and the decision you are considering.";

/// Per-run session state: the last submitted form values.
///
/// Overwritten on each submission (last write wins) and read only by the
/// presenter's baseline card.
#[derive(Default)]
pub struct SessionState {
    last_input: Option<SubmissionInput>,
}

/// Drives one submission at a time from form values to rendered results.
pub struct Controller<'a> {
    client: GenerateClient,
    formatter: &'a Formatter,
    animator: MeterAnimator,
    session: SessionState,
}

impl<'a> Controller<'a> {
    /// Create a controller over a client and formatter.
    pub fn new(client: GenerateClient, formatter: &'a Formatter) -> Self {
        Self {
            client,
            formatter,
            animator: MeterAnimator::new(),
            session: SessionState::default(),
        }
    }

    /// Run one submission end to end.
    ///
    /// Validation failures return before any network traffic. Transport
    /// failures, non-2xx statuses, and backend-reported errors all
    /// surface as errors; the caller shows them and returns to the form.
    /// Awaiting the response is what keeps submissions serialized: a
    /// second one cannot start until this call settles.
    pub async fn submit(&mut self, input: SubmissionInput) -> Result<()> {
        if input.validate().is_err() {
            return Err(CliError::InvalidInput(VALIDATION_MESSAGE.to_string()));
        }

        self.session.last_input = Some(input);
        let input = self.session.last_input.clone().unwrap_or_default();

        eprintln!(
            "{}",
            self.formatter
                .busy("Simulating 10 years down the other road...")
        );

        let raw_output = self.client.submit(&input).await?;
        let parsed = forked_extractor::extract(&raw_output);

        self.formatter
            .render_results(&mut self.animator, &input, &parsed)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn unroutable_controller(formatter: &Formatter) -> Controller<'_> {
        // Port 1 is never listening; any attempted request fails fast
        Controller::new(GenerateClient::new("http://127.0.0.1:1"), formatter)
    }

    #[tokio::test]
    async fn test_missing_age_sends_no_request() {
        let formatter = Formatter::new(OutputFormat::Pretty, false, false);
        let mut controller = unroutable_controller(&formatter);

        let input = SubmissionInput {
            decision: "quit my job".to_string(),
            ..SubmissionInput::default()
        };

        // InvalidInput, not Connection: validation fired before transport
        let result = controller.submit(input).await;
        match result {
            Err(CliError::InvalidInput(message)) => assert_eq!(message, VALIDATION_MESSAGE),
            other => panic!("expected validation error, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_missing_decision_sends_no_request() {
        let formatter = Formatter::new(OutputFormat::Pretty, false, false);
        let mut controller = unroutable_controller(&formatter);

        let input = SubmissionInput {
            age: "29".to_string(),
            ..SubmissionInput::default()
        };

        assert!(matches!(
            controller.submit(input).await,
            Err(CliError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_valid_input_reaches_transport() {
        let formatter = Formatter::new(OutputFormat::Pretty, false, false);
        let mut controller = unroutable_controller(&formatter);

        let input = SubmissionInput {
            age: "29".to_string(),
            decision: "moved abroad".to_string(),
            ..SubmissionInput::default()
        };

        // The request is attempted and fails at the connection layer
        assert!(matches!(
            controller.submit(input).await,
            Err(CliError::Connection(_))
        ));
    }
}
