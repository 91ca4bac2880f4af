//! # Ratio Update Flow
//!
//! Drives one run of the set-ratio command:
//!
//! ```text
//! Prompting ──┬──> Cancelled   (dismissed / empty submission; silent)
//!             ├──> Invalid     (status message, no write)
//!             └──> Committed   (write, confirmation status message)
//! ```
//!
//! Every path is terminal after one submission; re-invoking the command
//! starts a fresh flow. The prompt waits indefinitely for the user:
//! dismissal (escape, focus loss) is a defined cancellation path, not
//! an error.

use log::{debug, info};

use crate::core::settings::RatioSetting;
use crate::core::validate::{self, Validation};
use crate::host::{HostWindow, InputBoxRequest, STATUS_MESSAGE_DURATION, StoreError};

/// Field description shown in the input box.
pub const PROMPT_TEXT: &str = "Ratio of viewport to scroll";

/// Terminal state of one flow invocation.
#[derive(Clone, Debug, PartialEq)]
pub enum FlowOutcome {
    Cancelled,
    /// The submitted text was rejected; carries the raw input.
    Invalid(String),
    /// The new ratio was persisted.
    Committed(f64),
}

/// Prompts for a new ratio, validates it, and persists it.
///
/// Only a configuration-store failure surfaces as `Err`; user input
/// errors end in [`FlowOutcome::Invalid`] with a transient status
/// message and no write.
pub async fn run(ratio: &RatioSetting, window: &dyn HostWindow) -> Result<FlowOutcome, StoreError> {
    // Empty text is not flagged live: clearing the box and submitting
    // counts as cancellation, handled below, not as invalid input.
    let live_validator = |text: &str| {
        if text.is_empty() { None } else { validate::validate(text).into_message() }
    };

    let input = window
        .show_input_box(InputBoxRequest {
            value: ratio.read().to_string(),
            prompt: PROMPT_TEXT,
            validate_input: &live_validator,
        })
        .await;

    let input = match input {
        Some(text) if !text.is_empty() => text,
        // Box dismissed after losing focus, escape, or enter on empty text.
        _ => {
            debug!("ratio prompt dismissed, keeping current value");
            return Ok(FlowOutcome::Cancelled);
        }
    };

    // The live validator should have blocked this already; re-check the
    // parsed float anyway rather than trusting that path exclusively.
    let parsed = input.trim().parse::<f64>().unwrap_or(f64::NAN);
    if let Validation::Invalid(_) = validate::validate_ratio(parsed) {
        debug!("rejected ratio input {input:?}");
        window.set_status_message(
            &format!("Partial Navigation: Invalid Scroll By Lines value '{input}'"),
            STATUS_MESSAGE_DURATION,
        );
        return Ok(FlowOutcome::Invalid(input));
    }

    ratio.write(parsed)?;
    info!("ratio updated to {parsed}");
    window.set_status_message(
        &format!("Partial Navigation: ratio updated to '{parsed}'"),
        STATUS_MESSAGE_DURATION,
    );
    Ok(FlowOutcome::Committed(parsed))
}
