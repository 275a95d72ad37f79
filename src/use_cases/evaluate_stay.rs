use crate::domain::entities::StayEvaluation;
use crate::domain::errors::VisitError;

// Display name used when the visitor record carries none.
pub const FALLBACK_DISPLAY_NAME: &str = "Visitor";

const MILLIS_PER_MINUTE: i64 = 60_000;

// Classify a completed visit and render the summary message.
// The evaluation instant is an explicit argument so the result is
// reproducible; a sign-in later than the evaluation instant is rejected.
pub fn evaluate_stay(
    sign_in_epoch_ms: i64,
    evaluated_at_epoch_ms: i64,
    max_minutes: u32,
    display_name: &str,
) -> Result<StayEvaluation, VisitError> {
    let elapsed_ms = evaluated_at_epoch_ms - sign_in_epoch_ms;
    if elapsed_ms < 0 {
        return Err(VisitError::InvalidTimestamp);
    }

    let elapsed_minutes = elapsed_ms / MILLIS_PER_MINUTE;

    let name = if display_name.trim().is_empty() {
        FALLBACK_DISPLAY_NAME
    } else {
        display_name
    };

    // Staying exactly the allowed number of minutes is within limit.
    let overstayed = elapsed_minutes > i64::from(max_minutes);
    let message = if overstayed {
        let over_by = elapsed_minutes - i64::from(max_minutes);
        format!(
            "{name} overstayed by {over_by} minutes. (Stay: {elapsed_minutes} min, Max: {max_minutes} min)"
        )
    } else {
        format!(
            "{name} stayed for {elapsed_minutes} minutes, within the allowed {max_minutes} minutes."
        )
    };

    Ok(StayEvaluation {
        elapsed_minutes,
        max_minutes,
        overstayed,
        message,
    })
}
