use chrono::DateTime;
use tracing::warn;

use crate::domain::entities::{StayEvaluation, VisitorRecord};
use crate::domain::errors::VisitError;
use crate::domain::ports::{Clock, ConfigSource, RecordSink};
use crate::use_cases::evaluate_stay::evaluate_stay;
use crate::use_cases::max_duration::{DEFAULT_MAX_DURATION_MINUTES, validate_max_duration};

// Label under which the duration summary is attached to the visit record.
pub const DURATION_CHECK_LABEL: &str = "Duration Check";

// Primary configuration key for the allowed stay duration.
pub const MAX_DURATION_CONFIG_KEY: &str = "MAX_DURATION";
// Fallback key kept for installations configured with the field-style name.
pub const MAX_DURATION_FIELD_KEY: &str = "maxDuration";

// Response returned by the sign-out use case.
pub struct SignOutResponse {
    pub duration_in_minutes: i64,
    pub max_duration: u32,
    pub message: String,
}

// Sign-out use case with injected dependencies.
pub struct SignOutUseCase<C, S, F> {
    pub clock: C,
    pub sink: S,
    pub config: F,
}

impl<C, S, F> SignOutUseCase<C, S, F>
where
    C: Clock,
    S: RecordSink,
    F: ConfigSource,
{
    pub async fn execute(
        &self,
        visitor: Option<VisitorRecord>,
    ) -> Result<SignOutResponse, VisitError> {
        let visitor = visitor.ok_or(VisitError::MissingVisitorData)?;

        let sign_in_epoch_ms = parse_sign_in_timestamp(&visitor.signed_in_at)?;
        let max_minutes = configured_max_duration(&self.config);
        let display_name = visitor.full_name.unwrap_or_default();

        let evaluation: StayEvaluation = evaluate_stay(
            sign_in_epoch_ms,
            self.clock.now_epoch_millis(),
            max_minutes,
            &display_name,
        )?;

        // The attachment is a required step; without it the sign-out fails.
        self.sink
            .attach(DURATION_CHECK_LABEL, &evaluation.message)
            .await
            .map_err(|_| VisitError::AttachmentFailure)?;

        Ok(SignOutResponse {
            duration_in_minutes: evaluation.elapsed_minutes,
            max_duration: evaluation.max_minutes,
            message: evaluation.message,
        })
    }
}

// Parse the platform-delivered RFC 3339 sign-in timestamp into epoch millis.
fn parse_sign_in_timestamp(raw: &str) -> Result<i64, VisitError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|instant| instant.timestamp_millis())
        .map_err(|_| VisitError::InvalidTimestamp)
}

// Resolve the configured max duration, recovering to the default when the
// upstream configuration is absent or carries an unusable value.
fn configured_max_duration<F: ConfigSource>(config: &F) -> u32 {
    let raw = config
        .get(MAX_DURATION_CONFIG_KEY)
        .or_else(|| config.get(MAX_DURATION_FIELD_KEY));

    match validate_max_duration(raw.as_deref()) {
        Ok(minutes) => minutes,
        Err(error) => {
            warn!(?raw, ?error, "ignoring invalid configured max duration");
            DEFAULT_MAX_DURATION_MINUTES
        }
    }
}
