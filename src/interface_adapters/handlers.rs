use crate::domain::errors::VisitError;
use crate::interface_adapters::protocol::{
    ErrorResponse, MinuteValidationRequest, MinuteValidationResponse, SignInResponse,
    SignOutResponse, WebhookRequest,
};
use crate::interface_adapters::state::{AppState, EnvelopeConfig, JobAttachmentSink, SystemClock};
use crate::use_cases::max_duration::validate_max_duration;
use crate::use_cases::sign_out::SignOutUseCase;
use axum::{Json, extract::State, http::StatusCode};
use tracing::error;

// Fixed user-facing message for rejected max-duration input.
const MAX_DURATION_ERROR: &str = "Max duration must be a number between 0 and 180 minutes";

// Health check handler.
pub async fn health() -> &'static str {
    "Visitor Minute Tracker is running"
}

// Handler for normalizing a proposed max stay duration.
pub async fn minute_validation(
    Json(payload): Json<MinuteValidationRequest>,
) -> Result<Json<MinuteValidationResponse>, (StatusCode, Json<ErrorResponse>)> {
    let raw = payload.raw_max_duration();

    let max_duration = validate_max_duration(raw.as_deref())
        .map_err(|err| map_visit_error(err, VisitErrorContext::MinuteValidation))?;

    Ok(Json(MinuteValidationResponse { max_duration }))
}

// Handler for the sign-in webhook; nothing to compute at sign-in time.
pub async fn visitor_sign_in() -> Json<SignInResponse> {
    Json(SignInResponse {
        message: "Visitor signed in".to_string(),
    })
}

// Handler for the sign-out webhook: evaluate the stay and attach the summary.
pub async fn visitor_sign_out(
    State(state): State<AppState>,
    Json(envelope): Json<WebhookRequest>,
) -> Result<Json<SignOutResponse>, (StatusCode, Json<ErrorResponse>)> {
    // The integration context must accompany every platform webhook; without
    // it there is no configuration and no job to attach the summary to.
    let meta = envelope.meta.as_ref().ok_or_else(|| {
        error!("integration context missing from sign-out webhook");
        map_visit_error(VisitError::UpstreamUnavailable, VisitErrorContext::SignOut)
    })?;
    let job = meta.job.as_ref().ok_or_else(|| {
        error!("job handle missing from sign-out webhook");
        map_visit_error(VisitError::UpstreamUnavailable, VisitErrorContext::SignOut)
    })?;

    let use_case = SignOutUseCase {
        clock: SystemClock,
        sink: JobAttachmentSink::new(&state, job.id.clone()),
        config: EnvelopeConfig {
            entries: &meta.config,
        },
    };

    let result = use_case
        .execute(envelope.visitor_record())
        .await
        .map_err(|err| map_visit_error(err, VisitErrorContext::SignOut))?;

    Ok(Json(SignOutResponse {
        duration_in_minutes: result.duration_in_minutes,
        max_duration: result.max_duration,
        message: result.message,
    }))
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

// Maps domain errors to HTTP responses by endpoint context.
enum VisitErrorContext {
    MinuteValidation,
    SignOut,
}

fn map_visit_error(
    err: VisitError,
    context: VisitErrorContext,
) -> (StatusCode, Json<ErrorResponse>) {
    match context {
        VisitErrorContext::MinuteValidation => match err {
            // The two validation failures are indistinguishable externally.
            VisitError::InvalidFormat | VisitError::OutOfRange => {
                error_response(StatusCode::BAD_REQUEST, MAX_DURATION_ERROR)
            }
            VisitError::InvalidTimestamp
            | VisitError::MissingVisitorData
            | VisitError::UpstreamUnavailable
            | VisitError::AttachmentFailure => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error processing request")
            }
        },
        VisitErrorContext::SignOut => match err {
            VisitError::MissingVisitorData => {
                error_response(StatusCode::BAD_REQUEST, "Visitor information missing")
            }
            VisitError::InvalidTimestamp => {
                error_response(StatusCode::BAD_REQUEST, "Visitor sign-in time is invalid")
            }
            VisitError::UpstreamUnavailable => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Integration context not found",
            ),
            VisitError::AttachmentFailure => {
                error!("failed to attach duration summary to visit record");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error processing sign-out")
            }
            VisitError::InvalidFormat | VisitError::OutOfRange => {
                error_response(StatusCode::BAD_REQUEST, MAX_DURATION_ERROR)
            }
        },
    }
}
