// Domain-level errors for visit workflows.
#[derive(Debug)]
pub enum VisitError {
    InvalidFormat,
    OutOfRange,
    InvalidTimestamp,
    MissingVisitorData,
    UpstreamUnavailable,
    AttachmentFailure,
}
