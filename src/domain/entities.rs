// Visitor record extracted from the platform webhook envelope.
#[derive(Clone, Debug)]
pub struct VisitorRecord {
    // RFC 3339 sign-in timestamp as delivered by the platform.
    pub signed_in_at: String,
    pub full_name: Option<String>,
}

// Outcome of classifying a completed visit against the allowed maximum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StayEvaluation {
    pub elapsed_minutes: i64,
    pub max_minutes: u32,
    pub overstayed: bool,
    pub message: String,
}
