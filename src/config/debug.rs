//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Every outbound prediction and its resolution (sequence number, timing).
    pub log_requests: bool,

    /// Responses and timer expiries dropped because a newer submit superseded them.
    pub log_stale_events: bool,

    /// Field edits, presets and rejected input.
    pub log_form_edits: bool,

    /// Health probe results.
    pub log_health: bool,

    pub log_persistence: bool,
}

pub const DF: LogFlags = LogFlags {
    log_requests: true,
    log_stale_events: true,

    log_health: true,
    log_form_edits: false,
    log_persistence: false,
};
