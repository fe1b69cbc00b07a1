//! Test producer logs.

/// Marker the test producer writes for every record it sends.
pub const MESSAGE_MARKER: &str = "Message #";

/// Counts log lines reporting a produced message.
pub fn produced_message_lines(log: &str) -> usize {
    log.lines().filter(|line| line.contains(MESSAGE_MARKER)).count()
}

/// Returns whether the log reports at least one produced message.
pub fn has_produced_messages(log: &str) -> bool {
    log.lines().any(|line| line.contains(MESSAGE_MARKER))
}
