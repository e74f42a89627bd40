pub mod courses;
pub mod listing;
pub mod students;
pub mod teachers;

/// Surface the normalized user message instead of the technical error
pub(crate) fn user_error(err: polis_core::Error) -> anyhow::Error {
    anyhow::anyhow!(err.user_message())
}
