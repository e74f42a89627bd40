// Search input debouncing
//
// The controller does not debounce; this is the input-side collaborator that
// turns raw keystrokes into settled search terms. Trailing-edge with a
// quiescence window, latest value wins, consecutive duplicates suppressed.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::trace;

/// Default quiescence window before a search term counts as settled
pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(500);

/// Handle feeding raw input events into the debounce task
///
/// Dropping the handle flushes a still-pending value and ends the task.
pub struct Debouncer {
    tx: mpsc::UnboundedSender<String>,
}

impl Debouncer {
    /// Spawn the debounce task; settled terms arrive on the returned receiver
    pub fn new(window: Duration) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (in_tx, in_rx) = mpsc::unbounded_channel();
        let (out_tx, out_rx) = mpsc::unbounded_channel();
        tokio::spawn(run(window, in_rx, out_tx));
        (Self { tx: in_tx }, out_rx)
    }

    pub fn with_default_window() -> (Self, mpsc::UnboundedReceiver<String>) {
        Self::new(DEFAULT_QUIESCENCE)
    }

    /// Feed one raw input event (the full text after a keystroke)
    pub fn input(&self, text: impl Into<String>) {
        // A closed receiver means the task is gone; nothing left to settle.
        let _ = self.tx.send(text.into());
    }
}

async fn run(
    window: Duration,
    mut input: mpsc::UnboundedReceiver<String>,
    output: mpsc::UnboundedSender<String>,
) {
    let mut last_emitted: Option<String> = None;
    let mut pending: Option<String> = None;
    loop {
        let value = match pending.take() {
            Some(value) => value,
            None => match input.recv().await {
                Some(value) => value,
                None => return,
            },
        };
        tokio::select! {
            newer = input.recv() => match newer {
                Some(newer) => pending = Some(newer),
                None => {
                    // Input handle dropped with a value still pending: flush it.
                    emit(&output, &mut last_emitted, value);
                    return;
                }
            },
            _ = tokio::time::sleep(window) => {
                emit(&output, &mut last_emitted, value);
            }
        }
    }
}

fn emit(output: &mpsc::UnboundedSender<String>, last: &mut Option<String>, value: String) {
    if last.as_ref() == Some(&value) {
        trace!("suppressing duplicate search term");
        return;
    }
    let _ = output.send(value.clone());
    *last = Some(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn rapid_inputs_settle_to_the_last_value() {
        let (debouncer, mut terms) = Debouncer::new(Duration::from_millis(500));
        debouncer.input("p");
        debouncer.input("ph");
        debouncer.input("phy");

        assert_eq!(terms.recv().await.as_deref(), Some("phy"));

        drop(debouncer);
        assert_eq!(terms.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn spaced_inputs_each_emit() {
        let (debouncer, mut terms) = Debouncer::new(Duration::from_millis(500));
        debouncer.input("physics");
        tokio::time::sleep(Duration::from_millis(600)).await;
        debouncer.input("");

        assert_eq!(terms.recv().await.as_deref(), Some("physics"));
        assert_eq!(terms.recv().await.as_deref(), Some(""));
    }

    #[tokio::test(start_paused = true)]
    async fn consecutive_duplicates_emit_once() {
        let (debouncer, mut terms) = Debouncer::new(Duration::from_millis(500));
        debouncer.input("math");
        tokio::time::sleep(Duration::from_millis(600)).await;
        debouncer.input("math");
        tokio::time::sleep(Duration::from_millis(600)).await;
        drop(debouncer);

        assert_eq!(terms.recv().await.as_deref(), Some("math"));
        assert_eq!(terms.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn pending_value_flushes_when_handle_drops() {
        let (debouncer, mut terms) = Debouncer::new(Duration::from_millis(500));
        debouncer.input("chem");
        drop(debouncer);

        assert_eq!(terms.recv().await.as_deref(), Some("chem"));
        assert_eq!(terms.recv().await, None);
    }
}
