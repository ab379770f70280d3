//! Search-as-you-type throttling.
//!
//! Keystrokes arrive on a channel; [`debounce_queries`] forwards a query only after the
//! input has been quiet for the configured period, so a burst of typing issues a single
//! backend search.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tracing::trace;

/// Default quiet period before a query is sent.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

const CHANNEL_CAPACITY: usize = 16;

/// Spawns a task that debounces `input` and returns the stream of settled queries.
///
/// * Only the latest query of a burst is emitted, trimmed.
/// * A query equal to the previously emitted one is suppressed.
/// * When `input` closes, a pending query is flushed before the output closes.
///
/// Must be called from within a tokio runtime.
#[must_use]
pub fn debounce_queries(input: mpsc::Receiver<String>, period: Duration) -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    tokio::spawn(run(input, tx, period));
    rx
}

async fn run(mut input: mpsc::Receiver<String>, output: mpsc::Sender<String>, period: Duration) {
    let mut pending: Option<String> = None;
    let mut last_sent: Option<String> = None;
    let mut deadline = Instant::now();

    loop {
        tokio::select! {
            received = input.recv() => match received {
                Some(query) => {
                    trace!(query = %query, "Keystroke");
                    pending = Some(query.trim().to_owned());
                    deadline = Instant::now() + period;
                },
                None => {
                    if let Some(query) = pending.take() {
                        emit(&output, query, &mut last_sent).await;
                    }
                    break;
                },
            },
            () = sleep_until(deadline), if pending.is_some() => {
                if let Some(query) = pending.take()
                    && !emit(&output, query, &mut last_sent).await
                {
                    break;
                }
            },
        }
    }
}

/// Sends `query` unless it repeats the last one. Returns `false` once the receiver is gone.
async fn emit(output: &mpsc::Sender<String>, query: String, last_sent: &mut Option<String>) -> bool {
    if last_sent.as_deref() == Some(query.as_str()) {
        trace!(query = %query, "Duplicate query suppressed");
        return true;
    }
    *last_sent = Some(query.clone());
    output.send(query).await.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, sleep};

    const PERIOD: Duration = Duration::from_millis(300);

    #[tokio::test(start_paused = true)]
    async fn burst_emits_only_last_query() {
        let (tx, rx) = mpsc::channel(8);
        let mut out = debounce_queries(rx, PERIOD);

        for q in ["g", "ga", "gar", "garc"] {
            tx.send(q.to_owned()).await.unwrap();
            sleep(Duration::from_millis(50)).await;
        }
        sleep(PERIOD * 2).await;

        assert_eq!(out.recv().await.as_deref(), Some("garc"));
        drop(tx);
        assert_eq!(out.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn separate_bursts_emit_separately() {
        let (tx, rx) = mpsc::channel(8);
        let mut out = debounce_queries(rx, PERIOD);

        tx.send("ana".to_owned()).await.unwrap();
        sleep(PERIOD + Duration::from_millis(10)).await;
        tx.send("luis".to_owned()).await.unwrap();
        drop(tx);

        assert_eq!(out.recv().await.as_deref(), Some("ana"));
        assert_eq!(out.recv().await.as_deref(), Some("luis"));
        assert_eq!(out.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn trims_and_suppresses_duplicates() {
        let (tx, rx) = mpsc::channel(8);
        let mut out = debounce_queries(rx, PERIOD);

        tx.send(" yoga ".to_owned()).await.unwrap();
        sleep(PERIOD * 2).await;
        tx.send("yoga".to_owned()).await.unwrap();
        sleep(PERIOD * 2).await;
        tx.send("box".to_owned()).await.unwrap();
        drop(tx);

        assert_eq!(out.recv().await.as_deref(), Some("yoga"));
        assert_eq!(out.recv().await.as_deref(), Some("box"));
        assert_eq!(out.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_is_sent_before_quiet_period() {
        let (tx, rx) = mpsc::channel(8);
        let mut out = debounce_queries(rx, PERIOD);

        tx.send("pilates".to_owned()).await.unwrap();
        advance(Duration::from_millis(100)).await;
        assert!(out.try_recv().is_err());

        sleep(PERIOD).await;
        assert_eq!(out.recv().await.as_deref(), Some("pilates"));
    }
}
