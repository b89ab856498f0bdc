//! Concurrency-safe sink for result messages.

use log::warn;
use tokio::sync::mpsc;

use super::ResultMessage;

/// Write half handed to every probe task.
#[derive(Debug, Clone)]
pub struct ResultSink {
    tx: mpsc::Sender<ResultMessage>,
}

/// Read half, drained once after every task has finished.
#[derive(Debug)]
pub struct ResultCollector {
    rx: mpsc::Receiver<ResultMessage>,
}

impl ResultCollector {
    /// Creates a collector able to buffer `capacity` messages without waiting
    /// on the reader.
    ///
    /// Size it to the number of tasks so that no task ever blocks on a full
    /// channel while the reader is still waiting at the barrier.
    pub fn with_capacity(capacity: usize) -> (ResultSink, ResultCollector) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (ResultSink { tx }, ResultCollector { rx })
    }

    /// Returns every buffered message exactly once.
    ///
    /// The channel is closed first, so messages submitted after this call are
    /// rejected rather than silently left behind.
    pub fn drain(mut self) -> Vec<ResultMessage> {
        self.rx.close();
        let mut messages = Vec::with_capacity(self.rx.len());
        while let Ok(message) = self.rx.try_recv() {
            messages.push(message);
        }
        messages
    }
}

impl ResultSink {
    /// Hands one message to the collector.
    pub async fn submit(&self, message: ResultMessage) {
        if let Err(e) = self.tx.send(message).await {
            warn!("Result collector closed, dropping message: {}", e.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ErrorType;
    use std::collections::HashSet;

    fn failure(i: usize) -> ResultMessage {
        ResultMessage::Failure {
            host: format!("http://10.0.0.{i}"),
            domain: "a.example.com".to_string(),
            error: ErrorType::HttpRequestConnectError,
            detail: "connection refused".to_string(),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_writers_lose_nothing() {
        let n = 500;
        let (sink, collector) = ResultCollector::with_capacity(n);

        let handles: Vec<_> = (0..n)
            .map(|i| {
                let sink = sink.clone();
                tokio::spawn(async move { sink.submit(failure(i)).await })
            })
            .collect();
        for handle in handles {
            handle.await.expect("writer task panicked");
        }
        drop(sink);

        let messages = collector.drain();
        assert_eq!(messages.len(), n);
        let unique: HashSet<_> = messages.iter().map(|m| m.host().to_string()).collect();
        assert_eq!(unique.len(), n);
    }

    #[tokio::test]
    async fn test_zero_capacity_is_usable() {
        let (sink, collector) = ResultCollector::with_capacity(0);
        sink.submit(failure(1)).await;
        assert_eq!(collector.drain().len(), 1);
    }

    #[tokio::test]
    async fn test_drain_empty() {
        let (_sink, collector) = ResultCollector::with_capacity(4);
        assert!(collector.drain().is_empty());
    }
}
