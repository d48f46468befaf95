use tokio::sync::oneshot;

/// One-shot notification that the hub is bound and accepting connections.
#[derive(Debug)]
pub struct ReadySignal(oneshot::Sender<()>);

impl ReadySignal {
    /// Create a signal together with the receiver that observes it.
    #[must_use]
    pub fn pair() -> (Self, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel();
        (Self(tx), rx)
    }

    pub fn notify(self) {
        if self.0.send(()).is_err() {
            tracing::debug!("ready receiver dropped before notification");
        }
    }
}
