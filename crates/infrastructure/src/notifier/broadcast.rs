use rerouter_application::ports::StateNotifier;
use rerouter_domain::Message;
use tokio::sync::broadcast;

/// Fan-out of daemon broadcasts to every connected UI stream.
///
/// Sending with no subscriber is not an error; slow subscribers lose the
/// oldest messages once `capacity` is exceeded.
#[derive(Clone)]
pub struct BroadcastNotifier {
    sender: broadcast::Sender<Message>,
}

impl BroadcastNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Message> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new(64)
    }
}

impl StateNotifier for BroadcastNotifier {
    fn broadcast(&self, message: Message) -> usize {
        self.sender.send(message).unwrap_or(0)
    }
}

impl std::fmt::Debug for BroadcastNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BroadcastNotifier")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
