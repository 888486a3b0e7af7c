use rerouter_domain::Message;

/// Fire-and-forget delivery of broadcasts to listening UI surfaces.
pub trait StateNotifier: Send + Sync {
    /// Returns the number of listeners that received the message.
    /// Zero listeners is not an error.
    fn broadcast(&self, message: Message) -> usize;
}
