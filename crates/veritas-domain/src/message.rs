//! Chat message module - transient entries in the client's message log

use crate::evaluation::EvaluationResponse;
use std::fmt;

/// Unique identifier for a chat message based on UUIDv7
///
/// UUIDv7 gives chronological sortability, so ids of messages appended in
/// sequence compare in append order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(u128);

impl MessageId {
    /// Generate a new UUIDv7-based MessageId
    ///
    /// # Examples
    ///
    /// ```
    /// use veritas_domain::MessageId;
    ///
    /// let id = MessageId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }

    /// Milliseconds since Unix epoch encoded in the UUIDv7
    pub fn timestamp(&self) -> u64 {
        // UUIDv7: top 48 bits are Unix millisecond timestamp
        (self.0 >> 80) as u64
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// Display category of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// Submitted by the user
    Question,
    /// Evaluation result or inline error
    Response,
    /// Synthetic explorer link following a successful evaluation
    Verification,
}

impl MessageKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Question => "question",
            MessageKind::Response => "response",
            MessageKind::Verification => "verification",
        }
    }
}

/// Payload of a chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageContent {
    /// The question text as typed
    Question(String),
    /// A full evaluation result
    Response(EvaluationResponse),
    /// An inline error shown in place of a result
    Error(String),
    /// Explorer URL of the evaluation's transaction reference
    Verification(String),
}

impl MessageContent {
    /// Display category for this payload
    pub fn kind(&self) -> MessageKind {
        match self {
            MessageContent::Question(_) => MessageKind::Question,
            MessageContent::Response(_) | MessageContent::Error(_) => MessageKind::Response,
            MessageContent::Verification(_) => MessageKind::Verification,
        }
    }
}

/// An entry in the chat log
///
/// Messages are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Unique identifier
    pub id: MessageId,

    /// Payload
    pub content: MessageContent,

    /// Creation time in milliseconds since Unix epoch
    pub timestamp: u64,
}

impl ChatMessage {
    /// Create a message stamped with the current time
    pub fn new(content: MessageContent) -> Self {
        let id = MessageId::new();
        Self {
            id,
            content,
            timestamp: id.timestamp(),
        }
    }

    /// Display category of this message
    pub fn kind(&self) -> MessageKind {
        self.content.kind()
    }
}
