//! Presentation sink abstraction
//!
//! This module defines the trait through which the engine pushes outbound
//! game messages to the hosting chat platform. The sink abstraction keeps
//! the engine free of any transport dependency; hosts bind it to whatever
//! channel primitive their platform offers.

use crate::game::UpdateMessage;

/// Trait for delivering outbound game messages to the hosting channel
///
/// One sink serves one game. Delivery is fire-and-forget from the
/// engine's perspective: the engine never awaits acknowledgement, and a
/// host that needs to post asynchronously should queue the message and
/// return immediately.
///
/// Per-request outcomes (join and answer rejections) are not routed
/// through the sink; they are returned as `Result` values to the caller
/// that delivered the event, which formats its own ephemeral reply.
pub trait Sink {
    /// Delivers an update message to the hosting channel
    fn send_message(&self, message: &UpdateMessage);

    /// Notifies the sink that the game has ended and no further
    /// messages will be sent
    ///
    /// The default implementation does nothing; hosts with per-game
    /// resources (collectors, message handles) release them here.
    fn close(&self) {}
}
