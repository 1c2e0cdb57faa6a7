//! Common CAN abstractions for carport vehicle ports
//!
//! Raw transport and the signal dictionary (bit layout, scaling, checksums)
//! live outside carport. Vehicle crates see already-unpacked signals through a
//! [`SignalFrame`] and hand back [`FrameDescriptor`]s for the caller to pack
//! and send.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod counter;
pub mod descriptor;
pub mod freshness;
pub mod frame;

pub use counter::*;
pub use descriptor::*;
pub use freshness::*;
pub use frame::*;

/// Rolling 4-bit message counters wrap at this value.
pub const COUNTER_MODULO: u8 = 16;

/// Reduce a counter value to its 4-bit wire representation.
pub fn nibble(value: u32) -> u8 {
    (value % u32::from(COUNTER_MODULO)) as u8
}
