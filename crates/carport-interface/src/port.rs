//! The seam between a vehicle family and the control loop.

use carport_can_common::{FrameDescriptor, SignalFrame};
use carport_events::ConditionSet;
use carport_types::{CarControl, VariantParams, VehicleState};
use serde::{Deserialize, Serialize};

/// What the control loop gets back from one [`CarPort::update`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CarOutput {
    pub state: VehicleState,
    pub conditions: ConditionSet,
}

/// One vehicle family, driven once per control cycle: `update` with the
/// latest bus view, then `apply` with the planner's decision.
pub trait CarPort {
    /// Message identifiers of this family.
    type MessageId;

    fn update(&mut self, frame: &SignalFrame<Self::MessageId>) -> CarOutput;

    /// Frames to send this cycle, in send order. Empty when nothing may be
    /// commanded.
    fn apply(&mut self, control: &CarControl) -> Vec<FrameDescriptor<Self::MessageId>>;

    fn variant_params(&self) -> &VariantParams;
}
