/// Host lifecycle for rig components.
///
/// The host owns the frame loop and the transform store. It calls
/// `on_init` once when the component is attached, `on_update` once per
/// frame, and `on_teardown` when the component is detached.

use crate::error::Result;
use crate::input::InputState;
use crate::transform::TransformStore;

/// A component driven by the host's frame loop.
///
/// All hooks borrow the store mutably for the duration of the call only;
/// components keep `TransformKey`s, never references.
pub trait RigComponent {
    /// Create owned nodes and resolve strategies. Called once.
    fn on_init(&mut self, transforms: &mut TransformStore) -> Result<()>;

    /// Advance one frame of `delta_time` seconds.
    fn on_update(
        &mut self,
        transforms: &mut TransformStore,
        delta_time: f32,
        input: &InputState,
    ) -> Result<()>;

    /// Release owned nodes. Calling it on an uninitialized component is a no-op.
    fn on_teardown(&mut self, transforms: &mut TransformStore) -> Result<()>;
}
