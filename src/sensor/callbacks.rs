//! Lifecycle hooks the drag engine exposes to the sensor.

/// Drag engine callbacks.
///
/// Supplied once when the sensor is built and owned by it for its whole lifetime.
/// All hooks are fire-and-forget.
pub trait DragCallbacks {
    /// A keyboard lift committed; the drag has started.
    fn on_key_lift(&mut self);

    /// The item was dropped at its current position.
    fn on_drop(&mut self);

    /// The drag was abandoned (Escape, viewport change or protocol violation).
    fn on_cancel(&mut self);

    fn move_forward(&mut self);

    fn move_backward(&mut self);

    /// Move perpendicular to the drag axis, e.g. into the next list.
    fn cross_axis_move_forward(&mut self);

    fn cross_axis_move_backward(&mut self);
}
