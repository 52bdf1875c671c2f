use slidesheet_foundation::{DragHost, ViewId};

/// Container a [`SlidingSheetBehavior`](crate::SlidingSheetBehavior) is
/// attached to.
///
/// On top of the drag helper's tree queries the behavior needs to run the
/// container's own layout for the sheet and to ask for frames.
pub trait SheetHost: DragHost {
    /// Lays `child` out with the container's normal policy, leaving it at
    /// its unslid position.
    fn layout_child(&mut self, child: ViewId);

    /// Whether a layout pass is pending.
    fn is_layout_requested(&self) -> bool;

    fn request_layout(&mut self, child: ViewId);

    /// Asks for [`SlidingSheetBehavior::on_frame`](crate::SlidingSheetBehavior::on_frame)
    /// to be called on the next display frame.
    fn request_frame(&mut self);
}
