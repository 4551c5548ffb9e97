use crate::{Orientation, PreviewError};
use lens_base::{Rect, Vec2};

/// Camera/vision pipeline that produces frames and runs detection.
///
/// The preview owns the source exclusively while it is attached and drives it
/// only from the host's UI thread. Implementations may hand frames to their own
/// capture thread internally.
pub trait CaptureSource {
    /// Drawable target the platform hands out once it can receive frames.
    type RenderTarget;

    /// Frame processor run on every captured frame.
    type Detector;

    /// Open the camera and start streaming into `target`.
    ///
    /// Fails with `PreviewError::Permission` if the camera permission is
    /// missing and `PreviewError::Device` if the camera cannot be opened.
    fn start(&mut self, target: &Self::RenderTarget) -> Result<(), PreviewError>;

    /// Stop streaming. The source can be started again.
    fn stop(&mut self);

    /// Stop streaming and free the underlying camera resources.
    fn release(&mut self);

    fn set_detector(&mut self, detector: Self::Detector);

    /// Native preview resolution, landscape-first. `None` until the camera
    /// has negotiated a size.
    fn preview_size(&self) -> Option<Vec2<i32>>;

    /// Re-read the display rotation and apply it to captured frames.
    fn set_rotation(&mut self);
}

/// The container the preview is laid out in.
pub trait PreviewHost {
    fn orientation(&self) -> Orientation;

    fn child_count(&self) -> usize {
        1
    }

    /// Place child `index`, relative to the container origin.
    fn layout_child(&mut self, index: usize, frame: Rect<i32>);
}

/// Lifecycle events of a render surface.
pub trait SurfaceCallback {
    fn surface_created(&mut self);

    fn surface_changed(&mut self, width: i32, height: i32);

    fn surface_destroyed(&mut self);
}
