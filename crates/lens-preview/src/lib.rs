//! Live camera preview for the lens ecosystem.
//!
//! [`CameraPreview`] keeps a [`CaptureSource`] in step with the lifecycle of
//! its render surface and lays the preview out inside a [`PreviewHost`]
//! container, either fitting it inside or filling and cropping.

pub mod config;
pub mod error;
pub mod layout;
pub mod orientation;
pub mod preview;
pub mod traits;

pub use config::PreviewConfig;
pub use error::PreviewError;
pub use layout::{
    compute_layout, cropped_percent, fill_layout, fit_layout, PreviewGeometry, ScalePolicy,
};
pub use orientation::Orientation;
pub use preview::{CameraPreview, CaptureState, PreviewState};
pub use traits::{CaptureSource, PreviewHost, SurfaceCallback};
