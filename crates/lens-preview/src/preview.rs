use crate::{
    compute_layout, cropped_percent, CaptureSource, Orientation, PreviewConfig, PreviewError,
    PreviewGeometry, PreviewHost, ScalePolicy, SurfaceCallback,
};
use lens_base::{Level, LogCrateLogger, Logger, Vec2};

/// Readiness flags and last known container size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreviewState {
    pub surface_available: bool,
    pub start_requested: bool,
    pub container: Vec2<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Requested,
    Running,
}

/// Live camera preview bound to a host container and a render surface.
///
/// Capture is started through a single choke point that only calls
/// [`CaptureSource::start`] once a source is attached, a start has been
/// requested and the surface is available. Surface events, layout passes and
/// explicit calls all go through it.
pub struct CameraPreview<S: CaptureSource, H: PreviewHost> {
    host: H,
    render_target: S::RenderTarget,
    source: Option<S>,
    state: PreviewState,
    running: bool,
    config: PreviewConfig,
    logger: Box<dyn Logger>,
}

impl<S: CaptureSource, H: PreviewHost> CameraPreview<S, H> {
    pub fn new(host: H, render_target: S::RenderTarget) -> Self {
        Self {
            host,
            render_target,
            source: None,
            state: PreviewState::default(),
            running: false,
            config: PreviewConfig::default(),
            logger: Box::new(LogCrateLogger::new("lens_preview")),
        }
    }

    pub fn with_config(mut self, config: PreviewConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_logger(mut self, logger: impl Logger + 'static) -> Self {
        self.logger = Box::new(logger);
        self
    }

    /// Attach `source` and start it as soon as the surface is available.
    ///
    /// `None` stops, releases and detaches the current source. The preview
    /// owns the handle exclusively, so nothing else would ever release it
    /// once detached.
    ///
    /// Attaching while another source is requested or running fails with
    /// [`PreviewError::SourceAttached`]; a stopped source is released and
    /// replaced.
    ///
    /// Errors from opening the camera are returned, not logged.
    pub fn start(&mut self, source: Option<S>) -> Result<(), PreviewError> {
        let Some(source) = source else {
            self.stop();
            if let Some(mut old) = self.source.take() {
                old.release();
            }
            return Ok(());
        };

        if self.capture_state() != CaptureState::Idle {
            return Err(PreviewError::SourceAttached);
        }
        if let Some(mut old) = self.source.replace(source) {
            old.release();
        }

        self.state.start_requested = true;
        self.start_if_ready().map(|_| ())
    }

    /// Request a restart of the attached source after [`stop`](Self::stop).
    pub fn resume(&mut self) -> Result<(), PreviewError> {
        if self.source.is_none() || self.running {
            return Ok(());
        }
        self.state.start_requested = true;
        self.start_if_ready().map(|_| ())
    }

    /// Stop capture, keeping the source attached.
    pub fn stop(&mut self) {
        if let Some(source) = self.source.as_mut() {
            source.stop();
        }
        self.running = false;
        self.state.start_requested = false;
    }

    /// Free the source's resources and detach it. Safe to call repeatedly.
    pub fn release(&mut self) {
        if let Some(mut source) = self.source.take() {
            source.release();
        }
        self.running = false;
        self.state.start_requested = false;
    }

    /// Swap the detector, which means a full release and restart of capture.
    ///
    /// Capture resumes only if `should_resume` is set and the surface is
    /// currently available. A start still waiting for the surface stays
    /// pending.
    pub fn replace_detector(
        &mut self,
        detector: S::Detector,
        should_resume: bool,
    ) -> Result<(), PreviewError> {
        let Some(source) = self.source.as_mut() else {
            self.logger
                .log(Level::Debug, "no capture source attached, detector not replaced");
            return Ok(());
        };

        let pending = self.state.start_requested && !self.running;

        source.release();
        source.set_detector(detector);
        self.running = false;
        self.state.start_requested = pending;

        if should_resume && self.state.surface_available {
            self.resume()?;
        }
        Ok(())
    }

    /// Host layout callback with the container's frame in parent coordinates.
    pub fn on_layout(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        self.state.container = Vec2::new(right - left, bottom - top);
        self.logger.log(
            Level::Debug,
            &format!("onLayout {}", self.state.container),
        );

        if let Some(source) = self.source.as_mut() {
            source.set_rotation();
        }
        self.preview_layout();
    }

    pub fn capture_state(&self) -> CaptureState {
        if self.source.is_none() {
            CaptureState::Idle
        } else if self.running {
            CaptureState::Running
        } else if self.state.start_requested {
            CaptureState::Requested
        } else {
            CaptureState::Idle
        }
    }

    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Start capture iff a start is requested, the surface is available and
    /// a source is attached. Returns whether the source was started.
    fn start_if_ready(&mut self) -> Result<bool, PreviewError> {
        if !(self.state.start_requested && self.state.surface_available) {
            return Ok(false);
        }
        let Some(source) = self.source.as_mut() else {
            return Ok(false);
        };

        source.start(&self.render_target)?;
        self.state.start_requested = false;
        self.running = true;
        Ok(true)
    }

    /// [`start_if_ready`](Self::start_if_ready) for callbacks, where nobody
    /// can act on the error.
    fn start_from_callback(&mut self) {
        match self.start_if_ready() {
            Ok(_) => {}
            Err(PreviewError::Permission(msg)) => self.logger.log(
                Level::Error,
                &format!("Do not have permission to start the camera: {msg}"),
            ),
            Err(err) => self
                .logger
                .log(Level::Error, &format!("Could not start camera source: {err}")),
        }
    }

    fn orientation(&self) -> Orientation {
        let orientation = self.host.orientation();
        if orientation == Orientation::Undefined {
            self.logger
                .log(Level::Debug, "orientation undefined, assuming landscape");
        }
        orientation
    }

    fn preview_layout(&mut self) {
        let container = self.state.container;
        if container.x == 0 || container.y == 0 {
            return;
        }

        let native = self
            .source
            .as_ref()
            .and_then(|source| source.preview_size())
            .filter(|size| size.x > 0 && size.y > 0)
            .unwrap_or(self.config.fallback_size());

        let orientation = self.orientation();
        self.logger.log(
            Level::Debug,
            if orientation.is_portrait() {
                "portrait"
            } else {
                "landscape"
            },
        );
        let preview = PreviewGeometry::new(native, orientation).oriented();

        let policy = self.config.policy();
        if let Some(child) = compute_layout(policy, container, preview) {
            if policy == ScalePolicy::Fill {
                self.logger.log(
                    Level::Debug,
                    &format!("Layout: {}% of preview was cropped.", cropped_percent(child)),
                );
            }
            for index in 0..self.host.child_count() {
                self.host.layout_child(index, child);
            }
        }

        self.start_from_callback();
    }
}

impl<S: CaptureSource, H: PreviewHost> SurfaceCallback for CameraPreview<S, H> {
    fn surface_created(&mut self) {
        self.state.surface_available = true;
        self.logger.log(Level::Debug, "surface created");
        self.start_from_callback();
    }

    fn surface_changed(&mut self, width: i32, height: i32) {
        self.logger.log(
            Level::Debug,
            &format!("surface changed {width} x {height}"),
        );
        self.preview_layout();
    }

    fn surface_destroyed(&mut self) {
        self.logger.log(Level::Debug, "surface destroyed");
        self.state.surface_available = false;

        if self.config.stop_on_surface_destroyed() && self.running {
            self.stop();
            self.state.start_requested = true;
        }
    }
}
