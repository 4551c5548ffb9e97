use lens_base::{init_stdout_logger, log, Rect, Vec2};
use lens_preview::{
    CameraPreview, CaptureSource, Orientation, PreviewConfig, PreviewError, PreviewHost,
    ScalePolicy, SurfaceCallback,
};
use std::time::Duration;
use tokio::sync::mpsc;

// delay between scripted host events
const EVENT_INTERVAL_MS: u64 = 50;

/// What the host view tree would deliver on its UI thread.
#[derive(Debug, Clone, Copy)]
enum HostEvent {
    Layout(i32, i32, i32, i32),
    SurfaceCreated,
    SurfaceChanged(i32, i32),
    SurfaceDestroyed,
    Rotate(Orientation),
    SwapDetector(&'static str),
}

/// Capture source that only pretends to open a camera.
struct SimCamera {
    size: Vec2<i32>,
    detector: &'static str,
    streaming: bool,
}

impl CaptureSource for SimCamera {
    type RenderTarget = String;
    type Detector = &'static str;

    fn start(&mut self, target: &String) -> Result<(), PreviewError> {
        log::info!(
            "camera: streaming {} into {} with {} detector",
            self.size,
            target,
            self.detector
        );
        self.streaming = true;
        Ok(())
    }

    fn stop(&mut self) {
        log::info!("camera: stopped");
        self.streaming = false;
    }

    fn release(&mut self) {
        log::info!("camera: released");
        self.streaming = false;
    }

    fn set_detector(&mut self, detector: &'static str) {
        self.detector = detector;
    }

    fn preview_size(&self) -> Option<Vec2<i32>> {
        Some(self.size)
    }

    fn set_rotation(&mut self) {}
}

struct SimHost {
    orientation: Orientation,
}

impl PreviewHost for SimHost {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn layout_child(&mut self, index: usize, frame: Rect<i32>) {
        log::info!(
            "host: child {} -> ({}, {}, {}, {})",
            index,
            frame.left(),
            frame.top(),
            frame.right(),
            frame.bottom()
        );
    }
}

fn script() -> Vec<HostEvent> {
    vec![
        HostEvent::Layout(0, 0, 400, 800),
        HostEvent::SurfaceCreated,
        HostEvent::SurfaceChanged(400, 800),
        HostEvent::SwapDetector("qr"),
        HostEvent::Rotate(Orientation::Landscape),
        HostEvent::Layout(0, 0, 800, 400),
        HostEvent::SurfaceDestroyed,
        HostEvent::SurfaceCreated,
    ]
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_stdout_logger();

    let policy = match std::env::args().nth(1).as_deref() {
        Some("fit") => ScalePolicy::Fit,
        _ => ScalePolicy::Fill,
    };
    log::info!("Preview simulation ({:?})", policy);

    let host = SimHost {
        orientation: Orientation::Portrait,
    };
    let mut preview = CameraPreview::new(host, "surface#0".to_string())
        .with_config(PreviewConfig::default().with_policy(policy));

    preview.start(Some(SimCamera {
        size: Vec2::new(640, 480),
        detector: "barcode",
        streaming: false,
    }))?;

    let (sender, mut receiver) = mpsc::channel::<HostEvent>(4);
    let producer = tokio::spawn(async move {
        for event in script() {
            tokio::time::sleep(Duration::from_millis(EVENT_INTERVAL_MS)).await;
            if sender.send(event).await.is_err() {
                break;
            }
        }
    });

    // all preview calls happen here, on one thread
    while let Some(event) = receiver.recv().await {
        log::info!("event: {:?}", event);
        match event {
            HostEvent::Layout(left, top, right, bottom) => {
                preview.on_layout(left, top, right, bottom)
            }
            HostEvent::SurfaceCreated => preview.surface_created(),
            HostEvent::SurfaceChanged(width, height) => preview.surface_changed(width, height),
            HostEvent::SurfaceDestroyed => preview.surface_destroyed(),
            HostEvent::Rotate(orientation) => preview.host_mut().orientation = orientation,
            HostEvent::SwapDetector(detector) => preview.replace_detector(detector, true)?,
        }
        log::info!(
            "state: {:?}, streaming: {}",
            preview.capture_state(),
            preview.source().is_some_and(|camera| camera.streaming)
        );
    }

    producer.await?;
    preview.release();
    log::info!("Exiting...");
    Ok(())
}
