#![allow(dead_code)]

use lens_base::{Level, Logger, Rect, Vec2};
use lens_preview::{CaptureSource, Orientation, PreviewError, PreviewHost};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Start(u32),
    Stop,
    Release,
    SetDetector(&'static str),
    SetRotation,
}

/// How the next `start` should fail, if at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Failure {
    None,
    Permission,
    Device,
}

#[derive(Debug)]
pub struct SourceLog {
    pub calls: Vec<Call>,
    pub fail: Failure,
    pub size: Option<Vec2<i32>>,
}

pub type Shared<T> = Rc<RefCell<T>>;

pub fn source_log() -> Shared<SourceLog> {
    Rc::new(RefCell::new(SourceLog {
        calls: Vec::new(),
        fail: Failure::None,
        size: Some(Vec2::new(640, 480)),
    }))
}

/// Capture source that records every call into a shared log.
pub struct MockSource {
    pub name: &'static str,
    pub log: Shared<SourceLog>,
}

impl MockSource {
    pub fn new(name: &'static str, log: &Shared<SourceLog>) -> Self {
        Self {
            name,
            log: Rc::clone(log),
        }
    }
}

impl CaptureSource for MockSource {
    type RenderTarget = u32;
    type Detector = &'static str;

    fn start(&mut self, target: &u32) -> Result<(), PreviewError> {
        let mut log = self.log.borrow_mut();
        match log.fail {
            Failure::None => {
                log.calls.push(Call::Start(*target));
                Ok(())
            }
            Failure::Permission => Err(PreviewError::Permission("CAMERA".to_string())),
            Failure::Device => Err(PreviewError::Device("camera busy".to_string())),
        }
    }

    fn stop(&mut self) {
        self.log.borrow_mut().calls.push(Call::Stop);
    }

    fn release(&mut self) {
        self.log.borrow_mut().calls.push(Call::Release);
    }

    fn set_detector(&mut self, detector: &'static str) {
        self.log.borrow_mut().calls.push(Call::SetDetector(detector));
    }

    fn preview_size(&self) -> Option<Vec2<i32>> {
        self.log.borrow().size
    }

    fn set_rotation(&mut self) {
        self.log.borrow_mut().calls.push(Call::SetRotation);
    }
}

#[derive(Debug, Default)]
pub struct HostLog {
    pub layouts: Vec<(usize, Rect<i32>)>,
}

pub struct MockHost {
    pub orientation: Orientation,
    pub children: usize,
    pub log: Shared<HostLog>,
}

impl MockHost {
    pub fn new(orientation: Orientation) -> (Self, Shared<HostLog>) {
        let log = Rc::new(RefCell::new(HostLog::default()));
        (
            Self {
                orientation,
                children: 1,
                log: Rc::clone(&log),
            },
            log,
        )
    }
}

impl PreviewHost for MockHost {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn child_count(&self) -> usize {
        self.children
    }

    fn layout_child(&mut self, index: usize, frame: Rect<i32>) {
        self.log.borrow_mut().layouts.push((index, frame));
    }
}

/// Logger that keeps every message.
#[derive(Clone, Default)]
pub struct RecordingLogger {
    pub entries: Rc<RefCell<Vec<(Level, String)>>>,
}

impl RecordingLogger {
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.entries
            .borrow()
            .iter()
            .any(|(l, m)| *l == level && m.contains(needle))
    }
}

impl Logger for RecordingLogger {
    fn log(&self, level: Level, message: &str) {
        self.entries.borrow_mut().push((level, message.to_string()));
    }
}

pub fn starts(log: &Shared<SourceLog>) -> usize {
    log.borrow()
        .calls
        .iter()
        .filter(|call| matches!(call, Call::Start(_)))
        .count()
}
