use crate::Vec2;
use std::ops::{Add, Mul, Sub};

/// Axis-aligned rectangle stored as origin + size.
///
/// Origins may be negative: a child laid out to overflow its container
/// sits at a negative offset relative to the container origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect<T> {
    pub origin: Vec2<T>,
    pub size: Vec2<T>,
}

impl<T: Default> Default for Rect<T> {
    fn default() -> Self {
        Self {
            origin: Vec2::zero(),
            size: Vec2::zero(),
        }
    }
}

impl<T> Rect<T> {
    pub fn new(origin: Vec2<T>, size: Vec2<T>) -> Self {
        Self { origin, size }
    }
}

impl<T: Default> Rect<T> {
    pub fn zero() -> Self {
        Self::default()
    }
}

impl<T: Sub<Output = T> + Copy> Rect<T> {
    pub fn from_min_max(min: Vec2<T>, max: Vec2<T>) -> Self {
        Self {
            origin: min,
            size: max - min,
        }
    }

    /// Build from edge coordinates, the way view trees report frames.
    pub fn from_ltrb(left: T, top: T, right: T, bottom: T) -> Self {
        Self::from_min_max(Vec2::new(left, top), Vec2::new(right, bottom))
    }
}

impl<T: Add<Output = T> + Copy> Rect<T> {
    pub fn min(&self) -> Vec2<T> {
        self.origin
    }

    pub fn max(&self) -> Vec2<T> {
        self.origin + self.size
    }

    pub fn left(&self) -> T {
        self.origin.x
    }

    pub fn top(&self) -> T {
        self.origin.y
    }

    pub fn right(&self) -> T {
        self.origin.x + self.size.x
    }

    pub fn bottom(&self) -> T {
        self.origin.y + self.size.y
    }

    pub fn width(&self) -> T {
        self.size.x
    }

    pub fn height(&self) -> T {
        self.size.y
    }
}

impl<T: Mul<Output = T> + Copy> Rect<T> {
    pub fn area(&self) -> T {
        self.size.x * self.size.y
    }
}

impl<T: Add<Output = T> + PartialOrd + Copy> Rect<T> {
    pub fn contains_rect(&self, other: Rect<T>) -> bool {
        let self_max = self.max();
        let other_max = other.max();
        other.origin.x >= self.origin.x
            && other.origin.y >= self.origin.y
            && other_max.x <= self_max.x
            && other_max.y <= self_max.y
    }
}
