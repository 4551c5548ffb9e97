/// Device orientation as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    Portrait,
    Landscape,
    /// The host could not tell; treated as landscape.
    #[default]
    Undefined,
}

impl Orientation {
    pub fn is_portrait(self) -> bool {
        matches!(self, Orientation::Portrait)
    }
}
