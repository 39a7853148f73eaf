//! Measure specs passed down the node tree.
//!
//! A spec pairs a mode with a size. Parents derive one spec per axis for each
//! child from their own spec and the child's requested size, then the child
//! resolves its desired size against it.

use serde::{Deserialize, Serialize};

use super::params::ChildSize;

/// How the size in a [`MeasureSpec`] constrains the measured node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureMode {
    /// The node must be exactly this size.
    Exact,
    /// The node may be any size up to this one.
    AtMost,
    /// No limit; the node picks its own size.
    #[default]
    Unspecified,
}

/// A single-axis measurement constraint.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    #[serde(default)]
    pub size: f32,
}

impl MeasureSpec {
    /// No limit on this axis.
    pub const UNSPECIFIED: Self = Self {
        mode: MeasureMode::Unspecified,
        size: 0.0,
    };

    #[inline]
    pub const fn new(mode: MeasureMode, size: f32) -> Self {
        Self { mode, size }
    }

    #[inline]
    pub const fn exact(size: f32) -> Self {
        Self::new(MeasureMode::Exact, size)
    }

    #[inline]
    pub const fn at_most(size: f32) -> Self {
        Self::new(MeasureMode::AtMost, size)
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        self.mode == MeasureMode::Exact
    }

    /// Resolve a desired size against this spec.
    #[inline]
    pub fn resolve(&self, desired: f32) -> f32 {
        match self.mode {
            MeasureMode::Exact => self.size,
            MeasureMode::AtMost => desired.min(self.size),
            MeasureMode::Unspecified => desired,
        }
    }

    /// Space left for content after removing the parent's padding.
    ///
    /// Unspecified specs have no limit, so this returns infinity for them.
    #[inline]
    pub fn available(&self, padding: f32) -> f32 {
        match self.mode {
            MeasureMode::Unspecified => f32::INFINITY,
            _ => (self.size - padding).max(0.0),
        }
    }

    /// Derive the spec a child is measured against on this axis.
    ///
    /// `padding` is the parent's padding along the axis. Child margins are not
    /// subtracted.
    pub fn child_spec(&self, padding: f32, child: ChildSize) -> MeasureSpec {
        let avail = (self.size - padding).max(0.0);

        match (self.mode, child) {
            (_, ChildSize::Fixed(n)) => MeasureSpec::exact(n),

            (MeasureMode::Exact, ChildSize::MatchParent) => MeasureSpec::exact(avail),
            (MeasureMode::Exact, ChildSize::WrapContent) => MeasureSpec::at_most(avail),

            (MeasureMode::AtMost, ChildSize::MatchParent | ChildSize::WrapContent) => {
                MeasureSpec::at_most(avail)
            }

            (MeasureMode::Unspecified, ChildSize::MatchParent | ChildSize::WrapContent) => {
                MeasureSpec::new(MeasureMode::Unspecified, avail)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(MeasureSpec::exact(50.0).resolve(80.0), 50.0);
        assert_eq!(MeasureSpec::at_most(50.0).resolve(80.0), 50.0);
        assert_eq!(MeasureSpec::at_most(50.0).resolve(30.0), 30.0);
        assert_eq!(MeasureSpec::UNSPECIFIED.resolve(30.0), 30.0);
    }

    #[test]
    fn test_available() {
        assert_eq!(MeasureSpec::at_most(100.0).available(10.0), 90.0);
        assert_eq!(MeasureSpec::exact(5.0).available(10.0), 0.0);
        assert!(MeasureSpec::UNSPECIFIED.available(10.0).is_infinite());
    }

    #[test]
    fn test_child_spec_fixed_is_always_exact() {
        for parent in [
            MeasureSpec::exact(100.0),
            MeasureSpec::at_most(100.0),
            MeasureSpec::UNSPECIFIED,
        ] {
            assert_eq!(
                parent.child_spec(0.0, ChildSize::Fixed(40.0)),
                MeasureSpec::exact(40.0)
            );
        }
    }

    #[test]
    fn test_child_spec_exact_parent() {
        let parent = MeasureSpec::exact(100.0);
        assert_eq!(
            parent.child_spec(20.0, ChildSize::MatchParent),
            MeasureSpec::exact(80.0)
        );
        assert_eq!(
            parent.child_spec(20.0, ChildSize::WrapContent),
            MeasureSpec::at_most(80.0)
        );
    }

    #[test]
    fn test_child_spec_at_most_parent() {
        let parent = MeasureSpec::at_most(100.0);
        assert_eq!(
            parent.child_spec(0.0, ChildSize::MatchParent),
            MeasureSpec::at_most(100.0)
        );
        assert_eq!(
            parent.child_spec(0.0, ChildSize::WrapContent),
            MeasureSpec::at_most(100.0)
        );
    }

    #[test]
    fn test_child_spec_unspecified_parent() {
        let spec = MeasureSpec::UNSPECIFIED.child_spec(0.0, ChildSize::WrapContent);
        assert_eq!(spec.mode, MeasureMode::Unspecified);
    }

    #[test]
    fn test_spec_from_json() {
        let spec: MeasureSpec = serde_json::from_str(r#"{"mode":"at_most","size":120}"#).unwrap();
        assert_eq!(spec, MeasureSpec::at_most(120.0));

        let spec: MeasureSpec = serde_json::from_str(r#"{"mode":"unspecified"}"#).unwrap();
        assert_eq!(spec, MeasureSpec::UNSPECIFIED);
    }
}
