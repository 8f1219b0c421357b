//! Process-lifetime registry of all classification axes.
//!
//! The axes are stateless, so the registry is built once on first use and
//! lives behind an immutable reference until process exit; no teardown.

use lazy_static::lazy_static;

use crate::axes::{BuddyAxis, DateAxis, DepthAxis, DiveModeAxis};
use crate::traits::Axis;

/// The fixed, ordered set of available classification axes
pub struct AxisRegistry {
    axes: Vec<Box<dyn Axis>>,
}

impl AxisRegistry {
    fn new() -> Self {
        let axes: Vec<Box<dyn Axis>> = vec![
            Box::new(DateAxis::default()),
            Box::new(DepthAxis::default()),
            Box::new(DiveModeAxis::default()),
            Box::new(BuddyAxis::default()),
        ];
        log::debug!("axis registry initialized with {} axes", axes.len());
        Self { axes }
    }

    /// Number of registered axes
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// Whether the registry is empty (it never is in practice)
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Axis at the given index
    pub fn get(&self, idx: usize) -> Option<&dyn Axis> {
        self.axes.get(idx).map(|axis| axis.as_ref())
    }

    /// Iterate over all axes in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Axis> + '_ {
        self.axes.iter().map(|axis| axis.as_ref())
    }
}

lazy_static! {
    static ref AXES: AxisRegistry = AxisRegistry::new();
}

/// All available classification axes, constructed once per process
pub fn axes() -> &'static AxisRegistry {
    &AXES
}
