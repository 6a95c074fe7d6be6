//! Shared-sub chart dataset and its keyboard focus cursor.

use serde::Serialize;

use crate::collate;
use crate::index::RelationIndex;

pub const MIN_RADIUS: usize = 8;
pub const MAX_RADIUS: usize = 25;
const RADIUS_PER_USE: usize = 3;

/// One point on the shared-sub chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub name: String,
    /// Number of mains using this sub (always > 1).
    pub count: usize,
    /// Position along the x axis (collation order).
    pub x: usize,
    pub radius: usize,
}

/// Subs used by more than one main, in collation order.
pub fn shared_subs(index: &RelationIndex) -> Vec<ChartPoint> {
    let mut shared: Vec<(&str, usize)> = index
        .sub_to_mains()
        .iter()
        .filter(|(_, mains)| mains.len() > 1)
        .map(|(sub, mains)| (sub.as_str(), mains.len()))
        .collect();
    shared.sort_by(|a, b| collate::compare(a.0, b.0));

    shared
        .into_iter()
        .enumerate()
        .map(|(x, (name, count))| ChartPoint {
            name: name.to_string(),
            count,
            x,
            radius: (count * RADIUS_PER_USE).clamp(MIN_RADIUS, MAX_RADIUS),
        })
        .collect()
}

/// Keyboard commands understood by the chart region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKey {
    Advance,
    Retreat,
    First,
    Last,
    Activate,
}

/// Focus cursor over an ordered set of chart points.
///
/// `focused` is `None` or an index in `[0, len)`. With no points every
/// transition is a no-op and the chart renders its empty state instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartFocusModel {
    points: Vec<ChartPoint>,
    focused: Option<usize>,
}

impl ChartFocusModel {
    pub fn new(points: Vec<ChartPoint>) -> Self {
        Self {
            points,
            focused: None,
        }
    }

    pub fn from_index(index: &RelationIndex) -> Self {
        Self::new(shared_subs(index))
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn focused_point(&self) -> Option<&ChartPoint> {
        self.focused.and_then(|i| self.points.get(i))
    }

    pub fn advance(&mut self) {
        let n = self.len();
        if n == 0 {
            return;
        }
        self.focused = Some(match self.focused {
            None => 0,
            Some(i) if i + 1 >= n => 0,
            Some(i) => i + 1,
        });
    }

    pub fn retreat(&mut self) {
        let n = self.len();
        if n == 0 {
            return;
        }
        self.focused = Some(match self.focused {
            None | Some(0) => n - 1,
            Some(i) => i - 1,
        });
    }

    pub fn jump_first(&mut self) {
        if !self.is_empty() {
            self.focused = Some(0);
        }
    }

    pub fn jump_last(&mut self) {
        if !self.is_empty() {
            self.focused = Some(self.len() - 1);
        }
    }

    /// The point to show in the detail panel, if one is focused.
    pub fn activate(&self) -> Option<&ChartPoint> {
        self.focused_point()
    }

    pub fn focus_gained(&mut self) {
        if !self.is_empty() && self.focused.is_none() {
            self.focused = Some(0);
        }
    }

    pub fn focus_lost(&mut self) {
        self.focused = None;
    }

    /// Pointer hover moves the cursor onto the hovered point.
    pub fn hover(&mut self, i: usize) {
        if i < self.len() {
            self.focused = Some(i);
        }
    }

    /// Apply a key. Returns the activated point for [`ChartKey::Activate`].
    pub fn apply(&mut self, key: ChartKey) -> Option<&ChartPoint> {
        match key {
            ChartKey::Advance => self.advance(),
            ChartKey::Retreat => self.retreat(),
            ChartKey::First => self.jump_first(),
            ChartKey::Last => self.jump_last(),
            ChartKey::Activate => return self.activate(),
        }
        None
    }

    /// Screen-reader style description of the focused point.
    pub fn announcement(&self) -> Option<String> {
        self.focused_point().map(|p| {
            format!(
                "Focused on {}, used by {} components. Press Enter to select.",
                p.name, p.count
            )
        })
    }
}
