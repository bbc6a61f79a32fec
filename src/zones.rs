//! Ground rectangles that switch the camera angle while the vehicle is
//! inside them.

use glam::Vec2;

use crate::options::ZoneOptions;

/// Axis-aligned rectangle with the preset it selects.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleZone {
    /// Centre on the ground plane.
    pub center: Vec2,
    /// Half width and half depth.
    pub half_extents: Vec2,
    /// Angle preset selected on entry.
    pub angle: String,
}

impl AngleZone {
    /// Whether `point` lies inside (edges included).
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        let d = (point - self.center).abs();
        d.x <= self.half_extents.x && d.y <= self.half_extents.y
    }
}

impl From<&ZoneOptions> for AngleZone {
    fn from(options: &ZoneOptions) -> Self {
        Self {
            center: Vec2::from_array(options.center),
            half_extents: Vec2::from_array(options.half_extents).abs(),
            angle: options.angle.clone(),
        }
    }
}

/// A change in zone membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneEvent {
    /// The vehicle entered the zone at this index.
    Entered(usize),
    /// The vehicle left the zone at this index.
    Left(usize),
}

/// Tracks which zones contain the vehicle and reports edges only.
#[derive(Debug, Clone, Default)]
pub struct ZoneTracker {
    zones: Vec<AngleZone>,
    inside: Vec<bool>,
}

impl ZoneTracker {
    /// Build from configured zones.
    #[must_use]
    pub fn new(zones: &[ZoneOptions]) -> Self {
        let zones: Vec<AngleZone> = zones.iter().map(AngleZone::from).collect();
        let inside = vec![false; zones.len()];
        Self { zones, inside }
    }

    /// Feed the vehicle's ground position, returning enter/leave edges.
    ///
    /// Leave events come before enter events so that moving between two
    /// touching zones ends on the new zone's angle.
    pub fn update(&mut self, position: Vec2) -> Vec<ZoneEvent> {
        let mut left = Vec::new();
        let mut entered = Vec::new();
        for (index, (zone, inside)) in
            self.zones.iter().zip(self.inside.iter_mut()).enumerate()
        {
            let now = zone.contains(position);
            match (*inside, now) {
                (false, true) => entered.push(ZoneEvent::Entered(index)),
                (true, false) => left.push(ZoneEvent::Left(index)),
                _ => {}
            }
            *inside = now;
        }
        left.extend(entered);
        left
    }

    /// Zone by index.
    #[must_use]
    pub fn zone(&self, index: usize) -> Option<&AngleZone> {
        self.zones.get(index)
    }

    /// Whether no zone is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> ZoneTracker {
        ZoneTracker::new(&[
            ZoneOptions {
                center: [0.0, 0.0],
                half_extents: [5.0, 5.0],
                angle: "projects".to_owned(),
            },
            ZoneOptions {
                center: [10.0, 0.0],
                half_extents: [5.0, 5.0],
                angle: "garage".to_owned(),
            },
        ])
    }

    #[test]
    fn enter_and_leave_fire_once() {
        let mut zones = tracker();
        assert!(zones.update(Vec2::new(-20.0, 0.0)).is_empty());
        let entered = zones.update(Vec2::new(-2.0, 0.0));
        assert_eq!(entered, vec![ZoneEvent::Entered(0)]);
        assert!(zones.update(Vec2::new(-1.0, 1.0)).is_empty());
        let left = zones.update(Vec2::new(-1.0, 30.0));
        assert_eq!(left, vec![ZoneEvent::Left(0)]);
        assert!(zones.update(Vec2::new(-1.0, 31.0)).is_empty());
    }

    #[test]
    fn crossing_between_zones_leaves_first() {
        let mut zones = tracker();
        let _ = zones.update(Vec2::new(2.0, 0.0));
        assert_eq!(
            zones.update(Vec2::new(12.0, 0.0)),
            vec![ZoneEvent::Left(0), ZoneEvent::Entered(1)]
        );
        assert_eq!(zones.zone(1).unwrap().angle, "garage");
    }

    #[test]
    fn edges_count_as_inside() {
        let zone = AngleZone::from(&ZoneOptions::default());
        assert!(zone.contains(Vec2::new(10.0, -10.0)));
        assert!(!zone.contains(Vec2::new(10.1, 0.0)));
    }
}
