use serde::{Deserialize, Serialize};
use std::fmt;

/// Which screen edge the panel is anchored to.
///
/// The wire encoding (config file, registration protocol) is the integer
/// index 0-3; anything outside that range is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Orientation {
    Top,
    Right,
    Bottom,
    Left,
}

impl Orientation {
    /// Stable wire index of this orientation.
    pub fn index(&self) -> u8 {
        match self {
            Orientation::Top => 0,
            Orientation::Right => 1,
            Orientation::Bottom => 2,
            Orientation::Left => 3,
        }
    }

    /// The stacking axis a container uses for this orientation.
    /// Edge panels stack along the edge: top/bottom panels lay slots out
    /// horizontally, left/right panels vertically.
    pub fn axis(&self) -> Axis {
        match self {
            Orientation::Top | Orientation::Bottom => Axis::Horizontal,
            Orientation::Left | Orientation::Right => Axis::Vertical,
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Bottom
    }
}

impl TryFrom<u8> for Orientation {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Orientation::Top),
            1 => Ok(Orientation::Right),
            2 => Ok(Orientation::Bottom),
            3 => Ok(Orientation::Left),
            other => Err(format!("orientation index out of range: {other}")),
        }
    }
}

impl From<Orientation> for u8 {
    fn from(value: Orientation) -> u8 {
        value.index()
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::Top => "top",
            Orientation::Right => "right",
            Orientation::Bottom => "bottom",
            Orientation::Left => "left",
        };
        write!(f, "{name}")
    }
}

/// Stacking direction of the panel's slot container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Key for one visual slot in the panel's container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotId(pub u64);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot-{}", self.0)
    }
}

/// Process-wide layout state for one panel instance.
///
/// Mutated only through the manager's property setters; every live applet
/// observes changes through the property fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelGeometry {
    pub orientation: Orientation,
    pub size: u32,
    pub offset: u32,
}

impl Default for PanelGeometry {
    fn default() -> Self {
        Self {
            orientation: Orientation::Bottom,
            size: 48,
            offset: 0,
        }
    }
}

/// How a registered applet wants its requested width/height interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizePolicy {
    /// May be resized as long as the width/height ratio is kept.
    Scalable,
    /// Displayed at exactly the requested size.
    Static,
    /// Width stays fixed, the panel may change the height.
    StaticWidth,
    /// Height stays fixed, the panel may change the width.
    StaticHeight,
    /// May be resized to any size.
    Dynamic,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_indices_are_stable() {
        assert_eq!(Orientation::Top.index(), 0);
        assert_eq!(Orientation::Right.index(), 1);
        assert_eq!(Orientation::Bottom.index(), 2);
        assert_eq!(Orientation::Left.index(), 3);
    }

    #[test]
    fn orientation_round_trips_through_index() {
        for i in 0u8..4 {
            let orientation = Orientation::try_from(i).unwrap();
            assert_eq!(orientation.index(), i);
        }
    }

    #[test]
    fn orientation_rejects_out_of_range() {
        assert!(Orientation::try_from(4).is_err());
        assert!(Orientation::try_from(255).is_err());
    }

    #[test]
    fn orientation_serializes_as_integer() {
        let json = serde_json::to_string(&Orientation::Left).unwrap();
        assert_eq!(json, "3");
        let parsed: Orientation = serde_json::from_str("0").unwrap();
        assert_eq!(parsed, Orientation::Top);
    }

    #[test]
    fn orientation_deserialize_rejects_out_of_range() {
        let result: Result<Orientation, _> = serde_json::from_str("7");
        assert!(result.is_err());
    }

    #[test]
    fn horizontal_axis_for_top_and_bottom() {
        assert_eq!(Orientation::Top.axis(), Axis::Horizontal);
        assert_eq!(Orientation::Bottom.axis(), Axis::Horizontal);
    }

    #[test]
    fn vertical_axis_for_left_and_right() {
        assert_eq!(Orientation::Left.axis(), Axis::Vertical);
        assert_eq!(Orientation::Right.axis(), Axis::Vertical);
    }

    #[test]
    fn orientation_display() {
        assert_eq!(Orientation::Bottom.to_string(), "bottom");
        assert_eq!(Orientation::Left.to_string(), "left");
    }

    #[test]
    fn slot_id_display() {
        assert_eq!(SlotId(7).to_string(), "slot-7");
    }

    #[test]
    fn slot_id_hash_and_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(SlotId(1));
        set.insert(SlotId(2));
        set.insert(SlotId(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn geometry_defaults() {
        let geometry = PanelGeometry::default();
        assert_eq!(geometry.orientation, Orientation::Bottom);
        assert_eq!(geometry.size, 48);
        assert_eq!(geometry.offset, 0);
    }

    #[test]
    fn size_policy_wire_names() {
        let cases = [
            (SizePolicy::Scalable, "\"scalable\""),
            (SizePolicy::Static, "\"static\""),
            (SizePolicy::StaticWidth, "\"static-width\""),
            (SizePolicy::StaticHeight, "\"static-height\""),
            (SizePolicy::Dynamic, "\"dynamic\""),
        ];
        for (policy, wire) in cases {
            assert_eq!(serde_json::to_string(&policy).unwrap(), wire);
            let parsed: SizePolicy = serde_json::from_str(wire).unwrap();
            assert_eq!(parsed, policy);
        }
    }
}
