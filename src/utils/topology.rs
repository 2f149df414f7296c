/// Describes what lies beyond the edges of the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Topology {
    /// Bounds of the field are stitched together.
    #[default]
    Torus,
    /// Cells outside the field are permanently dead.
    SolidWalls,
}
