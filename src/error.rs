use core::fmt;

/// Errors raised while baking or querying a [SpatialGrid](crate::spatial_grid::SpatialGrid).
///
/// All of these are structural: they come from a bad configuration or from handing the grid
/// a node it does not own, never from transient conditions.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// The region size or cell radius cannot produce a usable grid.
    InvalidConfig {
        /// What went wrong.
        reason: String,
    },
    /// A node whose grid coordinates lie outside this grid's dimensions.
    ForeignNode {
        grid_x: usize,
        grid_y: usize,
        count_x: usize,
        count_y: usize,
    },
}

impl GridError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> GridError {
        GridError::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::InvalidConfig { reason } => write!(f, "invalid grid configuration: {reason}"),
            GridError::ForeignNode {
                grid_x,
                grid_y,
                count_x,
                count_y,
            } => write!(
                f,
                "node ({grid_x}, {grid_y}) does not belong to a {count_x}x{count_y} grid"
            ),
        }
    }
}

impl std::error::Error for GridError {}
