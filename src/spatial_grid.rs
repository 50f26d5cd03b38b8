use crate::config::{GridConfig, NeighborBoundary};
use crate::error::GridError;
use crate::geometry::{RegionSize, Vec3};
use crate::node::Node;
use crate::obstacle::ObstacleQuery;
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use grid_util::point::Point;
use itertools::iproduct;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// A rectangular world region discretized into square cells, baked once against an
/// obstacle query.
///
/// Cells are stored column-major: `cells[x * count_y + y]` holds the node at `(x, y)`.
/// Besides the nodes, the grid keeps a [UnionFind] over walkable cells so that searches can
/// cheaply reject goals in another connected component.
#[derive(Clone, Debug)]
pub struct SpatialGrid {
    config: GridConfig,
    count_x: usize,
    count_y: usize,
    cells: Vec<Node>,
    components: UnionFind<usize>,
}

impl SpatialGrid {
    /// Bakes a grid centred on the world origin using the default neighbour boundary.
    pub fn new<Q>(region_size: RegionSize, cell_radius: f64, obstacles: &Q) -> Result<Self, GridError>
    where
        Q: ObstacleQuery + ?Sized,
    {
        SpatialGrid::bake(GridConfig::new(region_size, cell_radius), obstacles)
    }

    /// Samples `obstacles` once at the centre of every cell. A cell is walkable unless the
    /// sphere of the cell radius around its centre is blocked.
    pub fn bake<Q>(config: GridConfig, obstacles: &Q) -> Result<Self, GridError>
    where
        Q: ObstacleQuery + ?Sized,
    {
        let (count_x, count_y) = config.grid_counts()?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(count_x * count_y).map_err(|e| {
            GridError::invalid_config(format!("cannot allocate {count_x}x{count_y} cells: {e}"))
        })?;
        for i in 0..count_x {
            for j in 0..count_y {
                let world_position = config.cell_center(i, j);
                let walkable = !obstacles.is_blocked(world_position, config.cell_radius);
                cells.push(Node::new(walkable, world_position, i, j));
            }
        }
        let blocked = cells.iter().filter(|n| !n.walkable()).count();
        info!(
            "Baked {}x{} grid with cell radius {} ({} of {} cells blocked)",
            count_x,
            count_y,
            config.cell_radius,
            blocked,
            cells.len()
        );
        let mut grid = SpatialGrid {
            config,
            count_x,
            count_y,
            cells,
            components: UnionFind::new(0),
        };
        grid.generate_components();
        Ok(grid)
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn region_size(&self) -> RegionSize {
        self.config.region_size
    }

    pub fn cell_radius(&self) -> f64 {
        self.config.cell_radius
    }

    pub fn cell_diameter(&self) -> f64 {
        self.config.cell_diameter()
    }

    pub fn boundary(&self) -> NeighborBoundary {
        self.config.boundary
    }

    pub fn count_x(&self) -> usize {
        self.count_x
    }

    pub fn count_y(&self) -> usize {
        self.count_y
    }

    #[inline]
    fn get_ix(&self, x: usize, y: usize) -> usize {
        x * self.count_y + y
    }

    #[inline]
    fn get_ix_point(&self, point: &Point) -> usize {
        self.get_ix(point.x as usize, point.y as usize)
    }

    pub fn point_in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.count_x
            && (point.y as usize) < self.count_y
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Node> {
        if x < self.count_x && y < self.count_y {
            self.cells.get(self.get_ix(x, y))
        } else {
            None
        }
    }

    pub fn node(&self, point: Point) -> Option<&Node> {
        if self.point_in_bounds(point) {
            self.cells.get(self.get_ix_point(&point))
        } else {
            None
        }
    }

    /// Mutable access for search bookkeeping. Geometry and walkability stay read-only.
    pub fn node_mut(&mut self, point: Point) -> Option<&mut Node> {
        if self.point_in_bounds(point) {
            let ix = self.get_ix_point(&point);
            self.cells.get_mut(ix)
        } else {
            None
        }
    }

    /// All nodes, column by column.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.cells.iter()
    }

    /// Clears the scratch fields of every node before a new search.
    pub fn reset_search_state(&mut self) {
        self.cells.iter_mut().for_each(Node::reset_search);
    }

    /// Grid coordinate of the cell nearest to `position`. Positions outside the region clamp
    /// to the nearest edge cell, so this never fails.
    ///
    /// The lookup is relative to the world origin rather than the grid's own origin.
    pub fn resolve_point(&self, position: Vec3) -> Point {
        let RegionSize { width, depth } = self.config.region_size;
        let percent_x = clamp01((position.x + width / 2.0) / width);
        let percent_y = clamp01((position.z + depth / 2.0) / depth);
        let x = ((self.count_x - 1) as f64 * percent_x).round_ties_even() as i32;
        let y = ((self.count_y - 1) as f64 * percent_y).round_ties_even() as i32;
        Point::new(x, y)
    }

    /// The node nearest to `position`, see [resolve_point](Self::resolve_point).
    pub fn resolve(&self, position: Vec3) -> &Node {
        let point = self.resolve_point(position);
        &self.cells[self.get_ix_point(&point)]
    }

    /// Whether a node at `point` can be returned as somebody's neighbour under this grid's
    /// [NeighborBoundary].
    pub fn admits_neighbor(&self, point: Point) -> bool {
        self.config
            .boundary
            .admits(point.x, point.y, self.count_x, self.count_y)
    }

    /// Coordinates of the up to 8 cells around `point`, ordered by x offset then y offset.
    /// Blocked cells are included.
    pub fn neighbor_points(&self, point: Point) -> Result<SmallVec<[Point; N_SMALLVEC_SIZE]>, GridError> {
        if !self.point_in_bounds(point) {
            return Err(GridError::ForeignNode {
                grid_x: point.x.max(0) as usize,
                grid_y: point.y.max(0) as usize,
                count_x: self.count_x,
                count_y: self.count_y,
            });
        }
        Ok(iproduct!(-1..=1, -1..=1)
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(|(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|p| self.admits_neighbor(*p))
            .collect())
    }

    /// The up to 8 nodes around `node`. Fails if `node` lies outside this grid.
    pub fn neighbors(&self, node: &Node) -> Result<SmallVec<[&Node; N_SMALLVEC_SIZE]>, GridError> {
        if node.grid_x() >= self.count_x || node.grid_y() >= self.count_y {
            return Err(GridError::ForeignNode {
                grid_x: node.grid_x(),
                grid_y: node.grid_y(),
                count_x: self.count_x,
                count_y: self.count_y,
            });
        }
        Ok(self
            .neighbor_points(node.point())?
            .into_iter()
            .map(|p| &self.cells[self.get_ix_point(&p)])
            .collect())
    }

    fn walkable_point(&self, point: Point) -> bool {
        self.node(point).is_some_and(Node::walkable)
    }

    /// Links walkable cells into connected components. Only cells that can be entered from
    /// a neighbour take part in the links, so that the components stay symmetric even under
    /// [NeighborBoundary::ExcludeMinEdge].
    fn generate_components(&mut self) {
        let mut components = UnionFind::new(self.cells.len());
        for x in 0..self.count_x as i32 {
            for y in 0..self.count_y as i32 {
                let point = Point::new(x, y);
                if !self.walkable_point(point) || !self.admits_neighbor(point) {
                    continue;
                }
                let parent_ix = self.get_ix_point(&point);
                // Forward half of the neighbourhood; the other half links back to us.
                [
                    Point::new(x, y + 1),
                    Point::new(x + 1, y - 1),
                    Point::new(x + 1, y),
                    Point::new(x + 1, y + 1),
                ]
                .into_iter()
                .filter(|p| self.walkable_point(*p) && self.admits_neighbor(*p))
                .for_each(|p| {
                    components.union(parent_ix, self.get_ix_point(&p));
                });
            }
        }
        self.components = components;
        info!("Generated connected components for {} cells", self.cells.len());
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> Option<usize> {
        if self.point_in_bounds(*point) {
            Some(self.components.find(self.get_ix_point(point)))
        } else {
            None
        }
    }

    /// Checks whether a search from `start` can possibly reach `goal`: both must be walkable,
    /// `goal` must be enterable (unless it is the start) and they must share a component.
    /// A start that cannot itself be entered reaches whatever its walkable neighbours reach.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if !self.walkable_point(*start) || !self.walkable_point(*goal) {
            return false;
        }
        if start == goal {
            return true;
        }
        if !self.admits_neighbor(*goal) {
            return false;
        }
        let goal_ix = self.get_ix_point(goal);
        if self.admits_neighbor(*start) {
            return self.components.equiv(self.get_ix_point(start), goal_ix);
        }
        match self.neighbor_points(*start) {
            Ok(neighbors) => neighbors.iter().any(|p| {
                self.walkable_point(*p) && self.components.equiv(self.get_ix_point(p), goal_ix)
            }),
            Err(_) => false,
        }
    }

    /// Checks if start and goal cannot be connected by any path.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }

    /// Text view of the grid with `path` drawn over it: `S` and `G` mark its ends, `*` the
    /// cells in between.
    pub fn render_with_path(&self, path: &[Point]) -> String {
        let mut out = String::with_capacity((self.count_x + 1) * self.count_y);
        for y in (0..self.count_y as i32).rev() {
            for x in 0..self.count_x as i32 {
                let p = Point::new(x, y);
                let c = if path.first() == Some(&p) {
                    'S'
                } else if path.last() == Some(&p) {
                    'G'
                } else if path.contains(&p) {
                    '*'
                } else if self.walkable_point(p) {
                    '.'
                } else {
                    '#'
                };
                out.push(c);
            }
            out.push('\n');
        }
        out
    }
}

#[inline]
fn clamp01(value: f64) -> f64 {
    // f64::clamp propagates NaN; treat it as the low edge.
    if value >= 1.0 {
        1.0
    } else if value > 0.0 {
        value
    } else {
        0.0
    }
}

impl fmt::Display for SpatialGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render_with_path(&[]))
    }
}
