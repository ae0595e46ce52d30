//! Per-cell DISU connections for a layered column grid.
//!
//! Each cell is classified into a [`LayerTier`], which decides which of its four
//! possible neighbours (up, left, right, down) it connects to. The resulting
//! [`ConnectionFlags`] are turned into a [`ConnectionRecord`] whose connections
//! always appear in the order up, left, right, down. Cells in the deepest layer
//! lose their final (down) connection.

use crate::config::{ConnectivityConfig, IhcConvention};
use crate::errors::{GridError, GridResult};
use crate::float_types::{NEGATIVE_X_DEG, POSITIVE_X_DEG, Real};
use crate::grid::GridDescription;

pub mod serial;
pub mod table;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use serial::SerialConnectivityOps;
pub use table::{ConnectionTable, TableRow};
pub use traits::ConnectivityOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelConnectivityOps;

/// Direction of a connection, listed in record order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Right,
    Down,
}

impl Direction {
    pub const ORDER: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Right,
        Direction::Down,
    ];

    #[inline]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }
}

/// Whether a connection is between stacked cells or side-by-side cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConnectionKind {
    Vertical,
    /// `width` is the shared face width (`delc` for the column grid)
    Horizontal { width: Real },
}

impl ConnectionKind {
    /// Numeric `ihc` value for this kind under `convention`.
    #[inline]
    pub const fn ihc(self, convention: IhcConvention) -> Real {
        match (self, convention) {
            (ConnectionKind::Vertical, _) => 0.0,
            (ConnectionKind::Horizontal { width }, IhcConvention::Legacy) => width,
            (ConnectionKind::Horizontal { .. }, IhcConvention::Flag) => 1.0,
        }
    }
}

/// One outgoing connection of a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub neighbor: usize,
    pub direction: Direction,
    pub kind: ConnectionKind,
    /// distance from the cell center to the shared face
    pub cl12: Real,
    /// face area for vertical connections, face width for horizontal ones
    pub hwva: Real,
    pub angldeg: Real,
}

/// Layer classification that decides which connections a cell has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerTier {
    /// layer 0: only a connection to the cell below
    Top,
    /// vertical connections above and below
    Overburden,
    /// vertical connections plus horizontal ones to neighbouring columns
    Reservoir,
}

impl LayerTier {
    #[inline]
    pub const fn of(lay: usize, config: &ConnectivityConfig) -> Self {
        if lay == 0 {
            LayerTier::Top
        } else if lay < config.reservoir_start_layer {
            LayerTier::Overburden
        } else {
            LayerTier::Reservoir
        }
    }
}

/// Which of the four possible connections exist for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConnectionFlags {
    pub top: bool,
    pub left: bool,
    pub right: bool,
    pub bottom: bool,
}

impl ConnectionFlags {
    #[inline]
    pub const fn contains(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.top,
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Down => self.bottom,
        }
    }

    /// Number of neighbours.
    #[inline]
    pub const fn count(&self) -> usize {
        self.top as usize + self.left as usize + self.right as usize + self.bottom as usize
    }

    /// Connection count including the cell itself.
    #[inline]
    pub const fn iac(&self) -> usize {
        1 + self.count()
    }
}

/// One entry of a DISU row: the cell itself, then its connections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConnectionEntry<'a> {
    SelfMarker { node: usize },
    Connection(&'a Connection),
}

/// All connections of one cell, without any placeholder self entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionRecord {
    pub node: usize,
    pub lay: usize,
    pub connections: Vec<Connection>,
}

impl ConnectionRecord {
    /// Number of connections plus one for the cell itself.
    #[inline]
    pub fn iac(&self) -> usize {
        1 + self.connections.len()
    }

    /// The DISU row: self marker followed by the connections, `iac` entries long.
    pub fn entries(&self) -> impl Iterator<Item = ConnectionEntry<'_>> + '_ {
        std::iter::once(ConnectionEntry::SelfMarker { node: self.node })
            .chain(self.connections.iter().map(ConnectionEntry::Connection))
    }

    /// `ja` row for this cell, the cell itself first.
    pub fn ja(&self) -> Vec<usize> {
        self.entries()
            .map(|entry| match entry {
                ConnectionEntry::SelfMarker { node } => node,
                ConnectionEntry::Connection(c) => c.neighbor,
            })
            .collect()
    }

    pub fn neighbors(&self) -> Vec<usize> {
        self.connections.iter().map(|c| c.neighbor).collect()
    }

    /// `ihc` row for this cell under `convention`, aligned with [`Self::ja`].
    pub fn ihc(&self, convention: IhcConvention) -> Vec<Real> {
        self.entries()
            .map(|entry| match entry {
                ConnectionEntry::SelfMarker { .. } => convention.self_value(self.lay),
                ConnectionEntry::Connection(c) => c.kind.ihc(convention),
            })
            .collect()
    }

    pub fn cl12(&self) -> Vec<Real> {
        self.connections.iter().map(|c| c.cl12).collect()
    }

    pub fn hwva(&self) -> Vec<Real> {
        self.connections.iter().map(|c| c.hwva).collect()
    }

    pub fn angldeg(&self) -> Vec<Real> {
        self.connections.iter().map(|c| c.angldeg).collect()
    }

    pub fn connection(&self, direction: Direction) -> Option<&Connection> {
        self.connections.iter().find(|c| c.direction == direction)
    }

    /// Drop the final connection; returns it if there was one.
    fn trim_last(&mut self) -> Option<Connection> {
        self.connections.pop()
    }
}

/// Reject configurations whose reservoir layers would reference missing columns.
pub(crate) fn check_tier_boundary(
    grid: &GridDescription,
    config: &ConnectivityConfig,
) -> GridResult<()> {
    config.validate()?;
    if config.has_reservoir(grid.nlay()) && grid.ncol() < 2 {
        return Err(GridError::TierBoundary {
            reservoir_start_layer: config.reservoir_start_layer,
            nlay: grid.nlay(),
            ncol: grid.ncol(),
        });
    }
    Ok(())
}

/// Decide which connections the cell at `(lay, col)` has.
///
/// The down connection is reported for every tier, including the deepest layer;
/// [`cell_connections`] removes it there after assembly.
pub fn classify(
    grid: &GridDescription,
    config: &ConnectivityConfig,
    lay: usize,
    col: usize,
) -> GridResult<ConnectionFlags> {
    grid.check_cell(lay, col)?;
    check_tier_boundary(grid, config)?;

    let flags = match LayerTier::of(lay, config) {
        LayerTier::Top => ConnectionFlags {
            bottom: true,
            ..Default::default()
        },
        LayerTier::Overburden => ConnectionFlags {
            top: true,
            bottom: true,
            ..Default::default()
        },
        LayerTier::Reservoir => {
            let first = col == 0;
            let last = col == grid.ncol() - 1;
            ConnectionFlags {
                top: true,
                left: !first,
                // the first column wins when it is also the last
                right: first || !last,
                bottom: true,
            }
        },
    };
    Ok(flags)
}

/// Build the connections of cell `n` in layer `lay` from `flags`.
///
/// Vertical connections share the half thickness of the cell's own layer.
pub fn assemble(
    grid: &GridDescription,
    n: usize,
    lay: usize,
    flags: ConnectionFlags,
) -> GridResult<ConnectionRecord> {
    let ncol = grid.ncol();
    let half_thickness = grid.half_thickness(lay)?;
    let vertical_area = grid.cell_area();
    let horizontal = ConnectionKind::Horizontal { width: grid.delc() };

    let mut connections = Vec::with_capacity(flags.count());
    for direction in Direction::ORDER {
        if !flags.contains(direction) {
            continue;
        }
        let missing = || GridError::MissingNeighbor {
            node: n,
            direction: direction.name(),
        };
        let connection = match direction {
            Direction::Up => Connection {
                neighbor: n.checked_sub(ncol).ok_or_else(missing)?,
                direction,
                kind: ConnectionKind::Vertical,
                cl12: half_thickness,
                hwva: vertical_area,
                angldeg: POSITIVE_X_DEG,
            },
            Direction::Left => Connection {
                neighbor: n.checked_sub(1).ok_or_else(missing)?,
                direction,
                kind: horizontal,
                cl12: grid.delr() / 2.0,
                hwva: grid.delc(),
                angldeg: NEGATIVE_X_DEG,
            },
            Direction::Right => Connection {
                neighbor: n + 1,
                direction,
                kind: horizontal,
                cl12: grid.delr() / 2.0,
                hwva: grid.delc(),
                angldeg: POSITIVE_X_DEG,
            },
            // may point past the grid for the deepest layer until trimmed
            Direction::Down => Connection {
                neighbor: n + ncol,
                direction,
                kind: ConnectionKind::Vertical,
                cl12: half_thickness,
                hwva: vertical_area,
                angldeg: POSITIVE_X_DEG,
            },
        };
        connections.push(connection);
    }

    Ok(ConnectionRecord {
        node: n,
        lay,
        connections,
    })
}

/// Classify and assemble the connections of cell `n`, trimming the final
/// connection of every cell in the deepest layer.
pub fn cell_connections(
    grid: &GridDescription,
    config: &ConnectivityConfig,
    n: usize,
) -> GridResult<ConnectionRecord> {
    let (lay, col) = grid.layer_col(n)?;
    let flags = classify(grid, config, lay, col)?;
    let mut record = assemble(grid, n, lay, flags)?;
    if lay == grid.nlay() - 1 {
        record.trim_last();
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_grid(nlay: usize, ncol: usize) -> GridDescription {
        let botm = (1..=nlay).map(|k| -(k as Real)).collect();
        GridDescription::new(nlay, ncol, 1.0, 1.0, 0.0, botm).unwrap()
    }

    #[test]
    fn tiers_follow_literal_thresholds() {
        let config = ConnectivityConfig::default();
        assert_eq!(LayerTier::of(0, &config), LayerTier::Top);
        assert_eq!(LayerTier::of(1, &config), LayerTier::Overburden);
        assert_eq!(LayerTier::of(99, &config), LayerTier::Overburden);
        assert_eq!(LayerTier::of(100, &config), LayerTier::Reservoir);
        assert_eq!(LayerTier::of(250, &config), LayerTier::Reservoir);
    }

    #[test]
    fn reservoir_flags_depend_on_column() {
        let grid = column_grid(102, 3);
        let config = ConnectivityConfig::default();

        let first = classify(&grid, &config, 100, 0).unwrap();
        assert_eq!((first.top, first.left, first.right, first.bottom), (true, false, true, true));
        assert_eq!(first.iac(), 4);

        let last = classify(&grid, &config, 100, 2).unwrap();
        assert_eq!((last.top, last.left, last.right, last.bottom), (true, true, false, true));
        assert_eq!(last.iac(), 4);

        let interior = classify(&grid, &config, 101, 1).unwrap();
        assert_eq!(interior.count(), 4);
        assert_eq!(interior.iac(), 5);
    }

    #[test]
    fn overburden_flags_ignore_column() {
        let grid = column_grid(5, 3);
        let config = ConnectivityConfig::default();
        for col in 0..3 {
            let flags = classify(&grid, &config, 2, col).unwrap();
            assert_eq!(flags.iac(), 3);
            assert!(!flags.left && !flags.right);
        }
    }

    #[test]
    fn single_column_reservoir_is_rejected() {
        let config = ConnectivityConfig::new().with_reservoir_start_layer(2);
        let grid = column_grid(4, 1);
        assert!(matches!(
            classify(&grid, &config, 0, 0),
            Err(GridError::TierBoundary { ncol: 1, .. })
        ));

        // without reservoir layers a single column is fine
        let shallow = column_grid(2, 1);
        assert!(classify(&shallow, &config, 1, 0).is_ok());
    }

    #[test]
    fn assemble_refuses_impossible_up_connection() {
        let grid = column_grid(2, 2);
        let flags = ConnectionFlags {
            top: true,
            ..Default::default()
        };
        assert!(matches!(
            assemble(&grid, 0, 0, flags),
            Err(GridError::MissingNeighbor { node: 0, direction: "up" })
        ));
    }

    #[test]
    fn interior_reservoir_cell_orders_connections() {
        let config = ConnectivityConfig::new().with_reservoir_start_layer(1);
        let grid = GridDescription::new(3, 3, 2.0, 0.5, 10.0, vec![8.0, 6.0, 4.0]).unwrap();
        let record = cell_connections(&grid, &config, grid.node(1, 1).unwrap()).unwrap();

        assert_eq!(record.iac(), 5);
        assert_eq!(record.ja(), vec![4, 1, 3, 5, 7]);
        let directions: Vec<_> = record.connections.iter().map(|c| c.direction).collect();
        assert_eq!(directions, Direction::ORDER.to_vec());
        assert_eq!(record.angldeg(), vec![0.0, 180.0, 0.0, 0.0]);
        assert_eq!(record.cl12(), vec![1.0, 1.0, 1.0, 1.0]);
        assert_eq!(record.hwva(), vec![1.0, 0.5, 0.5, 1.0]);
        assert_eq!(record.ihc(IhcConvention::Legacy), vec![1.0, 0.0, 0.5, 0.5, 0.0]);
        assert_eq!(record.ihc(IhcConvention::Flag), vec![0.0, 0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn deepest_layer_loses_down_connection() {
        let grid = column_grid(3, 2);
        let config = ConnectivityConfig::default();
        for col in 0..2 {
            let record = cell_connections(&grid, &config, grid.node(2, col).unwrap()).unwrap();
            assert_eq!(record.iac(), 2);
            assert!(record.connection(Direction::Down).is_none());
            assert!(record.connection(Direction::Up).is_some());
        }
    }

    #[test]
    fn single_layer_grid_has_no_connections() {
        let grid = column_grid(1, 4);
        let config = ConnectivityConfig::default();
        let record = cell_connections(&grid, &config, 2).unwrap();
        assert_eq!(record.iac(), 1);
        assert_eq!(record.ja(), vec![2]);
        assert_eq!(record.entries().count(), 1);
    }
}
