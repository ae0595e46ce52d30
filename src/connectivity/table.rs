//! Flattened DISU connection arrays for a whole grid.

use super::{ConnectionRecord, ConnectivityOps};
use crate::config::{ConnectivityConfig, IhcConvention};
use crate::errors::{GridError, GridResult};
use crate::float_types::{Real, SELF_ENTRY_DEG};
use crate::grid::GridDescription;
use std::ops::Range;

#[cfg(not(feature = "parallel"))]
use super::SerialConnectivityOps;

#[cfg(feature = "parallel")]
use super::ParallelConnectivityOps;

/// The `iac`/`ja`/`ihc`/`cl12`/`hwva`/`angldeg` arrays of an unstructured grid.
///
/// Row `n` occupies `offsets()[n]..offsets()[n + 1]` of every per-connection
/// array and starts with the cell itself. Self entries carry `cl12 = hwva = 0`,
/// `angldeg = 360` and the convention's self `ihc`.
///
/// The row pointer is computed once when the table is flattened. Editing `iac`
/// afterwards leaves it stale, which [`ConnectionTable::validate`] reports.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionTable {
    pub convention: IhcConvention,
    pub iac: Vec<usize>,
    pub ja: Vec<usize>,
    pub ihc: Vec<Real>,
    pub cl12: Vec<Real>,
    pub hwva: Vec<Real>,
    pub angldeg: Vec<Real>,
    offsets: Vec<usize>,
}

/// Borrowed view of one row of a [`ConnectionTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow<'a> {
    pub node: usize,
    pub ja: &'a [usize],
    pub ihc: &'a [Real],
    pub cl12: &'a [Real],
    pub hwva: &'a [Real],
    pub angldeg: &'a [Real],
}

impl TableRow<'_> {
    /// Neighbours of the row's cell, without the cell itself.
    pub fn neighbors(&self) -> &[usize] {
        self.ja.get(1..).unwrap_or_default()
    }
}

impl ConnectionTable {
    /// Generate the table for `grid`, in parallel when the `parallel` feature is on.
    pub fn build(grid: &GridDescription, config: &ConnectivityConfig) -> GridResult<Self> {
        #[cfg(not(feature = "parallel"))]
        let ops = SerialConnectivityOps::new();
        #[cfg(feature = "parallel")]
        let ops = ParallelConnectivityOps::new();

        ops.connection_table(grid, config)
    }

    /// Flatten per-cell records, which must be ordered by node.
    pub fn from_records(records: &[ConnectionRecord], convention: IhcConvention) -> Self {
        let nja: usize = records.iter().map(ConnectionRecord::iac).sum();
        let mut table = ConnectionTable {
            convention,
            iac: Vec::with_capacity(records.len()),
            ja: Vec::with_capacity(nja),
            ihc: Vec::with_capacity(nja),
            cl12: Vec::with_capacity(nja),
            hwva: Vec::with_capacity(nja),
            angldeg: Vec::with_capacity(nja),
            offsets: Vec::with_capacity(records.len() + 1),
        };
        table.offsets.push(0);

        for record in records {
            table.iac.push(record.iac());
            table.ja.push(record.node);
            table.ihc.push(convention.self_value(record.lay));
            table.cl12.push(0.0);
            table.hwva.push(0.0);
            table.angldeg.push(SELF_ENTRY_DEG);

            for c in &record.connections {
                table.ja.push(c.neighbor);
                table.ihc.push(c.kind.ihc(convention));
                table.cl12.push(c.cl12);
                table.hwva.push(c.hwva);
                table.angldeg.push(c.angldeg);
            }
            table.offsets.push(table.ja.len());
        }
        table
    }

    #[inline]
    pub fn nodes(&self) -> usize {
        self.iac.len()
    }

    /// Total number of row entries, self entries included.
    #[inline]
    pub fn nja(&self) -> usize {
        self.ja.len()
    }

    /// Row pointer: `nodes() + 1` offsets into the per-connection arrays.
    #[inline]
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    fn row_range(&self, n: usize) -> Option<Range<usize>> {
        let start = *self.offsets.get(n)?;
        let end = *self.offsets.get(n + 1)?;
        (start <= end).then_some(start..end)
    }

    pub fn row(&self, n: usize) -> Option<TableRow<'_>> {
        let range = self.row_range(n)?;
        Some(TableRow {
            node: n,
            ja: self.ja.get(range.clone())?,
            ihc: self.ihc.get(range.clone())?,
            cl12: self.cl12.get(range.clone())?,
            hwva: self.hwva.get(range.clone())?,
            angldeg: self.angldeg.get(range)?,
        })
    }

    /// Rows in node order, stopping at the first row the arrays cannot hold.
    pub fn rows(&self) -> impl Iterator<Item = TableRow<'_>> + '_ {
        (0..self.nodes()).map_while(move |n| self.row(n))
    }

    /// Every connection `n -> m` has a matching `m -> n` of the same `ihc`.
    ///
    /// A table whose arrays disagree in shape is never symmetric.
    pub fn is_symmetric(&self) -> bool {
        self.check_shape().is_ok() && self.asymmetric_pair().is_none()
    }

    fn asymmetric_pair(&self) -> Option<(usize, usize)> {
        let rows: Vec<TableRow<'_>> = self.rows().collect();
        for row in &rows {
            for (k, &m) in row.neighbors().iter().enumerate() {
                let Some(other) = rows.get(m) else {
                    return Some((row.node, m));
                };
                let back = other.neighbors().iter().position(|&x| x == row.node);
                match back {
                    Some(j) if other.ihc.get(j + 1) == row.ihc.get(k + 1) => {},
                    _ => return Some((row.node, m)),
                }
            }
        }
        None
    }

    fn check_shape(&self) -> GridResult<()> {
        let nja = self.nja();
        for (name, len) in [
            ("ihc", self.ihc.len()),
            ("cl12", self.cl12.len()),
            ("hwva", self.hwva.len()),
            ("angldeg", self.angldeg.len()),
        ] {
            if len != nja {
                return Err(GridError::InconsistentTable(format!(
                    "{name} has {len} entries, ja has {nja}"
                )));
            }
        }
        let total: usize = self.iac.iter().sum();
        if total != nja {
            return Err(GridError::InconsistentTable(format!(
                "iac sums to {total}, ja has {nja} entries"
            )));
        }
        let stale = self.offsets.len() != self.iac.len() + 1
            || self
                .offsets
                .windows(2)
                .zip(&self.iac)
                .any(|(w, &iac)| w[1].checked_sub(w[0]) != Some(iac));
        if stale {
            return Err(GridError::InconsistentTable(
                "row pointer does not match iac".to_string(),
            ));
        }
        Ok(())
    }

    /// Check array lengths, row heads, neighbour ranges and symmetry.
    pub fn validate(&self) -> GridResult<()> {
        self.check_shape()?;

        let nodes = self.nodes();
        for row in self.rows() {
            if row.ja.first() != Some(&row.node) {
                return Err(GridError::InconsistentTable(format!(
                    "row {} does not start with its own node",
                    row.node
                )));
            }
            if let Some(&m) = row.neighbors().iter().find(|&&m| m >= nodes) {
                return Err(GridError::InconsistentTable(format!(
                    "row {} references node {m} outside {nodes} nodes",
                    row.node
                )));
            }
        }

        if let Some((n, m)) = self.asymmetric_pair() {
            return Err(GridError::InconsistentTable(format!(
                "connection {n} -> {m} has no matching {m} -> {n}"
            )));
        }
        Ok(())
    }
}
