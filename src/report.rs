//! Human-readable rendering of a single destination's shortest path.

use std::fmt;

use crate::algorithm::ShortestPathResult;
use crate::graph::Weight;
use crate::{Error, Result};

/// Shortest path summary for one destination vertex
///
/// Renders as `v = 2, Distance = 2, Path = 0, 1, 2`, or
/// `v = 2, Distance = Infinity` when the destination is unreachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathReport<W> {
    pub destination: usize,
    /// `None` when the destination cannot be reached
    pub distance: Option<W>,
    /// Source-to-destination vertices; empty when unreachable
    pub path: Vec<usize>,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Builds the path report for `destination`
    ///
    /// Fails with `Error::InvalidVertex` when `destination` is outside the graph.
    pub fn report(&self, destination: usize) -> Result<PathReport<W>> {
        if destination >= self.vertex_count() {
            return Err(Error::InvalidVertex(destination));
        }

        let distance = self.distance(destination);
        let path = match distance {
            Some(_) => self.path_to(destination).unwrap_or_default(),
            None => Vec::new(),
        };

        Ok(PathReport {
            destination,
            distance,
            path,
        })
    }
}

impl<W> fmt::Display for PathReport<W>
where
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v = {}, Distance = ", self.destination)?;
        match &self.distance {
            None => write!(f, "Infinity"),
            Some(distance) => {
                write!(f, "{}, Path = ", distance)?;
                for (i, vertex) in self.path.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", vertex)?;
                }
                Ok(())
            }
        }
    }
}
