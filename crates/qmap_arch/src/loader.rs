//! Loads an [`ArchGraph`] from the text description of §6, or from the
//! built-in table of known devices.

use crate::error::{ArchError, Result};
use crate::graph::{ArchGraph, ArchGraphBuilder};

/// Parses the architecture description format:
///
/// ```text
/// N M
/// u1 v1
/// ...
/// uM vM
/// name1 size1
/// ...
/// ```
///
/// The first line gives the qubit count `N` and edge count `M`; the next
/// `M` lines are directed edges `u v`; any remaining non-blank lines are
/// register declarations `name size`. If no register lines are present a
/// single register named `q` of size `N` is assumed.
pub fn parse_description(text: &str) -> Result<ArchGraph> {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

    let header = lines
        .next()
        .ok_or_else(|| ArchError::Malformed("missing header line".to_string()))?;
    let mut header_fields = header.split_whitespace();
    let n: usize = header_fields
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| ArchError::Malformed(format!("bad qubit count in '{header}'")))?;
    let m: usize = header_fields
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| ArchError::Malformed(format!("bad edge count in '{header}'")))?;

    let mut builder = ArchGraphBuilder::new(n);

    for _ in 0..m {
        let line = lines
            .next()
            .ok_or_else(|| ArchError::Malformed("fewer edge lines than declared".to_string()))?;
        let mut fields = line.split_whitespace();
        let u: usize = fields
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| ArchError::Malformed(format!("bad edge endpoint in '{line}'")))?;
        let v: usize = fields
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| ArchError::Malformed(format!("bad edge endpoint in '{line}'")))?;
        builder = builder.edge(u, v);
    }

    let mut any_register = false;
    for line in lines {
        let mut fields = line.split_whitespace();
        let name = fields
            .next()
            .ok_or_else(|| ArchError::Malformed(format!("bad register line '{line}'")))?;
        let size: usize = fields
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| ArchError::Malformed(format!("bad register size in '{line}'")))?;
        builder = builder.register(name, size);
        any_register = true;
    }
    let _ = any_register;

    builder.build()
}

/// Built-in table of named devices, keyed by a short name passed on the
/// command line, in the spirit of the original `efd` tool's bundled
/// architecture JSON files for real IBM devices.
pub fn named_device(name: &str) -> Result<ArchGraph> {
    match name {
        // 5-qubit bowtie topology (IBM Q5 Yorktown-class coupling map).
        "ibmqx2" => ArchGraphBuilder::new(5)
            .edges([(0, 1), (0, 2), (1, 2), (3, 2), (3, 4), (4, 2)])
            .register("Q", 5)
            .build(),
        // 5-qubit "T" topology (IBM Q5 Tenerife-class coupling map).
        "ibmqx4" => ArchGraphBuilder::new(5)
            .edges([(1, 0), (2, 0), (2, 1), (3, 2), (3, 4), (4, 2)])
            .register("Q", 5)
            .build(),
        other => Err(ArchError::UnknownDevice(other.to_string())),
    }
}
