//! METIS graph file reader and writer.
//!
//! # Supported format
//! - Header `n m [fmt [ncon]]`, where `m` counts undirected edges.
//! - `fmt` is `0`, `1`, `10` or `11`: the ones digit enables edge weights,
//!   the tens digit enables node weights.
//! - One line per node listing 1-based neighbor ids, each followed by its
//!   edge weight when edge weights are enabled. Empty lines are isolated nodes.
//! - Lines starting with `%` are comments.
//!
//! # Limitations
//! - Multi-constraint weights (`ncon > 1`) are rejected.
//! - Node sizes (`fmt` hundreds digit) are not supported.

use super::{EdgeWeight, Graph, NodeId, NodeWeight};
use crate::graph_error::GraphError;
use std::io::{BufRead, BufReader, Read, Write};

/// Reader for METIS `.graph` files.
#[derive(Debug, Default, Clone)]
pub struct MetisGraphReader;

#[derive(Debug, Clone, Copy)]
struct Header {
    nodes: usize,
    edges: usize,
    node_weights: bool,
    edge_weights: bool,
}

impl MetisGraphReader {
    fn parse_header(line: &str, line_no: usize) -> Result<Header, GraphError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 2 || fields.len() > 4 {
            return Err(parse_error(line_no, "header needs `n m [fmt [ncon]]`"));
        }
        let nodes = parse_usize(fields[0], line_no, "node count")?;
        let edges = parse_usize(fields[1], line_no, "edge count")?;
        let fmt = match fields.get(2) {
            Some(raw) => parse_usize(raw, line_no, "format")?,
            None => 0,
        };
        if !matches!(fmt, 0 | 1 | 10 | 11) {
            return Err(parse_error(line_no, format!("unsupported format {fmt}")));
        }
        if let Some(raw) = fields.get(3) {
            let ncon = parse_usize(raw, line_no, "constraint count")?;
            if ncon > 1 {
                return Err(parse_error(line_no, "multi-constraint weights are not supported"));
            }
        }
        Ok(Header {
            nodes,
            edges,
            node_weights: fmt / 10 == 1,
            edge_weights: fmt % 10 == 1,
        })
    }

    /// Parse a METIS graph from `reader`.
    ///
    /// # Errors
    /// Returns [`GraphError::Parse`] with the 1-based line number for
    /// malformed content, [`GraphError::Asymmetric`] when an edge is listed
    /// in one direction only, and [`GraphError::Io`] on read failures.
    pub fn read<R: Read>(&self, reader: R) -> Result<Graph, GraphError> {
        let mut header: Option<Header> = None;
        let mut xadj = vec![0usize];
        let mut adjncy: Vec<NodeId> = Vec::new();
        let mut vwgt: Vec<NodeWeight> = Vec::new();
        let mut adjwgt: Vec<EdgeWeight> = Vec::new();
        let mut last_line = 0;

        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            last_line = line_no;
            if line.trim_start().starts_with('%') {
                continue;
            }
            let Some(h) = header else {
                if line.trim().is_empty() {
                    continue;
                }
                header = Some(Self::parse_header(&line, line_no)?);
                continue;
            };
            let node = xadj.len() - 1;
            if node == h.nodes {
                if line.trim().is_empty() {
                    continue;
                }
                return Err(parse_error(line_no, "more node lines than announced"));
            }
            let mut tokens = line.split_whitespace();
            if h.node_weights {
                let raw = tokens
                    .next()
                    .ok_or_else(|| parse_error(line_no, "missing node weight"))?;
                vwgt.push(parse_i64(raw, line_no, "node weight")?);
            }
            while let Some(raw) = tokens.next() {
                let target = parse_usize(raw, line_no, "neighbor")?;
                if target == 0 || target > h.nodes {
                    return Err(parse_error(
                        line_no,
                        format!("neighbor {target} outside 1..={}", h.nodes),
                    ));
                }
                adjncy.push(target - 1);
                if h.edge_weights {
                    let raw = tokens
                        .next()
                        .ok_or_else(|| parse_error(line_no, "missing edge weight"))?;
                    adjwgt.push(parse_i64(raw, line_no, "edge weight")?);
                }
            }
            xadj.push(adjncy.len());
        }

        let h = header.ok_or_else(|| parse_error(last_line, "missing header"))?;
        // trailing isolated nodes may be omitted entirely
        while xadj.len() - 1 < h.nodes {
            xadj.push(adjncy.len());
            if h.node_weights {
                vwgt.push(1);
            }
        }
        if adjncy.len() != 2 * h.edges {
            return Err(parse_error(
                last_line,
                format!(
                    "header announces {} edges but {} edge entries were read",
                    h.edges,
                    adjncy.len()
                ),
            ));
        }

        let mut graph = Graph::from_csr(xadj, adjncy)?;
        if h.node_weights {
            graph.set_node_weights(&vwgt)?;
        }
        if h.edge_weights {
            graph.set_edge_weights(&adjwgt)?;
        }
        graph.validate_symmetry()?;
        log::debug!(
            "read METIS graph: {} nodes, {} edges",
            graph.number_of_nodes(),
            h.edges
        );
        Ok(graph)
    }
}

/// Writer for METIS `.graph` files. Weights are written only when some
/// weight differs from 1.
#[derive(Debug, Default, Clone)]
pub struct MetisGraphWriter;

impl MetisGraphWriter {
    pub fn write<W: Write>(&self, graph: &Graph, mut out: W) -> Result<(), GraphError> {
        let n = graph.number_of_nodes();
        let node_weights = graph.node_weights().iter().any(|&w| w != 1);
        let edge_weights = (0..graph.number_of_edges()).any(|e| graph.edge_weight(e) != 1);
        let fmt = match (node_weights, edge_weights) {
            (false, false) => String::new(),
            (false, true) => " 1".to_string(),
            (true, false) => " 10".to_string(),
            (true, true) => " 11".to_string(),
        };
        writeln!(out, "{} {}{}", n, graph.number_of_edges() / 2, fmt)?;
        for v in 0..n {
            let mut fields: Vec<String> = Vec::with_capacity(2 * graph.degree(v) + 1);
            if node_weights {
                fields.push(graph.node_weight(v).to_string());
            }
            for (t, w) in graph.edges(v) {
                fields.push((t + 1).to_string());
                if edge_weights {
                    fields.push(w.to_string());
                }
            }
            writeln!(out, "{}", fields.join(" "))?;
        }
        Ok(())
    }
}

fn parse_error(line: usize, message: impl Into<String>) -> GraphError {
    GraphError::Parse {
        line,
        message: message.into(),
    }
}

fn parse_usize(raw: &str, line: usize, what: &str) -> Result<usize, GraphError> {
    raw.parse::<usize>()
        .map_err(|_| parse_error(line, format!("invalid {what}: {raw}")))
}

fn parse_i64(raw: &str, line: usize, what: &str) -> Result<i64, GraphError> {
    raw.parse::<i64>()
        .map_err(|_| parse_error(line, format!("invalid {what}: {raw}")))
}
