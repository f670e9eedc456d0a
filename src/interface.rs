//! Call-level entry points.
//!
//! Each function takes borrowed CSR input plus a request, builds its own
//! [`PartitionConfig`] and [`Graph`], and runs one operation against the
//! caller's [`CallContext`]. Nothing outlives the call except the returned
//! value. The context's RNG is reseeded from the request on every call, so
//! equal requests on equal graphs give equal answers.

use crate::config::{Mode, PartitionConfig, Preset, configure_balance};
use crate::context::CallContext;
use crate::graph::{BlockId, Graph, GraphInput, NodeId};
use crate::graph_error::GraphError;
use crate::ordering::{OrderingBackend, Permutation, perform_nested_dissection};
use crate::partitioning::{BisectionPartitioner, PartitionBackend, edge_cut};
use crate::reductions::ReductionStack;
use crate::reductions::order::apply_reduction_order;
use crate::separator::compute_separator;
use serde::{Deserialize, Serialize};

/// Parameters of [`partition`], [`partition_balance_edges`] and
/// [`node_separator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionRequest {
    pub k: usize,
    /// Allowed overload as a fraction, e.g. `0.03`.
    pub imbalance: f64,
    pub suppress_output: bool,
    pub seed: u64,
    pub mode: Mode,
    /// Integer mode code from a foreign caller. Overrides `mode` when set;
    /// see [`Mode::preset_for`] and [`Mode::separator_preset_for`].
    pub raw_mode: Option<i32>,
}

impl Default for PartitionRequest {
    fn default() -> Self {
        Self {
            k: 2,
            imbalance: 0.03,
            suppress_output: false,
            seed: 0,
            mode: Mode::Eco,
            raw_mode: None,
        }
    }
}

impl PartitionRequest {
    pub fn preset(&self) -> Preset {
        self.raw_mode.map_or(self.mode.preset(), Mode::preset_for)
    }

    pub fn separator_preset(&self) -> Preset {
        self.raw_mode
            .map_or(self.mode.separator_preset(), Mode::separator_preset_for)
    }
}

/// Parameters of the ordering entry points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderingRequest {
    pub seed: u64,
    pub mode: Mode,
    /// Integer mode code from a foreign caller. Overrides `mode` when set.
    pub raw_mode: Option<i32>,
    pub imbalance: f64,
    /// Pieces at or below this many nodes are not dissected further.
    pub recursion_limit: usize,
    /// Whitespace-separated reduction indices, see
    /// [`parse_reduction_order`](crate::reductions::order::parse_reduction_order).
    pub reduction_order: String,
    pub convergence_factor: f64,
    pub max_simplicial_degree: usize,
    pub suppress_output: bool,
}

impl Default for OrderingRequest {
    fn default() -> Self {
        Self {
            seed: 0,
            mode: Mode::Eco,
            raw_mode: None,
            imbalance: 0.03,
            recursion_limit: 120,
            reduction_order: "0 1 2 3 4 5".to_string(),
            convergence_factor: 1.0,
            max_simplicial_degree: 12,
            suppress_output: false,
        }
    }
}

impl OrderingRequest {
    pub fn preset(&self) -> Preset {
        self.raw_mode.map_or(self.mode.preset(), Mode::preset_for)
    }

    pub fn separator_preset(&self) -> Preset {
        self.raw_mode
            .map_or(self.mode.separator_preset(), Mode::separator_preset_for)
    }
}

/// Block labels with their weighted edge cut.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionOutcome {
    pub edge_cut: i64,
    pub part: Vec<BlockId>,
}

/// Build and validate the graph, then derive the block bound.
fn ingest(config: &mut PartitionConfig, input: &GraphInput<'_>) -> Result<Graph, GraphError> {
    let graph = Graph::from_input(input)?;
    let bounds = configure_balance(config, &graph);
    log::debug!(
        "ingested graph: n={} m={} total_weight={} upper={}",
        graph.number_of_nodes(),
        graph.number_of_edges(),
        bounds.total,
        bounds.upper
    );
    Ok(graph)
}

fn partition_config(request: &PartitionRequest) -> PartitionConfig {
    let mut config = PartitionConfig {
        k: request.k,
        ..Default::default()
    };
    config.apply_preset(request.preset());
    config.imbalance = request.imbalance;
    config.seed = request.seed;
    config
}

fn run_partition(
    ctx: &mut CallContext,
    input: &GraphInput<'_>,
    request: &PartitionRequest,
    balance_edges: bool,
) -> Result<PartitionOutcome, GraphError> {
    if request.k == 0 {
        return Err(GraphError::InvalidBlockCount(0));
    }
    ctx.reseed(request.seed);
    let CallContext { rng, diagnostics } = ctx;
    let mut out = diagnostics.capture(request.suppress_output);
    let mut config = partition_config(request);
    config.balance_edges = balance_edges;
    let graph = ingest(&mut config, input)?;
    if graph.is_empty() {
        return Ok(PartitionOutcome::default());
    }
    let part = BisectionPartitioner.partition(&config, &graph, rng)?;
    let cut = edge_cut(&graph, &part);
    out.report(format_args!("edge cut {cut}"));
    log::info!(
        "partition: n={} k={} preset={:?} cut={cut}",
        graph.number_of_nodes(),
        config.k,
        request.preset()
    );
    Ok(PartitionOutcome {
        edge_cut: cut,
        part,
    })
}

/// Partition into `request.k` blocks balancing node weight.
///
/// # Errors
/// [`GraphError::InvalidBlockCount`] for `k == 0`, or any ingestion error.
pub fn partition(
    ctx: &mut CallContext,
    input: &GraphInput<'_>,
    request: &PartitionRequest,
) -> Result<PartitionOutcome, GraphError> {
    run_partition(ctx, input, request, false)
}

/// Like [`partition`], but balances node weight plus weighted degree.
pub fn partition_balance_edges(
    ctx: &mut CallContext,
    input: &GraphInput<'_>,
    request: &PartitionRequest,
) -> Result<PartitionOutcome, GraphError> {
    run_partition(ctx, input, request, true)
}

/// Vertex separator of the graph.
///
/// For `k > 2` the separator splits a `k`-way partition; otherwise it is a
/// 2-way node separator computed with [`PartitionRequest::separator_preset`].
/// An empty result is valid.
pub fn node_separator(
    ctx: &mut CallContext,
    input: &GraphInput<'_>,
    request: &PartitionRequest,
) -> Result<Vec<NodeId>, GraphError> {
    if request.k == 0 {
        return Err(GraphError::InvalidBlockCount(0));
    }
    ctx.reseed(request.seed);
    let CallContext { rng, diagnostics } = ctx;
    let mut out = diagnostics.capture(request.suppress_output);
    let mut config = partition_config(request);
    let graph = ingest(&mut config, input)?;
    let separator = compute_separator(
        &BisectionPartitioner,
        &mut config,
        request.separator_preset(),
        &graph,
        rng,
    )?;
    out.report(format_args!("separator size {}", separator.len()));
    log::info!(
        "node separator: n={} k={} size={}",
        graph.number_of_nodes(),
        request.k,
        separator.len()
    );
    Ok(separator)
}

fn ordering_config(request: &OrderingRequest) -> PartitionConfig {
    let mut config = PartitionConfig::default();
    config.apply_preset(request.preset());
    config.dissection_rec_limit = request.recursion_limit;
    config.convergence_factor = request.convergence_factor;
    config.max_simplicial_degree = request.max_simplicial_degree;
    config.imbalance = request.imbalance;
    config.seed = request.seed;
    config
}

/// Fill-reducing ordering by reductions plus in-crate nested dissection.
///
/// Returns `ordering` with `ordering[v]` the elimination rank of node `v`.
///
/// # Errors
/// [`GraphError::UnknownReductionType`] if `request.reduction_order` has a
/// bad token; the token is also written to the diagnostic sink.
pub fn reduced_nd(
    ctx: &mut CallContext,
    input: &GraphInput<'_>,
    request: &OrderingRequest,
) -> Result<Vec<usize>, GraphError> {
    ctx.reseed(request.seed);
    let CallContext { rng, diagnostics } = ctx;
    let mut out = diagnostics.capture(request.suppress_output);
    let mut config = ordering_config(request);
    config.apply_preset(request.separator_preset());
    apply_reduction_order(&mut config, &request.reduction_order, &mut out)?;
    let graph = ingest(&mut config, input)?;
    let ordering = perform_nested_dissection(&config, &graph, rng)?;
    out.report(format_args!("ordered {} nodes", ordering.len()));
    log::info!(
        "reduced nd: n={} reductions={:?}",
        graph.number_of_nodes(),
        config.reduction_order
    );
    Ok(ordering)
}

/// Fill-reducing ordering by reductions plus an external ordering backend.
///
/// The backend sees the reduced graph only and is skipped when reductions
/// leave nothing. `request.mode`, `raw_mode`, `imbalance` and
/// `recursion_limit` do not apply here.
pub fn reduced_nd_with_backend<B: OrderingBackend + ?Sized>(
    ctx: &mut CallContext,
    input: &GraphInput<'_>,
    request: &OrderingRequest,
    backend: &B,
) -> Result<Vec<usize>, GraphError> {
    ctx.reseed(request.seed);
    let mut out = ctx.diagnostics.capture(request.suppress_output);
    let mut config = ordering_config(request);
    apply_reduction_order(&mut config, &request.reduction_order, &mut out)?;
    let graph = ingest(&mut config, input)?;
    let n = graph.number_of_nodes();

    let stack = ReductionStack::apply(&config, &graph);
    let active = stack.active_graph(&graph);
    let permutation = if active.is_empty() {
        Permutation::default()
    } else {
        backend.node_nd(&active.to_csr(), request.seed)?
    };
    let mut ordering = if stack.used_reductions() {
        stack.map_ordering(permutation.iperm)
    } else {
        permutation.iperm
    };
    ordering.truncate(n);
    out.report(format_args!(
        "{} ordered {} of {n} nodes",
        backend.name(),
        active.number_of_nodes()
    ));
    log::info!(
        "reduced nd ({}): n={n} reduced={} stack={}",
        backend.name(),
        active.number_of_nodes(),
        stack.len()
    );
    Ok(ordering)
}

/// [`reduced_nd_with_backend`] with `METIS_NodeND`.
#[cfg(feature = "metis-support")]
pub fn reduced_nd_metis(
    ctx: &mut CallContext,
    input: &GraphInput<'_>,
    request: &OrderingRequest,
) -> Result<Vec<usize>, GraphError> {
    reduced_nd_with_backend(ctx, input, request, &crate::ordering::MetisNodeNd)
}
