//! Textual reduction order.
//!
//! The order is a whitespace-separated list of decimal indices into
//! [`ReductionType::ALL`], for example `"0 1 2 3 4 5"`. An empty list turns
//! reductions off.

use super::ReductionType;
use crate::config::PartitionConfig;
use crate::context::Diagnostics;
use crate::graph_error::GraphError;

/// Decode `text` without touching any configuration.
///
/// # Errors
/// [`GraphError::UnknownReductionType`] for the first token that is not an
/// integer in `0..ReductionType::COUNT`.
pub fn parse_reduction_order(text: &str) -> Result<Vec<ReductionType>, GraphError> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .ok()
                .and_then(|i| usize::try_from(i).ok())
                .and_then(ReductionType::from_index)
                .ok_or_else(|| GraphError::UnknownReductionType {
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Append the types named by `text` to `config.reduction_order`.
///
/// On failure the configuration is left as it was and the rejected token is
/// reported on `diagnostics`. If the resulting order is empty,
/// `disable_reductions` is set.
pub fn apply_reduction_order(
    config: &mut PartitionConfig,
    text: &str,
    diagnostics: &mut Diagnostics,
) -> Result<(), GraphError> {
    let staged = match parse_reduction_order(text) {
        Ok(staged) => staged,
        Err(e) => {
            if let GraphError::UnknownReductionType { token } = &e {
                log::warn!("rejecting reduction order {text:?}: bad token {token:?}");
            }
            diagnostics.report(format_args!("{e}"));
            return Err(e);
        }
    };
    config.reduction_order.extend(staged);
    if config.reduction_order.is_empty() {
        config.disable_reductions = true;
    }
    Ok(())
}
