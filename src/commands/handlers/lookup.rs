//! Shared lookup command handler
//!
//! Ranks a caller-supplied list of words by phonetic distance to a query.
//! Storing and indexing the word list is up to the caller; every call hashes
//! the candidates afresh.

use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::commands::core::{CommandResult, LookupParams};
use crate::hash::Hash;

/// A ranked lookup hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// The matching word
    pub term: String,
    /// Distance to the query under the requested metric
    pub distance: u32,
}

/// Rank candidates against the query
///
/// This is the core lookup logic shared by both CLI and REPL.
///
/// # Arguments
///
/// * `candidates` - Words to rank, e.g. the lines of a dictionary file
/// * `params` - Lookup parameters (term, metric, cutoff, limit)
///
/// # Returns
///
/// Matches within `params.max_distance`, sorted by distance then lexicographically
pub fn execute_lookup<S: AsRef<str> + Sync>(candidates: &[S], params: &LookupParams) -> Vec<Match> {
    let query = Hash::new(&params.term);
    let metric = params.metric;

    let score = |candidate: &S| {
        let term = candidate.as_ref();
        let distance = metric.between(query, Hash::new(term));
        (distance <= params.max_distance).then(|| Match {
            term: term.to_string(),
            distance,
        })
    };

    #[cfg(feature = "parallel")]
    let mut results: Vec<Match> = candidates.par_iter().filter_map(score).collect();

    #[cfg(not(feature = "parallel"))]
    let mut results: Vec<Match> = candidates.iter().filter_map(score).collect();

    results.sort_by(|a, b| a.distance.cmp(&b.distance).then_with(|| a.term.cmp(&b.term)));
    results.dedup();

    debug!(
        term = %params.term,
        metric = %metric,
        candidates = candidates.len(),
        matches = results.len(),
        "lookup ranked"
    );

    if let Some(limit) = params.limit {
        results.truncate(limit);
    }

    results
}

/// Format lookup results for display
pub fn format_results(results: &[Match], show_distances: bool) -> String {
    if results.is_empty() {
        return "No matches found".to_string();
    }

    results
        .iter()
        .map(|m| {
            if show_distances {
                format!("{} (distance: {})", m.term, m.distance)
            } else {
                m.term.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Execute lookup and return formatted result
pub fn lookup_and_format<S: AsRef<str> + Sync>(
    candidates: &[S],
    params: &LookupParams,
) -> CommandResult {
    let results = execute_lookup(candidates, params);
    CommandResult::success(format_results(&results, params.show_distances))
}
