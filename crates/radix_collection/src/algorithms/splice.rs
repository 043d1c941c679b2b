use log::trace;

use crate::key::Entry;
use crate::list::{LinkedSeq, NodeId};

/// Relinks `list` into the order of `sorted`, one splice per run.
///
/// A run is a maximal stretch of sorted entries whose nodes follow each
/// other in the list as it currently stands. Placed runs gather at the back,
/// behind every unplaced node, so a run can never reach into them.
///
/// Returns the number of runs spliced.
pub fn relink<T, K>(list: &mut LinkedSeq<T>, sorted: &[Entry<NodeId, K>]) -> usize {
    debug_assert_eq!(list.len(), sorted.len());

    let mut runs = 0;
    let mut i = 0;
    while i < sorted.len() {
        let first = sorted[i].loc;
        let mut last = first;
        while i + 1 < sorted.len() && list.next(last) == Some(sorted[i + 1].loc) {
            i += 1;
            last = sorted[i].loc;
        }
        list.splice_back(first, last);
        runs += 1;
        i += 1;
    }

    trace!("relinked {} nodes in {runs} runs", sorted.len());
    runs
}
