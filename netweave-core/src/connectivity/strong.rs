//! Strongly connected component labelling with an iterative Tarjan walk.
//!
//! An explicit call stack of `(vertex, next hop index)` frames replaces
//! recursion so deep chains cannot overflow the thread stack.

use crate::Graph;

const UNVISITED: usize = usize::MAX;

/// Labels every included vertex with its strongly connected component.
///
/// Returns the per-vertex labels, `None` for excluded vertices. Only edges
/// whose endpoints are both included and that satisfy `keep` are followed.
pub(super) fn label(
    graph: &Graph,
    included: &[bool],
    keep: &dyn Fn(&crate::Edge) -> bool,
) -> Vec<Option<usize>> {
    let n = graph.vertex_count();
    let successors: Vec<Vec<usize>> = (0..n)
        .map(|vertex| {
            if !included[vertex] {
                return Vec::new();
            }
            graph
                .hops(vertex)
                .filter(|hop| included[hop.target] && keep(hop.edge))
                .map(|hop| hop.target)
                .collect()
        })
        .collect();

    let mut index = vec![UNVISITED; n];
    let mut low_link = vec![0; n];
    let mut on_stack = vec![false; n];
    let mut stack = Vec::new();
    let mut labels = vec![None; n];
    let mut next_index = 0;
    let mut count = 0;

    for root in (0..n).filter(|&vertex| included[vertex]) {
        if index[root] != UNVISITED {
            continue;
        }
        let mut frames = vec![(root, 0_usize)];
        index[root] = next_index;
        low_link[root] = next_index;
        next_index += 1;
        stack.push(root);
        on_stack[root] = true;

        while let Some(frame) = frames.last_mut() {
            let (vertex, cursor) = *frame;
            if let Some(&target) = successors[vertex].get(cursor) {
                frame.1 += 1;
                if index[target] == UNVISITED {
                    index[target] = next_index;
                    low_link[target] = next_index;
                    next_index += 1;
                    stack.push(target);
                    on_stack[target] = true;
                    frames.push((target, 0));
                } else if on_stack[target] {
                    low_link[vertex] = low_link[vertex].min(index[target]);
                }
                continue;
            }

            frames.pop();
            if let Some(&(parent, _)) = frames.last() {
                low_link[parent] = low_link[parent].min(low_link[vertex]);
            }
            if low_link[vertex] == index[vertex] {
                while let Some(member) = stack.pop() {
                    on_stack[member] = false;
                    labels[member] = Some(count);
                    if member == vertex {
                        break;
                    }
                }
                count += 1;
            }
        }
    }

    labels
}
