//! List-nesting state: an owned stack of per-depth contexts, scoped to one
//! `parse` call.

/// Indent step (in leading characters) that opens one more list level.
pub const INDENT_UNIT: usize = 4;

/// Per-depth bookkeeping while a list is being parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListContext {
    pub indent: usize,
    pub ordered: bool,
    pub counter: u32,
}

/// Stack of list contexts, indent non-decreasing bottom-to-top.
#[derive(Debug, Default)]
pub struct ListStack(Vec<ListContext>);

impl ListStack {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Re-anchors the stack at `depth` for an item of the given ordering and
    /// returns the resulting zero-based nesting level.
    ///
    /// Deeper contexts are popped; a new context is pushed when the stack is
    /// empty, the depth increases, or the ordering flips at equal depth.
    /// Ordered items bump the top counter.
    pub fn enter(&mut self, depth: usize, ordered: bool) -> usize {
        while self.0.last().is_some_and(|top| depth < top.indent) {
            self.0.pop();
        }

        let push = match self.0.last() {
            None => true,
            Some(top) => depth > top.indent || (depth == top.indent && top.ordered != ordered),
        };
        if push {
            self.0.push(ListContext {
                indent: depth,
                ordered,
                counter: 0,
            });
        }

        if ordered && let Some(top) = self.0.last_mut() {
            top.counter += 1;
        }
        self.0.len() - 1
    }

    /// Marker text for an item just entered at `level`: dotted counters of
    /// every active context for ordered items, a dash run for unordered.
    pub fn marker(&self, ordered: bool, level: usize) -> String {
        if ordered {
            let mut marker = self
                .0
                .iter()
                .map(|ctx| ctx.counter.to_string())
                .collect::<Vec<_>>()
                .join(".");
            marker.push('.');
            marker
        } else {
            "-".repeat(level + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_item_opens_level_zero() {
        let mut stack = ListStack::new();
        assert_eq!(stack.enter(0, false), 0);
        assert_eq!(stack.marker(false, 0), "-");
    }

    #[test]
    fn ordered_counters_advance_per_level() {
        let mut stack = ListStack::new();
        stack.enter(0, true);
        assert_eq!(stack.marker(true, 0), "1.");
        stack.enter(0, true);
        assert_eq!(stack.marker(true, 0), "2.");
        stack.enter(1, true);
        assert_eq!(stack.marker(true, 1), "2.1.");
    }

    #[test]
    fn dedent_pops_back_to_outer_counter() {
        let mut stack = ListStack::new();
        stack.enter(0, true);
        stack.enter(1, true);
        let level = stack.enter(0, true);
        assert_eq!(level, 0);
        assert_eq!(stack.marker(true, 0), "2.");
    }

    #[test]
    fn ordering_flip_at_same_depth_opens_new_context() {
        let mut stack = ListStack::new();
        assert_eq!(stack.enter(0, false), 0);
        assert_eq!(stack.enter(0, true), 1);
        assert_eq!(stack.marker(true, 1), "0.1.");
    }

    #[test]
    fn unordered_marker_length_tracks_level() {
        let mut stack = ListStack::new();
        stack.enter(0, false);
        let level = stack.enter(1, false);
        assert_eq!(level, 1);
        assert_eq!(stack.marker(false, 1), "--");
    }
}
