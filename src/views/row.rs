// src/views/row.rs
//
// The row of animated nodes and the cursor that walks it. The row owns all
// nodes in one Vec; neighbor relations are index arithmetic, so there is no
// linked structure to build or tear down.

use crate::animation::ScaleState;
use crate::draw::NodeSurface;

#[derive(Debug)]
struct Node {
    index: usize,
    state: ScaleState,
}

#[derive(Debug)]
pub struct NodeRow {
    nodes: Vec<Node>,
    active: usize,
    dir: i32,
}

impl NodeRow {
    pub fn new(count: usize) -> Self {
        let nodes = (0..count)
            .map(|index| Node {
                index,
                state: ScaleState::new(),
            })
            .collect();
        Self {
            nodes,
            active: 0,
            dir: 1,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn direction(&self) -> i32 {
        self.dir
    }

    pub fn is_idle(&self) -> bool {
        self.nodes[self.active].state.is_idle()
    }

    /// Begins a half-cycle on the active node. Ignored while one is running.
    pub fn start_updating(&mut self) -> bool {
        self.nodes[self.active].state.start()
    }

    /// Advances the active node one tick. On settlement the cursor steps to
    /// the neighbor in the traversal direction; at a row boundary it stays
    /// put and the direction flips instead. Returns true on settlement.
    pub fn update(&mut self) -> bool {
        if !self.nodes[self.active].state.update() {
            return false;
        }
        let next = self.active as i32 + self.dir;
        if next < 0 || next >= self.nodes.len() as i32 {
            self.dir *= -1;
        } else {
            self.active = next as usize;
        }
        true
    }

    /// Repaints the whole row, left to right.
    pub fn draw(&self, surface: &mut dyn NodeSurface) {
        for node in &self.nodes {
            surface.draw_node(node.index, node.state.scale());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::scale::NODES;

    struct RecordingSurface {
        calls: Vec<(usize, f32)>,
    }

    impl NodeSurface for RecordingSurface {
        fn draw_node(&mut self, index: usize, scale: f32) {
            self.calls.push((index, scale));
        }
    }

    fn settle_one_half_cycle(row: &mut NodeRow) {
        assert!(row.start_updating());
        let mut ticks = 0;
        while !row.update() {
            ticks += 1;
            assert!(ticks < 1000, "half-cycle did not settle");
        }
    }

    #[test]
    fn test_cursor_walks_to_the_far_end() {
        let mut row = NodeRow::new(NODES);
        for expected in 1..NODES {
            settle_one_half_cycle(&mut row);
            assert_eq!(row.active_index(), expected);
            assert_eq!(row.direction(), 1);
        }
    }

    #[test]
    fn test_boundary_flips_direction_without_moving() {
        let mut row = NodeRow::new(NODES);
        for _ in 1..NODES {
            settle_one_half_cycle(&mut row);
        }
        assert_eq!(row.active_index(), NODES - 1);

        // settling at the last node reverses the traversal instead
        settle_one_half_cycle(&mut row);
        assert_eq!(row.active_index(), NODES - 1);
        assert_eq!(row.direction(), -1);

        // and the walk now heads back toward node 0
        settle_one_half_cycle(&mut row);
        assert_eq!(row.active_index(), NODES - 2);
        assert_eq!(row.direction(), -1);
    }

    #[test]
    fn test_left_boundary_also_flips() {
        let mut row = NodeRow::new(2);
        settle_one_half_cycle(&mut row); // 0 -> 1
        settle_one_half_cycle(&mut row); // flip at 1
        settle_one_half_cycle(&mut row); // 1 -> 0
        settle_one_half_cycle(&mut row); // flip at 0
        assert_eq!(row.active_index(), 0);
        assert_eq!(row.direction(), 1);
    }

    #[test]
    fn test_start_updating_is_idempotent() {
        let mut row = NodeRow::new(NODES);
        assert!(row.start_updating());
        assert!(!row.start_updating());
        assert!(!row.is_idle());
    }

    #[test]
    fn test_draw_visits_every_node_once() {
        let row = NodeRow::new(NODES);
        let mut surface = RecordingSurface { calls: Vec::new() };
        row.draw(&mut surface);

        assert_eq!(surface.calls.len(), NODES);
        for (i, (index, scale)) in surface.calls.iter().enumerate() {
            assert_eq!(*index, i);
            assert_eq!(*scale, 0.0);
        }
    }
}
