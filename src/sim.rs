use std::{collections::HashMap, io::Write, thread, time::Duration};

use metrohash::MetroBuildHasher;
use tracing::{debug, info};

use crate::{pos, Cell, Pos, View, World};

/// Live-neighbor totals, only for positions next to at least one live cell.
pub type NeighborCounts = HashMap<Pos, u8, MetroBuildHasher>;

pub const NEIGHBOR_OFFSETS: [Pos; 8] = [
    pos!(-1, -1),
    pos!(-1, 0),
    pos!(-1, 1),
    pos!(0, -1),
    pos!(0, 1),
    pos!(1, -1),
    pos!(1, 0),
    pos!(1, 1),
];

pub fn neighbor_counts<W>(world: &W) -> NeighborCounts
where
    W: World,
{
    let mut counts = NeighborCounts::default();
    for pos in world.actives() {
        for offset in NEIGHBOR_OFFSETS {
            *counts.entry(pos + offset).or_insert(0) += 1;
        }
    }
    counts
}

/// Computes the next generation, leaving the current one untouched.
pub fn step<W>(world: &W) -> W
where
    W: World,
{
    let mut next = world.cleared();
    for (pos, count) in neighbor_counts(world) {
        match (world.get(pos).is_alive(), count) {
            (true, 2 | 3) => next.set(pos, Cell::Alive), // survives
            (false, 3) => next.set(pos, Cell::Alive),    // birth
            _ => (),                                     // dies or stays dead
        }
    }
    next
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    pub generations: usize,
    pub delay: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            delay: Duration::from_millis(200),
        }
    }
}

/// Drives a world for a fixed number of generations, showing every frame.
#[derive(Debug)]
pub struct Sim<W>
where
    W: World,
{
    world: W,
    view: View,
    config: SimConfig,
}

impl<W> Sim<W>
where
    W: World,
{
    pub fn new(world: W, view: View, config: SimConfig) -> Self {
        Self {
            world,
            view,
            config,
        }
    }

    /// Renders then advances once per generation, there is no early exit on
    /// extinction or stability.
    pub fn run(mut self, out: &mut impl Write) -> std::io::Result<W> {
        info!(generations = self.config.generations, "starting simulation");
        for generation in 0..self.config.generations {
            let canvas = self.view.render(&self.world);
            self.view.present(&canvas, out)?;
            self.world = step(&self.world);
            debug!(generation, population = self.world.population(), "advanced");
            if !self.config.delay.is_zero() {
                thread::sleep(self.config.delay);
            }
        }
        Ok(self.world)
    }
}
