use std::io::{self, Write};

use crate::{pos, Pos, World};

pub use canvas::Canvas;
mod canvas;

pub const EXTINCT_MESSAGE: &str = "All cells are dead.";

/// Axis-aligned bounding box of a set of positions, both corners inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: Pos,
    pub max: Pos,
}

impl Bounds {
    pub fn of(positions: impl IntoIterator<Item = Pos>) -> Option<Self> {
        positions.into_iter().fold(None, |bounds, pos| {
            Some(match bounds {
                None => Bounds { min: pos, max: pos },
                Some(Bounds { min, max }) => Bounds {
                    min: pos!(min.x.min(pos.x), min.y.min(pos.y)),
                    max: pos!(max.x.max(pos.x), max.y.max(pos.y)),
                },
            })
        })
    }
}

/// The window of the universe shown in one frame. `height` counts rows
/// (along `x`), `width` counts columns (along `y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub origin: Pos,
    pub height: usize,
    pub width: usize,
}

impl Viewport {
    pub fn square(origin: Pos, size: usize) -> Self {
        Self {
            origin,
            height: size,
            width: size,
        }
    }

    /// Frames the live cells with `padding` on every side, keeping each axis
    /// to at most `max_view` cells counted from the top-left edge.
    ///
    /// Returns `None` for an extinct world, which has no bounding box.
    pub fn auto_pan<W>(world: &W, padding: usize, max_view: usize) -> Option<Self>
    where
        W: World,
    {
        let Bounds { min, max } = Bounds::of(world.actives())?;
        let padding = i64::try_from(padding).unwrap_or(i64::MAX);
        let origin = pos!(min.x.saturating_sub(padding), min.y.saturating_sub(padding));
        let far = pos!(max.x.saturating_add(padding), max.y.saturating_add(padding));
        Some(Self {
            origin,
            height: clamp_span(origin.x, far.x, max_view),
            width: clamp_span(origin.y, far.y, max_view),
        })
    }

    pub fn draw<W>(&self, world: &W) -> Canvas
    where
        W: World,
    {
        let mut canvas = Canvas::new(self.width, self.height);
        canvas.layer(|local| {
            let cell = world.get(self.origin + local);
            cell.is_alive().then(|| cell.glyph())
        });
        canvas
    }
}

fn clamp_span(near: i64, far: i64, max_view: usize) -> usize {
    let span = far as i128 - near as i128 + 1;
    usize::try_from(span).unwrap_or(usize::MAX).clamp(1, max_view.max(1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Always shows the same window, patterns leaving it become invisible.
    Fixed(Viewport),
    /// Follows the live cells every frame.
    AutoPan { padding: usize, max_view: usize },
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::AutoPan {
            padding: 2,
            max_view: 20,
        }
    }
}

pub fn render<W>(world: &W, mode: ViewMode) -> Canvas
where
    W: World,
{
    match mode {
        ViewMode::Fixed(viewport) => viewport.draw(world),
        ViewMode::AutoPan { padding, max_view } => match Viewport::auto_pan(world, padding, max_view) {
            Some(viewport) => viewport.draw(world),
            None => Canvas::message(EXTINCT_MESSAGE),
        },
    }
}

#[derive(Debug, Clone, Copy)]
pub struct View {
    mode: ViewMode,
    clear: bool,
}

impl View {
    pub fn new(mode: ViewMode, clear: bool) -> Self {
        Self { mode, clear }
    }

    pub fn render<W>(&self, world: &W) -> Canvas
    where
        W: World,
    {
        render(world, self.mode)
    }

    pub fn present(&self, canvas: &Canvas, out: &mut impl Write) -> io::Result<()> {
        canvas.display(out, self.clear)
    }
}
