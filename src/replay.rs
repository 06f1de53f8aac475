//! Step-by-step application of fill actions to a canvas.
//!
//! A [`Replay`] pulls one action per [`Replay::step`] call. Pacing between
//! steps belongs to the caller; dropping the replay cancels it.

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::fill::FillAction;

/// Caller-driven replay of a fill onto a canvas.
#[derive(Debug)]
pub struct Replay<I> {
    canvas: Canvas,
    actions: I,
    color: Rgba,
    applied: usize,
}

impl<I> Replay<I>
where
    I: Iterator<Item = FillAction>,
{
    /// Replay `actions` onto `canvas` in `color`.
    pub fn new<A>(canvas: Canvas, actions: A, color: Rgba) -> Self
    where
        A: IntoIterator<Item = FillAction, IntoIter = I>,
    {
        Self {
            canvas,
            actions: actions.into_iter(),
            color,
            applied: 0,
        }
    }

    /// Apply the next action, returning it, or `None` once exhausted.
    pub fn step(&mut self) -> Option<FillAction> {
        let action = self.actions.next()?;
        self.canvas.apply(&action, self.color);
        self.applied += 1;
        tracing::trace!(step = self.applied, ?action, "replay step");
        Some(action)
    }

    /// Number of actions applied so far.
    #[must_use]
    pub const fn applied(&self) -> usize {
        self.applied
    }

    /// Canvas as drawn so far.
    #[must_use]
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Apply every remaining action and return the canvas.
    #[must_use]
    pub fn finish(mut self) -> Canvas {
        while self.step().is_some() {}
        tracing::debug!(steps = self.applied, "replay finished");
        self.canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fill::{FillMethod, FillPlan};
    use crate::geometry::Point;

    fn triangle() -> Vec<Point> {
        vec![Point::new(2.0, 1.0), Point::new(18.0, 4.0), Point::new(7.0, 17.0)]
    }

    #[test]
    fn test_step_then_finish_matches_immediate() {
        for method in FillMethod::ALL {
            let plan = FillPlan::new(method, &triangle(), None).unwrap();
            let color = method.default_color();

            let mut immediate = Canvas::new(20, 20).unwrap();
            immediate.apply_all(plan.actions(), color);

            let mut replay = Replay::new(Canvas::new(20, 20).unwrap(), plan.actions(), color);
            while replay.step().is_some() {}
            let stepped = replay.finish();

            assert_eq!(
                stepped.framebuffer().to_compact_pixels(),
                immediate.framebuffer().to_compact_pixels(),
                "{method:?}"
            );
        }
    }

    #[test]
    fn test_partial_replay_paints_prefix() {
        let plan = FillPlan::new(FillMethod::ScanlineSeed, &triangle(), None).unwrap();
        let first = plan.actions().next().unwrap();

        let mut replay = Replay::new(Canvas::new(20, 20).unwrap(), plan.actions(), Rgba::ORANGE);
        assert_eq!(replay.step(), Some(first));
        assert_eq!(replay.applied(), 1);
        assert_eq!(replay.canvas().painted(), first.len());
    }

    #[test]
    fn test_empty_replay() {
        let mut replay = Replay::new(Canvas::new(4, 4).unwrap(), Vec::new(), Rgba::RED);
        assert_eq!(replay.step(), None);
        assert_eq!(replay.finish().painted(), 0);
    }
}
