//! Consumers of world-space frames.
//!
//! A [`Robot`](crate::Robot) hands every frame it computes to a [`FrameSink`]
//! after composing it with the footprint. What the sink does with it (move a
//! scene node, record it, log it) is up to the sink.

use std::collections::HashMap;

use quadpose_ik::{Frame, FrameName};
use tracing::debug;

/// Receives named world-space frames.
pub trait FrameSink {
    fn place(&mut self, name: &FrameName, frame: &Frame);
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn place(&mut self, name: &FrameName, frame: &Frame) {
        (**self).place(name, frame);
    }
}

impl<S: FrameSink + ?Sized> FrameSink for Box<S> {
    fn place(&mut self, name: &FrameName, frame: &Frame) {
        (**self).place(name, frame);
    }
}

// ---------------------------------------------------------------------------
// NullSink
// ---------------------------------------------------------------------------

/// Discards every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn place(&mut self, _name: &FrameName, _frame: &Frame) {}
}

// ---------------------------------------------------------------------------
// RecordingSink
// ---------------------------------------------------------------------------

/// Keeps the latest frame per name and the order of every `place` call.
///
/// The call log grows by one entry per placed frame and is never trimmed on
/// its own. Long-running loops should call
/// [`clear_calls`](Self::clear_calls) once they have read it.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    latest: HashMap<FrameName, Frame>,
    calls: Vec<FrameName>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent frame placed under `name`.
    #[must_use]
    pub fn get(&self, name: &FrameName) -> Option<&Frame> {
        self.latest.get(name)
    }

    /// Every name passed to `place` since the last clear, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[FrameName] {
        &self.calls
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Number of distinct names seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.latest.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.latest.is_empty()
    }

    /// Forget the call log but keep the latest frames.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn clear(&mut self) {
        self.latest.clear();
        self.calls.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FrameName, &Frame)> {
        self.latest.iter()
    }
}

impl FrameSink for RecordingSink {
    fn place(&mut self, name: &FrameName, frame: &Frame) {
        self.latest.insert(*name, *frame);
        self.calls.push(*name);
    }
}

// ---------------------------------------------------------------------------
// TracingSink
// ---------------------------------------------------------------------------

/// Emits one `debug` event per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl FrameSink for TracingSink {
    fn place(&mut self, name: &FrameName, frame: &Frame) {
        let t = frame.translation();
        let (yaw, roll, pitch) = frame.euler_angles();
        debug!(
            frame = %name,
            x = t.x,
            y = t.y,
            z = t.z,
            yaw,
            roll,
            pitch,
            "place"
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use quadpose_core::{LegId, RotationOrder};
    use quadpose_ik::LegFrame;

    fn frame(x: f64) -> Frame {
        Frame::from_translation(RotationOrder::Zxy, x, 0.0, 0.0)
    }

    #[test]
    fn recording_keeps_latest_and_log() {
        let mut sink = RecordingSink::new();
        let knee = FrameName::Leg(LegId::FrontLeft, LegFrame::KneeRotated);
        sink.place(&FrameName::Body, &frame(1.0));
        sink.place(&knee, &frame(2.0));
        sink.place(&FrameName::Body, &frame(3.0));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.call_count(), 3);
        assert_eq!(sink.calls(), &[FrameName::Body, knee, FrameName::Body]);
        assert!((sink.get(&FrameName::Body).unwrap().translation().x - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn recording_clear() {
        let mut sink = RecordingSink::new();
        sink.place(&FrameName::Body, &frame(1.0));
        sink.clear_calls();
        assert_eq!(sink.call_count(), 0);
        assert_eq!(sink.len(), 1);
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn mut_ref_forwards() {
        fn feed(mut sink: impl FrameSink) {
            sink.place(&FrameName::Body, &frame(0.0));
        }
        let mut inner = RecordingSink::new();
        feed(&mut inner);
        feed(&mut inner);
        assert_eq!(inner.call_count(), 2);
    }

    #[test]
    fn boxed_dyn_sink_forwards() {
        let mut sink: Box<dyn FrameSink> = Box::new(NullSink);
        sink.place(&FrameName::Body, &frame(0.0));
        let mut sink: Box<dyn FrameSink> = Box::new(TracingSink);
        sink.place(&FrameName::Body, &frame(0.0));
    }
}
