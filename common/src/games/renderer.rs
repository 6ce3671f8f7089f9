/// Receives an immutable snapshot after every state-changing operation.
///
/// Simulations never call a renderer themselves; whoever drives them does.
pub trait SnapshotRenderer<TSnapshot> {
    fn render(&mut self, snapshot: &TSnapshot);
}

/// Keeps every frame it was handed. Handy for drivers under test.
pub struct RecordingRenderer<TSnapshot> {
    pub frames: Vec<TSnapshot>,
}

impl<TSnapshot> Default for RecordingRenderer<TSnapshot> {
    fn default() -> Self {
        Self { frames: Vec::new() }
    }
}

impl<TSnapshot: Clone> SnapshotRenderer<TSnapshot> for RecordingRenderer<TSnapshot> {
    fn render(&mut self, snapshot: &TSnapshot) {
        self.frames.push(snapshot.clone());
    }
}
