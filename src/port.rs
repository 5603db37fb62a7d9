use crate::messages::ProcessorEvent;

/// Destination for events the processor posts, standing in for a worklet
/// `MessagePort`.
pub trait EventSink {
    fn post(&mut self, event: ProcessorEvent);
}

impl EventSink for Vec<ProcessorEvent> {
    fn post(&mut self, event: ProcessorEvent) {
        self.push(event);
    }
}

/// Forwards every event to a closure.
pub struct CallbackSink<F>
where
    F: FnMut(ProcessorEvent),
{
    callback: F,
}

impl<F> CallbackSink<F>
where
    F: FnMut(ProcessorEvent),
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> EventSink for CallbackSink<F>
where
    F: FnMut(ProcessorEvent),
{
    fn post(&mut self, event: ProcessorEvent) {
        (self.callback)(event);
    }
}
