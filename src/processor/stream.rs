use crate::audio::AudioOutput;
use crate::config::ProcessorConfig;
use crate::error::ConfigError;
use crate::frame::InputAccumulator;
use crate::messages::{ControlMessage, ProcessorEvent};
use crate::playback::{PlaybackQueue, RenderOutcome};
use crate::port::EventSink;
use crate::processing::{AudioProcessor, ProcessContext};

/// Frames microphone input into PCM and plays queued buffers back.
///
/// The two paths share nothing but the event sink: a block with no input
/// still renders playback, and a block with no output still frames input.
pub struct StreamProcessor<S: EventSink = Vec<ProcessorEvent>> {
    config: ProcessorConfig,
    accumulator: InputAccumulator,
    playback: PlaybackQueue,
    sink: S,
}

impl StreamProcessor<Vec<ProcessorEvent>> {
    /// Processor that collects its events in a `Vec`.
    pub fn new(config: ProcessorConfig) -> Self {
        Self::with_sink(config, Vec::new())
    }
}

impl Default for StreamProcessor<Vec<ProcessorEvent>> {
    fn default() -> Self {
        Self::new(ProcessorConfig::default())
    }
}

impl<S: EventSink> StreamProcessor<S> {
    /// Build without validation. A zero frame size is raised to one sample
    /// and recorded in the stored config; use `try_with_sink` to reject it.
    pub fn with_sink(mut config: ProcessorConfig, sink: S) -> Self {
        config.frame_size = config.frame_size.max(1);
        Self {
            accumulator: InputAccumulator::new(config.frame_size),
            playback: PlaybackQueue::new(config.playback_gain),
            config,
            sink,
        }
    }

    pub fn try_with_sink(config: ProcessorConfig, sink: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_sink(config, sink))
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn queued_buffers(&self) -> usize {
        self.playback.len()
    }

    pub fn queued_samples(&self) -> usize {
        self.playback.queued_samples()
    }

    /// Samples waiting in the current partial input frame.
    pub fn pending_input(&self) -> usize {
        self.accumulator.len()
    }

    pub fn ingest_sample(&mut self, sample: f32) {
        if let Some(audio) = self.accumulator.push(sample) {
            self.sink.post(ProcessorEvent::Input { audio });
        }
    }

    /// Feed a block of microphone samples; posts one `input` event per
    /// completed frame.
    pub fn ingest(&mut self, samples: &[f32]) {
        let sink = &mut self.sink;
        self.accumulator
            .ingest(samples, |audio| sink.post(ProcessorEvent::Input { audio }));
    }

    pub fn enqueue(&mut self, audio: Vec<f32>) {
        self.playback.enqueue(audio);
    }

    /// Discard queued playback and post `done`, even if nothing was queued.
    pub fn stop_playback(&mut self) {
        self.playback.stop();
        self.sink.post(ProcessorEvent::Done);
    }

    pub fn render(&mut self, output: &mut AudioOutput) -> RenderOutcome {
        let outcome = self.playback.render(output);
        if outcome == RenderOutcome::Drained {
            self.sink.post(ProcessorEvent::Done);
        }
        outcome
    }

    pub fn handle_message(&mut self, message: ControlMessage) {
        match message {
            ControlMessage::Playback { audio } => self.enqueue(audio),
            ControlMessage::StopPlayback => self.stop_playback(),
        }
    }

    /// Run one render quantum. `inputs` and `outputs` are the channels of the
    /// node's first input and first output; either may be empty.
    pub fn process_block(&mut self, inputs: &[&[f32]], outputs: &mut [&mut [f32]]) -> bool {
        let mut context = ProcessContext::new(inputs, outputs);
        AudioProcessor::process(self, &mut context)
    }
}

impl<S: EventSink> AudioProcessor for StreamProcessor<S> {
    fn process(&mut self, context: &mut ProcessContext) -> bool {
        if let Some(samples) = context.input.channel(0) {
            self.ingest(samples);
        }

        self.render(&mut context.output);

        true
    }

    /// Back to the freshly constructed state. Posts nothing.
    fn reset(&mut self) {
        self.accumulator.reset();
        self.playback.stop();
    }
}
