use js_sys::{Float32Array, Function, Int16Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::audio::split_planar;
use crate::config::{ProcessorConfig, PROCESSOR_NAME};
use crate::error::RegistrationError;
use crate::log::log_console;
use crate::messages::{ControlMessage, ProcessorEvent};
use crate::port::EventSink;
use crate::processor::StreamProcessor;
use crate::registry::{register_processor, ProcessorRegistry};

/// Event sink backed by the worklet port's `postMessage`.
#[derive(Default)]
pub struct JsPort {
    post_message: Option<Function>,
    warned_unwired: bool,
}

impl EventSink for JsPort {
    fn post(&mut self, event: ProcessorEvent) {
        let Some(post_message) = &self.post_message else {
            if !self.warned_unwired {
                self.warned_unwired = true;
                log_console(&format!(
                    "Dropping '{}' event: set_port has not been called",
                    event_kind(&event)
                ));
            }
            return;
        };
        let result = event_to_js(&event)
            .and_then(|value| post_message.call1(&JsValue::NULL, &value));
        if let Err(err) = result {
            log_console(&format!("Failed to post {:?}: {:?}", event_kind(&event), err));
        }
    }
}

fn event_kind(event: &ProcessorEvent) -> &'static str {
    match event {
        ProcessorEvent::Input { .. } => "input",
        ProcessorEvent::Done => "done",
    }
}

fn event_to_js(event: &ProcessorEvent) -> Result<JsValue, JsValue> {
    let message = Object::new();
    Reflect::set(&message, &"type".into(), &event_kind(event).into())?;
    if let ProcessorEvent::Input { audio } = event {
        let pcm = Int16Array::from(audio.as_slice());
        Reflect::set(&message, &"audio".into(), &pcm)?;
    }
    Ok(message.into())
}

fn message_from_js(data: &JsValue) -> Result<ControlMessage, JsValue> {
    let kind = Reflect::get(data, &"type".into())?
        .as_string()
        .ok_or_else(|| JsValue::from_str("message has no string 'type' field"))?;

    match kind.as_str() {
        "playback" => {
            let audio = Reflect::get(data, &"audio".into())?;
            let samples = match audio.dyn_into::<Float32Array>() {
                Ok(array) => array.to_vec(),
                Err(other) => Float32Array::new(&other).to_vec(),
            };
            Ok(ControlMessage::Playback { audio: samples })
        }
        "stop_playback" => Ok(ControlMessage::StopPlayback),
        other => Err(JsValue::from_str(&format!(
            "unknown message type '{}'",
            other
        ))),
    }
}

#[wasm_bindgen]
pub struct WasmStreamProcessor {
    inner: StreamProcessor<JsPort>,
}

#[wasm_bindgen]
impl WasmStreamProcessor {
    /// `options` is the node's `processorOptions`; `undefined` selects defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<WasmStreamProcessor, JsValue> {
        let config: ProcessorConfig = if options.is_undefined() || options.is_null() {
            ProcessorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(options)?
        };

        let inner = StreamProcessor::try_with_sink(config, JsPort::default())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log_console(&format!(
            "Stream processor created: frame size {}, playback gain {}",
            inner.config().frame_size,
            inner.config().playback_gain
        ));

        Ok(WasmStreamProcessor { inner })
    }

    /// Route outbound events to `port.postMessage` (already bound to the port).
    pub fn set_port(&mut self, post_message: Function) {
        self.inner.sink_mut().post_message = Some(post_message);
    }

    /// Entry point for `port.onmessage`. Unknown messages are logged and ignored.
    pub fn handle_message(&mut self, data: JsValue) {
        match message_from_js(&data) {
            Ok(message) => self.inner.handle_message(message),
            Err(err) => log_console(&format!("Ignoring control message: {:?}", err)),
        }
    }

    pub fn stop_playback(&mut self) {
        self.inner.stop_playback();
    }

    /// One render quantum. `input` is the first input channel (empty if the
    /// node has no input). `output` holds `channels` planar channels back to
    /// back; every one of them receives the same playback samples.
    pub fn process(&mut self, input: &[f32], output: &mut [f32], channels: usize) -> bool {
        let inputs: [&[f32]; 1] = [input];
        let mut outputs = split_planar(output, channels);
        self.inner.process_block(&inputs, &mut outputs)
    }

    pub fn is_playing(&self) -> bool {
        self.inner.is_playing()
    }

    pub fn queued_buffers(&self) -> usize {
        self.inner.queued_buffers()
    }
}

/// The worklet scope's `registerProcessor`, bound to one constructor.
struct JsRegistry<'a> {
    register_fn: &'a Function,
    constructor: &'a JsValue,
}

fn js_error_message(err: &JsValue) -> String {
    Reflect::get(err, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

impl ProcessorRegistry for JsRegistry<'_> {
    fn register(&mut self, name: &str) -> Result<(), RegistrationError> {
        self.register_fn
            .call2(&JsValue::NULL, &JsValue::from_str(name), self.constructor)
            .map(|_| ())
            .map_err(|err| RegistrationError::from_host_message(name, &js_error_message(&err)))
    }
}

/// Register `constructor` with the host, tolerating a repeat registration.
#[wasm_bindgen]
pub fn register_stream_processor(
    register_fn: &Function,
    constructor: &JsValue,
    name: Option<String>,
) -> Result<(), JsValue> {
    let name = name.unwrap_or_else(|| PROCESSOR_NAME.to_string());
    let mut registry = JsRegistry {
        register_fn,
        constructor,
    };
    register_processor(&mut registry, &name).map_err(|e| JsValue::from_str(&e.to_string()))
}
