//! Offline driver for the stream processor
//!
//! Pushes WAV files through the processor in host-sized render quanta so the
//! framing and playback paths can be checked without a browser.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use stream_processor::{
    pcm16_to_f32, ProcessorConfig, ProcessorEvent, StreamProcessor, DEFAULT_FRAME_SIZE,
};

// Web Audio always renders 128-frame quanta.
const HOST_BLOCK_SIZE: usize = 128;

#[derive(Parser, Debug)]
#[command(name = "stream_render", about = "Run WAV files through the stream processor")]
struct Cli {
    /// Samples per emitted PCM frame
    #[arg(long, default_value_t = DEFAULT_FRAME_SIZE)]
    frame_size: usize,

    /// Playback gain; defaults to the processor's built-in gain
    #[arg(long)]
    gain: Option<f64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Frame the first channel of a WAV into 16-bit PCM, as the microphone path does
    Capture { input: PathBuf, output: PathBuf },
    /// Queue a WAV for playback and render it until the queue drains
    Playback {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, default_value_t = HOST_BLOCK_SIZE)]
        block_size: usize,
        #[arg(long, default_value_t = 2)]
        channels: u16,
    },
}

struct WavData {
    samples: Vec<f32>,
    sample_rate: u32,
}

/// Reads the first channel of a WAV file as floats in [-1, 1].
fn read_first_channel(path: &Path) -> anyhow::Result<WavData> {
    let mut reader = hound::WavReader::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    let interleaved: Vec<f32> = match (spec.bits_per_sample, spec.sample_format) {
        (32, hound::SampleFormat::Float) => reader.samples::<f32>().collect::<Result<_, _>>()?,
        (16, hound::SampleFormat::Int) => reader
            .samples::<i16>()
            .map(|s| s.map(pcm16_to_f32))
            .collect::<Result<_, _>>()?,
        (24, hound::SampleFormat::Int) => reader
            .samples::<i32>()
            .map(|s| s.map(|v| v as f32 / 8_388_607.0))
            .collect::<Result<_, _>>()?,
        (bits, format) => bail!(
            "Unsupported WAV format: bits_per_sample={} sample_format={:?}",
            bits,
            format
        ),
    };

    Ok(WavData {
        samples: interleaved.into_iter().step_by(channels).collect(),
        sample_rate: spec.sample_rate,
    })
}

fn capture(processor: &mut StreamProcessor, input: &Path, output: &Path) -> anyhow::Result<()> {
    let wav = read_first_channel(input)?;
    println!(
        "Framing {} samples at {} Hz into {}-sample frames",
        wav.samples.len(),
        wav.sample_rate,
        processor.config().frame_size
    );

    for block in wav.samples.chunks(HOST_BLOCK_SIZE) {
        processor.process_block(&[block], &mut []);
    }

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: wav.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(output, spec)
        .with_context(|| format!("Failed to create {}", output.display()))?;

    let mut frames = 0;
    for pcm in processor.sink().iter().filter_map(ProcessorEvent::pcm) {
        for &sample in pcm {
            writer.write_sample(sample)?;
        }
        frames += 1;
    }
    writer.finalize()?;

    println!(
        "Wrote {} frames to {} ({} samples left unframed)",
        frames,
        output.display(),
        processor.pending_input()
    );
    Ok(())
}

fn playback(
    processor: &mut StreamProcessor,
    input: &Path,
    output: &Path,
    block_size: usize,
    channels: u16,
) -> anyhow::Result<()> {
    if block_size == 0 || channels == 0 {
        bail!("block size and channel count must be non-zero");
    }

    let wav = read_first_channel(input)?;
    let total = wav.samples.len();
    processor.enqueue(wav.samples);

    let spec = hound::WavSpec {
        channels,
        sample_rate: wav.sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(output, spec)
        .with_context(|| format!("Failed to create {}", output.display()))?;

    let mut buffers = vec![vec![0.0_f32; block_size]; channels as usize];
    let mut blocks = 0;
    while processor.is_playing() {
        for buffer in buffers.iter_mut() {
            buffer.fill(0.0);
        }
        let mut slices: Vec<&mut [f32]> = buffers.iter_mut().map(|b| b.as_mut_slice()).collect();
        processor.process_block(&[], &mut slices);
        drop(slices);

        for frame in 0..block_size {
            for buffer in &buffers {
                writer.write_sample(buffer[frame])?;
            }
        }
        blocks += 1;
    }
    writer.finalize()?;

    let done = processor.sink().iter().filter(|e| e.is_done()).count();
    println!(
        "Rendered {} samples in {} blocks of {} frames, {} done event(s)",
        total, blocks, block_size, done
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ProcessorConfig::default().with_frame_size(cli.frame_size);
    if let Some(gain) = cli.gain {
        config = config.with_playback_gain(gain);
    }
    config.validate()?;

    let mut processor = StreamProcessor::new(config);

    match cli.command {
        Command::Capture { input, output } => capture(&mut processor, &input, &output),
        Command::Playback {
            input,
            output,
            block_size,
            channels,
        } => playback(&mut processor, &input, &output, block_size, channels),
    }
}
