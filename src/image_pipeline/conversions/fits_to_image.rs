use std::fs::{self, File};
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    conversions::timing::{PipelineTimings, Timer},
    debayer::CpuDebayer,
    depth::BitDepthReducer,
    fits::{FitsImageReader, StandardFitsReader, validate},
    output::{ConversionConfig, ImageWriter, OutputKind, StandardImageWriter},
};

/// FITS decode followed by optional depth reduction and demosaic, then one encoder.
///
/// Stage order is fixed: compressed outputs reduce to 8 bits before
/// demosaicing, the uncompressed output demosaics the full-depth samples.
pub struct FitsConversionPipeline<R: FitsImageReader, W: ImageWriter> {
    reader: R,
    writer: W,
    reducer: BitDepthReducer,
    debayer: CpuDebayer,
    config: ConversionConfig,
}

impl FitsConversionPipeline<StandardFitsReader, StandardImageWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self::with_custom(StandardFitsReader, StandardImageWriter, config)
    }
}

impl<R: FitsImageReader, W: ImageWriter> FitsConversionPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            reducer: BitDepthReducer::new(),
            debayer: CpuDebayer::new(),
            config,
        }
    }

    pub fn convert(&self, input: &mut dyn Read, output: &mut dyn Write) -> Result<()> {
        self.convert_with_timings(input, output).map(|_| ())
    }

    #[instrument(
        skip(self, input, output),
        fields(output_kind = %self.config.output_kind, demosaic = self.config.demosaic)
    )]
    pub fn convert_with_timings(
        &self,
        input: &mut dyn Read,
        output: &mut dyn Write,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        info!("Starting FITS to {} conversion", self.config.output_kind);

        let metadata = timings.record("parse_header", || self.reader.read_header(&mut *input))?;
        let layout = timings.record("validate", || validate(&metadata))?;
        if layout.zero_offset != 0 {
            warn!("BZERO = {} is not applied to sample values", layout.zero_offset);
        }

        let pixels = timings.record("read_pixels", || {
            self.reader.read_pixels(&mut *input, &layout, &self.config)
        })?;

        let pixels = if self.config.output_kind.requires_8bit() {
            timings.record("reduce_depth", || self.reducer.process(&pixels))?
        } else {
            pixels
        };

        let pixels = if self.config.demosaic {
            timings.record("debayer", || self.debayer.process(&pixels))?
        } else {
            pixels
        };

        timings.record("encode", || {
            self.writer.write_image(&pixels, &mut *output, &self.config)
        })?;

        info!(
            width = pixels.width,
            height = pixels.height,
            channels = pixels.channel_count,
            "Conversion complete in {:.3}ms",
            timings.total_duration().as_secs_f64() * 1000.0
        );
        Ok(timings)
    }

    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        self.convert_file_with_timings(input_path, output_path).map(|_| ())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file_with_timings<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        if resolves_to_same_file(input_path, output_path) {
            return Err(ConversionError::OutputWriteError(format!(
                "{}: output would overwrite the input",
                output_path.display()
            )));
        }

        let timer = Timer::start("open_input_file");
        let mut input_file = File::open(input_path).map(BufReader::new).map_err(|e| {
            ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
        })?;
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        // The output file is only created once the whole image has encoded.
        let mut encoded = Vec::new();
        let conversion_timings = self.convert_with_timings(&mut input_file, &mut encoded)?;
        for step in conversion_timings.steps() {
            timings.add_step(step.name.clone(), step.duration);
        }

        let timer = Timer::start("write_output_file");
        fs::write(output_path, &encoded).map_err(|e| {
            ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
        })?;
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        Ok(timings)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}

/// One-shot conversion with the standard reader and writer.
pub fn decode_and_convert(
    input: &mut dyn Read,
    output: &mut dyn Write,
    config: &ConversionConfig,
) -> Result<()> {
    FitsConversionPipeline::new(config.clone()).convert(input, output)
}

/// Whether `output` names the same file as `input` once `..`, symlinks and
/// relative paths are resolved. The output need not exist yet.
fn resolves_to_same_file(input: &Path, output: &Path) -> bool {
    if input == output {
        return true;
    }
    let Ok(input) = fs::canonicalize(input) else {
        return false;
    };
    if let Ok(output) = fs::canonicalize(output) {
        return output == input;
    }
    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    match (fs::canonicalize(parent), output.file_name()) {
        (Ok(parent), Some(name)) => parent.join(name) == input,
        _ => false,
    }
}

/// `input` with its extension replaced by the one `kind` writes.
pub fn default_output_path(input: &Path, kind: OutputKind) -> PathBuf {
    input.with_extension(kind.extension())
}
