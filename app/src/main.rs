// Copyright (c) Radzivon Bartoshyk. All rights reserved.

//
// Redistribution and use in source and binary forms, with or without modification,
// are permitted provided that the following conditions are met:
//
// 1.  Redistributions of source code must retain the above copyright notice, this
// list of conditions and the following disclaimer.
//
// 2.  Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3.  Neither the name of the copyright holder nor the names of its
// contributors may be used to endorse or promote products derived from
// this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
use boxgauss::{
    box_gaussian, BlurImage, BlurImageMut, BorderPolicy, CLTParameters, FastBlurChannels,
    ThreadingPolicy,
};
use clap::Parser;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Gaussian blur approximation by repeated box blurs
///
/// Blurs the image twice, once on all available cores and once on a single
/// thread, reports both timings and writes the multi-threaded result.
#[derive(Parser, Debug)]
#[command(name = "fast-blur")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    Blur with sigma 5 and defaults (3 passes, mirror border):
        fast-blur input.png output.png 5

    Six passes, samples beyond the edge are replicated:
        fast-blur input.jpg output.jpg 12.5 6 extend")]
struct Cli {
    /// Input image (png, jpg, bmp, ...)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output image, format follows extension: png, jpg/jpeg or bmp
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Gaussian standard deviation, must be positive
    #[arg(value_name = "SIGMA")]
    sigma: f32,

    /// Box passes per axis, 1..=10
    #[arg(value_name = "PASSES", default_value_t = 3)]
    passes: usize,

    /// Border policy: mirror, extend, crop or wrap
    #[arg(value_name = "BORDER", default_value = "mirror")]
    border: BorderPolicy,
}

/// 8-bit samples keeping channels count of the decoded image.
struct Planes {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: FastBlurChannels,
}

impl Planes {
    fn from_image(img: DynamicImage) -> Planes {
        let (width, height) = (img.width(), img.height());
        let (data, channels) = match img.color().channel_count() {
            1 => (img.to_luma8().into_raw(), FastBlurChannels::Plane),
            2 => (img.to_luma_alpha8().into_raw(), FastBlurChannels::Channels2),
            3 => (img.to_rgb8().into_raw(), FastBlurChannels::Channels3),
            _ => (img.to_rgba8().into_raw(), FastBlurChannels::Channels4),
        };
        Planes {
            data,
            width,
            height,
            channels,
        }
    }

    fn into_image(self, data: Vec<u8>) -> Option<DynamicImage> {
        let (w, h) = (self.width, self.height);
        match self.channels {
            FastBlurChannels::Plane => image::GrayImage::from_raw(w, h, data).map(Into::into),
            FastBlurChannels::Channels2 => {
                image::GrayAlphaImage::from_raw(w, h, data).map(Into::into)
            }
            FastBlurChannels::Channels3 => image::RgbImage::from_raw(w, h, data).map(Into::into),
            FastBlurChannels::Channels4 => image::RgbaImage::from_raw(w, h, data).map(Into::into),
        }
    }
}

fn blur_timed(
    planes: &Planes,
    parameters: CLTParameters,
    border: BorderPolicy,
    threading_policy: ThreadingPolicy,
) -> Result<(Vec<u8>, Duration), Box<dyn Error>> {
    let src = BlurImage::borrow(&planes.data, planes.width, planes.height, planes.channels);
    let mut dst = BlurImageMut::alloc(planes.width, planes.height, planes.channels);
    let start = Instant::now();
    box_gaussian(&src, &mut dst, parameters, border, threading_policy)?;
    let elapsed = start.elapsed();
    Ok((dst.data.borrow().to_vec(), elapsed))
}

/// Maps output extension to a format, unknown extensions are replaced by png.
fn output_target(path: &Path) -> (PathBuf, ImageFormat) {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match extension.as_deref() {
        Some("png") => (path.to_path_buf(), ImageFormat::Png),
        Some("jpg") | Some("jpeg") => (path.to_path_buf(), ImageFormat::Jpeg),
        Some("bmp") => (path.to_path_buf(), ImageFormat::Bmp),
        other => {
            let replaced = path.with_extension("png");
            warn!(
                "unsupported output extension {:?}, writing {} instead",
                other.unwrap_or(""),
                replaced.display()
            );
            (replaced, ImageFormat::Png)
        }
    }
}

fn save(img: &DynamicImage, path: &Path, format: ImageFormat) -> Result<(), Box<dyn Error>> {
    match format {
        ImageFormat::Jpeg => {
            let writer = BufWriter::new(File::create(path)?);
            let encoder = JpegEncoder::new_with_quality(writer, 90);
            // jpeg has no alpha
            if img.color().has_color() {
                DynamicImage::ImageRgb8(img.to_rgb8()).write_with_encoder(encoder)?;
            } else {
                DynamicImage::ImageLuma8(img.to_luma8()).write_with_encoder(encoder)?;
            }
        }
        _ => img.save_with_format(path, format)?,
    }
    Ok(())
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let img = ImageReader::open(&cli.input)?
        .with_guessed_format()?
        .decode()?;
    let planes = Planes::from_image(img);
    let parameters = CLTParameters::new(cli.sigma).with_passes(cli.passes);

    println!("Source image: {}", cli.input.display());
    println!(
        "Size: {}x{} pixels ({} channels), {:.2} MB",
        planes.width,
        planes.height,
        planes.channels.channels(),
        planes.data.len() as f64 / (1024. * 1024.)
    );
    println!(
        "Sigma: {:.2}, passes: {}, border: {}",
        cli.sigma, cli.passes, cli.border
    );

    let threads =
        ThreadingPolicy::Adaptive.thread_count(planes.width as usize, planes.height as usize);
    let (blurred, multi) =
        blur_timed(&planes, parameters, cli.border, ThreadingPolicy::Adaptive)?;
    println!("Multi-threaded ({threads} threads): {:.3} ms", millis(multi));

    let (_, single) = blur_timed(&planes, parameters, cli.border, ThreadingPolicy::Single)?;
    println!("Single-threaded: {:.3} ms", millis(single));

    if !multi.is_zero() {
        println!(
            "Speed-up: {:.2}x",
            single.as_secs_f64() / multi.as_secs_f64()
        );
    }

    let (path, format) = output_target(&cli.output);
    let output = planes
        .into_image(blurred)
        .ok_or("blurred buffer does not match image dimensions")?;
    save(&output, &path, format)?;
    info!("written {}", path.display());
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
