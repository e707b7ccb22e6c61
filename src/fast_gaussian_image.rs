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
use crate::{
    box_gaussian, box_gaussian_f32, box_gaussian_u16, BlurError, BlurImage, BlurImageMut,
    BorderPolicy, CLTParameters, FastBlurChannels, ThreadingPolicy,
};
use image::{DynamicImage, ImageBuffer, Pixel};
use std::fmt::Debug;

type BlurFn<T> = fn(
    &BlurImage<T>,
    &mut BlurImageMut<T>,
    CLTParameters,
    BorderPolicy,
    ThreadingPolicy,
) -> Result<(), BlurError>;

fn blur_buffer<P, T>(
    buffer: &ImageBuffer<P, Vec<T>>,
    blur: BlurFn<T>,
    parameters: CLTParameters,
    policy: BorderPolicy,
    threading_policy: ThreadingPolicy,
) -> Result<ImageBuffer<P, Vec<T>>, BlurError>
where
    P: Pixel<Subpixel = T>,
    T: Copy + Default + Debug,
{
    let channels = FastBlurChannels::try_from(P::CHANNEL_COUNT as usize)?;
    let source = BlurImage::borrow(buffer.as_raw(), buffer.width(), buffer.height(), channels);
    let mut dst = BlurImageMut::default();
    blur(&source, &mut dst, parameters, policy, threading_policy)?;
    let data = match dst.data {
        crate::BufferStore::Owned(vec) => vec,
        crate::BufferStore::Borrowed(slice) => slice.to_vec(),
    };
    ImageBuffer::from_raw(buffer.width(), buffer.height(), data).ok_or(BlurError::ImagesMustMatch)
}

/// Performs gaussian blur approximation on the image.
///
/// 8 and 16 bit images keep their depth, `f32` images are blurred without rounding,
/// any other layout is converted to RGBA8 first.
///
/// NOTE: Alpha must be associated if this image with alpha
///
/// # Arguments
///
/// * `image`: Dynamic image provided by image crate
/// * `parameters` - See [CLTParameters] for more info.
/// * `policy` - See [BorderPolicy] for more info.
/// * `threading_policy` - Threads usage policy
pub fn fast_gaussian_blur_image(
    image: &DynamicImage,
    parameters: CLTParameters,
    policy: BorderPolicy,
    threading_policy: ThreadingPolicy,
) -> Result<DynamicImage, BlurError> {
    let blurred = match image {
        DynamicImage::ImageLuma8(img) => DynamicImage::ImageLuma8(blur_buffer(
            img,
            box_gaussian,
            parameters,
            policy,
            threading_policy,
        )?),
        DynamicImage::ImageLumaA8(img) => DynamicImage::ImageLumaA8(blur_buffer(
            img,
            box_gaussian,
            parameters,
            policy,
            threading_policy,
        )?),
        DynamicImage::ImageRgb8(img) => DynamicImage::ImageRgb8(blur_buffer(
            img,
            box_gaussian,
            parameters,
            policy,
            threading_policy,
        )?),
        DynamicImage::ImageRgba8(img) => DynamicImage::ImageRgba8(blur_buffer(
            img,
            box_gaussian,
            parameters,
            policy,
            threading_policy,
        )?),
        DynamicImage::ImageLuma16(img) => DynamicImage::ImageLuma16(blur_buffer(
            img,
            box_gaussian_u16,
            parameters,
            policy,
            threading_policy,
        )?),
        DynamicImage::ImageLumaA16(img) => DynamicImage::ImageLumaA16(blur_buffer(
            img,
            box_gaussian_u16,
            parameters,
            policy,
            threading_policy,
        )?),
        DynamicImage::ImageRgb16(img) => DynamicImage::ImageRgb16(blur_buffer(
            img,
            box_gaussian_u16,
            parameters,
            policy,
            threading_policy,
        )?),
        DynamicImage::ImageRgba16(img) => DynamicImage::ImageRgba16(blur_buffer(
            img,
            box_gaussian_u16,
            parameters,
            policy,
            threading_policy,
        )?),
        DynamicImage::ImageRgb32F(img) => DynamicImage::ImageRgb32F(blur_buffer(
            img,
            box_gaussian_f32,
            parameters,
            policy,
            threading_policy,
        )?),
        DynamicImage::ImageRgba32F(img) => DynamicImage::ImageRgba32F(blur_buffer(
            img,
            box_gaussian_f32,
            parameters,
            policy,
            threading_policy,
        )?),
        _ => DynamicImage::ImageRgba8(blur_buffer(
            &image.to_rgba8(),
            box_gaussian,
            parameters,
            policy,
            threading_policy,
        )?),
    };
    Ok(blurred)
}
