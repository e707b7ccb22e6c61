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
use crate::util::{check_pair_size, check_slice_size};
use crate::{BlurError, FastBlurChannels, ThreadingPolicy};
use half::f16;
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
use rayon::prelude::ParallelSliceMut;

/// Tile edge in pixels, so tile working set stays the same for any channels count.
#[inline]
pub(crate) const fn tile_size(cn: usize) -> usize {
    256 / cn
}

/// Writes one strip of destination rows, i.e. source columns `x0..x0 + strip_rows`,
/// walking source tile by tile.
#[inline(always)]
fn transpose_strip<T: Copy, const CN: usize>(
    src: &[T],
    dst_strip: &mut [T],
    width: usize,
    height: usize,
    x0: usize,
) {
    let tile = tile_size(CN);
    let src_stride = width * CN;
    let dst_stride = height * CN;
    let strip_rows = dst_strip.len() / dst_stride;

    for y0 in (0..height).step_by(tile) {
        let y1 = (y0 + tile).min(height);
        for dx in 0..strip_rows {
            let dst_row = &mut dst_strip[dx * dst_stride..(dx + 1) * dst_stride];
            let sx = (x0 + dx) * CN;
            for y in y0..y1 {
                let src_px = &src[y * src_stride + sx..y * src_stride + sx + CN];
                dst_row[y * CN..(y + 1) * CN].copy_from_slice(src_px);
            }
        }
    }
}

fn transpose_impl<T: Copy + Send + Sync, const CN: usize>(
    src: &[T],
    dst: &mut [T],
    width: usize,
    height: usize,
    thread_count: usize,
) {
    let tile = tile_size(CN);
    let strip_length = tile * height * CN;

    let pool = if thread_count > 1 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(thread_count)
            .build()
            .ok()
    } else {
        None
    };

    if let Some(pool) = &pool {
        pool.install(|| {
            dst.par_chunks_mut(strip_length)
                .enumerate()
                .for_each(|(strip, dst_strip)| {
                    transpose_strip::<T, CN>(src, dst_strip, width, height, strip * tile);
                });
        });
    } else {
        for (strip, dst_strip) in dst.chunks_mut(strip_length).enumerate() {
            transpose_strip::<T, CN>(src, dst_strip, width, height, strip * tile);
        }
    }
}

/// Transposes already validated buffers.
pub(crate) fn transpose_unchecked<T: Copy + Send + Sync>(
    src: &[T],
    dst: &mut [T],
    width: usize,
    height: usize,
    channels: FastBlurChannels,
    thread_count: usize,
) {
    let dispatcher = match channels {
        FastBlurChannels::Plane => transpose_impl::<T, 1>,
        FastBlurChannels::Channels2 => transpose_impl::<T, 2>,
        FastBlurChannels::Channels3 => transpose_impl::<T, 3>,
        FastBlurChannels::Channels4 => transpose_impl::<T, 4>,
    };
    dispatcher(src, dst, width, height, thread_count);
}

/// Number of tile columns, every one is an independent unit of work.
#[inline]
pub(crate) fn transpose_units(width: usize, channels: FastBlurChannels) -> usize {
    width.div_ceil(tile_size(channels.channels()))
}

fn transpose_generic<T: Copy + Send + Sync>(
    src: &[T],
    dst: &mut [T],
    width: usize,
    height: usize,
    channels: FastBlurChannels,
    threading_policy: ThreadingPolicy,
) -> Result<(), BlurError> {
    check_slice_size(src, width, height, channels.channels())?;
    check_pair_size(src, dst)?;
    let thread_count =
        threading_policy.workers_for(width, height, transpose_units(width, channels));
    transpose_unchecked(src, dst, width, height, channels, thread_count);
    Ok(())
}

/// Transposes `width x height` image into `height x width` one.
///
/// Sample `(y, x, ch)` of the source becomes sample `(x, y, ch)` of the destination,
/// channels of a pixel stay together.
pub fn transpose(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    channels: FastBlurChannels,
    threading_policy: ThreadingPolicy,
) -> Result<(), BlurError> {
    transpose_generic(src, dst, width, height, channels, threading_policy)
}

/// Transposes 16-bit image, see [transpose] for more info.
pub fn transpose_u16(
    src: &[u16],
    dst: &mut [u16],
    width: usize,
    height: usize,
    channels: FastBlurChannels,
    threading_policy: ThreadingPolicy,
) -> Result<(), BlurError> {
    transpose_generic(src, dst, width, height, channels, threading_policy)
}

/// Transposes `f32` image, see [transpose] for more info.
pub fn transpose_f32(
    src: &[f32],
    dst: &mut [f32],
    width: usize,
    height: usize,
    channels: FastBlurChannels,
    threading_policy: ThreadingPolicy,
) -> Result<(), BlurError> {
    transpose_generic(src, dst, width, height, channels, threading_policy)
}

/// Transposes `f16` image, see [transpose] for more info.
pub fn transpose_f16(
    src: &[f16],
    dst: &mut [f16],
    width: usize,
    height: usize,
    channels: FastBlurChannels,
    threading_policy: ThreadingPolicy,
) -> Result<(), BlurError> {
    transpose_generic(src, dst, width, height, channels, threading_policy)
}
