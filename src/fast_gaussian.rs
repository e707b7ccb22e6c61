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
use crate::box_filter::{box_blur_pass_unchecked, BoxBlurRowPass};
use crate::pass_planner::plan_box_radii;
use crate::transpose::{transpose_units, transpose_unchecked};
use crate::util::{check_pair_size, check_radius, check_slice_size};
use crate::{BlurError, BlurImage, BlurImageMut, BorderPolicy, FastBlurChannels, ThreadingPolicy};
use half::f16;
use std::fmt::Debug;

/// Maximum amount of box passes per axis.
pub const MAX_PASSES: usize = 10;

/// Central limit theorem based blurs parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CLTParameters {
    /// Gaussian standard deviation, must be positive
    pub sigma: f32,
    /// Box passes per axis, `1..=MAX_PASSES`
    pub passes: usize,
}

impl CLTParameters {
    /// Three passes, which is already very close to gaussian.
    pub fn new(sigma: f32) -> CLTParameters {
        CLTParameters { sigma, passes: 3 }
    }

    pub fn with_passes(self, passes: usize) -> CLTParameters {
        CLTParameters { passes, ..self }
    }

    fn validate(&self) -> Result<(), BlurError> {
        if !self.sigma.is_finite() || self.sigma <= 0. {
            return Err(BlurError::NegativeOrZeroSigma);
        }
        if self.passes == 0 || self.passes > MAX_PASSES {
            return Err(BlurError::UnsupportedPassCount(self.passes));
        }
        Ok(())
    }
}

/// Names one buffer of a working pair.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum BufferSlot {
    First,
    Second,
}

impl BufferSlot {
    #[inline]
    pub fn other(self) -> BufferSlot {
        match self {
            BufferSlot::First => BufferSlot::Second,
            BufferSlot::Second => BufferSlot::First,
        }
    }

    /// Picks the buffer this slot refers to.
    #[inline]
    pub fn select<'a, T>(self, first: &'a [T], second: &'a [T]) -> &'a [T] {
        match self {
            BufferSlot::First => first,
            BufferSlot::Second => second,
        }
    }
}

/// Runs `step` from the live buffer into the spare one, spare becomes live.
#[inline]
fn swap_step<T>(
    first: &mut [T],
    second: &mut [T],
    live: BufferSlot,
    step: impl FnOnce(&[T], &mut [T]),
) -> BufferSlot {
    match live {
        BufferSlot::First => step(first, second),
        BufferSlot::Second => step(second, first),
    }
    live.other()
}

fn fast_box_gaussian_impl<T>(
    first: &mut [T],
    second: &mut [T],
    width: usize,
    height: usize,
    channels: FastBlurChannels,
    parameters: CLTParameters,
    policy: BorderPolicy,
    threading_policy: ThreadingPolicy,
) -> Result<BufferSlot, BlurError>
where
    T: Copy + Send + Sync + BoxBlurRowPass<T>,
{
    check_slice_size(first, width, height, channels.channels())?;
    check_pair_size(first, second)?;
    parameters.validate()?;
    let plan = plan_box_radii(parameters.sigma, parameters.passes)?;
    for &radius in plan.radii.iter() {
        check_radius(radius)?;
    }

    tracing::debug!(
        width,
        height,
        channels = channels.channels(),
        sigma = parameters.sigma,
        achieved_sigma = plan.sigma,
        radii = ?plan.radii,
        %policy,
        "fast box gaussian"
    );

    let mut live = BufferSlot::First;
    if plan.radii.iter().all(|&r| r == 0) {
        return Ok(live);
    }

    let rows_threads = threading_policy.workers_for(width, height, height);
    let columns_threads = threading_policy.workers_for(height, width, width);
    let transpose_threads =
        threading_policy.workers_for(width, height, transpose_units(width, channels));
    let transpose_back_threads =
        threading_policy.workers_for(height, width, transpose_units(height, channels));

    for &radius in plan.radii.iter() {
        tracing::trace!(radius, ?live, "horizontal pass");
        live = swap_step(first, second, live, |src, dst| {
            box_blur_pass_unchecked(src, dst, width, height, channels, radius, policy, rows_threads)
        });
    }

    live = swap_step(first, second, live, |src, dst| {
        transpose_unchecked(src, dst, width, height, channels, transpose_threads)
    });

    // rows of the transposed image are columns of the source
    for &radius in plan.radii.iter() {
        tracing::trace!(radius, ?live, "vertical pass");
        live = swap_step(first, second, live, |src, dst| {
            box_blur_pass_unchecked(
                src,
                dst,
                height,
                width,
                channels,
                radius,
                policy,
                columns_threads,
            )
        });
    }

    live = swap_step(first, second, live, |src, dst| {
        transpose_unchecked(src, dst, height, width, channels, transpose_back_threads)
    });

    tracing::trace!(?live, "fast box gaussian done");
    Ok(live)
}

fn box_gaussian_impl<T>(
    image: &BlurImage<T>,
    dst_image: &mut BlurImageMut<T>,
    parameters: CLTParameters,
    policy: BorderPolicy,
    threading_policy: ThreadingPolicy,
) -> Result<(), BlurError>
where
    T: Copy + Default + Debug + Send + Sync + BoxBlurRowPass<T>,
{
    parameters.validate()?;
    plan_box_radii(parameters.sigma, parameters.passes)?;
    image.copy_to_mut(dst_image)?;
    let width = image.width as usize;
    let height = image.height as usize;
    let channels = image.channels;
    let dst = dst_image.data.borrow_mut();
    let mut scratch = vec![T::default(); dst.len()];
    let slot = fast_box_gaussian_impl(
        dst,
        &mut scratch,
        width,
        height,
        channels,
        parameters,
        policy,
        threading_policy,
    )?;
    if slot == BufferSlot::Second {
        dst.copy_from_slice(&scratch);
    }
    Ok(())
}

/// Approximates gaussian blur by repeated box blurs, in place on a buffer pair.
///
/// `first` must hold the image, `second` is scratch space of the same size.
/// Every pass reads one buffer and writes another, so the image moves between
/// them; returned [BufferSlot] tells which buffer holds the result.
///
/// Runs `parameters.passes` horizontal passes, transposes, runs the same passes
/// again and transposes back. Time does not depend on sigma.
///
/// # Arguments
///
/// * `first` - Source image, `width * height * channels` samples.
/// * `second` - Scratch buffer, same length as `first`.
/// * `parameters` - See [CLTParameters] for more info.
/// * `policy` - See [BorderPolicy] for more info.
/// * `threading_policy` - Result does not depend on it.
pub fn fast_box_gaussian(
    first: &mut [u8],
    second: &mut [u8],
    width: usize,
    height: usize,
    channels: FastBlurChannels,
    parameters: CLTParameters,
    policy: BorderPolicy,
    threading_policy: ThreadingPolicy,
) -> Result<BufferSlot, BlurError> {
    fast_box_gaussian_impl(
        first,
        second,
        width,
        height,
        channels,
        parameters,
        policy,
        threading_policy,
    )
}

/// 16-bit version of [fast_box_gaussian].
pub fn fast_box_gaussian_u16(
    first: &mut [u16],
    second: &mut [u16],
    width: usize,
    height: usize,
    channels: FastBlurChannels,
    parameters: CLTParameters,
    policy: BorderPolicy,
    threading_policy: ThreadingPolicy,
) -> Result<BufferSlot, BlurError> {
    fast_box_gaussian_impl(
        first,
        second,
        width,
        height,
        channels,
        parameters,
        policy,
        threading_policy,
    )
}

/// `f32` version of [fast_box_gaussian], values are not rounded between passes.
pub fn fast_box_gaussian_f32(
    first: &mut [f32],
    second: &mut [f32],
    width: usize,
    height: usize,
    channels: FastBlurChannels,
    parameters: CLTParameters,
    policy: BorderPolicy,
    threading_policy: ThreadingPolicy,
) -> Result<BufferSlot, BlurError> {
    fast_box_gaussian_impl(
        first,
        second,
        width,
        height,
        channels,
        parameters,
        policy,
        threading_policy,
    )
}

/// `f16` version of [fast_box_gaussian].
pub fn fast_box_gaussian_f16(
    first: &mut [f16],
    second: &mut [f16],
    width: usize,
    height: usize,
    channels: FastBlurChannels,
    parameters: CLTParameters,
    policy: BorderPolicy,
    threading_policy: ThreadingPolicy,
) -> Result<BufferSlot, BlurError> {
    fast_box_gaussian_impl(
        first,
        second,
        width,
        height,
        channels,
        parameters,
        policy,
        threading_policy,
    )
}

/// Performs gaussian blur approximation on the image.
///
/// Result is always written into `dst_image`, owned destination is resized to the source.
///
/// # Arguments
///
/// * `image` - Source immutable image, see [BlurImage] for more info.
/// * `dst_image` - Destination mutable image, see [BlurImageMut] for more info.
/// * `parameters` - See [CLTParameters] for more info.
/// * `policy` - See [BorderPolicy] for more info.
pub fn box_gaussian(
    image: &BlurImage<u8>,
    dst_image: &mut BlurImageMut<u8>,
    parameters: CLTParameters,
    policy: BorderPolicy,
    threading_policy: ThreadingPolicy,
) -> Result<(), BlurError> {
    box_gaussian_impl(image, dst_image, parameters, policy, threading_policy)
}

/// 16-bit version of [box_gaussian].
pub fn box_gaussian_u16(
    image: &BlurImage<u16>,
    dst_image: &mut BlurImageMut<u16>,
    parameters: CLTParameters,
    policy: BorderPolicy,
    threading_policy: ThreadingPolicy,
) -> Result<(), BlurError> {
    box_gaussian_impl(image, dst_image, parameters, policy, threading_policy)
}

/// `f32` version of [box_gaussian].
pub fn box_gaussian_f32(
    image: &BlurImage<f32>,
    dst_image: &mut BlurImageMut<f32>,
    parameters: CLTParameters,
    policy: BorderPolicy,
    threading_policy: ThreadingPolicy,
) -> Result<(), BlurError> {
    box_gaussian_impl(image, dst_image, parameters, policy, threading_policy)
}

/// `f16` version of [box_gaussian].
pub fn box_gaussian_f16(
    image: &BlurImage<f16>,
    dst_image: &mut BlurImageMut<f16>,
    parameters: CLTParameters,
    policy: BorderPolicy,
    threading_policy: ThreadingPolicy,
) -> Result<(), BlurError> {
    box_gaussian_impl(image, dst_image, parameters, policy, threading_policy)
}
