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
mod box_blur;
mod extend;
mod kernel_crop;
mod mirror;
mod wrap;

use crate::primitives::PrimitiveCast;
use crate::to_storage::ToStorage;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

pub use box_blur::*;

/// Sliding window algorithm selector, derived from radius and row width.
///
/// Every class produces the same result, they differ only in which
/// geometric phases a window passes through while sliding along a row.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum KernelSize {
    /// `radius < width / 2`, window enters, stays fully inside, then exits.
    Small,
    /// `width / 2 <= radius < width`, window may stick out on both sides at once.
    Mid,
    /// `radius >= width`, every window covers the whole row.
    Large,
}

impl KernelSize {
    #[inline]
    pub fn classify(radius: usize, width: usize) -> KernelSize {
        if radius < width / 2 {
            KernelSize::Small
        } else if radius < width {
            KernelSize::Mid
        } else {
            KernelSize::Large
        }
    }
}

/// Running sum type of a row kernel.
pub(crate) trait Accumulator:
    Copy
    + Default
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + AddAssign
    + SubAssign
    + PrimitiveCast<f32>
{
}

impl<J> Accumulator for J where
    J: Copy
        + Default
        + Send
        + Sync
        + 'static
        + Add<Output = J>
        + Sub<Output = J>
        + Mul<Output = J>
        + AddAssign
        + SubAssign
        + PrimitiveCast<f32>
{
}

/// Filters one row: `(source row, destination row, radius)`.
pub(crate) type RowPass<T> = fn(&[T], &mut [T], usize);

#[inline(always)]
pub(crate) fn pixel<T, const CN: usize>(row: &[T], x: usize) -> &[T] {
    &row[x * CN..(x + 1) * CN]
}

#[inline(always)]
pub(crate) fn pixel_mut<T, const CN: usize>(row: &mut [T], x: usize) -> &mut [T] {
    &mut row[x * CN..(x + 1) * CN]
}

#[inline(always)]
pub(crate) fn add_pixel<T, J>(acc: &mut [J], px: &[T])
where
    T: Copy + PrimitiveCast<J>,
    J: Accumulator,
{
    for (a, &v) in acc.iter_mut().zip(px.iter()) {
        *a += v.cast_();
    }
}

#[inline(always)]
pub(crate) fn sub_pixel<T, J>(acc: &mut [J], px: &[T])
where
    T: Copy + PrimitiveCast<J>,
    J: Accumulator,
{
    for (a, &v) in acc.iter_mut().zip(px.iter()) {
        *a -= v.cast_();
    }
}

/// Window moved by one sample: `incoming` enters it, `outgoing` leaves it.
#[inline(always)]
pub(crate) fn slide_pixel<T, J>(acc: &mut [J], incoming: &[T], outgoing: &[T])
where
    T: Copy + PrimitiveCast<J>,
    J: Accumulator,
{
    for ((a, &i), &o) in acc.iter_mut().zip(incoming.iter()).zip(outgoing.iter()) {
        *a += i.cast_() - o.cast_();
    }
}

#[inline(always)]
pub(crate) fn store_pixel<T, J>(dst: &mut [T], acc: &[J], scale: f32)
where
    T: Copy + 'static,
    J: Accumulator,
    f32: ToStorage<T>,
{
    for (d, &a) in dst.iter_mut().zip(acc.iter()) {
        *d = (a.cast_() * scale).to_();
    }
}

/// Prefix sums over two periods of a periodic row extension.
///
/// A window of any length is a count of whole periods plus one prefix
/// difference, so partial sums never hold more than two periods of samples.
pub(crate) struct PeriodicSums<J, const CN: usize> {
    prefix: Vec<[J; CN]>,
    period: usize,
}

impl<J: Accumulator, const CN: usize> PeriodicSums<J, CN> {
    /// `index` maps a position inside the period to a pixel of the row.
    pub(crate) fn new<T>(row: &[T], period: usize, index: impl Fn(usize) -> usize) -> Self
    where
        T: Copy + PrimitiveCast<J>,
    {
        let mut prefix = Vec::with_capacity(2 * period + 1);
        let mut acc = [J::default(); CN];
        prefix.push(acc);
        for k in 0..2 * period {
            add_pixel(&mut acc, pixel::<T, CN>(row, index(k % period)));
            prefix.push(acc);
        }
        PeriodicSums { prefix, period }
    }

    /// Sums of `[center - radius, center + radius]`, `2 * radius + 1` must not overflow.
    pub(crate) fn window(&self, center: usize, radius: usize) -> [f32; CN] {
        let period = self.period;
        let length = radius * 2 + 1;
        let full = (length / period) as f32;
        let rem = length % period;
        let start = (center % period + period - radius % period) % period;
        let total = &self.prefix[period];
        let lo = &self.prefix[start];
        let hi = &self.prefix[start + rem];
        let mut sums = [0f32; CN];
        for (((s, &t), &h), &l) in sums
            .iter_mut()
            .zip(total.iter())
            .zip(hi.iter())
            .zip(lo.iter())
        {
            let t: f32 = t.cast_();
            let part: f32 = (h - l).cast_();
            *s = full * t + part;
        }
        sums
    }
}

#[inline(always)]
pub(crate) fn store_sums<T, const CN: usize>(dst: &mut [T], sums: &[f32; CN], scale: f32)
where
    T: Copy + 'static,
    f32: ToStorage<T>,
{
    for (d, &s) in dst.iter_mut().zip(sums.iter()) {
        *d = (s * scale).to_();
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_classes() {
        assert_eq!(KernelSize::classify(0, 1), KernelSize::Mid);
        assert_eq!(KernelSize::classify(1, 1), KernelSize::Large);
        assert_eq!(KernelSize::classify(2, 10), KernelSize::Small);
        assert_eq!(KernelSize::classify(4, 10), KernelSize::Small);
        assert_eq!(KernelSize::classify(5, 10), KernelSize::Mid);
        assert_eq!(KernelSize::classify(9, 10), KernelSize::Mid);
        assert_eq!(KernelSize::classify(10, 10), KernelSize::Large);
        assert_eq!(KernelSize::classify(3, 7), KernelSize::Mid);
        assert_eq!(KernelSize::classify(2, 7), KernelSize::Small);
    }

    #[test]
    fn test_periodic_window_sums() {
        let row = [1u8, 2, 3];
        let sums = PeriodicSums::<i64, 1>::new(&row, 3, |k| k);
        // [-1, 1] wraps to 3 + 1 + 2
        assert_eq!(sums.window(0, 1), [6.]);
        // nine samples are three whole periods
        assert_eq!(sums.window(2, 4), [18.]);
        // [-3, 5] starts at pixel 0, three periods
        assert_eq!(sums.window(1, 4), [18.]);
        // [0, 4] is 1 2 3 1 2
        assert_eq!(sums.window(2, 2), [9.]);

        let rgb = [10u16, 20, 30, 40, 50, 60];
        let sums = PeriodicSums::<i64, 3>::new(&rgb, 2, |k| k);
        // [-1, 1] is pixel 1, 0, 1
        assert_eq!(sums.window(0, 1), [90., 120., 150.]);
    }
}
