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

use crate::box_filter::{
    add_pixel, pixel, pixel_mut, slide_pixel, store_pixel, store_sums, Accumulator,
    PeriodicSums,
};
use crate::edge_mode::mirror_index;
use crate::primitives::PrimitiveCast;
use crate::to_storage::ToStorage;

// Reflection excludes the edge sample: -1 reads 1, w reads w - 2.

pub(crate) fn box_row_mirror_small<T, J, const CN: usize>(src: &[T], dst: &mut [T], radius: usize)
where
    T: Copy + PrimitiveCast<J>,
    J: Accumulator,
    f32: ToStorage<T>,
{
    let width = src.len() / CN;
    let r = radius;
    let iarr = 1f32 / (r * 2 + 1) as f32;
    let mut acc = [J::default(); CN];

    // reflected part of [-r - 1, -1]
    for lid in 1..=r + 1 {
        add_pixel(&mut acc, pixel::<T, CN>(src, lid));
    }
    for x in 0..r {
        add_pixel(&mut acc, pixel::<T, CN>(src, x));
    }

    // left edge is out, right edge is in
    for ti in 0..=r {
        slide_pixel(
            &mut acc,
            pixel::<T, CN>(src, ti + r),
            pixel::<T, CN>(src, r + 1 - ti),
        );
        store_pixel(pixel_mut::<T, CN>(dst, ti), &acc, iarr);
    }

    // both edges are in
    for ti in r + 1..width - r {
        slide_pixel(
            &mut acc,
            pixel::<T, CN>(src, ti + r),
            pixel::<T, CN>(src, ti - r - 1),
        );
        store_pixel(pixel_mut::<T, CN>(dst, ti), &acc, iarr);
    }

    // left edge is in, right edge is out
    for ti in width - r..width {
        slide_pixel(
            &mut acc,
            pixel::<T, CN>(src, 2 * width - 2 - (ti + r)),
            pixel::<T, CN>(src, ti - r - 1),
        );
        store_pixel(pixel_mut::<T, CN>(dst, ti), &acc, iarr);
    }
}

pub(crate) fn box_row_mirror_mid<T, J, const CN: usize>(src: &[T], dst: &mut [T], radius: usize)
where
    T: Copy + PrimitiveCast<J>,
    J: Accumulator,
    f32: ToStorage<T>,
{
    let width = src.len() / CN;
    let w = width as isize;
    let r = radius;
    let iarr = 1f32 / (r * 2 + 1) as f32;
    let mut acc = [J::default(); CN];

    // with r = w - 1 the leading sample at -r - 1 folds twice, so left side
    // goes through the full reflection
    let left = |li: isize| mirror_index(0, w, li);

    for li in -(r as isize) - 1..0 {
        add_pixel(&mut acc, pixel::<T, CN>(src, left(li)));
    }
    for x in 0..r {
        add_pixel(&mut acc, pixel::<T, CN>(src, x));
    }

    // left edge is out, right edge is in
    for ti in 0..width - r {
        slide_pixel(
            &mut acc,
            pixel::<T, CN>(src, ti + r),
            pixel::<T, CN>(src, left(ti as isize - r as isize - 1)),
        );
        store_pixel(pixel_mut::<T, CN>(dst, ti), &acc, iarr);
    }

    // both edges are out
    for ti in width - r..r + 1 {
        slide_pixel(
            &mut acc,
            pixel::<T, CN>(src, 2 * width - 2 - (ti + r)),
            pixel::<T, CN>(src, left(ti as isize - r as isize - 1)),
        );
        store_pixel(pixel_mut::<T, CN>(dst, ti), &acc, iarr);
    }

    // left edge is in, right edge is out
    for ti in (r + 1).max(width - r)..width {
        slide_pixel(
            &mut acc,
            pixel::<T, CN>(src, 2 * width - 2 - (ti + r)),
            pixel::<T, CN>(src, ti - r - 1),
        );
        store_pixel(pixel_mut::<T, CN>(dst, ti), &acc, iarr);
    }
}

/// Window may fold over the row many times; reflect-101 extension repeats
/// with period `2 * (w - 1)`, so each output is a periodic window sum.
pub(crate) fn box_row_mirror_large<T, J, const CN: usize>(src: &[T], dst: &mut [T], radius: usize)
where
    T: Copy + PrimitiveCast<J>,
    J: Accumulator,
    f32: ToStorage<T>,
{
    let width = src.len() / CN;
    let w = width as isize;
    let iarr = 1f32 / (radius * 2 + 1) as f32;
    let period = if width == 1 { 1 } else { 2 * (width - 1) };
    let sums = PeriodicSums::<J, CN>::new(src, period, |k| mirror_index(0, w, k as isize));

    for (ti, dst) in dst.chunks_exact_mut(CN).enumerate() {
        store_sums(dst, &sums.window(ti, radius), iarr);
    }
}
