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
    add_pixel, pixel, pixel_mut, slide_pixel, store_pixel, sub_pixel, Accumulator,
};
use crate::primitives::PrimitiveCast;
use crate::to_storage::ToStorage;

// Samples outside of the row are never summed, so each output is divided by
// the count of samples that really are in the window: from `r + 1` at the
// very edge up to `2r + 1` once the window is fully inside.

#[inline(always)]
fn leading_sum<T, J, const CN: usize>(src: &[T], radius: usize) -> [J; CN]
where
    T: Copy + PrimitiveCast<J>,
    J: Accumulator,
{
    let mut acc = [J::default(); CN];
    for x in 0..radius {
        add_pixel(&mut acc, pixel::<T, CN>(src, x));
    }
    acc
}

pub(crate) fn box_row_crop_small<T, J, const CN: usize>(src: &[T], dst: &mut [T], radius: usize)
where
    T: Copy + PrimitiveCast<J>,
    J: Accumulator,
    f32: ToStorage<T>,
{
    let width = src.len() / CN;
    let r = radius;
    let iarr = 1f32 / (r * 2 + 1) as f32;
    let mut acc = leading_sum::<T, J, CN>(src, r);

    // left edge is out, right edge is in
    for ti in 0..=r {
        let ri = ti + r;
        add_pixel(&mut acc, pixel::<T, CN>(src, ri));
        store_pixel(pixel_mut::<T, CN>(dst, ti), &acc, 1f32 / (ri + 1) as f32);
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
        let li = ti - r - 1;
        sub_pixel(&mut acc, pixel::<T, CN>(src, li));
        store_pixel(pixel_mut::<T, CN>(dst, ti), &acc, 1f32 / (width - li - 1) as f32);
    }
}

pub(crate) fn box_row_crop_mid<T, J, const CN: usize>(src: &[T], dst: &mut [T], radius: usize)
where
    T: Copy + PrimitiveCast<J>,
    J: Accumulator,
    f32: ToStorage<T>,
{
    let width = src.len() / CN;
    let r = radius;
    let iwidth = 1f32 / width as f32;
    let mut acc = leading_sum::<T, J, CN>(src, r);

    // left edge is out, right edge is in
    for ti in 0..width - r {
        let ri = ti + r;
        add_pixel(&mut acc, pixel::<T, CN>(src, ri));
        store_pixel(pixel_mut::<T, CN>(dst, ti), &acc, 1f32 / (ri + 1) as f32);
    }

    // both edges are out, window holds the whole row
    for ti in width - r..r + 1 {
        store_pixel(pixel_mut::<T, CN>(dst, ti), &acc, iwidth);
    }

    // left edge is in, right edge is out
    for ti in (r + 1).max(width - r)..width {
        let li = ti - r - 1;
        sub_pixel(&mut acc, pixel::<T, CN>(src, li));
        store_pixel(pixel_mut::<T, CN>(dst, ti), &acc, 1f32 / (width - li - 1) as f32);
    }
}

/// With `r >= w` every cropped window is the whole row, output is the row mean.
pub(crate) fn box_row_crop_large<T, J, const CN: usize>(src: &[T], dst: &mut [T], _: usize)
where
    T: Copy + PrimitiveCast<J>,
    J: Accumulator,
    f32: ToStorage<T>,
{
    let width = src.len() / CN;
    let iwidth = 1f32 / width as f32;
    let mut acc = [J::default(); CN];
    for px in src.chunks_exact(CN) {
        add_pixel(&mut acc, px);
    }
    for dst in dst.chunks_exact_mut(CN) {
        store_pixel(dst, &acc, iwidth);
    }
}
