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
};
use crate::primitives::PrimitiveCast;
use crate::to_storage::ToStorage;

/// First and last pixel of the row, these replace everything outside.
#[inline(always)]
fn edge_values<T, J, const CN: usize>(src: &[T], width: usize) -> ([J; CN], [J; CN])
where
    T: Copy + PrimitiveCast<J>,
    J: Accumulator,
{
    let mut fv = [J::default(); CN];
    let mut lv = [J::default(); CN];
    add_pixel(&mut fv, pixel::<T, CN>(src, 0));
    add_pixel(&mut lv, pixel::<T, CN>(src, width - 1));
    (fv, lv)
}

/// Accumulator of the window `[-r - 1, r - 1]`, one step before the first output.
#[inline(always)]
fn leading_sum<T, J, const CN: usize>(src: &[T], fv: &[J; CN], radius: usize) -> [J; CN]
where
    T: Copy + PrimitiveCast<J>,
    J: Accumulator,
    usize: PrimitiveCast<J>,
{
    let lead: J = (radius + 1).cast_();
    let mut acc = fv.map(|v| v * lead);
    for x in 0..radius {
        add_pixel(&mut acc, pixel::<T, CN>(src, x));
    }
    acc
}

/// Pixel enters the window while the replicated first value leaves it.
#[inline(always)]
fn slide_in<T, J>(acc: &mut [J], incoming: &[T], outgoing: &[J])
where
    T: Copy + PrimitiveCast<J>,
    J: Accumulator,
{
    for ((a, &i), &o) in acc.iter_mut().zip(incoming.iter()).zip(outgoing.iter()) {
        *a += i.cast_() - o;
    }
}

/// Replicated last value enters the window while a pixel leaves it.
#[inline(always)]
fn slide_out<T, J>(acc: &mut [J], incoming: &[J], outgoing: &[T])
where
    T: Copy + PrimitiveCast<J>,
    J: Accumulator,
{
    for ((a, &i), &o) in acc.iter_mut().zip(incoming.iter()).zip(outgoing.iter()) {
        *a += i - o.cast_();
    }
}

pub(crate) fn box_row_extend_small<T, J, const CN: usize>(src: &[T], dst: &mut [T], radius: usize)
where
    T: Copy + PrimitiveCast<J>,
    J: Accumulator,
    usize: PrimitiveCast<J>,
    f32: ToStorage<T>,
{
    let width = src.len() / CN;
    let r = radius;
    let iarr = 1f32 / (r * 2 + 1) as f32;
    let (fv, lv) = edge_values::<T, J, CN>(src, width);
    let mut acc = leading_sum::<T, J, CN>(src, &fv, r);

    // left edge is out, right edge is in
    for ti in 0..=r {
        slide_in(&mut acc, pixel::<T, CN>(src, ti + r), &fv);
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
        slide_out(&mut acc, &lv, pixel::<T, CN>(src, ti - r - 1));
        store_pixel(pixel_mut::<T, CN>(dst, ti), &acc, iarr);
    }
}

pub(crate) fn box_row_extend_mid<T, J, const CN: usize>(src: &[T], dst: &mut [T], radius: usize)
where
    T: Copy + PrimitiveCast<J>,
    J: Accumulator,
    usize: PrimitiveCast<J>,
    f32: ToStorage<T>,
{
    let width = src.len() / CN;
    let r = radius;
    let iarr = 1f32 / (r * 2 + 1) as f32;
    let (fv, lv) = edge_values::<T, J, CN>(src, width);
    let mut acc = leading_sum::<T, J, CN>(src, &fv, r);

    // left edge is out, right edge is in
    for ti in 0..width - r {
        slide_in(&mut acc, pixel::<T, CN>(src, ti + r), &fv);
        store_pixel(pixel_mut::<T, CN>(dst, ti), &acc, iarr);
    }

    // both edges are out
    for ti in width - r..r + 1 {
        for ((a, &l), &f) in acc.iter_mut().zip(lv.iter()).zip(fv.iter()) {
            *a += l - f;
        }
        store_pixel(pixel_mut::<T, CN>(dst, ti), &acc, iarr);
    }

    // left edge is in, right edge is out
    for ti in (r + 1).max(width - r)..width {
        slide_out(&mut acc, &lv, pixel::<T, CN>(src, ti - r - 1));
        store_pixel(pixel_mut::<T, CN>(dst, ti), &acc, iarr);
    }
}

/// Every window spans the whole row, only the replicated amounts differ.
///
/// Replicated counts are taken as `f32` multipliers, so a radius of any
/// size never reaches the accumulator.
pub(crate) fn box_row_extend_large<T, J, const CN: usize>(src: &[T], dst: &mut [T], radius: usize)
where
    T: Copy + PrimitiveCast<J>,
    J: Accumulator,
    f32: ToStorage<T>,
{
    let width = src.len() / CN;
    let r = radius;
    let iarr = 1f32 / (r * 2 + 1) as f32;
    let (fv, lv) = edge_values::<T, J, CN>(src, width);

    let mut row = [J::default(); CN];
    for px in src.chunks_exact(CN) {
        add_pixel(&mut row, px);
    }
    let fv: [f32; CN] = fv.map(|v| v.cast_());
    let lv: [f32; CN] = lv.map(|v| v.cast_());
    let row: [f32; CN] = row.map(|v| v.cast_());

    for (ti, dst) in dst.chunks_exact_mut(CN).enumerate() {
        let lead = (r - ti) as f32;
        let tail = (ti + r + 1 - width) as f32;
        let mut sums = [0f32; CN];
        for (((s, &f), &l), &m) in sums
            .iter_mut()
            .zip(fv.iter())
            .zip(lv.iter())
            .zip(row.iter())
        {
            *s = f * lead + m + l * tail;
        }
        store_sums(dst, &sums, iarr);
    }
}
