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
use crate::box_filter::extend::{box_row_extend_large, box_row_extend_mid, box_row_extend_small};
use crate::box_filter::kernel_crop::{box_row_crop_large, box_row_crop_mid, box_row_crop_small};
use crate::box_filter::mirror::{box_row_mirror_large, box_row_mirror_mid, box_row_mirror_small};
use crate::box_filter::wrap::{box_row_wrap_any, box_row_wrap_small};
use crate::box_filter::{Accumulator, KernelSize, RowPass};
use crate::primitives::PrimitiveCast;
use crate::to_storage::ToStorage;
use crate::util::{check_pair_size, check_radius, check_slice_size};
use crate::{BlurError, BorderPolicy, FastBlurChannels, ThreadingPolicy};
use half::f16;
use novtb::{ParallelZonedIterator, TbSliceMut};

fn select_row_pass<T, J, const CN: usize>(policy: BorderPolicy, size: KernelSize) -> RowPass<T>
where
    T: Copy + PrimitiveCast<J>,
    J: Accumulator,
    usize: PrimitiveCast<J>,
    f32: ToStorage<T>,
{
    match (policy, size) {
        (BorderPolicy::Extend, KernelSize::Small) => box_row_extend_small::<T, J, CN>,
        (BorderPolicy::Extend, KernelSize::Mid) => box_row_extend_mid::<T, J, CN>,
        (BorderPolicy::Extend, KernelSize::Large) => box_row_extend_large::<T, J, CN>,
        (BorderPolicy::Mirror, KernelSize::Small) => box_row_mirror_small::<T, J, CN>,
        (BorderPolicy::Mirror, KernelSize::Mid) => box_row_mirror_mid::<T, J, CN>,
        (BorderPolicy::Mirror, KernelSize::Large) => box_row_mirror_large::<T, J, CN>,
        (BorderPolicy::Wrap, KernelSize::Small) => box_row_wrap_small::<T, J, CN>,
        (BorderPolicy::Wrap, KernelSize::Mid | KernelSize::Large) => box_row_wrap_any::<T, J, CN>,
        (BorderPolicy::KernelCrop, KernelSize::Small) => box_row_crop_small::<T, J, CN>,
        (BorderPolicy::KernelCrop, KernelSize::Mid) => box_row_crop_mid::<T, J, CN>,
        (BorderPolicy::KernelCrop, KernelSize::Large) => box_row_crop_large::<T, J, CN>,
    }
}

/// Picks row kernel for a sample type, each type carries its own accumulator.
pub(crate) trait BoxBlurRowPass<T> {
    fn get_row_pass<const CN: usize>(policy: BorderPolicy, size: KernelSize) -> RowPass<T>;
}

impl BoxBlurRowPass<u8> for u8 {
    fn get_row_pass<const CN: usize>(policy: BorderPolicy, size: KernelSize) -> RowPass<u8> {
        select_row_pass::<u8, i64, CN>(policy, size)
    }
}

impl BoxBlurRowPass<u16> for u16 {
    fn get_row_pass<const CN: usize>(policy: BorderPolicy, size: KernelSize) -> RowPass<u16> {
        select_row_pass::<u16, i64, CN>(policy, size)
    }
}

impl BoxBlurRowPass<f32> for f32 {
    fn get_row_pass<const CN: usize>(policy: BorderPolicy, size: KernelSize) -> RowPass<f32> {
        select_row_pass::<f32, f32, CN>(policy, size)
    }
}

impl BoxBlurRowPass<f16> for f16 {
    fn get_row_pass<const CN: usize>(policy: BorderPolicy, size: KernelSize) -> RowPass<f16> {
        select_row_pass::<f16, f32, CN>(policy, size)
    }
}

fn box_blur_rows<T, const CN: usize>(
    src: &[T],
    dst: &mut [T],
    width: usize,
    height: usize,
    radius: usize,
    policy: BorderPolicy,
    thread_count: usize,
) where
    T: Copy + Send + Sync + BoxBlurRowPass<T>,
{
    let row_length = width * CN;
    let row_pass = T::get_row_pass::<CN>(policy, KernelSize::classify(radius, width));

    if thread_count > 1 {
        let rows_per_worker = height.div_ceil(thread_count);
        let pool = novtb::ThreadPool::new(thread_count);
        dst.tb_par_chunks_mut(row_length * rows_per_worker)
            .for_each_enumerated(&pool, |cy, dst_rows| {
                let start = cy * rows_per_worker * row_length;
                let src_rows = &src[start..start + dst_rows.len()];
                for (src_row, dst_row) in src_rows
                    .chunks_exact(row_length)
                    .zip(dst_rows.chunks_exact_mut(row_length))
                {
                    row_pass(src_row, dst_row, radius);
                }
            });
    } else {
        for (src_row, dst_row) in src
            .chunks_exact(row_length)
            .zip(dst.chunks_exact_mut(row_length))
        {
            row_pass(src_row, dst_row, radius);
        }
    }
}

/// Runs one horizontal pass over already validated buffers.
pub(crate) fn box_blur_pass_unchecked<T>(
    src: &[T],
    dst: &mut [T],
    width: usize,
    height: usize,
    channels: FastBlurChannels,
    radius: usize,
    policy: BorderPolicy,
    thread_count: usize,
) where
    T: Copy + Send + Sync + BoxBlurRowPass<T>,
{
    if radius == 0 {
        dst.copy_from_slice(src);
        return;
    }
    let dispatcher = match channels {
        FastBlurChannels::Plane => box_blur_rows::<T, 1>,
        FastBlurChannels::Channels2 => box_blur_rows::<T, 2>,
        FastBlurChannels::Channels3 => box_blur_rows::<T, 3>,
        FastBlurChannels::Channels4 => box_blur_rows::<T, 4>,
    };
    dispatcher(src, dst, width, height, radius, policy, thread_count);
}

fn box_blur_pass_impl<T>(
    src: &[T],
    dst: &mut [T],
    width: usize,
    height: usize,
    channels: FastBlurChannels,
    radius: usize,
    policy: BorderPolicy,
    threading_policy: ThreadingPolicy,
) -> Result<(), BlurError>
where
    T: Copy + Send + Sync + BoxBlurRowPass<T>,
{
    check_slice_size(src, width, height, channels.channels())?;
    check_pair_size(src, dst)?;
    check_radius(radius)?;
    let thread_count = threading_policy.workers_for(width, height, height);
    tracing::trace!(
        width,
        height,
        radius,
        %policy,
        kernel = ?KernelSize::classify(radius, width),
        "box pass"
    );
    box_blur_pass_unchecked(
        src,
        dst,
        width,
        height,
        channels,
        radius,
        policy,
        thread_count,
    );
    Ok(())
}

/// Performs one horizontal box blur pass of width `2 * radius + 1`.
///
/// Every row is filtered independently, samples beyond the row are synthesized
/// according to `policy`. Result is rounded to the nearest integer.
///
/// # Arguments
///
/// * `src` - Source image, `width * height * channels` samples, row-major.
/// * `dst` - Destination, same length as `src`.
/// * `radius` - Box radius, 0 copies the image, `2 * radius + 1` must fit in `usize`.
/// * `policy` - See [BorderPolicy] for more info.
/// * `threading_policy` - Rows are distributed between workers, result does not depend on it.
pub fn box_blur_pass(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    channels: FastBlurChannels,
    radius: usize,
    policy: BorderPolicy,
    threading_policy: ThreadingPolicy,
) -> Result<(), BlurError> {
    box_blur_pass_impl(
        src,
        dst,
        width,
        height,
        channels,
        radius,
        policy,
        threading_policy,
    )
}

/// Performs one horizontal box blur pass on 16-bit samples.
///
/// See [box_blur_pass] for more info.
pub fn box_blur_pass_u16(
    src: &[u16],
    dst: &mut [u16],
    width: usize,
    height: usize,
    channels: FastBlurChannels,
    radius: usize,
    policy: BorderPolicy,
    threading_policy: ThreadingPolicy,
) -> Result<(), BlurError> {
    box_blur_pass_impl(
        src,
        dst,
        width,
        height,
        channels,
        radius,
        policy,
        threading_policy,
    )
}

/// Performs one horizontal box blur pass on `f32` samples, output is not rounded.
///
/// See [box_blur_pass] for more info.
pub fn box_blur_pass_f32(
    src: &[f32],
    dst: &mut [f32],
    width: usize,
    height: usize,
    channels: FastBlurChannels,
    radius: usize,
    policy: BorderPolicy,
    threading_policy: ThreadingPolicy,
) -> Result<(), BlurError> {
    box_blur_pass_impl(
        src,
        dst,
        width,
        height,
        channels,
        radius,
        policy,
        threading_policy,
    )
}

/// Performs one horizontal box blur pass on `f16` samples, accumulation is done in `f32`.
///
/// See [box_blur_pass] for more info.
pub fn box_blur_pass_f16(
    src: &[f16],
    dst: &mut [f16],
    width: usize,
    height: usize,
    channels: FastBlurChannels,
    radius: usize,
    policy: BorderPolicy,
    threading_policy: ThreadingPolicy,
) -> Result<(), BlurError> {
    box_blur_pass_impl(
        src,
        dst,
        width,
        height,
        channels,
        radius,
        policy,
        threading_policy,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::box_filter::reference::{box_row_reference, box_row_reference_sums};
    use crate::MismatchedSize;
    use std::num::NonZeroUsize;

    fn pattern(len: usize, seed: usize) -> Vec<u8> {
        (0..len)
            .map(|i| ((i * 37 + seed * 11 + (i * i) % 17) % 256) as u8)
            .collect()
    }

    #[test]
    fn test_extend_scenario() {
        let src = [10u8, 20, 30, 40];
        let mut dst = [0u8; 4];
        box_blur_pass(
            &src,
            &mut dst,
            4,
            1,
            FastBlurChannels::Plane,
            1,
            BorderPolicy::Extend,
            ThreadingPolicy::Single,
        )
        .unwrap();
        assert_eq!(dst, [13, 20, 30, 37]);
    }

    #[test]
    fn test_wrap_scenario() {
        let src = [10u8, 20, 30, 40];
        let mut dst = [0u8; 4];
        box_blur_pass(
            &src,
            &mut dst,
            4,
            1,
            FastBlurChannels::Plane,
            1,
            BorderPolicy::Wrap,
            ThreadingPolicy::Single,
        )
        .unwrap();
        assert_eq!(dst, [23, 20, 30, 27]);
    }

    #[test]
    fn test_mirror_and_crop_scenario() {
        let src = [10u8, 20, 30, 40];
        let mut dst = [0u8; 4];
        box_blur_pass(
            &src,
            &mut dst,
            4,
            1,
            FastBlurChannels::Plane,
            1,
            BorderPolicy::Mirror,
            ThreadingPolicy::Single,
        )
        .unwrap();
        // (20 + 10 + 20) / 3, (30 + 40 + 30) / 3
        assert_eq!(dst, [17, 20, 30, 33]);
        box_blur_pass(
            &src,
            &mut dst,
            4,
            1,
            FastBlurChannels::Plane,
            1,
            BorderPolicy::KernelCrop,
            ThreadingPolicy::Single,
        )
        .unwrap();
        assert_eq!(dst, [15, 20, 30, 35]);
    }

    #[test]
    fn test_matches_reference_f32() {
        for policy in BorderPolicy::ALL {
            for cn in 1..=4usize {
                let channels = FastBlurChannels::try_from(cn).unwrap();
                for width in 1..=12usize {
                    let src: Vec<f32> = pattern(width * cn, width + cn)
                        .iter()
                        .map(|&x| x as f32)
                        .collect();
                    let src64: Vec<f64> = src.iter().map(|&x| x as f64).collect();
                    for radius in 0..=width * 2 + 3 {
                        let mut dst = vec![0f32; src.len()];
                        box_blur_pass_f32(
                            &src,
                            &mut dst,
                            width,
                            1,
                            channels,
                            radius,
                            policy,
                            ThreadingPolicy::Single,
                        )
                        .unwrap();
                        let expected = box_row_reference(&src64, cn, radius, policy);
                        for (i, (&v, &e)) in dst.iter().zip(expected.iter()).enumerate() {
                            assert!(
                                (v as f64 - e).abs() < 1e-2,
                                "{policy} cn={cn} w={width} r={radius} at {i}: {v} vs {e}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_matches_reference_u8() {
        for policy in BorderPolicy::ALL {
            for cn in [1usize, 3, 4] {
                let channels = FastBlurChannels::try_from(cn).unwrap();
                for width in [1usize, 2, 3, 5, 8, 13, 31] {
                    let src = pattern(width * cn, cn);
                    let src64: Vec<f64> = src.iter().map(|&x| x as f64).collect();
                    for radius in [1usize, 2, 3, 6, 15, 16, 40] {
                        let mut dst = vec![0u8; src.len()];
                        box_blur_pass(
                            &src,
                            &mut dst,
                            width,
                            1,
                            channels,
                            radius,
                            policy,
                            ThreadingPolicy::Single,
                        )
                        .unwrap();
                        let expected = box_row_reference_sums(&src64, cn, radius, policy);
                        for (i, (&v, &(sum, count))) in dst.iter().zip(expected.iter()).enumerate()
                        {
                            // same arithmetic as the kernels: exact sum times reciprocal count
                            let e: u8 = (sum as f32 * (1f32 / count as f32)).to_();
                            assert_eq!(
                                v, e,
                                "{policy} cn={cn} w={width} r={radius} at {i}: sum {sum}/{count}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_zero_radius_copies() {
        let src = pattern(7 * 5 * 3, 1);
        for policy in BorderPolicy::ALL {
            let mut dst = vec![0u8; src.len()];
            box_blur_pass(
                &src,
                &mut dst,
                7,
                5,
                FastBlurChannels::Channels3,
                0,
                policy,
                ThreadingPolicy::Single,
            )
            .unwrap();
            assert_eq!(src, dst);
        }
    }

    #[test]
    fn test_uniform_rows_are_fixed_point() {
        for policy in BorderPolicy::ALL {
            for radius in [1usize, 4, 7, 9, 30] {
                let src = [200u8, 3, 77, 255].repeat(9 * 4);
                let mut dst = vec![0u8; src.len()];
                box_blur_pass(
                    &src,
                    &mut dst,
                    9,
                    4,
                    FastBlurChannels::Channels4,
                    radius,
                    policy,
                    ThreadingPolicy::Single,
                )
                .unwrap();
                assert_eq!(src, dst, "{policy} r={radius}");

                let src = vec![4321u16; 9 * 4];
                let mut dst = vec![0u16; src.len()];
                box_blur_pass_u16(
                    &src,
                    &mut dst,
                    9,
                    4,
                    FastBlurChannels::Plane,
                    radius,
                    policy,
                    ThreadingPolicy::Single,
                )
                .unwrap();
                assert_eq!(src, dst, "{policy} r={radius}");
            }
        }
    }

    #[test]
    fn test_huge_radius_keeps_uniform_rows() {
        for policy in BorderPolicy::ALL {
            for width in [1usize, 2, 3, 7] {
                for radius in [10_000_000usize, 123_456_789, usize::MAX / 2] {
                    assert_eq!(KernelSize::classify(radius, width), KernelSize::Large);

                    let src = [255u8, 0, 17].repeat(width * 2);
                    let mut dst = vec![1u8; src.len()];
                    box_blur_pass(
                        &src,
                        &mut dst,
                        width,
                        2,
                        FastBlurChannels::Channels3,
                        radius,
                        policy,
                        ThreadingPolicy::Single,
                    )
                    .unwrap();
                    assert_eq!(src, dst, "{policy} w={width} r={radius}");

                    let src = vec![u16::MAX; width * 2];
                    let mut dst = vec![0u16; src.len()];
                    box_blur_pass_u16(
                        &src,
                        &mut dst,
                        width,
                        2,
                        FastBlurChannels::Plane,
                        radius,
                        policy,
                        ThreadingPolicy::Single,
                    )
                    .unwrap();
                    assert_eq!(src, dst, "{policy} w={width} r={radius}");
                }
            }
        }
    }

    #[test]
    fn test_huge_radius_tends_to_row_mean() {
        // window spans millions of periods, the partial span does not move the mean
        let radius = 6 * 10_000_000 + 1;
        let src = [0u8, 30, 60];
        for policy in [BorderPolicy::Wrap, BorderPolicy::KernelCrop] {
            let mut dst = [0u8; 3];
            box_blur_pass(
                &src,
                &mut dst,
                3,
                1,
                FastBlurChannels::Plane,
                radius,
                policy,
                ThreadingPolicy::Single,
            )
            .unwrap();
            assert_eq!(dst, [30, 30, 30], "{policy}");
        }
        let mut dst = [0u8; 3];
        box_blur_pass(
            &src,
            &mut dst,
            3,
            1,
            FastBlurChannels::Plane,
            radius,
            BorderPolicy::Mirror,
            ThreadingPolicy::Single,
        )
        .unwrap();
        // one reflect-101 period of [0, 30, 60] is 0, 30, 60, 30
        assert_eq!(dst, [30, 30, 30]);

        // replicated edges dominate: mean of first and last pixel
        let mut dst = [0u8; 3];
        box_blur_pass(
            &src,
            &mut dst,
            3,
            1,
            FastBlurChannels::Plane,
            radius,
            BorderPolicy::Extend,
            ThreadingPolicy::Single,
        )
        .unwrap();
        assert_eq!(dst, [30, 30, 30]);
    }

    #[test]
    fn test_rejects_unrepresentable_radius() {
        let src = [10u8, 20, 30, 40];
        for radius in [usize::MAX / 2 + 1, usize::MAX] {
            let mut dst = [7u8; 4];
            assert_eq!(
                box_blur_pass(
                    &src,
                    &mut dst,
                    4,
                    1,
                    FastBlurChannels::Plane,
                    radius,
                    BorderPolicy::Extend,
                    ThreadingPolicy::Single,
                ),
                Err(BlurError::ExceedingPointerSize)
            );
            assert_eq!(dst, [7u8; 4]);
        }
    }

    #[test]
    fn test_wrap_conserves_mass() {
        let width = 11;
        let height = 3;
        let src: Vec<f32> = pattern(width * height * 2, 5)
            .iter()
            .map(|&x| x as f32)
            .collect();
        let total = |buf: &[f32], ch: usize| -> f64 {
            buf.iter().skip(ch).step_by(2).map(|&x| x as f64).sum()
        };
        for radius in [1usize, 4, 5, 8, 10, 11, 25] {
            let mut dst = vec![0f32; src.len()];
            box_blur_pass_f32(
                &src,
                &mut dst,
                width,
                height,
                FastBlurChannels::Channels2,
                radius,
                BorderPolicy::Wrap,
                ThreadingPolicy::Single,
            )
            .unwrap();
            for ch in 0..2 {
                let before = total(&src, ch);
                let after = total(&dst, ch);
                assert!((before - after).abs() < 1e-1, "r={radius}: {before} vs {after}");
            }
        }
    }

    #[test]
    fn test_crop_normalizes_by_in_range_count() {
        for width in 1..=9usize {
            let src = vec![1f32; width];
            for radius in 0..=12usize {
                let mut dst = vec![0f32; width];
                box_blur_pass_f32(
                    &src,
                    &mut dst,
                    width,
                    1,
                    FastBlurChannels::Plane,
                    radius,
                    BorderPolicy::KernelCrop,
                    ThreadingPolicy::Single,
                )
                .unwrap();
                for &v in dst.iter() {
                    assert!((v - 1.).abs() < 1e-5, "w={width} r={radius}: {v}");
                }
            }
        }
        // ramp makes divisor visible: at the very edge only r + 1 samples are summed
        let src = [0f32, 6., 12., 18., 24., 30.];
        let mut dst = [0f32; 6];
        box_blur_pass_f32(
            &src,
            &mut dst,
            6,
            1,
            FastBlurChannels::Plane,
            2,
            BorderPolicy::KernelCrop,
            ThreadingPolicy::Single,
        )
        .unwrap();
        let expected = [6f32, 9., 12., 18., 21., 24.];
        for (v, e) in dst.iter().zip(expected.iter()) {
            assert!((v - e).abs() < 1e-4, "{v} vs {e}");
        }
    }

    #[test]
    fn test_threading_is_deterministic() {
        let width = 37;
        let height = 23;
        let src = pattern(width * height * 3, 9);
        for policy in BorderPolicy::ALL {
            let mut single = vec![0u8; src.len()];
            let mut multi = vec![0u8; src.len()];
            box_blur_pass(
                &src,
                &mut single,
                width,
                height,
                FastBlurChannels::Channels3,
                5,
                policy,
                ThreadingPolicy::Single,
            )
            .unwrap();
            box_blur_pass(
                &src,
                &mut multi,
                width,
                height,
                FastBlurChannels::Channels3,
                5,
                policy,
                ThreadingPolicy::Fixed(NonZeroUsize::new(4).unwrap()),
            )
            .unwrap();
            assert_eq!(single, multi);
        }
    }

    #[test]
    fn test_f16_pass() {
        let src: Vec<f16> = [0.25f32, 0.5, 0.75, 1.0]
            .iter()
            .map(|&x| f16::from_f32(x))
            .collect();
        let mut dst = vec![f16::ZERO; 4];
        box_blur_pass_f16(
            &src,
            &mut dst,
            4,
            1,
            FastBlurChannels::Plane,
            1,
            BorderPolicy::Extend,
            ThreadingPolicy::Single,
        )
        .unwrap();
        assert!((dst[1].to_f32() - 0.5).abs() < 1e-3);
        assert!((dst[0].to_f32() - 1. / 3.).abs() < 1e-3);
    }

    #[test]
    fn test_rejects_bad_layout() {
        let src = vec![0u8; 12];
        let mut dst = vec![0u8; 12];
        assert_eq!(
            box_blur_pass(
                &src,
                &mut dst,
                4,
                1,
                FastBlurChannels::Channels4,
                1,
                BorderPolicy::Extend,
                ThreadingPolicy::Single,
            ),
            Err(BlurError::MinimumSliceSizeMismatch(MismatchedSize {
                expected: 16,
                received: 12
            }))
        );
        let mut short = vec![0u8; 11];
        assert_eq!(
            box_blur_pass(
                &src,
                &mut short,
                4,
                1,
                FastBlurChannels::Channels3,
                1,
                BorderPolicy::Extend,
                ThreadingPolicy::Single,
            ),
            Err(BlurError::BufferSizeMismatch(MismatchedSize {
                expected: 12,
                received: 11
            }))
        );
        assert_eq!(
            box_blur_pass(
                &[],
                &mut [],
                0,
                1,
                FastBlurChannels::Plane,
                1,
                BorderPolicy::Extend,
                ThreadingPolicy::Single,
            ),
            Err(BlurError::ZeroBaseSize)
        );
    }
}
