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
    box_blur_pass, fast_box_gaussian, fast_box_gaussian_f32, fast_box_gaussian_u16, transpose,
    BorderPolicy, CLTParameters, FastBlurChannels, ThreadingPolicy,
};
use criterion::{criterion_group, criterion_main, Criterion};

const WIDTH: usize = 1920;
const HEIGHT: usize = 1080;

/// Deterministic noise with some large scale structure.
fn synthetic_rgba() -> Vec<u8> {
    let mut data = vec![0u8; WIDTH * HEIGHT * 4];
    for (i, px) in data.chunks_exact_mut(4).enumerate() {
        let x = i % WIDTH;
        let y = i / WIDTH;
        let noise = (i.wrapping_mul(2654435761) >> 13) as u8;
        px[0] = ((x * 255) / WIDTH) as u8 ^ (noise & 0x1f);
        px[1] = ((y * 255) / HEIGHT) as u8 ^ (noise & 0x0f);
        px[2] = noise;
        px[3] = 255;
    }
    data
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let src_bytes = synthetic_rgba();

    for policy in BorderPolicy::ALL {
        c.bench_function(&format!("RGBA fast box gaussian {policy}"), |b| {
            let mut first = src_bytes.clone();
            let mut second = vec![0u8; src_bytes.len()];
            b.iter(|| {
                fast_box_gaussian(
                    &mut first,
                    &mut second,
                    WIDTH,
                    HEIGHT,
                    FastBlurChannels::Channels4,
                    CLTParameters::new(25.),
                    policy,
                    ThreadingPolicy::Adaptive,
                )
                .unwrap();
            })
        });
    }

    c.bench_function("RGBA fast box gaussian ( Single Thread )", |b| {
        let mut first = src_bytes.clone();
        let mut second = vec![0u8; src_bytes.len()];
        b.iter(|| {
            fast_box_gaussian(
                &mut first,
                &mut second,
                WIDTH,
                HEIGHT,
                FastBlurChannels::Channels4,
                CLTParameters::new(25.),
                BorderPolicy::Mirror,
                ThreadingPolicy::Single,
            )
            .unwrap();
        })
    });

    c.bench_function("RGBA fast box gaussian 10 passes", |b| {
        let mut first = src_bytes.clone();
        let mut second = vec![0u8; src_bytes.len()];
        b.iter(|| {
            fast_box_gaussian(
                &mut first,
                &mut second,
                WIDTH,
                HEIGHT,
                FastBlurChannels::Channels4,
                CLTParameters::new(25.).with_passes(10),
                BorderPolicy::Mirror,
                ThreadingPolicy::Adaptive,
            )
            .unwrap();
        })
    });

    let rgba_u16: Vec<u16> = src_bytes.iter().map(|&x| (x as u16) << 8).collect();

    c.bench_function("RGBA16 fast box gaussian", |b| {
        let mut first = rgba_u16.clone();
        let mut second = vec![0u16; rgba_u16.len()];
        b.iter(|| {
            fast_box_gaussian_u16(
                &mut first,
                &mut second,
                WIDTH,
                HEIGHT,
                FastBlurChannels::Channels4,
                CLTParameters::new(25.),
                BorderPolicy::Mirror,
                ThreadingPolicy::Adaptive,
            )
            .unwrap();
        })
    });

    let rgba_f32: Vec<f32> = src_bytes.iter().map(|&x| x as f32 / 255.).collect();

    c.bench_function("RGBA f32 fast box gaussian", |b| {
        let mut first = rgba_f32.clone();
        let mut second = vec![0f32; rgba_f32.len()];
        b.iter(|| {
            fast_box_gaussian_f32(
                &mut first,
                &mut second,
                WIDTH,
                HEIGHT,
                FastBlurChannels::Channels4,
                CLTParameters::new(25.),
                BorderPolicy::Mirror,
                ThreadingPolicy::Adaptive,
            )
            .unwrap();
        })
    });

    c.bench_function("RGBA box pass radius 40 ( Single Thread )", |b| {
        let mut dst = vec![0u8; src_bytes.len()];
        b.iter(|| {
            box_blur_pass(
                &src_bytes,
                &mut dst,
                WIDTH,
                HEIGHT,
                FastBlurChannels::Channels4,
                40,
                BorderPolicy::Extend,
                ThreadingPolicy::Single,
            )
            .unwrap();
        })
    });

    c.bench_function("RGBA transpose", |b| {
        let mut dst = vec![0u8; src_bytes.len()];
        b.iter(|| {
            transpose(
                &src_bytes,
                &mut dst,
                WIDTH,
                HEIGHT,
                FastBlurChannels::Channels4,
                ThreadingPolicy::Adaptive,
            )
            .unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
