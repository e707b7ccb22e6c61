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
#![no_main]

use arbitrary::Arbitrary;
use boxgauss::{BlurError, BorderPolicy, FastBlurChannels, ThreadingPolicy};
use libfuzzer_sys::fuzz_target;

#[derive(Clone, Debug, Arbitrary)]
pub struct SrcImage {
    pub src_width: u8,
    pub src_height: u8,
    pub value: u8,
    pub border: u8,
    pub radius: u64,
    pub channels: u8,
}

fuzz_target!(|data: SrcImage| {
    let Ok(policy) = BorderPolicy::try_from(data.border as usize % 4) else {
        return;
    };
    let Ok(channels) = FastBlurChannels::try_from(data.channels as usize % 4 + 1) else {
        return;
    };
    let width = data.src_width as usize;
    let height = data.src_height as usize;
    if width == 0 || height == 0 {
        return;
    }
    let length = width * height * channels.channels();
    let radius = data.radius as usize;
    let src = vec![data.value; length];
    let mut dst = vec![0u8; length];
    match boxgauss::box_blur_pass(
        &src,
        &mut dst,
        width,
        height,
        channels,
        radius,
        policy,
        ThreadingPolicy::Single,
    ) {
        Ok(()) => assert_eq!(src, dst),
        Err(BlurError::ExceedingPointerSize) => {
            assert!(radius > usize::MAX / 2);
            return;
        }
        Err(err) => panic!("{err}"),
    }

    let src: Vec<f32> = (0..length).map(|i| (i % 251) as f32).collect();
    let mut dst = vec![0f32; length];
    boxgauss::box_blur_pass_f32(
        &src,
        &mut dst,
        width,
        height,
        channels,
        radius,
        policy,
        ThreadingPolicy::Single,
    )
    .unwrap();
    assert!(dst.iter().all(|&x| (-0.5..=250.5).contains(&x)));
});
