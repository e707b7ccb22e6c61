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
use boxgauss::{BorderPolicy, CLTParameters, FastBlurChannels, ThreadingPolicy, MAX_PASSES};
use libfuzzer_sys::fuzz_target;

#[derive(Clone, Debug, Arbitrary)]
pub struct SrcImage {
    pub src_width: u8,
    pub src_height: u8,
    pub value: u8,
    pub sigma: u8,
    pub passes: u8,
    pub border: u8,
    pub channels: u8,
}

fuzz_target!(|data: SrcImage| {
    let width = data.src_width as usize;
    let height = data.src_height as usize;
    if width == 0 || height == 0 || data.sigma == 0 {
        return;
    }
    let Ok(policy) = BorderPolicy::try_from(data.border as usize % 4) else {
        return;
    };
    let Ok(channels) = FastBlurChannels::try_from(data.channels as usize % 4 + 1) else {
        return;
    };
    let passes = data.passes as usize % MAX_PASSES + 1;
    let parameters = CLTParameters::new(data.sigma as f32 * 0.5).with_passes(passes);

    let length = width * height * channels.channels();
    let mut first = vec![data.value; length];
    let mut second = vec![0u8; length];
    let slot = boxgauss::fast_box_gaussian(
        &mut first,
        &mut second,
        width,
        height,
        channels,
        parameters,
        policy,
        ThreadingPolicy::Adaptive,
    )
    .unwrap();
    assert!(slot.select(&first, &second).iter().all(|&x| x == data.value));
});
