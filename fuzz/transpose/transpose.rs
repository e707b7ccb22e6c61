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
use boxgauss::{FastBlurChannels, ThreadingPolicy};
use libfuzzer_sys::fuzz_target;

#[derive(Clone, Debug, Arbitrary)]
pub struct SrcImage {
    pub src_width: u16,
    pub src_height: u16,
    pub channels: u8,
    pub threads: u8,
}

fuzz_target!(|data: SrcImage| {
    if data.src_width > 700 || data.src_height > 700 {
        return;
    }
    let width = data.src_width as usize;
    let height = data.src_height as usize;
    if width == 0 || height == 0 {
        return;
    }
    let Ok(channels) = FastBlurChannels::try_from(data.channels as usize % 4 + 1) else {
        return;
    };
    let threading_policy = match std::num::NonZeroUsize::new(data.threads as usize % 5) {
        Some(threads) => ThreadingPolicy::Fixed(threads),
        None => ThreadingPolicy::Single,
    };
    let length = width * height * channels.channels();
    let src: Vec<u16> = (0..length).map(|i| i as u16).collect();
    let mut once = vec![0u16; length];
    let mut twice = vec![0u16; length];
    boxgauss::transpose_u16(&src, &mut once, width, height, channels, threading_policy).unwrap();
    boxgauss::transpose_u16(&once, &mut twice, height, width, channels, threading_policy).unwrap();
    assert_eq!(src, twice);
});
