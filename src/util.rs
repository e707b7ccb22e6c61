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
use std::error::Error;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
/// Shows size mismatching
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlurError {
    ZeroBaseSize,
    MinimumSliceSizeMismatch(MismatchedSize),
    BufferSizeMismatch(MismatchedSize),
    ImagesMustMatch,
    UnsupportedChannelCount(usize),
    UnsupportedPassCount(usize),
    InvalidBorderPolicy(String),
    ExceedingPointerSize,
    NegativeOrZeroSigma,
}

impl Error for BlurError {}

impl std::fmt::Display for BlurError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BlurError::MinimumSliceSizeMismatch(size) => f.write_fmt(format_args!(
                "Minimum image slice size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            BlurError::BufferSizeMismatch(size) => f.write_fmt(format_args!(
                "Working buffers must have equal size: expected={}, received={}",
                size.expected, size.received
            )),
            BlurError::ZeroBaseSize => f.write_str("Image size must not be zero"),
            BlurError::ImagesMustMatch => {
                f.write_str("Source and destination images must match in their dimensions")
            }
            BlurError::UnsupportedChannelCount(cn) => f.write_fmt(format_args!(
                "Only 1, 2, 3 or 4 channels are supported, but received {cn}"
            )),
            BlurError::UnsupportedPassCount(passes) => f.write_fmt(format_args!(
                "Passes count must be in 1..={}, but received {passes}",
                crate::MAX_PASSES
            )),
            BlurError::InvalidBorderPolicy(name) => f.write_fmt(format_args!(
                "Unknown border policy '{name}', expected one of: extend, mirror, wrap, crop"
            )),
            BlurError::ExceedingPointerSize => {
                f.write_str("Image bounds and blurring kernel/radius exceeds pointer capacity")
            }
            BlurError::NegativeOrZeroSigma => {
                f.write_str("Negative, zero or non finite sigma is not supported")
            }
        }
    }
}

/// Returns `width * height * cn` or an error if it is not representable.
pub(crate) fn image_length(width: usize, height: usize, cn: usize) -> Result<usize, BlurError> {
    if width == 0 || height == 0 {
        return Err(BlurError::ZeroBaseSize);
    }
    width
        .checked_mul(height)
        .and_then(|x| x.checked_mul(cn))
        .ok_or(BlurError::ExceedingPointerSize)
}

pub(crate) fn check_slice_size<T>(
    arr: &[T],
    width: usize,
    height: usize,
    cn: usize,
) -> Result<(), BlurError> {
    let expected = image_length(width, height, cn)?;
    if arr.len() != expected {
        return Err(BlurError::MinimumSliceSizeMismatch(MismatchedSize {
            expected,
            received: arr.len(),
        }));
    }
    Ok(())
}

/// Box of width `2 * radius + 1` must be representable.
pub(crate) fn check_radius(radius: usize) -> Result<usize, BlurError> {
    radius
        .checked_mul(2)
        .and_then(|x| x.checked_add(1))
        .ok_or(BlurError::ExceedingPointerSize)
}

/// Source and destination of a pass must share one layout.
pub(crate) fn check_pair_size<T>(src: &[T], dst: &[T]) -> Result<(), BlurError> {
    if src.len() != dst.len() {
        return Err(BlurError::BufferSizeMismatch(MismatchedSize {
            expected: src.len(),
            received: dst.len(),
        }));
    }
    Ok(())
}
