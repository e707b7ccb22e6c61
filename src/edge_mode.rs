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
use crate::BlurError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
/// Declares how samples outside of the row are synthesized
pub enum BorderPolicy {
    /// Nearest edge sample is replicated, rule `aaaaaa|abcdefgh|hhhhhhh`
    #[default]
    Extend = 0,
    /// Image is reflected about the edge sample, rule `gfedcb|abcdefgh|gfedcba`
    Mirror = 1,
    /// Image is repeated circularly, rule `cdefgh|abcdefgh|abcdefg`
    Wrap = 2,
    /// Out of range samples are dropped and the window is normalized
    /// by count of samples actually summed.
    KernelCrop = 3,
}

impl BorderPolicy {
    pub const ALL: [BorderPolicy; 4] = [
        BorderPolicy::Extend,
        BorderPolicy::Mirror,
        BorderPolicy::Wrap,
        BorderPolicy::KernelCrop,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BorderPolicy::Extend => "extend",
            BorderPolicy::Mirror => "mirror",
            BorderPolicy::Wrap => "wrap",
            BorderPolicy::KernelCrop => "crop",
        }
    }
}

impl Display for BorderPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<usize> for BorderPolicy {
    type Error = BlurError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(BorderPolicy::Extend),
            1 => Ok(BorderPolicy::Mirror),
            2 => Ok(BorderPolicy::Wrap),
            3 => Ok(BorderPolicy::KernelCrop),
            _ => Err(BlurError::InvalidBorderPolicy(value.to_string())),
        }
    }
}

impl FromStr for BorderPolicy {
    type Err = BlurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "extend" | "clamp" => Ok(BorderPolicy::Extend),
            "mirror" | "reflect" => Ok(BorderPolicy::Mirror),
            "wrap" => Ok(BorderPolicy::Wrap),
            "crop" | "kernel-crop" | "kernel_crop" => Ok(BorderPolicy::KernelCrop),
            _ => Err(BlurError::InvalidBorderPolicy(s.to_string())),
        }
    }
}

#[inline(always)]
pub(crate) fn extend_index(begin: isize, end: isize, index: isize) -> usize {
    index.clamp(begin, end - 1) as usize
}

/// Triangle wave reflection with period `2 * (length - 1)`.
#[inline(always)]
pub(crate) fn mirror_index(begin: isize, end: isize, index: isize) -> usize {
    let length = end - begin;
    if length == 1 {
        return begin as usize;
    }
    let period = 2 * (length - 1);
    let m = (index - begin).rem_euclid(period);
    if m < length {
        (begin + m) as usize
    } else {
        (begin + period - m) as usize
    }
}

#[inline(always)]
pub(crate) fn wrap_index(begin: isize, end: isize, index: isize) -> usize {
    (begin + (index - begin).rem_euclid(end - begin)) as usize
}

/// Maps `index` into `[begin, end)` according to `policy`.
///
/// Returns `None` only for [BorderPolicy::KernelCrop] when `index` is out of range,
/// such samples do not participate in accumulation.
///
/// # Panics
/// Panics if `begin >= end`.
#[inline]
pub fn remap_index(policy: BorderPolicy, begin: isize, end: isize, index: isize) -> Option<usize> {
    assert!(begin < end, "Range must not be empty");
    if index >= begin && index < end {
        return Some(index as usize);
    }
    match policy {
        BorderPolicy::Extend => Some(extend_index(begin, end, index)),
        BorderPolicy::Mirror => Some(mirror_index(begin, end, index)),
        BorderPolicy::Wrap => Some(wrap_index(begin, end, index)),
        BorderPolicy::KernelCrop => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_clamps() {
        assert_eq!(remap_index(BorderPolicy::Extend, 0, 4, -3), Some(0));
        assert_eq!(remap_index(BorderPolicy::Extend, 0, 4, 9), Some(3));
        assert_eq!(remap_index(BorderPolicy::Extend, 8, 12, 7), Some(8));
        assert_eq!(remap_index(BorderPolicy::Extend, 8, 12, 2), Some(8));
    }

    #[test]
    fn test_mirror_folds() {
        // 0 1 2 3 4 | 3 2 1 0 1 2 ...
        let expected_right = [3usize, 2, 1, 0, 1, 2, 3, 4, 3];
        for (i, &e) in expected_right.iter().enumerate() {
            assert_eq!(
                remap_index(BorderPolicy::Mirror, 0, 5, 5 + i as isize),
                Some(e),
                "index {}",
                5 + i
            );
        }
        let expected_left = [1usize, 2, 3, 4, 3, 2, 1, 0, 1];
        for (i, &e) in expected_left.iter().enumerate() {
            assert_eq!(
                remap_index(BorderPolicy::Mirror, 0, 5, -1 - i as isize),
                Some(e),
                "index {}",
                -1 - i as isize
            );
        }
        assert_eq!(remap_index(BorderPolicy::Mirror, 10, 15, 9), Some(11));
        assert_eq!(remap_index(BorderPolicy::Mirror, 10, 15, 15), Some(13));
        assert_eq!(remap_index(BorderPolicy::Mirror, 3, 4, -17), Some(3));
    }

    #[test]
    fn test_wrap_is_circular() {
        assert_eq!(remap_index(BorderPolicy::Wrap, 0, 4, -1), Some(3));
        assert_eq!(remap_index(BorderPolicy::Wrap, 0, 4, -9), Some(3));
        assert_eq!(remap_index(BorderPolicy::Wrap, 0, 4, 4), Some(0));
        assert_eq!(remap_index(BorderPolicy::Wrap, 0, 4, 13), Some(1));
        assert_eq!(remap_index(BorderPolicy::Wrap, 4, 8, 3), Some(7));
        assert_eq!(remap_index(BorderPolicy::Wrap, 4, 8, -5), Some(7));
    }

    #[test]
    fn test_crop_has_no_mapping() {
        assert_eq!(remap_index(BorderPolicy::KernelCrop, 0, 4, -1), None);
        assert_eq!(remap_index(BorderPolicy::KernelCrop, 0, 4, 4), None);
        assert_eq!(remap_index(BorderPolicy::KernelCrop, 0, 4, 2), Some(2));
    }

    #[test]
    fn test_mapped_index_stays_in_range() {
        for policy in [BorderPolicy::Extend, BorderPolicy::Mirror, BorderPolicy::Wrap] {
            for len in 1..7isize {
                for index in -40..40isize {
                    let mapped = remap_index(policy, 5, 5 + len, index).unwrap();
                    assert!(
                        (5..(5 + len) as usize).contains(&mapped),
                        "{policy} mapped {index} to {mapped} for length {len}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_parsing() {
        assert_eq!("mirror".parse::<BorderPolicy>(), Ok(BorderPolicy::Mirror));
        assert_eq!("Extend".parse::<BorderPolicy>(), Ok(BorderPolicy::Extend));
        assert_eq!("crop".parse::<BorderPolicy>(), Ok(BorderPolicy::KernelCrop));
        assert_eq!("wrap".parse::<BorderPolicy>(), Ok(BorderPolicy::Wrap));
        assert_eq!(
            "torus".parse::<BorderPolicy>(),
            Err(BlurError::InvalidBorderPolicy("torus".to_string()))
        );
        assert_eq!(BorderPolicy::try_from(3usize), Ok(BorderPolicy::KernelCrop));
        assert!(BorderPolicy::try_from(4usize).is_err());
        for policy in BorderPolicy::ALL {
            assert_eq!(policy.name().parse::<BorderPolicy>(), Ok(policy));
        }
    }
}
