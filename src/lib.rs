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
#![allow(clippy::too_many_arguments)]
#![cfg_attr(docsrs, feature(doc_cfg))]
//! Gaussian blur approximation by repeated box blurs.
//!
//! Each box pass costs the same for any radius, so the whole blur runs in time
//! linear in pixel count. Horizontal passes are run over rows, the image is
//! transposed, and the same passes are run again.
//!
//! ```
//! use boxgauss::{fast_box_gaussian, BorderPolicy, CLTParameters, FastBlurChannels, ThreadingPolicy};
//!
//! let mut image = vec![7u8; 3 * 3];
//! let mut scratch = vec![0u8; 3 * 3];
//! let slot = fast_box_gaussian(
//!     &mut image,
//!     &mut scratch,
//!     3,
//!     3,
//!     FastBlurChannels::Plane,
//!     CLTParameters::new(2.),
//!     BorderPolicy::Extend,
//!     ThreadingPolicy::Single,
//! )
//! .unwrap();
//! assert_eq!(slot.select(&image, &scratch), &[7u8; 9]);
//! ```

mod box_filter;
mod channels_configuration;
mod edge_mode;
mod fast_gaussian;
#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
mod fast_gaussian_image;
mod image;
mod pass_planner;
mod primitives;
mod threading_policy;
mod to_storage;
mod transpose;
mod util;

pub use box_filter::{
    box_blur_pass, box_blur_pass_f16, box_blur_pass_f32, box_blur_pass_u16, KernelSize,
};
pub use channels_configuration::FastBlurChannels;
pub use edge_mode::{remap_index, BorderPolicy};
pub use fast_gaussian::{
    box_gaussian, box_gaussian_f16, box_gaussian_f32, box_gaussian_u16, fast_box_gaussian,
    fast_box_gaussian_f16, fast_box_gaussian_f32, fast_box_gaussian_u16, BufferSlot,
    CLTParameters, MAX_PASSES,
};
#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
pub use fast_gaussian_image::fast_gaussian_blur_image;
pub use half::f16;
pub use image::{BlurImage, BlurImageMut, BufferStore};
pub use pass_planner::{plan_box_radii, BoxPlan};
pub use threading_policy::ThreadingPolicy;
pub use transpose::{transpose, transpose_f16, transpose_f32, transpose_u16};
pub use util::{BlurError, MismatchedSize};
