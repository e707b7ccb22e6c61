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
use std::{num::NonZeroUsize, thread::available_parallelism};

/// Amount of pixels one worker is expected to handle before adaptive policy
/// considers spawning another one.
const PIXELS_PER_WORKER: usize = 256 * 256;

#[repr(C)]
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Default, Hash)]
/// Set threading policy.
///
/// Output never depends on the chosen policy, rows and transpose tiles
/// are independent units of work.
pub enum ThreadingPolicy {
    /// Run everything on the calling thread.
    Single,
    /// Derive worker count from image area, between 1 and available CPUs.
    #[default]
    Adaptive,
    /// Like `Adaptive`, but leave given amount of CPUs untouched.
    AdaptiveReserve(NonZeroUsize),
    /// Use exactly this number of workers.
    Fixed(NonZeroUsize),
}

impl ThreadingPolicy {
    /// Returns number of workers for an image of the given dimensions.
    ///
    /// Always at least 1.
    pub fn thread_count(&self, width: usize, height: usize) -> usize {
        let area_workers = width.saturating_mul(height) / PIXELS_PER_WORKER;
        match self {
            ThreadingPolicy::Single => 1,
            ThreadingPolicy::Adaptive => area_workers.clamp(1, Self::available_parallelism(2)),
            ThreadingPolicy::AdaptiveReserve(reserve) => {
                let max_threads = Self::available_parallelism(1);
                let allowed = max_threads.saturating_sub(reserve.get()).max(1);
                area_workers.clamp(1, allowed)
            }
            ThreadingPolicy::Fixed(fixed) => fixed.get(),
        }
    }

    /// Worker count for a job made of `units` independent pieces,
    /// there is no point to have idle workers.
    pub(crate) fn workers_for(&self, width: usize, height: usize, units: usize) -> usize {
        self.thread_count(width, height).min(units).max(1)
    }

    // Multi-threading was requested, so even a single core machine gets some concurrency
    fn available_parallelism(min: usize) -> usize {
        available_parallelism()
            .map(|x| x.get())
            .unwrap_or(1)
            .max(min)
    }
}
