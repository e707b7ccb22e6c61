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

/// Box radii that together approximate a gaussian.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlan {
    /// One radius per pass, smaller ones go first.
    pub radii: Vec<usize>,
    /// Standard deviation the radii actually achieve, it may differ from requested one.
    pub sigma: f32,
}

/// Splits gaussian with `sigma` into `passes` box blurs.
///
/// Variance of a box of odd width `w` is `(w * w - 1) / 12`, and variances of
/// consecutive passes add up. Ideal width is rounded to the two nearest odd widths
/// `wl` and `wu = wl + 2`, then the first `m` passes take `wl` so that the total
/// variance comes as close to `sigma * sigma` as possible.
pub fn plan_box_radii(sigma: f32, passes: usize) -> Result<BoxPlan, BlurError> {
    if !sigma.is_finite() || sigma <= 0. {
        return Err(BlurError::NegativeOrZeroSigma);
    }
    if passes == 0 {
        return Err(BlurError::UnsupportedPassCount(passes));
    }
    let n = passes as f64;
    let sigma = sigma as f64;
    let variance12 = 12. * sigma * sigma;

    let w_ideal = (variance12 / n + 1.).sqrt().floor();
    // radius (wu - 1) / 2 has to give a representable box of 2r + 1 samples
    if w_ideal >= (usize::MAX / 2) as f64 {
        return Err(BlurError::ExceedingPointerSize);
    }
    let mut wl = w_ideal as usize;
    if wl % 2 == 0 {
        wl -= 1;
    }
    let wu = wl.checked_add(2).ok_or(BlurError::ExceedingPointerSize)?;

    let wl_f = wl as f64;
    let wu_f = wu as f64;
    let m_ideal = (variance12 - n * wl_f * wl_f - 4. * n * wl_f - 3. * n) / (-4. * wl_f - 4.);
    let m = ((m_ideal + 0.5) as i64).clamp(0, passes as i64) as usize;

    let radii = (0..passes)
        .map(|i| if i < m { (wl - 1) / 2 } else { (wu - 1) / 2 })
        .collect::<Vec<_>>();

    let m_f = m as f64;
    let achieved = ((m_f * wl_f * wl_f + (n - m_f) * wu_f * wu_f - n) / 12.).sqrt();

    Ok(BoxPlan {
        radii,
        sigma: achieved as f32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_sigma_2() {
        let plan = plan_box_radii(2., 3).unwrap();
        assert_eq!(plan.radii, vec![1, 1, 2]);
        assert!((plan.sigma - (40f32 / 12.).sqrt()).abs() < 1e-5);
    }

    #[test]
    fn test_plan_sigma_5() {
        let plan = plan_box_radii(5., 3).unwrap();
        assert_eq!(plan.radii, vec![4, 4, 5]);
        assert!((plan.sigma - 5.).abs() < 0.25);
    }

    #[test]
    fn test_tiny_sigma_is_identity() {
        let plan = plan_box_radii(0.2, 3).unwrap();
        assert_eq!(plan.radii, vec![0, 0, 0]);
        assert_eq!(plan.sigma, 0.);
    }

    #[test]
    fn test_radii_are_sorted_and_close() {
        for passes in 1..=10usize {
            for i in 1..200 {
                let sigma = i as f32 * 0.37;
                let plan = plan_box_radii(sigma, passes).unwrap();
                assert_eq!(plan.radii.len(), passes);
                assert!(plan.radii.windows(2).all(|w| w[0] <= w[1]));
                let first = plan.radii[0];
                assert!(plan.radii.iter().all(|&r| r == first || r == first + 1));
                assert!(
                    (plan.sigma - sigma).abs() <= sigma * 0.35 + 0.6,
                    "sigma {sigma} passes {passes} achieved {}",
                    plan.sigma
                );
            }
        }
    }

    #[test]
    fn test_huge_sigma() {
        let plan = plan_box_radii(1e10, 3).unwrap();
        assert_eq!(plan.radii.len(), 3);
        assert!(plan.radii.windows(2).all(|w| w[0] <= w[1]));
        assert!(((plan.sigma - 1e10) / 1e10).abs() < 1e-3, "{}", plan.sigma);
        for &radius in plan.radii.iter() {
            assert!(radius.checked_mul(2).and_then(|x| x.checked_add(1)).is_some());
        }

        for passes in 1..=10usize {
            for sigma in [3e9f32, 1e15, 1e18, 1e30, f32::MAX] {
                match plan_box_radii(sigma, passes) {
                    Ok(plan) => {
                        assert_eq!(plan.radii.len(), passes);
                        assert!(plan.sigma.is_finite());
                    }
                    Err(err) => assert_eq!(err, BlurError::ExceedingPointerSize),
                }
            }
        }
        assert_eq!(
            plan_box_radii(f32::MAX, 3),
            Err(BlurError::ExceedingPointerSize)
        );
    }

    #[test]
    fn test_rejects_invalid() {
        assert_eq!(plan_box_radii(0., 3), Err(BlurError::NegativeOrZeroSigma));
        assert_eq!(plan_box_radii(-1., 3), Err(BlurError::NegativeOrZeroSigma));
        assert_eq!(
            plan_box_radii(f32::NAN, 3),
            Err(BlurError::NegativeOrZeroSigma)
        );
        assert_eq!(plan_box_radii(1., 0), Err(BlurError::UnsupportedPassCount(0)));
    }
}
