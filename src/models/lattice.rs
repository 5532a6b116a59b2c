//! # 晶格参数模型
//!
//! 保存六个晶格参数 (a, b, c, α, β, γ)，按需计算正格子矩阵和倒格子矩阵。
//!
//! ## 约定
//! - 构造函数接收的角度单位为**度**，内部存储与全部三角运算使用**弧度**
//! - 矩阵按行存储基矢：`[v1; v2; v3]`
//! - v1 沿 x 轴，v2 位于 xy 平面，v3 补全右手系
//! - 倒格子默认采用晶体学约定（不含 2π），物理约定可选
//!
//! ## 依赖关系
//! - 被 `models/structure.rs` 和 `commands/` 使用
//! - 使用 `utils/vector.rs` 的向量运算

use crate::error::{LatticeError, Result};
use crate::utils::vector::{self, Mat3};

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::io::{self, Write};

/// |sin γ| 低于该值视为 γ 退化（绝对量）
const SIN_GAMMA_TOL: f64 = 1e-10;

/// 1 - cx² - cy² 的舍入噪声幅度，绝对值低于该值时取 0
///
/// cx、cy 各带约 1 ulp 的误差，根号内项的噪声在 1e-16 量级；
/// 对应的 cz 噪声上限为 sqrt(1e-14) = 1e-7。
const RADICAND_TOL: f64 = 1e-14;

/// 体积相对 |a·b·c| 低于该比例视为基矢共面
const SINGULAR_VOLUME_TOL: f64 = 1e-10;

/// 倒格子约定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReciprocalConvention {
    /// a*·a = 1（晶体学，无 2π 因子）
    #[default]
    Crystallographic,
    /// a*·a = 2π（固体物理）
    Physics,
}

impl ReciprocalConvention {
    fn factor(self) -> f64 {
        match self {
            ReciprocalConvention::Crystallographic => 1.0,
            ReciprocalConvention::Physics => 2.0 * PI,
        }
    }
}

impl fmt::Display for ReciprocalConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReciprocalConvention::Crystallographic => write!(f, "crystallographic"),
            ReciprocalConvention::Physics => write!(f, "physics (2π)"),
        }
    }
}

/// 晶格参数
///
/// 构造后不可变。正/倒格子矩阵每次调用时重新计算，不做缓存。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatticeParameters {
    a: f64,
    b: f64,
    c: f64,
    /// 弧度
    alpha: f64,
    /// 弧度
    beta: f64,
    /// 弧度
    gamma: f64,
}

impl LatticeParameters {
    /// 从晶格参数创建，角度单位：度
    ///
    /// 几何无效的参数不会导致构造失败，只记录警告；需要严格检查时调用 [`validate`](Self::validate)。
    pub fn from_parameters(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        Self::checked(LatticeParameters {
            a,
            b,
            c,
            alpha: alpha.to_radians(),
            beta: beta.to_radians(),
            gamma: gamma.to_radians(),
        })
    }

    /// 从三个基矢创建，矩阵的行依次为 va, vb, vc
    ///
    /// α 是 vb 与 vc 的夹角，β 是 vc 与 va 的夹角，γ 是 va 与 vb 的夹角。
    pub fn from_vectors(matrix: Mat3) -> Self {
        let [va, vb, vc] = matrix;

        Self::checked(LatticeParameters {
            a: vector::length(&va),
            b: vector::length(&vb),
            c: vector::length(&vc),
            alpha: vector::angle_between(&vb, &vc),
            beta: vector::angle_between(&vc, &va),
            gamma: vector::angle_between(&va, &vb),
        })
    }

    /// 从六个数值 (a, b, c, α, β, γ) 创建，角度单位：度
    pub fn try_from_slice(values: &[f64]) -> Result<Self> {
        match values {
            &[a, b, c, alpha, beta, gamma] => {
                Ok(Self::from_parameters(a, b, c, alpha, beta, gamma))
            }
            _ => Err(LatticeError::InvalidDimension {
                expected: 6,
                found: values.len(),
            }),
        }
    }

    fn checked(params: LatticeParameters) -> Self {
        log::info!("lattice parameters = {}", params);
        if let Err(e) = params.validate() {
            log::warn!("lattice parameters are invalid: {}", e);
        }
        params
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    /// α（弧度）
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// β（弧度）
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// γ（弧度）
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// 以度为单位返回 (a, b, c, α, β, γ)
    pub fn to_degrees(&self) -> (f64, f64, f64, f64, f64, f64) {
        (
            self.a,
            self.b,
            self.c,
            self.alpha.to_degrees(),
            self.beta.to_degrees(),
            self.gamma.to_degrees(),
        )
    }

    /// 长度全部为正且角度全部落在开区间 (0, π) 内
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// 检查几何合理性，返回第一个不合理的参数
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("a", self.a), ("b", self.b), ("c", self.c)] {
            // NaN 同样视为无效
            if !(value > 0.0) {
                return Err(LatticeError::InvalidGeometry { parameter, value });
            }
        }

        for (parameter, value) in [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("gamma", self.gamma),
        ] {
            if !(value > 0.0 && value < PI) {
                return Err(LatticeError::InvalidGeometry {
                    parameter,
                    value: value.to_degrees(),
                });
            }
        }

        Ok(())
    }

    /// 计算正格子矩阵
    ///
    /// ```text
    /// v1 = (a, 0, 0)
    /// v2 = (b cosγ, b sinγ, 0)
    /// v3 = c (cosβ, (cosα - cosβ cosγ) / sinγ, sqrt(1 - cx² - cy²))
    /// ```
    pub fn direct_matrix(&self) -> Result<Mat3> {
        let (sin_gamma, cos_gamma) = self.gamma.sin_cos();
        let (sin_beta, cos_beta) = self.beta.sin_cos();
        let cos_alpha = self.alpha.cos();

        if sin_gamma.abs() < SIN_GAMMA_TOL {
            return Err(LatticeError::DegenerateGamma {
                gamma: self.gamma.to_degrees(),
            });
        }

        let cx = cos_beta;
        let cy = (cos_alpha - cos_beta * cos_gamma) / sin_gamma;
        // 1 - cx² 写成 sin²β，β 很小时不损失有效数字
        let radicand = sin_beta * sin_beta - cy * cy;

        if radicand < -RADICAND_TOL || radicand.is_nan() {
            return Err(LatticeError::InconsistentAngles {
                alpha: self.alpha.to_degrees(),
                beta: self.beta.to_degrees(),
                gamma: self.gamma.to_degrees(),
                radicand,
            });
        }
        // 舍入噪声范围内视为共面
        let cz = if radicand.abs() < RADICAND_TOL {
            0.0
        } else {
            radicand.sqrt()
        };

        let m = [
            [self.a, 0.0, 0.0],
            [self.b * cos_gamma, self.b * sin_gamma, 0.0],
            vector::scale(&vector::normalize(&[cx, cy, cz]), self.c),
        ];

        log::debug!("direct matrix = {:?}", m);
        Ok(m)
    }

    /// 计算倒格子矩阵（晶体学约定）
    pub fn reciprocal_matrix(&self) -> Result<Mat3> {
        self.reciprocal_matrix_with(ReciprocalConvention::Crystallographic)
    }

    /// 按指定约定计算倒格子矩阵
    ///
    /// r1 = v2×v3 / V, r2 = v3×v1 / V, r3 = v1×v2 / V，物理约定再乘 2π。
    pub fn reciprocal_matrix_with(&self, convention: ReciprocalConvention) -> Result<Mat3> {
        let [v1, v2, v3] = self.direct_matrix()?;
        let volume = vector::determinant(&[v1, v2, v3]);

        // 长度为 0 或为负时阈值同样成立；NaN 体积也在此拒绝
        let threshold = SINGULAR_VOLUME_TOL * (self.a * self.b * self.c).abs();
        if !(volume.abs() > threshold) {
            return Err(LatticeError::SingularBasis { volume });
        }

        let factor = convention.factor() / volume;
        let m = [
            vector::scale(&vector::cross(&v2, &v3), factor),
            vector::scale(&vector::cross(&v3, &v1), factor),
            vector::scale(&vector::cross(&v1, &v2), factor),
        ];

        log::debug!("reciprocal matrix ({}) = {:?}", convention, m);
        Ok(m)
    }

    /// 晶胞体积
    pub fn volume(&self) -> Result<f64> {
        Ok(vector::determinant(&self.direct_matrix()?))
    }

    /// 输出可读的晶格参数（角度转换为度）
    pub fn report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let (a, b, c, alpha, beta, gamma) = self.to_degrees();
        writeln!(out, "\ta = {:.6}", a)?;
        writeln!(out, "\tb = {:.6}", b)?;
        writeln!(out, "\tc = {:.6}", c)?;
        writeln!(out, "\talpha = {:.6}", alpha)?;
        writeln!(out, "\tbeta = {:.6}", beta)?;
        writeln!(out, "\tgamma = {:.6}", gamma)?;
        Ok(())
    }
}

impl fmt::Display for LatticeParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b, c, alpha, beta, gamma) = self.to_degrees();
        write!(
            f,
            "({:.6} {:.6} {:.6} {:.6} {:.6} {:.6})",
            a, b, c, alpha, beta, gamma
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn assert_matrix_close(actual: &Mat3, expected: &Mat3, tol: f64) {
        for i in 0..3 {
            for j in 0..3 {
                assert!(
                    (actual[i][j] - expected[i][j]).abs() < tol,
                    "m[{}][{}] = {}, expected {}",
                    i,
                    j,
                    actual[i][j],
                    expected[i][j]
                );
            }
        }
    }

    #[test]
    fn test_angles_stored_in_radians() {
        let lp = LatticeParameters::from_parameters(1.0, 1.0, 1.0, 90.0, 60.0, 120.0);
        assert!((lp.alpha() - PI / 2.0).abs() < TOL);
        assert!((lp.beta() - PI / 3.0).abs() < TOL);
        assert!((lp.gamma() - 2.0 * PI / 3.0).abs() < TOL);
    }

    #[test]
    fn test_cubic_direct_matrix_is_scaled_identity() {
        let lp = LatticeParameters::from_parameters(3.5, 3.5, 3.5, 90.0, 90.0, 90.0);
        let m = lp.direct_matrix().unwrap();
        assert_matrix_close(
            &m,
            &[[3.5, 0.0, 0.0], [0.0, 3.5, 0.0], [0.0, 0.0, 3.5]],
            TOL,
        );
    }

    #[test]
    fn test_orthorhombic_direct_matrix() {
        let lp = LatticeParameters::from_parameters(4.0, 5.0, 6.0, 90.0, 90.0, 90.0);
        let m = lp.direct_matrix().unwrap();
        assert_matrix_close(
            &m,
            &[[4.0, 0.0, 0.0], [0.0, 5.0, 0.0], [0.0, 0.0, 6.0]],
            TOL,
        );
    }

    #[test]
    fn test_hexagonal_direct_matrix() {
        let lp = LatticeParameters::from_parameters(3.0, 3.0, 5.0, 90.0, 90.0, 120.0);
        let m = lp.direct_matrix().unwrap();
        assert!((m[1][0] + 1.5).abs() < TOL);
        assert!((m[1][1] - 3.0 * (3.0_f64).sqrt() / 2.0).abs() < TOL);
        assert!((m[2][2] - 5.0).abs() < TOL);
    }

    #[test]
    fn test_round_trip_through_direct_matrix() {
        let cases = [
            (5.1, 6.2, 7.3, 80.0, 95.0, 105.0),
            (3.0, 3.0, 5.0, 90.0, 90.0, 120.0),
            (4.2, 4.2, 4.2, 70.0, 70.0, 70.0),
            (2.5, 8.0, 3.3, 100.0, 110.0, 75.0),
        ];

        for (a, b, c, alpha, beta, gamma) in cases {
            let lp = LatticeParameters::from_parameters(a, b, c, alpha, beta, gamma);
            let rebuilt = LatticeParameters::from_vectors(lp.direct_matrix().unwrap());
            let (ra, rb, rc, ralpha, rbeta, rgamma) = rebuilt.to_degrees();

            assert!((ra - a).abs() < 1e-8);
            assert!((rb - b).abs() < 1e-8);
            assert!((rc - c).abs() < 1e-8);
            assert!((ralpha - alpha).abs() < 1e-6);
            assert!((rbeta - beta).abs() < 1e-6);
            assert!((rgamma - gamma).abs() < 1e-6);
        }
    }

    #[test]
    fn test_from_vectors_uses_opposite_angle_convention() {
        // vc 与 va 夹 60°，其余两两正交
        let half = 0.5;
        let lp = LatticeParameters::from_vectors([
            [1.0, 0.0, 0.0],
            [0.0, 2.0, 0.0],
            [half, 0.0, (3.0_f64).sqrt() / 2.0],
        ]);
        let (a, b, c, alpha, beta, gamma) = lp.to_degrees();
        assert!((a - 1.0).abs() < TOL);
        assert!((b - 2.0).abs() < TOL);
        assert!((c - 1.0).abs() < TOL);
        assert!((alpha - 90.0).abs() < 1e-6);
        assert!((beta - 60.0).abs() < 1e-6);
        assert!((gamma - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_reciprocal_is_dual_basis() {
        let cases = [
            (5.1, 6.2, 7.3, 80.0, 95.0, 105.0),
            (3.0, 3.0, 5.0, 90.0, 90.0, 120.0),
            (1.0, 1.0, 1.0, 90.0, 90.0, 90.0),
        ];

        for (a, b, c, alpha, beta, gamma) in cases {
            let lp = LatticeParameters::from_parameters(a, b, c, alpha, beta, gamma);
            let direct = lp.direct_matrix().unwrap();
            let recip = lp.reciprocal_matrix().unwrap();
            let product = vector::mat_mul(&direct, &vector::transpose(&recip));
            assert_matrix_close(
                &product,
                &[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
                1e-9,
            );
        }
    }

    #[test]
    fn test_reciprocal_physics_convention() {
        let lp = LatticeParameters::from_parameters(2.0, 2.0, 2.0, 90.0, 90.0, 90.0);
        let recip = lp
            .reciprocal_matrix_with(ReciprocalConvention::Physics)
            .unwrap();
        assert!((recip[0][0] - PI).abs() < TOL);
        assert!((recip[2][2] - PI).abs() < TOL);
    }

    #[test]
    fn test_orthorhombic_reciprocal() {
        let lp = LatticeParameters::from_parameters(4.0, 5.0, 6.0, 90.0, 90.0, 90.0);
        let recip = lp.reciprocal_matrix().unwrap();
        assert_matrix_close(
            &recip,
            &[[0.25, 0.0, 0.0], [0.0, 0.2, 0.0], [0.0, 0.0, 1.0 / 6.0]],
            TOL,
        );
    }

    #[test]
    fn test_volume() {
        let lp = LatticeParameters::from_parameters(4.0, 5.0, 6.0, 90.0, 90.0, 90.0);
        assert!((lp.volume().unwrap() - 120.0).abs() < 1e-9);

        let hex = LatticeParameters::from_parameters(3.0, 3.0, 5.0, 90.0, 90.0, 120.0);
        let expected = 3.0 * 3.0 * 5.0 * (3.0_f64).sqrt() / 2.0;
        assert!((hex.volume().unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_is_valid() {
        assert!(LatticeParameters::from_parameters(1.0, 1.0, 1.0, 90.0, 90.0, 90.0).is_valid());
        assert!(!LatticeParameters::from_parameters(0.0, 1.0, 1.0, 90.0, 90.0, 90.0).is_valid());
        assert!(!LatticeParameters::from_parameters(1.0, 1.0, 1.0, 0.0, 90.0, 90.0).is_valid());
        assert!(!LatticeParameters::from_parameters(1.0, -2.0, 1.0, 90.0, 90.0, 90.0).is_valid());
    }

    #[test]
    fn test_alpha_equal_to_pi_is_invalid() {
        // vb 与 vc 反向，α 恰为 π
        let lp = LatticeParameters::from_vectors([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, -1.0, 0.0],
        ]);
        assert_eq!(lp.alpha(), PI);
        assert!(!lp.is_valid());
    }

    #[test]
    fn test_validate_names_offending_parameter() {
        let lp = LatticeParameters::from_parameters(1.0, 1.0, 1.0, 90.0, 190.0, 90.0);
        match lp.validate() {
            Err(LatticeError::InvalidGeometry { parameter, value }) => {
                assert_eq!(parameter, "beta");
                assert!((value - 190.0).abs() < 1e-9);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_gamma_zero_is_degenerate() {
        let lp = LatticeParameters::from_parameters(1.0, 1.0, 1.0, 90.0, 90.0, 0.0);
        assert!(matches!(
            lp.direct_matrix(),
            Err(LatticeError::DegenerateGamma { .. })
        ));
    }

    #[test]
    fn test_gamma_180_is_degenerate() {
        let lp = LatticeParameters::from_parameters(1.0, 1.0, 1.0, 90.0, 90.0, 180.0);
        assert!(matches!(
            lp.direct_matrix(),
            Err(LatticeError::DegenerateGamma { .. })
        ));
    }

    #[test]
    fn test_inconsistent_angle_triple() {
        // 每个角都在 (0, π) 内，但 α + β < γ 不可能构成晶胞
        let lp = LatticeParameters::from_parameters(1.0, 1.0, 1.0, 30.0, 30.0, 120.0);
        assert!(lp.is_valid());
        assert!(matches!(
            lp.direct_matrix(),
            Err(LatticeError::InconsistentAngles { .. })
        ));
        assert!(lp.reciprocal_matrix().is_err());
    }

    #[test]
    fn test_coplanar_vectors_fail_reciprocal() {
        let lp = LatticeParameters::from_vectors([
            [1.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
        ]);
        assert!(lp.reciprocal_matrix().is_err());
    }

    #[test]
    fn test_flat_cell_is_singular() {
        // va, vb 正交，vc 落在二者平面内：γ 正常但体积为零
        let lp = LatticeParameters::from_vectors([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
        ]);
        assert!(lp.direct_matrix().is_ok());
        assert!(matches!(
            lp.reciprocal_matrix(),
            Err(LatticeError::SingularBasis { .. })
        ));
    }

    #[test]
    fn test_zero_length_is_singular() {
        let lp = LatticeParameters::from_parameters(0.0, 1.0, 1.0, 90.0, 90.0, 90.0);
        assert!(!lp.is_valid());
        assert!(matches!(
            lp.reciprocal_matrix(),
            Err(LatticeError::SingularBasis { .. })
        ));
    }

    #[test]
    fn test_negative_length_flat_cell_is_singular() {
        // α = β = 45°, γ = 90°：v3 落在 xy 平面内
        let lp = LatticeParameters::from_parameters(-1.0, 1.0, 1.0, 45.0, 45.0, 90.0);
        assert!(matches!(
            lp.reciprocal_matrix(),
            Err(LatticeError::SingularBasis { .. })
        ));
        assert!(lp
            .reciprocal_matrix_with(ReciprocalConvention::Physics)
            .is_err());
    }

    #[test]
    fn test_negative_length_reciprocal_stays_finite() {
        let lp = LatticeParameters::from_parameters(-2.0, 1.0, 1.0, 90.0, 90.0, 90.0);
        assert!(!lp.is_valid());
        let recip = lp.reciprocal_matrix().unwrap();
        assert!(recip.iter().flatten().all(|x| x.is_finite()));
        assert!((recip[0][0] + 0.5).abs() < TOL);
    }

    #[test]
    fn test_thin_cell_keeps_small_height() {
        // cz = sin β = 1e-6，半径项 1e-12 不属于舍入噪声
        let beta = (1e-6_f64).asin().to_degrees();
        let lp = LatticeParameters::from_parameters(1.0, 1.0, 1.0, 90.0, beta, 90.0);

        let direct = lp.direct_matrix().unwrap();
        assert!((direct[2][2] / 1e-6 - 1.0).abs() < 1e-6);
        assert!((lp.volume().unwrap() / 1e-6 - 1.0).abs() < 1e-6);

        let recip = lp.reciprocal_matrix().unwrap();
        assert!((recip[2][2] / 1e6 - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_try_from_slice_rejects_wrong_length() {
        assert!(LatticeParameters::try_from_slice(&[1.0, 2.0, 3.0, 90.0, 90.0, 90.0]).is_ok());
        assert!(matches!(
            LatticeParameters::try_from_slice(&[1.0, 2.0, 3.0]),
            Err(LatticeError::InvalidDimension {
                expected: 6,
                found: 3
            })
        ));
    }

    #[test]
    fn test_report_prints_degrees() {
        let lp = LatticeParameters::from_parameters(4.0, 5.0, 6.0, 90.0, 90.0, 120.0);
        let mut buf = Vec::new();
        lp.report(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(
            text,
            "\ta = 4.000000\n\tb = 5.000000\n\tc = 6.000000\n\
             \talpha = 90.000000\n\tbeta = 90.000000\n\tgamma = 120.000000\n"
        );
    }

    #[test]
    fn test_display() {
        let lp = LatticeParameters::from_parameters(1.0, 2.0, 3.0, 90.0, 90.0, 90.0);
        assert_eq!(
            lp.to_string(),
            "(1.000000 2.000000 3.000000 90.000000 90.000000 90.000000)"
        );
    }
}
