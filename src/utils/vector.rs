//! # 三维向量与 3x3 矩阵工具
//!
//! 晶格计算用到的基础线性代数：长度、归一化、夹角、点积、叉积、行列式。
//! 矩阵统一按行存储，每一行是一个基矢。
//!
//! ## 依赖关系
//! - 被 `models/lattice.rs` 和 `models/structure.rs` 使用
//! - 无外部依赖

/// 三维向量
pub type Vec3 = [f64; 3];

/// 3x3 矩阵（行向量）
pub type Mat3 = [[f64; 3]; 3];

/// 向量长度（欧几里得范数），零向量返回 0
pub fn length(v: &Vec3) -> f64 {
    dot(v, v).sqrt()
}

/// 单位化向量
///
/// 调用方保证 `v` 非零，零向量会得到 NaN 分量。
pub fn normalize(v: &Vec3) -> Vec3 {
    scale(v, 1.0 / length(v))
}

/// 两向量夹角（弧度，范围 [0, π]）
///
/// 余弦值先截断到 [-1, 1]，避免浮点误差使 `acos` 越界。
pub fn angle_between(v1: &Vec3, v2: &Vec3) -> f64 {
    let cos = dot(v1, v2) / (length(v1) * length(v2));
    cos.clamp(-1.0, 1.0).acos()
}

/// 向量点积
pub fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// 向量叉积
pub fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// 数乘
pub fn scale(v: &Vec3, k: f64) -> Vec3 {
    [v[0] * k, v[1] * k, v[2] * k]
}

/// 行列式 a · (b × c)
pub fn determinant(m: &Mat3) -> f64 {
    dot(&m[0], &cross(&m[1], &m[2]))
}

/// 矩阵转置
pub fn transpose(m: &Mat3) -> Mat3 {
    let mut t = [[0.0; 3]; 3];
    for (i, row) in m.iter().enumerate() {
        for (j, value) in row.iter().enumerate() {
            t[j][i] = *value;
        }
    }
    t
}

/// 矩阵乘法 A · B
pub fn mat_mul(a: &Mat3, b: &Mat3) -> Mat3 {
    let mut out = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            out[i][j] = (0..3).map(|k| a[i][k] * b[k][j]).sum();
        }
    }
    out
}

/// 行向量乘矩阵 v · M
///
/// 分数坐标乘正格子矩阵即得笛卡尔坐标。
pub fn vec_mat_mul(v: &Vec3, m: &Mat3) -> Vec3 {
    [
        v[0] * m[0][0] + v[1] * m[1][0] + v[2] * m[2][0],
        v[0] * m[0][1] + v[1] * m[1][1] + v[2] * m[2][1],
        v[0] * m[0][2] + v[1] * m[1][2] + v[2] * m[2][2],
    ]
}
