//! # 元素数据库
//!
//! 按元素符号查询名称、原子质量和 X 射线原子散射因子。
//!
//! ## 散射因子公式
//! f(s) = Σᵢ aᵢ exp(-bᵢ s²) + c，其中 s = sin(θ)/λ
//!
//! ## 数据来源
//! - 散射因子：International Tables for Crystallography, Vol. C, Table 6.1.1.4
//! - 原子质量：IUPAC 标准原子量（四舍五入）
//!
//! ## 依赖关系
//! - 被 `models/structure.rs` 使用（通过 `ElementLookup` trait）
//! - 纯静态数据，无外部模块依赖

use crate::error::{LatticeError, Result};

use std::collections::HashMap;
use std::sync::LazyLock;

/// 原子散射因子参数 (Cromer-Mann)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatteringFactorParams {
    pub a: [f64; 4],
    pub b: [f64; 4],
    pub c: f64,
}

impl ScatteringFactorParams {
    /// 计算散射因子 f(s)，其中 s = sin(θ)/λ
    pub fn calculate(&self, s: f64) -> f64 {
        let s2 = s * s;
        self.a
            .iter()
            .zip(self.b.iter())
            .fold(self.c, |f, (a, b)| f + a * (-b * s2).exp())
    }
}

/// 元素信息
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    /// 元素符号
    pub symbol: &'static str,
    /// 英文名称
    pub name: &'static str,
    /// 原子质量 (u)
    pub mass: f64,
    /// 散射因子参数
    pub scattering: ScatteringFactorParams,
}

impl Element {
    /// 散射因子 f(s)
    pub fn scattering_factor(&self, s: f64) -> f64 {
        self.scattering.calculate(s)
    }

    /// 前向散射因子 f(0)，约等于电子数
    pub fn f0(&self) -> f64 {
        self.scattering.calculate(0.0)
    }
}

/// 元素查询能力
pub trait ElementLookup {
    fn lookup(&self, symbol: &str) -> Result<Element>;
}

/// 内置元素周期表
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodicTable;

impl ElementLookup for PeriodicTable {
    fn lookup(&self, symbol: &str) -> Result<Element> {
        let normalized = normalize_symbol(symbol);
        ELEMENT_INDEX
            .get(normalized.as_str())
            .copied()
            .ok_or_else(|| LatticeError::UnknownElement(symbol.to_string()))
    }
}

/// 规范化元素符号："fe" -> "Fe"，"Fe1" -> "Fe"
fn normalize_symbol(symbol: &str) -> String {
    let letters: String = symbol
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();

    let mut chars = letters.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
        None => String::new(),
    }
}

macro_rules! element {
    ($symbol:literal, $name:literal, $mass:literal, [$($a:literal),+], [$($b:literal),+], $c:literal) => {
        Element {
            symbol: $symbol,
            name: $name,
            mass: $mass,
            scattering: ScatteringFactorParams {
                a: [$($a),+],
                b: [$($b),+],
                c: $c,
            },
        }
    };
}

/// 元素数据表
static ELEMENTS: &[Element] = &[
    element!("H", "Hydrogen", 1.008, [0.493002, 0.322912, 0.140191, 0.040810], [10.5109, 26.1257, 3.14236, 57.7997], 0.003038),
    element!("He", "Helium", 4.0026, [0.8734, 0.6309, 0.3112, 0.1780], [9.1037, 3.3568, 22.9276, 0.9821], 0.0064),
    element!("Li", "Lithium", 6.94, [1.1282, 0.7508, 0.6175, 0.4653], [3.9546, 1.0524, 85.3905, 168.261], 0.0377),
    element!("Be", "Beryllium", 9.0122, [1.5919, 1.1278, 0.5391, 0.7029], [43.6427, 1.8623, 103.483, 0.5420], 0.0385),
    element!("B", "Boron", 10.81, [2.0545, 1.3326, 1.0979, 0.7068], [23.2185, 1.0210, 60.3498, 0.1403], -0.1932),
    element!("C", "Carbon", 12.011, [2.3100, 1.0200, 1.5886, 0.8650], [20.8439, 10.2075, 0.5687, 51.6512], 0.2156),
    element!("N", "Nitrogen", 14.007, [12.2126, 3.1322, 2.0125, 1.1663], [0.0057, 9.8933, 28.9975, 0.5826], -11.529),
    element!("O", "Oxygen", 15.999, [3.0485, 2.2868, 1.5463, 0.8670], [13.2771, 5.7011, 0.3239, 32.9089], 0.2508),
    element!("F", "Fluorine", 18.998, [3.5392, 2.6412, 1.5170, 1.0243], [10.2825, 4.2944, 0.2615, 26.1476], 0.2776),
    element!("Na", "Sodium", 22.990, [4.7626, 3.1736, 1.2674, 1.1128], [3.2850, 8.8422, 0.3136, 129.424], 0.6760),
    element!("Mg", "Magnesium", 24.305, [5.4204, 2.1735, 1.2269, 2.3073], [2.8275, 79.2611, 0.3808, 7.1937], 0.8584),
    element!("Al", "Aluminium", 26.982, [6.4202, 1.9002, 1.5936, 1.9646], [3.0387, 0.7426, 31.5472, 85.0886], 1.1151),
    element!("Si", "Silicon", 28.085, [6.2915, 3.0353, 1.9891, 1.5410], [2.4386, 32.3337, 0.6785, 81.6937], 1.1407),
    element!("P", "Phosphorus", 30.974, [6.4345, 4.1791, 1.7800, 1.4908], [1.9067, 27.1570, 0.5260, 68.1645], 1.1149),
    element!("S", "Sulfur", 32.06, [6.9053, 5.2034, 1.4379, 1.5863], [1.4679, 22.2151, 0.2536, 56.1720], 0.8669),
    element!("Cl", "Chlorine", 35.45, [11.4604, 7.1964, 6.2556, 1.6455], [0.0104, 1.1662, 18.5194, 47.7784], -9.5574),
    element!("K", "Potassium", 39.098, [8.2186, 7.4398, 1.0519, 0.8659], [12.7949, 0.7748, 213.187, 41.6841], 1.4228),
    element!("Ca", "Calcium", 40.078, [8.6266, 7.3873, 1.5899, 1.0211], [10.4421, 0.6599, 85.7484, 178.437], 1.3751),
    element!("Ti", "Titanium", 47.867, [9.7595, 7.3558, 1.6991, 1.9021], [7.8508, 0.5000, 35.6338, 116.105], 1.2807),
    element!("V", "Vanadium", 50.942, [10.2971, 7.3511, 2.0703, 2.0571], [6.8657, 0.4385, 26.8938, 102.478], 1.2199),
    element!("Cr", "Chromium", 51.996, [10.6406, 7.3537, 3.3240, 1.4922], [6.1038, 0.3920, 20.2626, 98.7399], 1.1832),
    element!("Mn", "Manganese", 54.938, [11.2819, 7.3573, 3.0193, 2.2441], [5.3409, 0.3432, 17.8674, 83.7543], 1.0896),
    element!("Fe", "Iron", 55.845, [11.7695, 7.3573, 3.5222, 2.3045], [4.7611, 0.3072, 15.3535, 76.8805], 1.0369),
    element!("Co", "Cobalt", 58.933, [12.2841, 7.3409, 4.0034, 2.3488], [4.2791, 0.2784, 13.5359, 71.1692], 1.0118),
    element!("Ni", "Nickel", 58.693, [12.8376, 7.2920, 4.4438, 2.3800], [3.8785, 0.2565, 12.1763, 66.3421], 1.0341),
    element!("Cu", "Copper", 63.546, [13.3380, 7.1676, 5.6158, 1.6735], [3.5828, 0.2470, 11.3966, 64.8126], 1.1910),
    element!("Zn", "Zinc", 65.38, [14.0743, 7.0318, 5.1652, 2.4100], [3.2655, 0.2333, 10.3163, 58.7097], 1.3041),
    element!("Ga", "Gallium", 69.723, [15.2354, 6.7006, 4.3591, 2.9623], [3.0669, 0.2412, 10.7805, 61.4135], 1.7189),
    element!("Ge", "Germanium", 72.630, [16.0816, 6.3747, 3.7068, 3.6830], [2.8509, 0.2516, 11.4468, 54.7625], 2.1313),
    element!("As", "Arsenic", 74.922, [16.6723, 6.0701, 3.4313, 4.2779], [2.6345, 0.2647, 12.9479, 47.7972], 2.531),
    element!("Se", "Selenium", 78.971, [17.0006, 5.8196, 3.9731, 4.3543], [2.4098, 0.2726, 15.2372, 43.8163], 2.8409),
    element!("Br", "Bromine", 79.904, [17.1789, 5.2358, 5.6377, 3.9851], [2.1723, 16.5796, 0.2609, 41.4328], 2.9557),
    element!("Rb", "Rubidium", 85.468, [17.5816, 7.6598, 5.8981, 2.7817], [1.7139, 14.7957, 0.1603, 31.2087], 2.0782),
    element!("Sr", "Strontium", 87.62, [17.5663, 9.8184, 5.4220, 2.6694], [1.5564, 14.0988, 0.1664, 132.376], 2.5064),
    element!("Y", "Yttrium", 88.906, [17.7760, 10.2946, 5.7263, 3.2656], [1.4029, 12.8006, 0.1255, 104.354], 1.9341),
    element!("Zr", "Zirconium", 91.224, [17.8765, 10.9480, 5.4173, 3.6577], [1.2761, 11.9160, 0.1176, 87.6627], 2.0690),
    element!("Nb", "Niobium", 92.906, [17.6142, 12.0144, 4.0418, 3.5334], [1.1886, 11.7660, 0.2047, 69.7957], 3.7553),
    element!("Mo", "Molybdenum", 95.95, [3.7025, 17.2356, 12.8876, 3.7429], [0.2772, 1.0958, 11.0040, 61.6584], 4.3875),
    element!("Ag", "Silver", 107.87, [19.2808, 16.6885, 4.8045, 1.0463], [0.6446, 7.4726, 24.6605, 99.8156], 5.1790),
    element!("Ba", "Barium", 137.33, [20.3361, 19.2970, 10.8880, 2.6959], [3.2160, 0.2756, 20.2073, 167.202], 2.7731),
    element!("La", "Lanthanum", 138.91, [20.5780, 19.5990, 11.3727, 3.2879], [2.9480, 0.2440, 18.7726, 133.124], 2.1461),
    element!("Ce", "Cerium", 140.12, [21.1671, 19.7695, 11.8513, 3.3303], [2.8129, 0.2268, 17.6083, 127.113], 1.8623),
    element!("Au", "Gold", 196.97, [16.8819, 18.5913, 25.5582, 5.8600], [0.4611, 8.6216, 1.4826, 36.3956], 12.0658),
    element!("Pb", "Lead", 207.2, [31.0617, 13.0637, 18.4420, 5.9696], [0.6902, 2.3576, 8.6180, 47.2579], 13.4118),
    element!("Bi", "Bismuth", 208.98, [33.3689, 12.9510, 16.5877, 6.4692], [0.7040, 2.9238, 8.7937, 48.0093], 13.5782),
];

/// 符号 -> 元素索引
static ELEMENT_INDEX: LazyLock<HashMap<&'static str, Element>> =
    LazyLock::new(|| ELEMENTS.iter().map(|e| (e.symbol, *e)).collect());
