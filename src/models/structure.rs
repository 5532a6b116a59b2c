//! # 晶格结构数据模型
//!
//! 晶格参数加上晶胞内原子（元素 + 分数坐标）的完整描述，
//! 以及简单立方、面心立方、体心立方三种预设结构。
//!
//! ## 依赖关系
//! - 被 `commands/build.rs` 和 `export.rs` 使用
//! - 使用 `models/lattice.rs` 与 `models/element.rs`

use crate::error::{LatticeError, Result};
use crate::models::element::{Element, ElementLookup};
use crate::models::lattice::LatticeParameters;
use crate::utils::vector::{self, Vec3};

use std::collections::BTreeMap;
use std::fmt;

/// 分数坐标
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FracCoord([f64; 3]);

impl FracCoord {
    /// 创建分数坐标
    ///
    /// 超出 [0, 1] 的分量仍被接受，但会记录警告。
    pub fn new(coords: [f64; 3]) -> Self {
        let coord = FracCoord(coords);
        if !coord.is_inside_cell() {
            log::warn!("fractional coordinates {:?} exceed 0 ~ 1", coords);
        }
        coord
    }

    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    pub fn z(&self) -> f64 {
        self.0[2]
    }

    pub fn as_array(&self) -> [f64; 3] {
        self.0
    }

    /// 所有分量都在 [0, 1] 内
    pub fn is_inside_cell(&self) -> bool {
        self.0.iter().all(|c| (0.0..=1.0).contains(c))
    }
}

impl From<[f64; 3]> for FracCoord {
    fn from(coords: [f64; 3]) -> Self {
        FracCoord::new(coords)
    }
}

impl TryFrom<&[f64]> for FracCoord {
    type Error = LatticeError;

    fn try_from(values: &[f64]) -> Result<Self> {
        let coords: [f64; 3] = values
            .try_into()
            .map_err(|_| LatticeError::InvalidDimension {
                expected: 3,
                found: values.len(),
            })?;
        Ok(FracCoord::new(coords))
    }
}

/// 原子信息
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// 元素
    pub element: Element,

    /// 分数坐标
    pub position: FracCoord,

    /// 可选：原子标签（用于区分同种元素的不同位置）
    pub label: Option<String>,
}

impl Atom {
    pub fn new(element: Element, position: impl Into<FracCoord>) -> Self {
        Atom {
            element,
            position: position.into(),
            label: None,
        }
    }

    /// 通过元素符号创建
    pub fn from_symbol(
        lookup: &impl ElementLookup,
        symbol: &str,
        position: impl Into<FracCoord>,
    ) -> Result<Self> {
        Ok(Atom::new(lookup.lookup(symbol)?, position))
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// 立方晶格类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubicKind {
    /// 简单立方
    Simple,
    /// 面心立方
    FaceCentered,
    /// 体心立方
    BodyCentered,
}

impl CubicKind {
    /// 晶胞内原子的分数坐标
    pub fn basis(&self) -> &'static [[f64; 3]] {
        match self {
            CubicKind::Simple => &[[0.0, 0.0, 0.0]],
            CubicKind::FaceCentered => &[
                [0.0, 0.0, 0.0],
                [0.5, 0.5, 0.0],
                [0.5, 0.0, 0.5],
                [0.0, 0.5, 0.5],
            ],
            CubicKind::BodyCentered => &[[0.0, 0.0, 0.0], [0.5, 0.5, 0.5]],
        }
    }
}

impl fmt::Display for CubicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CubicKind::Simple => write!(f, "sc"),
            CubicKind::FaceCentered => write!(f, "fcc"),
            CubicKind::BodyCentered => write!(f, "bcc"),
        }
    }
}

/// 晶格：晶格参数 + 原子列表
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    parameters: LatticeParameters,
    atoms: Vec<Atom>,
}

impl Lattice {
    pub fn new(parameters: LatticeParameters) -> Self {
        Lattice {
            parameters,
            atoms: Vec::new(),
        }
    }

    /// 创建单一元素的立方晶格，晶格常数为 `a`
    pub fn cubic(
        kind: CubicKind,
        lookup: &impl ElementLookup,
        symbol: &str,
        a: f64,
    ) -> Result<Self> {
        let element = lookup.lookup(symbol)?;
        let mut lattice = Lattice::new(LatticeParameters::from_parameters(
            a, a, a, 90.0, 90.0, 90.0,
        ));

        for coord in kind.basis() {
            lattice.add_atom(Atom::new(element, *coord));
        }

        log::info!("init of {} {} lattice is done", kind, element.symbol);
        Ok(lattice)
    }

    pub fn add_atom(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    pub fn parameters(&self) -> &LatticeParameters {
        &self.parameters
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// 笛卡尔坐标：cartesian = fractional · DirectMatrix
    pub fn cartesian_positions(&self) -> Result<Vec<Vec3>> {
        let direct = self.parameters.direct_matrix()?;
        Ok(self
            .atoms
            .iter()
            .map(|atom| vector::vec_mat_mul(&atom.position.as_array(), &direct))
            .collect())
    }

    /// 计算化学式
    pub fn formula(&self) -> String {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

        for atom in &self.atoms {
            *counts.entry(atom.element.symbol).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|(el, count)| {
                if count == 1 {
                    el.to_string()
                } else {
                    format!("{}{}", el, count)
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }

    /// 晶胞总质量 (u)
    pub fn cell_mass(&self) -> f64 {
        self.atoms.iter().map(|atom| atom.element.mass).sum()
    }
}
