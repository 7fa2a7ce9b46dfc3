//! # Halo catalogs
//!
//! The tabular hand-off format between merger-tree ingestion and the cross-referencing layer.
//! Ingestion (external to this crate) reads raw merger-tree records, keeps only present-epoch
//! nodes and writes one CSV table per tree file with the columns `position_x`, `position_y`,
//! `position_z`, `mass` and `v_circ`; this module loads such tables and offers the mass
//! selection the analysis pipeline applies before classification.

use camino::Utf8Path;
use itertools::Itertools;
use nalgebra::Vector3;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::constants::{Mpc, MsunH};
use crate::haloweb_errors::HaloWebError;

/// One present-epoch dark-matter halo record.
///
/// Positions are comoving, in the same Mpc/h units as the simulation box length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Halo {
    pub position_x: Mpc,
    pub position_y: Mpc,
    pub position_z: Mpc,
    /// Node mass in Msun/h
    pub mass: MsunH,
    /// Maximum circular velocity in km/s, when the ingestion step provides it
    #[serde(default)]
    pub v_circ: Option<f64>,
}

impl Halo {
    /// The comoving position as a vector.
    pub fn position(&self) -> Vector3<f64> {
        Vector3::new(self.position_x, self.position_y, self.position_z)
    }
}

/// An in-memory halo table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HaloCatalog {
    pub haloes: Vec<Halo>,
}

impl HaloCatalog {
    pub fn from_haloes(haloes: Vec<Halo>) -> Self {
        HaloCatalog { haloes }
    }

    /// Load a catalog from a headered CSV table produced by the ingestion step.
    pub fn from_csv(path: &Utf8Path) -> Result<Self, HaloWebError> {
        let mut reader = csv::Reader::from_path(path)?;
        let haloes = reader
            .deserialize()
            .collect::<Result<Vec<Halo>, csv::Error>>()?;
        Ok(HaloCatalog { haloes })
    }

    pub fn len(&self) -> usize {
        self.haloes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.haloes.is_empty()
    }

    /// The `n` most massive haloes, in descending mass order.
    ///
    /// NaN masses sort last and are therefore never selected before finite ones.
    pub fn most_massive(&self, n: usize) -> HaloCatalog {
        let haloes = self
            .haloes
            .iter()
            .sorted_by_key(|halo| std::cmp::Reverse(OrderedFloat(halo.mass)))
            .take(n)
            .cloned()
            .collect();
        HaloCatalog { haloes }
    }

    /// Positions of all haloes, in table order.
    pub fn positions(&self) -> Vec<Vector3<f64>> {
        self.haloes.iter().map(Halo::position).collect()
    }
}
