use crate::core::models::step::StepResidue;
use crate::core::utils::geometry::angle_difference;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the twelve parameters describing the conformation of a dinucleotide step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StepParameter {
    Delta1,
    Epsilon1,
    Zeta1,
    Alpha2,
    Beta2,
    Gamma2,
    Delta2,
    Chi1,
    Chi2,
    /// Distance between the C1' atoms of both residues.
    CC,
    /// Distance between the glycosidic nitrogens of both residues.
    NN,
    /// Pseudo-torsion N(1)-C1'(1)-C1'(2)-N(2).
    Mu,
}

impl StepParameter {
    pub const ALL: [StepParameter; 12] = [
        StepParameter::Delta1,
        StepParameter::Epsilon1,
        StepParameter::Zeta1,
        StepParameter::Alpha2,
        StepParameter::Beta2,
        StepParameter::Gamma2,
        StepParameter::Delta2,
        StepParameter::Chi1,
        StepParameter::Chi2,
        StepParameter::CC,
        StepParameter::NN,
        StepParameter::Mu,
    ];

    /// The nine torsions that define a conformer's shape: seven backbone torsions and two chi.
    pub const TORSIONS: [StepParameter; 9] = [
        StepParameter::Delta1,
        StepParameter::Epsilon1,
        StepParameter::Zeta1,
        StepParameter::Alpha2,
        StepParameter::Beta2,
        StepParameter::Gamma2,
        StepParameter::Delta2,
        StepParameter::Chi1,
        StepParameter::Chi2,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StepParameter::Delta1 => "delta_1",
            StepParameter::Epsilon1 => "epsilon_1",
            StepParameter::Zeta1 => "zeta_1",
            StepParameter::Alpha2 => "alpha_2",
            StepParameter::Beta2 => "beta_2",
            StepParameter::Gamma2 => "gamma_2",
            StepParameter::Delta2 => "delta_2",
            StepParameter::Chi1 => "chi_1",
            StepParameter::Chi2 => "chi_2",
            StepParameter::CC => "cc",
            StepParameter::NN => "nn",
            StepParameter::Mu => "mu",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Whether the parameter is an angle in degrees (everything except the two distances).
    pub fn is_angle(self) -> bool {
        !matches!(self, StepParameter::CC | StepParameter::NN)
    }

    /// Position of this parameter in [`StepParameter::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Index into the seven backbone torsions, if this is one.
    pub fn backbone_index(self) -> Option<usize> {
        let index = self.index();
        (index < 7).then_some(index)
    }
}

impl fmt::Display for StepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Values of all twelve [`StepParameter`]s of a step or conformer.
///
/// Angles are in degrees within (-180, 180], distances in Angstroms.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StepMetrics {
    pub delta_1: f64,
    pub epsilon_1: f64,
    pub zeta_1: f64,
    pub alpha_2: f64,
    pub beta_2: f64,
    pub gamma_2: f64,
    pub delta_2: f64,
    pub chi_1: f64,
    pub chi_2: f64,
    pub cc: f64,
    pub nn: f64,
    pub mu: f64,
}

impl StepMetrics {
    /// Builds metrics from values ordered as [`StepParameter::ALL`].
    pub const fn from_values(v: [f64; 12]) -> Self {
        Self {
            delta_1: v[0],
            epsilon_1: v[1],
            zeta_1: v[2],
            alpha_2: v[3],
            beta_2: v[4],
            gamma_2: v[5],
            delta_2: v[6],
            chi_1: v[7],
            chi_2: v[8],
            cc: v[9],
            nn: v[10],
            mu: v[11],
        }
    }

    pub fn values(&self) -> [f64; 12] {
        StepParameter::ALL.map(|p| self.get(p))
    }

    pub fn get(&self, parameter: StepParameter) -> f64 {
        match parameter {
            StepParameter::Delta1 => self.delta_1,
            StepParameter::Epsilon1 => self.epsilon_1,
            StepParameter::Zeta1 => self.zeta_1,
            StepParameter::Alpha2 => self.alpha_2,
            StepParameter::Beta2 => self.beta_2,
            StepParameter::Gamma2 => self.gamma_2,
            StepParameter::Delta2 => self.delta_2,
            StepParameter::Chi1 => self.chi_1,
            StepParameter::Chi2 => self.chi_2,
            StepParameter::CC => self.cc,
            StepParameter::NN => self.nn,
            StepParameter::Mu => self.mu,
        }
    }

    pub fn set(&mut self, parameter: StepParameter, value: f64) {
        let slot = match parameter {
            StepParameter::Delta1 => &mut self.delta_1,
            StepParameter::Epsilon1 => &mut self.epsilon_1,
            StepParameter::Zeta1 => &mut self.zeta_1,
            StepParameter::Alpha2 => &mut self.alpha_2,
            StepParameter::Beta2 => &mut self.beta_2,
            StepParameter::Gamma2 => &mut self.gamma_2,
            StepParameter::Delta2 => &mut self.delta_2,
            StepParameter::Chi1 => &mut self.chi_1,
            StepParameter::Chi2 => &mut self.chi_2,
            StepParameter::CC => &mut self.cc,
            StepParameter::NN => &mut self.nn,
            StepParameter::Mu => &mut self.mu,
        };
        *slot = value;
    }

    pub fn backbone(&self) -> [f64; 7] {
        [
            self.delta_1,
            self.epsilon_1,
            self.zeta_1,
            self.alpha_2,
            self.beta_2,
            self.gamma_2,
            self.delta_2,
        ]
    }

    pub fn torsions(&self) -> [f64; 9] {
        StepParameter::TORSIONS.map(|p| self.get(p))
    }

    /// Signed deviations `self - reference`. Angular differences are wrapped into (-180, 180].
    pub fn differences(&self, reference: &StepMetrics) -> StepMetrics {
        let mut out = StepMetrics::default();
        for parameter in StepParameter::ALL {
            let (measured, expected) = (self.get(parameter), reference.get(parameter));
            let diff = if parameter.is_angle() {
                angle_difference(measured, expected)
            } else {
                measured - expected
            };
            out.set(parameter, diff);
        }
        out
    }

    /// Euclidean distance over the nine torsions, in degrees, with wrapped differences.
    pub fn torsion_distance(&self, other: &StepMetrics) -> f64 {
        StepParameter::TORSIONS
            .iter()
            .map(|&p| angle_difference(self.get(p), other.get(p)).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

/// A reference dinucleotide conformer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NtC {
    pub name: &'static str,
    pub metrics: StepMetrics,
    /// nu0..nu4 of the first ribose.
    pub nu_first: [f64; 5],
    /// nu0..nu4 of the second ribose.
    pub nu_second: [f64; 5],
}

impl NtC {
    pub(crate) const fn new(
        name: &'static str,
        backbone: [f64; 7],
        chi: [f64; 2],
        bases: [f64; 3],
        nu_first: [f64; 5],
        nu_second: [f64; 5],
    ) -> Self {
        Self {
            name,
            metrics: StepMetrics::from_values([
                backbone[0],
                backbone[1],
                backbone[2],
                backbone[3],
                backbone[4],
                backbone[5],
                backbone[6],
                chi[0],
                chi[1],
                bases[0],
                bases[1],
                bases[2],
            ]),
            nu_first,
            nu_second,
        }
    }

    /// The conformer class: the first two letters of the name, except that all `ZZ`
    /// conformers form the single class `Z`.
    pub fn class(&self) -> &'static str {
        if self.name.starts_with("ZZ") {
            "Z"
        } else {
            self.name.get(..2).unwrap_or(self.name)
        }
    }

    pub fn nu(&self, which: StepResidue) -> &[f64; 5] {
        match which {
            StepResidue::First => &self.nu_first,
            StepResidue::Second => &self.nu_second,
        }
    }

    pub fn chi(&self, which: StepResidue) -> f64 {
        match which {
            StepResidue::First => self.metrics.chi_1,
            StepResidue::Second => self.metrics.chi_2,
        }
    }
}

impl fmt::Display for NtC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NtC {
        NtC::new(
            "AB01",
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
            [8.0, 9.0],
            [5.5, 4.5, 12.0],
            [0.0; 5],
            [1.0; 5],
        )
    }

    #[test]
    fn parameters_are_ordered_and_named() {
        for (i, p) in StepParameter::ALL.iter().enumerate() {
            assert_eq!(p.index(), i);
            assert_eq!(StepParameter::from_name(p.name()), Some(*p));
        }
        assert_eq!(StepParameter::from_name(" Chi_2 "), Some(StepParameter::Chi2));
        assert_eq!(StepParameter::from_name("phi"), None);
        assert_eq!(StepParameter::Gamma2.backbone_index(), Some(5));
        assert_eq!(StepParameter::Chi1.backbone_index(), None);
        assert!(!StepParameter::CC.is_angle());
        assert!(StepParameter::Mu.is_angle());
    }

    #[test]
    fn ntc_new_places_values_in_parameter_order() {
        let ntc = sample();
        assert_eq!(
            ntc.metrics.values(),
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 5.5, 4.5, 12.0]
        );
        assert_eq!(ntc.metrics.backbone(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(ntc.chi(StepResidue::Second), 9.0);
        assert_eq!(ntc.nu(StepResidue::Second), &[1.0; 5]);
    }

    #[test]
    fn class_is_first_two_letters_except_zz() {
        assert_eq!(sample().class(), "AB");
        let mut zz = sample();
        zz.name = "ZZS1";
        assert_eq!(zz.class(), "Z");
    }

    #[test]
    fn differences_wrap_angles_but_not_distances() {
        let mut measured = StepMetrics::default();
        measured.delta_1 = -170.0;
        measured.cc = 6.0;
        let mut reference = StepMetrics::default();
        reference.delta_1 = 170.0;
        reference.cc = 5.0;

        let diff = measured.differences(&reference);
        assert!((diff.delta_1 - 20.0).abs() < 1e-9);
        assert!((diff.cc - 1.0).abs() < 1e-9);
    }

    #[test]
    fn torsion_distance_ignores_base_distances() {
        let a = StepMetrics::default();
        let mut b = a;
        b.chi_2 = 3.0;
        b.alpha_2 = -4.0;
        b.nn = 100.0;
        assert!((a.torsion_distance(&b) - 5.0).abs() < 1e-9);
    }
}
