use crate::domain::constants::PIGEON;
use crate::domain::errors::DinoError;
use crate::domain::models::{DinosaurRecord, HumanRecord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Weight,
    Height,
    Diet,
    Fact,
    Habitat,
    Era,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Weight,
        Category::Height,
        Category::Diet,
        Category::Fact,
        Category::Habitat,
        Category::Era,
    ];
}

/// Source of randomness for picking a comparison category.
pub trait RandomSource {
    /// Uniform index in `0..bound`; `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

pub struct StdRandom(StdRng);

impl StdRandom {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for StdRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}

pub fn pick_category(dino: &DinosaurRecord, rng: &mut dyn RandomSource) -> Category {
    if dino.species == PIGEON {
        return Category::Fact;
    }
    Category::ALL[rng.next_index(Category::ALL.len())]
}

/// One comparison statement in a randomly chosen category.
pub fn compare(
    dino: &DinosaurRecord,
    human: &HumanRecord,
    rng: &mut dyn RandomSource,
) -> Result<String, DinoError> {
    let category = pick_category(dino, rng);
    log::debug!("{}: comparing by {:?}", dino.species, category);
    compare_in(category, dino, human)
}

pub fn compare_in(
    category: Category,
    dino: &DinosaurRecord,
    human: &HumanRecord,
) -> Result<String, DinoError> {
    match category {
        Category::Weight => compare_ratio("weight", &dino.species, dino.weight, human.weight),
        Category::Height => compare_ratio("height", &dino.species, dino.height, human.height),
        Category::Diet => Ok(if dino.diet == human.diet {
            format!("{} enjoys the same diet as you!", dino.species)
        } else {
            format!(
                "{} was {}, and you were {}",
                dino.species, dino.diet, human.diet
            )
        }),
        Category::Fact => Ok(dino.fact.clone()),
        Category::Habitat => Ok(format!("{} lived in the {} area!", dino.species, dino.habitat)),
        Category::Era => Ok(format!("{} lived in the {} era!", dino.species, dino.era)),
    }
}

/// Rounds to one decimal the way `Number.prototype.toFixed(1)` does: the
/// exact binary value is rounded, and ties go to the larger tenth.
/// Expects a finite, non-negative value.
fn to_fixed1(x: f64) -> f64 {
    let bits = x.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let frac = bits & ((1u64 << 52) - 1);
    let (mantissa, exp) = if biased == 0 {
        (frac, -1074)
    } else {
        (frac | (1u64 << 52), biased - 1075)
    };
    if exp >= 0 {
        return x;
    }
    let shift = (-exp) as u32;
    if shift > 100 {
        return 0.0;
    }
    // floor((10 * m + 2^(shift - 1)) / 2^shift) == floor(10x + 1/2)
    let tenths = (10 * mantissa as u128 + (1u128 << (shift - 1))) >> shift;
    tenths as f64 / 10.0
}

// The branch is taken on the ratio rounded to one decimal, so 1.04 reads as
// "the same".
fn compare_ratio(
    attribute: &str,
    species: &str,
    dino_value: f64,
    human_value: f64,
) -> Result<String, DinoError> {
    if !(human_value.is_finite() && human_value > 0.0) {
        return Err(DinoError::InvalidComparison(format!(
            "your {} must be a positive number, got {}",
            attribute, human_value
        )));
    }
    if !(dino_value.is_finite() && dino_value >= 0.0) {
        return Err(DinoError::InvalidComparison(format!(
            "{} of {} must be a positive number, got {}",
            attribute, species, dino_value
        )));
    }
    let raw = dino_value / human_value;
    if !raw.is_finite() {
        return Err(DinoError::InvalidComparison(format!(
            "{} ratio for {} is not finite",
            attribute, species
        )));
    }
    let ratio = to_fixed1(raw);

    if ratio > 1.0 {
        Ok(format!(
            "{} is {} times your {}",
            species,
            ratio.floor(),
            attribute
        ))
    } else if ratio < 1.0 {
        let inverse = human_value / dino_value;
        if !inverse.is_finite() {
            return Err(DinoError::InvalidComparison(format!(
                "{} of {} is zero",
                attribute, species
            )));
        }
        Ok(format!(
            "Your {} is {:.1} times the {} of {}",
            attribute,
            to_fixed1(inverse),
            attribute,
            species
        ))
    } else {
        Ok(format!("{} is the same {} as you", species, attribute))
    }
}
