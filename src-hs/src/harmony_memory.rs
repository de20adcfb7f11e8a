//! Harmony memory: the fixed-size population of evaluated harmonies.

use ndarray::{Array1, Array2, ArrayView1};
use rand::Rng;

use crate::error::{HSError, Result};
use crate::objective::ObjectiveFunction;
use crate::parameter_space::ParameterSpace;

/// A complete candidate vector with its fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct Harmony {
	pub values: Array1<f64>,
	pub fitness: f64,
}

/// `true` when `a` is strictly better than `b` in the optimization direction.
///
/// NaN ranks below every number in both directions.
pub fn is_better(a: f64, b: f64, maximize: bool) -> bool {
	match (a.is_nan(), b.is_nan()) {
		(true, _) => false,
		(false, true) => true,
		(false, false) => {
			if maximize { a > b } else { a < b }
		}
	}
}

/// Index of the best value, first one on ties.
pub(crate) fn argbest(values: &Array1<f64>, maximize: bool) -> usize {
	let mut best_i = 0usize;
	for (i, &v) in values.iter().enumerate().skip(1) {
		if is_better(v, values[best_i], maximize) {
			best_i = i;
		}
	}
	best_i
}

/// Index of the worst value, first one on ties.
pub(crate) fn argworst(values: &Array1<f64>, maximize: bool) -> usize {
	let mut worst_i = 0usize;
	for (i, &v) in values.iter().enumerate().skip(1) {
		if is_better(values[worst_i], v, maximize) {
			worst_i = i;
		}
	}
	worst_i
}

/// Population of `hms` harmonies (rows) with cached fitness.
///
/// The worst and best members are cached so that replacement decisions
/// are O(1); both indices are rescanned only when a member is replaced.
#[derive(Debug, Clone)]
pub struct HarmonyMemory {
	harmonies: Array2<f64>,
	fitness: Array1<f64>,
	maximize: bool,
	worst_idx: usize,
	best_idx: usize,
}

impl HarmonyMemory {
	/// Fill `hms` slots with random harmonies and evaluate each of them.
	pub fn initialize<O, R>(
		objective: &O,
		space: &ParameterSpace,
		hms: usize,
		maximize: bool,
		rng: &mut R,
	) -> Result<Self>
	where
		O: ObjectiveFunction + ?Sized,
		R: Rng,
	{
		if space.is_empty() {
			return Err(HSError::NoParameters);
		}
		if hms == 0 {
			return Err(HSError::InvalidMemorySize { hms });
		}
		let n = space.len();
		let mut harmonies = Array2::<f64>::zeros((hms, n));
		let mut fitness = Array1::<f64>::zeros(hms);
		for k in 0..hms {
			let mut row = Array1::<f64>::zeros(n);
			for i in 0..n {
				row[i] = space.random_value(objective, i, rng);
			}
			fitness[k] = objective.fitness(&row)?;
			harmonies.row_mut(k).assign(&row);
		}
		Ok(Self::from_evaluated(harmonies, fitness, maximize))
	}

	/// Start from user supplied harmonies; each row is validated against
	/// `space` and evaluated.
	pub fn from_harmonies<O>(
		objective: &O,
		space: &ParameterSpace,
		harmonies: &Array2<f64>,
		hms: usize,
		maximize: bool,
	) -> Result<Self>
	where
		O: ObjectiveFunction + ?Sized,
	{
		let (rows, cols) = harmonies.dim();
		if rows != hms || cols != space.len() {
			return Err(HSError::InitialHarmoniesShape {
				expected_rows: hms,
				expected_cols: space.len(),
				rows,
				cols,
			});
		}
		if hms == 0 {
			return Err(HSError::InvalidMemorySize { hms });
		}
		let mut fitness = Array1::<f64>::zeros(rows);
		for (k, row) in harmonies.rows().into_iter().enumerate() {
			for (i, &v) in row.iter().enumerate() {
				space.check_initial_value(k, i, v)?;
			}
			fitness[k] = objective.fitness(&row.to_owned())?;
		}
		Ok(Self::from_evaluated(harmonies.clone(), fitness, maximize))
	}

	fn from_evaluated(harmonies: Array2<f64>, fitness: Array1<f64>, maximize: bool) -> Self {
		let worst_idx = argworst(&fitness, maximize);
		let best_idx = argbest(&fitness, maximize);
		Self { harmonies, fitness, maximize, worst_idx, best_idx }
	}

	/// Number of harmonies held (always `hms`).
	pub fn len(&self) -> usize {
		self.fitness.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fitness.is_empty()
	}

	pub fn num_parameters(&self) -> usize {
		self.harmonies.ncols()
	}

	pub fn maximize(&self) -> bool {
		self.maximize
	}

	pub fn harmonies(&self) -> &Array2<f64> {
		&self.harmonies
	}

	pub fn fitness(&self) -> &Array1<f64> {
		&self.fitness
	}

	pub fn harmony(&self, k: usize) -> ArrayView1<'_, f64> {
		self.harmonies.row(k)
	}

	/// Value of parameter `i` in member `k`.
	pub fn value(&self, k: usize, i: usize) -> f64 {
		self.harmonies[[k, i]]
	}

	/// Lowest fitness when maximizing, highest when minimizing.
	pub fn worst_index(&self) -> usize {
		self.worst_idx
	}

	pub fn worst_fitness(&self) -> f64 {
		self.fitness[self.worst_idx]
	}

	pub fn best_index(&self) -> usize {
		self.best_idx
	}

	pub fn best_fitness(&self) -> f64 {
		self.fitness[self.best_idx]
	}

	/// Copy of the best member.
	pub fn best(&self) -> Harmony {
		Harmony {
			values: self.harmonies.row(self.best_idx).to_owned(),
			fitness: self.best_fitness(),
		}
	}

	/// Overwrite the worst member with `candidate` if the candidate is
	/// strictly better. Returns whether the memory changed.
	pub fn replace_worst(&mut self, candidate: Harmony) -> bool {
		if !is_better(candidate.fitness, self.worst_fitness(), self.maximize) {
			return false;
		}
		let k = self.worst_idx;
		self.harmonies.row_mut(k).assign(&candidate.values);
		self.fitness[k] = candidate.fitness;
		self.worst_idx = argworst(&self.fitness, self.maximize);
		self.best_idx = argbest(&self.fitness, self.maximize);
		true
	}
}
