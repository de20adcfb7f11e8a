//! Shared function registry for the CLI and the benchmarks
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::functions::{AllFixed, Continuous, ContinuousFixedX, DiscreteXContinuousY, Sphere};
use crate::objective::ObjectiveFunction;

/// A registered objective together with the direction it is meant to be optimized in.
#[derive(Clone)]
pub struct RegisteredFunction {
	pub objective: Arc<dyn ObjectiveFunction>,
	pub maximize: bool,
	pub description: &'static str,
}

/// Function registry mapping names to objective functions.
pub struct FunctionRegistry {
	functions: BTreeMap<String, RegisteredFunction>,
}

impl Default for FunctionRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl FunctionRegistry {
	/// Creates a new registry with all fixture objectives.
	pub fn new() -> Self {
		let mut registry = Self { functions: BTreeMap::new() };
		registry.register(
			"continuous_fixed_x",
			Arc::new(ContinuousFixedX),
			true,
			"maximize -(x^2+(y+1)^2)+4 with x fixed at 0.5, optimum 3.75",
		);
		registry.register(
			"continuous",
			Arc::new(Continuous),
			true,
			"maximize -(x^2+(y+1)^2)+4, optimum 4 at (0, -1)",
		);
		registry.register(
			"discrete_x",
			Arc::new(DiscreteXContinuousY),
			true,
			"as continuous, x restricted to the integers -100..=100",
		);
		registry.register("all_fixed", Arc::new(AllFixed), true, "every parameter fixed");
		registry.register("sphere", Arc::new(Sphere::new(2)), false, "minimize sum of squares (2D)");
		registry.register(
			"sphere_5d",
			Arc::new(Sphere::new(5)),
			false,
			"minimize sum of squares (5D)",
		);
		registry
	}

	/// Add or replace a function.
	pub fn register(
		&mut self,
		name: &str,
		objective: Arc<dyn ObjectiveFunction>,
		maximize: bool,
		description: &'static str,
	) {
		self.functions
			.insert(name.to_string(), RegisteredFunction { objective, maximize, description });
	}

	pub fn get(&self, name: &str) -> Option<&RegisteredFunction> {
		self.functions.get(name)
	}

	/// Registered names, sorted.
	pub fn names(&self) -> Vec<&str> {
		self.functions.keys().map(String::as_str).collect()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &RegisteredFunction)> {
		self.functions.iter().map(|(k, v)| (k.as_str(), v))
	}
}
