//! Solution registry for managing and creating solution instances

use crate::error::{RegistrationError, SolutionError};
use crate::instance::{DynSolution, SolutionInstance};
use crate::layout::SolutionsLayout;
use crate::options::RunOptions;
use crate::solution::{Solution, SolutionExt};
use std::marker::PhantomData;
use tracing::debug;

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// Base year for AoC (first year of Advent of Code)
pub const BASE_YEAR: u16 = 2015;
/// Maximum number of years supported (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Days per year in AoC (1-25)
pub const DAYS_PER_YEAR: usize = 25;
/// Total capacity of the flat storage
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Calculate flat index from year/day, returning None if out of bounds
#[inline]
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    let y = (year - BASE_YEAR) as usize;
    let d = (day - 1) as usize;
    Some(y * DAYS_PER_YEAR + d)
}

/// Reconstruct year/day from flat index
#[inline]
fn from_index(index: usize) -> (u16, u8) {
    let year = BASE_YEAR + (index / DAYS_PER_YEAR) as u16;
    let day = (index % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

// ============================================================================
// Factory Types
// ============================================================================

/// Factory function type for creating solution instances
pub type SolutionFactory = Box<
    dyn Fn(&SolutionsLayout, RunOptions) -> Result<Box<dyn DynSolution>, SolutionError>
        + Send
        + Sync,
>;

/// Year and day of a registered solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SolutionInfo {
    pub year: u16,
    pub day: u8,
}

/// Builder for constructing a [`SolutionRegistry`]
///
/// The registry is immutable once built; duplicate and out-of-range
/// registrations are rejected here.
///
/// # Example
///
/// ```
/// use aoc_solver::{Context, Solution, SolutionRegistryBuilder, StepResult};
///
/// #[derive(Default)]
/// struct Day3;
///
/// impl Solution for Day3 {
///     const YEAR: Option<u16> = Some(2017);
///     const DAY: Option<u8> = Some(3);
///     type Input = i128;
///
///     fn part_1(&mut self, ctx: &Context<'_, i128>) -> StepResult {
///         Ok(Some((*ctx.input() * 2).into()))
///     }
/// }
///
/// let registry = SolutionRegistryBuilder::new()
///     .register::<Day3>()
///     .unwrap()
///     .build();
/// assert!(registry.contains(2017, 3));
/// ```
pub struct SolutionRegistryBuilder {
    entries: Vec<Option<SolutionFactory>>,
}

impl SolutionRegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a solution type under its declared year and day
    pub fn register<S>(self) -> Result<Self, RegistrationError>
    where
        S: Solution + Default + 'static,
    {
        let year = S::year()?;
        let day = S::day()?;
        self.register_factory(year, day, |layout, options| {
            Ok(Box::new(SolutionInstance::<S>::new(layout, options)?))
        })
    }

    /// Register a factory function for a specific year and day
    ///
    /// Returns error if year/day is out of bounds or already registered.
    pub fn register_factory<F>(mut self, year: u16, day: u8, factory: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolutionsLayout, RunOptions) -> Result<Box<dyn DynSolution>, SolutionError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::Duplicate(year, day));
        }

        debug!(year, day, "registered solution");
        self.entries[index] = Some(Box::new(factory));
        Ok(self)
    }

    /// Register all solutions submitted through `#[derive(AutoRegisterSolution)]`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solution_plugins(|_| true)
    }

    /// Register solution plugins that match the given filter predicate
    pub fn register_solution_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolutionPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolutionPlugin>() {
            if filter(plugin) {
                self = plugin.solution.register_with(self)?;
            }
        }
        Ok(self)
    }

    /// Build the immutable registry
    pub fn build(self) -> SolutionRegistry {
        SolutionRegistry {
            entries: self.entries,
        }
    }
}

impl Default for SolutionRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable map from (year, day) to solution factories
pub struct SolutionRegistry {
    entries: Vec<Option<SolutionFactory>>,
}

impl SolutionRegistry {
    /// Create a solution instance for a specific year and day
    ///
    /// Loads the day's input from `layout`, so input errors surface here.
    pub fn create(
        &self,
        year: u16,
        day: u8,
        layout: &SolutionsLayout,
        options: RunOptions,
    ) -> Result<Box<dyn DynSolution>, SolutionError> {
        let factory = calc_index(year, day)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .ok_or(SolutionError::NotFound { year, day })?;

        factory(layout, options)
    }

    /// Check if a solution exists for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        calc_index(year, day)
            .and_then(|i| self.entries.get(i))
            .is_some_and(Option::is_some)
    }

    /// Iterate over all registered solutions in (year, day) order
    pub fn iter_info(&self) -> impl Iterator<Item = SolutionInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|_| {
                let (year, day) = from_index(i);
                SolutionInfo { year, day }
            })
        })
    }

    /// Get the number of registered solutions
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

/// Type-erased registration hook collected by `inventory`
pub trait RegisterableSolution: Sync {
    /// Register the solution with the builder under its declared year/day
    fn register_with(
        &self,
        builder: SolutionRegistryBuilder,
    ) -> Result<SolutionRegistryBuilder, RegistrationError>;
}

/// Zero-sized handle naming a solution type, usable in a `static`
pub struct SolutionType<S>(PhantomData<fn() -> S>);

impl<S> SolutionType<S> {
    pub const NEW: Self = Self(PhantomData);
}

impl<S> RegisterableSolution for SolutionType<S>
where
    S: Solution + Default + 'static,
{
    fn register_with(
        &self,
        builder: SolutionRegistryBuilder,
    ) -> Result<SolutionRegistryBuilder, RegistrationError> {
        builder.register::<S>()
    }
}

/// Plugin information for automatic solution registration
///
/// Submitted by `#[derive(AutoRegisterSolution)]`:
///
/// ```ignore
/// static SOLUTION: SolutionType<Day01> = SolutionType::NEW;
///
/// inventory::submit! {
///     SolutionPlugin { solution: &SOLUTION }
/// }
/// ```
pub struct SolutionPlugin {
    /// The solution type (type-erased)
    pub solution: &'static dyn RegisterableSolution,
}

// Enable plugin collection via inventory
inventory::collect!(SolutionPlugin);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use crate::step::StepResult;

    #[derive(Default)]
    struct First;

    impl Solution for First {
        const YEAR: Option<u16> = Some(2015);
        const DAY: Option<u8> = Some(1);
        type Input = String;

        fn part_1(&mut self, ctx: &Context<'_, String>) -> StepResult {
            Ok(Some(ctx.input().len().into()))
        }
    }

    #[derive(Default)]
    struct Last;

    impl Solution for Last {
        const YEAR: Option<u16> = Some(2034);
        const DAY: Option<u8> = Some(25);
        type Input = String;
    }

    #[derive(Default)]
    struct NoDay;

    impl Solution for NoDay {
        const YEAR: Option<u16> = Some(2020);
        type Input = String;
    }

    #[derive(Default)]
    struct OutOfRange;

    impl Solution for OutOfRange {
        const YEAR: Option<u16> = Some(2014);
        const DAY: Option<u8> = Some(1);
        type Input = String;
    }

    #[test]
    fn test_index_roundtrip_bounds() {
        assert_eq!(calc_index(2015, 1), Some(0));
        assert_eq!(calc_index(2034, 25), Some(CAPACITY - 1));
        assert_eq!(calc_index(2035, 1), None);
        assert_eq!(calc_index(2020, 0), None);
        assert_eq!(calc_index(2020, 26), None);
        assert_eq!(from_index(calc_index(2023, 17).unwrap()), (2023, 17));
    }

    #[test]
    fn test_register_and_iter() {
        let registry = SolutionRegistryBuilder::new()
            .register::<Last>()
            .unwrap()
            .register::<First>()
            .unwrap()
            .build();

        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        assert!(registry.contains(2015, 1));
        assert!(!registry.contains(2015, 2));
        assert!(!registry.contains(1999, 2));
        let infos: Vec<_> = registry.iter_info().collect();
        assert_eq!(
            infos,
            vec![
                SolutionInfo { year: 2015, day: 1 },
                SolutionInfo { year: 2034, day: 25 }
            ]
        );
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = SolutionRegistryBuilder::new()
            .register::<First>()
            .unwrap()
            .register::<First>();
        match result {
            Err(err @ RegistrationError::Duplicate(2015, 1)) => {
                assert!(err.to_string().contains("check the YEAR and DAY constants"));
            }
            _ => panic!("expected Duplicate"),
        }
    }

    #[test]
    fn test_missing_day_rejected() {
        let result = SolutionRegistryBuilder::new().register::<NoDay>();
        match result {
            Err(RegistrationError::ConfigurationMissing(missing)) => {
                assert_eq!(missing.field, "DAY");
                assert!(missing.to_string().contains("NoDay::DAY; no day can run"));
            }
            _ => panic!("expected ConfigurationMissing"),
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        let result = SolutionRegistryBuilder::new().register::<OutOfRange>();
        assert!(matches!(
            result,
            Err(RegistrationError::InvalidYearDay(2014, 1))
        ));
    }

    #[test]
    fn test_create_unknown_solution() {
        let registry = SolutionRegistryBuilder::new().build();
        let layout = SolutionsLayout::new("does-not-matter");
        let result = registry.create(2016, 4, &layout, RunOptions::default());
        assert!(matches!(
            result,
            Err(SolutionError::NotFound { year: 2016, day: 4 })
        ));
    }

    #[test]
    fn test_plugin_handle_registers_type() {
        static HANDLE: SolutionType<First> = SolutionType::NEW;
        let registry = HANDLE
            .register_with(SolutionRegistryBuilder::new())
            .unwrap()
            .build();
        assert!(registry.contains(2015, 1));
    }
}
