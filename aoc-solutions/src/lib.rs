//! Advent of Code puzzle solutions with automatic registration
//!
//! Every `solutions/<year>/day_<NN>/solution.rs` in the workspace is compiled
//! in as `year_<year>::day_<NN>` by the build script. Each solution uses the
//! `AutoRegisterSolution` derive, so linking this crate is enough for
//! `SolutionRegistryBuilder::register_all_plugins` to find them.

include!(concat!(env!("OUT_DIR"), "/solutions_mod.rs"));
