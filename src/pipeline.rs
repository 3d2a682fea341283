//! Combinators for chaining validation stages, and extractors for consuming
//! the final outcome.
//!
//! Every stage of integer construction returns a [`Result`]. The stages are
//! joined with [`bind()`] and [`map()`], which lift an ordinary function into
//! one that operates on a [`Result`] and passes errors through untouched. This
//! means the first stage to fail decides the error, and every later stage is
//! skipped.
//!
//! ```
//! use safewords::pipeline::{bind, map};
//!
//! let halve  = |v: u32| if v % 2 == 0 { Ok(v / 2) } else { Err("odd") };
//! let double = |v: u32| v * 2;
//!
//! assert_eq!(map(double)(bind(halve)(Ok(8))), Ok(8));
//! assert_eq!(map(double)(bind(halve)(Ok(7))), Err("odd"));
//! assert_eq!(map(double)(bind(halve)(Err("early"))), Err("early"));
//! ```



//		Modules

#[cfg(test)]
#[path = "tests/pipeline.rs"]
mod tests;



//		Packages

use core::fmt::Display;



//		Functions

//		bind																	
/// Lifts a failable stage so that it can be applied to the outcome of the
/// previous stage.
/// 
/// The returned function calls `f` with the success value, or returns the
/// existing error unchanged without calling `f`.
/// 
/// # Parameters
/// 
/// * `f` - The stage to apply to a success value.
/// 
pub fn bind<I, O, E, F>(f: F) -> impl Fn(Result<I, E>) -> Result<O, E>
where
	F: Fn(I) -> Result<O, E>,
{
	move |result| match result {
		Ok(value)  => f(value),
		Err(error) => Err(error),
	}
}

//		map																		
/// Lifts an infallible transformation so that it can be applied to the outcome
/// of the previous stage.
/// 
/// The returned function wraps the transformed success value in [`Ok`], or
/// returns the existing error unchanged without calling `f`.
/// 
/// # Parameters
/// 
/// * `f` - The transformation to apply to a success value.
/// 
pub fn map<I, O, E, F>(f: F) -> impl Fn(Result<I, E>) -> Result<O, E>
where
	F: Fn(I) -> O,
{
	move |result| match result {
		Ok(value)  => Ok(f(value)),
		Err(error) => Err(error),
	}
}

//		extract																	
/// Consumes an outcome by handling both cases.
/// 
/// This is total, and never escapes: one of the two handlers is always called,
/// and its return value is passed back.
/// 
/// # Parameters
/// 
/// * `on_error`   - Called with the error if the outcome failed.
/// * `on_success` - Called with the value if the outcome succeeded.
/// 
pub fn extract<V, E, T>(
	on_error:   impl FnOnce(E) -> T,
	on_success: impl FnOnce(V) -> T,
) -> impl FnOnce(Result<V, E>) -> T {
	move |result| match result {
		Ok(value)  => on_success(value),
		Err(error) => on_error(error),
	}
}

//		loudly_extract															
/// Consumes an outcome, treating failure as fatal.
/// 
/// This is the one deliberate exit from the `Result` discipline, for callers
/// that prefer to fail fast. Use [`extract()`] where a panic is not acceptable.
/// 
/// # Parameters
/// 
/// * `continuation` - Called with the value if the outcome succeeded.
/// 
/// # Panics
/// 
/// The returned function panics with the error's message if the outcome
/// failed.
/// 
#[expect(clippy::panic, reason = "Fail-fast is the purpose of this function")]
pub fn loudly_extract<V, E, T>(continuation: impl FnOnce(V) -> T) -> impl FnOnce(Result<V, E>) -> T
where
	E: Display,
{
	move |result| match result {
		Ok(value)  => continuation(value),
		Err(error) => panic!("{error}"),
	}
}
