//! Optionals - An explicit zero-or-one value container
//!
//! Chains of field accesses through records where any link may be missing are
//! a common source of bugs: one forgotten check and a missing value is
//! dereferenced. [`Optional`] makes absence a state of its own, and forces each
//! step of a chain to say how absence is handled.
//!
//! * [`Optional::map`] applies a function returning a plain value.
//! * [`Optional::map_nullable`] applies a function returning a nullable
//!   (`Option`) value, collapsing `None` into absence.
//! * [`Optional::flat_map`] applies a function that already returns an
//!   `Optional`, without nesting.
//!
//! All three short-circuit: once a chain is absent, no later function runs.
//!
//! Leaving the container is done with [`Optional::unwrap_or`], which takes an
//! already evaluated fallback, or [`Optional::unwrap_or_else`], which only
//! computes the fallback when it is needed. [`Optional::get`] is available for
//! cases where absence is known to be impossible, and reports
//! [`OptionalError::EmptyValue`] otherwise.
//!
//! ```
//! use optionals::{Optional, PersonRepository};
//!
//! let repo = PersonRepository::new();
//!
//! let person = repo.person_with_address_null();
//! let street = Optional::present(&person)
//!     .map_nullable(|p| p.address())
//!     .map(|a| a.street())
//!     .into_option();
//! assert_eq!(street, None);
//!
//! let person = repo.person_test();
//! let code = Optional::present(&person)
//!     .flat_map(|p| p.optional_address())
//!     .map_nullable(|a| a.state())
//!     .flat_map(|s| s.optional_code());
//! assert_eq!(code, Optional::present(12345));
//! ```
//!
//! # Features
//!
//! * `serde` - `Serialize` and `Deserialize` for [`Optional`] and the model
//!   records. A present value serialises as the bare value, an absent one as
//!   none.

#![deny(warnings)]
#![warn(unused_extern_crates)]
#![warn(missing_docs)]

pub mod error;
pub use error::OptionalError;

pub mod optional;
pub use optional::Optional;

// Records and fixtures that exercise the container.
pub mod model;
pub mod repository;
pub use repository::PersonRepository;
