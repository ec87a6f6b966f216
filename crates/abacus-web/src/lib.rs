//! Interactive front-end for the Abacus calculator.
//!
//! Serves the calculator page at `/` and a JavaScript-free form fallback at
//! `/calculate`. The page's script posts to the JSON endpoints instead; either
//! way every result comes out of the shared `Calculator`.

pub mod pages;
pub mod routes;

pub use pages::{IndexTemplate, Outcome};
pub use routes::router;
