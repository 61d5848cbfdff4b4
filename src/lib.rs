//! `gridfetch` - Coordinate-table ASCII art renderer
//!
//! Fetches a published HTML document, extracts the first table of
//! `(x, glyph, y)` rows, and plots the points on a character grid with
//! Cartesian orientation (greatest y on the first output line).
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use gridfetch::{decode_points, extract_rows, render, FetchClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = FetchClient::new(Duration::from_secs(30))?;
//!     let markup = client.fetch_text("https://example.com/doc").await?;
//!     let points = decode_points(&extract_rows(&markup));
//!     if let Some(art) = render(&points) {
//!         println!("{art}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod decode;
pub mod error;
pub mod extract;
pub mod grid;
pub mod http_client;

pub use decode::{decode_points, Point};
pub use error::FetchError;
pub use extract::extract_rows;
pub use grid::render;
pub use http_client::FetchClient;

/// Version of gridfetch
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
