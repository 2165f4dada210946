/*!
 * # blockpress - Block markup escaper
 *
 * Prepares the scroll-animation demo post (Gutenberg block markup) for
 * embedding as a single-quoted PHP string inside a JSON string value.
 *
 * ## Pipeline
 *
 * Three passes, always in this order:
 * - `'` becomes `\'`
 * - newlines are removed
 * - `"` becomes `\"`
 *
 * Existing backslashes are not doubled. `escape::audit` reports them
 * instead.
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `content`: The built-in block markup
 * - `escape`: The escaping passes, stage capture and hazard audit
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod content;
pub mod errors;
pub mod escape;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use content::SCROLL_BLOCK_CONTENT;
pub use errors::AppError;
pub use escape::{Hazard, Stages, audit, escape_double, escape_single, flatten, transform};
