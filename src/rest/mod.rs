/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod errors;
mod parsers;
pub mod person;
pub mod photo;
pub mod session;
pub mod transport;
pub mod utils;

pub use errors::*;
pub use person::*;
pub use photo::*;
pub use session::*;
pub use transport::*;
pub use utils::*;

/// Root Flickr REST API endpoint
pub const REST_ENDPOINT: &str = "http://api.flickr.com/services/rest/";
