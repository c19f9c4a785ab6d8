/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Flickr
//!
//! This library was created for working with the Flickr REST API interface.
//!
//! For further details on the Rest API refer to the [Flickr API Docs](https://www.flickr.com/services/api/)
//!
//! ## Features
//!
//! - Person lookup by user name or email address
//! - Lazily fetched person profile information (real name, location, photo/profile URLs)
//! - Public photo listings with paging and safe search parameters
//! - Static image URL construction for the standard size variants
//! - Lower level interface for handling the raw communication
//!
//! *Public data only. The secret key issued alongside an API key is held by the
//! [`rest::Session`] but request signing for private data is not implemented.*
//!
//! *If you want to use this library for more than is currently implemented, the
//! [`rest::Session::request`] method is a way to make request/responses in a more
//! direct way*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! flickr = "0.3.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to acquire an API key from Flickr prior to using the API**
//!
//! ```rust
//! use flickr::rest::{Creds, Person, PublicPhotosProps, SafeSearch, Session};
//!
//! async fn print_latest(api_key: &str, username: &str) -> anyhow::Result<()> {
//!     // The API key is obtained from your Flickr account
//!     let session = Session::new(Creds::from_key(api_key, None));
//!
//!     // Look the user up and fetch their profile details
//!     let person = Person::from_username(session, username).await?;
//!     println!("{} is in {}", person.real_name().await?, person.location().await?);
//!
//!     // Retrieve their latest public photos
//!     let photos = person
//!         .public_photos(PublicPhotosProps {
//!             per_page: Some(10),
//!             safe_search: Some(SafeSearch::Safe),
//!             ..Default::default()
//!         })
//!         .await?;
//!     for photo in &photos {
//!         println!("{}: {}", photo.title(), photo.medium_image_url());
//!     }
//!     Ok(())
//! }
//! ```
//!
pub mod rest;
