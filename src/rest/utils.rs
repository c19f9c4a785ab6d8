/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::person::{Person, PublicPhotosProps};
use crate::rest::photo::Photo;
use crate::rest::session::{Creds, Session};

/// Returns the `count` latest public photos for the named user.
///
/// Convenience wrapper composing [`Session`], [`Person`] and [`Photo`] for
/// the common one-shot case.
pub async fn latest_public_photos(
    api_key: &str,
    username: &str,
    count: u16,
) -> Result<Vec<Photo>, FlickrError> {
    let session = Session::new(Creds::from_key(api_key, None));
    let person = Person::from_username(session, username).await?;
    person
        .public_photos(PublicPhotosProps {
            per_page: Some(count),
            ..Default::default()
        })
        .await
}
