/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::parsers::from_content;
use crate::rest::photo::Photo;
use crate::rest::session::Session;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::Deserialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Content filtering levels accepted by the photo listing call
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum SafeSearch {
    Safe = 1,
    Moderate = 2,
    Restricted = 3,
}

/// Optional parameters for [`Person::public_photos`].
///
/// Only the fields that are set are sent to the service. `extras` is a comma
/// separated list of extra response fields understood by the service.
#[derive(Default, Debug, Clone)]
pub struct PublicPhotosProps {
    pub per_page: Option<u16>,
    pub page: Option<u16>,
    pub safe_search: Option<SafeSearch>,
    pub extras: Option<String>,
}

/// A Flickr person i.e. user account.
///
/// Cannot be constructed directly; use [`Person::from_username`] or
/// [`Person::from_email`]. The extended profile fields are fetched from the
/// service on first access and kept for the lifetime of the instance.
#[derive(Debug, Clone)]
pub struct Person {
    inner: Arc<PersonInner>,
}

#[derive(Debug)]
struct PersonInner {
    session: Session,
    user_id: String,
    username: String,
    info: Mutex<Option<PersonInfo>>,
}

impl Person {
    /// Returns the person identified by the given email address
    pub async fn from_email(session: Session, email: &str) -> Result<Self, FlickrError> {
        let resp = session
            .request::<FindUserResponse>("flickr.people.findByEmail", &[("find_email", email)])
            .await?;
        Ok(Self::new(session, resp.user.nsid, resp.user.username))
    }

    /// Returns the person identified by the given user name
    pub async fn from_username(session: Session, username: &str) -> Result<Self, FlickrError> {
        let resp = session
            .request::<FindUserResponse>("flickr.people.findByUsername", &[("username", username)])
            .await?;
        Ok(Self::new(session, resp.user.nsid, resp.user.username))
    }

    pub(crate) fn new(session: Session, user_id: String, username: String) -> Self {
        Self {
            inner: Arc::new(PersonInner {
                session,
                user_id,
                username,
                info: Mutex::new(None),
            }),
        }
    }

    /// Returns the id for the person
    pub fn id(&self) -> &str {
        &self.inner.user_id
    }

    /// Returns the user name for the person
    pub fn username(&self) -> &str {
        &self.inner.username
    }

    /// Returns the real name for the person
    pub async fn real_name(&self) -> Result<String, FlickrError> {
        Ok(self.info().await?.real_name)
    }

    /// Returns the person's registered geographical location
    pub async fn location(&self) -> Result<String, FlickrError> {
        Ok(self.info().await?.location)
    }

    /// Returns the URL of the person's photos page
    pub async fn photos_url(&self) -> Result<String, FlickrError> {
        Ok(self.info().await?.photos_url)
    }

    /// Returns the URL of the person's profile page
    pub async fn profile_url(&self) -> Result<String, FlickrError> {
        Ok(self.info().await?.profile_url)
    }

    /// Returns the person's public photos in the order the service lists
    /// them, each with this person assigned as its owner
    pub async fn public_photos(
        &self,
        props: PublicPhotosProps,
    ) -> Result<Vec<Photo>, FlickrError> {
        let per_page = props.per_page.map(|v| v.to_string());
        let page = props.page.map(|v| v.to_string());
        let safe_search = props.safe_search.map(|v| u8::from(v).to_string());

        // Build up the query parameters
        let mut params: Vec<(&str, &str)> = vec![("user_id", self.inner.user_id.as_str())];
        if let Some(v) = per_page.as_deref() {
            params.push(("per_page", v));
        }
        if let Some(v) = page.as_deref() {
            params.push(("page", v));
        }
        if let Some(v) = safe_search.as_deref() {
            params.push(("safe_search", v));
        }
        if let Some(v) = props.extras.as_deref() {
            params.push(("extras", v));
        }

        let resp = self
            .inner
            .session
            .request::<PublicPhotosResponse>("flickr.people.getPublicPhotos", &params)
            .await?;
        Ok(resp
            .photos
            .photo
            .into_iter()
            .map(|mut photo| {
                photo.set_owner(self.clone());
                photo
            })
            .collect())
    }

    // Fetches the extended profile fields if they are not already held.
    // A failed fetch leaves the group unpopulated so the next access
    // retries the call.
    async fn info(&self) -> Result<PersonInfo, FlickrError> {
        if let Some(info) = self.info_lock().clone() {
            return Ok(info);
        }
        let resp = self
            .inner
            .session
            .request::<GetInfoResponse>(
                "flickr.people.getInfo",
                &[("user_id", self.inner.user_id.as_str())],
            )
            .await?;
        *self.info_lock() = Some(resp.person.clone());
        Ok(resp.person)
    }

    fn info_lock(&self) -> MutexGuard<'_, Option<PersonInfo>> {
        self.inner
            .info
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.inner.user_id == other.inner.user_id
    }
}
impl Eq for Person {}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "name: {}, id: {}", self.inner.username, self.inner.user_id)
    }
}

// The lazily fetched profile fields. Populated together or not at all.
#[derive(Deserialize, Debug, Clone)]
struct PersonInfo {
    #[serde(default, rename = "realname", deserialize_with = "from_content")]
    real_name: String,

    #[serde(default, rename = "location", deserialize_with = "from_content")]
    location: String,

    #[serde(default, rename = "photosurl", deserialize_with = "from_content")]
    photos_url: String,

    #[serde(default, rename = "profileurl", deserialize_with = "from_content")]
    profile_url: String,
}

// Expected response from the findByEmail/findByUsername requests
#[derive(Deserialize, Debug)]
struct FindUserResponse {
    user: FoundUser,
}

#[derive(Deserialize, Debug)]
struct FoundUser {
    nsid: String,

    #[serde(deserialize_with = "from_content")]
    username: String,
}

// Expected response from a getInfo request
#[derive(Deserialize, Debug)]
struct GetInfoResponse {
    person: PersonInfo,
}

// Expected response from a getPublicPhotos request
#[derive(Deserialize, Debug)]
struct PublicPhotosResponse {
    photos: PhotoList,
}

#[derive(Deserialize, Debug)]
struct PhotoList {
    photo: Vec<Photo>,
}
