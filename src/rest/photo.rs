/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::parsers::from_truthy;
use crate::rest::person::Person;
use serde::Deserialize;
use strum_macros::IntoStaticStr;

/// Image size variants Flickr derives from an upload.
///
/// Each variant maps to the suffix used in the static image URL naming
/// scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum ImageSize {
    /// 75 pixels by 75 pixels
    #[strum(to_string = "_s")]
    SmallSquare,

    /// 100 pixels on the longest side
    #[strum(to_string = "_t")]
    Thumbnail,

    /// 240 pixels on the longest side
    #[strum(to_string = "_m")]
    Small,

    /// 500 pixels on the longest side
    #[strum(to_string = "")]
    Medium,
}

/// Holds information returned for one entry of a photo listing.
///
/// Produced by [`Person::public_photos`]; the data fields are immutable
/// after construction.
#[derive(Deserialize, Debug, Clone)]
pub struct Photo {
    #[serde(skip)]
    owner: Option<Person>,

    id: String,

    title: String,

    farm: u64,

    server: String,

    secret: String,

    #[serde(rename = "ispublic", deserialize_with = "from_truthy")]
    is_public: bool,

    #[serde(rename = "isfriend", deserialize_with = "from_truthy")]
    is_friend: bool,

    #[serde(rename = "isfamily", deserialize_with = "from_truthy")]
    is_family: bool,
}

impl Photo {
    /// Returns the id for the photo
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the title of the photo
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Indicates whether the photo is visible to everyone
    pub fn is_public(&self) -> bool {
        self.is_public
    }

    /// Indicates whether the photo can only be seen by friends
    pub fn is_friend(&self) -> bool {
        self.is_friend
    }

    /// Indicates whether the photo can only be seen by family
    pub fn is_family(&self) -> bool {
        self.is_family
    }

    /// Sets the owner of the photo. The listing call that produced the photo
    /// is expected to be the only caller, exactly once per instance.
    pub fn set_owner(&mut self, person: Person) {
        self.owner = Some(person);
    }

    /// Returns the owner of the photo, if one has been assigned
    pub fn owner(&self) -> Option<&Person> {
        self.owner.as_ref()
    }

    /// Returns the static image URL for the requested size variant
    pub fn image_url(&self, size: ImageSize) -> String {
        let suffix: &str = size.into();
        format!(
            "http://farm{}.static.flickr.com/{}/{}_{}{}.jpg",
            self.farm, self.server, self.id, self.secret, suffix
        )
    }

    /// Returns the URL for the 75x75 pixel version of the image
    pub fn small_square_image_url(&self) -> String {
        self.image_url(ImageSize::SmallSquare)
    }

    /// Returns the URL for the thumbnail version of the image
    pub fn thumbnail_image_url(&self) -> String {
        self.image_url(ImageSize::Thumbnail)
    }

    /// Returns the URL for the small version of the image
    pub fn small_image_url(&self) -> String {
        self.image_url(ImageSize::Small)
    }

    /// Returns the URL for the medium version of the image
    pub fn medium_image_url(&self) -> String {
        self.image_url(ImageSize::Medium)
    }

    /// Returns the URL for the photo's web page. This is the Flickr page on
    /// which the image and its details are displayed. Requires the owner to
    /// have been assigned.
    pub fn page_url(&self) -> Result<String, FlickrError> {
        let owner = self.owner.as_ref().ok_or(FlickrError::OwnerNotSet())?;
        Ok(format!(
            "http://www.flickr.com/photos/{}/{}",
            owner.id(),
            self.id
        ))
    }
}

impl std::fmt::Display for Photo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "title: {}, id: {}", self.title, self.id)
    }
}
