use super::{parse_envelope, BlogClient};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::mapping::map_about;
use crate::types::AboutInfo;
use crate::wire::{Envelope, RawAboutMe};

pub(crate) const ABOUT_FAILED: &str = "failed to fetch about info";

impl BlogClient {
    pub fn build_about(&self) -> HttpRequest {
        HttpRequest::get(self.url("/about-me/public"))
    }

    pub fn parse_about(&self, response: HttpResponse) -> Result<AboutInfo, ApiError> {
        let envelope: Envelope<RawAboutMe> = parse_envelope(response)?;
        match envelope.data {
            Some(raw) if envelope.code == 0 => Ok(map_about(raw)),
            _ => Err(ApiError::backend(envelope.code, None, ABOUT_FAILED)),
        }
    }
}
