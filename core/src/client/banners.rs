use super::{parse_list, BlogClient};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::mapping::map_banner;
use crate::types::Banner;

impl BlogClient {
    pub fn build_banners(&self) -> HttpRequest {
        HttpRequest::get(self.url("/carousels/public/enabled"))
    }

    pub fn parse_banners(&self, response: HttpResponse) -> Result<Vec<Banner>, ApiError> {
        parse_list(response, "carousels/public/enabled", map_banner)
    }
}
