pub mod api_status;
pub mod lat_lng;
pub mod place;
pub mod place_details;
pub mod prediction;
