pub mod company_profile;
pub mod date_format;
