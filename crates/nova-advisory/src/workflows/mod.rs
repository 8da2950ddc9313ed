pub mod eligibility;
pub mod lifecycle;
pub mod profile;
