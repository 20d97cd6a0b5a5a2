//! Common types used across the dashboard

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Display locale for dates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "de-DE")]
    DeDe,
    #[serde(rename = "iso")]
    Iso,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::DeDe => "de-DE",
            Locale::Iso => "iso",
        }
    }

    /// Short numeric date the way a browser's `toLocaleDateString` renders it
    pub fn format_date(&self, date: NaiveDate) -> String {
        let (y, m, d) = (date.year(), date.month(), date.day());
        match self {
            Locale::EnUs => format!("{}/{}/{}", m, d, y),
            Locale::EnGb => format!("{:02}/{:02}/{}", d, m, y),
            Locale::DeDe => format!("{}.{}.{}", d, m, y),
            Locale::Iso => format!("{}-{:02}-{:02}", y, m, d),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en-us" | "en_us" => Ok(Locale::EnUs),
            "en-gb" | "en_gb" => Ok(Locale::EnGb),
            "de-de" | "de_de" | "de" => Ok(Locale::DeDe),
            "iso" => Ok(Locale::Iso),
            other => Err(format!("Unsupported locale: {}", other)),
        }
    }
}

/// Pagination parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Pagination {
    pub const MAX_PER_PAGE: u32 = 100;

    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// Page clamped to >= 1 and page size to 1..=MAX_PER_PAGE
    pub fn normalized(&self) -> Self {
        Self {
            page: self.page.max(1),
            per_page: self.per_page.clamp(1, Self::MAX_PER_PAGE),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
        }
    }
}

/// Paginated response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationMeta {
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
}
