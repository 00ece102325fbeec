use chrono::NaiveDate;

const BACKEND_DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive date filter. A missing bound is unbounded on that side and is
/// not sent to the backend at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::with_capacity(2);
        if let Some(start) = self.start {
            query.push(("start_date", format_backend_date(start)));
        }
        if let Some(end) = self.end {
            query.push(("end_date", format_backend_date(end)));
        }
        query
    }
}

pub fn format_backend_date(date: NaiveDate) -> String {
    date.format(BACKEND_DATE_FORMAT).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl DashboardPeriod {
    pub fn as_str(&self) -> &str {
        match self {
            DashboardPeriod::Daily => "daily",
            DashboardPeriod::Weekly => "weekly",
            DashboardPeriod::Monthly => "monthly",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "daily" => Some(DashboardPeriod::Daily),
            "weekly" => Some(DashboardPeriod::Weekly),
            "monthly" => Some(DashboardPeriod::Monthly),
            _ => None,
        }
    }
}
