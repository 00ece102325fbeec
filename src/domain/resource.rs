use super::Locale;

/// Backend resource a gateway route reads from. Each one carries the single
/// user-facing message returned when fetching it fails, whatever the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Order,
    SalesSummary,
    Dashboard,
    Passthrough,
}

impl Resource {
    pub fn failure_message(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Resource::Order, Locale::Ja) => "注文データの取得に失敗しました",
            (Resource::Order, Locale::En) => "Failed to fetch order data",
            (Resource::SalesSummary, Locale::Ja) => "売上サマリーの取得に失敗しました",
            (Resource::SalesSummary, Locale::En) => "Failed to fetch sales summary",
            (Resource::Dashboard, Locale::Ja) => "ダッシュボードデータの取得に失敗しました",
            (Resource::Dashboard, Locale::En) => "Failed to fetch dashboard data",
            (Resource::Passthrough, Locale::Ja) => "バックエンドへのリクエストに失敗しました",
            (Resource::Passthrough, Locale::En) => "Backend request failed",
        }
    }
}
