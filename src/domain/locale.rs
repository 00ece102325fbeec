#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &str {
        match self {
            Locale::Ja => "ja",
            Locale::En => "en",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ja" | "ja-jp" | "ja_jp" => Some(Locale::Ja),
            "en" | "en-us" | "en_us" | "en-gb" | "en_gb" => Some(Locale::En),
            _ => None,
        }
    }

    pub fn invalid_date(&self, param: &str) -> String {
        match self {
            Locale::Ja => format!("{} の日付形式が正しくありません", param),
            Locale::En => format!("Invalid date format for {}", param),
        }
    }

    pub fn unknown_dashboard_period(&self, period: &str) -> String {
        match self {
            Locale::Ja => format!("不明なダッシュボード期間です: {}", period),
            Locale::En => format!("Unknown dashboard period: {}", period),
        }
    }

    pub fn payload_too_large(&self) -> &'static str {
        match self {
            Locale::Ja => "リクエストボディが大きすぎます",
            Locale::En => "Request body is too large",
        }
    }

    pub fn unreadable_body(&self) -> &'static str {
        match self {
            Locale::Ja => "リクエストボディを読み取れませんでした",
            Locale::En => "Failed to read request body",
        }
    }

    pub fn invalid_path(&self) -> &'static str {
        match self {
            Locale::Ja => "リクエストパスが正しくありません",
            Locale::En => "Invalid request path",
        }
    }
}
