/// 報表呈現設定，CLI 與 TOML 配置都實作這個介面
pub trait ReportSettings {
    fn title(&self) -> &str;
    fn fibonacci_terms(&self) -> u64;
    fn square_limit(&self) -> u64;
    fn pretty_json(&self) -> bool;
}

pub const DEFAULT_TITLE: &str = "Roster Demonstration";
pub const DEFAULT_FIBONACCI_TERMS: u64 = 15;
pub const DEFAULT_SQUARE_LIMIT: u64 = 10;
