use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct IntervalData {
    pub from: String,
    pub to: String,
    pub from_label: String,
    pub to_label: String,
    pub inverted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionRow {
    pub key: String,
    pub reference: Option<String>,
    pub title: String,
    pub status_line: String,
    pub recipient: String,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: String,
    pub amount_display: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionsData {
    pub source: String,
    pub heading: String,
    pub subtitle: String,
    pub count: usize,
    pub total: usize,
    pub is_filtered: bool,
    pub badge_count: Option<usize>,
    pub empty_state: Option<String>,
    pub preset: Option<String>,
    pub interval: Option<IntervalData>,
    pub statuses: Vec<String>,
    pub status_selection: String,
    pub time_zone: String,
    pub rows: Vec<TransactionRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PresetData {
    pub preset: String,
    pub label: String,
    pub today: String,
    pub interval: IntervalData,
    pub day_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WalletCardRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WalletData {
    pub source: String,
    pub available_balance: String,
    pub cards: Vec<WalletCardRow>,
}
