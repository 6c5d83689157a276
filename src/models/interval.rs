/// A named schedule used by the scheduler service
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Interval {
    pub id: String,
    pub name: String,
    pub start: String,
    pub end: String,
    pub interval: String,
    pub created: i64,
    pub modified: i64,
}
