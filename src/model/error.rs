use super::*;

// [ActionError]
// アクションを適用できなかった理由. 状態は一切変更されない.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ActionError {
    // 現在のフェーズまたは座席では実行できないアクション
    Illegal(String),
    // 指定された牌が手牌にない
    TileNotHeld(TileId),
    // 麻雀のルールに反するアクション (聴牌していない, 牌が揃っていないなど)
    Rule(String),
}

impl ActionError {
    pub fn illegal(reason: &str) -> Self {
        Self::Illegal(reason.to_string())
    }

    pub fn rule(reason: &str) -> Self {
        Self::Rule(reason.to_string())
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::Illegal(reason) => write!(f, "illegal action: {}", reason),
            ActionError::TileNotHeld(id) => write!(f, "tile not held: {}", id),
            ActionError::Rule(reason) => write!(f, "rule violation: {}", reason),
        }
    }
}

impl std::error::Error for ActionError {}

// [ParseError]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub input: String,
    pub message: String,
}

impl ParseError {
    pub fn new(input: &str, message: &str) -> Self {
        Self {
            input: input.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error on '{}': {}", self.input, self.message)
    }
}

impl std::error::Error for ParseError {}
