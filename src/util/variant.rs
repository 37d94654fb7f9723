use std::fmt;

// Actorの引数
#[derive(Debug, Clone)]
pub struct Arg {
    pub name: String,
    pub value: Variant,
}

impl Arg {
    pub fn int(name: &str, v: i32) -> Self {
        Self {
            name: name.to_string(),
            value: Variant::Int(v),
        }
    }

    pub fn float(name: &str, v: f32) -> Self {
        Self {
            name: name.to_string(),
            value: Variant::Float(v),
        }
    }

    pub fn bool(name: &str, v: bool) -> Self {
        Self {
            name: name.to_string(),
            value: Variant::Bool(v),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    Int(i32),
    Float(f32),
    Bool(bool),
    String(String),
}

impl Variant {
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    // 自身と同じ型として文字列を解釈
    pub fn parse_as(&self, value: &str) -> Result<Variant, String> {
        Ok(match self {
            Variant::Int(_) => Variant::Int(value.parse::<i32>().map_err(|e| e.to_string())?),
            Variant::Float(_) => Variant::Float(value.parse::<f32>().map_err(|e| e.to_string())?),
            Variant::Bool(_) => Variant::Bool(value.parse::<bool>().map_err(|e| e.to_string())?),
            Variant::String(_) => Variant::String(value.to_string()),
        })
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", v),
            Self::String(v) => write!(f, "{}", v),
        }
    }
}
