//! OAuth 스코프 집합
//!
//! 와이어 인코딩을 위해 입력 순서를 보존하지만 의미상으로는 집합입니다.
//! 중복은 제거되고, 비교 시 순서는 무시됩니다.
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::{AppResult, CredentialError};

/// 비어 있지 않은 스코프 집합
///
/// 허용 목록 검증은 하지 않습니다. 어떤 스코프를 요청할지는 호출자가 결정하며,
/// 인증 서버가 최종적으로 판단합니다.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ScopeSet(Vec<String>);

impl ScopeSet {
    /// 스코프 목록으로부터 집합을 만듭니다.
    ///
    /// # Errors
    ///
    /// * `CredentialError::Validation` - 목록이 비었거나, 빈 스코프 또는 공백을 포함한 스코프가 있는 경우
    pub fn new<I, S>(scopes: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for scope in scopes {
            let scope = scope.into();
            if scope.is_empty() || scope.chars().any(char::is_whitespace) {
                return Err(CredentialError::Validation(format!("invalid scope: {:?}", scope)));
            }
            if !unique.contains(&scope) {
                unique.push(scope);
            }
        }

        if unique.is_empty() {
            return Err(CredentialError::Validation("scope set must not be empty".to_string()));
        }

        Ok(Self(unique))
    }

    /// 공백으로 구분된 스코프 문자열을 파싱합니다. (`"data:read data:write"`)
    pub fn parse(s: &str) -> AppResult<Self> {
        Self::new(s.split_whitespace())
    }

    /// form 본문에 들어갈 공백 구분 문자열
    pub fn to_wire(&self) -> String {
        self.0.join(" ")
    }

    pub fn contains(&self, scope: &str) -> bool {
        self.0.iter().any(|s| s == scope)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 항상 `false` (빈 집합은 생성할 수 없음)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for ScopeSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|s| other.contains(s))
    }
}

impl Eq for ScopeSet {}

impl FromStr for ScopeSet {
    type Err = CredentialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ScopeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}
